use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use planrec_core::{PlanManagerBuilder, DEFAULT_PLAN_FILENAME};

/// Save planner output and inspect failed-plan traces
///
/// Plans are written as `(operator name)` lines followed by a cost comment,
/// either to a single plan file or to sequentially numbered files. Failed-plan
/// trace files are parsed strictly and reported as markdown or JSON.
#[derive(Parser)]
#[command(version, about, name = "planrec")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Save one or more plans to plan files
    #[command(alias = "s")]
    Save(SaveArgs),
    /// Print the cost of a plan without saving it
    #[command(alias = "c")]
    Cost(CostArgs),
    /// Parse and display a failed-plans trace file
    #[command(alias = "f")]
    FailedPlans(FailedPlansArgs),
}

/// Save plans
///
/// Each `--plan` file lists one operator name per line, optionally wrapped in
/// parentheses. Blank lines and `;` comment lines are skipped, so a saved plan
/// file can be passed back in.
#[derive(ClapArgs)]
pub struct SaveArgs {
    /// JSON operator catalog: {"operators": [{"name": "...", "cost": 1}, ...]}
    #[arg(long)]
    pub catalog: PathBuf,

    /// Plan to save; repeat to save several plans in order
    #[arg(long = "plan", required = true)]
    pub plans: Vec<PathBuf>,

    /// Base name of the plan output file
    #[arg(long, default_value = DEFAULT_PLAN_FILENAME)]
    pub plan_file: PathBuf,

    /// Number the output files (<plan-file>.1, <plan-file>.2, ...)
    #[arg(long)]
    pub multiple: bool,

    /// Running inside an anytime portfolio; implies numbered output files
    #[arg(long)]
    pub anytime: bool,

    /// Plans already written by earlier runs; numbering continues after them
    #[arg(long, default_value_t = 0)]
    pub previously_generated: usize,

    /// Failed-plans trace to validate before saving
    #[arg(long)]
    pub failed_plans: Option<PathBuf>,
}

impl From<&SaveArgs> for PlanManagerBuilder {
    fn from(val: &SaveArgs) -> Self {
        PlanManagerBuilder::new()
            .with_plan_filename(&val.plan_file)
            .with_failed_plans_file(val.failed_plans.as_ref())
            .with_previously_generated(val.previously_generated)
            .with_multiple_plan_files(val.multiple)
            .with_anytime_portfolio(val.anytime)
    }
}

/// Compute a plan's cost
#[derive(ClapArgs)]
pub struct CostArgs {
    /// JSON operator catalog
    #[arg(long)]
    pub catalog: PathBuf,

    /// Plan file listing operator names
    #[arg(long)]
    pub plan: PathBuf,
}

/// Display failed-plan traces
#[derive(ClapArgs)]
pub struct FailedPlansArgs {
    /// Failed-plans trace file
    pub file: PathBuf,

    /// Print the parsed traces as JSON
    #[arg(long)]
    pub json: bool,
}
