//! Command handlers for the planrec binary.

use anyhow::{bail, Context, Result};
use log::info;
use planrec_core::{plan_cost, read_failed_plans, PlanManagerBuilder, PlanRecError, TraceSummary};

use crate::{
    args::{CostArgs, FailedPlansArgs, SaveArgs},
    catalog::{load_catalog, load_plan},
    renderer::TerminalRenderer,
};

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Saves every `--plan` in order through one plan manager.
    pub fn save(&self, args: SaveArgs) -> Result<()> {
        if args.plans.len() > 1 && !(args.multiple || args.anytime) {
            bail!("Saving more than one plan requires --multiple or --anytime");
        }

        let table = load_catalog(&args.catalog)?;
        let plans = args
            .plans
            .iter()
            .map(|path| load_plan(path, &table))
            .collect::<Result<Vec<_>>>()?;

        let mut manager = PlanManagerBuilder::from(&args).build()?;
        if let Some(path) = manager.failed_plans_filename() {
            info!(
                "Loaded {} failed plan(s) from {}",
                manager.failed_plans().len(),
                path.display()
            );
        }

        for plan in &plans {
            let saved = manager
                .save_plan(plan, &table)
                .with_context(|| format!("Failed to save plan {}", manager.plans_written() + 1))?;
            println!(
                "Saved plan {} to {} ({} step(s), cost {} ({}))",
                saved.number,
                saved.path.display(),
                saved.length,
                saved.cost.cost,
                saved.cost.kind
            );
        }
        Ok(())
    }

    pub fn cost(&self, args: CostArgs) -> Result<()> {
        let table = load_catalog(&args.catalog)?;
        let plan = load_plan(&args.plan, &table)?;
        let cost = plan_cost(&plan, &table);
        println!("Plan length: {} step(s).", plan.len());
        println!("Plan cost: {} ({})", cost.cost, cost.kind);
        Ok(())
    }

    pub fn failed_plans(&self, args: FailedPlansArgs) -> Result<()> {
        let store = read_failed_plans(&args.file).map_err(PlanRecError::from)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&store)?);
            return Ok(());
        }
        self.renderer.render(&TraceSummary(&store).to_string())
    }
}
