//! High-level API tying plan output and failed-plan traces together.
//!
//! A search configures one [`PlanManager`] up front through
//! [`PlanManagerBuilder`], then hands it every plan it finds. The failed-plan
//! traces, if a trace file was configured, are parsed during `build()` and
//! stay available read-only for the rest of the run.
//!
//! ```text
//! ┌────────────────────┐  build()  ┌───────────────┐  save_plan()  ┌──────────────┐
//! │ PlanManagerBuilder │──────────▶│  PlanManager  │──────────────▶│ sas_plan[.N] │
//! └────────────────────┘  parses   │  PlanWriter   │               └──────────────┘
//!                         traces   │  traces       │──▶ failed_plans()
//!                                  └───────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use planrec_core::{
//!     models::{Operator, OperatorTable},
//!     PlanManagerBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut manager = PlanManagerBuilder::new()
//!     .with_plan_filename("out/sas_plan")
//!     .with_failed_plans_file(Some("failed_plans"))
//!     .with_anytime_portfolio(true)
//!     .build()?;
//!
//! for record in manager.failed_plans() {
//!     println!("failed at {:?}", record.failing_entry());
//! }
//!
//! let table = OperatorTable::new(vec![Operator::new("noop", 1)]);
//! let plan = table.resolve_plan(["noop"])?;
//! let saved = manager.save_plan(&plan, &table)?;
//! assert_eq!(saved.number, 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

pub use builder::PlanManagerBuilder;

use crate::{
    error::Result,
    models::{ActionCatalog, FailedPlanStore, Plan},
    trace::read_failed_plans,
    writer::{PlanWriter, SavedPlan},
};

/// Owns the plan writer and the parsed failed-plan traces of one run.
#[derive(Debug, Clone)]
pub struct PlanManager {
    writer: PlanWriter,
    failed_plans_filename: Option<PathBuf>,
    failed_plans: FailedPlanStore,
}

impl PlanManager {
    pub(crate) fn new(
        writer: PlanWriter,
        failed_plans_filename: Option<PathBuf>,
        failed_plans: FailedPlanStore,
    ) -> Self {
        Self {
            writer,
            failed_plans_filename,
            failed_plans,
        }
    }

    /// Shorthand for [`PlanManagerBuilder::new`].
    pub fn builder() -> PlanManagerBuilder {
        PlanManagerBuilder::new()
    }

    /// Saves a plan, echoing its steps to stdout.
    ///
    /// See [`PlanWriter::save_plan`] for errors and panics.
    pub fn save_plan<C>(&mut self, plan: &Plan, catalog: &C) -> Result<SavedPlan>
    where
        C: ActionCatalog + ?Sized,
    {
        self.writer.save_plan(plan, catalog)
    }

    /// Saves a plan, echoing its steps to `echo`.
    pub fn save_plan_to<C, W>(
        &mut self,
        plan: &Plan,
        catalog: &C,
        echo: &mut W,
    ) -> Result<SavedPlan>
    where
        C: ActionCatalog + ?Sized,
        W: Write + ?Sized,
    {
        self.writer.save_plan_to(plan, catalog, echo)
    }

    /// Points the manager at a new failed-plans file and parses it eagerly.
    ///
    /// An empty path means "no trace file"; nothing is parsed and the current
    /// traces are kept. On error the previous configuration is left intact.
    pub fn set_failed_plans_filename(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            debug!("No failed plans file configured");
            self.failed_plans_filename = None;
            return Ok(());
        }

        self.failed_plans = read_failed_plans(path)?;
        self.failed_plans_filename = Some(path.to_path_buf());
        Ok(())
    }

    /// Parsed traces; empty if no failed-plans file was configured.
    pub fn failed_plans(&self) -> &FailedPlanStore {
        &self.failed_plans
    }

    pub fn failed_plans_filename(&self) -> Option<&Path> {
        self.failed_plans_filename.as_deref()
    }

    pub fn plans_written(&self) -> usize {
        self.writer.plans_written()
    }

    pub fn writer(&self) -> &PlanWriter {
        &self.writer
    }
}
