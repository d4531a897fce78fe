//! Builder for creating and configuring PlanManager instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::PlanManager;
use crate::{
    error::Result,
    models::FailedPlanStore,
    trace::read_failed_plans,
    writer::{PlanWriter, DEFAULT_PLAN_FILENAME},
};

/// Builder for creating and configuring PlanManager instances.
#[derive(Debug, Clone)]
pub struct PlanManagerBuilder {
    plan_filename: PathBuf,
    failed_plans_file: Option<PathBuf>,
    previously_generated: usize,
    multiple_plan_files: bool,
    anytime_portfolio: bool,
}

impl PlanManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            plan_filename: PathBuf::from(DEFAULT_PLAN_FILENAME),
            failed_plans_file: None,
            previously_generated: 0,
            multiple_plan_files: false,
            anytime_portfolio: false,
        }
    }

    /// Sets the base name of saved plan files. Defaults to `sas_plan`.
    pub fn with_plan_filename<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.plan_filename = path.as_ref().to_path_buf();
        self
    }

    /// Sets the failed-plans trace to parse on `build()`.
    ///
    /// `None` or an empty path leaves the trace store empty.
    pub fn with_failed_plans_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.failed_plans_file = path
            .map(|p| p.as_ref().to_path_buf())
            .filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Number of plans earlier invocations already wrote.
    pub fn with_previously_generated(mut self, n: usize) -> Self {
        self.previously_generated = n;
        self
    }

    /// The caller asked for more than one plan.
    pub fn with_multiple_plan_files(mut self, enabled: bool) -> Self {
        self.multiple_plan_files = enabled;
        self
    }

    /// The search runs inside an anytime portfolio and may emit several plans.
    pub fn with_anytime_portfolio(mut self, enabled: bool) -> Self {
        self.anytime_portfolio = enabled;
        self
    }

    /// Builds the configured manager, parsing the failed-plans file if set.
    ///
    /// # Errors
    ///
    /// Returns `PlanRecError::TraceFormat` if the trace file cannot be read or
    /// is malformed.
    pub fn build(self) -> Result<PlanManager> {
        let mut writer = PlanWriter::new();
        writer.configure(&self.plan_filename);
        writer.set_multi_file_mode(self.multiple_plan_files || self.anytime_portfolio);
        writer.set_previously_written(self.previously_generated);

        let failed_plans = match &self.failed_plans_file {
            Some(path) => read_failed_plans(path)?,
            None => FailedPlanStore::default(),
        };

        debug!(
            "Plan manager ready: base {}, multi-file {}, {} previous plan(s)",
            writer.base_filename().display(),
            writer.is_multi_file_mode(),
            writer.plans_written()
        );

        Ok(PlanManager::new(
            writer,
            self.failed_plans_file,
            failed_plans,
        ))
    }
}

impl Default for PlanManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
