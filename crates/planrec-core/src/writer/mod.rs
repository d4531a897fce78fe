//! Numbered persistence of plans.
//!
//! [`PlanWriter`] formats a plan through [`PlanFile`], writes it to
//! `<base>` or `<base>.<N>` and echoes every step with its cost to a console
//! sink. The counter of written plans only moves forward, once per successful
//! save.

#[cfg(test)]
mod tests;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    display::{EchoLine, PlanFile},
    error::{PlanRecError, Result},
    models::{ActionCatalog, Plan, PlanCost},
};

/// Output name used when the caller does not configure one.
pub const DEFAULT_PLAN_FILENAME: &str = "sas_plan";

/// Outcome of a successful [`PlanWriter::save_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPlan {
    /// File the plan was written to
    pub path: PathBuf,
    /// 1-based sequence number of this plan in the run
    pub number: usize,
    /// Number of steps in the plan
    pub length: usize,
    pub cost: PlanCost,
}

/// Writes plans to sequentially numbered files.
#[derive(Debug, Clone)]
pub struct PlanWriter {
    base_filename: PathBuf,
    plans_written: usize,
    multi_file_mode: bool,
}

impl PlanWriter {
    /// Creates a writer targeting [`DEFAULT_PLAN_FILENAME`] in single-file mode.
    pub fn new() -> Self {
        Self {
            base_filename: PathBuf::from(DEFAULT_PLAN_FILENAME),
            plans_written: 0,
            multi_file_mode: false,
        }
    }

    /// Sets the output base name. No I/O is performed.
    pub fn configure(&mut self, base_filename: impl AsRef<Path>) {
        self.base_filename = base_filename.as_ref().to_path_buf();
    }

    /// Enables the `.N` suffix, required whenever more than one plan may be
    /// saved during the run.
    pub fn set_multi_file_mode(&mut self, enabled: bool) {
        self.multi_file_mode = enabled;
    }

    /// Seeds the counter with plans written by earlier invocations.
    ///
    /// Must be called before the first [`save_plan`](Self::save_plan).
    pub fn set_previously_written(&mut self, n: usize) {
        self.plans_written = n;
    }

    pub fn base_filename(&self) -> &Path {
        &self.base_filename
    }

    pub fn plans_written(&self) -> usize {
        self.plans_written
    }

    pub fn is_multi_file_mode(&self) -> bool {
        self.multi_file_mode
    }

    /// File name the next saved plan will be written to.
    pub fn next_plan_path(&self) -> PathBuf {
        self.plan_path(self.plans_written + 1)
    }

    fn plan_path(&self, plan_number: usize) -> PathBuf {
        if !self.multi_file_mode {
            return self.base_filename.clone();
        }
        let mut name = self.base_filename.clone().into_os_string();
        name.push(format!(".{plan_number}"));
        PathBuf::from(name)
    }

    /// Saves `plan`, echoing each step to stdout.
    ///
    /// # Errors
    ///
    /// Returns `PlanRecError::OutputIo` if the plan file cannot be opened or
    /// written. The counter is left unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics if multi-file mode is off and a plan has already been written.
    pub fn save_plan<C>(&mut self, plan: &Plan, catalog: &C) -> Result<SavedPlan>
    where
        C: ActionCatalog + ?Sized,
    {
        let stdout = io::stdout();
        self.save_plan_to(plan, catalog, &mut stdout.lock())
    }

    /// Saves `plan`, echoing each step to `echo` as `<name> (<cost>)`.
    ///
    /// Echo failures are ignored; only the plan file decides success.
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
        let plan_number = self.plans_written + 1;
        assert!(
            self.multi_file_mode || plan_number == 1,
            "single plan file mode allows only one saved plan, but plan {plan_number} was requested"
        );

        let path = self.plan_path(plan_number);
        debug!("Writing plan {} to {}", plan_number, path.display());

        let file = File::create(&path).map_err(|e| PlanRecError::output_io(&path, e))?;
        let mut out = BufWriter::new(file);

        for id in plan.iter() {
            let _ = writeln!(echo, "{}", EchoLine::new(id, catalog));
        }

        let contents = PlanFile::new(plan, catalog);
        write!(out, "{contents}")
            .and_then(|()| out.flush())
            .map_err(|e| PlanRecError::output_io(&path, e))?;

        let cost = contents.cost();
        info!("Plan length: {} step(s).", plan.len());
        info!("Plan cost: {}", cost.cost);

        self.plans_written = plan_number;

        Ok(SavedPlan {
            path,
            number: plan_number,
            length: plan.len(),
            cost,
        })
    }
}

impl Default for PlanWriter {
    fn default() -> Self {
        Self::new()
    }
}
