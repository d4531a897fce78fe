//! Core library for recording planner output.
//!
//! This crate keeps the textual records a planning search produces and
//! consumes:
//!
//! - **Plan files**: every plan a search finds is written as `(name)` lines
//!   followed by a `; cost = …` comment, to `sas_plan` or to sequentially
//!   numbered `sas_plan.N` files ([`writer`])
//! - **Failed-plan traces**: a line-oriented file of earlier unsuccessful
//!   attempts, each marking the stage at which it failed, parsed strictly
//!   into a read-only [`FailedPlanStore`] ([`trace`])
//!
//! The search itself and the task model stay outside the crate; plans refer
//! to operators through [`OperatorId`] handles resolved by an
//! [`ActionCatalog`].
//!
//! # Quick Start
//!
//! ```rust
//! use planrec_core::{
//!     calculate_plan_cost, parse_failed_plans,
//!     models::{Operator, OperatorTable},
//! };
//!
//! let table = OperatorTable::new(vec![
//!     Operator::new("fly p1 c1 c2", 3),
//!     Operator::new("debark p1 c2", 1),
//! ]);
//! let plan = table.resolve_plan(["fly p1 c1 c2", "debark p1 c2"]).unwrap();
//! assert_eq!(calculate_plan_cost(&plan, &table), 4);
//!
//! let traces = parse_failed_plans("(fly p1 c1 c2%%%)\n=====\n").unwrap();
//! assert_eq!(traces.len(), 2);
//! assert_eq!(traces[0].failing_entry(), Some("fly p1 c1 c2"));
//! ```

pub mod cost;
pub mod display;
pub mod error;
pub mod manager;
pub mod models;
pub mod trace;
pub mod writer;

// Re-export commonly used types
pub use cost::{calculate_plan_cost, plan_cost};
pub use display::{PlanFile, TraceSummary};
pub use error::{PlanRecError, Result, TraceFormatError, SEARCH_INPUT_ERROR};
pub use manager::{PlanManager, PlanManagerBuilder};
pub use models::{
    ActionCatalog, CostKind, FailedPlanRecord, FailedPlanStore, Operator, OperatorId,
    OperatorTable, Plan, PlanCost,
};
pub use trace::{parse_failed_plans, read_failed_plans};
pub use writer::{PlanWriter, SavedPlan, DEFAULT_PLAN_FILENAME};
