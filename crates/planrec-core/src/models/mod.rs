//! Data models for plans, operator catalogs and failed-plan traces.
//!
//! This module contains the value types shared by the plan writer and the
//! failed-plan trace parser. Formatting of these models lives in
//! [`crate::display`] so that the on-disk formats stay in one place.
//!
//! # Overview
//!
//! - [`Plan`]: an ordered sequence of [`OperatorId`] handles produced by a
//!   search
//! - [`ActionCatalog`]: the read-only view of a task's operators (name and
//!   cost per id, plus the task-wide unit-cost classification)
//! - [`OperatorTable`]: an in-memory catalog that can be deserialized from
//!   JSON
//! - [`PlanCost`] / [`CostKind`]: the accounted cost of a plan
//! - [`FailedPlanRecord`] / [`FailedPlanStore`]: parsed failed-plan traces
//!
//! # Examples
//!
//! ```rust
//! use planrec_core::models::{ActionCatalog, Operator, OperatorTable, Plan};
//!
//! let table = OperatorTable::new(vec![
//!     Operator::new("pick ball1 rooma left", 1),
//!     Operator::new("move rooma roomb", 1),
//! ]);
//! let plan: Plan = table.resolve_plan(["move rooma roomb"]).unwrap();
//! assert_eq!(plan.len(), 1);
//! assert!(table.is_unit_cost());
//! ```

pub mod catalog;
pub mod cost;
pub mod plan;
pub mod trace;


pub use catalog::{ActionCatalog, Operator, OperatorTable, UnknownOperator};
pub use cost::{CostKind, PlanCost};
pub use plan::{OperatorId, Plan};
pub use trace::{FailedPlanRecord, FailedPlanStore};
