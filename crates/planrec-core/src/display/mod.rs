//! Display wrappers for plan files and failed-plan traces.
//!
//! Every textual format the crate produces is rendered through
//! [`std::fmt::Display`] here, so the writer only has to move bytes and the
//! exact output can be checked without touching the file system.
//!
//! ## Module Organization
//!
//! - [`plan_file`]: the saved plan format (`(name)` lines plus a cost
//!   comment) and the per-step console echo
//! - [`traces`]: the failed-plans trace format and a markdown summary for
//!   terminals
//!
//! ## Usage Examples
//!
//! ```rust
//! use planrec_core::{
//!     display::PlanFile,
//!     models::{Operator, OperatorTable},
//! };
//!
//! let table = OperatorTable::new(vec![Operator::new("board p1 l0", 1)]);
//! let plan = table.resolve_plan(["board p1 l0"]).unwrap();
//!
//! let text = PlanFile::new(&plan, &table).to_string();
//! assert_eq!(text, "(board p1 l0)\n; cost = 1 (unit cost)\n");
//! ```

pub mod plan_file;
pub mod traces;

pub use plan_file::{EchoLine, PlanFile};
pub use traces::TraceSummary;
