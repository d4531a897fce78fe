//! Operator catalogs: the task-side view the plan writer reads from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{OperatorId, Plan};

/// Read-only mapping from operator handles to display names and costs.
///
/// Implemented by whatever task model produced the plan. Lookups with an id
/// that did not come from the same catalog may panic.
pub trait ActionCatalog {
    /// Display name of the operator, written verbatim into plan files.
    fn name(&self, id: OperatorId) -> &str;

    /// Non-negative cost of the operator.
    fn cost(&self, id: OperatorId) -> u64;

    /// Whether every operator in the whole task costs exactly 1.
    fn is_unit_cost(&self) -> bool;
}

/// A single named, costed operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    #[serde(default = "default_cost")]
    pub cost: u64,
}

fn default_cost() -> u64 {
    1
}

impl Operator {
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// An in-memory operator catalog, indexed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorTable {
    pub operators: Vec<Operator>,
}

/// Returned when a plan names an operator the table does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operator: {name}")]
pub struct UnknownOperator {
    pub name: String,
}

impl OperatorTable {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Looks up the first operator with exactly this name.
    pub fn find(&self, name: &str) -> Option<OperatorId> {
        self.operators
            .iter()
            .position(|op| op.name == name)
            .map(OperatorId)
    }

    /// Turns a sequence of operator names into a plan over this table.
    pub fn resolve_plan<I, S>(&self, names: I) -> Result<Plan, UnknownOperator>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.find(name).ok_or_else(|| UnknownOperator {
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

impl ActionCatalog for OperatorTable {
    fn name(&self, id: OperatorId) -> &str {
        &self.operators[id.index()].name
    }

    fn cost(&self, id: OperatorId) -> u64 {
        self.operators[id.index()].cost
    }

    fn is_unit_cost(&self) -> bool {
        self.operators.iter().all(|op| op.cost == 1)
    }
}
