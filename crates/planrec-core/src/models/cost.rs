//! Plan cost accounting types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task-wide cost classification reported next to a plan's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Every operator in the task costs exactly 1
    UnitCost,
    /// At least one operator has a cost other than 1
    GeneralCost,
}

impl CostKind {
    pub fn from_unit_cost(is_unit_cost: bool) -> Self {
        if is_unit_cost {
            CostKind::UnitCost
        } else {
            CostKind::GeneralCost
        }
    }

    /// Label used in the trailing cost line of plan files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostKind::UnitCost => "unit cost",
            CostKind::GeneralCost => "general cost",
        }
    }
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of operator costs of a plan together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCost {
    /// Sum of operator costs; wider than a single cost so it cannot overflow
    pub cost: u128,
    pub kind: CostKind,
}
