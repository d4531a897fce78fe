//! Plan cost computation.

use crate::models::{ActionCatalog, CostKind, Plan, PlanCost};

/// Sums the catalog cost of every step in `plan`.
///
/// Pure and independent of saving, so callers can compare candidate plans
/// before deciding which one to write. An empty plan costs 0. Operator costs
/// are `u64`, so the total is accumulated as `u128` and cannot overflow.
///
/// ```rust
/// use planrec_core::{calculate_plan_cost, models::{Operator, OperatorTable}};
///
/// let table = OperatorTable::new(vec![Operator::new("a", 2), Operator::new("b", 3)]);
/// let plan = table.resolve_plan(["a", "b", "a"]).unwrap();
/// assert_eq!(calculate_plan_cost(&plan, &table), 7);
/// ```
pub fn calculate_plan_cost<C: ActionCatalog + ?Sized>(plan: &Plan, catalog: &C) -> u128 {
    plan.iter().map(|id| u128::from(catalog.cost(id))).sum()
}

/// Plan cost together with the task-wide unit-cost classification.
pub fn plan_cost<C: ActionCatalog + ?Sized>(plan: &Plan, catalog: &C) -> PlanCost {
    PlanCost {
        cost: calculate_plan_cost(plan, catalog),
        kind: CostKind::from_unit_cost(catalog.is_unit_cost()),
    }
}
