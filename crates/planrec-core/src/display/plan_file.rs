//! Plan file and console echo formatting.

use std::fmt;

use crate::{
    cost::plan_cost,
    models::{ActionCatalog, OperatorId, Plan, PlanCost},
};

/// Renders a plan in the on-disk plan file format.
///
/// ```text
/// (action-name-1)
/// (action-name-2)
/// ; cost = <integer> (unit cost|general cost)
/// ```
pub struct PlanFile<'a, C: ActionCatalog + ?Sized> {
    plan: &'a Plan,
    catalog: &'a C,
    cost: PlanCost,
}

impl<'a, C: ActionCatalog + ?Sized> PlanFile<'a, C> {
    pub fn new(plan: &'a Plan, catalog: &'a C) -> Self {
        Self {
            plan,
            catalog,
            cost: plan_cost(plan, catalog),
        }
    }

    /// Cost reported in the trailing comment line.
    pub fn cost(&self) -> PlanCost {
        self.cost
    }
}

impl<C: ActionCatalog + ?Sized> fmt::Display for PlanFile<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.plan.iter() {
            writeln!(f, "({})", self.catalog.name(id))?;
        }
        writeln!(f, "; cost = {} ({})", self.cost.cost, self.cost.kind)
    }
}

/// One console echo line: `<name> (<cost>)`.
pub struct EchoLine<'a, C: ActionCatalog + ?Sized> {
    id: OperatorId,
    catalog: &'a C,
}

impl<'a, C: ActionCatalog + ?Sized> EchoLine<'a, C> {
    pub fn new(id: OperatorId, catalog: &'a C) -> Self {
        Self { id, catalog }
    }
}

impl<C: ActionCatalog + ?Sized> fmt::Display for EchoLine<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.catalog.name(self.id),
            self.catalog.cost(self.id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Operator, OperatorTable};

    fn table() -> OperatorTable {
        OperatorTable::new(vec![
            Operator::new("load truck1 pkg", 2),
            Operator::new("drive truck1 a b", 5),
        ])
    }

    #[test]
    fn test_plan_file_general_cost() {
        let table = table();
        let plan = Plan::new(vec![OperatorId(0), OperatorId(1), OperatorId(0)]);
        let rendered = PlanFile::new(&plan, &table).to_string();
        assert_eq!(
            rendered,
            "(load truck1 pkg)\n(drive truck1 a b)\n(load truck1 pkg)\n; cost = 9 (general cost)\n"
        );
    }

    #[test]
    fn test_empty_plan_file_has_only_cost_line() {
        let table = table();
        let rendered = PlanFile::new(&Plan::default(), &table).to_string();
        assert_eq!(rendered, "; cost = 0 (general cost)\n");
    }

    #[test]
    fn test_echo_line() {
        let table = table();
        assert_eq!(
            EchoLine::new(OperatorId(1), &table).to_string(),
            "drive truck1 a b (5)"
        );
    }
}
