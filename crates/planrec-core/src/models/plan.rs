//! Plan model definition.

use serde::{Deserialize, Serialize};

/// Opaque handle of an operator inside an [`ActionCatalog`].
///
/// [`ActionCatalog`]: super::ActionCatalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(pub usize);

impl OperatorId {
    /// Position of the operator in its catalog.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for OperatorId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// An ordered sequence of operators found by a search.
///
/// Plans are immutable once produced; the writer only borrows them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan(Vec<OperatorId>);

impl Plan {
    /// Creates a plan from operator handles in execution order.
    pub fn new(steps: Vec<OperatorId>) -> Self {
        Self(steps)
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the operator handles in execution order.
    pub fn iter(&self) -> impl Iterator<Item = OperatorId> + '_ {
        self.0.iter().copied()
    }

    pub fn steps(&self) -> &[OperatorId] {
        &self.0
    }
}

impl FromIterator<OperatorId> for Plan {
    fn from_iter<I: IntoIterator<Item = OperatorId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a OperatorId;
    type IntoIter = std::slice::Iter<'a, OperatorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
