//! Which owners' expenses a principal may list and aggregate.

use serde::{Serialize, Serializer};

use expensehub_auth::{Feature, Gate, Principal};
use expensehub_entity::Id;
use expensehub_entity::expense::ExpenseFilter;

/// Visibility of expenses for list, report, and dashboard queries.
///
/// Serializes as its label, `"all"` or `"own"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseScope {
    /// Every owner's expenses (`view_all_expenses`).
    All,
    /// Only the principal's own expenses.
    Own(Id),
}

impl ExpenseScope {
    /// Resolves the scope for an already-authenticated principal.
    pub fn for_principal(gate: &Gate, principal: &Principal) -> Self {
        if gate.allows(principal, Feature::ViewAllExpenses) {
            Self::All
        } else {
            Self::Own(principal.id)
        }
    }

    /// Narrows a caller-supplied filter to this scope.
    ///
    /// With `All` the caller's owner filter is kept; with `Own` it is
    /// replaced, so a restricted caller cannot widen the result.
    pub fn apply(self, mut filter: ExpenseFilter) -> ExpenseFilter {
        if let Self::Own(id) = self {
            filter.owner_id = Some(id);
        }
        filter
    }

    /// Short label for responses and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Own(_) => "own",
        }
    }
}

impl Serialize for ExpenseScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
