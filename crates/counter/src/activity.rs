use crate::{
    ClauseId,
    Formula,
};
use bounded::BoundedBitmap;

/// Per search path state of the clauses that still need to be checked.
///
/// Tracks which clauses have already been found satisfied along the current
/// path together with the number of clauses that have not. The state is not
/// stored next to stacked assignments: whenever an assignment is picked up
/// for resolution the state is reset and derived afresh while descending.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClauseActivity {
    satisfied: BoundedBitmap<ClauseId, bool>,
    len_active: usize,
}

impl ClauseActivity {
    /// Creates the activity state for the formula with all clauses active.
    pub fn new(formula: &Formula) -> Self {
        let len_clauses = formula.len_clauses();
        Self {
            satisfied: BoundedBitmap::with_len(len_clauses),
            len_active: len_clauses,
        }
    }

    /// Marks every clause as active again.
    pub fn reset(&mut self) {
        self.satisfied.fill(false);
        self.len_active = self.satisfied.len();
    }

    /// Returns the number of clauses that are not yet known to be satisfied.
    #[inline]
    pub fn len_active(&self) -> usize {
        self.len_active
    }

    /// Returns `true` if the clause has been found satisfied on this path.
    ///
    /// # Panics
    ///
    /// If the clause is out of range.
    #[inline]
    pub fn is_satisfied(&self, clause: ClauseId) -> bool {
        self.satisfied
            .get(clause)
            .expect("encountered out of bounds clause")
    }

    /// Marks the clause as satisfied for the rest of the path.
    ///
    /// # Note
    ///
    /// Does not touch the number of active clauses; the evaluator commits
    /// it separately via [`ClauseActivity::set_len_active`].
    ///
    /// # Panics
    ///
    /// If the clause is out of range.
    #[inline]
    pub(crate) fn mark_satisfied(&mut self, clause: ClauseId) {
        self.satisfied
            .set(clause, true)
            .expect("encountered out of bounds clause")
    }

    #[inline]
    pub(crate) fn set_len_active(&mut self, len_active: usize) {
        debug_assert_eq!(len_active, self.satisfied.len() - self.satisfied.count_ones());
        self.len_active = len_active;
    }
}
