use crate::{
    Assignment,
    ClauseActivity,
    Formula,
};

/// The status of a formula under a partial assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Every clause is satisfied; all remaining variables are free.
    Satisfied,
    /// Some clause has all of its literals assigned and false.
    Falsified,
    /// Neither satisfied nor falsified yet.
    Undetermined,
}

impl Evaluation {
    /// Returns `true` if the formula is satisfied.
    pub fn is_satisfied(self) -> bool {
        matches!(self, Self::Satisfied)
    }

    /// Returns `true` if the formula is falsified.
    pub fn is_falsified(self) -> bool {
        matches!(self, Self::Falsified)
    }
}

/// Incrementally determines the status of a formula along a search path.
#[derive(Debug, Copy, Clone)]
pub struct Evaluator<'a> {
    formula: &'a Formula,
}

impl<'a> Evaluator<'a> {
    /// Creates a new evaluator for the formula.
    pub fn new(formula: &'a Formula) -> Self {
        Self { formula }
    }

    /// Returns the formula of the evaluator.
    pub fn formula(&self) -> &'a Formula {
        self.formula
    }

    /// Evaluates the formula under the partial assignment.
    ///
    /// Clauses already satisfied on this path are skipped and the scan stops
    /// once as many active clauses as `activity` reports have been examined.
    /// Clauses found satisfied are marked in `activity`. The number of active
    /// clauses is only committed back if the result is undetermined since
    /// the path ends otherwise.
    ///
    /// Returns [`Evaluation::Falsified`] as soon as a clause has neither a
    /// true nor an unassigned literal.
    pub fn evaluate(
        &self,
        assignment: &Assignment,
        activity: &mut ClauseActivity,
    ) -> Evaluation {
        let len_active = activity.len_active();
        let mut remaining = len_active;
        let mut examined = 0;
        let mut satisfied_now = 0;
        for clause in self.formula.clauses() {
            if examined == len_active {
                break
            }
            if activity.is_satisfied(clause) {
                continue
            }
            examined += 1;
            let mut is_satisfied = false;
            let mut has_unassigned = false;
            for literal in self.formula.literals(clause) {
                match assignment.get(literal.variable()) {
                    None => has_unassigned = true,
                    Some(value) if literal.is_satisfied_by(value) => {
                        is_satisfied = true;
                        break
                    }
                    Some(_) => (),
                }
            }
            if is_satisfied {
                activity.mark_satisfied(clause);
                remaining -= 1;
                satisfied_now += 1;
            } else if !has_unassigned {
                return Evaluation::Falsified
            }
        }
        if satisfied_now == len_active {
            return Evaluation::Satisfied
        }
        activity.set_len_active(remaining);
        Evaluation::Undetermined
    }
}
