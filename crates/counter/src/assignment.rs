use crate::{
    Sign,
    Variable,
};
use bounded::{
    BoundedArray,
    Index,
    OutOfBoundsAccess,
};
use core::fmt::{
    self,
    Display,
};

/// Errors that may be encountered when operating on an assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// When trying to assign the next variable of a complete assignment.
    Complete,
    /// Variable invalid for the assignment.
    InvalidVariable,
}

impl Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => {
                write!(f, "tried to extend an assignment that is already complete")
            }
            Self::InvalidVariable => {
                write!(f, "the variable for the assignment is invalid")
            }
        }
    }
}

impl From<OutOfBoundsAccess> for AssignmentError {
    fn from(_: OutOfBoundsAccess) -> Self {
        Self::InvalidVariable
    }
}

/// A partial truth assignment over all variables of a formula.
///
/// Variables are assigned in index order: the first `len_assigned`
/// variables carry a value, all others are unassigned. Methods that
/// advance the assigned prefix keep this invariant, [`Assignment::set`]
/// writes raw values and leaves it to the caller.
///
/// Branching copies the assignment. Copies never share state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: BoundedArray<Variable, Option<Sign>>,
    len_assigned: usize,
}

impl Assignment {
    /// Creates a new assignment with all `len` variables unassigned.
    pub fn new(len: usize) -> Self {
        Self {
            values: BoundedArray::with_len(len, |_| None),
            len_assigned: 0,
        }
    }

    /// Returns the number of variables covered by the assignment.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the length of the assigned prefix.
    #[inline]
    pub fn len_assigned(&self) -> usize {
        self.len_assigned
    }

    /// Returns the number of variables that are still unassigned.
    #[inline]
    pub fn len_unassigned(&self) -> usize {
        self.len() - self.len_assigned()
    }

    /// Returns `true` if every variable has been assigned.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len_assigned() == self.len()
    }

    /// Returns the next variable to be assigned if any.
    #[inline]
    pub fn next_unassigned(&self) -> Option<Variable> {
        if self.is_complete() {
            return None
        }
        Variable::from_index(self.len_assigned)
    }

    /// Returns the value of the variable or `None` if it is unassigned.
    ///
    /// # Panics
    ///
    /// If the variable is out of range.
    #[inline]
    pub fn get(&self, variable: Variable) -> Option<Sign> {
        self.values[variable]
    }

    /// Writes the value of the variable without touching the assigned prefix.
    ///
    /// # Errors
    ///
    /// If the variable is out of range.
    pub fn set(
        &mut self,
        variable: Variable,
        value: Option<Sign>,
    ) -> Result<(), AssignmentError> {
        self.values.update(variable, value)?;
        Ok(())
    }

    /// Assigns the next unassigned variable and advances the assigned prefix.
    ///
    /// Returns the variable that has been assigned.
    ///
    /// # Errors
    ///
    /// If the assignment is already complete.
    pub fn assign_next(&mut self, value: Sign) -> Result<Variable, AssignmentError> {
        let variable = self.next_unassigned().ok_or(AssignmentError::Complete)?;
        self.values.update(variable, Some(value))?;
        self.len_assigned += 1;
        Ok(variable)
    }

    /// Returns an iterator over the values of all variables in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Option<Sign>)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (<Variable as Index>::from_index(index), *value))
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        for (_, value) in self.iter() {
            write!(f, "{}, ", value.map(Sign::to_i8).unwrap_or(0))?;
        }
        write!(f, " )")
    }
}
