use crate::{
    ClauseId,
    Error,
    Polarity,
    Variable,
};
use alloc::vec::Vec;
use core::fmt;

/// Dense clause by variable storage of literal occurrences.
///
/// Row `i` describes clause `i`, column `j` describes variable `j`.
/// Every cell is [`Polarity::Absent`] after construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClauseMatrix {
    len_clauses: usize,
    len_variables: usize,
    cells: Vec<Polarity>,
}

impl ClauseMatrix {
    /// Creates a new clause matrix with all cells absent.
    ///
    /// # Errors
    ///
    /// If the number of cells does not fit into `usize` or if either
    /// dimension exceeds the supported index range.
    pub fn new(len_clauses: usize, len_variables: usize) -> Result<Self, Error> {
        if ClauseId::from_index(len_clauses).is_none()
            || Variable::from_index(len_variables).is_none()
        {
            return Err(Error::FormulaTooLarge)
        }
        let len_cells = len_clauses
            .checked_mul(len_variables)
            .ok_or(Error::FormulaTooLarge)?;
        Ok(Self {
            len_clauses,
            len_variables,
            cells: vec![Polarity::Absent; len_cells],
        })
    }

    /// Creates a clause matrix from raw rows of `-1`, `0` and `1` cells.
    ///
    /// # Errors
    ///
    /// - If the rows are of different lengths.
    /// - If any cell holds a value other than `-1`, `0` or `1`.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, Error>
    where
        R: AsRef<[i8]>,
    {
        let len_variables = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut matrix = Self::new(rows.len(), len_variables)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != len_variables {
                return Err(Error::RaggedRows)
            }
            let clause = ClauseId::from_index(i).ok_or(Error::FormulaTooLarge)?;
            for (j, &raw) in row.iter().enumerate() {
                let polarity = Polarity::try_from(raw)?;
                let variable = Variable::from_index(j).ok_or(Error::FormulaTooLarge)?;
                matrix.set(clause, variable, polarity)?;
            }
        }
        Ok(matrix)
    }

    /// Returns the number of clauses (rows).
    #[inline]
    pub fn len_clauses(&self) -> usize {
        self.len_clauses
    }

    /// Returns the number of variables (columns).
    #[inline]
    pub fn len_variables(&self) -> usize {
        self.len_variables
    }

    /// Returns the position of the cell or an error if out of range.
    #[inline]
    fn cell_index(&self, clause: ClauseId, variable: Variable) -> Result<usize, Error> {
        let (row, col) = (clause.into_index(), variable.into_index());
        if row >= self.len_clauses || col >= self.len_variables {
            return Err(bounded::OutOfBoundsAccess.into())
        }
        Ok(row * self.len_variables + col)
    }

    /// Sets the occurrence of the variable within the clause.
    ///
    /// # Errors
    ///
    /// If the clause or variable is out of range.
    pub fn set(
        &mut self,
        clause: ClauseId,
        variable: Variable,
        polarity: Polarity,
    ) -> Result<(), Error> {
        let index = self.cell_index(clause, variable)?;
        self.cells[index] = polarity;
        Ok(())
    }

    /// Returns the occurrence of the variable within the clause.
    ///
    /// # Errors
    ///
    /// If the clause or variable is out of range.
    pub fn get(&self, clause: ClauseId, variable: Variable) -> Result<Polarity, Error> {
        let index = self.cell_index(clause, variable)?;
        Ok(self.cells[index])
    }

    /// Returns the row of cells of the given clause.
    ///
    /// # Panics
    ///
    /// If the clause is out of range.
    #[inline]
    pub fn row(&self, clause: ClauseId) -> &[Polarity] {
        let start = clause.into_index() * self.len_variables;
        &self.cells[start..start + self.len_variables]
    }

    /// Returns an iterator over all rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Polarity]> + '_ {
        (0..self.len_clauses).map(move |i| {
            let start = i * self.len_variables;
            &self.cells[start..start + self.len_variables]
        })
    }
}

impl fmt::Display for ClauseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(index: usize) -> ClauseId {
        ClauseId::from_index(index).unwrap()
    }

    fn var(index: usize) -> Variable {
        Variable::from_index(index).unwrap()
    }

    #[test]
    fn new_matrix_is_absent() {
        let matrix = ClauseMatrix::new(2, 3).unwrap();
        assert_eq!(matrix.len_clauses(), 2);
        assert_eq!(matrix.len_variables(), 3);
        assert!(matrix.rows().flatten().all(|cell| cell.is_absent()));
    }

    #[test]
    fn set_and_get_work() {
        let mut matrix = ClauseMatrix::new(2, 3).unwrap();
        matrix.set(clause(1), var(2), Polarity::Negative).unwrap();
        assert_eq!(matrix.get(clause(1), var(2)), Ok(Polarity::Negative));
        assert_eq!(matrix.get(clause(0), var(2)), Ok(Polarity::Absent));
        assert_eq!(
            matrix.row(clause(1)),
            &[Polarity::Absent, Polarity::Absent, Polarity::Negative]
        );
    }

    #[test]
    fn out_of_range_cells_fail() {
        let mut matrix = ClauseMatrix::new(2, 3).unwrap();
        assert!(matrix.get(clause(2), var(0)).is_err());
        assert!(matrix.set(clause(0), var(3), Polarity::Positive).is_err());
    }

    #[test]
    fn from_rows_works() {
        let matrix = ClauseMatrix::from_rows(&[[1i8, 1, -1], [-1, -1, 1]]).unwrap();
        assert_eq!(matrix.get(clause(0), var(2)), Ok(Polarity::Negative));
        assert_eq!(matrix.get(clause(1), var(2)), Ok(Polarity::Positive));
        assert_eq!(matrix.to_string(), "1 1 -1 \n-1 -1 1 \n");
    }

    #[test]
    fn from_rows_rejects_invalid_input() {
        assert_eq!(
            ClauseMatrix::from_rows(&[vec![1i8, 0], vec![1]]),
            Err(Error::RaggedRows)
        );
        assert!(ClauseMatrix::from_rows(&[[2i8]]).is_err());
    }

    #[test]
    fn empty_matrix_works() {
        let matrix = ClauseMatrix::from_rows::<[i8; 0]>(&[]).unwrap();
        assert_eq!(matrix.len_clauses(), 0);
        assert_eq!(matrix.len_variables(), 0);
        assert_eq!(matrix.to_string(), "");
    }
}
