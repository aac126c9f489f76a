use crate::{
    ClauseId,
    ClauseMatrix,
    Literal,
    Polarity,
    Variable,
};
use bounded::{
    BoundedArray,
    Index,
};
use core::{
    fmt,
    iter,
    slice,
};

/// A CNF formula given by its clause matrix.
///
/// Caches the number of literals of every clause upon construction.
/// The matrix cannot be mutated through the formula, so the cache stays
/// in sync for the lifetime of the formula.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Formula {
    matrix: ClauseMatrix,
    literal_counts: BoundedArray<ClauseId, usize>,
}

impl From<ClauseMatrix> for Formula {
    fn from(matrix: ClauseMatrix) -> Self {
        Self::new(matrix)
    }
}

impl Formula {
    /// Creates a new formula taking ownership of the clause matrix.
    pub fn new(matrix: ClauseMatrix) -> Self {
        let literal_counts = matrix
            .rows()
            .map(|row| row.iter().filter(|cell| !cell.is_absent()).count())
            .collect();
        Self {
            matrix,
            literal_counts,
        }
    }

    /// Returns the clause matrix of the formula.
    #[inline]
    pub fn matrix(&self) -> &ClauseMatrix {
        &self.matrix
    }

    /// Returns the number of clauses.
    #[inline]
    pub fn len_clauses(&self) -> usize {
        self.matrix.len_clauses()
    }

    /// Returns the number of variables.
    #[inline]
    pub fn len_variables(&self) -> usize {
        self.matrix.len_variables()
    }

    /// Returns the number of literals of the given clause.
    ///
    /// # Panics
    ///
    /// If the clause is out of range.
    #[inline]
    pub fn literal_count(&self, clause: ClauseId) -> usize {
        self.literal_counts[clause]
    }

    /// Returns the cached literal counts of all clauses in clause order.
    #[inline]
    pub fn literal_counts(&self) -> &[usize] {
        self.literal_counts.as_slice()
    }

    /// Returns an iterator over all clauses of the formula.
    pub fn clauses(&self) -> impl Iterator<Item = ClauseId> {
        (0..self.len_clauses()).map(<ClauseId as Index>::from_index)
    }

    /// Returns an iterator over the literals of the clause in variable order.
    ///
    /// The iteration stops as soon as the cached number of literals
    /// of the clause has been yielded.
    ///
    /// # Panics
    ///
    /// If the clause is out of range.
    pub fn literals(&self, clause: ClauseId) -> ClauseLiterals {
        ClauseLiterals {
            cells: self.matrix.row(clause).iter().enumerate(),
            remaining: self.literal_count(clause),
        }
    }
}

/// Iterator over the literals of a single clause.
#[derive(Debug, Clone)]
pub struct ClauseLiterals<'a> {
    cells: iter::Enumerate<slice::Iter<'a, Polarity>>,
    remaining: usize,
}

impl<'a> Iterator for ClauseLiterals<'a> {
    type Item = Literal;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        for (index, cell) in &mut self.cells {
            if let Some(sign) = cell.sign() {
                self.remaining -= 1;
                return Some(Variable::from_index(index)?.into_literal(sign))
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for ClauseLiterals<'a> {}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix:")?;
        writeln!(f, "{}", self.matrix)?;
        writeln!(f, "l:")?;
        write!(f, "( ")?;
        for count in self.literal_counts() {
            write!(f, "{}, ", count)?;
        }
        writeln!(f, " )")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign;

    fn example() -> Formula {
        // (x0 ∨ x1 ∨ ¬x2) ∧ (¬x0 ∨ ¬x1 ∨ x2) ∧ () ∧ (x2)
        ClauseMatrix::from_rows(&[
            [1i8, 1, -1],
            [-1, -1, 1],
            [0, 0, 0],
            [0, 0, 1],
        ])
        .unwrap()
        .into()
    }

    #[test]
    fn literal_counts_match_rows() {
        let formula = example();
        assert_eq!(formula.len_clauses(), 4);
        assert_eq!(formula.len_variables(), 3);
        assert_eq!(formula.literal_counts(), &[3, 3, 0, 1]);
        for clause in formula.clauses() {
            let nonzero = formula
                .matrix()
                .row(clause)
                .iter()
                .filter(|cell| !cell.is_absent())
                .count();
            assert_eq!(formula.literal_count(clause), nonzero);
        }
    }

    #[test]
    fn literals_yield_occurrences_in_order() {
        let formula = example();
        let clause = ClauseId::from_index(3).unwrap();
        let literals = formula.literals(clause).collect::<Vec<_>>();
        assert_eq!(
            literals,
            vec![Variable::from_index(2).unwrap().into_literal(Sign::True)]
        );
        let clause = ClauseId::from_index(1).unwrap();
        let signs = formula
            .literals(clause)
            .map(|literal| literal.sign())
            .collect::<Vec<_>>();
        assert_eq!(signs, vec![Sign::False, Sign::False, Sign::True]);
        assert_eq!(formula.literals(clause).len(), 3);
    }

    #[test]
    fn empty_clause_has_no_literals() {
        let formula = example();
        let clause = ClauseId::from_index(2).unwrap();
        assert_eq!(formula.literals(clause).next(), None);
    }

    #[test]
    fn display_works() {
        let formula = example();
        assert_eq!(
            formula.to_string(),
            "matrix:\n1 1 -1 \n-1 -1 1 \n0 0 0 \n0 0 1 \n\nl:\n( 3, 3, 0, 1,  )\n"
        );
    }
}
