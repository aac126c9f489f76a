use crate::{
    ClauseId,
    ClauseMatrix,
    Error,
    Formula,
    Polarity,
    Variable,
};
use alloc::vec::Vec;
use bounded::Index;
use rand::{
    rngs::SmallRng,
    seq::SliceRandom,
    Rng,
    SeedableRng,
};

/// Parameters of a randomly generated formula.
///
/// The density is the fraction of clause matrix cells that receive a literal.
/// Populated cells are chosen uniformly without repetition and get either
/// polarity with equal probability. Equal parameters always produce the
/// same formula.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RandomFormula {
    pub clauses: usize,
    pub variables: usize,
    pub density: f64,
    pub seed: u64,
}

impl RandomFormula {
    /// Returns the number of cells that receive a literal.
    ///
    /// # Errors
    ///
    /// - If the density is not a finite value within `[0, 1]`.
    /// - If the number of cells overflows.
    pub fn len_literals(&self) -> Result<usize, Error> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity)
        }
        let len_cells = self
            .clauses
            .checked_mul(self.variables)
            .ok_or(Error::FormulaTooLarge)?;
        let len_literals = (len_cells as f64 * self.density) as usize;
        Ok(len_literals.min(len_cells))
    }

    /// Generates the formula.
    ///
    /// # Errors
    ///
    /// If the parameters are invalid. See [`RandomFormula::len_literals`].
    pub fn generate(&self) -> Result<Formula, Error> {
        let len_literals = self.len_literals()?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut matrix = ClauseMatrix::new(self.clauses, self.variables)?;
        let mut cells = (0..self.clauses * self.variables).collect::<Vec<_>>();
        cells.shuffle(&mut rng);
        for &cell in &cells[..len_literals] {
            let clause = <ClauseId as Index>::from_index(cell / self.variables);
            let variable = <Variable as Index>::from_index(cell % self.variables);
            let polarity = if rng.gen_bool(0.5) {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            matrix.set(clause, variable, polarity)?;
        }
        Ok(Formula::new(matrix))
    }
}
