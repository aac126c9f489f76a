use crate::{
    ClauseId,
    ClauseMatrix,
    Error,
    Formula,
    Polarity,
    Sign,
    Variable,
};
use alloc::vec::Vec;
use cnf_parser::Output;

/// Builds a [`Formula`] from DIMACS CNF input.
///
/// Tautological clauses are dropped since they hold under every assignment
/// and thus never change the model count. Repeated literals are merged.
#[derive(Debug, Default)]
pub struct FormulaBuilder {
    len_variables: Option<usize>,
    current_clause: Vec<(Variable, Sign)>,
    clauses: Vec<Vec<(Variable, Sign)>>,
    len_tautologies: usize,
    formula: Option<Formula>,
}

impl FormulaBuilder {
    fn finalize_current_clause(&mut self) -> Result<(), Error> {
        if self.len_variables.is_none() {
            return Err("missing problem line before clause inputs".into())
        }
        let mut literals = core::mem::take(&mut self.current_clause);
        literals.sort_by_key(|&(variable, sign)| (variable, sign == Sign::False));
        literals.dedup();
        let is_tautology = literals
            .windows(2)
            .any(|pair| pair[0].0 == pair[1].0);
        if is_tautology {
            self.len_tautologies += 1;
            return Ok(())
        }
        self.clauses.push(literals);
        Ok(())
    }

    /// Returns the number of dropped tautological clauses.
    pub fn len_tautologies(&self) -> usize {
        self.len_tautologies
    }

    /// Builds the clause matrix from all collected clauses.
    fn build_formula(&mut self) -> Result<Formula, Error> {
        let len_variables = self
            .len_variables
            .ok_or("missing problem line in CNF input")?;
        let clauses = core::mem::take(&mut self.clauses);
        let mut matrix = ClauseMatrix::new(clauses.len(), len_variables)?;
        for (index, literals) in clauses.into_iter().enumerate() {
            let clause = ClauseId::from_index(index).ok_or(Error::FormulaTooLarge)?;
            for (variable, sign) in literals {
                matrix.set(clause, variable, Polarity::from(sign))?;
            }
        }
        Ok(Formula::new(matrix))
    }

    /// Returns the formula built from the parsed input.
    ///
    /// Returns the empty formula if the input has not been parsed to its end.
    pub fn finalize(self) -> Formula {
        self.formula.unwrap_or_default()
    }
}

impl Output for FormulaBuilder {
    type Error = Error;

    fn problem(
        &mut self,
        num_variables: u32,
        _num_clauses: u32,
    ) -> Result<(), Self::Error> {
        self.len_variables = Some(num_variables as usize);
        Ok(())
    }

    fn literal(&mut self, literal: cnf_parser::Literal) -> Result<(), Self::Error> {
        let len_variables = self
            .len_variables
            .ok_or("missing problem line before clause inputs")?;
        let value = literal.into_value().get();
        let index = value.unsigned_abs() as usize - 1;
        if index >= len_variables {
            return Err(Error::UndeclaredVariable(value))
        }
        let variable = Variable::from_index(index).ok_or(Error::FormulaTooLarge)?;
        let sign = if value > 0 { Sign::True } else { Sign::False };
        self.current_clause.push((variable, sign));
        Ok(())
    }

    fn finalize_clause(&mut self) -> Result<(), Self::Error> {
        self.finalize_current_clause()
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        if !self.current_clause.is_empty() {
            self.finalize_current_clause()?;
        }
        self.formula = Some(self.build_formula()?);
        Ok(())
    }
}
