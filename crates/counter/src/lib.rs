//! Exact model counting for CNF formulas.
//!
//! The counter enumerates every total assignment of a formula implicitly by
//! a depth-first branch and bound search and reports how many of them
//! satisfy all clauses. Whenever a partial assignment already satisfies the
//! formula the remaining free variables are accounted for in closed form.
//!
//! # Example
//!
//! ```
//! use s3count_counter::{ClauseMatrix, Counter, SearchConfig};
//!
//! // (A ∨ B ∨ ¬C) ∧ (¬A ∨ ¬B ∨ C)
//! let matrix = ClauseMatrix::from_rows(&[[1i8, 1, -1], [-1, -1, 1]]).unwrap();
//! let counter = Counter::new(matrix.into());
//! let result = counter.count(&SearchConfig::default().with_batch_size(2)).unwrap();
//! assert_eq!(result.to_string(), "6");
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::len_without_is_empty)]

extern crate alloc;

mod activity;
mod assignment;
mod builder;
mod config;
mod evaluator;
mod formula;
mod frontier;
mod generator;
mod literal;
mod matrix;
mod search;


pub use crate::{
    activity::ClauseActivity,
    assignment::{
        Assignment,
        AssignmentError,
    },
    builder::FormulaBuilder,
    config::SearchConfig,
    evaluator::{
        Evaluation,
        Evaluator,
    },
    formula::{
        ClauseLiterals,
        Formula,
    },
    frontier::{
        Extensions,
        FrontierExpander,
    },
    generator::RandomFormula,
    literal::{
        ClauseId,
        InvalidPolarity,
        Literal,
        Polarity,
        Sign,
        Variable,
    },
    matrix::ClauseMatrix,
    search::{
        ModelCount,
        SearchDriver,
        SearchStats,
    },
};
pub use num_bigint::BigUint;
use cnf_parser::{
    Error as CnfError,
    Input,
};
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Other(&'static str),
    Assignment(AssignmentError),
    Bounded(bounded::OutOfBoundsAccess),
    InvalidPolarity(i8),
    RaggedRows,
    UndeclaredVariable(i32),
    InvalidDensity,
    FormulaTooLarge,
    FrontierTooLarge {
        batch_size: usize,
        max_frontier_len: usize,
    },
    WorkStackOverflow {
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(message) => write!(f, "{}", message),
            Self::Assignment(error) => write!(f, "assignment error: {}", error),
            Self::Bounded(error) => write!(f, "{}", error),
            Self::InvalidPolarity(value) => {
                write!(f, "invalid clause matrix cell {}, expected -1, 0 or 1", value)
            }
            Self::RaggedRows => write!(f, "clause matrix rows differ in length"),
            Self::UndeclaredVariable(literal) => {
                write!(f, "literal {} refers to an undeclared variable", literal)
            }
            Self::InvalidDensity => write!(f, "density must be a number within [0, 1]"),
            Self::FormulaTooLarge => write!(f, "formula dimensions are too large"),
            Self::FrontierTooLarge {
                batch_size,
                max_frontier_len,
            } => {
                write!(
                    f,
                    "batch size {} expands into more than {} assignments",
                    batch_size, max_frontier_len
                )
            }
            Self::WorkStackOverflow { limit } => {
                write!(f, "work stack exceeded its limit of {} assignments", limit)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<bounded::OutOfBoundsAccess> for Error {
    fn from(err: bounded::OutOfBoundsAccess) -> Self {
        Self::Bounded(err)
    }
}

impl From<AssignmentError> for Error {
    fn from(err: AssignmentError) -> Self {
        Self::Assignment(err)
    }
}

impl From<InvalidPolarity> for Error {
    fn from(err: InvalidPolarity) -> Self {
        Self::InvalidPolarity(err.0)
    }
}

impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Self::Other(message)
    }
}

/// Counts the models of a single formula.
#[derive(Debug, Default, Clone)]
pub struct Counter {
    formula: Formula,
}

impl From<Formula> for Counter {
    fn from(formula: Formula) -> Self {
        Self::new(formula)
    }
}

impl Counter {
    /// Creates a new counter for the formula.
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    /// Creates a new counter for the formula read from DIMACS CNF input.
    ///
    /// # Errors
    ///
    /// If the input is malformed or refers to undeclared variables.
    pub fn from_cnf<I>(input: &mut I) -> Result<Self, CnfError<Error>>
    where
        I: Input,
    {
        let mut builder = FormulaBuilder::default();
        cnf_parser::parse_cnf(input, &mut builder)?;
        Ok(Self::new(builder.finalize()))
    }

    /// Returns the formula of the counter.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Counts the satisfying total assignments of the formula.
    ///
    /// # Errors
    ///
    /// If the search parameters are rejected or a work stack overflows.
    pub fn count(&self, config: &SearchConfig) -> Result<ModelCount, Error> {
        SearchDriver::new(&self.formula, config)?.run()
    }
}
