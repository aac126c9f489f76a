use bounded::{
    Bool,
    Index,
};
use core::{
    convert::TryFrom,
    fmt,
    ops::Not,
};

/// The truth value assigned to a variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    True,
    False,
}

impl Bool for Sign {
    /// Creates a sign from the given `bool` value.
    ///
    /// - `false` becomes `Sign::False`
    /// - `true` becomes `Sign::True`
    #[inline]
    fn from_bool(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }

    /// Converts the sign into a `bool` value.
    ///
    /// - `Sign::True` becomes `true`
    /// - `Sign::False` becomes `false`
    #[inline]
    fn into_bool(self) -> bool {
        matches!(self, Self::True)
    }
}

impl Not for Sign {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }
}

impl Sign {
    /// Returns the numeric value of the sign: `1` for true, `-1` for false.
    #[inline]
    pub fn to_i8(self) -> i8 {
        match self {
            Self::True => 1,
            Self::False => -1,
        }
    }
}

/// The occurrence of a variable within a single clause.
///
/// This is the value of one cell of the clause matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Polarity {
    /// The variable occurs negated.
    Negative = -1,
    /// The variable does not occur.
    Absent = 0,
    /// The variable occurs positively.
    Positive = 1,
}

impl Default for Polarity {
    fn default() -> Self {
        Self::Absent
    }
}

/// Returned when converting a raw cell value other than `-1`, `0` or `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidPolarity(pub i8);

impl TryFrom<i8> for Polarity {
    type Error = InvalidPolarity;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Absent),
            1 => Ok(Self::Positive),
            invalid => Err(InvalidPolarity(invalid)),
        }
    }
}

impl From<Sign> for Polarity {
    #[inline]
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::True => Self::Positive,
            Sign::False => Self::Negative,
        }
    }
}

impl Polarity {
    /// Returns `true` if the variable does not occur in the clause.
    #[inline]
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the sign a variable must be assigned to satisfy this occurrence.
    ///
    /// Returns `None` if the variable does not occur.
    #[inline]
    pub fn sign(self) -> Option<Sign> {
        match self {
            Self::Positive => Some(Sign::True),
            Self::Negative => Some(Sign::False),
            Self::Absent => None,
        }
    }

    /// Returns `true` if this occurrence is satisfied by the given assignment.
    ///
    /// This is `literal * value == 1` in the numeric cell encoding.
    #[inline]
    pub fn is_satisfied_by(self, value: Sign) -> bool {
        (self as i8) * value.to_i8() == 1
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i8)
    }
}

/// A variable occurring in a clause together with the sign that satisfies it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: Variable,
    sign: Sign,
}

impl Literal {
    /// Creates a new literal for the variable with the given sign.
    #[inline]
    pub fn new(variable: Variable, sign: Sign) -> Self {
        Self { variable, sign }
    }

    /// Returns the variable of the literal.
    #[inline]
    pub fn variable(self) -> Variable {
        self.variable
    }

    /// Returns the sign under which the literal is true.
    #[inline]
    pub fn sign(self) -> Sign {
        self.sign
    }

    /// Returns `true` if the literal is satisfied by the given assignment.
    #[inline]
    pub fn is_satisfied_by(self, value: Sign) -> bool {
        self.sign == value
    }
}

impl Not for Literal {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::new(self.variable, !self.sign)
    }
}

/// A variable, i.e. a column of the clause matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Variable {
    value: u32,
}

impl Variable {
    /// Returns the variable for the given index if valid.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(|value| Self { value })
    }

    /// Returns the index of the variable.
    #[inline]
    pub fn into_index(self) -> usize {
        self.value as usize
    }

    /// Returns the literal for the variable with the given sign.
    #[inline]
    pub fn into_literal(self, sign: Sign) -> Literal {
        Literal::new(self, sign)
    }
}

impl Index for Variable {
    #[inline]
    fn from_index(index: usize) -> Self {
        Variable::from_index(index).expect("encountered invalid variable index")
    }

    #[inline]
    fn into_index(self) -> usize {
        self.into_index()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.value)
    }
}

/// A clause, i.e. a row of the clause matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ClauseId {
    value: u32,
}

impl ClauseId {
    /// Returns the clause for the given index if valid.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(|value| Self { value })
    }

    /// Returns the index of the clause.
    #[inline]
    pub fn into_index(self) -> usize {
        self.value as usize
    }
}

impl Index for ClauseId {
    #[inline]
    fn from_index(index: usize) -> Self {
        ClauseId::from_index(index).expect("encountered invalid clause index")
    }

    #[inline]
    fn into_index(self) -> usize {
        self.into_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_from_raw_works() {
        assert_eq!(Polarity::try_from(-1), Ok(Polarity::Negative));
        assert_eq!(Polarity::try_from(0), Ok(Polarity::Absent));
        assert_eq!(Polarity::try_from(1), Ok(Polarity::Positive));
        assert_eq!(Polarity::try_from(2), Err(InvalidPolarity(2)));
    }

    #[test]
    fn polarity_satisfaction_matches_sign_product() {
        assert!(Polarity::Positive.is_satisfied_by(Sign::True));
        assert!(Polarity::Negative.is_satisfied_by(Sign::False));
        assert!(!Polarity::Positive.is_satisfied_by(Sign::False));
        assert!(!Polarity::Negative.is_satisfied_by(Sign::True));
        assert!(!Polarity::Absent.is_satisfied_by(Sign::True));
        assert!(!Polarity::Absent.is_satisfied_by(Sign::False));
    }

    #[test]
    fn sign_bool_conversion_works() {
        assert!(Sign::True.into_bool());
        assert!(!Sign::False.into_bool());
        assert_eq!(Sign::from_bool(true), Sign::True);
        assert_eq!(!Sign::True, Sign::False);
    }

    #[test]
    fn literal_negation_flips_sign() {
        let x = Variable::from_index(3).unwrap().into_literal(Sign::True);
        assert!(x.is_satisfied_by(Sign::True));
        assert!((!x).is_satisfied_by(Sign::False));
        assert_eq!((!x).variable(), x.variable());
    }
}
