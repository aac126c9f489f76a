use super::OutOfBoundsAccess;
use alloc::vec::Vec;

/// A stack that is bound to a given maximum length.
///
/// # Note
///
/// The limit does not reserve memory up front. Storage grows on demand
/// so that generous limits stay cheap for stacks that remain shallow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    limit: usize,
    peak: usize,
    stack: Vec<T>,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::with_limit(0)
    }
}

impl<T> BoundedStack<T> {
    /// Creates an empty bounded stack that holds at most `limit` values.
    #[inline]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            peak: 0,
            stack: Vec::new(),
        }
    }

    /// Returns the maximum number of values the bounded stack may hold.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the length of the bounded stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns the largest length the bounded stack ever had.
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Returns `true` if the bounded stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the bounded stack is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.limit()
    }

    /// Pushes the value to the bounded stack.
    ///
    /// # Errors
    ///
    /// If the bounded stack is full already.
    #[inline]
    pub fn try_push(&mut self, new_value: T) -> Result<(), OutOfBoundsAccess> {
        if self.is_full() {
            return Err(OutOfBoundsAccess)
        }
        self.stack.push(new_value);
        self.peak = self.peak.max(self.stack.len());
        Ok(())
    }

    /// Pops the last value from the bounded stack if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }
}
