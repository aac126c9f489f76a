use crate::{
    Assignment,
    Sign,
};
use bounded::Bool;

/// Shards the unassigned suffix of an assignment into batches.
///
/// With a batch size of `t` an assignment with `r` unassigned variables is
/// split into `2^min(t, r)` extensions that together cover every value
/// combination of the next `min(t, r)` variables.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FrontierExpander {
    batch_size: usize,
}

impl FrontierExpander {
    /// Creates a new frontier expander with the given batch size.
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Returns the batch size of the expander.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the number of variables fixed by expanding the assignment.
    pub fn len_fixed(&self, assignment: &Assignment) -> usize {
        self.batch_size.min(assignment.len_unassigned())
    }

    /// Returns an iterator over all extensions of the assignment.
    ///
    /// Extension `i` assigns variable `len_assigned + k` to true if bit `k`
    /// of `i` is set and to false otherwise. Every extension advances the
    /// assigned prefix by the number of fixed variables.
    ///
    /// # Panics
    ///
    /// If `2^min(t, r)` does not fit into `usize`.
    pub fn expand<'a>(&self, assignment: &'a Assignment) -> Extensions<'a> {
        let len_fixed = self.len_fixed(assignment);
        let len_patterns = u32::try_from(len_fixed)
            .ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
            .expect("frontier expansion exceeds the addressable number of extensions");
        Extensions {
            base: assignment,
            len_fixed,
            next: 0,
            end: len_patterns,
        }
    }
}

/// Iterator over the extensions produced by a frontier expansion.
#[derive(Debug, Clone)]
pub struct Extensions<'a> {
    base: &'a Assignment,
    len_fixed: usize,
    next: usize,
    end: usize,
}

impl<'a> Extensions<'a> {
    /// Returns the extension for the given bit pattern.
    fn extension(&self, pattern: usize) -> Assignment {
        let mut extension = self.base.clone();
        for bit in 0..self.len_fixed {
            let value = Sign::from_bool(pattern & (1 << bit) != 0);
            extension
                .assign_next(value)
                .expect("expanded more variables than are unassigned");
        }
        extension
    }
}

impl<'a> Iterator for Extensions<'a> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None
        }
        let extension = self.extension(self.next);
        self.next += 1;
        Some(extension)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Extensions<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None
        }
        self.end -= 1;
        Some(self.extension(self.end))
    }
}

impl<'a> ExactSizeIterator for Extensions<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variable;
    use std::collections::HashSet;

    fn values(assignment: &Assignment) -> Vec<Option<Sign>> {
        assignment.iter().map(|(_, value)| value).collect()
    }

    #[test]
    fn expansion_covers_all_patterns() {
        let mut base = Assignment::new(5);
        base.assign_next(Sign::False).unwrap();
        let extensions = FrontierExpander::new(3).expand(&base).collect::<Vec<_>>();
        assert_eq!(extensions.len(), 8);
        let patterns = extensions.iter().map(values).collect::<HashSet<_>>();
        assert_eq!(patterns.len(), 8);
        for extension in &extensions {
            assert_eq!(extension.len_assigned(), 4);
            let var = |index| Variable::from_index(index).unwrap();
            assert_eq!(extension.get(var(0)), Some(Sign::False));
            assert!((1..4).all(|index| extension.get(var(index)).is_some()));
            assert_eq!(extension.get(var(4)), None);
        }
    }

    #[test]
    fn bit_k_fixes_variable_k_of_the_batch() {
        let base = Assignment::new(2);
        let extensions = FrontierExpander::new(2).expand(&base).collect::<Vec<_>>();
        use Sign::{
            False as F,
            True as T,
        };
        assert_eq!(values(&extensions[0]), vec![Some(F), Some(F)]);
        assert_eq!(values(&extensions[1]), vec![Some(T), Some(F)]);
        assert_eq!(values(&extensions[2]), vec![Some(F), Some(T)]);
        assert_eq!(values(&extensions[3]), vec![Some(T), Some(T)]);
    }

    #[test]
    fn batch_size_is_capped_by_unassigned_variables() {
        let mut base = Assignment::new(3);
        base.assign_next(Sign::True).unwrap();
        let expander = FrontierExpander::new(10);
        assert_eq!(expander.len_fixed(&base), 2);
        let extensions = expander.expand(&base);
        assert_eq!(extensions.len(), 4);
        assert!(extensions.map(|e| e.is_complete()).all(|complete| complete));
    }

    #[test]
    fn zero_batch_size_yields_copy() {
        let mut base = Assignment::new(3);
        base.assign_next(Sign::True).unwrap();
        let extensions = FrontierExpander::new(0).expand(&base).collect::<Vec<_>>();
        assert_eq!(extensions, vec![base]);
    }

    #[test]
    fn next_back_yields_last_pattern() {
        let base = Assignment::new(3);
        let mut extensions = FrontierExpander::new(2).expand(&base);
        let last = extensions.next_back().unwrap();
        assert_eq!(extensions.len(), 3);
        assert_eq!(
            values(&last),
            vec![Some(Sign::True), Some(Sign::True), None]
        );
    }
}
