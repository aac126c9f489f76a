/// Scalar parameters of a model counting search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    batch_size: usize,
    max_frontier_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 0,
            max_frontier_len: Self::DEFAULT_MAX_FRONTIER_LEN,
        }
    }
}

impl SearchConfig {
    /// The default upper bound for the extensions of a single frontier expansion.
    pub const DEFAULT_MAX_FRONTIER_LEN: usize = 1 << 20;

    /// Returns the configuration with the given batch size.
    ///
    /// The batch size is the number of variables fixed at once whenever
    /// the global work stack runs dry.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Returns the configuration with the given frontier limit.
    pub fn with_max_frontier_len(mut self, max_frontier_len: usize) -> Self {
        self.max_frontier_len = max_frontier_len;
        self
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the maximum number of extensions a frontier expansion may produce.
    pub fn max_frontier_len(&self) -> usize {
        self.max_frontier_len
    }
}
