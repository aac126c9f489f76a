use crate::{
    Assignment,
    ClauseActivity,
    Error,
    Evaluation,
    Evaluator,
    Formula,
    FrontierExpander,
    SearchConfig,
    Sign,
};
use bounded::BoundedStack;
use core::fmt::{
    self,
    Display,
};
use log::{
    debug,
    trace,
};
use num_bigint::BigUint;

/// Counters gathered during a single search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Assignments popped from the local stack and resolved.
    pub resolved: u64,
    /// Calls to the evaluator.
    pub evaluations: u64,
    /// Undetermined evaluations that branched on the next variable.
    pub branches: u64,
    /// Paths that ended in a satisfied formula.
    pub satisfied: u64,
    /// Paths that ended in a falsified formula.
    pub falsified: u64,
    /// Frontier expansions of a drained global stack.
    pub expansions: u64,
    /// Largest length of the global stack.
    pub peak_global_len: usize,
    /// Largest length of the local stack.
    pub peak_local_len: usize,
}

/// The result of a model counting search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCount {
    count: BigUint,
    stats: SearchStats,
}

impl ModelCount {
    /// Returns the number of satisfying total assignments.
    pub fn count(&self) -> &BigUint {
        &self.count
    }

    /// Returns the statistics of the search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consumes `self` and returns the number of satisfying total assignments.
    pub fn into_count(self) -> BigUint {
        self.count
    }
}

impl Display for ModelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.count.fmt(f)
    }
}

/// Depth-first model counting over a global and a local work stack.
///
/// The global stack holds disjoint subtrees produced by frontier expansion,
/// the local stack holds the deferred false branches of the current subtree.
/// Every pushed assignment is a separate subtree of the search space, so the
/// total count is the plain sum of the counts of all popped assignments.
///
/// # Note
///
/// Both stacks are bounded. The global stack holds at most
/// `2^min(t, v)` assignments. The local stack holds at most `v + 1`
/// assignments since its entries have strictly increasing assigned
/// prefixes from bottom to top.
#[derive(Debug)]
pub struct SearchDriver<'a> {
    evaluator: Evaluator<'a>,
    expander: FrontierExpander,
    global: BoundedStack<Assignment>,
    local: BoundedStack<Assignment>,
    activity: ClauseActivity,
    count: BigUint,
    stats: SearchStats,
}

/// Pushes the assignment onto the work stack.
fn push(stack: &mut BoundedStack<Assignment>, assignment: Assignment) -> Result<(), Error> {
    let limit = stack.limit();
    stack
        .try_push(assignment)
        .map_err(|_| Error::WorkStackOverflow { limit })
}

impl<'a> SearchDriver<'a> {
    /// Creates a new search driver with the empty assignment on the global stack.
    ///
    /// # Errors
    ///
    /// If a frontier expansion with the configured batch size could produce
    /// more extensions than the configuration allows.
    pub fn new(formula: &'a Formula, config: &SearchConfig) -> Result<Self, Error> {
        let len_variables = formula.len_variables();
        let batch_size = config.batch_size();
        let max_frontier_len = config.max_frontier_len();
        let frontier_len = u32::try_from(batch_size.min(len_variables))
            .ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
            .filter(|&len| len <= max_frontier_len)
            .ok_or(Error::FrontierTooLarge {
                batch_size,
                max_frontier_len,
            })?;
        let mut global = BoundedStack::with_limit(frontier_len);
        push(&mut global, Assignment::new(len_variables))?;
        Ok(Self {
            evaluator: Evaluator::new(formula),
            expander: FrontierExpander::new(batch_size),
            global,
            local: BoundedStack::with_limit(len_variables.saturating_add(1)),
            activity: ClauseActivity::new(formula),
            count: BigUint::default(),
            stats: SearchStats::default(),
        })
    }

    /// Runs the search to completion and returns the number of models.
    ///
    /// # Errors
    ///
    /// If a work stack exceeds its limit.
    pub fn run(mut self) -> Result<ModelCount, Error> {
        let formula = self.evaluator.formula();
        debug!(
            "counting models of {} clauses over {} variables (batch size {})",
            formula.len_clauses(),
            formula.len_variables(),
            self.expander.batch_size(),
        );
        while let Some(assignment) = self.next_assignment()? {
            self.resolve(assignment)?;
        }
        self.stats.peak_global_len = self.global.peak_len();
        self.stats.peak_local_len = self.local.peak_len();
        debug!("search finished with {} models: {:?}", self.count, self.stats);
        Ok(ModelCount {
            count: self.count,
            stats: self.stats,
        })
    }

    /// Returns the next assignment to resolve or `None` if the search is done.
    ///
    /// Refills the local stack from the global stack when it runs empty.
    /// The last assignment taken from the global stack is sharded by the
    /// frontier expander unless it is already complete.
    fn next_assignment(&mut self) -> Result<Option<Assignment>, Error> {
        if self.local.is_empty() {
            let popped = match self.global.pop() {
                Some(popped) => popped,
                None => return Ok(None),
            };
            if self.global.is_empty() && !popped.is_complete() {
                self.expand(&popped)?;
            } else {
                push(&mut self.local, popped)?;
            }
        }
        Ok(self.local.pop())
    }

    /// Shards the assignment: all extensions but the last go to the global stack.
    fn expand(&mut self, assignment: &Assignment) -> Result<(), Error> {
        let mut extensions = self.expander.expand(assignment);
        trace!(
            "expanding frontier at prefix {} into {} extensions",
            assignment.len_assigned(),
            extensions.len(),
        );
        self.stats.expansions += 1;
        let last = extensions
            .next_back()
            .expect("frontier expansion always yields at least one extension");
        for extension in extensions {
            push(&mut self.global, extension)?;
        }
        push(&mut self.local, last)
    }

    /// Resolves the assignment by following true branches in place.
    ///
    /// False branches are deferred to the local stack.
    fn resolve(&mut self, mut assignment: Assignment) -> Result<(), Error> {
        self.stats.resolved += 1;
        self.activity.reset();
        loop {
            self.stats.evaluations += 1;
            match self.evaluator.evaluate(&assignment, &mut self.activity) {
                Evaluation::Satisfied => {
                    self.stats.satisfied += 1;
                    self.count += BigUint::from(1_u32) << assignment.len_unassigned();
                    return Ok(())
                }
                Evaluation::Falsified => {
                    self.stats.falsified += 1;
                    return Ok(())
                }
                Evaluation::Undetermined => {
                    self.stats.branches += 1;
                    let mut deferred = assignment.clone();
                    assignment.assign_next(Sign::True)?;
                    deferred.assign_next(Sign::False)?;
                    push(&mut self.local, deferred)?;
                }
            }
        }
    }
}
