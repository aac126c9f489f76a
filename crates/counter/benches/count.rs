use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};
use s3count_counter::{
    Assignment,
    ClauseActivity,
    Counter,
    Evaluator,
    Formula,
    RandomFormula,
    SearchConfig,
    Sign,
};
use std::fmt::{
    self,
    Display,
};

criterion_group!(bench_count, bench_count_random, bench_evaluate);
criterion_main!(bench_count);

/// The benchmark parameters.
#[derive(Debug, Copy, Clone)]
pub struct BenchParams {
    /// The amount of clauses of the random formula.
    len_clauses: usize,
    /// The amount of variables of the random formula.
    len_variables: usize,
    /// The number of variables fixed per frontier expansion.
    batch_size: usize,
}

impl BenchParams {
    /// Creates new benchmark parameters.
    pub fn new(len_clauses: usize, len_variables: usize, batch_size: usize) -> Self {
        Self {
            len_clauses,
            len_variables,
            batch_size,
        }
    }

    /// Generates the random formula of the benchmark.
    fn formula(&self) -> Formula {
        RandomFormula {
            clauses: self.len_clauses,
            variables: self.len_variables,
            density: 0.2,
            seed: 42,
        }
        .generate()
        .unwrap()
    }
}

impl Display for BenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(#clauses = {}, #variables = {}, batch size = {})",
            self.len_clauses, self.len_variables, self.batch_size
        )
    }
}

fn bench_count_random(c: &mut Criterion) {
    let mut g = c.benchmark_group("Counter::count");
    g.sample_size(10);
    g.sampling_mode(criterion::SamplingMode::Flat);
    for &batch_size in &[0, 4, 8] {
        let params = BenchParams::new(60, 20, batch_size);
        let counter = Counter::new(params.formula());
        let config = SearchConfig::default().with_batch_size(batch_size);
        g.bench_function(BenchmarkId::from_parameter(params), |bencher| {
            bencher.iter(|| black_box(counter.count(&config).unwrap()))
        });
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let mut g = c.benchmark_group("Evaluator::evaluate");
    let params = BenchParams::new(1_000, 50, 0);
    let formula = params.formula();
    let evaluator = Evaluator::new(&formula);
    let mut assignment = Assignment::new(formula.len_variables());
    for _ in 0..10 {
        assignment.assign_next(Sign::False).unwrap();
    }
    let mut activity = ClauseActivity::new(&formula);
    g.bench_function(BenchmarkId::from_parameter(params), |bencher| {
        bencher.iter(|| {
            activity.reset();
            black_box(evaluator.evaluate(&assignment, &mut activity))
        })
    });
}
