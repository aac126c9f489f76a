use counter::{
    Counter,
    RandomFormula,
    SearchConfig,
};
use log::LevelFilter;
use structopt::StructOpt;

/// Counts the models of a random CNF formula.
#[derive(StructOpt, Debug)]
#[structopt(name = "s3count")]
struct Opt {
    /// Number of clauses of the generated formula.
    clauses: usize,
    /// Number of variables of the generated formula.
    variables: usize,
    /// Fraction of clause matrix cells that receive a literal.
    density: f64,
    /// Seed of the formula generator.
    seed: u64,
    /// Number of variables fixed at once when the work queue runs dry.
    batch_size: usize,
    /// Maximum number of extensions a single frontier expansion may produce.
    #[structopt(long = "max-frontier", default_value = "1048576")]
    max_frontier: usize,
    /// Skips printing the generated formula.
    #[structopt(long = "no-dump")]
    no_dump: bool,
    /// Raises the log level, may be repeated.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

/// Returns the log level for the number of `-v` flags.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger.
fn init_logger(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .init();
}

fn main() {
    let opt = Opt::from_args();
    init_logger(opt.verbose);
    let params = RandomFormula {
        clauses: opt.clauses,
        variables: opt.variables,
        density: opt.density,
        seed: opt.seed,
    };
    let formula = match params.generate() {
        Ok(formula) => formula,
        Err(error) => {
            eprintln!("error: couldn't generate formula: {}", error);
            std::process::exit(1)
        }
    };
    if !opt.no_dump {
        println!("F : \n{}", formula);
    }
    let config = SearchConfig::default()
        .with_batch_size(opt.batch_size)
        .with_max_frontier_len(opt.max_frontier);
    match Counter::new(formula).count(&config) {
        Ok(result) => {
            let stats = result.stats();
            log::info!(
                "resolved {} assignments in {} evaluations",
                stats.resolved,
                stats.evaluations
            );
            println!("{}", result);
        }
        Err(error) => {
            eprintln!("error: encountered errors during counting: {}", error);
            std::process::exit(1)
        }
    }
}
