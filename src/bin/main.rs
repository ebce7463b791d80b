use std::process;

use clap::Parser;
use stopwatch::Stopwatch;

use dense_paths::{
    run_batch_with, BatchConfig, DEFAULT_FIRST, DEFAULT_INPUT_PATTERN, DEFAULT_LAST,
    DEFAULT_OUTPUT_PATTERN,
};

/// Calculates the shortest distances between all pairs of vertices for a numbered sequence of
/// problem files and writes one result file per problem.
#[derive(Parser, Debug)]
struct Opts {
    /// Input file names, `{}` is replaced by the file index
    #[clap(long, default_value = DEFAULT_INPUT_PATTERN)]
    input_pattern: String,
    /// Output file names, `{}` is replaced by the file index
    #[clap(long, default_value = DEFAULT_OUTPUT_PATTERN)]
    output_pattern: String,
    /// First file index
    #[clap(long, default_value_t = DEFAULT_FIRST)]
    first: usize,
    /// Last file index (inclusive)
    #[clap(long, default_value_t = DEFAULT_LAST)]
    last: usize,
    /// Print the adjacency matrix of every graph
    #[clap(long)]
    print_matrix: bool,
}

fn main() {
    // e.g. run like this:
    // RUST_LOG=debug cargo run --release -- --input-pattern "data/pmed{}.txt" --last 5
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();
    let config = BatchConfig::new(
        &opts.input_pattern,
        &opts.output_pattern,
        opts.first,
        opts.last,
    );
    println!("Running batch {:?}", config);

    let mut time = Stopwatch::new();
    time.start();
    let report = run_batch_with(&config, &mut |index, problem, fw| {
        if opts.print_matrix {
            println!("graph {}:\n{}", index, problem.get_graph().matrix_string());
        }
        if fw.has_negative_cycle() {
            println!("graph {} has a negative cycle", index);
        }
    });
    time.stop();

    println!(
        "processed files ................... {}",
        report.processed.len()
    );
    println!(
        "failed files ...................... {}",
        report.failures.len()
    );
    for (index, e) in &report.failures {
        println!("  {} .. {}", index, e);
    }
    println!("total time ........................ {} ms", time.elapsed_ms());
    if !report.is_success() {
        process::exit(1);
    }
}
