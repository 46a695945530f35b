use clap::{Arg, Command};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use parbfs::generate::RandomGraphGenerator;
use parbfs::util::build_sweep;
use parbfs::util::results::write_scaling_table;
use parbfs::util::timing::{format_seconds, timed};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let matches = Command::new("thread_scaling")
        .about("Measures parallel BFS at doubling thread counts against the serial baseline")
        .arg(
            Arg::new("sizes")
                .long("sizes")
                .value_name("N,...")
                .value_delimiter(',')
                .value_parser(clap::value_parser!(usize))
                .help("Vertex counts of the generated graphs"),
        )
        .arg(
            Arg::new("connections")
                .long("connections")
                .value_name("M,...")
                .value_delimiter(',')
                .value_parser(clap::value_parser!(usize))
                .help("Random edge insertions per graph, one per size"),
        )
        .arg(
            Arg::new("max_size")
                .long("max-size")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Skip graphs with more vertices than this"),
        )
        .arg(
            Arg::new("max_threads")
                .long("max-threads")
                .value_parser(clap::value_parser!(usize))
                .default_value("32")
                .help("Largest thread count; counts double starting from 2"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .default_value("42")
                .help("Seed for graph generation"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .default_value("tmp/results_graph.csv")
                .help("CSV file for the timing table"),
        )
        .get_matches();

    let sizes = matches
        .get_many::<usize>("sizes")
        .map(|values| values.copied().collect());
    let connections = matches
        .get_many::<usize>("connections")
        .map(|values| values.copied().collect());
    let max_size = matches.get_one::<usize>("max_size").copied();

    let Some(sweep) = build_sweep(sizes, connections, max_size) else {
        eprintln!("--sizes and --connections must be given together and have the same length");
        process::exit(1);
    };

    let max_threads = *matches.get_one::<usize>("max_threads").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());

    let mut rng = StdRng::seed_from_u64(seed);
    let generator = RandomGraphGenerator::new().with_progress_bar();
    let mut rows: Vec<(String, Vec<Duration>)> = Vec::new();

    // a fresh graph for every run, drawn from one continuing rng
    println!("Start serial BFS");
    let mut serial_times = Vec::with_capacity(sweep.len());
    for &(vertices, connections) in &sweep {
        println!("Generating graph of size {} ... wait", vertices);
        let graph = generator.generate(&mut rng, vertices, connections);
        let (_, elapsed) = timed(|| graph.bfs(0));
        println!("serial BFS in {}", format_seconds(elapsed));
        serial_times.push(elapsed);
    }
    rows.push(("serial".to_string(), serial_times));

    let thread_counts =
        std::iter::successors(Some(2usize), |&t| t.checked_mul(2)).take_while(|&t| t <= max_threads);
    for threads in thread_counts {
        println!("Start parallel BFS with {} threads", threads);
        let mut parallel_times = Vec::with_capacity(sweep.len());
        for &(vertices, connections) in &sweep {
            println!("Generating graph of size {} ... wait", vertices);
            let graph = generator.generate(&mut rng, vertices, connections);
            let (_, elapsed) = timed(|| graph.parallel_bfs(0, threads));
            println!("parallel BFS in {}", format_seconds(elapsed));
            parallel_times.push(elapsed);
        }
        rows.push((format!("parallel_{}", threads), parallel_times));
    }

    let sizes: Vec<usize> = sweep.iter().map(|&(vertices, _)| vertices).collect();
    if let Err(e) = write_scaling_table(&output, &sizes, &rows) {
        eprintln!("Failed to write {}: {}", output.display(), e);
        process::exit(1);
    }

    println!("Done. Results in {}", output.display());
}
