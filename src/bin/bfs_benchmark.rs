use clap::{Arg, Command};
use std::path::PathBuf;
use std::process;

use parbfs::generate::RandomGraphGenerator;
use parbfs::util::build_sweep;
use parbfs::util::results::{BenchmarkRecord, ResultsWriter};
use parbfs::util::timing::{format_seconds, timed};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let matches = Command::new("bfs_benchmark")
        .about("Times serial against parallel BFS on random graphs of growing size")
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
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_parser(clap::value_parser!(usize))
                .default_value("4")
                .help("Threads used by the parallel BFS"),
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
                .default_value("tmp/results.csv")
                .help("CSV file the timings are appended to"),
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

    let threads = *matches.get_one::<usize>("threads").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());

    let mut results = match ResultsWriter::open(&output) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("Failed to open {} for writing: {}", output.display(), e);
            process::exit(1);
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let generator = RandomGraphGenerator::new().with_progress_bar();

    for (vertices, connections) in sweep {
        println!("--------------------------");
        println!("Generating graph of size {} ... wait", vertices);

        let (graph, elapsed) = timed(|| generator.generate(&mut rng, vertices, connections));
        let edges = graph.total_edges();
        println!("generated {} edges in {}", edges, format_seconds(elapsed));

        let (serial, serial_time) = timed(|| graph.bfs(0));
        println!(
            "serial BFS reached {} vertices in {}",
            serial.num_visited(),
            format_seconds(serial_time)
        );

        let (parallel, parallel_time) = timed(|| graph.parallel_bfs(0, threads));
        println!(
            "parallel BFS ({} threads) reached {} vertices in {}",
            threads,
            parallel.num_visited(),
            format_seconds(parallel_time)
        );

        if parallel != serial {
            eprintln!(
                "Warning: serial and parallel BFS disagree on the graph of size {}",
                vertices
            );
        }

        let record = BenchmarkRecord {
            vertices,
            connections,
            edges,
            serial: serial_time,
            parallel: parallel_time,
            threads,
        };
        if let Err(e) = results.append(&record) {
            eprintln!("Failed to write to {}: {}", output.display(), e);
            process::exit(1);
        }
    }

    println!("Done. Results in {}", output.display());
}
