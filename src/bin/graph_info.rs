use clap::{Arg, Command};
use std::process;

use itertools::Itertools;
use parbfs::generate::RandomGraphGenerator;
use parbfs::graph::IndexT;
use parbfs::traversal::{level_pool, pool_bfs};
use parbfs::util::timing::{format_seconds, timed};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let matches = Command::new("graph_info")
        .about("Generates a random graph and prints its degree and BFS level profile")
        .arg(
            Arg::new("vertices")
                .long("vertices")
                .short('n')
                .value_parser(clap::value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("connections")
                .long("connections")
                .short('m')
                .value_parser(clap::value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_parser(clap::value_parser!(IndexT))
                .default_value("0"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_parser(clap::value_parser!(usize))
                .default_value("4"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .default_value("42"),
        )
        .get_matches();

    let vertices = *matches.get_one::<usize>("vertices").unwrap();
    let connections = *matches.get_one::<usize>("connections").unwrap();
    let start = *matches.get_one::<IndexT>("start").unwrap();
    let threads = *matches.get_one::<usize>("threads").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();

    let mut rng = StdRng::seed_from_u64(seed);
    let (graph, elapsed) = timed(|| {
        RandomGraphGenerator::new()
            .with_progress_bar()
            .generate(&mut rng, vertices, connections)
    });

    // Basic graph statistics
    println!("Graph generated in {}", format_seconds(elapsed));
    println!("Number of vertices: {}", graph.n());
    println!("Total edges: {}", graph.total_edges());
    println!(
        "Average degree: {:.2}",
        graph.total_edges() as f64 / graph.n().max(1) as f64
    );
    println!("Maximum degree: {}", graph.max_degree());

    // Show degree distribution (limit to 10 most common degrees)
    println!("\nDegree distribution (top 10):");
    let distribution = (0..graph.n() as IndexT)
        .map(|i| graph.degree(i))
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (i, (degree, count)) in distribution.take(10).enumerate() {
        println!(
            "  {}: {} vertices with degree {} ({:.2}%)",
            i + 1,
            count,
            degree,
            (count as f64 / graph.n() as f64) * 100.0
        );
    }

    if !graph.contains_vertex(start) {
        println!("\nStart vertex {} is not in the graph, nothing to traverse", start);
        return;
    }

    let (serial, serial_time) = timed(|| graph.bfs(start));
    let (parallel, parallel_time) = timed(|| graph.parallel_bfs(start, threads));

    let pool = match level_pool(threads) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error building a pool of {} threads: {}", threads, e);
            process::exit(1);
        }
    };
    let (pooled, pool_time) = timed(|| pool_bfs(&graph, start, &pool));

    println!("\nBFS from vertex {}:", start);
    println!(
        "  reached {} of {} vertices in {} levels",
        serial.num_visited(),
        graph.n(),
        serial.depth()
    );
    println!("  serial:            {}", format_seconds(serial_time));
    println!("  parallel (spawn):  {}", format_seconds(parallel_time));
    println!("  parallel (pool):   {}", format_seconds(pool_time));

    println!("\nLevel sizes:");
    for (level, size) in serial.frontier_sizes().iter().enumerate() {
        println!("  {}: {}", level, size);
    }

    if parallel != serial || pooled != serial {
        eprintln!("\nWarning: traversal variants disagree on this graph");
        process::exit(2);
    }

    println!("\nGraph info summary complete");
}
