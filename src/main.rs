use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn, Level};

use road_graph::closure::transitive_closure;
use road_graph::config::NetworkConfig;
use road_graph::distance::DistanceMatrix;
use road_graph::models::Graph;
use road_graph::shortest_path::{all_pairs_shortest_paths, farthest_reachable};
use road_graph::theorems::{check_dirac, check_ore, TheoremReport};
use road_graph::tour::approximate_tour_from;
use road_graph::Result;

/// Analyze a road network: Hamiltonicity, shortest routes, and a tour.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// JSON network description, else the built-in sample network
    #[arg(long)]
    network: Option<PathBuf>,

    /// Location the farthest-node query and the tour start from
    #[arg(long, default_value = "A1")]
    start: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    let level = match opt.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(opt: &Opt) -> Result<()> {
    let config = match &opt.network {
        Some(path) => NetworkConfig::from_path(path)?,
        None => NetworkConfig::sample(),
    };
    let graph = config.build_graph()?;
    let start = graph.require(&opt.start)?;

    println!("Adjacency matrix:");
    print_matrix(&graph, &graph.adjacency_matrix());
    println!();

    println!("Transitive closure:");
    print_matrix(&graph, &transitive_closure(&graph).adjacency_matrix());
    println!();

    println!("Dirac's theorem:");
    println!("{}", TheoremReport::dirac(&graph, check_dirac(&graph)));
    println!();

    println!("Ore's theorem:");
    println!("{}", TheoremReport::ore(&graph, check_ore(&graph)));
    println!();

    let everyone: Vec<_> = graph.nodes().collect();
    match farthest_reachable(&graph, start, &everyone) {
        Some(far) => {
            println!("Farthest location: {}", graph.label(far.node));
            println!("Distance: {:.2}", far.distance);
            println!("Shortest path: {:?}", far.path.labels(&graph));
        }
        None => println!("No location is reachable from {}", opt.start),
    }
    println!();

    for (source, target, path) in all_pairs_shortest_paths(&graph).iter() {
        println!(
            "Shortest route from {} to {}:",
            graph.label(source),
            graph.label(target)
        );
        println!("Path: {:?}", path.labels(&graph));
        println!("Total distance: {:.2}", path.cost());
        println!();
    }

    let tour = approximate_tour_from(&graph, start)?;
    if tour.is_cycle() {
        println!("Minimum cost Hamiltonian cycle starting at {}:", opt.start);
    } else {
        warn!("no Hamiltonian cycle found; legs follow shortest paths");
        println!("Minimum cost closed walk starting at {}:", opt.start);
    }
    println!("Order: {:?}", tour.labels(&graph));
    println!("Walk: {:?}", tour.walk_labels(&graph));
    println!("Total cost: {:.2}", tour.cost());
    Ok(())
}

fn print_matrix(graph: &Graph, matrix: &DistanceMatrix) {
    print!("{:>6}", "");
    for id in graph.nodes() {
        print!("{:>8}", graph.label(id));
    }
    println!();
    for id in graph.nodes() {
        print!("{:>6}", graph.label(id));
        for value in matrix.row(id.index()) {
            print!("{value:>8.2}");
        }
        println!();
    }
}
