use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{
    hint::black_box,
    process::ExitCode,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Instant,
};
use tracing::{error, info};
use waypoint::{
    graph::{Graph, algo::QueueChoice},
    logging::init_tracing,
    statistics::SearchStats,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum QueueArg {
    /// Pick from the graph density, as `Graph::dijkstra` does
    Auto,
    Linear,
    Heap,
}

/// Shortest-path benchmark over random weighted graphs
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Benchmarks Dijkstra searches on random undirected graphs", long_about = None)]
struct Args {
    /// Vertex counts to sweep (comma-separated list, e.g., "100,1000")
    #[arg(long, value_delimiter = ',', required = true)]
    vertices: Vec<usize>,

    /// Edge probabilities to sweep (comma-separated list, e.g., "0.01,0.5,0.99")
    #[arg(long, value_delimiter = ',', required = true)]
    density: Vec<f64>,

    /// Random origin/destination pairs searched per job
    #[arg(short, long, default_value_t = 1000)]
    queries: usize,

    /// Number of threads to use for parallel search (comma-separated list, e.g., "1,2,4,8")
    #[arg(short, long, value_delimiter = ',', default_value = "1")]
    threads: Vec<usize>,

    /// Priority queue backing the searches
    #[arg(long, value_enum, default_value_t = QueueArg::Auto)]
    queue: QueueArg,

    /// Seed for graph generation and query sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print one JSON object per job instead of a text summary
    #[arg(long)]
    json: bool,

    /// Log every search at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize, Debug)]
struct JobReport {
    vertices: usize,
    edges: usize,
    density: f64,
    threads: usize,
    queue: QueueChoice,
    queries: usize,
    reachable: usize,
    hops_checksum: usize,
    seconds: f64,
    qps: f64,
    stats: SearchStats,
}

impl JobReport {
    fn print_summary(&self) {
        println!("\n==========");
        println!(
            "vertices={}, edges={}, density={}, threads={}, queue={:?}",
            self.vertices, self.edges, self.density, self.threads, self.queue
        );
        println!("==========");
        let queries = self.queries.max(1) as f64;
        println!(
            "Avg per search: {:.2} settled vertices, {:.2} relaxed edges",
            self.stats.get_vertices_settled() as f64 / queries,
            self.stats.get_edges_relaxed() as f64 / queries,
        );
        println!(
            "Reachable pairs: {}/{} (hops checksum {})",
            self.reachable, self.queries, self.hops_checksum
        );
        println!(
            "Completed {} searches in {:.2}s ({:.2} QPS)",
            self.queries, self.seconds, self.qps
        );
    }
}

fn random_graph(vertices: usize, density: f64, rng: &mut StdRng) -> Graph<u32> {
    let mut graph = Graph::new();
    for v in 0..vertices as u32 {
        // elements are distinct by construction
        let _ = graph.add_vertex(v);
    }
    for a in 0..vertices as u32 {
        for b in (a + 1)..vertices as u32 {
            if rng.random_bool(density) {
                let weight = rng.random_range(1.0..100.0);
                let _ = graph.connect_weighted(&a, &b, weight);
            }
        }
    }
    graph
}

fn run_search_job(
    graph: Arc<Graph<u32>>,
    queries: Arc<Vec<(u32, u32)>>,
    num_threads: usize,
    choice: QueueChoice,
) -> (usize, usize, SearchStats, f64) {
    let num_queries = queries.len();
    let start_time = Instant::now();

    let batch_size = 64;
    let next_batch = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..num_threads.max(1))
        .map(|_thread_id| {
            let graph = Arc::clone(&graph);
            let queries = Arc::clone(&queries);
            let next_batch = Arc::clone(&next_batch);

            thread::spawn(move || {
                let mut reachable = 0;
                let mut hops = 0;
                let mut local_stats = SearchStats::new();

                loop {
                    // Atomically grab the next batch of work
                    let batch_start = next_batch.fetch_add(batch_size, Ordering::Relaxed);
                    if batch_start >= num_queries {
                        break;
                    }
                    let batch_end = std::cmp::min(batch_start + batch_size, num_queries);

                    for (origin, destination) in &queries[batch_start..batch_end] {
                        let path = black_box(graph.dijkstra_with(
                            origin,
                            destination,
                            choice,
                            &mut local_stats,
                        ));
                        if let Ok(path) = path
                            && !path.is_empty()
                        {
                            reachable += 1;
                            hops += path.len() - 1;
                        }
                    }
                }

                (reachable, hops, local_stats)
            })
        })
        .collect();

    let mut reachable = 0;
    let mut hops = 0;
    let mut combined_stats = SearchStats::new();
    for handle in handles {
        let (local_reachable, local_hops, local_stats) =
            handle.join().expect("Thread panicked");
        reachable += local_reachable;
        hops += local_hops;
        combined_stats = combined_stats.merge(&local_stats);
    }

    (reachable, hops, combined_stats, start_time.elapsed().as_secs_f64())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(bad) = args.density.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        error!(density = *bad, "edge probability must lie in [0, 1]");
        return ExitCode::FAILURE;
    }

    info!(
        vertices = ?args.vertices,
        density = ?args.density,
        threads = ?args.threads,
        jobs = args.vertices.len() * args.density.len() * args.threads.len(),
        "starting cartesian product sweep"
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    for &vertices in &args.vertices {
        for &density in &args.density {
            info!(vertices, density, "generating graph");
            let graph = Arc::new(random_graph(vertices, density, &mut rng));
            let edges = graph.edge_count();
            info!(vertices, edges, "graph generated");

            let queries: Arc<Vec<(u32, u32)>> = Arc::new(if vertices == 0 {
                Vec::new()
            } else {
                (0..args.queries)
                    .map(|_| {
                        let origin = rng.random_range(0..vertices as u32);
                        let destination = rng.random_range(0..vertices as u32);
                        (origin, destination)
                    })
                    .collect()
            });

            let choice = match args.queue {
                QueueArg::Auto => QueueChoice::from_density(vertices, edges),
                QueueArg::Linear => QueueChoice::Linear,
                QueueArg::Heap => QueueChoice::BinaryHeap,
            };

            for &threads in &args.threads {
                let (reachable, hops_checksum, stats, seconds) =
                    run_search_job(Arc::clone(&graph), Arc::clone(&queries), threads, choice);
                let report = JobReport {
                    vertices,
                    edges,
                    density,
                    threads,
                    queue: choice,
                    queries: queries.len(),
                    reachable,
                    hops_checksum,
                    seconds,
                    qps: queries.len() as f64 / seconds.max(f64::EPSILON),
                    stats,
                };

                if args.json {
                    match serde_json::to_string(&report) {
                        Ok(line) => println!("{line}"),
                        Err(e) => {
                            error!(error = %e, "could not serialize job report");
                            return ExitCode::FAILURE;
                        }
                    }
                } else {
                    report.print_summary();
                }
            }
        }
    }

    info!("all jobs completed");
    ExitCode::SUCCESS
}
