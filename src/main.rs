use anyhow::{bail, Context, Result};
use clap::Parser;
use hampath::bench::{run_benchmark, write_csv, write_json_lines, BenchConfig, BenchRecord, ExponentialFit};
use hampath::builder::{read_graphs_from_path, Segment};
use hampath::graph::Graph;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Exhaustive Hamiltonian path search over clause-encoded graphs.
#[derive(Debug, Parser)]
#[command(name = "hampath", version, about)]
struct Cli {
    /// Clause file to benchmark (`c` rows split graphs, `p` rows are ignored).
    file: Option<PathBuf>,

    /// Run the compiled-in known graphs and report whether every verdict is correct.
    #[arg(long, alias = "validate", conflicts_with_all = ["file", "random"])]
    check: bool,

    /// Benchmark random G(n, p) graphs of sizes 1..=N instead of reading a file.
    #[arg(long, value_name = "N", conflicts_with = "file")]
    random: Option<usize>,

    /// Edge probability for --random.
    #[arg(long, default_value_t = 0.5, value_name = "P")]
    density: f64,

    /// Seed for --random (default: fixed).
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Solve graphs in parallel, one graph per worker.
    #[arg(long)]
    parallel: bool,

    /// Skip graphs with more than N vertices.
    #[arg(long, value_name = "N")]
    max_vertices: Option<usize>,

    /// Do not re-check witnesses after solving.
    #[arg(long)]
    no_verify: bool,

    /// Print records as JSON lines instead of a table.
    #[arg(long)]
    json: bool,

    /// Also write records as CSV to this file.
    #[arg(long, value_name = "OUT")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.check {
        return match hampath::validate::check_known_graphs() {
            Ok(()) => {
                println!("Validation OK: known graphs give the expected verdicts.");
                Ok(())
            }
            Err(e) => bail!("Validation FAILED: {e}"),
        };
    }

    let segments = if let Some(n) = cli.random {
        if !(0.0..=1.0).contains(&cli.density) {
            bail!("--density must be within [0, 1], got {}", cli.density);
        }
        random_segments(n, cli.density, cli.seed)
    } else if let Some(path) = &cli.file {
        read_graphs_from_path(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        bail!("nothing to do: pass a FILE, --random N, or --check (see --help)");
    };

    let cfg = BenchConfig {
        parallel: cli.parallel,
        max_vertices: cli.max_vertices,
        verify_witness: !cli.no_verify,
    };
    let records = run_benchmark(&segments, &cfg);

    if cli.json {
        write_json_lines(&records, io::stdout().lock())?;
    } else {
        print_table(&records);
    }

    if let Some(out) = &cli.csv {
        let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
        write_csv(&records, BufWriter::new(file))?;
        log::info!("wrote {}", out.display());
    }

    match ExponentialFit::from_records(&records) {
        Some(fit) => {
            println!("Fit: {fit}");
            if let Some(largest) = records.iter().filter(|r| !r.skipped).map(|r| r.vertex_count).max() {
                let next = largest + 1;
                println!("Predicted time for n={next}: {:.2} us", fit.predict(next as f64));
            }
        }
        None => log::info!("not enough timed graphs for a growth fit"),
    }
    Ok(())
}

fn random_segments(max_n: usize, p: f64, seed: u64) -> Vec<Segment> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    (1..=max_n)
        .map(|n| Segment {
            graph: Graph::random_gnp(&mut rng, n, p),
            vertex_count: n,
        })
        .collect()
}

fn print_table(records: &[BenchRecord]) {
    println!("--------------------------------------------------");
    println!("{:>5} {:>8} {:>10} {:>14} {:>12}", "graph", "vertices", "result", "time (us)", "candidates");
    println!("--------------------------------------------------");
    for r in records {
        if r.skipped {
            println!("{:>5} {:>8} {:>10}", r.index, r.vertex_count, "skipped");
            continue;
        }
        let result = if r.found { "found" } else { "not found" };
        println!(
            "{:>5} {:>8} {:>10} {:>14.2} {:>12}",
            r.index, r.vertex_count, result, r.elapsed_micros, r.candidates_checked
        );
        if r.found {
            log::debug!("[Graph {}] witness: {:?}", r.index, r.witness);
        }
    }
    println!("--------------------------------------------------");
}
