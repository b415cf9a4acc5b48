//! # Shape recall demo
//!
//! Trains a Hopfield network on six 8×5 geometric shapes, then recalls a noisy
//! probe and prints every iterate.
//!
//! ```bash
//! cargo run --example recall_shapes --features std            # built-in shapes
//! cargo run --example recall_shapes --features std -- dataset # shapes from text files
//! ```
//!
//! With a directory argument the shapes are read from `<dir>/<shape>.txt` and
//! the probe from `<dir>/probe.txt`.

use std::path::{Path, PathBuf};
use std::process;

use hopfield_core::io::{read_grid, LoadError};
use hopfield_core::recall::RecallConfig;
use hopfield_core::render::{ActivationView, GridView};
use hopfield_core::shapes::{self, Shape, ShapeGrid, ShapeNetwork, ShapePattern, CELLS, COLS, ROWS};
use hopfield_core::trace::RecallTrace;
use hopfield_core::RecallStatus;

const MAX_ITERATIONS: usize = 50;

// ── Display helpers ───────────────────────────────────────────────────────────

fn print_grid(title: &str, pattern: &ShapePattern) {
    println!("\n{}", title);
    println!("{}", GridView::<ROWS, COLS, CELLS>::new(pattern));
}

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_from_dir(dir: &Path) -> Result<(Vec<(Shape, ShapeGrid)>, ShapeGrid), LoadError> {
    let mut grids = Vec::with_capacity(Shape::ALL.len());
    for shape in Shape::ALL {
        let path: PathBuf = dir.join(format!("{}.txt", shape.name()));
        println!(" - {}", path.display());
        grids.push((shape, read_grid(&path)?));
    }
    let probe = read_grid(dir.join("probe.txt"))?;
    Ok((grids, probe))
}

fn built_in() -> (Vec<(Shape, ShapeGrid)>, ShapeGrid) {
    let grids = Shape::ALL.iter().map(|&s| (s, s.grid())).collect();
    (grids, shapes::noisy_probe())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("Loading patterns:");
    let (grids, probe) = match std::env::args().nth(1) {
        Some(dir) => match load_from_dir(Path::new(&dir)) {
            Ok(loaded) => loaded,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
        None => {
            for shape in Shape::ALL {
                println!(" - {} (built-in)", shape.name());
            }
            built_in()
        }
    };

    let mut net = ShapeNetwork::new();
    for (shape, grid) in &grids {
        if let Err(err) = net.store_grid(shape.name(), grid) {
            eprintln!("{}: {}", shape.name(), err);
            process::exit(1);
        }
    }
    println!("\nTraining done ({0}x{0} weight matrix, {1} patterns).", CELLS, net.len());

    let input: ShapePattern = probe.to_pattern();
    print_grid("Input (A)", &input);

    let config = RecallConfig::new(MAX_ITERATIONS).traced();
    let mut trace = RecallTrace::new();
    let out = net.recall_observed(&input, &config, &mut trace);

    for frame in trace.frames() {
        match &frame.activation {
            None => print_grid(&format!("U({})  (input)", frame.iteration), &frame.state),
            Some(y) => {
                println!("U({})·W: {}", frame.iteration - 1, ActivationView(y));
                print_grid(&format!("U({})", frame.iteration), &frame.state);
            }
        }
    }

    match out.status {
        RecallStatus::Converged => println!("\nStable: no change between iterations."),
        RecallStatus::IterationCapReached => {
            println!("\nIteration cap reached (possible cycle).")
        }
    }

    print_grid("Output (U)", &out.state);
    if let Some(m) = net.identify(&out.state) {
        if m.is_exact() {
            println!("\nRecognised: {}", m.label);
        } else {
            println!("\nNearest stored shape: {} ({} cells differ)", m.label, m.distance);
        }
    }
}
