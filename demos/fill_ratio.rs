//! Report how closely the observed fill ratio follows the requested frequency.
//!
//! Usage: cargo run --release --example fill_ratio -- [size] [seed]
//!
//! Example:
//!   cargo run --release --example fill_ratio -- 500 7

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use speckle::{GridParams, fill_ratio, filled_cells, render};
use std::env;

const FREQUENCIES: [f64; 7] = [0.0, 0.05, 0.25, 0.5, 0.75, 0.95, 1.0];

fn main() {
    let args: Vec<String> = env::args().collect();

    let size: i64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(300);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("=== Fill Ratio ===");
    let n = GridParams { size, ..Default::default() }.rows();
    let cells = n.saturating_mul(n);
    println!("size = {}, seed = {}, cells = {}", size, seed, cells);
    println!();
    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>8}",
        "frequency", "live", "observed", "stderr", "z"
    );

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for frequency in FREQUENCIES {
        let params = GridParams { size, frequency };
        let grid = render(&params, &mut rng);
        let Some(observed) = fill_ratio(&grid) else {
            println!("{:>10.2} {:>10}", frequency, "-");
            continue;
        };
        let live = filled_cells(&grid).len();

        let stderr = (frequency * (1.0 - frequency) / cells as f64).sqrt();
        let z = if stderr > 0.0 {
            (observed - frequency) / stderr
        } else {
            0.0
        };
        println!(
            "{:>10.2} {:>10} {:>10.5} {:>10.5} {:>8.2}",
            frequency, live, observed, stderr, z
        );
    }
}
