//! Performance benchmark comparing sequential and parallel stepping

use std::time::Instant;

use life_universe::{Algorithm, Universe, UniverseConfig};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(size: u32, algorithm: Algorithm, iterations: u32) -> anyhow::Result<f64> {
    let mut universe = Universe::from_config(&UniverseConfig::new(size, size).with_algorithm(algorithm))?;
    universe.random_with(&mut StdRng::seed_from_u64(u64::from(size)));

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Universe tick benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>14} {:>14} {:>10}", "Size", "Sequential", "Parallel", "Speedup");
    println!("{:-<52}", "");

    for size in sizes {
        let sequential_ms = benchmark(size, Algorithm::Sequential, iterations)?;
        let parallel_ms = benchmark(size, Algorithm::Parallel, iterations)?;

        println!(
            "{:>10} {:>12.3}ms {:>12.3}ms {:>9.1}x",
            format!("{size}x{size}"),
            sequential_ms,
            parallel_ms,
            sequential_ms / parallel_ms
        );
    }

    println!("\n=== Memory usage (2048x2048) ===\n");

    let universe = Universe::new(2048, 2048)?;
    let view_bytes = universe.as_bytes().len();
    // Live buffer plus the equally sized scratch buffer
    println!("Cell buffers: {:>10} bytes ({:.1} MB)", view_bytes * 2, (view_bytes * 2) as f64 / 1_000_000.0);

    Ok(())
}
