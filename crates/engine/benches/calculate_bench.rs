//! Benchmarks for the projection engine.
//! Run with: cargo bench -p nurture-engine

use nurture_core::CalculatorInputs;
use nurture_engine::{calculate, Preset};

fn main() {
    let base = CalculatorInputs::default();
    let variants: Vec<CalculatorInputs> = Preset::ALL.iter().map(|p| p.apply(&base)).collect();

    // Warmup
    for _ in 0..1_000 {
        std::hint::black_box(calculate(&base));
    }

    let iterations = 100_000;
    let start = std::time::Instant::now();
    for i in 0..iterations {
        let inputs = &variants[i % variants.len()];
        std::hint::black_box(calculate(std::hint::black_box(inputs)));
    }
    let elapsed = start.elapsed();

    let per_call = elapsed / iterations as u32;
    println!("=== Projection Benchmark ===");
    println!("Iterations:     {}", iterations);
    println!("Total time:     {:?}", elapsed);
    println!("Per calculation: {:?}", per_call);
    println!(
        "Throughput:     {:.0} calculations/sec",
        iterations as f64 / elapsed.as_secs_f64()
    );
}
