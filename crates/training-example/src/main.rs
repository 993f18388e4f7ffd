//! A fake training loop with messy numeric output, printed tidily.
//!
//! Run with `--plain` to see the unaligned output the writer replaces:
//! the simulated deltas vary wildly in magnitude and printed length, so
//! naive printing produces a ragged column for every value.

use anyhow::Result;
use clap::Parser;
use console::style;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tidyline::{LineWriter, Values};

#[derive(Debug, Parser)]
#[command(name = "training", about = "Simulates a model fit with aligned status lines")]
struct Args {
    /// Number of iterations to perform.
    #[arg(long, default_value_t = 100)]
    iters: u32,

    /// Print naively instead of through the line writer.
    #[arg(long)]
    plain: bool,

    /// Seed for the simulated noise, fixed so runs are repeatable.
    #[arg(long, default_value_t = 672229)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mode = if args.plain { "messy" } else { "clean" };
    let banner = format!("Running some code with {mode} printing within a loop.");
    println!("\n  {}\n", style(banner).dim());

    let mut writer = LineWriter::with_fields([
        ("iter", "    Iteration: {:d}"),
        ("value", "value: {:f}"),
        ("delta", "delta: {:f}"),
    ])?;

    let mut value = 1.0_f64;
    for iter in 0..args.iters {
        // noise whose magnitude and printed length both wander
        let scale = 10_f64.powi(rng.gen_range(-3..4));
        let delta = round_to(rng.gen_range(-1.0..1.0) * scale, rng.gen_range(1..12));
        value = round_to(value + delta, rng.gen_range(1..12));

        if iter % 10 != 0 {
            continue;
        }
        if args.plain {
            println!(
                "    Iteration: {}, value: {}, delta: {}",
                iter + 1,
                value,
                delta
            );
        } else {
            let values = Values::new()
                .set("iter", iter + 1)
                .set("value", value)
                .set("delta", delta);
            println!("{}", writer.format(&values)?);
        }
    }

    println!();
    Ok(())
}

/// Rounds to `digits` decimal places.
fn round_to(x: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (x * factor).round() / factor
}
