use clap::Parser;
use randex::{random_with, reseed, Policy};
use std::io::{self, Write};

/// Print random integers in [FROM, TO], optionally skipping one value.
#[derive(Parser, Debug)]
#[command(name = "randex", version, allow_negative_numbers = true)]
struct Args {
    /// Lower bound (inclusive)
    from: i64,
    /// Upper bound (inclusive)
    to: i64,
    /// Value to leave out of the result
    #[arg(short = 'x', long)]
    exclude: Option<i64>,
    /// Number of values to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Seed for a reproducible sequence
    #[arg(short, long)]
    seed: Option<u64>,
    /// Sample without reaching the upper bound of the narrowed range
    #[arg(long)]
    exclusive_upper_bound: bool,
    /// Split around an excluded value even when it lies outside the range
    #[arg(long)]
    keep_outside_exclude: bool,
    /// Check each value and trace it at debug level
    #[arg(long)]
    validate: bool,
}

impl Args {
    fn policy(&self) -> Policy {
        Policy::default()
            .with_inclusive_upper_bound(!self.exclusive_upper_bound)
            .with_ignore_outside_exclude(!self.keep_outside_exclude)
            .with_validate(self.validate)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.from > args.to {
        log::warn!("from {} is greater than to {}", args.from, args.to);
    }
    if let Some(seed) = args.seed {
        reseed(seed);
    }

    let policy = args.policy();
    let mut out = io::stdout().lock();
    for _ in 0..args.count {
        writeln!(out, "{}", random_with(args.from, args.to, args.exclude, &policy))?;
    }
    Ok(())
}
