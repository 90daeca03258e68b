/// Seed of the thread-local generator. Zero means "not fixed": the seed is
/// then taken from `SEED_ENV_VAR`, or from the thread RNG.
pub const RNG_SEED: u64 = 0;

pub const SEED_ENV_VAR: &str = "RANDEX_SEED";

/// Probability of picking the lower sub-range when splitting around an
/// excluded value.
pub const LOWER_SPLIT_PROBABILITY: f64 = 0.5;
