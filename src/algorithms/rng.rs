use crate::constants::*;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::env;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(new_rng());
}

// Initialize RNG: fixed seed, then environment, then thread RNG
fn new_rng() -> SmallRng {
    if RNG_SEED != 0 {
        return SmallRng::seed_from_u64(RNG_SEED);
    }
    match env::var(SEED_ENV_VAR) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seed) => {
                debug!("seeding rng from {SEED_ENV_VAR}={seed}");
                SmallRng::seed_from_u64(seed)
            }
            Err(e) => {
                warn!("ignoring {SEED_ENV_VAR}={value:?}: {e}");
                SmallRng::from_rng(&mut rand::rng())
            }
        },
        Err(_) => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Replace the generator of the current thread with one seeded from `seed`.
pub fn reseed(seed: u64) {
    RNG.with_borrow_mut(|rng| *rng = SmallRng::seed_from_u64(seed));
}

/// Run `f` with the generator of the current thread.
pub fn with_rng<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    RNG.with_borrow_mut(f)
}

/// Uniform `f64` in `[0, 1)`.
pub fn unit() -> f64 {
    with_rng(|rng| unit_from(rng))
}

pub fn unit_from<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Fair coin flip.
pub fn coin_flip() -> bool {
    with_rng(|rng| coin_flip_from(rng))
}

pub fn coin_flip_from<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(LOWER_SPLIT_PROBABILITY)
}
