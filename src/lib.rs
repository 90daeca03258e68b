//! Random integers in an inclusive range, optionally skipping one value.

pub mod algorithms;
pub mod constants;
pub mod policy;
pub mod validation;

pub use algorithms::narrow::{narrow_range, InclusiveRange};
pub use algorithms::rng::reseed;
pub use algorithms::sample::sample;
pub use policy::Policy;
pub use validation::{validate, Validation};

use algorithms::rng::with_rng;
use rand::Rng;

/// Random integer in `[from, to]` other than `exclude`, drawn from the
/// thread-local generator with the default [`Policy`].
///
/// `from <= to` is not checked. A degenerate range such as
/// `random(5, 5, Some(5))` returns a value outside the range.
pub fn random(from: i64, to: i64, exclude: Option<i64>) -> i64 {
    random_with(from, to, exclude, &Policy::default())
}

/// Same as [`random`], with the arithmetic chosen by `policy`.
pub fn random_with(from: i64, to: i64, exclude: Option<i64>, policy: &Policy) -> i64 {
    with_rng(|rng| random_from(rng, from, to, exclude, policy))
}

/// Same as [`random_with`], drawing from `rng`.
pub fn random_from<R: Rng + ?Sized>(
    rng: &mut R,
    from: i64,
    to: i64,
    exclude: Option<i64>,
    policy: &Policy,
) -> i64 {
    let range = narrow_range(rng, from, to, exclude, policy);
    let value = sample(rng, range, policy);
    if policy.validate {
        validation::trace(from, to, exclude, value);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn seen(from: i64, to: i64, exclude: Option<i64>, policy: &Policy) -> BTreeSet<i64> {
        let mut rng = SmallRng::seed_from_u64(5);
        (0..10_000)
            .map(|_| random_from(&mut rng, from, to, exclude, policy))
            .collect()
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(seen(5, 5, None, &Policy::default()), BTreeSet::from([5]));
    }

    #[test]
    fn test_exclude_bounds() {
        let policy = Policy::default();
        assert_eq!(seen(1, 10, Some(1), &policy), (2..=10).collect());
        assert_eq!(seen(1, 10, Some(10), &policy), (1..=9).collect());
    }

    #[test]
    fn test_exclude_interior_covers_the_rest() {
        let expected: BTreeSet<i64> = (1..=10).filter(|&v| v != 5).collect();
        assert_eq!(seen(1, 10, Some(5), &Policy::default()), expected);
    }

    #[test]
    fn test_first_version_matches_default_inside_range() {
        let expected: BTreeSet<i64> = (1..=10).filter(|&v| v != 3).collect();
        assert_eq!(seen(1, 10, Some(3), &Policy::first_version()), expected);
    }

    #[test]
    fn test_second_version_loses_top_value() {
        let policy = Policy::second_version();
        // [1, 9] sampled without its upper bound
        assert_eq!(seen(1, 10, Some(10), &policy), (1..=8).collect());
        // each side of the split loses its own top value
        let expected: BTreeSet<i64> = [1, 2, 3, 6, 7, 8, 9].into();
        assert_eq!(seen(1, 10, Some(5), &policy), expected);
    }

    #[test]
    fn test_second_version_flags_degenerate_exclude() {
        // [5, 5] without 5 leaves nothing; the traced draw is still returned
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            let value = random_from(&mut rng, 5, 5, Some(5), &Policy::second_version());
            assert!(value == 5 || value == 6, "value = {value}");
            assert!(!validate(5, 5, Some(5), value).ok);
        }
    }

    #[test]
    fn test_thread_local_entry_point() {
        reseed(9);
        for _ in 0..1000 {
            let value = random(-3, 3, Some(0));
            assert!((-3..=3).contains(&value) && value != 0);
        }
    }
}
