use crate::algorithms::narrow::InclusiveRange;
use crate::algorithms::rng::unit_from;
use crate::policy::Policy;
use rand::Rng;

/// Scale a unit draw onto `range` and floor it.
///
/// Inverted or empty ranges still produce a value, which may lie outside
/// `range`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, range: InclusiveRange, policy: &Policy) -> i64 {
    // f64 keeps the width from overflowing on extreme bounds
    let mut width = range.finish as f64 - range.start as f64;
    if policy.inclusive_upper_bound {
        width += 1.0;
    }
    let offset = (unit_from(rng) * width).floor() as i128;
    (range.start as i128 + offset).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
