use crate::algorithms::rng::coin_flip_from;
use crate::policy::Policy;
use rand::Rng;

/// Inclusive `[start, finish]` range left after removing the excluded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InclusiveRange {
    pub start: i64,
    pub finish: i64,
}

impl InclusiveRange {
    pub fn new(start: i64, finish: i64) -> Self {
        Self { start, finish }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.finish
    }
}

/// Shrink `[from, to]` so it no longer holds `exclude`.
///
/// An interior `exclude` splits the range in two and a coin flip picks a
/// side, so values on the shorter side come up more often than those on
/// the longer one.
pub fn narrow_range<R: Rng + ?Sized>(
    rng: &mut R,
    from: i64,
    to: i64,
    exclude: Option<i64>,
    policy: &Policy,
) -> InclusiveRange {
    let Some(exclude) = exclude else {
        return InclusiveRange::new(from, to);
    };

    if policy.ignore_outside_exclude && (exclude < from || exclude > to) {
        return InclusiveRange::new(from, to);
    }

    if exclude == from {
        return InclusiveRange::new(exclude.wrapping_add(1), to);
    }

    if exclude == to {
        return InclusiveRange::new(from, to.wrapping_sub(1));
    }

    if coin_flip_from(rng) {
        InclusiveRange::new(from, exclude.wrapping_sub(1))
    } else {
        InclusiveRange::new(exclude.wrapping_add(1), to)
    }
}
