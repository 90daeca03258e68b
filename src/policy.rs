/// Selects the arithmetic used by [`crate::random_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    /// Sample with `finish - start + 1` buckets so `finish` is reachable.
    /// When false, `finish - start` buckets are used and `finish` is lost.
    pub inclusive_upper_bound: bool,
    /// Leave the range untouched when the excluded value lies outside it.
    /// When false, such a value is split around like any interior value.
    pub ignore_outside_exclude: bool,
    /// Check and trace each result through the `log` facade.
    pub validate: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            inclusive_upper_bound: true,
            ignore_outside_exclude: true,
            validate: false,
        }
    }
}

impl Policy {
    /// Inclusive sampling, no outside-range check.
    pub fn first_version() -> Self {
        Self {
            inclusive_upper_bound: true,
            ignore_outside_exclude: false,
            validate: false,
        }
    }

    /// Outside-range check, exclusive sampling, traced results.
    pub fn second_version() -> Self {
        Self {
            inclusive_upper_bound: false,
            ignore_outside_exclude: true,
            validate: true,
        }
    }

    pub fn with_inclusive_upper_bound(mut self, inclusive: bool) -> Self {
        self.inclusive_upper_bound = inclusive;
        self
    }

    pub fn with_ignore_outside_exclude(mut self, ignore: bool) -> Self {
        self.ignore_outside_exclude = ignore;
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
