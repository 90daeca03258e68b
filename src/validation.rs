use crate::algorithms::narrow::InclusiveRange;
use log::{debug, warn};
use std::fmt;

/// Result of checking one draw against its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub from: i64,
    pub to: i64,
    pub exclude: Option<i64>,
    pub value: i64,
    pub ok: bool,
}

/// A draw is ok when it lies in `[from, to]` and differs from `exclude`.
pub fn validate(from: i64, to: i64, exclude: Option<i64>, value: i64) -> Validation {
    let ok = InclusiveRange::new(from, to).contains(value) && exclude != Some(value);
    Validation {
        from,
        to,
        exclude,
        value,
        ok,
    }
}

/// Validate and trace a draw. The draw itself is never altered.
pub fn trace(from: i64, to: i64, exclude: Option<i64>, value: i64) -> Validation {
    let validation = validate(from, to, exclude, value);
    debug!("{validation}");
    if !validation.ok {
        warn!("draw escaped its range: {validation}");
    }
    validation
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "random {}, {}, ", self.from, self.to)?;
        match self.exclude {
            Some(exclude) => write!(f, "{exclude}")?,
            None => write!(f, "none")?,
        }
        write!(f, " = {} {}", self.value, self.ok)
    }
}
