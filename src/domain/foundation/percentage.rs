//! Whole-number share of a portfolio.

use serde::{Deserialize, Serialize};

/// A share between 0 and 100 inclusive.
///
/// Construction is `const` so allocation tables can be built at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Values above 100 saturate at 100.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}
