use std::fmt;

use serde::{Deserialize, Serialize};

/// Whole-dollar price tag. Nothing in the shop carries cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Price(u32);

impl Price {
    pub const fn new(dollars: u32) -> Self {
        Price(dollars)
    }

    pub const fn dollars(self) -> u32 {
        self.0
    }

    /// Price after the 50%-off promotion, rounded half up:
    /// $2 discounts to $1, $3 to $2, $9 to $5.
    pub const fn half_off(self) -> Self {
        Price((self.0 + 1) / 2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
