use core::fmt;

use serde::{Deserialize, Serialize};

/// Сколько бочонков в стандартном мешке.
pub const BARRELS_TOTAL: u8 = 90;

/// Бочонок лото с номером 1..=90.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Barrel(pub u8);

impl Barrel {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for Barrel {
    fn from(n: u8) -> Self {
        Barrel(n)
    }
}

impl fmt::Display for Barrel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
