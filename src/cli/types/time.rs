//! Gameweek numbering.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek numbers (1-based, one per scoring round)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Self {
        Self(gameweek)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The gameweek before this one, if any.
    pub fn previous(&self) -> Option<Gameweek> {
        if self.0 > 1 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_gameweek() {
        assert_eq!(Gameweek::new(1).previous(), None);
        assert_eq!(Gameweek::new(0).previous(), None);
        assert_eq!(Gameweek::new(2).previous(), Some(Gameweek::new(1)));
        assert_eq!(Gameweek::new(38).previous(), Some(Gameweek::new(37)));
    }

    #[test]
    fn test_gameweek_parse() {
        assert_eq!("12".parse::<Gameweek>().unwrap(), Gameweek::new(12));
        assert!("twelve".parse::<Gameweek>().is_err());
        assert_eq!(Gameweek::default(), Gameweek::new(1));
    }
}
