//! Thumb identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thumb {
    Low,
    High,
}

impl Thumb {
    /// The sibling thumb.
    pub fn other(self) -> Thumb {
        match self {
            Thumb::Low => Thumb::High,
            Thumb::High => Thumb::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Thumb::Low => "low",
            Thumb::High => "high",
        }
    }

    /// Parse `"low"` / `"high"` (case-insensitive).
    pub fn parse(s: &str) -> Option<Thumb> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "lo" => Some(Thumb::Low),
            "high" | "hi" => Some(Thumb::High),
            _ => None,
        }
    }
}

impl fmt::Display for Thumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which thumb most recently received a committed value or gained focus.
///
/// Presentation only: highlight and z-order. Never read by numeric logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveThumb {
    #[default]
    None,
    Low,
    High,
}

impl ActiveThumb {
    pub fn is(self, thumb: Thumb) -> bool {
        matches!(
            (self, thumb),
            (ActiveThumb::Low, Thumb::Low) | (ActiveThumb::High, Thumb::High)
        )
    }
}

impl From<Thumb> for ActiveThumb {
    fn from(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Low => ActiveThumb::Low,
            Thumb::High => ActiveThumb::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips() {
        assert_eq!(Thumb::Low.other(), Thumb::High);
        assert_eq!(Thumb::High.other(), Thumb::Low);
    }

    #[test]
    fn parse_accepts_short_forms() {
        assert_eq!(Thumb::parse("LOW"), Some(Thumb::Low));
        assert_eq!(Thumb::parse("hi"), Some(Thumb::High));
        assert_eq!(Thumb::parse("middle"), None);
    }

    #[test]
    fn active_thumb_matches_only_its_thumb() {
        assert!(ActiveThumb::Low.is(Thumb::Low));
        assert!(!ActiveThumb::Low.is(Thumb::High));
        assert!(!ActiveThumb::None.is(Thumb::High));
        assert_eq!(ActiveThumb::from(Thumb::High), ActiveThumb::High);
    }
}
