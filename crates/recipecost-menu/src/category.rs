//! The four menu engineering quadrants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quadrant an item falls into.
///
/// The labels follow the house convention: an item that sells well but
/// earns little is a `CashCow`, one that earns well but sells little is a
/// `Puzzle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuCategory {
    /// High popularity, high profitability.
    Star,
    /// High popularity, low profitability.
    CashCow,
    /// Low popularity, high profitability.
    Puzzle,
    /// Low popularity, low profitability.
    Dog,
}

impl MenuCategory {
    /// All categories in report order.
    pub const ALL: [Self; 4] = [Self::Star, Self::CashCow, Self::Puzzle, Self::Dog];

    /// Place an item given whether each score reached its threshold.
    #[must_use]
    pub const fn classify(high_popularity: bool, high_profitability: bool) -> Self {
        match (high_popularity, high_profitability) {
            (true, true) => Self::Star,
            (true, false) => Self::CashCow,
            (false, true) => Self::Puzzle,
            (false, false) => Self::Dog,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::CashCow => "Cash Cow",
            Self::Puzzle => "Puzzle",
            Self::Dog => "Dog",
        }
    }

    /// Whether the category sits on the high-popularity side.
    #[must_use]
    pub const fn is_popular(self) -> bool {
        matches!(self, Self::Star | Self::CashCow)
    }

    /// Whether the category sits on the high-profitability side.
    #[must_use]
    pub const fn is_profitable(self) -> bool {
        matches!(self, Self::Star | Self::Puzzle)
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(MenuCategory::classify(true, true), MenuCategory::Star);
        assert_eq!(MenuCategory::classify(true, false), MenuCategory::CashCow);
        assert_eq!(MenuCategory::classify(false, true), MenuCategory::Puzzle);
        assert_eq!(MenuCategory::classify(false, false), MenuCategory::Dog);
    }

    #[test]
    fn test_axes_round_trip() {
        for category in MenuCategory::ALL {
            assert_eq!(
                MenuCategory::classify(category.is_popular(), category.is_profitable()),
                category
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuCategory::CashCow.to_string(), "Cash Cow");
    }
}
