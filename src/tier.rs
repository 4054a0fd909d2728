//! Strength tiers and their display labels.

use std::fmt;

/// Discrete strength classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrengthTier {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Every tier, weakest first.
    pub const ALL: [StrengthTier; 3] = [Self::Weak, Self::Medium, Self::Strong];

    /// Label shown next to the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Too Weak",
            Self::Medium => "Normal",
            Self::Strong => "Strong Password",
        }
    }

    /// Number of meter segments this tier fills.
    pub fn filled_segments(self) -> usize {
        match self {
            Self::Weak => 1,
            Self::Medium => 2,
            Self::Strong => 3,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
