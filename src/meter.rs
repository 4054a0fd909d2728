//! Strength meter - the three indicator segments under the field.

use crate::tier::StrengthTier;

/// Number of segments in the meter.
pub const SEGMENT_COUNT: usize = 3;

/// State of a single meter segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Unused,
    /// Filled with the color of the current tier.
    Filled(StrengthTier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    tier: StrengthTier,
    segments: [SegmentState; SEGMENT_COUNT],
}

impl StrengthMeter {
    pub fn new(tier: StrengthTier) -> Self {
        let filled = tier.filled_segments();
        let mut segments = [SegmentState::Unused; SEGMENT_COUNT];
        for segment in segments.iter_mut().take(filled) {
            *segment = SegmentState::Filled(tier);
        }
        Self { tier, segments }
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    pub fn segments(&self) -> &[SegmentState; SEGMENT_COUNT] {
        &self.segments
    }
}

impl From<StrengthTier> for StrengthMeter {
    fn from(tier: StrengthTier) -> Self {
        Self::new(tier)
    }
}
