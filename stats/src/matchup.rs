//! Lane matchup advantage classification.
//!
//! A champion-vs-champion win rate maps into one of five qualitative
//! tiers. The bands partition [0, 100] with no gaps: anything at or above
//! 55 is a strong advantage, anything at or below 45 a strong
//! disadvantage, and the three middle bands are three points wide each.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaneAdvantage {
    StrongAdvantage,
    SlightAdvantage,
    Even,
    SlightDisadvantage,
    StrongDisadvantage,
}

impl LaneAdvantage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaneAdvantage::StrongAdvantage => "strong-advantage",
            LaneAdvantage::SlightAdvantage => "slight-advantage",
            LaneAdvantage::Even => "even",
            LaneAdvantage::SlightDisadvantage => "slight-disadvantage",
            LaneAdvantage::StrongDisadvantage => "strong-disadvantage",
        }
    }
}

/// Total over the whole percentage range; values above 100 clamp into the
/// strong-advantage band.
pub fn classify_win_rate(win_rate: u8) -> LaneAdvantage {
    match win_rate {
        55.. => LaneAdvantage::StrongAdvantage,
        52..=54 => LaneAdvantage::SlightAdvantage,
        49..=51 => LaneAdvantage::Even,
        46..=48 => LaneAdvantage::SlightDisadvantage,
        ..=45 => LaneAdvantage::StrongDisadvantage,
    }
}
