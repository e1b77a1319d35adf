//! Lane matchup indicator.
//!
//! The indicator renders only for the four non-jungle lanes and only when
//! a real win-rate value is available for the pairing; there is no
//! synthetic stand-in when the statistics source has nothing.

use riftview_shared::Lane;
use riftview_stats::{LaneAdvantage, classify_win_rate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MatchupView {
    pub lane: &'static str,
    pub champion: String,
    pub opponent: String,
    pub win_rate: u8,
    pub advantage: LaneAdvantage,
}

pub fn build_matchup(
    lane: Lane,
    champion: &str,
    opponent: &str,
    win_rate: Option<u8>,
) -> Option<MatchupView> {
    if matches!(lane, Lane::Jungle | Lane::Unknown) {
        return None;
    }
    let win_rate = win_rate?;

    Some(MatchupView {
        lane: lane.as_str(),
        champion: champion.to_string(),
        opponent: opponent.to_string(),
        win_rate,
        advantage: classify_win_rate(win_rate),
    })
}
