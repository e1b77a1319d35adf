//! Presentation-ready view models.
//!
//! Builders in this crate are pure over their inputs: domain records in,
//! serializable view structs out. Icon and name lookups go through the
//! seams in `riftview_shared::traits`; a failing lookup is logged and
//! degrades that single entry to a placeholder (blank URL, raw
//! identifier), never the whole view.

use std::fmt::Display;

use riftview_shared::traits::SourceError;
use tracing::warn;

pub mod history;
pub mod item_timeline;
pub mod matchup;
pub mod pings;
pub mod profile;
pub mod scoreboard;
pub mod skill_order;

pub use history::{MatchCardView, build_match_cards};
pub use item_timeline::{ItemTimelineView, build_item_timeline};
pub use matchup::{MatchupView, build_matchup};
pub use pings::{PingStatsView, build_ping_stats};
pub use profile::{ProfileView, build_profile};
pub use scoreboard::{ScoreboardView, build_scoreboard};
pub use skill_order::{SkillOrderView, build_skill_order};

/// Blank-icon placeholder for a failed per-identifier lookup.
pub(crate) fn url_or_blank(
    result: Result<String, SourceError>,
    kind: &str,
    id: impl Display,
) -> String {
    match result {
        Ok(url) => url,
        Err(e) => {
            warn!("{} icon lookup failed for {}: {}", kind, id, e);
            String::new()
        }
    }
}

/// Raw-identifier placeholder for a failed display-name lookup.
pub(crate) fn name_or_raw(result: Result<String, SourceError>, raw: &str) -> String {
    match result {
        Ok(name) => name,
        Err(e) => {
            warn!("display name lookup failed for {}: {}", raw, e);
            raw.to_string()
        }
    }
}
