//! Ping usage summary for one participant.

use riftview_shared::PingCounts;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PingEntryView {
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PingStatsView {
    pub total: u32,
    pub entries: Vec<PingEntryView>,
}

pub fn build_ping_stats(pings: &PingCounts) -> PingStatsView {
    let entries = vec![
        PingEntryView {
            label: "All In",
            count: pings.all_in_pings,
        },
        PingEntryView {
            label: "Assist Me",
            count: pings.assist_me_pings,
        },
        PingEntryView {
            label: "Command",
            count: pings.command_pings,
        },
        PingEntryView {
            label: "Enemy Missing",
            count: pings.enemy_missing_pings,
        },
        PingEntryView {
            label: "Enemy Vision",
            count: pings.enemy_vision_pings,
        },
        PingEntryView {
            label: "Get Back",
            count: pings.get_back_pings,
        },
        PingEntryView {
            label: "Hold",
            count: pings.hold_pings,
        },
        PingEntryView {
            label: "Need Vision",
            count: pings.need_vision_pings,
        },
        PingEntryView {
            label: "On My Way",
            count: pings.on_my_way_pings,
        },
        PingEntryView {
            label: "Push",
            count: pings.push_pings,
        },
        PingEntryView {
            label: "Vision Cleared",
            count: pings.vision_cleared_pings,
        },
    ];

    PingStatsView {
        total: pings.total(),
        entries,
    }
}
