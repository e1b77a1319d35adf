//! Match records as delivered by the backend: history entries, full match
//! details and the optional per-player timeline data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Lane, QueueType};

/// Per-category ping counters carried by every participant record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PingCounts {
    pub all_in_pings: u32,
    pub assist_me_pings: u32,
    pub command_pings: u32,
    pub enemy_missing_pings: u32,
    pub enemy_vision_pings: u32,
    pub get_back_pings: u32,
    pub hold_pings: u32,
    pub need_vision_pings: u32,
    pub on_my_way_pings: u32,
    pub push_pings: u32,
    pub vision_cleared_pings: u32,
}

impl PingCounts {
    pub fn total(&self) -> u32 {
        self.all_in_pings
            + self.assist_me_pings
            + self.command_pings
            + self.enemy_missing_pings
            + self.enemy_vision_pings
            + self.get_back_pings
            + self.hold_pings
            + self.need_vision_pings
            + self.on_my_way_pings
            + self.push_pings
            + self.vision_cleared_pings
    }
}

/// Flat per-player match stats. Immutable once received; lives as long as
/// the query response that carried it.
#[derive(Debug, Clone)]
pub struct Participant {
    pub puuid: String,
    pub riot_id_game_name: String,
    pub riot_id_tagline: String,
    pub champion_name: String,
    pub team_id: u16,
    pub win: bool,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub champ_level: u8,
    pub total_cs: u32,
    pub gold_earned: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub vision_score: u32,
    pub wards_placed: u16,
    pub wards_killed: u16,
    /// Item slots 0-6, slot 6 being the trinket. `0` marks an empty slot.
    pub items: [u32; 7],
    pub summoner_spell_ids: [u32; 2],
    pub keystone_id: u32,
    pub primary_style_id: u32,
    pub sub_style_id: u32,
    pub team_position: String,
    pub individual_position: String,
    pub pings: PingCounts,
}

impl Participant {
    pub fn lane(&self) -> Lane {
        Lane::from_positions(&self.team_position, &self.individual_position)
    }

    pub fn kda_line(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }

    pub fn to_title_win_string(&self) -> String {
        match self.win {
            true => "Victory".to_string(),
            false => "Defeat".to_string(),
        }
    }
}

/// One match-history entry: match metadata plus the record of the summoner
/// the history was requested for.
#[derive(Debug, Clone)]
pub struct PlayedMatch {
    pub match_id: String,
    pub queue_id: u16,
    pub game_creation: u64,
    pub game_duration: u64,
    pub me: Participant,
}

impl PlayedMatch {
    pub fn queue_type(&self) -> QueueType {
        self.queue_id.into()
    }

    pub fn to_formatted_match_duration(&self) -> String {
        format_duration(self.game_duration)
    }
}

/// A single item purchase in the match timeline, bucketed to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEvent {
    pub minute: u32,
    pub item_id: u32,
}

/// One skill point spent. Events arrive in level order; `skill_slot` is
/// 1-4 for Q/W/E/R.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUp {
    pub skill_slot: u8,
}

/// Per-player timeline data attached to a match detail response.
#[derive(Debug, Clone, Default)]
pub struct ParticipantTimeline {
    pub item_events: Vec<ItemEvent>,
    pub skill_ups: Vec<SkillUp>,
}

/// Full match detail: all ten participants plus whatever timeline and
/// matchup data the backend computed for this match.
#[derive(Debug, Clone)]
pub struct MatchDetail {
    pub match_id: String,
    pub queue_id: u16,
    pub game_creation: u64,
    pub game_duration: u64,
    pub participants: Vec<Participant>,
    /// Timeline data keyed by puuid. Empty when the backend has none.
    pub timelines: HashMap<String, ParticipantTimeline>,
    /// Lane-matchup win rates keyed by puuid, when the backend has real
    /// statistics for the pairing. Absent entries render no indicator.
    pub matchup_win_rates: HashMap<String, u8>,
}

impl MatchDetail {
    pub fn queue_type(&self) -> QueueType {
        self.queue_id.into()
    }

    pub fn participant(&self, puuid: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    /// The participant on the opposing team playing the same lane, if the
    /// match has clean one-per-lane assignments.
    pub fn lane_opponent(&self, of: &Participant) -> Option<&Participant> {
        let lane = of.lane();
        if lane == Lane::Unknown {
            return None;
        }
        self.participants
            .iter()
            .find(|p| p.team_id != of.team_id && p.lane() == lane)
    }

    pub fn to_formatted_match_duration(&self) -> String {
        format_duration(self.game_duration)
    }
}

/// Per-participant lane state at the fourteen minute mark, computed by the
/// backend and passed through for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneSnapshot {
    pub puuid: String,
    pub gold: u32,
    pub cs: u32,
    pub xp: u32,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourteenAnalysis {
    pub match_id: String,
    pub participants: Vec<LaneSnapshot>,
}

fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}
