//! Per-champion and per-position aggregates over a match list.
//!
//! One pass over the list builds the buckets; the rate fields (win rate,
//! KDA, CS per minute) are derived on access so a bucket is always
//! consistent with its counters.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use riftview_shared::{Lane, PlayedMatch};
use serde::{Serialize, Serializer};

/// Stand-in game length for matches whose duration the backend did not
/// supply.
pub const ASSUMED_GAME_SECONDS: u64 = 1800;

/// Combat effectiveness ratio. Zero recorded deaths is a perfect game,
/// reported as its own value rather than a division artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kda {
    Perfect,
    Ratio(f64),
}

impl Kda {
    pub fn compute(kills: u32, deaths: u32, assists: u32) -> Kda {
        if deaths == 0 {
            Kda::Perfect
        } else {
            Kda::Ratio((kills + assists) as f64 / deaths as f64)
        }
    }
}

impl fmt::Display for Kda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kda::Perfect => write!(f, "Perfect"),
            Kda::Ratio(ratio) => write!(f, "{:.2}", ratio),
        }
    }
}

impl Serialize for Kda {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Summary of every game played on one champion within the match list.
#[derive(Debug, Clone, Serialize)]
pub struct ChampionAggregate {
    pub champion_name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_cs: u32,
    pub lanes: BTreeSet<Lane>,
    #[serde(skip)]
    total_seconds: u64,
}

impl ChampionAggregate {
    fn new(champion_name: String) -> Self {
        Self {
            champion_name,
            games: 0,
            wins: 0,
            losses: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
            total_cs: 0,
            lanes: BTreeSet::new(),
            total_seconds: 0,
        }
    }

    /// Win percentage rounded to the nearest integer.
    pub fn win_rate(&self) -> u8 {
        if self.games == 0 {
            return 0;
        }
        (100.0 * self.wins as f64 / self.games as f64).round() as u8
    }

    pub fn kda(&self) -> Kda {
        Kda::compute(self.kills, self.deaths, self.assists)
    }

    pub fn cs_per_minute(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        self.total_cs as f64 / (self.total_seconds as f64 / 60.0)
    }
}

/// Summary of every game played in one lane within the match list.
#[derive(Debug, Clone, Serialize)]
pub struct PositionAggregate {
    pub lane: Lane,
    pub games: u32,
    pub wins: u32,
}

impl PositionAggregate {
    pub fn win_rate(&self) -> u8 {
        if self.games == 0 {
            return 0;
        }
        (100.0 * self.wins as f64 / self.games as f64).round() as u8
    }
}

/// Build per-champion buckets, ordered by games played (desc), then name.
pub fn champion_aggregates(matches: &[PlayedMatch]) -> Vec<ChampionAggregate> {
    let mut buckets: BTreeMap<String, ChampionAggregate> = BTreeMap::new();

    for m in matches {
        let me = &m.me;
        let entry = buckets
            .entry(me.champion_name.clone())
            .or_insert_with(|| ChampionAggregate::new(me.champion_name.clone()));

        entry.games += 1;
        if me.win {
            entry.wins += 1;
        } else {
            entry.losses += 1;
        }
        entry.kills += me.kills as u32;
        entry.deaths += me.deaths as u32;
        entry.assists += me.assists as u32;
        entry.total_cs += me.total_cs;
        entry.total_seconds += if m.game_duration > 0 {
            m.game_duration
        } else {
            ASSUMED_GAME_SECONDS
        };

        let lane = me.lane();
        if lane != Lane::Unknown {
            entry.lanes.insert(lane);
        }
    }

    let mut aggregates: Vec<ChampionAggregate> = buckets.into_values().collect();
    aggregates.sort_by(|a, b| {
        b.games
            .cmp(&a.games)
            .then_with(|| a.champion_name.cmp(&b.champion_name))
    });
    aggregates
}

/// Build per-lane buckets, ordered by games played (desc).
pub fn position_aggregates(matches: &[PlayedMatch]) -> Vec<PositionAggregate> {
    let mut buckets: BTreeMap<Lane, PositionAggregate> = BTreeMap::new();

    for m in matches {
        let lane = m.me.lane();
        if lane == Lane::Unknown {
            continue;
        }
        let entry = buckets.entry(lane).or_insert(PositionAggregate {
            lane,
            games: 0,
            wins: 0,
        });
        entry.games += 1;
        if m.me.win {
            entry.wins += 1;
        }
    }

    let mut aggregates: Vec<PositionAggregate> = buckets.into_values().collect();
    aggregates.sort_by(|a, b| b.games.cmp(&a.games));
    aggregates
}
