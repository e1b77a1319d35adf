//! Shared domain types used across the riftview crates.
//!
//! Everything here is plain data: records deserialized from the backend API
//! plus the enums used to interpret them. The trait seams between the
//! crates live in [`traits`].

use serde::{Deserialize, Serialize};

pub mod lol_match;
pub mod traits;

pub use lol_match::{
    FourteenAnalysis, ItemEvent, LaneSnapshot, MatchDetail, Participant, PingCounts, PlayedMatch,
    SkillUp,
};

/// Platform region a summoner belongs to. Carried through every backend
/// request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Na,
    Euw,
    Eune,
    Oce,
    Ru,
    Tr,
    Br,
    Lan,
    Las,
    Jp,
    Kr,
}

impl Region {
    /// Lowercase path segment used in backend routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Oce => "oce",
            Region::Ru => "ru",
            Region::Tr => "tr",
            Region::Br => "br",
            Region::Lan => "lan",
            Region::Las => "las",
            Region::Jp => "jp",
            Region::Kr => "kr",
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_uppercase()
    }
}

impl TryFrom<String> for Region {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "NA" => Ok(Region::Na),
            "EUW" => Ok(Region::Euw),
            "EUNE" => Ok(Region::Eune),
            "OCE" => Ok(Region::Oce),
            "RU" => Ok(Region::Ru),
            "TR" => Ok(Region::Tr),
            "BR" => Ok(Region::Br),
            "LAN" => Ok(Region::Lan),
            "LAS" => Ok(Region::Las),
            "JP" => Ok(Region::Jp),
            "KR" => Ok(Region::Kr),
            _ => Err(format!("Unknown region: {}", value)),
        }
    }
}

/// The lane a participant played. `Unknown` covers modes without assigned
/// positions (ARAM, remakes) and malformed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Bottom,
    Support,
    Unknown,
}

impl Lane {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Top => "Top",
            Lane::Jungle => "Jungle",
            Lane::Mid => "Mid",
            Lane::Bottom => "Bottom",
            Lane::Support => "Support",
            Lane::Unknown => "",
        }
    }

    fn parse(position: &str) -> Option<Lane> {
        match position {
            "TOP" => Some(Lane::Top),
            "JUNGLE" => Some(Lane::Jungle),
            "MIDDLE" => Some(Lane::Mid),
            "BOTTOM" => Some(Lane::Bottom),
            "UTILITY" => Some(Lane::Support),
            _ => None,
        }
    }

    /// Resolve a lane from the primary position field, falling back to the
    /// secondary one when the primary is empty or unrecognized.
    pub fn from_positions(primary: &str, secondary: &str) -> Lane {
        Lane::parse(primary)
            .or_else(|| Lane::parse(secondary))
            .unwrap_or(Lane::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueType {
    /// Ranked Solo/Duo
    SoloDuo,
    /// Ranked Flex
    Flex,
    /// 5v5 Normal Draft Picks
    NormalDraft,
    /// 5v5 Howling Abyss ARAM
    Aram,
    Unhandled,
}

impl From<u16> for QueueType {
    fn from(value: u16) -> Self {
        match value {
            400 => Self::NormalDraft,
            420 => Self::SoloDuo,
            440 => Self::Flex,
            450 => Self::Aram,
            _ => Self::Unhandled,
        }
    }
}

impl QueueType {
    /// Human readable queue label shown on match cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            QueueType::SoloDuo => "Ranked Solo/Duo",
            QueueType::Flex => "Ranked Flex",
            QueueType::NormalDraft => "Normal Draft",
            QueueType::Aram => "ARAM",
            QueueType::Unhandled => "Other",
        }
    }
}

/// A ranked ladder entry attached to a summoner profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: u16,
    pub wins: u16,
    pub losses: u16,
}

impl LeagueEntry {
    pub fn is_ranked_solo_duo(&self) -> bool {
        self.queue_type.eq("RANKED_SOLO_5x5")
    }
}

/// Summoner profile record as returned by the backend.
#[derive(Debug, Clone)]
pub struct Summoner {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
    pub summoner_level: u32,
    pub profile_icon_id: u32,
    pub leagues: Vec<LeagueEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_type_and_region_conversions() {
        let q = QueueType::from(420u16);
        assert!(matches!(q, QueueType::SoloDuo));
        assert_eq!(q.display_name(), "Ranked Solo/Duo");
        assert!(matches!(QueueType::from(999u16), QueueType::Unhandled));

        assert_eq!(Region::Euw.as_str(), "euw");
        let s: String = Region::Na.into();
        assert_eq!(s, "NA");
        assert_eq!(Region::try_from("euw".to_string()).unwrap(), Region::Euw);
        assert!(Region::try_from("mars".to_string()).is_err());
    }

    #[test]
    fn lane_falls_back_to_secondary_position() {
        assert_eq!(Lane::from_positions("TOP", ""), Lane::Top);
        assert_eq!(Lane::from_positions("", "UTILITY"), Lane::Support);
        assert_eq!(Lane::from_positions("Invalid", "MIDDLE"), Lane::Mid);
        assert_eq!(Lane::from_positions("", ""), Lane::Unknown);
    }
}
