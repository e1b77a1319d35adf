use std::collections::HashMap;

use async_trait::async_trait;
use riftview_shared::{
    ItemEvent, MatchDetail, Participant, PingCounts, PlayedMatch, Region, SkillUp,
    lol_match::ParticipantTimeline,
};
use serde::Deserialize;

use crate::client::{ApiRequest, BackendResponse};

/// Representation of one participant in a match response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tagline: String,
    pub champion_name: String,
    pub team_id: u16,
    pub win: bool,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    #[serde(default)]
    pub champ_level: u8,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u32,
    #[serde(default)]
    pub total_damage_taken: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub wards_placed: u16,
    #[serde(default)]
    pub wards_killed: u16,
    #[serde(default)]
    pub item0: u32,
    #[serde(default)]
    pub item1: u32,
    #[serde(default)]
    pub item2: u32,
    #[serde(default)]
    pub item3: u32,
    #[serde(default)]
    pub item4: u32,
    #[serde(default)]
    pub item5: u32,
    #[serde(default)]
    pub item6: u32,
    #[serde(default)]
    pub summoner1_id: u32,
    #[serde(default)]
    pub summoner2_id: u32,
    #[serde(default)]
    pub keystone_id: u32,
    #[serde(default)]
    pub primary_style_id: u32,
    #[serde(default)]
    pub sub_style_id: u32,
    #[serde(default)]
    pub team_position: String,
    #[serde(default)]
    pub individual_position: String,
    #[serde(flatten)]
    pub pings: PingCounts,
}

impl From<ParticipantDto> for Participant {
    fn from(value: ParticipantDto) -> Self {
        Self {
            puuid: value.puuid,
            riot_id_game_name: value.riot_id_game_name,
            riot_id_tagline: value.riot_id_tagline,
            champion_name: value.champion_name,
            team_id: value.team_id,
            win: value.win,
            kills: value.kills,
            deaths: value.deaths,
            assists: value.assists,
            champ_level: value.champ_level,
            total_cs: value.total_minions_killed + value.neutral_minions_killed,
            gold_earned: value.gold_earned,
            damage_dealt: value.total_damage_dealt_to_champions,
            damage_taken: value.total_damage_taken,
            vision_score: value.vision_score,
            wards_placed: value.wards_placed,
            wards_killed: value.wards_killed,
            items: [
                value.item0,
                value.item1,
                value.item2,
                value.item3,
                value.item4,
                value.item5,
                value.item6,
            ],
            summoner_spell_ids: [value.summoner1_id, value.summoner2_id],
            keystone_id: value.keystone_id,
            primary_style_id: value.primary_style_id,
            sub_style_id: value.sub_style_id,
            team_position: value.team_position,
            individual_position: value.individual_position,
            pings: value.pings,
        }
    }
}

/// Representation of one match-history entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummaryDto {
    pub match_id: String,
    pub queue_id: u16,
    pub game_creation: u64,
    pub game_duration: u64,
    pub me: ParticipantDto,
}

impl From<MatchSummaryDto> for PlayedMatch {
    fn from(value: MatchSummaryDto) -> Self {
        Self {
            match_id: value.match_id,
            queue_id: value.queue_id,
            game_creation: value.game_creation,
            game_duration: value.game_duration,
            me: value.me.into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineDto {
    pub item_events: Vec<ItemEvent>,
    pub skill_ups: Vec<SkillUp>,
}

impl From<TimelineDto> for ParticipantTimeline {
    fn from(value: TimelineDto) -> Self {
        Self {
            item_events: value.item_events,
            skill_ups: value.skill_ups,
        }
    }
}

/// Representation of the full match detail response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailDto {
    pub match_id: String,
    pub queue_id: u16,
    pub game_creation: u64,
    pub game_duration: u64,
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub timelines: HashMap<String, TimelineDto>,
    #[serde(default)]
    pub matchup_win_rates: HashMap<String, u8>,
}

impl From<MatchDetailDto> for MatchDetail {
    fn from(value: MatchDetailDto) -> Self {
        Self {
            match_id: value.match_id,
            queue_id: value.queue_id,
            game_creation: value.game_creation,
            game_duration: value.game_duration,
            participants: value.participants.into_iter().map(Into::into).collect(),
            timelines: value
                .timelines
                .into_iter()
                .map(|(puuid, timeline)| (puuid, timeline.into()))
                .collect(),
            matchup_win_rates: value.matchup_win_rates,
        }
    }
}

/// Match history and match detail queries.
#[async_trait]
pub trait MatchApi: ApiRequest {
    async fn get_match_history(
        &self,
        region: Region,
        puuid: &str,
        count: u32,
    ) -> BackendResponse<Vec<PlayedMatch>> {
        tracing::trace!("[BACKEND] get_match_history {} in {:?}", puuid, region);
        let path = format!(
            "/matches/{}/by-puuid/{}?count={}",
            region.as_str(),
            puuid,
            count
        );

        let bytes = self.request(path).await?;
        let dtos: Vec<MatchSummaryDto> = serde_json::from_slice(&bytes)?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn get_match_detail(
        &self,
        region: Region,
        match_id: &str,
    ) -> BackendResponse<MatchDetail> {
        tracing::trace!("[BACKEND] get_match_detail {} in {:?}", match_id, region);
        let path = format!("/matches/{}/{}", region.as_str(), match_id);

        let bytes = self.request(path).await?;
        let dto: MatchDetailDto = serde_json::from_slice(&bytes)?;
        Ok(dto.into())
    }
}
