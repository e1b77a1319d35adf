//! Summoner profile page view: header with ranked entries plus the
//! champion and position summaries derived from the current match list.

use futures::future::join_all;
use riftview_shared::{PlayedMatch, Summoner, traits::StaticAssets};
use riftview_stats::{Kda, champion_aggregates, position_aggregates};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntryView {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: u16,
    pub wins: u16,
    pub losses: u16,
    pub emblem_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileHeader {
    pub game_name: String,
    pub tag_line: String,
    pub summoner_level: u32,
    pub profile_icon_url: String,
    pub ranked: Vec<RankedEntryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChampionSummaryView {
    /// Raw champion identifier as carried by the match records.
    pub champion: String,
    /// Localized display name, or the raw identifier when the lookup
    /// degraded.
    pub name: String,
    pub icon_url: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: u8,
    pub kda: Kda,
    pub cs_per_minute: f64,
    pub lanes: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionSummaryView {
    pub lane: &'static str,
    pub games: u32,
    pub wins: u32,
    pub win_rate: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub header: ProfileHeader,
    pub champions: Vec<ChampionSummaryView>,
    pub positions: Vec<PositionSummaryView>,
}

pub async fn build_profile<A>(
    summoner: &Summoner,
    matches: &[PlayedMatch],
    assets: &A,
    language: &str,
) -> ProfileView
where
    A: StaticAssets + ?Sized,
{
    let header = ProfileHeader {
        game_name: summoner.game_name.clone(),
        tag_line: summoner.tag_line.clone(),
        summoner_level: summoner.summoner_level,
        profile_icon_url: assets.profile_icon_url(summoner.profile_icon_id).await,
        ranked: summoner
            .leagues
            .iter()
            .map(|league| RankedEntryView {
                queue_type: league.queue_type.clone(),
                tier: league.tier.clone(),
                rank: league.rank.clone(),
                league_points: league.league_points,
                wins: league.wins,
                losses: league.losses,
                emblem_url: assets.rank_emblem_url(&league.tier),
            })
            .collect(),
    };

    let aggregates = champion_aggregates(matches);
    let champions = join_all(aggregates.into_iter().map(|aggregate| async move {
        let name = crate::name_or_raw(
            assets
                .champion_display_name(&aggregate.champion_name, language)
                .await,
            &aggregate.champion_name,
        );
        let icon_url = assets.champion_icon_url(&aggregate.champion_name).await;

        ChampionSummaryView {
            name,
            icon_url,
            games: aggregate.games,
            wins: aggregate.wins,
            losses: aggregate.losses,
            win_rate: aggregate.win_rate(),
            kda: aggregate.kda(),
            cs_per_minute: (aggregate.cs_per_minute() * 10.0).round() / 10.0,
            lanes: aggregate.lanes.iter().map(|lane| lane.as_str()).collect(),
            champion: aggregate.champion_name,
        }
    }))
    .await;

    let positions = position_aggregates(matches)
        .into_iter()
        .map(|aggregate| PositionSummaryView {
            lane: aggregate.lane.as_str(),
            games: aggregate.games,
            wins: aggregate.wins,
            win_rate: aggregate.win_rate(),
        })
        .collect();

    ProfileView {
        header,
        champions,
        positions,
    }
}
