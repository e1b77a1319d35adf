use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use riftview_backend::{AnalysisApi, BackendError, MatchApi};
use riftview_shared::{
    FourteenAnalysis, MatchDetail, Region,
    traits::{ChampionSkillSource, StaticAssets},
};
use riftview_view::{
    ItemTimelineView, MatchupView, PingStatsView, ScoreboardView, SkillOrderView,
    build_item_timeline, build_matchup, build_ping_stats, build_scoreboard, build_skill_order,
};

use crate::error::{AppError, Result};
use crate::pages::parse_region;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Participant whose skill order, item timeline, pings and matchup get
    /// the detailed treatment.
    pub focus: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FocusView {
    pub puuid: String,
    pub skill_order: SkillOrderView,
    pub item_timeline: ItemTimelineView,
    pub pings: PingStatsView,
    pub matchup: Option<MatchupView>,
}

#[derive(Debug, Serialize)]
pub struct MatchPageView {
    pub scoreboard: ScoreboardView,
    pub fourteen: Option<FourteenAnalysis>,
    pub focus: Option<FocusView>,
}

pub async fn show(
    State(state): State<AppState>,
    Path((region, match_id)): Path<(String, String)>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchPageView>> {
    let region = parse_region(&region)?;

    let detail = state
        .backend
        .get_match_detail(region, &match_id)
        .await
        .map_err(|e| match e {
            BackendError::NotFound => AppError::NotFound(format!("Match {} not found", match_id)),
            other => other.into(),
        })?;

    let assets = state.assets.as_ref();
    let (scoreboard, fourteen) = tokio::join!(
        build_scoreboard(&detail, assets, &state.language),
        fetch_fourteen(&state, region, &match_id),
    );

    let focus = match &query.focus {
        Some(puuid) => build_focus(&detail, puuid, assets, &state.language).await,
        None => None,
    };

    Ok(Json(MatchPageView {
        scoreboard,
        fourteen,
        focus,
    }))
}

/// The fourteen-minute analysis is decoration; the page renders without
/// it when the query fails.
async fn fetch_fourteen(
    state: &AppState,
    region: Region,
    match_id: &str,
) -> Option<FourteenAnalysis> {
    match state.backend.get_fourteen_analysis(region, match_id).await {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            warn!(
                "fourteen-minute analysis unavailable for {}: {}",
                match_id, e
            );
            None
        }
    }
}

async fn build_focus(
    detail: &MatchDetail,
    puuid: &str,
    assets: &dyn StaticAssets,
    language: &str,
) -> Option<FocusView> {
    let me = detail.participant(puuid)?;

    let timeline = detail.timelines.get(puuid);
    let item_events = timeline.map(|t| t.item_events.as_slice()).unwrap_or(&[]);
    let skill_ups = timeline.map(|t| t.skill_ups.as_slice()).unwrap_or(&[]);

    let abilities = match assets.champion_abilities(&me.champion_name, language).await {
        Ok(abilities) => Some(abilities),
        Err(e) => {
            warn!("ability data unavailable for {}: {}", me.champion_name, e);
            None
        }
    };

    let (skill_order, item_timeline) = tokio::join!(
        build_skill_order(&me.champion_name, skill_ups, abilities.as_deref(), assets),
        build_item_timeline(item_events, &me.items, assets),
    );

    let matchup = detail.lane_opponent(me).and_then(|opponent| {
        build_matchup(
            me.lane(),
            &me.champion_name,
            &opponent.champion_name,
            detail.matchup_win_rates.get(puuid).copied(),
        )
    });

    Some(FocusView {
        puuid: puuid.to_string(),
        skill_order,
        item_timeline,
        pings: build_ping_stats(&me.pings),
        matchup,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{DummyBackend, StubAssets, state_with};
    use riftview_stats::LaneAdvantage;

    fn backend_with_match() -> DummyBackend {
        let mut backend = DummyBackend::default();
        backend.insert(
            "/matches/euw/EUW1_100",
            serde_json::json!({
                "matchId": "EUW1_100",
                "queueId": 420,
                "gameCreation": 0,
                "gameDuration": 1800,
                "participants": [
                    DummyBackend::participant_json("p1", "Ahri", true),
                    DummyBackend::opponent_json("p2", "Zed", false)
                ],
                "timelines": {
                    "p1": {
                        "itemEvents": [
                            {"minute": 0, "itemId": 1055},
                            {"minute": 10, "itemId": 1052},
                            {"minute": 10, "itemId": 1052}
                        ],
                        "skillUps": [
                            {"skillSlot": 1}, {"skillSlot": 2}, {"skillSlot": 3}
                        ]
                    }
                },
                "matchupWinRates": {"p1": 53}
            }),
        );
        backend.insert(
            "/analysis/euw/EUW1_100/fourteen",
            serde_json::json!({
                "matchId": "EUW1_100",
                "participants": [
                    {"puuid": "p1", "gold": 5600, "cs": 130, "xp": 9100, "level": 11}
                ]
            }),
        );
        backend
    }

    #[tokio::test]
    async fn match_page_builds_scoreboard_and_focus() {
        let state = state_with(backend_with_match(), StubAssets);

        let page = show(
            State(state),
            Path(("euw".to_string(), "EUW1_100".to_string())),
            Query(MatchQuery {
                focus: Some("p1".to_string()),
            }),
        )
        .await
        .unwrap();

        let view = &page.0;
        assert_eq!(view.scoreboard.teams.len(), 2);
        assert_eq!(view.fourteen.as_ref().unwrap().participants[0].cs, 130);

        let focus = view.focus.as_ref().unwrap();
        let keys: String = focus.skill_order.order.iter().map(|s| s.key).collect();
        assert_eq!(keys, "QWE");
        assert_eq!(focus.item_timeline.groups[1].items[0].count, 2);

        let matchup = focus.matchup.as_ref().unwrap();
        assert_eq!(matchup.opponent, "Zed");
        assert_eq!(matchup.advantage, LaneAdvantage::SlightAdvantage);
    }

    #[tokio::test]
    async fn page_renders_without_analysis_or_focus() {
        let mut backend = backend_with_match();
        backend.remove("/analysis/euw/EUW1_100/fourteen");
        let state = state_with(backend, StubAssets);

        let page = show(
            State(state),
            Path(("euw".to_string(), "EUW1_100".to_string())),
            Query(MatchQuery { focus: None }),
        )
        .await
        .unwrap();

        assert!(page.0.fourteen.is_none());
        assert!(page.0.focus.is_none());
        assert_eq!(page.0.scoreboard.match_id, "EUW1_100");
    }

    #[tokio::test]
    async fn unknown_focus_participant_renders_no_focus_section() {
        let state = state_with(backend_with_match(), StubAssets);

        let page = show(
            State(state),
            Path(("euw".to_string(), "EUW1_100".to_string())),
            Query(MatchQuery {
                focus: Some("someone-else".to_string()),
            }),
        )
        .await
        .unwrap();

        assert!(page.0.focus.is_none());
    }

    #[tokio::test]
    async fn missing_match_is_a_terminal_not_found() {
        let state = state_with(DummyBackend::default(), StubAssets);

        let err = show(
            State(state),
            Path(("euw".to_string(), "EUW1_404".to_string())),
            Query(MatchQuery { focus: None }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
