use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use riftview_backend::{BackendError, MatchApi, SummonerApi};
use riftview_view::{MatchCardView, ProfileView, build_match_cards, build_profile};

use crate::error::{AppError, Result};
use crate::pages::parse_region;
use crate::routes::AppState;

/// How many recent matches feed the profile aggregates and the history
/// list.
const MATCH_HISTORY_COUNT: u32 = 20;

#[derive(Debug, Serialize)]
pub struct SummonerPageView {
    pub profile: ProfileView,
    pub matches: Vec<MatchCardView>,
}

pub async fn show(
    State(state): State<AppState>,
    Path((region, name)): Path<(String, String)>,
) -> Result<Json<SummonerPageView>> {
    let region = parse_region(&region)?;

    let summoner = state
        .backend
        .get_summoner(region, &name)
        .await
        .map_err(|e| match e {
            BackendError::NotFound => {
                AppError::NotFound(format!("Summoner {} not found in {}", name, region.as_str()))
            }
            other => other.into(),
        })?;

    let matches = state
        .backend
        .get_match_history(region, &summoner.puuid, MATCH_HISTORY_COUNT)
        .await?;

    let assets = state.assets.as_ref();
    let (profile, cards) = tokio::join!(
        build_profile(&summoner, &matches, assets, &state.language),
        build_match_cards(&matches, assets, &state.language),
    );

    Ok(Json(SummonerPageView {
        profile,
        matches: cards,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{DummyBackend, StubAssets, state_with};
    use riftview_stats::Kda;

    fn backend_with_profile() -> DummyBackend {
        let mut backend = DummyBackend::default();
        backend.insert(
            "/summoners/euw/Tester-EUW",
            serde_json::json!({
                "puuid": "p1",
                "gameName": "Tester",
                "tagLine": "EUW",
                "summonerLevel": 245,
                "profileIconId": 4321,
                "leagues": []
            }),
        );
        backend.insert(
            "/matches/euw/by-puuid/p1?count=20",
            serde_json::json!([
                {
                    "matchId": "EUW1_1",
                    "queueId": 420,
                    "gameCreation": 0,
                    "gameDuration": 1800,
                    "me": DummyBackend::participant_json("p1", "Ahri", true)
                },
                {
                    "matchId": "EUW1_2",
                    "queueId": 420,
                    "gameCreation": 0,
                    "gameDuration": 1800,
                    "me": DummyBackend::participant_json("p1", "Ahri", true)
                },
                {
                    "matchId": "EUW1_3",
                    "queueId": 420,
                    "gameCreation": 0,
                    "gameDuration": 1800,
                    "me": DummyBackend::participant_json("p1", "Zed", false)
                }
            ]),
        );
        backend
    }

    #[tokio::test]
    async fn profile_page_aggregates_history() {
        let state = state_with(backend_with_profile(), StubAssets);

        let page = show(
            State(state),
            Path(("euw".to_string(), "Tester-EUW".to_string())),
        )
        .await
        .unwrap();

        let view = &page.0;
        assert_eq!(view.matches.len(), 3);

        let ahri = &view.profile.champions[0];
        assert_eq!(ahri.champion, "Ahri");
        assert_eq!(ahri.games, 2);
        assert_eq!(ahri.win_rate, 100);
        assert_eq!(ahri.kda, Kda::Perfect);

        let zed = &view.profile.champions[1];
        assert_eq!(zed.games, 1);
        assert_eq!(zed.win_rate, 0);
    }

    #[tokio::test]
    async fn missing_summoner_is_a_terminal_not_found() {
        let state = state_with(DummyBackend::default(), StubAssets);

        let err = show(
            State(state),
            Path(("euw".to_string(), "Nobody-XXX".to_string())),
        )
        .await
        .unwrap_err();

        match err {
            AppError::NotFound(msg) => assert!(msg.contains("Nobody-XXX")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_region_is_rejected() {
        let state = state_with(DummyBackend::default(), StubAssets);

        let err = show(
            State(state),
            Path(("mars".to_string(), "Tester-EUW".to_string())),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::UnknownRegion(_)));
    }
}
