use axum::{Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub service: &'static str,
    pub version: &'static str,
    pub routes: Vec<&'static str>,
}

pub async fn index() -> Json<HomeView> {
    Json(HomeView {
        service: "riftview",
        version: env!("CARGO_PKG_VERSION"),
        routes: vec![
            "/{region}/summoner/{name}",
            "/{region}/match/{match_id}",
            "/{region}/meta",
            "/trends",
            "/contest",
        ],
    })
}

#[derive(Debug, Serialize)]
pub struct ContestView {
    pub status: &'static str,
}

/// Placeholder page, reserved for the community contest section.
pub async fn contest() -> Json<ContestView> {
    Json(ContestView {
        status: "coming soon",
    })
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "No such page" })),
    )
}
