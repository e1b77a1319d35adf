//! HTTP routes mirroring the page structure of the product: home,
//! summoner profile, match detail, per-region meta, trends, contest and a
//! catch-all 404.

use std::sync::Arc;

use axum::{Router, routing::get};

use riftview_backend::BackendFull;
use riftview_shared::traits::StaticAssets;

use crate::pages;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendFull>,
    pub assets: Arc<dyn StaticAssets>,
    pub language: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home::index))
        .route("/trends", get(pages::trends::topics))
        .route("/contest", get(pages::home::contest))
        .route("/:region/summoner/:name", get(pages::summoner::show))
        .route("/:region/match/:match_id", get(pages::match_detail::show))
        .route("/:region/meta", get(pages::meta::tiers))
        .fallback(pages::home::not_found)
        .with_state(state)
}
