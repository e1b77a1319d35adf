use axum::{Json, extract::State};
use riftview_backend::{MetaApi, TrendingTopic};

use crate::error::Result;
use crate::routes::AppState;

/// Trending community topics. The backend currently serves stub data.
pub async fn topics(State(state): State<AppState>) -> Result<Json<Vec<TrendingTopic>>> {
    let topics = state.backend.get_trending_topics().await?;
    Ok(Json(topics))
}
