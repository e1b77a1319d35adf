use axum::{
    Json,
    extract::{Path, State},
};
use riftview_backend::{MetaApi, MetaTierList};

use crate::error::Result;
use crate::pages::parse_region;
use crate::routes::AppState;

/// Per-region champion tier list. The backend currently serves stub data.
pub async fn tiers(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<MetaTierList>> {
    let region = parse_region(&region)?;
    let tiers = state.backend.get_meta_tiers(region).await?;
    Ok(Json(tiers))
}
