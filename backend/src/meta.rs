use async_trait::async_trait;
use riftview_shared::Region;
use serde::{Deserialize, Serialize};

use crate::client::{ApiRequest, BackendResponse};

/// One champion row of the per-region tier list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTierEntry {
    pub champion: String,
    pub lane: String,
    pub tier: u8,
    pub win_rate: f32,
    pub pick_rate: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTierList {
    pub patch: String,
    #[serde(default)]
    pub entries: Vec<MetaTierEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub posts: u32,
}

/// Tier-list and trending endpoints. The backend currently serves stub
/// data for both; the client shape is final.
#[async_trait]
pub trait MetaApi: ApiRequest {
    async fn get_meta_tiers(&self, region: Region) -> BackendResponse<MetaTierList> {
        tracing::trace!("[BACKEND] get_meta_tiers in {:?}", region);
        let path = format!("/meta/{}/tiers", region.as_str());

        let bytes = self.request(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_trending_topics(&self) -> BackendResponse<Vec<TrendingTopic>> {
        tracing::trace!("[BACKEND] get_trending_topics");
        let bytes = self.request("/trends/topics".to_string()).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
