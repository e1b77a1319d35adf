use async_trait::async_trait;
use riftview_shared::{FourteenAnalysis, Region};

use crate::client::{ApiRequest, BackendResponse};

/// Fourteen-minute lane analysis, computed by the backend and passed
/// through for rendering.
#[async_trait]
pub trait AnalysisApi: ApiRequest {
    async fn get_fourteen_analysis(
        &self,
        region: Region,
        match_id: &str,
    ) -> BackendResponse<FourteenAnalysis> {
        tracing::trace!("[BACKEND] get_fourteen_analysis {} in {:?}", match_id, region);
        let path = format!("/analysis/{}/{}/fourteen", region.as_str(), match_id);

        let bytes = self.request(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
