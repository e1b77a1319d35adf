//! Per-page fetch orchestration: each handler issues its primary backend
//! queries, fans out enrichment lookups, and returns an assembled view.

use riftview_shared::Region;

use crate::error::AppError;

pub mod home;
pub mod match_detail;
pub mod meta;
pub mod summoner;
pub mod trends;

pub(crate) fn parse_region(raw: &str) -> Result<Region, AppError> {
    Region::try_from(raw.to_string()).map_err(|_| AppError::UnknownRegion(raw.to_string()))
}
