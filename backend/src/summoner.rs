use async_trait::async_trait;
use riftview_shared::{LeagueEntry, Region, Summoner};
use serde::Deserialize;
use urlencoding::encode;

use crate::client::{ApiRequest, BackendResponse};

/// Representation of the summoner profile response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
    pub summoner_level: u32,
    pub profile_icon_id: u32,
    #[serde(default)]
    pub leagues: Vec<LeagueEntry>,
}

impl From<SummonerDto> for Summoner {
    fn from(value: SummonerDto) -> Self {
        Self {
            puuid: value.puuid,
            game_name: value.game_name,
            tag_line: value.tag_line,
            summoner_level: value.summoner_level,
            profile_icon_id: value.profile_icon_id,
            leagues: value.leagues,
        }
    }
}

/// Summoner lookup by region and riot id.
#[async_trait]
pub trait SummonerApi: ApiRequest {
    async fn get_summoner(&self, region: Region, riot_id: &str) -> BackendResponse<Summoner> {
        tracing::trace!("[BACKEND] get_summoner {} in {:?}", riot_id, region);
        let path = format!("/summoners/{}/{}", region.as_str(), encode(riot_id));

        let bytes = self.request(path).await?;
        let dto: SummonerDto = serde_json::from_slice(&bytes)?;
        Ok(dto.into())
    }
}
