//! Clients for the Data Dragon static game-data CDN.
//!
//! [`DdragonClient`] resolves the current game-data version (memoized, with
//! a configured fallback), loads the per-language item/rune/summoner-spell
//! and champion documents, and answers point lookups by id. Documents are
//! memoized in memory per language, read through a persistent 24 hour
//! store, and concurrent loads of the same language share one in-flight
//! request. A failed fetch for a non-English language falls back to the
//! English document; an English failure propagates to the caller.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use riftview_shared::traits::{SourceError, StaticDocumentStore};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

pub mod documents;
mod icons;

pub use documents::{
    ChampionDetail, ChampionSummary, Item, Rune, RuneStyle, SummonerSpell,
};

use documents::{ChampionDetailDocument, ChampionDocument, ItemDocument, SummonerSpellDocument};

/// Persisted static documents expire after a day.
pub const STATIC_DATA_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Language every other language degrades to when its document cannot be
/// fetched.
pub const FALLBACK_LANGUAGE: &str = "en_US";

const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Error)]
pub enum DdragonError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Decoding static document failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Static cache store error: {0}")]
    Store(SourceError),

    #[error("Unknown summoner spell id: {0}")]
    UnknownSpell(u32),

    #[error("Unknown rune id: {0}")]
    UnknownRune(u32),

    #[error("Unknown rune style id: {0}")]
    UnknownStyle(u32),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),
}

pub type DdragonResult<T> = Result<T, DdragonError>;

/// Per-key memo of loaded documents. Each key owns a [`OnceCell`] so that
/// concurrent first loads coalesce into a single fetch; `clear` swaps the
/// whole map out, letting any in-flight load finish against its old cell.
#[derive(Debug)]
struct KeyedCells<T> {
    cells: Mutex<HashMap<String, Arc<OnceCell<Arc<T>>>>>,
}

impl<T> Default for KeyedCells<T> {
    fn default() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> KeyedCells<T> {
    fn cell(&self, key: &str) -> Arc<OnceCell<Arc<T>>> {
        self.cells
            .lock()
            .expect("document cell lock poisoned")
            .entry(key.to_string())
            .or_default()
            .clone()
    }

    fn clear(&self) {
        self.cells
            .lock()
            .expect("document cell lock poisoned")
            .clear();
    }
}

/// Client for the versioned Data Dragon documents and image URLs.
#[derive(Debug)]
pub struct DdragonClient<S> {
    http: reqwest::Client,
    store: S,
    base_url: String,
    fallback_version: String,
    default_language: String,
    version: KeyedCells<String>,
    items: KeyedCells<ItemDocument>,
    runes: KeyedCells<Vec<RuneStyle>>,
    spells: KeyedCells<SummonerSpellDocument>,
    champions: KeyedCells<ChampionDocument>,
    champion_details: KeyedCells<ChampionDetailDocument>,
}

impl<S: StaticDocumentStore> DdragonClient<S> {
    pub fn new(store: S, fallback_version: String, default_language: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            store,
            base_url: DDRAGON_BASE.to_string(),
            fallback_version,
            default_language,
            version: KeyedCells::default(),
            items: KeyedCells::default(),
            runes: KeyedCells::default(),
            spells: KeyedCells::default(),
            champions: KeyedCells::default(),
            champion_details: KeyedCells::default(),
        }
    }

    /// Point the client at a different CDN host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Current game-data version. Resolved once from `versions.json` and
    /// memoized; resolution failure degrades to the configured fallback.
    pub async fn version(&self) -> String {
        let cell = self.version.cell("current");
        cell.get_or_init(|| async {
            let url = format!("{}/api/versions.json", self.base_url);
            let resolved = match self.http_get(&url).await {
                Ok(body) => serde_json::from_str::<Vec<String>>(&body)
                    .map_err(DdragonError::from)
                    .map(|versions| versions.into_iter().next()),
                Err(e) => Err(e),
            };
            match resolved {
                Ok(Some(version)) => {
                    debug!("resolved game-data version {}", version);
                    Arc::new(version)
                }
                Ok(None) => {
                    warn!(
                        "empty versions document, using fallback {}",
                        self.fallback_version
                    );
                    Arc::new(self.fallback_version.clone())
                }
                Err(e) => {
                    warn!(
                        "version resolution failed, using fallback {}: {}",
                        self.fallback_version, e
                    );
                    Arc::new(self.fallback_version.clone())
                }
            }
        })
        .await
        .as_str()
        .to_string()
    }

    pub async fn load_items(&self, language: &str) -> DdragonResult<Arc<ItemDocument>> {
        self.load_document("items", "item.json", language, &self.items)
            .await
    }

    pub async fn load_runes(&self, language: &str) -> DdragonResult<Arc<Vec<RuneStyle>>> {
        self.load_document("runes", "runesReforged.json", language, &self.runes)
            .await
    }

    pub async fn load_summoner_spells(
        &self,
        language: &str,
    ) -> DdragonResult<Arc<SummonerSpellDocument>> {
        self.load_document("summoner_spells", "summoner.json", language, &self.spells)
            .await
    }

    pub async fn load_champions(&self, language: &str) -> DdragonResult<Arc<ChampionDocument>> {
        self.load_document("champions", "champion.json", language, &self.champions)
            .await
    }

    pub async fn item(&self, item_id: u32, language: &str) -> DdragonResult<Option<Item>> {
        let doc = self.load_items(language).await?;
        Ok(doc.data.get(&item_id.to_string()).cloned())
    }

    pub async fn rune(&self, rune_id: u32, language: &str) -> DdragonResult<Option<Rune>> {
        let styles = self.load_runes(language).await?;
        Ok(styles
            .iter()
            .flat_map(|style| style.slots.iter())
            .flat_map(|slot| slot.runes.iter())
            .find(|rune| rune.id == rune_id)
            .cloned())
    }

    pub async fn rune_style(
        &self,
        style_id: u32,
        language: &str,
    ) -> DdragonResult<Option<RuneStyle>> {
        let styles = self.load_runes(language).await?;
        Ok(styles.iter().find(|style| style.id == style_id).cloned())
    }

    /// Look up a summoner spell by numeric id: well-known ids map straight
    /// to their document key, anything else falls back to a scan over the
    /// records' own `key` field.
    pub async fn summoner_spell(
        &self,
        spell_id: u32,
        language: &str,
    ) -> DdragonResult<Option<SummonerSpell>> {
        let doc = self.load_summoner_spells(language).await?;

        if let Some(key) = well_known_spell_key(spell_id) {
            if let Some(spell) = doc.data.get(key) {
                return Ok(Some(spell.clone()));
            }
        }

        let wanted = spell_id.to_string();
        Ok(doc.data.values().find(|spell| spell.key == wanted).cloned())
    }

    /// Per-champion detail document, carrying the skill data the
    /// skill-order track renders.
    pub async fn champion_detail(
        &self,
        champion: &str,
        language: &str,
    ) -> DdragonResult<Option<ChampionDetail>> {
        let category = format!("champion_{}", champion);
        let file = format!("champion/{}.json", champion);
        let memo_key = format!("{}:{}", language, champion);

        let cell = self.champion_details.cell(&memo_key);
        let doc = cell
            .get_or_try_init(|| async {
                let payload = self.document_payload(&category, &file, language).await?;
                let parsed: ChampionDetailDocument = serde_json::from_str(&payload)?;
                Ok::<_, DdragonError>(Arc::new(parsed))
            })
            .await?
            .clone();

        Ok(doc.data.get(champion).cloned())
    }

    /// Drop every memoized document and empty the persistent store.
    pub async fn clear_cache(&self) -> DdragonResult<()> {
        self.version.clear();
        self.items.clear();
        self.runes.clear();
        self.spells.clear();
        self.champions.clear();
        self.champion_details.clear();
        self.store.clear().await.map_err(DdragonError::Store)
    }

    async fn load_document<T>(
        &self,
        category: &str,
        file: &str,
        language: &str,
        cache: &KeyedCells<T>,
    ) -> DdragonResult<Arc<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let cell = cache.cell(language);
        let doc = cell
            .get_or_try_init(|| async {
                let payload = self.document_payload(category, file, language).await?;
                let parsed: T = serde_json::from_str(&payload)?;
                Ok::<_, DdragonError>(Arc::new(parsed))
            })
            .await?
            .clone();
        Ok(doc)
    }

    /// Raw document payload: persisted copy when fresh, otherwise fetched
    /// from the CDN (with English fallback) and written back to the store.
    async fn document_payload(
        &self,
        category: &str,
        file: &str,
        language: &str,
    ) -> DdragonResult<String> {
        match self
            .store
            .get_document(category, language, STATIC_DATA_TTL)
            .await
        {
            Ok(Some(payload)) => {
                debug!("serving {} ({}) from persistent cache", category, language);
                return Ok(payload);
            }
            Ok(None) => {}
            Err(e) => warn!("static cache read failed for {}: {}", category, e),
        }

        let payload = match self.fetch_document(file, language).await {
            Ok(payload) => payload,
            Err(e) if language != FALLBACK_LANGUAGE => {
                warn!(
                    "{} fetch failed for {}, falling back to {}: {}",
                    category, language, FALLBACK_LANGUAGE, e
                );
                self.fetch_document(file, FALLBACK_LANGUAGE).await?
            }
            Err(e) => return Err(e),
        };

        if let Err(e) = self.store.put_document(category, language, &payload).await {
            warn!("static cache write failed for {}: {}", category, e);
        }

        Ok(payload)
    }

    async fn fetch_document(&self, file: &str, language: &str) -> DdragonResult<String> {
        let version = self.version().await;
        let url = format!(
            "{}/cdn/{}/data/{}/{}",
            self.base_url, version, language, file
        );
        self.http_get(&url).await
    }

    async fn http_get(&self, url: &str) -> DdragonResult<String> {
        let res = self.http.get(url).send().await?;
        if !res.status().is_success() {
            return Err(DdragonError::Status(res.status()));
        }
        Ok(res.text().await?)
    }
}

/// Well-known numeric spell ids and their document keys. Anything missing
/// here is resolved by scanning the document's `key` fields.
fn well_known_spell_key(spell_id: u32) -> Option<&'static str> {
    match spell_id {
        1 => Some("SummonerBoost"),
        3 => Some("SummonerExhaust"),
        4 => Some("SummonerFlash"),
        6 => Some("SummonerHaste"),
        7 => Some("SummonerHeal"),
        11 => Some("SummonerSmite"),
        12 => Some("SummonerTeleport"),
        13 => Some("SummonerMana"),
        14 => Some("SummonerDot"),
        21 => Some("SummonerBarrier"),
        32 => Some("SummonerSnowball"),
        _ => None,
    }
}
