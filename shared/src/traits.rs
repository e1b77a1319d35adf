//! Trait seams between the riftview crates: the persistent static-data
//! store and the icon/name resolution surface the view layer renders
//! against.

use std::{error::Error as ErrorT, fmt::Debug, time::Duration};

use async_trait::async_trait;

pub type SourceError = Box<dyn ErrorT + Send + Sync>;

/// Persistent key-value store for raw static game-data documents.
///
/// Entries are keyed per (category, language) and carry a stored timestamp;
/// a read older than `max_age` is a miss. There is no per-entry
/// invalidation, only [`clear`](StaticDocumentStore::clear).
#[async_trait]
pub trait StaticDocumentStore: Send + Sync + Debug {
    async fn get_document(
        &self,
        category: &str,
        language: &str,
        max_age: Duration,
    ) -> Result<Option<String>, SourceError>;

    async fn put_document(
        &self,
        category: &str,
        language: &str,
        payload: &str,
    ) -> Result<(), SourceError>;

    async fn clear(&self) -> Result<(), SourceError>;
}

/// Resolves game identifiers to image URLs.
///
/// Champion, profile-icon, item, rank and empty-slot URLs are pure
/// id-to-pattern mappings; spell and rune URLs need the loaded static
/// documents and can therefore fail. Callers catch failures per identifier
/// and degrade to a placeholder.
#[async_trait]
pub trait IconSource: Send + Sync {
    async fn champion_icon_url(&self, champion_name: &str) -> String;

    async fn profile_icon_url(&self, icon_id: u32) -> String;

    async fn item_icon_url(&self, item_id: u32) -> String;

    /// Icon for a champion ability, addressed by the image file name from
    /// the champion detail document.
    async fn ability_icon_url(&self, image_file: &str) -> String;

    async fn summoner_spell_icon_url(&self, spell_id: u32) -> Result<String, SourceError>;

    async fn rune_icon_url(&self, rune_id: u32) -> Result<String, SourceError>;

    async fn rune_style_icon_url(&self, style_id: u32) -> Result<String, SourceError>;

    fn rank_emblem_url(&self, tier: &str) -> String;

    fn empty_slot_url(&self) -> String;
}

/// Resolves raw champion identifiers to display names in a given language.
#[async_trait]
pub trait LocalizedNames: Send + Sync {
    async fn champion_display_name(
        &self,
        champion: &str,
        language: &str,
    ) -> Result<String, SourceError>;
}

/// One ability of a champion, in Q/W/E/R order, as carried by the
/// per-champion detail document.
#[derive(Debug, Clone)]
pub struct ChampionAbility {
    pub name: String,
    pub image_file: String,
}

/// Per-champion skill data used by the skill-order track.
#[async_trait]
pub trait ChampionSkillSource: Send + Sync {
    async fn champion_abilities(
        &self,
        champion: &str,
        language: &str,
    ) -> Result<Vec<ChampionAbility>, SourceError>;
}

/// Super-trait for the full static-asset surface the view layer consumes.
pub trait StaticAssets: IconSource + LocalizedNames + ChampionSkillSource {}
