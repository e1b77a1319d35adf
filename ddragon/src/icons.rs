//! Icon URL resolution and localized names on top of [`DdragonClient`].
//!
//! Champion, profile-icon, item and ability URLs are pure patterns over the
//! resolved version. Spell and rune URLs go through the loaded documents
//! and surface lookup failures so callers can degrade per identifier. Rank
//! emblems and the empty item slot come from the Community Dragon mirror,
//! which hosts the client assets Data Dragon does not.

use async_trait::async_trait;

use riftview_shared::traits::{
    ChampionAbility, ChampionSkillSource, IconSource, LocalizedNames, SourceError, StaticAssets,
    StaticDocumentStore,
};

use crate::{DdragonClient, DdragonError};

const CDRAGON_BASE: &str = "https://raw.communitydragon.org/latest";

#[async_trait]
impl<S: StaticDocumentStore> IconSource for DdragonClient<S> {
    async fn champion_icon_url(&self, champion_name: &str) -> String {
        // The match records spell this one differently than the CDN does.
        let name = match champion_name {
            "FiddleSticks" => "Fiddlesticks",
            other => other,
        };
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.base_url(),
            self.version().await,
            name
        )
    }

    async fn profile_icon_url(&self, icon_id: u32) -> String {
        format!(
            "{}/cdn/{}/img/profileicon/{}.png",
            self.base_url(),
            self.version().await,
            icon_id
        )
    }

    async fn item_icon_url(&self, item_id: u32) -> String {
        format!(
            "{}/cdn/{}/img/item/{}.png",
            self.base_url(),
            self.version().await,
            item_id
        )
    }

    async fn ability_icon_url(&self, image_file: &str) -> String {
        format!(
            "{}/cdn/{}/img/spell/{}",
            self.base_url(),
            self.version().await,
            image_file
        )
    }

    async fn summoner_spell_icon_url(&self, spell_id: u32) -> Result<String, SourceError> {
        let spell = self
            .summoner_spell(spell_id, self.default_language())
            .await?
            .ok_or(DdragonError::UnknownSpell(spell_id))?;
        Ok(format!(
            "{}/cdn/{}/img/spell/{}",
            self.base_url(),
            self.version().await,
            spell.image.full
        ))
    }

    async fn rune_icon_url(&self, rune_id: u32) -> Result<String, SourceError> {
        let rune = self
            .rune(rune_id, self.default_language())
            .await?
            .ok_or(DdragonError::UnknownRune(rune_id))?;
        // Rune art is not versioned on the CDN.
        Ok(format!("{}/cdn/img/{}", self.base_url(), rune.icon))
    }

    async fn rune_style_icon_url(&self, style_id: u32) -> Result<String, SourceError> {
        let style = self
            .rune_style(style_id, self.default_language())
            .await?
            .ok_or(DdragonError::UnknownStyle(style_id))?;
        Ok(format!("{}/cdn/img/{}", self.base_url(), style.icon))
    }

    fn rank_emblem_url(&self, tier: &str) -> String {
        format!(
            "{}/plugins/rcp-fe-lol-static-assets/global/default/images/ranked-emblem/emblem-{}.png",
            CDRAGON_BASE,
            tier.to_lowercase()
        )
    }

    fn empty_slot_url(&self) -> String {
        format!(
            "{}/plugins/rcp-fe-lol-static-assets/global/default/images/item-empty-slot.png",
            CDRAGON_BASE
        )
    }
}

#[async_trait]
impl<S: StaticDocumentStore> LocalizedNames for DdragonClient<S> {
    async fn champion_display_name(
        &self,
        champion: &str,
        language: &str,
    ) -> Result<String, SourceError> {
        let doc = self.load_champions(language).await?;
        let summary = doc
            .data
            .get(champion)
            .ok_or_else(|| DdragonError::UnknownChampion(champion.to_string()))?;
        Ok(summary.name.clone())
    }
}

#[async_trait]
impl<S: StaticDocumentStore> ChampionSkillSource for DdragonClient<S> {
    async fn champion_abilities(
        &self,
        champion: &str,
        language: &str,
    ) -> Result<Vec<ChampionAbility>, SourceError> {
        let detail = self
            .champion_detail(champion, language)
            .await?
            .ok_or_else(|| DdragonError::UnknownChampion(champion.to_string()))?;
        Ok(detail
            .spells
            .into_iter()
            .map(|spell| ChampionAbility {
                name: spell.name,
                image_file: spell.image.full,
            })
            .collect())
    }
}

impl<S: StaticDocumentStore> StaticAssets for DdragonClient<S> {}
