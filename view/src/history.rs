//! Match-history cards: one compact entry per played match.

use futures::future::join_all;
use riftview_shared::{Participant, PlayedMatch, traits::StaticAssets};
use riftview_stats::Kda;
use serde::Serialize;

use crate::{name_or_raw, url_or_blank};

#[derive(Debug, Clone, Serialize)]
pub struct MatchCardView {
    pub match_id: String,
    pub queue: &'static str,
    pub result: String,
    pub duration: String,
    pub champion: String,
    pub name: String,
    pub champion_icon_url: String,
    pub lane: &'static str,
    pub kda_line: String,
    pub kda: Kda,
    pub item_urls: Vec<String>,
    pub spell_urls: Vec<String>,
    pub keystone_url: String,
    pub sub_style_url: String,
}

pub async fn build_match_cards<A>(
    matches: &[PlayedMatch],
    assets: &A,
    language: &str,
) -> Vec<MatchCardView>
where
    A: StaticAssets + ?Sized,
{
    join_all(
        matches
            .iter()
            .map(|played| build_card(played, assets, language)),
    )
    .await
}

async fn build_card<A>(played: &PlayedMatch, assets: &A, language: &str) -> MatchCardView
where
    A: StaticAssets + ?Sized,
{
    let me = &played.me;

    MatchCardView {
        match_id: played.match_id.clone(),
        queue: played.queue_type().display_name(),
        result: me.to_title_win_string(),
        duration: played.to_formatted_match_duration(),
        champion: me.champion_name.clone(),
        name: name_or_raw(
            assets
                .champion_display_name(&me.champion_name, language)
                .await,
            &me.champion_name,
        ),
        champion_icon_url: assets.champion_icon_url(&me.champion_name).await,
        lane: me.lane().as_str(),
        kda_line: me.kda_line(),
        kda: Kda::compute(me.kills as u32, me.deaths as u32, me.assists as u32),
        item_urls: item_slot_urls(me, assets).await,
        spell_urls: spell_urls(me, assets).await,
        keystone_url: url_or_blank(
            assets.rune_icon_url(me.keystone_id).await,
            "rune",
            me.keystone_id,
        ),
        sub_style_url: url_or_blank(
            assets.rune_style_icon_url(me.sub_style_id).await,
            "rune style",
            me.sub_style_id,
        ),
    }
}

/// Seven slot URLs in slot order; empty slots render the empty-slot asset.
pub(crate) async fn item_slot_urls<A>(participant: &Participant, assets: &A) -> Vec<String>
where
    A: StaticAssets + ?Sized,
{
    let mut urls = Vec::with_capacity(participant.items.len());
    for item_id in participant.items {
        if item_id == 0 {
            urls.push(assets.empty_slot_url());
        } else {
            urls.push(assets.item_icon_url(item_id).await);
        }
    }
    urls
}

pub(crate) async fn spell_urls<A>(participant: &Participant, assets: &A) -> Vec<String>
where
    A: StaticAssets + ?Sized,
{
    let mut urls = Vec::with_capacity(participant.summoner_spell_ids.len());
    for spell_id in participant.summoner_spell_ids {
        urls.push(url_or_blank(
            assets.summoner_spell_icon_url(spell_id).await,
            "summoner spell",
            spell_id,
        ));
    }
    urls
}
