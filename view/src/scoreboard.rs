//! Match-detail scoreboard: both teams, one row per participant.
//!
//! Icon and name enrichment is issued as one concurrent batch per category
//! (champions, items, spells, runes) over the distinct identifiers in the
//! match. A failing lookup blanks its own entry; the batches are joined
//! before the rows are assembled, so the scoreboard is complete when it
//! renders.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use riftview_shared::{MatchDetail, traits::StaticAssets};
use riftview_stats::Kda;
use serde::Serialize;

use crate::{name_or_raw, url_or_blank};

#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardRow {
    pub puuid: String,
    pub player: String,
    pub champion: String,
    pub name: String,
    pub champion_icon_url: String,
    pub level: u8,
    pub kda_line: String,
    pub kda: Kda,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub gold_earned: u32,
    pub cs: u32,
    pub vision_score: u32,
    pub item_urls: Vec<String>,
    pub spell_urls: Vec<String>,
    pub keystone_url: String,
    pub sub_style_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub team_id: u16,
    pub win: bool,
    pub players: Vec<ScoreboardRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardView {
    pub match_id: String,
    pub queue: &'static str,
    pub duration: String,
    pub teams: Vec<TeamView>,
}

pub async fn build_scoreboard<A>(
    detail: &MatchDetail,
    assets: &A,
    language: &str,
) -> ScoreboardView
where
    A: StaticAssets + ?Sized,
{
    let mut champions: HashSet<&str> = HashSet::new();
    let mut items: HashSet<u32> = HashSet::new();
    let mut spells: HashSet<u32> = HashSet::new();
    let mut runes: HashSet<u32> = HashSet::new();
    let mut styles: HashSet<u32> = HashSet::new();

    for p in &detail.participants {
        champions.insert(p.champion_name.as_str());
        items.extend(p.items.iter().copied().filter(|id| *id != 0));
        spells.extend(p.summoner_spell_ids);
        runes.insert(p.keystone_id);
        styles.insert(p.sub_style_id);
    }

    let (champion_assets, item_urls, spell_urls, rune_urls, style_urls) = tokio::join!(
        resolve_champions(&champions, assets, language),
        resolve_items(&items, assets),
        resolve_spells(&spells, assets),
        resolve_runes(&runes, assets),
        resolve_styles(&styles, assets),
    );

    let mut teams: Vec<TeamView> = Vec::new();
    for p in &detail.participants {
        let (name, champion_icon_url) = champion_assets
            .get(p.champion_name.as_str())
            .cloned()
            .unwrap_or_else(|| (p.champion_name.clone(), String::new()));

        let row = ScoreboardRow {
            puuid: p.puuid.clone(),
            player: format!("{}#{}", p.riot_id_game_name, p.riot_id_tagline),
            champion: p.champion_name.clone(),
            name,
            champion_icon_url,
            level: p.champ_level,
            kda_line: p.kda_line(),
            kda: Kda::compute(p.kills as u32, p.deaths as u32, p.assists as u32),
            damage_dealt: p.damage_dealt,
            damage_taken: p.damage_taken,
            gold_earned: p.gold_earned,
            cs: p.total_cs,
            vision_score: p.vision_score,
            item_urls: p
                .items
                .iter()
                .map(|id| {
                    if *id == 0 {
                        assets.empty_slot_url()
                    } else {
                        item_urls.get(id).cloned().unwrap_or_default()
                    }
                })
                .collect(),
            spell_urls: p
                .summoner_spell_ids
                .iter()
                .map(|id| spell_urls.get(id).cloned().unwrap_or_default())
                .collect(),
            keystone_url: rune_urls.get(&p.keystone_id).cloned().unwrap_or_default(),
            sub_style_url: style_urls.get(&p.sub_style_id).cloned().unwrap_or_default(),
        };

        match teams.iter_mut().find(|team| team.team_id == p.team_id) {
            Some(team) => team.players.push(row),
            None => teams.push(TeamView {
                team_id: p.team_id,
                win: p.win,
                players: vec![row],
            }),
        }
    }

    ScoreboardView {
        match_id: detail.match_id.clone(),
        queue: detail.queue_type().display_name(),
        duration: detail.to_formatted_match_duration(),
        teams,
    }
}

async fn resolve_champions<A>(
    champions: &HashSet<&str>,
    assets: &A,
    language: &str,
) -> HashMap<String, (String, String)>
where
    A: StaticAssets + ?Sized,
{
    join_all(champions.iter().map(|champion| async move {
        let name = name_or_raw(
            assets.champion_display_name(champion, language).await,
            champion,
        );
        let icon = assets.champion_icon_url(champion).await;
        (champion.to_string(), (name, icon))
    }))
    .await
    .into_iter()
    .collect()
}

async fn resolve_items<A>(items: &HashSet<u32>, assets: &A) -> HashMap<u32, String>
where
    A: StaticAssets + ?Sized,
{
    join_all(
        items
            .iter()
            .map(|id| async move { (*id, assets.item_icon_url(*id).await) }),
    )
    .await
    .into_iter()
    .collect()
}

async fn resolve_spells<A>(spells: &HashSet<u32>, assets: &A) -> HashMap<u32, String>
where
    A: StaticAssets + ?Sized,
{
    join_all(spells.iter().map(|id| async move {
        let url = url_or_blank(
            assets.summoner_spell_icon_url(*id).await,
            "summoner spell",
            id,
        );
        (*id, url)
    }))
    .await
    .into_iter()
    .collect()
}

async fn resolve_runes<A>(runes: &HashSet<u32>, assets: &A) -> HashMap<u32, String>
where
    A: StaticAssets + ?Sized,
{
    join_all(runes.iter().map(|id| async move {
        let url = url_or_blank(assets.rune_icon_url(*id).await, "rune", id);
        (*id, url)
    }))
    .await
    .into_iter()
    .collect()
}

async fn resolve_styles<A>(styles: &HashSet<u32>, assets: &A) -> HashMap<u32, String>
where
    A: StaticAssets + ?Sized,
{
    join_all(styles.iter().map(|id| async move {
        let url = url_or_blank(assets.rune_style_icon_url(*id).await, "rune style", id);
        (*id, url)
    }))
    .await
    .into_iter()
    .collect()
}
