//! Skill-order track: the sequence of ability points spent over the game,
//! optionally enriched with per-champion ability names and icons.

use riftview_shared::{
    SkillUp,
    traits::{ChampionAbility, IconSource},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AbilityView {
    pub key: char,
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillUpView {
    pub level: u8,
    pub key: char,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillOrderView {
    pub champion: String,
    pub abilities: Vec<AbilityView>,
    pub order: Vec<SkillUpView>,
}

fn slot_key(slot: u8) -> char {
    match slot {
        1 => 'Q',
        2 => 'W',
        3 => 'E',
        4 => 'R',
        _ => '?',
    }
}

pub async fn build_skill_order<A>(
    champion: &str,
    skill_ups: &[SkillUp],
    abilities: Option<&[ChampionAbility]>,
    assets: &A,
) -> SkillOrderView
where
    A: IconSource + ?Sized,
{
    let mut ability_views = Vec::new();
    if let Some(abilities) = abilities {
        for (index, ability) in abilities.iter().take(4).enumerate() {
            ability_views.push(AbilityView {
                key: slot_key(index as u8 + 1),
                name: ability.name.clone(),
                icon_url: assets.ability_icon_url(&ability.image_file).await,
            });
        }
    }

    let order = skill_ups
        .iter()
        .enumerate()
        .map(|(index, skill_up)| SkillUpView {
            level: index as u8 + 1,
            key: slot_key(skill_up.skill_slot),
        })
        .collect();

    SkillOrderView {
        champion: champion.to_string(),
        abilities: ability_views,
        order,
    }
}
