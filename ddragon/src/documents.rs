//! Typed views over the Data Dragon JSON documents.
//!
//! Only the fields the view layer actually renders are deserialized;
//! everything else in the documents is ignored.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub full: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemGold {
    pub total: u32,
    #[serde(default)]
    pub sell: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub plaintext: String,
    pub gold: ItemGold,
    pub image: ImageRef,
}

/// `item.json`: items keyed by their numeric id rendered as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDocument {
    pub data: HashMap<String, Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rune {
    pub id: u32,
    pub key: String,
    pub icon: String,
    pub name: String,
    #[serde(default, rename = "shortDesc")]
    pub short_desc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuneSlot {
    pub runes: Vec<Rune>,
}

/// One tree of `runesReforged.json`. The style itself carries an id and an
/// icon, its slots hold the selectable runes.
#[derive(Debug, Clone, Deserialize)]
pub struct RuneStyle {
    pub id: u32,
    pub key: String,
    pub icon: String,
    pub name: String,
    pub slots: Vec<RuneSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummonerSpell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Numeric spell id rendered as a string, e.g. `"4"` for Flash.
    pub key: String,
    pub image: ImageRef,
}

/// `summoner.json`: spells keyed by their string id, e.g. `SummonerFlash`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummonerSpellDocument {
    pub data: HashMap<String, SummonerSpell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionSummary {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub image: ImageRef,
}

/// `champion.json`: one summary entry per champion, keyed by champion id.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDocument {
    pub data: HashMap<String, ChampionSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionSpell {
    pub id: String,
    pub name: String,
    pub image: ImageRef,
}

/// One entry of `champion/{Name}.json`, carrying the per-champion skill
/// data used by the skill-order track.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDetail {
    pub id: String,
    pub name: String,
    pub spells: Vec<ChampionSpell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDetailDocument {
    pub data: HashMap<String, ChampionDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_document_shape() {
        let raw = r#"{
            "type": "item",
            "version": "15.13.1",
            "data": {
                "1001": {
                    "name": "Boots",
                    "plaintext": "Slightly increases Move Speed",
                    "into": ["3005"],
                    "image": { "full": "1001.png", "sprite": "item0.png" },
                    "gold": { "base": 300, "purchasable": true, "total": 300, "sell": 210 }
                }
            }
        }"#;

        let doc: ItemDocument = serde_json::from_str(raw).unwrap();
        let boots = &doc.data["1001"];
        assert_eq!(boots.name, "Boots");
        assert_eq!(boots.gold.total, 300);
        assert_eq!(boots.image.full, "1001.png");
    }

    #[test]
    fn parses_rune_styles_shape() {
        let raw = r#"[{
            "id": 8100,
            "key": "Domination",
            "icon": "perk-images/Styles/7200_Domination.png",
            "name": "Domination",
            "slots": [
                { "runes": [{
                    "id": 8112,
                    "key": "Electrocute",
                    "icon": "perk-images/Styles/Domination/Electrocute/Electrocute.png",
                    "name": "Electrocute",
                    "shortDesc": "Hitting a champion with 3 attacks deals bonus damage.",
                    "longDesc": "..."
                }]}
            ]
        }]"#;

        let styles: Vec<RuneStyle> = serde_json::from_str(raw).unwrap();
        assert_eq!(styles[0].slots[0].runes[0].id, 8112);
        assert!(
            styles[0].slots[0].runes[0]
                .short_desc
                .starts_with("Hitting")
        );
    }
}
