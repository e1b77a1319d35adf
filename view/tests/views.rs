use async_trait::async_trait;
use riftview_shared::{
    ItemEvent, Lane, LeagueEntry, MatchDetail, Participant, PingCounts, PlayedMatch, SkillUp,
    Summoner,
    lol_match::ParticipantTimeline,
    traits::{
        ChampionAbility, ChampionSkillSource, IconSource, LocalizedNames, SourceError,
        StaticAssets,
    },
};
use riftview_stats::Kda;
use riftview_view::{
    build_item_timeline, build_match_cards, build_ping_stats, build_profile, build_scoreboard,
    build_skill_order,
};
use std::collections::HashMap;

/// Asset source answering every lookup with a deterministic URL.
struct StubAssets;

#[async_trait]
impl IconSource for StubAssets {
    async fn champion_icon_url(&self, champion_name: &str) -> String {
        format!("icon://champion/{}", champion_name)
    }

    async fn profile_icon_url(&self, icon_id: u32) -> String {
        format!("icon://profile/{}", icon_id)
    }

    async fn item_icon_url(&self, item_id: u32) -> String {
        format!("icon://item/{}", item_id)
    }

    async fn ability_icon_url(&self, image_file: &str) -> String {
        format!("icon://ability/{}", image_file)
    }

    async fn summoner_spell_icon_url(&self, spell_id: u32) -> Result<String, SourceError> {
        Ok(format!("icon://spell/{}", spell_id))
    }

    async fn rune_icon_url(&self, rune_id: u32) -> Result<String, SourceError> {
        Ok(format!("icon://rune/{}", rune_id))
    }

    async fn rune_style_icon_url(&self, style_id: u32) -> Result<String, SourceError> {
        Ok(format!("icon://style/{}", style_id))
    }

    fn rank_emblem_url(&self, tier: &str) -> String {
        format!("icon://emblem/{}", tier.to_lowercase())
    }

    fn empty_slot_url(&self) -> String {
        "icon://item/empty".to_string()
    }
}

#[async_trait]
impl LocalizedNames for StubAssets {
    async fn champion_display_name(
        &self,
        champion: &str,
        _language: &str,
    ) -> Result<String, SourceError> {
        Ok(format!("{} (localized)", champion))
    }
}

#[async_trait]
impl ChampionSkillSource for StubAssets {
    async fn champion_abilities(
        &self,
        champion: &str,
        _language: &str,
    ) -> Result<Vec<ChampionAbility>, SourceError> {
        Ok(vec![
            ChampionAbility {
                name: format!("{} Q", champion),
                image_file: format!("{}Q.png", champion),
            },
            ChampionAbility {
                name: format!("{} W", champion),
                image_file: format!("{}W.png", champion),
            },
        ])
    }
}

impl StaticAssets for StubAssets {}

/// Asset source whose fallible lookups all fail, as when the static data
/// documents cannot be loaded.
struct DegradedAssets;

#[async_trait]
impl IconSource for DegradedAssets {
    async fn champion_icon_url(&self, champion_name: &str) -> String {
        format!("icon://champion/{}", champion_name)
    }

    async fn profile_icon_url(&self, icon_id: u32) -> String {
        format!("icon://profile/{}", icon_id)
    }

    async fn item_icon_url(&self, item_id: u32) -> String {
        format!("icon://item/{}", item_id)
    }

    async fn ability_icon_url(&self, image_file: &str) -> String {
        format!("icon://ability/{}", image_file)
    }

    async fn summoner_spell_icon_url(&self, _spell_id: u32) -> Result<String, SourceError> {
        Err("spell document unavailable".into())
    }

    async fn rune_icon_url(&self, _rune_id: u32) -> Result<String, SourceError> {
        Err("rune document unavailable".into())
    }

    async fn rune_style_icon_url(&self, _style_id: u32) -> Result<String, SourceError> {
        Err("rune document unavailable".into())
    }

    fn rank_emblem_url(&self, tier: &str) -> String {
        format!("icon://emblem/{}", tier.to_lowercase())
    }

    fn empty_slot_url(&self) -> String {
        "icon://item/empty".to_string()
    }
}

#[async_trait]
impl LocalizedNames for DegradedAssets {
    async fn champion_display_name(
        &self,
        _champion: &str,
        _language: &str,
    ) -> Result<String, SourceError> {
        Err("champion document unavailable".into())
    }
}

#[async_trait]
impl ChampionSkillSource for DegradedAssets {
    async fn champion_abilities(
        &self,
        _champion: &str,
        _language: &str,
    ) -> Result<Vec<ChampionAbility>, SourceError> {
        Err("champion document unavailable".into())
    }
}

impl StaticAssets for DegradedAssets {}

fn participant(puuid: &str, champion: &str, team_id: u16, win: bool) -> Participant {
    Participant {
        puuid: puuid.to_string(),
        riot_id_game_name: "Tester".to_string(),
        riot_id_tagline: "EUW".to_string(),
        champion_name: champion.to_string(),
        team_id,
        win,
        kills: 5,
        deaths: 0,
        assists: 3,
        champ_level: 16,
        total_cs: 190,
        gold_earned: 12_000,
        damage_dealt: 20_000,
        damage_taken: 13_000,
        vision_score: 22,
        wards_placed: 9,
        wards_killed: 3,
        items: [1055, 3020, 0, 0, 0, 0, 3340],
        summoner_spell_ids: [4, 14],
        keystone_id: 8112,
        primary_style_id: 8100,
        sub_style_id: 8300,
        team_position: "MIDDLE".to_string(),
        individual_position: String::new(),
        pings: PingCounts::default(),
    }
}

fn played(champion: &str, win: bool) -> PlayedMatch {
    PlayedMatch {
        match_id: format!("EUW1_{}", champion),
        queue_id: 420,
        game_creation: 0,
        game_duration: 1800,
        me: participant("p1", champion, 100, win),
    }
}

fn summoner() -> Summoner {
    Summoner {
        puuid: "p1".to_string(),
        game_name: "Tester".to_string(),
        tag_line: "EUW".to_string(),
        summoner_level: 245,
        profile_icon_id: 4321,
        leagues: vec![LeagueEntry {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            league_points: 54,
            wins: 40,
            losses: 38,
        }],
    }
}

#[tokio::test]
async fn profile_aggregates_champions_and_positions() {
    let matches = vec![played("Ahri", true), played("Ahri", true), played("Zed", false)];

    let profile = build_profile(&summoner(), &matches, &StubAssets, "en_US").await;

    assert_eq!(profile.header.profile_icon_url, "icon://profile/4321");
    assert_eq!(profile.header.ranked[0].emblem_url, "icon://emblem/gold");

    let ahri = &profile.champions[0];
    assert_eq!(ahri.champion, "Ahri");
    assert_eq!(ahri.name, "Ahri (localized)");
    assert_eq!(ahri.games, 2);
    assert_eq!(ahri.win_rate, 100);
    assert_eq!(ahri.lanes, vec!["Mid"]);

    let zed = &profile.champions[1];
    assert_eq!(zed.games, 1);
    assert_eq!(zed.win_rate, 0);

    assert_eq!(profile.positions[0].lane, "Mid");
    assert_eq!(profile.positions[0].games, 3);
}

#[tokio::test]
async fn match_cards_carry_item_and_spell_icons() {
    let cards = build_match_cards(&[played("Ahri", true)], &StubAssets, "en_US").await;

    let card = &cards[0];
    assert_eq!(card.queue, "Ranked Solo/Duo");
    assert_eq!(card.result, "Victory");
    assert_eq!(card.duration, "30:00");
    assert_eq!(card.kda, Kda::Perfect);
    assert_eq!(card.item_urls[0], "icon://item/1055");
    assert_eq!(card.item_urls[2], "icon://item/empty");
    assert_eq!(card.spell_urls, vec!["icon://spell/4", "icon://spell/14"]);
    assert_eq!(card.keystone_url, "icon://rune/8112");
}

#[tokio::test]
async fn failed_lookups_degrade_to_placeholders() {
    let cards = build_match_cards(&[played("Ahri", true)], &DegradedAssets, "en_US").await;

    let card = &cards[0];
    // Raw identifier instead of a localized name, blank URLs for the
    // fallible lookups, and the card still renders.
    assert_eq!(card.name, "Ahri");
    assert_eq!(card.spell_urls, vec!["", ""]);
    assert_eq!(card.keystone_url, "");
    assert_eq!(card.sub_style_url, "");
    assert_eq!(card.champion_icon_url, "icon://champion/Ahri");
}

#[tokio::test]
async fn scoreboard_groups_participants_by_team() {
    let detail = MatchDetail {
        match_id: "EUW1_100".to_string(),
        queue_id: 420,
        game_creation: 0,
        game_duration: 1800,
        participants: vec![
            participant("p1", "Ahri", 100, true),
            participant("p2", "Zed", 200, false),
            participant("p3", "Garen", 100, true),
        ],
        timelines: HashMap::new(),
        matchup_win_rates: HashMap::new(),
    };

    let scoreboard = build_scoreboard(&detail, &StubAssets, "en_US").await;

    assert_eq!(scoreboard.teams.len(), 2);
    let blue = scoreboard
        .teams
        .iter()
        .find(|team| team.team_id == 100)
        .unwrap();
    assert!(blue.win);
    assert_eq!(blue.players.len(), 2);
    assert_eq!(blue.players[0].name, "Ahri (localized)");
    assert_eq!(blue.players[0].item_urls[1], "icon://item/3020");
    assert_eq!(blue.players[0].spell_urls[0], "icon://spell/4");
}

#[tokio::test]
async fn scoreboard_survives_degraded_assets() {
    let detail = MatchDetail {
        match_id: "EUW1_100".to_string(),
        queue_id: 420,
        game_creation: 0,
        game_duration: 1800,
        participants: vec![participant("p1", "Ahri", 100, true)],
        timelines: HashMap::new(),
        matchup_win_rates: HashMap::new(),
    };

    let scoreboard = build_scoreboard(&detail, &DegradedAssets, "en_US").await;

    let row = &scoreboard.teams[0].players[0];
    assert_eq!(row.name, "Ahri");
    assert_eq!(row.keystone_url, "");
    assert_eq!(row.spell_urls, vec!["", ""]);
}

#[tokio::test]
async fn item_timeline_groups_and_counts() {
    let events = vec![
        ItemEvent {
            minute: 10,
            item_id: 1052,
        },
        ItemEvent {
            minute: 10,
            item_id: 1052,
        },
        ItemEvent {
            minute: 0,
            item_id: 1055,
        },
    ];
    let final_items = [1055, 3020, 0, 0, 0, 0, 3340];

    let timeline = build_item_timeline(&events, &final_items, &StubAssets).await;

    assert!(timeline.final_items.is_none());
    assert_eq!(timeline.groups[0].minute, 0);
    assert_eq!(timeline.groups[1].items[0].count, 2);
    assert_eq!(timeline.groups[1].items[0].icon_url, "icon://item/1052");
}

#[tokio::test]
async fn item_timeline_falls_back_to_final_slots() {
    let final_items = [1055, 3020, 0, 0, 0, 0, 3340];

    let timeline = build_item_timeline(&[], &final_items, &StubAssets).await;

    assert!(timeline.groups.is_empty());
    let slots = timeline.final_items.unwrap();
    assert_eq!(slots.len(), 7);
    assert_eq!(slots[0], "icon://item/1055");
    assert_eq!(slots[3], "icon://item/empty");
}

#[tokio::test]
async fn skill_order_maps_slots_to_keys() {
    let skill_ups: Vec<SkillUp> = [1u8, 2, 3, 1, 1, 4]
        .iter()
        .map(|slot| SkillUp { skill_slot: *slot })
        .collect();
    let abilities = vec![
        ChampionAbility {
            name: "Orb of Deception".to_string(),
            image_file: "AhriQ.png".to_string(),
        },
        ChampionAbility {
            name: "Fox-Fire".to_string(),
            image_file: "AhriW.png".to_string(),
        },
        ChampionAbility {
            name: "Charm".to_string(),
            image_file: "AhriE.png".to_string(),
        },
        ChampionAbility {
            name: "Spirit Rush".to_string(),
            image_file: "AhriR.png".to_string(),
        },
    ];

    let view = build_skill_order("Ahri", &skill_ups, Some(abilities.as_slice()), &StubAssets).await;

    assert_eq!(view.abilities.len(), 4);
    assert_eq!(view.abilities[0].key, 'Q');
    assert_eq!(view.abilities[0].icon_url, "icon://ability/AhriQ.png");

    let keys: String = view.order.iter().map(|s| s.key).collect();
    assert_eq!(keys, "QWEQQR");
    assert_eq!(view.order[5].level, 6);
}

#[tokio::test]
async fn skill_order_renders_without_ability_data() {
    let skill_ups = vec![SkillUp { skill_slot: 1 }];

    let view = build_skill_order("Ahri", &skill_ups, None, &StubAssets).await;

    assert!(view.abilities.is_empty());
    assert_eq!(view.order[0].key, 'Q');
}

#[test]
fn ping_stats_sum_and_label() {
    let pings = PingCounts {
        on_my_way_pings: 7,
        enemy_missing_pings: 2,
        ..Default::default()
    };

    let view = build_ping_stats(&pings);

    assert_eq!(view.total, 9);
    let omw = view
        .entries
        .iter()
        .find(|entry| entry.label == "On My Way")
        .unwrap();
    assert_eq!(omw.count, 7);
}

#[test]
fn timeline_participant_default_is_empty() {
    let timeline = ParticipantTimeline::default();
    assert!(timeline.item_events.is_empty());
    assert!(timeline.skill_ups.is_empty());
}

#[test]
fn lane_of_participant_flows_into_views() {
    let p = participant("p1", "Ahri", 100, true);
    assert_eq!(p.lane(), Lane::Mid);
}
