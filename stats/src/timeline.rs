//! Item-purchase timeline grouping.
//!
//! Purchases are bucketed by minute; within a minute, repeated purchases
//! of the same item collapse into one entry with a count. The result is
//! ordered by minute ascending and is insensitive to the input order of
//! same-minute events.

use std::collections::BTreeMap;

use riftview_shared::ItemEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountedPurchase {
    pub item_id: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinuteGroup {
    pub minute: u32,
    pub purchases: Vec<CountedPurchase>,
}

pub fn group_by_minute(events: &[ItemEvent]) -> Vec<MinuteGroup> {
    let mut minutes: BTreeMap<u32, BTreeMap<u32, u32>> = BTreeMap::new();

    for event in events {
        *minutes
            .entry(event.minute)
            .or_default()
            .entry(event.item_id)
            .or_insert(0) += 1;
    }

    minutes
        .into_iter()
        .map(|(minute, items)| MinuteGroup {
            minute,
            purchases: items
                .into_iter()
                .map(|(item_id, count)| CountedPurchase { item_id, count })
                .collect(),
        })
        .collect()
}
