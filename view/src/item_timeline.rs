//! Item purchase timeline, grouped per minute. When the backend supplied
//! no timeline events the view falls back to the final seven item slots.

use riftview_shared::{ItemEvent, traits::StaticAssets};
use riftview_stats::group_by_minute;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineItemView {
    pub item_id: u32,
    pub count: u32,
    pub icon_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineGroupView {
    pub minute: u32,
    pub items: Vec<TimelineItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemTimelineView {
    pub groups: Vec<TimelineGroupView>,
    /// Final item slots, present only when no timeline was available.
    pub final_items: Option<Vec<String>>,
}

pub async fn build_item_timeline<A>(
    events: &[ItemEvent],
    final_items: &[u32; 7],
    assets: &A,
) -> ItemTimelineView
where
    A: StaticAssets + ?Sized,
{
    if events.is_empty() {
        let mut urls = Vec::with_capacity(final_items.len());
        for item_id in final_items {
            if *item_id == 0 {
                urls.push(assets.empty_slot_url());
            } else {
                urls.push(assets.item_icon_url(*item_id).await);
            }
        }
        return ItemTimelineView {
            groups: Vec::new(),
            final_items: Some(urls),
        };
    }

    let mut groups = Vec::new();
    for group in group_by_minute(events) {
        let mut items = Vec::with_capacity(group.purchases.len());
        for purchase in group.purchases {
            items.push(TimelineItemView {
                item_id: purchase.item_id,
                count: purchase.count,
                icon_url: assets.item_icon_url(purchase.item_id).await,
            });
        }
        groups.push(TimelineGroupView {
            minute: group.minute,
            items,
        });
    }

    ItemTimelineView {
        groups,
        final_items: None,
    }
}
