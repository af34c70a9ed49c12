//! Filters, de-duplicates and orders completion items.
//!
//! Order is match class first (exact before prefix), then declaration order. There is no
//! alphabetical re-sort: the grammar's order is the display order.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::completion::Suggestion;
use crate::completion::matchers::{MatchClass, match_class};

#[derive(Debug)]
struct RankedItem {
    original_idx: usize,
    class: MatchClass,
    item: Suggestion,
}

fn cmp_ranked_items(a: &RankedItem, b: &RankedItem) -> Ordering {
    a.class
        .cmp(&b.class)
        .then_with(|| a.original_idx.cmp(&b.original_idx))
}

/// Drops duplicates (by `text`, first wins) and items not matching `query`, then sorts.
pub(crate) fn rank_by_query(query: &str, items: &mut Vec<Suggestion>) {
    let mut seen = HashSet::new();
    let mut ranked: Vec<RankedItem> = items
        .drain(..)
        .enumerate()
        .filter(|(_, item)| seen.insert(item.text.clone()))
        .filter_map(|(idx, item)| {
            let class = match_class(query, &item.display_label);
            (class != MatchClass::None).then_some(RankedItem {
                original_idx: idx,
                class,
                item,
            })
        })
        .collect();

    ranked.sort_by(cmp_ranked_items);
    *items = ranked.into_iter().map(|r| r.item).collect();
}

/// Applies `max_items`.
pub(crate) fn truncate(items: &mut Vec<Suggestion>, max_items: Option<usize>) {
    if let Some(max_items) = max_items {
        items.truncate(max_items);
    }
}
