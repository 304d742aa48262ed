use serde::Serialize;

use super::models::ItemRecord;

/// A logged item together with its position in the log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedItem {
    pub index: usize,
    #[serde(flatten)]
    pub record: ItemRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<IndexedItem>,
    pub total_items: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub show_all: bool,
}

/// Newest-first view over `items`; page 0 holds the most recent entries.
///
/// Pages past the end are clamped to the last page. With `show_all` the whole
/// log comes back as a single page. An empty log has no pages at all.
pub fn paginate(items: &[ItemRecord], page: usize, per_page: usize, show_all: bool) -> ItemsPage {
    let total = items.len();

    if show_all {
        return ItemsPage {
            items: newest_first(items, 0, total),
            total_items: total,
            current_page: 0,
            items_per_page: total,
            total_pages: usize::from(total > 0),
            show_all: true,
        };
    }

    let per_page = per_page.max(1);
    let total_pages = total.div_ceil(per_page);
    let page = page.min(total_pages.saturating_sub(1));

    let end = total.saturating_sub(page * per_page);
    let start = end.saturating_sub(per_page);

    ItemsPage {
        items: newest_first(items, start, end),
        total_items: total,
        current_page: page,
        items_per_page: per_page,
        total_pages,
        show_all: false,
    }
}

fn newest_first(items: &[ItemRecord], start: usize, end: usize) -> Vec<IndexedItem> {
    items[start..end]
        .iter()
        .enumerate()
        .rev()
        .map(|(offset, record)| IndexedItem {
            index: start + offset,
            record: record.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn log(len: usize) -> Vec<ItemRecord> {
        (0..len)
            .map(|i| ItemRecord {
                name: format!("Item {i}"),
                original_name: format!("Item {i}"),
                quality: "Unique".to_string(),
                run_index: 1,
                time: Utc::now(),
                affixes: String::new(),
                is_ethereal: false,
                is_identified: true,
                item_level: 0,
            })
            .collect()
    }

    #[test]
    fn first_page_is_newest() {
        let items = log(5);
        let page = paginate(&items, 0, 2, false);

        let indices: Vec<usize> = page.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![4, 3]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].record.name, "Item 4");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(7, 3)]
    #[case(10, 10)]
    #[case(23, 10)]
    fn pages_partition_the_reversed_log(#[case] len: usize, #[case] per_page: usize) {
        let items = log(len);
        let first = paginate(&items, 0, per_page, false);

        let collected: Vec<usize> = (0..first.total_pages)
            .flat_map(|page| paginate(&items, page, per_page, false).items)
            .map(|item| item.index)
            .collect();

        let expected: Vec<usize> = (0..len).rev().collect();
        assert_eq!(collected, expected);
        assert_eq!(paginate(&items, 0, per_page, true).items.len(), len);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let items = log(5);
        let page = paginate(&items, 99, 2, false);

        assert_eq!(page.current_page, 2);
        let indices: Vec<usize> = page.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn empty_log_has_no_pages() {
        let page = paginate(&[], 3, 50, false);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 0);

        assert_eq!(paginate(&[], 0, 50, true).total_pages, 0);
    }

    #[test]
    fn serialized_item_keeps_index_beside_fields() {
        let items = log(1);
        let page = paginate(&items, 0, 10, false);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"][0]["index"], 0);
        assert_eq!(json["items"][0]["name"], "Item 0");
        assert_eq!(json["totalItems"], 1);
    }
}
