//! Property tests for the selection model.

use super::catalog::fixtures::{Item, Kind};
use super::*;
use proptest::prelude::*;

const TAG_KEYS: [&str; 3] = ["website", "mobile", "fullstack"];

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::VOCABULARY.to_vec())
}

/// Catalog of up to 12 records with unique ids and random tag subsets.
fn catalog_strategy() -> impl Strategy<Value = Catalog<Item>> {
    prop::collection::vec(prop::sample::subsequence(TAG_KEYS.to_vec(), 0..=3), 0..12).prop_map(
        |tag_sets| {
            let records = tag_sets
                .into_iter()
                .enumerate()
                .map(|(index, tags)| Item {
                    id: format!("item-{}", index),
                    tags,
                })
                .collect();
            Catalog::new(records).unwrap()
        },
    )
}

proptest! {
    /// filter keeps only records carrying the tag, in catalog order
    #[test]
    fn prop_filter_keeps_matching_records_in_order(
        catalog in catalog_strategy(),
        tag in kind_strategy()
    ) {
        let visible = filter(&catalog, &tag);

        if tag.is_all() {
            prop_assert_eq!(visible, catalog.iter().collect::<Vec<_>>());
        } else {
            prop_assert!(visible.iter().all(|record| record.has_tag(&tag)));
            let expected: Vec<&Item> = catalog.iter().filter(|r| r.tags.contains(&tag.key())).collect();
            prop_assert_eq!(visible, expected);
        }
    }

    /// filtering an already filtered result changes nothing
    #[test]
    fn prop_filter_is_idempotent(
        catalog in catalog_strategy(),
        tag in kind_strategy()
    ) {
        let once = filter(&catalog, &tag);
        let twice = filter_records(once.iter().copied(), &tag);
        prop_assert_eq!(once, twice);
    }

    /// badge counts equal the number of visible records
    #[test]
    fn prop_tag_count_matches_filter_len(
        catalog in catalog_strategy(),
        tag in kind_strategy()
    ) {
        prop_assert_eq!(catalog.tag_count(&tag), filter(&catalog, &tag).len());
    }

    /// pressing the same entry twice collapses it again
    #[test]
    fn prop_double_toggle_collapses(id in 0usize..32) {
        let mut selection = Selection::default();
        selection.toggle(id);
        selection.toggle(id);
        prop_assert_eq!(selection.active(), None);
    }

    /// no toggle sequence ever opens more than one entry
    #[test]
    fn prop_at_most_one_entry_expanded(
        catalog in catalog_strategy(),
        presses in prop::collection::vec(0usize..14, 0..40)
    ) {
        let mut selection: Selection<String> = Selection::default();
        for press in presses {
            selection.toggle(format!("item-{}", press));
            let open = expansion_map(&catalog, selection.active_str())
                .values()
                .filter(|expanded| **expanded)
                .count();
            prop_assert!(open <= 1);
        }
    }

    /// a catalog built with a default always picks a record for it
    #[test]
    fn prop_pick_default_is_defined(
        catalog in catalog_strategy(),
        seed in any::<prop::sample::Index>()
    ) {
        prop_assume!(!catalog.is_empty());
        let default_id = catalog.records()[seed.index(catalog.len())].id.clone();
        let exclusive = Catalog::with_default(catalog.records().to_vec(), &default_id).unwrap();
        let key = exclusive.default_key().unwrap();
        prop_assert_eq!(pick(&exclusive, key).map(|r| r.id.as_str()), Some(default_id.as_str()));
    }
}
