use std::collections::HashMap;

use super::catalog::{Catalog, FilterTag, Record, Tagged};

/// Records carrying `tag`, in their original relative order. The "all"
/// sentinel keeps every record.
pub fn filter<'a, R, T>(catalog: &'a Catalog<R>, tag: &T) -> Vec<&'a R>
where
    R: Tagged<T>,
    T: FilterTag,
{
    filter_records(catalog, tag)
}

/// Same as [`filter`] over any sequence of records, so an already filtered
/// result can be narrowed again.
pub fn filter_records<'a, R, T, I>(records: I, tag: &T) -> Vec<&'a R>
where
    R: Tagged<T> + 'a,
    T: FilterTag,
    I: IntoIterator<Item = &'a R>,
{
    if tag.is_all() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| record.has_tag(tag))
        .collect()
}

/// The record shown by an exclusive-choice view. `None` only happens for a
/// key the catalog was never validated against.
pub fn pick<'a, R: Record>(catalog: &'a Catalog<R>, key: &str) -> Option<&'a R> {
    catalog.get(key)
}

#[derive(Debug, PartialEq)]
pub struct Expansion<'a, R> {
    pub record: &'a R,
    pub expanded: bool,
}

/// Every record in order, flagged with whether its secondary payload is
/// revealed. Nothing is ever removed.
pub fn expansions<'a, R: Record>(catalog: &'a Catalog<R>, active: Option<&str>) -> Vec<Expansion<'a, R>> {
    catalog
        .iter()
        .map(|record| Expansion {
            record,
            expanded: active == Some(record.id()),
        })
        .collect()
}

pub fn expansion_map<'a, R: Record>(catalog: &'a Catalog<R>, active: Option<&str>) -> HashMap<&'a str, bool> {
    catalog
        .iter()
        .map(|record| (record.id(), active == Some(record.id())))
        .collect()
}
