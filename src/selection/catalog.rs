use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;

/// A catalog entry with a stable identifier. Everything else on the
/// record is display payload the selection logic never looks at.
pub trait Record {
    fn id(&self) -> &str;
}

/// Closed filter vocabulary declared alongside a catalog.
pub trait FilterTag: Copy + Eq + fmt::Debug + 'static {
    /// Every tag in display order. The first one is the filter a freshly
    /// mounted view starts with.
    const VOCABULARY: &'static [Self];

    /// Key compared against a record's tag fields.
    fn key(&self) -> &'static str;

    /// Whether this tag is the sentinel that matches the whole catalog.
    fn is_all(&self) -> bool;
}

/// A record carrying one or more classification tags.
pub trait Tagged<T: FilterTag>: Record {
    /// True when any of the record's tag fields carries `tag`.
    fn has_tag(&self, tag: &T) -> bool;
}

/// Ordered, immutable sequence of records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<R> {
    records: Vec<R>,
    default_key: Option<String>,
}

impl<R: Record> Catalog<R> {
    pub fn new(records: Vec<R>) -> Result<Self, CatalogError> {
        validate_ids(&records)?;
        Ok(Self {
            records,
            default_key: None,
        })
    }

    /// Builds a catalog for exclusive-pick views. The default key must name
    /// one of the records, so `pick` on it can never come back empty.
    pub fn with_default(records: Vec<R>, default_key: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(records)?;
        if catalog.get(default_key).is_none() {
            return Err(CatalogError::MissingDefault(default_key.to_string()));
        }
        catalog.default_key = Some(default_key.to_string());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Number of records a filter button for `tag` would show.
    pub fn tag_count<T>(&self, tag: &T) -> usize
    where
        T: FilterTag,
        R: Tagged<T>,
    {
        if tag.is_all() {
            return self.records.len();
        }
        self.records.iter().filter(|record| record.has_tag(tag)).count()
    }

    /// Badge counts for every tag, in vocabulary order.
    pub fn tag_counts<T>(&self) -> Vec<(T, usize)>
    where
        T: FilterTag,
        R: Tagged<T>,
    {
        T::VOCABULARY
            .iter()
            .map(|tag| (*tag, self.tag_count(tag)))
            .collect()
    }
}

fn validate_ids<R: Record>(records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = record.id();
        if id.is_empty() {
            return Err(CatalogError::EmptyId(index));
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

impl<R> Catalog<R> {
    pub fn default_key(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
