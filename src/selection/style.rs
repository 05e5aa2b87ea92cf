use std::borrow::Borrow;

/// Per-category presentation values with a declared fallback for keys the
/// table does not list.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable<K, V> {
    entries: Vec<(K, V)>,
    fallback: V,
}

impl<K: PartialEq, V> StyleTable<K, V> {
    pub fn new(fallback: V) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Adds an entry. A repeated key replaces the earlier value.
    pub fn with(mut self, key: K, value: V) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
            .map(|(_, value)| value)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }
}
