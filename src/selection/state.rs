use super::catalog::FilterTag;

/// Holds the single active key of one view: a filter tag, a tab id or an
/// open accordion entry. At most one key is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    active: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K: PartialEq> Selection<K> {
    pub fn new(initial: Option<K>) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// Replaces the active key unconditionally. Keys outside the catalog
    /// are accepted and simply project to nothing.
    pub fn set_active(&mut self, key: Option<K>) {
        self.active = key;
    }

    pub fn select(&mut self, key: K) {
        self.set_active(Some(key));
    }

    /// Accordion semantics: pressing the open entry collapses it, pressing
    /// any other entry opens it and closes the previous one.
    pub fn toggle(&mut self, key: K) {
        if self.is_active(&key) {
            self.active = None;
        } else {
            self.active = Some(key);
        }
    }
}

impl<T: FilterTag> Selection<T> {
    /// Starts on the first tag of the vocabulary.
    pub fn first_tag() -> Self {
        Self::new(T::VOCABULARY.first().copied())
    }
}

impl Selection<String> {
    pub fn active_str(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
