/// One synthesized (or keyframe) document of an interpolated series.
#[derive(Clone, Debug)]
pub struct CollectionEntry<S> {
    /// Sequence number.
    pub number: u64,
    /// Series filename (`prefix + number + suffix`).
    pub filename: String,
    /// Develop settings for this position.
    pub store: S,
    /// `true` for entries backed by a registered control point.
    pub is_control_point: bool,
}

/// Result of an interpolation: one entry per integer sequence number between the first and the
/// last control point, inclusive, in ascending order.
#[derive(Clone, Debug)]
pub struct Collection<S> {
    entries: Vec<CollectionEntry<S>>,
}

impl<S> Default for Collection<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> Collection<S> {
    pub(crate) fn from_sorted(entries: Vec<CollectionEntry<S>>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].number < w[1].number));
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` before the first successful interpolation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Settings stored under `filename`.
    pub fn get(&self, filename: &str) -> Option<&S> {
        self.entries
            .iter()
            .find(|e| e.filename == filename)
            .map(|e| &e.store)
    }

    /// Entry at sequence number `number`.
    pub fn entry(&self, number: u64) -> Option<&CollectionEntry<S>> {
        self.entries
            .binary_search_by_key(&number, |e| e.number)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Entries in ascending sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry<S>> {
        self.entries.iter()
    }

    /// Filenames in ascending sequence order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.filename.as_str())
    }

    /// Take ownership of the entries.
    pub fn into_entries(self) -> Vec<CollectionEntry<S>> {
        self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a, S> IntoIterator for &'a Collection<S> {
    type Item = &'a CollectionEntry<S>;
    type IntoIter = std::slice::Iter<'a, CollectionEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interpolate/collection.rs"]
mod tests;
