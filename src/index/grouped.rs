use std::collections::HashMap;
use std::hash::Hash;

/// One-to-many lookup derived from a snapshot of entities.
///
/// The index is a cache: it does not follow changes to its source and has to be
/// rebuilt by the owner whenever the source changes.
#[derive(Debug, Clone)]
pub struct GroupedIndex<K, T> {
    buckets: HashMap<K, Vec<T>>,
}

impl<K, T> Default for GroupedIndex<K, T> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, T> GroupedIndex<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<I, F>(source: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
    {
        let mut index = Self::new();
        index.rebuild(source, key_fn);
        index
    }

    /// Drops the previous buckets and regroups `source`, keeping source order
    /// inside each bucket.
    pub fn rebuild<I, F>(&mut self, source: I, key_fn: F)
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
    {
        self.buckets.clear();
        for item in source {
            self.buckets
                .entry(key_fn(&item))
                .or_insert_with(Vec::new)
                .push(item);
        }
        tracing::debug!(buckets = self.buckets.len(), "grouped index rebuilt");
    }

    /// Empty slice when nothing references `key`.
    pub fn lookup(&self, key: &K) -> &[T] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
