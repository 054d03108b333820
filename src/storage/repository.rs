use super::record::Entity;

/// Ordered, non-unique collection of entities.
///
/// Ids are not checked on insert; lookups and removals act on the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        tracing::debug!(id = %item.id(), "repository add");
        self.items.push(item);
    }

    /// Independent copy of the current contents, in insertion order.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn get_by_id(&self, id: T::Id) -> Option<&T> {
        self.find(|item| item.id() == id)
    }

    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().find(|&item| predicate(item))
    }

    pub fn remove_by_id(&mut self, id: T::Id) -> bool {
        self.remove(|item| item.id() == id)
    }

    pub fn remove<F>(&mut self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        if let Some(pos) = self.items.iter().position(|item| predicate(item)) {
            let removed = self.items.remove(pos);
            tracing::debug!(id = %removed.id(), "repository remove");
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
