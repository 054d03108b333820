use super::error::{RepositoryError, RepositoryResult};
use super::record::{Entity, Stocked};

/// Ordered collection that rejects a second entity with an id already present.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRepository<T> {
    items: Vec<T>,
}

impl<T> Default for KeyedRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> KeyedRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.contains(id) {
            return Err(RepositoryError::DuplicateKey(format!(
                "item with id {} already exists",
                id
            )));
        }
        tracing::debug!(%id, "keyed repository add");
        self.items.push(item);
        Ok(())
    }

    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn get_by_id(&self, id: T::Id) -> RepositoryResult<&T> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().find(|&item| predicate(item))
    }

    /// Removes the entity with `id` and hands it back.
    pub fn remove(&mut self, id: T::Id) -> RepositoryResult<T> {
        let pos = self.position(id).ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, "keyed repository remove");
        Ok(self.items.remove(pos))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
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

    fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Stocked> KeyedRepository<T> {
    /// Quantity is validated before the id is looked up.
    pub fn update_quantity(&mut self, id: T::Id, new_quantity: i32) -> RepositoryResult<()> {
        if new_quantity < 0 {
            return Err(RepositoryError::InvalidQuantity(new_quantity));
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, from = item.quantity(), to = new_quantity, "quantity update");
        item.set_quantity(new_quantity);
        Ok(())
    }
}

fn not_found<I: std::fmt::Display>(id: I) -> RepositoryError {
    RepositoryError::NotFound(format!("item with id {} does not exist", id))
}
