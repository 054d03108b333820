use crate::model::{ElectronicItem, GroceryItem};
use crate::storage::{Entity, KeyedRepository, RepositoryResult, Stocked};

#[derive(Debug, Default)]
pub struct WarehouseManager {
    pub electronics: KeyedRepository<ElectronicItem>,
    pub groceries: KeyedRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Adds `amount` to the stored quantity. Failures are logged and handed back so
/// the caller can carry on.
pub fn increase_stock<T: Stocked>(
    repo: &mut KeyedRepository<T>,
    id: T::Id,
    amount: i32,
) -> RepositoryResult<i32> {
    let result = match repo.get_by_id(id) {
        Ok(item) => {
            let new_quantity = item.quantity().saturating_add(amount);
            repo.update_quantity(id, new_quantity).map(|()| new_quantity)
        }
        Err(e) => Err(e),
    };

    match &result {
        Ok(quantity) => tracing::info!(%id, quantity, "stock increased"),
        Err(e) => tracing::warn!(%id, amount, "failed to increase stock: {}", e),
    }
    result
}

/// Removes the item with `id`. Failures are logged and handed back.
pub fn remove_item<T: Entity>(repo: &mut KeyedRepository<T>, id: T::Id) -> RepositoryResult<T> {
    let result = repo.remove(id);
    match &result {
        Ok(_) => tracing::info!(%id, "item removed"),
        Err(e) => tracing::warn!(%id, "failed to remove item: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;
    use chrono::NaiveDate;

    fn seeded() -> WarehouseManager {
        let mut manager = WarehouseManager::new();
        manager
            .electronics
            .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))
            .unwrap();
        manager
            .electronics
            .add(ElectronicItem::new(2, "Smartphone", 25, "Samsung", 12))
            .unwrap();
        let expiry = NaiveDate::from_ymd_opt(2030, 1, 31).unwrap();
        manager
            .groceries
            .add(GroceryItem::new(1, "Rice", 50, expiry))
            .unwrap();
        manager
    }

    #[test]
    fn test_increase_stock() {
        let mut manager = seeded();

        assert_eq!(increase_stock(&mut manager.electronics, 1, 5), Ok(15));
        assert_eq!(manager.electronics.get_by_id(1).unwrap().quantity, 15);
        assert_eq!(manager.groceries.get_by_id(1).unwrap().quantity, 50);
    }

    #[test]
    fn test_increase_stock_missing_item() {
        let mut manager = seeded();
        assert!(matches!(
            increase_stock(&mut manager.groceries, 9, 5),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_increase_stock_below_zero_rejected() {
        let mut manager = seeded();
        assert_eq!(
            increase_stock(&mut manager.electronics, 2, -30),
            Err(RepositoryError::InvalidQuantity(-5))
        );
        assert_eq!(manager.electronics.get_by_id(2).unwrap().quantity, 25);
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut manager = seeded();
        let err = manager
            .electronics
            .add(ElectronicItem::new(2, "Tablet", 3, "Apple", 12))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateKey(_)));
        assert_eq!(manager.electronics.len(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut manager = seeded();

        let removed = remove_item(&mut manager.groceries, 1).unwrap();
        assert_eq!(removed.name, "Rice");
        assert!(manager.groceries.is_empty());

        assert!(matches!(
            remove_item(&mut manager.groceries, 1),
            Err(RepositoryError::NotFound(_))
        ));
    }
}
