//! Juice repository.
//!
//! Reads clone matching records out of the store so the lock is released
//! before the caller serializes anything.

use juice_bar_core::{Juice, JuiceId, JuiceUpdate, NewJuice};

use super::{RepositoryError, Store};
use crate::events::CatalogEvent;

/// Repository for catalog operations.
pub struct JuiceRepository<'a> {
    store: &'a Store,
}

impl<'a> JuiceRepository<'a> {
    /// Create a new juice repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All juices in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<Juice>, RepositoryError> {
        Ok(self.store.read()?.juices.clone())
    }

    /// Get a juice by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::JuiceNotFound` if no juice has this id.
    pub fn get(&self, id: &JuiceId) -> Result<Juice, RepositoryError> {
        self.find(id)?
            .ok_or_else(|| RepositoryError::JuiceNotFound(id.clone()))
    }

    /// Get a juice by id, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn find(&self, id: &JuiceId) -> Result<Option<Juice>, RepositoryError> {
        let records = self.store.read()?;
        Ok(records.juices.iter().find(|juice| &juice.id == id).cloned())
    }

    /// Juices whose category equals `category` exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn by_category(&self, category: &str) -> Result<Vec<Juice>, RepositoryError> {
        let records = self.store.read()?;
        Ok(records
            .juices
            .iter()
            .filter(|juice| juice.category == category)
            .cloned()
            .collect())
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// An empty query returns the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn search(&self, query: &str) -> Result<Vec<Juice>, RepositoryError> {
        let needle = query.to_lowercase();
        let records = self.store.read()?;
        Ok(records
            .juices
            .iter()
            .filter(|juice| juice.matches_lowercase(&needle))
            .cloned()
            .collect())
    }

    /// Add a juice to the catalog and announce it to subscribers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn create(&self, input: NewJuice) -> Result<Juice, RepositoryError> {
        let juice = {
            let mut records = self.store.write()?;
            let id = records.allocate_juice_id();
            let juice = input.into_juice(id);
            records.juices.push(juice.clone());
            juice
        };

        tracing::info!(juice_id = %juice.id, name = %juice.name, "Juice created");
        self.store.publish(CatalogEvent::JuiceAdded(juice.clone()));
        Ok(juice)
    }

    /// Merge `update` over an existing juice.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::JuiceNotFound` if no juice has this id.
    pub fn update(&self, id: &JuiceId, update: JuiceUpdate) -> Result<Juice, RepositoryError> {
        let mut records = self.store.write()?;
        let juice = records
            .juices
            .iter_mut()
            .find(|juice| &juice.id == id)
            .ok_or_else(|| RepositoryError::JuiceNotFound(id.clone()))?;

        update.apply_to(juice);
        tracing::info!(juice_id = %id, "Juice updated");
        Ok(juice.clone())
    }

    /// Remove a juice. Orders referencing it keep the dangling id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::JuiceNotFound` if no juice has this id,
    /// including when it was already deleted.
    pub fn delete(&self, id: &JuiceId) -> Result<bool, RepositoryError> {
        let mut records = self.store.write()?;
        let position = records
            .juices
            .iter()
            .position(|juice| &juice.id == id)
            .ok_or_else(|| RepositoryError::JuiceNotFound(id.clone()))?;

        records.juices.remove(position);
        tracing::info!(juice_id = %id, "Juice deleted");
        Ok(true)
    }
}
