//! Business logic services

pub mod inventory;

use crate::store::Store;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
}

impl Services {
    /// Create all services with the given store
    pub fn new(store: Store) -> Self {
        Self {
            inventory: inventory::InventoryService::new(store),
        }
    }
}
