// In-memory contract store
//
// Contracts are stored whole; an update replaces the previous document.
// Concurrent edits to the same draft resolve last-write-wins. The status
// check runs under the write lock, so a stale draft can never overwrite a
// submitted or cancelled contract.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::contracts::models::Contract;

/// Page size used when a listing does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Repository keeping contracts in process memory
#[derive(Debug, Default)]
pub struct InMemoryContractRepository {
    contracts: RwLock<HashMap<Uuid, Contract>>,
}

impl InMemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Contract, Uuid> for InMemoryContractRepository {
    async fn create(&self, entity: Contract) -> Result<Contract> {
        let mut contracts = self.contracts.write().await;

        if contracts.contains_key(&entity.id) {
            return Err(AppError::conflict(format!(
                "Contract {} already exists",
                entity.id
            )));
        }

        contracts.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contract>> {
        Ok(self.contracts.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, entity: Contract) -> Result<Contract> {
        let mut contracts = self.contracts.write().await;

        match contracts.get_mut(&id) {
            Some(existing) if !existing.status.allows(entity.status) => {
                Err(AppError::conflict(format!(
                    "Contract {} is {} and cannot become {}",
                    id, existing.status, entity.status
                )))
            }
            Some(existing) => {
                *existing = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(format!("Contract {}", id))),
        }
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Contract>> {
        let contracts = self.contracts.read().await;

        let mut all: Vec<&Contract> = contracts.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        Ok(all
            .into_iter()
            .skip(offset.unwrap_or(0) as usize)
            .take(limit.unwrap_or(DEFAULT_PAGE_SIZE) as usize)
            .cloned()
            .collect())
    }
}
