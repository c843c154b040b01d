// Business logic for installment contracts
//
// Implements:
// - Draft creation with an initial build
// - Field changes routed through ContractForm
// - Explicit schedule rebuilds
// - Submit / cancel lifecycle transitions

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ScheduleConfig;
use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::contracts::models::{Action, Contract, ContractField};
use crate::modules::installments::models::ContractTerms;

/// Shared handle over the contract store
pub type ContractStore = Arc<dyn Repository<Contract, Uuid>>;

/// Service for contract operations
#[derive(Clone)]
pub struct ContractService {
    repository: ContractStore,
    limits: ScheduleConfig,
}

impl ContractService {
    pub fn new(repository: ContractStore, limits: ScheduleConfig) -> Self {
        Self { repository, limits }
    }

    /// Create a draft contract
    ///
    /// Incomplete terms are accepted; the draft then has an empty schedule
    /// until the terms validate.
    pub async fn create(&self, customer: Option<String>, terms: ContractTerms) -> Result<Contract> {
        let contract = Contract::new(customer, terms, &self.limits)?;
        let contract = self.repository.create(contract).await?;

        info!(
            contract_id = %contract.id,
            rows = contract.schedule.len(),
            "Contract draft created"
        );

        Ok(contract)
    }

    pub async fn get(&self, id: Uuid) -> Result<Contract> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Contract {}", id)))
    }

    pub async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Contract>> {
        self.repository.list(limit, offset).await
    }

    /// Apply one field change to a draft
    pub async fn change_field(&self, id: Uuid, field: ContractField, value: Value) -> Result<Action> {
        let mut contract = self.get(id).await?;
        contract.ensure_editable()?;

        let mut form = contract.form(&self.limits);
        let action = form.on_field_change(field, &value)?;
        contract.apply_form(form);
        self.repository.update(id, contract).await?;

        if let Some(warning) = action.warning() {
            warn!(contract_id = %id, field = field.as_str(), warning, "Contract terms look off");
        }

        Ok(action)
    }

    /// Rebuild a draft's schedule from its stored terms
    ///
    /// Validation failures are returned and the stored schedule is kept.
    pub async fn rebuild(&self, id: Uuid) -> Result<Contract> {
        let mut contract = self.get(id).await?;
        contract.ensure_editable()?;

        let mut form = contract.form(&self.limits);
        form.build()?;
        contract.apply_form(form);
        let contract = self.repository.update(id, contract).await?;

        info!(
            contract_id = %id,
            rows = contract.schedule.len(),
            "Contract schedule rebuilt"
        );

        Ok(contract)
    }

    /// Rebuild and freeze a draft
    pub async fn submit(&self, id: Uuid) -> Result<Contract> {
        let mut contract = self.get(id).await?;
        contract.ensure_editable()?;

        let mut form = contract.form(&self.limits);
        form.build()?;
        contract.apply_form(form);
        contract.submit()?;
        let contract = self.repository.update(id, contract).await?;

        info!(contract_id = %id, "Contract submitted");

        Ok(contract)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Contract> {
        let mut contract = self.get(id).await?;
        let previous = contract.status;
        contract.cancel()?;
        let contract = self.repository.update(id, contract).await?;

        info!(contract_id = %id, previous_status = %previous, "Contract cancelled");

        Ok(contract)
    }
}
