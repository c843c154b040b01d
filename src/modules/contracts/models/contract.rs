use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ScheduleConfig;
use crate::core::{AppError, Result};
use crate::modules::contracts::services::ContractForm;
use crate::modules::installments::models::{ContractTerms, FinancialSummary, ScheduleRow};

/// Installment contract with its derived figures and schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: Uuid,
    pub customer: Option<String>,
    pub terms: ContractTerms,
    pub summary: FinancialSummary,
    pub schedule: Vec<ScheduleRow>,
    pub status: ContractStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Contract lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Editable; schedule follows every change
    Draft,
    /// Frozen schedule
    Submitted,
    Cancelled,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a contract stored in this state may be overwritten by one in `next`
    ///
    /// Drafts accept anything, submitted contracts only a cancellation,
    /// cancelled contracts nothing.
    pub fn allows(&self, next: ContractStatus) -> bool {
        match self {
            Self::Draft => true,
            Self::Submitted => next == Self::Cancelled,
            Self::Cancelled => false,
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Contract {
    /// Create a draft contract
    ///
    /// The summary is always computed; the schedule is built only when the
    /// terms validate and stays empty otherwise.
    pub fn new(
        customer: Option<String>,
        terms: ContractTerms,
        limits: &ScheduleConfig,
    ) -> Result<Self> {
        let form = ContractForm::new(terms, limits.clone())?;
        let (terms, summary, schedule) = form.into_parts();
        let now = chrono::Utc::now().naive_utc();

        Ok(Self {
            id: Uuid::new_v4(),
            customer,
            terms,
            summary,
            schedule,
            status: ContractStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    /// Form over this contract's current state
    pub fn form(&self, limits: &ScheduleConfig) -> ContractForm {
        ContractForm::from_parts(
            self.terms.clone(),
            self.summary.clone(),
            self.schedule.clone(),
            limits.clone(),
        )
    }

    /// Store the state of a form back onto the contract
    pub fn apply_form(&mut self, form: ContractForm) {
        let (terms, summary, schedule) = form.into_parts();
        self.terms = terms;
        self.summary = summary;
        self.schedule = schedule;
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Only drafts accept edits and rebuilds
    pub fn ensure_editable(&self) -> Result<()> {
        if self.status != ContractStatus::Draft {
            return Err(AppError::conflict(format!(
                "Contract {} is {} and can no longer be edited",
                self.id, self.status
            )));
        }

        Ok(())
    }

    /// Freeze the contract
    ///
    /// Callers rebuild the schedule first; this only checks the invariants
    /// a submitted contract must hold.
    pub fn submit(&mut self) -> Result<()> {
        self.ensure_editable()?;

        if self.terms.downpayment_amount > self.terms.total_amount {
            return Err(AppError::validation(format!(
                "Down payment {} exceeds total amount {}",
                self.terms.downpayment_amount, self.terms.total_amount
            )));
        }

        if self.schedule.is_empty() {
            return Err(AppError::validation(
                "Cannot submit a contract without payment rows",
            ));
        }

        self.status = ContractStatus::Submitted;
        self.updated_at = chrono::Utc::now().naive_utc();

        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        if self.status == ContractStatus::Cancelled {
            return Err(AppError::conflict(format!(
                "Contract {} is already cancelled",
                self.id
            )));
        }

        self.status = ContractStatus::Cancelled;
        self.updated_at = chrono::Utc::now().naive_utc();

        Ok(())
    }
}
