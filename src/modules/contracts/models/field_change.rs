use serde::{Deserialize, Serialize};

use crate::modules::installments::models::{FinancialSummary, ScheduleRow, ValidationError};

/// Editable contract term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractField {
    TotalAmount,
    DownpaymentAmount,
    MonthlyPayment,
    InstallmentMonths,
    StartDate,
    BillingDay,
}

impl ContractField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalAmount => "total_amount",
            Self::DownpaymentAmount => "downpayment_amount",
            Self::MonthlyPayment => "monthly_payment",
            Self::InstallmentMonths => "installment_months",
            Self::StartDate => "start_date",
            Self::BillingDay => "billing_day",
        }
    }
}

impl std::fmt::Display for ContractField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of applying one field change to a contract form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Terms are valid; summary and schedule were both rebuilt
    Rebuilt {
        summary: FinancialSummary,
        schedule: Vec<ScheduleRow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
    },
    /// Terms are incomplete; only the summary changed
    SummaryOnly {
        summary: FinancialSummary,
        pending: ValidationError,
        #[serde(skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
    },
}

impl Action {
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Rebuilt { warning, .. } | Self::SummaryOnly { warning, .. } => {
                warning.as_deref()
            }
        }
    }
}
