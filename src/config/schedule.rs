use crate::core::{AppError, Result};
use crate::modules::installments::ContractTerms;

use super::env_or;

/// Upper bound on term length accepted by the API
pub const DEFAULT_MAX_INSTALLMENT_MONTHS: u32 = 600;

/// Limits applied to terms arriving over HTTP
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub max_installment_months: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_installment_months: DEFAULT_MAX_INSTALLMENT_MONTHS,
        }
    }
}

impl ScheduleConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            max_installment_months: env_or(
                "SCHEDULE_MAX_INSTALLMENT_MONTHS",
                DEFAULT_MAX_INSTALLMENT_MONTHS,
            )?,
        })
    }

    /// Reject terms whose schedule would be empty or exceed the configured size
    pub fn check_limits(&self, terms: &ContractTerms) -> Result<()> {
        if terms.installment_months == 0 {
            return Err(AppError::validation(
                "Installment months must be at least 1",
            ));
        }

        if terms.installment_months > self.max_installment_months {
            return Err(AppError::validation(format!(
                "Installment months must be at most {}, got {}",
                self.max_installment_months, terms.installment_months
            )));
        }

        Ok(())
    }
}
