use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Term length used when a contract does not specify one
pub const DEFAULT_INSTALLMENT_MONTHS: u32 = 6;

/// Financial terms of an installment contract
///
/// Missing amounts deserialize to zero and a missing start date to `None`,
/// so that [`ContractTerms::validate`] can report which input is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Full contract price
    #[serde(default)]
    pub total_amount: Decimal,
    /// Optional lump sum due on the start date
    #[serde(default)]
    pub downpayment_amount: Decimal,
    /// Fixed amount due every month
    #[serde(default)]
    pub monthly_payment: Decimal,
    /// Number of monthly installments
    #[serde(default = "default_installment_months")]
    pub installment_months: u32,
    /// Contract start; also the down payment due date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Day of month on which every installment falls due (1..=31)
    #[serde(default)]
    pub billing_day: u32,
}

fn default_installment_months() -> u32 {
    DEFAULT_INSTALLMENT_MONTHS
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self {
            total_amount: Decimal::ZERO,
            downpayment_amount: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            installment_months: DEFAULT_INSTALLMENT_MONTHS,
            start_date: None,
            billing_day: 0,
        }
    }
}

impl ContractTerms {
    /// Validate the terms before a schedule is built
    ///
    /// Checks run in a fixed order and the first failure is returned.
    /// A zero down payment is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_amount <= Decimal::ZERO {
            return Err(ValidationError::MissingTotalAmount);
        }

        if self.monthly_payment <= Decimal::ZERO {
            return Err(ValidationError::MissingMonthlyPayment);
        }

        if self.start_date.is_none() {
            return Err(ValidationError::MissingStartDate);
        }

        if !(1..=31).contains(&self.billing_day) {
            return Err(ValidationError::InvalidBillingDay(self.billing_day));
        }

        Ok(())
    }

    /// Whether a down payment row belongs in the schedule
    pub fn has_downpayment(&self) -> bool {
        self.downpayment_amount > Decimal::ZERO
    }
}
