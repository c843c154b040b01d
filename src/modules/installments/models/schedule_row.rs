use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::financial_summary::percent_of;

pub const DOWN_PAYMENT_DESCRIPTION: &str = "down payment";

/// One due payment in a contract schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub due_date: NaiveDate,
    pub payment_amount: Decimal,
    /// Share of the contract total, in percent
    pub invoice_portion: Decimal,
    pub description: String,
}

impl ScheduleRow {
    /// Row for the lump sum due on the start date
    pub fn down_payment(due_date: NaiveDate, amount: Decimal, total_amount: Decimal) -> Self {
        Self {
            due_date,
            payment_amount: amount,
            invoice_portion: percent_of(amount, total_amount),
            description: DOWN_PAYMENT_DESCRIPTION.to_string(),
        }
    }

    /// Row for the `month`-th installment (1-based)
    pub fn monthly(
        month: u32,
        due_date: NaiveDate,
        amount: Decimal,
        total_amount: Decimal,
    ) -> Self {
        Self {
            due_date,
            payment_amount: amount,
            invoice_portion: percent_of(amount, total_amount),
            description: format!("{}-th month payment", month),
        }
    }

    pub fn is_down_payment(&self) -> bool {
        self.description == DOWN_PAYMENT_DESCRIPTION
    }
}
