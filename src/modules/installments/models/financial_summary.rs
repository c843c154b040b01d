use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::ContractTerms;

/// Decimal places kept on every percentage
pub const PERCENT_SCALE: u32 = 2;

/// `part / whole * 100`, rounded half away from zero; zero when `whole` is zero
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Figures derived from contract terms
///
/// Always recomputed from scratch; monetary fields are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Principal left after the down payment
    pub finance_amount: Decimal,
    /// Sum of all monthly payments
    pub total_installments: Decimal,
    /// What the installments collect above the principal
    pub total_interest: Decimal,
    pub grand_total: Decimal,
    /// Interest as a share of the installments total
    pub profit_percentage: Decimal,
    /// Interest as a share of the financed principal
    pub finance_profit_percentage: Decimal,
}

impl FinancialSummary {
    /// Compute the summary for a set of terms
    ///
    /// Defined for any input, including a down payment that covers the
    /// whole price; callers decide whether to warn via [`Self::warning`].
    pub fn from_terms(terms: &ContractTerms) -> Self {
        let finance_amount = terms.total_amount - terms.downpayment_amount;
        let total_installments = terms.monthly_payment * Decimal::from(terms.installment_months);
        let total_interest = total_installments - finance_amount;

        Self {
            finance_amount,
            total_installments,
            total_interest,
            grand_total: terms.downpayment_amount + total_installments,
            profit_percentage: percent_of(total_interest, total_installments),
            finance_profit_percentage: percent_of(total_interest, finance_amount),
        }
    }

    /// Human-readable note when the figures look wrong but are still computable
    pub fn warning(&self) -> Option<String> {
        if self.finance_amount <= Decimal::ZERO {
            return Some(format!(
                "Finance amount is {}; the down payment covers the whole price",
                self.finance_amount
            ));
        }

        if self.total_interest < Decimal::ZERO {
            return Some(format!(
                "Installments total {} is below the finance amount {}",
                self.total_installments, self.finance_amount
            ));
        }

        None
    }
}
