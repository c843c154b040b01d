use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::modules::installments::models::{
    ContractTerms, FinancialSummary, ScheduleRow, ValidationError,
};

/// Why a schedule could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("due date of month {month} is outside the supported calendar range")]
    DueDateOutOfRange { month: u32 },
}

/// Summary and schedule produced by one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltSchedule {
    pub summary: FinancialSummary,
    pub schedule: Vec<ScheduleRow>,
}

/// Number of days in `month` (1-based) of `year`, proleptic Gregorian
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Due date `months_ahead` calendar months after `start`, on `billing_day`
///
/// A billing day past the end of the target month is pulled back to that
/// month's last day, so a due date never spills into the following month.
pub fn due_date(start: NaiveDate, months_ahead: u32, billing_day: u32) -> Option<NaiveDate> {
    let month_index = i64::from(start.month0()) + i64::from(months_ahead);
    let year = i32::try_from(i64::from(start.year()) + month_index / 12).ok()?;
    let month = (month_index % 12) as u32 + 1;
    let day = billing_day.min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Builder for installment contract schedules
pub struct ScheduleBuilder;

impl ScheduleBuilder {
    /// Compute the financial summary; never fails
    pub fn compute_summary(terms: &ContractTerms) -> FinancialSummary {
        FinancialSummary::from_terms(terms)
    }

    /// Build the ordered payment schedule
    ///
    /// Terms are validated first and nothing is produced on failure.
    /// The down payment row (if any) comes first, dated on the start date,
    /// followed by one row per month carrying the constant monthly payment.
    pub fn build_schedule(terms: &ContractTerms) -> Result<Vec<ScheduleRow>, ScheduleError> {
        terms.validate()?;

        let start_date = terms.start_date.ok_or(ValidationError::MissingStartDate)?;
        let mut rows = Vec::with_capacity(terms.installment_months as usize + 1);

        if terms.has_downpayment() {
            rows.push(ScheduleRow::down_payment(
                start_date,
                terms.downpayment_amount,
                terms.total_amount,
            ));
        }

        for month in 1..=terms.installment_months {
            let due = due_date(start_date, month, terms.billing_day).ok_or_else(|| {
                warn!(
                    start_date = %start_date,
                    month,
                    "Due date out of calendar range"
                );
                ScheduleError::DueDateOutOfRange { month }
            })?;

            rows.push(ScheduleRow::monthly(
                month,
                due,
                terms.monthly_payment,
                terms.total_amount,
            ));
        }

        debug!(
            rows = rows.len(),
            installment_months = terms.installment_months,
            total_amount = %terms.total_amount,
            "Built installment schedule"
        );

        Ok(rows)
    }

    /// Build summary and schedule together
    pub fn build(terms: &ContractTerms) -> Result<BuiltSchedule, ScheduleError> {
        let schedule = Self::build_schedule(terms)?;

        Ok(BuiltSchedule {
            summary: Self::compute_summary(terms),
            schedule,
        })
    }
}
