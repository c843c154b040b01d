use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::core::{AppError, Result};
use crate::modules::contracts::models::{Action, ContractField};
use crate::modules::installments::models::{
    ContractTerms, FinancialSummary, ScheduleRow, DEFAULT_INSTALLMENT_MONTHS,
};
use crate::modules::installments::services::{ScheduleBuilder, ScheduleError};

/// Editing state of a single contract
///
/// Every field change recomputes the summary and, when the terms validate,
/// rebuilds the schedule wholesale. Invalid terms leave the previous
/// schedule in place.
#[derive(Debug, Clone)]
pub struct ContractForm {
    terms: ContractTerms,
    summary: FinancialSummary,
    schedule: Vec<ScheduleRow>,
    limits: ScheduleConfig,
}

impl ContractForm {
    /// Start a form from initial terms
    ///
    /// Incomplete terms give an empty schedule. Terms outside the limits, or
    /// valid terms whose due dates leave the calendar, are errors.
    pub fn new(terms: ContractTerms, limits: ScheduleConfig) -> Result<Self> {
        limits.check_limits(&terms)?;

        let summary = ScheduleBuilder::compute_summary(&terms);
        let schedule = match ScheduleBuilder::build_schedule(&terms) {
            Ok(schedule) => schedule,
            Err(ScheduleError::Invalid(_)) => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            terms,
            summary,
            schedule,
            limits,
        })
    }

    pub fn from_parts(
        terms: ContractTerms,
        summary: FinancialSummary,
        schedule: Vec<ScheduleRow>,
        limits: ScheduleConfig,
    ) -> Self {
        Self {
            terms,
            summary,
            schedule,
            limits,
        }
    }

    pub fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    pub fn summary(&self) -> &FinancialSummary {
        &self.summary
    }

    pub fn schedule(&self) -> &[ScheduleRow] {
        &self.schedule
    }

    pub fn into_parts(self) -> (ContractTerms, FinancialSummary, Vec<ScheduleRow>) {
        (self.terms, self.summary, self.schedule)
    }

    /// Apply a new value to one field
    ///
    /// `null` clears the field (zero for amounts and billing day, the default
    /// term length for months, no start date). A value of the wrong type, a
    /// term outside the configured limits, or an unrepresentable due date is
    /// rejected and the form is left unchanged.
    pub fn on_field_change(&mut self, field: ContractField, value: &Value) -> Result<Action> {
        let mut terms = self.terms.clone();

        match field {
            ContractField::TotalAmount => terms.total_amount = parse_amount(field, value)?,
            ContractField::DownpaymentAmount => {
                terms.downpayment_amount = parse_amount(field, value)?
            }
            ContractField::MonthlyPayment => terms.monthly_payment = parse_amount(field, value)?,
            ContractField::InstallmentMonths => {
                terms.installment_months =
                    parse_or(field, value, DEFAULT_INSTALLMENT_MONTHS)?
            }
            ContractField::StartDate => {
                terms.start_date = parse_or::<Option<NaiveDate>>(field, value, None)?
            }
            ContractField::BillingDay => terms.billing_day = parse_or(field, value, 0)?,
        }

        self.limits.check_limits(&terms)?;

        let summary = ScheduleBuilder::compute_summary(&terms);
        let warning = summary.warning();

        let action = match terms.validate() {
            Ok(()) => {
                let schedule = ScheduleBuilder::build_schedule(&terms)?;
                self.schedule = schedule.clone();
                Action::Rebuilt {
                    summary: summary.clone(),
                    schedule,
                    warning,
                }
            }
            Err(pending) => Action::SummaryOnly {
                summary: summary.clone(),
                pending,
                warning,
            },
        };

        debug!(
            field = field.as_str(),
            rebuilt = matches!(action, Action::Rebuilt { .. }),
            "Applied contract field change"
        );

        self.terms = terms;
        self.summary = summary;

        Ok(action)
    }

    /// Explicit "build schedule" command
    ///
    /// Unlike a field change, invalid terms are an error here. The previous
    /// schedule is kept on failure.
    pub fn build(&mut self) -> Result<&[ScheduleRow]> {
        self.limits.check_limits(&self.terms)?;
        let built = ScheduleBuilder::build(&self.terms)?;

        self.summary = built.summary;
        self.schedule = built.schedule;

        Ok(&self.schedule)
    }
}

fn parse_amount(field: ContractField, value: &Value) -> Result<Decimal> {
    parse_or(field, value, Decimal::ZERO)
}

fn parse_or<T: DeserializeOwned>(field: ContractField, value: &Value, cleared: T) -> Result<T> {
    if value.is_null() {
        return Ok(cleared);
    }

    serde_json::from_value(value.clone())
        .map_err(|e| AppError::validation(format!("Invalid value for {}: {}", field, e)))
}
