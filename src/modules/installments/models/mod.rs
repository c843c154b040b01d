pub mod contract_terms;
pub mod financial_summary;
pub mod schedule_row;
pub mod validation;

pub use contract_terms::{ContractTerms, DEFAULT_INSTALLMENT_MONTHS};
pub use financial_summary::{FinancialSummary, PERCENT_SCALE};
pub use schedule_row::ScheduleRow;
pub use validation::ValidationError;
