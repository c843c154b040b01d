pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{build_schedule, validate_terms};
pub use models::{ContractTerms, FinancialSummary, ScheduleRow, ValidationError};
pub use services::{BuiltSchedule, ScheduleBuilder, ScheduleError};
