pub mod schedule_controller;

pub use schedule_controller::{build_schedule, configure, validate_terms};
