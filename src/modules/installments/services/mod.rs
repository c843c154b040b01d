pub mod schedule_builder;

pub use schedule_builder::{days_in_month, due_date, BuiltSchedule, ScheduleBuilder, ScheduleError};
