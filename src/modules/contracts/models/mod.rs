pub mod contract;
pub mod field_change;

pub use contract::{Contract, ContractStatus};
pub use field_change::{Action, ContractField};
