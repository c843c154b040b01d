pub mod contract_form;
pub mod contract_service;

pub use contract_form::ContractForm;
pub use contract_service::{ContractService, ContractStore};
