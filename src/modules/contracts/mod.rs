pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Action, Contract, ContractField, ContractStatus};
pub use repositories::InMemoryContractRepository;
pub use services::{ContractForm, ContractService, ContractStore};
