pub mod contract_repository;

pub use contract_repository::{InMemoryContractRepository, DEFAULT_PAGE_SIZE};
