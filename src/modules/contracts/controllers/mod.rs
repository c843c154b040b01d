pub mod contract_controller;

pub use contract_controller::{
    cancel_contract, change_field, configure, create_contract, get_contract, list_contracts,
    rebuild_schedule, submit_contract,
};
