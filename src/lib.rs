//! Instaplan installment contract service
//!
//! Builds payment schedules and financial summaries for installment
//! contracts, and serves them over HTTP together with a draft/submit
//! contract lifecycle.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

use crate::config::ScheduleConfig;
use crate::modules::contracts::ContractService;

// Re-export commonly used types
pub use modules::contracts;
pub use modules::installments;

/// Application routes and shared state
///
/// Shared state is created once here; the returned closure is cloned into
/// every worker.
pub fn configure_app(
    service: ContractService,
    limits: ScheduleConfig,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let service = web::Data::new(service);
    let limits = web::Data::new(limits);

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(service.clone())
            .app_data(limits.clone())
            .app_data(middleware::json_config())
            .configure(modules::health::configure)
            .configure(modules::installments::controllers::configure)
            .configure(modules::contracts::controllers::configure);
    }
}
