// Test Application Helpers
//
// Builds the full application service in-process with actix-web's test
// utilities and a fresh in-memory contract store per call.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error};
use instaplan::config::ScheduleConfig;
use instaplan::contracts::{ContractService, InMemoryContractRepository};
use instaplan::middleware::{ErrorLogger, RequestId};

pub fn contract_service(limits: ScheduleConfig) -> ContractService {
    ContractService::new(Arc::new(InMemoryContractRepository::new()), limits)
}

/// Initialise the application with default limits
pub async fn init_test_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    init_test_app_with_limits(ScheduleConfig::default()).await
}

/// Initialise the application with custom limits
pub async fn init_test_app_with_limits(
    limits: ScheduleConfig,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let service = contract_service(limits.clone());

    test::init_service(
        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .configure(instaplan::configure_app(service, limits)),
    )
    .await
}
