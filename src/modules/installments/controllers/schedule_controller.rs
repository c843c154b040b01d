// Stateless schedule endpoints
//
// Endpoints:
// - POST /v1/schedules/validate - Check contract terms without building
// - POST /v1/schedules/build - Build summary and schedule for contract terms

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::config::ScheduleConfig;
use crate::core::Result;
use crate::modules::installments::{models::ContractTerms, services::ScheduleBuilder};

/// Response for POST /v1/schedules/validate
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

/// POST /v1/schedules/validate
///
/// # Returns
/// - 200: `{"valid": true}`
/// - 400: first failing check, with its `kind`
pub async fn validate_terms(
    terms: web::Json<ContractTerms>,
    limits: web::Data<ScheduleConfig>,
) -> Result<HttpResponse> {
    limits.check_limits(&terms)?;
    terms.validate()?;

    Ok(HttpResponse::Ok().json(ValidateResponse { valid: true }))
}

/// POST /v1/schedules/build
///
/// Builds from scratch on every call; identical terms give identical output.
///
/// # Returns
/// - 200: `{"summary": {...}, "schedule": [...]}`
/// - 400: terms failed validation, nothing built
/// - 422: a due date fell outside the calendar range
pub async fn build_schedule(
    terms: web::Json<ContractTerms>,
    limits: web::Data<ScheduleConfig>,
) -> Result<HttpResponse> {
    limits.check_limits(&terms)?;
    let built = ScheduleBuilder::build(&terms)?;

    Ok(HttpResponse::Ok().json(built))
}

/// Configure schedule routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/schedules")
            .route("/validate", web::post().to(validate_terms))
            .route("/build", web::post().to(build_schedule)),
    );
}
