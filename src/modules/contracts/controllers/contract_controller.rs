// HTTP handlers for contract endpoints
//
// Endpoints:
// - POST  /v1/contracts - Create a draft contract
// - GET   /v1/contracts - List contracts, newest first
// - GET   /v1/contracts/{id} - Fetch a contract
// - PATCH /v1/contracts/{id}/fields - Apply one field change
// - POST  /v1/contracts/{id}/schedule - Rebuild the schedule
// - POST  /v1/contracts/{id}/submit - Submit a draft
// - POST  /v1/contracts/{id}/cancel - Cancel a contract

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::contracts::{
    models::{Contract, ContractField},
    services::ContractService,
};
use crate::modules::installments::models::ContractTerms;

/// Request for POST /v1/contracts
#[derive(Debug, Deserialize)]
pub struct CreateContractRequest {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub terms: ContractTerms,
}

/// Request for PATCH /v1/contracts/{id}/fields
#[derive(Debug, Deserialize)]
pub struct FieldChangeRequest {
    pub field: ContractField,
    #[serde(default)]
    pub value: Value,
}

/// Query for GET /v1/contracts
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Response for GET /v1/contracts
#[derive(Debug, Serialize)]
pub struct ListContractsResponse {
    pub contracts: Vec<Contract>,
}

/// POST /v1/contracts
///
/// # Returns
/// - 201: Draft contract; schedule is empty while the terms are incomplete
/// - 400: Terms exceed the configured limits
pub async fn create_contract(
    request: web::Json<CreateContractRequest>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let contract = service.create(request.customer, request.terms).await?;

    Ok(HttpResponse::Created().json(contract))
}

/// GET /v1/contracts
pub async fn list_contracts(
    query: web::Query<ListQuery>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let contracts = service.list(query.limit, query.offset).await?;

    Ok(HttpResponse::Ok().json(ListContractsResponse { contracts }))
}

/// GET /v1/contracts/{contract_id}
///
/// # Returns
/// - 200: Contract
/// - 404: Contract not found
pub async fn get_contract(
    contract_id: web::Path<Uuid>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let contract = service.get(contract_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(contract))
}

/// PATCH /v1/contracts/{contract_id}/fields
///
/// # Request Body
/// ```json
/// { "field": "monthly_payment", "value": "120.00" }
/// ```
///
/// # Returns
/// - 200: `rebuilt` or `summary_only` action
/// - 400: Value of the wrong type or over the limits
/// - 404: Contract not found
/// - 409: Contract is no longer a draft
pub async fn change_field(
    contract_id: web::Path<Uuid>,
    request: web::Json<FieldChangeRequest>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let action = service
        .change_field(contract_id.into_inner(), request.field, request.value)
        .await?;

    Ok(HttpResponse::Ok().json(action))
}

/// POST /v1/contracts/{contract_id}/schedule
///
/// # Returns
/// - 200: Contract with a freshly built schedule
/// - 400: Terms failed validation; stored schedule untouched
/// - 409: Contract is no longer a draft
pub async fn rebuild_schedule(
    contract_id: web::Path<Uuid>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let contract = service.rebuild(contract_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(contract))
}

/// POST /v1/contracts/{contract_id}/submit
pub async fn submit_contract(
    contract_id: web::Path<Uuid>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let contract = service.submit(contract_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(contract))
}

/// POST /v1/contracts/{contract_id}/cancel
pub async fn cancel_contract(
    contract_id: web::Path<Uuid>,
    service: web::Data<ContractService>,
) -> Result<HttpResponse> {
    let contract = service.cancel(contract_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(contract))
}

/// Configure contract routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/contracts")
            .route("", web::post().to(create_contract))
            .route("", web::get().to(list_contracts))
            .route("/{contract_id}", web::get().to(get_contract))
            .route("/{contract_id}/fields", web::patch().to(change_field))
            .route("/{contract_id}/schedule", web::post().to(rebuild_schedule))
            .route("/{contract_id}/submit", web::post().to(submit_contract))
            .route("/{contract_id}/cancel", web::post().to(cancel_contract)),
    );
}
