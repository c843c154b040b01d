// Integration tests for the contract lifecycle
//
// Draft -> edits -> rebuild -> submit -> cancel, end to end over HTTP.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use helpers::{init_test_app, TestDataFactory};
use serde_json::{json, Value};

/// A contract is drafted field by field, submitted, then cancelled
#[actix_web::test]
async fn test_full_contract_lifecycle() {
    let app = init_test_app().await;

    // Empty draft
    let req = test::TestRequest::post()
        .uri("/v1/contracts")
        .set_json(json!({ "customer": "Jane Doe" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    let fields_uri = format!("/v1/contracts/{}/fields", id);

    // Fill in the terms one by one
    let edits = [
        json!({ "field": "total_amount", "value": "1200" }),
        json!({ "field": "downpayment_amount", "value": "200" }),
        json!({ "field": "monthly_payment", "value": "100" }),
        json!({ "field": "installment_months", "value": 10 }),
        json!({ "field": "start_date", "value": "2025-10-31" }),
        json!({ "field": "billing_day", "value": 31 }),
    ];

    let mut last = Value::Null;
    for edit in edits {
        let req = test::TestRequest::patch()
            .uri(&fields_uri)
            .set_json(&edit)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "edit {}", edit);
        last = test::read_body_json(resp).await;
    }

    assert_eq!(last["action"], "rebuilt");
    let schedule = last["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 11);
    assert_eq!(schedule[0]["due_date"], "2025-10-31");
    assert_eq!(schedule[1]["due_date"], "2025-11-30");
    assert_eq!(schedule[2]["due_date"], "2025-12-31");
    assert_eq!(schedule[3]["due_date"], "2026-01-31");
    assert_eq!(schedule[4]["due_date"], "2026-02-28");

    // The stored contract reflects the edits
    let req = test::TestRequest::get()
        .uri(&format!("/v1/contracts/{}", id))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["terms"]["billing_day"], 31);
    assert_eq!(stored["schedule"], last["schedule"]);
    assert_eq!(stored["summary"], last["summary"]);

    // Explicit rebuild is idempotent
    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/schedule", id))
        .to_request();
    let rebuilt: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rebuilt["schedule"], stored["schedule"]);

    // Submit freezes the contract
    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/submit", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let submitted: Value = test::read_body_json(resp).await;
    assert_eq!(submitted["status"], "submitted");

    let req = test::TestRequest::patch()
        .uri(&fields_uri)
        .set_json(json!({ "field": "billing_day", "value": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/submit", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Cancel once, then conflict
    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/cancel", id))
        .to_request();
    let cancelled: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cancelled["status"], "cancelled");
    assert_eq!(cancelled["schedule"], submitted["schedule"]);

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/cancel", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 409);
}

/// Submit refuses incomplete terms and a down payment above the price
#[actix_web::test]
async fn test_submit_guards() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/contracts")
        .set_json(json!({ "terms": { "total_amount": "900" } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let incomplete = body["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/submit", incomplete))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "MissingMonthlyPayment");

    let mut payload = TestDataFactory::create_contract_payload("Over");
    payload["terms"]["downpayment_amount"] = json!("1500");
    let req = test::TestRequest::post()
        .uri("/v1/contracts")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let over = body["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/submit", over))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Still a draft after the refusal
    let req = test::TestRequest::get()
        .uri(&format!("/v1/contracts/{}", over))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "draft");
}

/// A draft can be cancelled without being submitted
#[actix_web::test]
async fn test_cancel_draft() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/contracts")
        .set_json(TestDataFactory::create_contract_payload("ACME"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/cancel", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "cancelled");

    let req = test::TestRequest::post()
        .uri(&format!("/v1/contracts/{}/schedule", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);
}
