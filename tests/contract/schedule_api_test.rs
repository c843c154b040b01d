// Contract tests for the stateless schedule endpoints
//
// POST /v1/schedules/validate and POST /v1/schedules/build: request and
// response shapes, error kinds and status codes.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use helpers::{init_test_app, init_test_app_with_limits, TestDataFactory};
use instaplan::config::ScheduleConfig;
use serde_json::{json, Value};

/// Complete terms validate
#[actix_web::test]
async fn test_validate_accepts_complete_terms() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/schedules/validate")
        .set_json(TestDataFactory::terms_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], true);
}

/// Checks run in a fixed order and report only the first failure
#[actix_web::test]
async fn test_validate_reports_first_failure() {
    let app = init_test_app().await;

    let cases = [
        (json!({}), "MissingTotalAmount"),
        (json!({ "total_amount": "1000" }), "MissingMonthlyPayment"),
        (
            json!({ "total_amount": "1000", "monthly_payment": "120" }),
            "MissingStartDate",
        ),
        (
            json!({
                "total_amount": "1000",
                "monthly_payment": "120",
                "start_date": "2025-01-15",
                "billing_day": 32
            }),
            "InvalidBillingDay",
        ),
    ];

    for (payload, kind) in cases {
        let req = test::TestRequest::post()
            .uri("/v1/schedules/validate")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400, "payload {}", payload);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["kind"], kind);
        assert_eq!(body["error"]["code"], 400);
    }
}

/// Build returns the summary with the full schedule
#[actix_web::test]
async fn test_build_response_shape() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/schedules/build")
        .set_json(TestDataFactory::terms_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["summary"]["finance_amount"], "1000");
    assert_eq!(body["summary"]["grand_total"], "1200");

    let schedule = body["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 11);
    assert_eq!(schedule[0]["description"], "down payment");
    assert_eq!(schedule[0]["due_date"], "2025-01-15");
    assert_eq!(schedule[1]["due_date"], "2025-02-05");
    assert_eq!(schedule[10]["description"], "10-th month payment");
    assert_eq!(schedule[10]["due_date"], "2025-11-05");
}

/// Numeric amounts are accepted as well as strings
#[actix_web::test]
async fn test_build_accepts_numeric_amounts() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/schedules/build")
        .set_json(json!({
            "total_amount": 1000,
            "monthly_payment": 120,
            "installment_months": 10,
            "start_date": "2025-01-15",
            "billing_day": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"]["profit_percentage"], "16.67");
    assert_eq!(body["summary"]["total_interest"], "200");
    assert_eq!(body["schedule"].as_array().unwrap().len(), 10);
}

/// Invalid terms produce no schedule
#[actix_web::test]
async fn test_build_rejects_invalid_terms() {
    let app = init_test_app().await;

    let mut payload = TestDataFactory::terms_payload();
    payload["billing_day"] = json!(0);

    let req = test::TestRequest::post()
        .uri("/v1/schedules/build")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "InvalidBillingDay");
    assert!(body.get("schedule").is_none());
}

/// Term length over the configured limit is refused before building
#[actix_web::test]
async fn test_build_respects_month_limit() {
    let app = init_test_app_with_limits(ScheduleConfig {
        max_installment_months: 12,
    })
    .await;

    let mut payload = TestDataFactory::terms_payload();
    payload["installment_months"] = json!(13);

    let req = test::TestRequest::post()
        .uri("/v1/schedules/build")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("at most 12"));
}

/// A term of zero months is refused by both endpoints
#[actix_web::test]
async fn test_zero_months_is_refused() {
    let app = init_test_app().await;

    let mut payload = TestDataFactory::terms_payload();
    payload["installment_months"] = json!(0);

    for uri in ["/v1/schedules/validate", "/v1/schedules/build"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("at least 1"));
    }
}

/// Malformed JSON gets the standard error body
#[actix_web::test]
async fn test_build_rejects_malformed_json() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/schedules/build")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"total_amount\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

/// Request ids are echoed back
#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = init_test_app().await;

    let req = test::TestRequest::post()
        .uri("/v1/schedules/validate")
        .insert_header(("x-request-id", "req-42"))
        .set_json(TestDataFactory::terms_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-42");
}
