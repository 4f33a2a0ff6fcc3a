//! End-to-end tests for `POST /log_overdue_speaker`.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

async fn report(logger: &common::TestLogger, body: Value) -> reqwest::Response {
    common::client()
        .post(logger.url("/log_overdue_speaker"))
        .json(&body)
        .send()
        .await
        .expect("logger unreachable")
}

#[tokio::test]
async fn test_alice_end_to_end() {
    let logger = common::start_logger(None).await;

    let res = report(&logger, json!({"name": "Alice", "overdueTime": 12})).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Logged successfully"}));
    assert_eq!(logger.contents(), "Alice exceeded time by -12 seconds\n");
}

#[tokio::test]
async fn test_sign_is_inverted() {
    let logger = common::start_logger(None).await;

    report(&logger, json!({"name": "Bob", "overdueTime": 5})).await;
    report(&logger, json!({"name": "Carol", "overdueTime": -3})).await;
    report(&logger, json!({"name": "Dan", "overdueTime": 1.5})).await;

    assert_eq!(
        logger.lines(),
        vec![
            "Bob exceeded time by -5 seconds",
            "Carol exceeded time by 3 seconds",
            "Dan exceeded time by -1.5 seconds",
        ]
    );
}

#[tokio::test]
async fn test_lines_appended_in_call_order_after_existing_content() {
    let logger = common::start_logger(Some("Zed exceeded time by -1 seconds\n")).await;

    for (i, name) in ["Ann", "Ben", "Cat", "Dee"].iter().enumerate() {
        let res = report(&logger, json!({"name": name, "overdueTime": i})).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(
        logger.contents(),
        "Zed exceeded time by -1 seconds\n\
         Ann exceeded time by 0 seconds\n\
         Ben exceeded time by -1 seconds\n\
         Cat exceeded time by -2 seconds\n\
         Dee exceeded time by -3 seconds\n"
    );
}

#[tokio::test]
async fn test_identical_calls_are_not_deduplicated() {
    let logger = common::start_logger(None).await;

    for _ in 0..2 {
        let res = report(&logger, json!({"name": "Eve", "overdueTime": 7})).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(
        logger.lines(),
        vec!["Eve exceeded time by -7 seconds"; 2]
    );
}

#[tokio::test]
async fn test_missing_fields_rejected_without_writing() {
    let logger = common::start_logger(Some("kept\n")).await;

    for body in [
        json!({"overdueTime": 12}),
        json!({"name": "Alice"}),
        json!({}),
    ] {
        let res = report(&logger, body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let error: Value = res.json().await.unwrap();
        assert!(error["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing required field"));
    }

    assert_eq!(logger.contents(), "kept\n");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let logger = common::start_logger(None).await;

    let res = common::client()
        .post(logger.url("/log_overdue_speaker"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = report(&logger, json!({"name": "Alice", "overdueTime": "twelve"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(logger.contents(), "");
}

#[tokio::test]
async fn test_integer_beyond_u64_logged_digit_for_digit() {
    let logger = common::start_logger(None).await;

    for raw in [
        r#"{"name": "Gus", "overdueTime": 100000000000000000000000}"#,
        r#"{"name": "Gus", "overdueTime": -0}"#,
    ] {
        let res = common::client()
            .post(logger.url("/log_overdue_speaker"))
            .header("content-type", "application/json")
            .body(raw)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(
        logger.contents(),
        "Gus exceeded time by -100000000000000000000000 seconds\n\
         Gus exceeded time by 0 seconds\n"
    );
}

#[tokio::test]
async fn test_newline_in_name_written_verbatim() {
    let logger = common::start_logger(None).await;

    let res = report(&logger, json!({"name": "Hal\nIda", "overdueTime": 2})).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(logger.contents(), "Hal\nIda exceeded time by -2 seconds\n");
    assert_eq!(logger.lines().len(), 2);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let logger = common::start_logger(None).await;

    let res = common::client()
        .post(logger.url("/log_overdue_speaker"))
        .header("x-request-id", "huddle-42")
        .json(&json!({"name": "Fay", "overdueTime": 0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "huddle-42");

    let res = report(&logger, json!({"name": "Fay", "overdueTime": 0})).await;
    let minted = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok());
}

#[tokio::test]
async fn test_health_endpoint() {
    let logger = common::start_logger(None).await;

    let res = common::client().get(logger.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
