#![allow(clippy::disallowed_methods)]

mod common;

use api::{JobStatus, JobsClient, ListQuery, Method, RequestBody};
use serde_json::json;

use common::{BASE_URL, MockTransport, config};

fn client(transport: &MockTransport) -> JobsClient<MockTransport> {
    JobsClient::with_transport(transport.clone(), &config())
}

fn page(total: u64, views: &[u64]) -> String {
    let items: Vec<_> = views
        .iter()
        .enumerate()
        .map(|(i, v)| json!({"job_id": format!("J-{i}"), "view_count": v}))
        .collect();
    json!({
        "data": items,
        "pagination": {"current_page": 1, "total_pages": 1, "total_items": total, "items_per_page": 1000}
    })
    .to_string()
}

#[tokio::test]
async fn stats_sum_counts_and_views_across_statuses() {
    let transport = MockTransport::new()
        .route("status=active", 200, &page(12, &[10, 5]))
        .route("status=paused", 200, &page(3, &[1]))
        .route("status=closed", 200, &page(4, &[]));

    let stats = client(&transport).stats().await.unwrap();
    assert_eq!(stats.total_jobs, 19);
    assert_eq!(stats.active_jobs, 12);
    assert_eq!(stats.paused_jobs, 3);
    assert_eq!(stats.closed_jobs, 4);
    assert_eq!(stats.total_views, 16);

    for request in transport.requests() {
        assert!(request.url.contains("limit=1000"));
    }
}

#[tokio::test]
async fn batch_status_reports_each_id() {
    let transport = MockTransport::new()
        .route("/jobs/J-2", 404, r#"{"error":"職缺不存在"}"#)
        .route("/jobs/J-", 200, "");
    let ids = vec!["J-1".to_string(), "J-2".to_string(), "J-3".to_string()];

    let outcomes = client(&transport)
        .batch_update_status(&ids, JobStatus::Closed)
        .await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].success);
    assert!(!outcomes[1].success);
    assert_eq!(outcomes[1].id, "J-2");
    assert_eq!(outcomes[1].error.as_deref(), Some("職缺不存在"));
    assert!(outcomes[2].success);

    for request in transport.requests() {
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, RequestBody::Json(json!({"status": "closed"})));
    }
}

#[tokio::test]
async fn duplicate_creates_a_paused_copy() {
    let transport = MockTransport::new()
        .respond(
            200,
            r#"{"job_id":"J-1","job_title":"Engineer","status":"active","view_count":40,"application_count":2,"created_at":"2025-06-12T10:00:00Z"}"#,
        )
        .respond(201, r#"{"job_id":"J-2"}"#);

    let copy = client(&transport).duplicate("J-1").await.unwrap();
    assert_eq!(copy.id, "J-2");

    let create = transport.last_request().unwrap();
    assert_eq!(create.method, Method::POST);
    assert_eq!(
        create.body,
        RequestBody::Json(json!({"job_title": "Engineer (複製)", "status": "paused"}))
    );
}

#[tokio::test]
async fn search_merges_term_and_filters() {
    let transport = MockTransport::new().respond(200, r#"{"items":[]}"#);
    let filters = ListQuery::new().param("status", "paused").param("team_id", "");

    client(&transport).search("rust", filters).await.unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{BASE_URL}/jobs?search=rust&status=paused")
    );
}

#[tokio::test]
async fn export_fetches_selected_or_all() {
    let transport = MockTransport::new()
        .route("/jobs/J-1", 200, r#"{"job_id":"J-1"}"#)
        .route("/jobs/J-2", 200, r#"{"job_id":"J-2"}"#)
        .route("limit=1000", 200, r#"[{"job_id":"J-1"},{"job_id":"J-2"},{"job_id":"J-3"}]"#);
    let jobs = client(&transport);

    let selected = jobs
        .export(&["J-2".to_string(), "J-1".to_string()])
        .await
        .unwrap();
    let ids: Vec<_> = selected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["J-2", "J-1"]);

    let all = jobs.export(&[]).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn job_form_is_validated_before_sending() {
    let transport = MockTransport::new();
    let form: std::collections::BTreeMap<String, String> =
        [("jobTitle".to_string(), "Engineer".to_string())].into();

    let err = client(&transport).create_job(&form).await.unwrap_err();
    assert!(err.to_string().contains("為必填欄位"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn team_selector_reads_the_teams_collection() {
    let transport = MockTransport::new().respond(200, r#"{"teams":[{"team_id":"AC-EN-CO"}],"count":1}"#);
    let teams = client(&transport).list_teams().await.unwrap();

    assert_eq!(teams[0].id, "AC-EN-CO");
    assert_eq!(transport.last_request().unwrap().url, format!("{BASE_URL}/teams"));
}
