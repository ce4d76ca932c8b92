#![allow(clippy::disallowed_methods)]

mod common;

use std::collections::HashMap;

use api::{ApiError, Attachments, BinaryFile, Method, MultipartPart, RequestBody, TeamsClient};
use serde_json::json;

use common::{BASE_URL, MockTransport, config};

fn client(transport: &MockTransport) -> TeamsClient<MockTransport> {
    TeamsClient::with_transport(transport.clone(), &config())
}

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn complete_team_form() -> HashMap<String, String> {
    form(&[
        ("company", "Acme"),
        ("companyCode", "ac"),
        ("department", "Engineering"),
        ("deptCode", "EN"),
        ("teamName", "Core Platform"),
        ("teamCode", "CO"),
        ("teamDescription", "  "),
    ])
}

#[tokio::test]
async fn create_team_sends_one_json_post() {
    let transport =
        MockTransport::new().respond(201, r#"{"message":"團隊建立成功","team_id":"AC-EN-CO"}"#);
    let team = client(&transport)
        .create_team(&complete_team_form())
        .await
        .unwrap();
    assert_eq!(team.id, "AC-EN-CO");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url, format!("{BASE_URL}/teams"));
    assert_eq!(
        requests[0].body,
        RequestBody::Json(json!({
            "company": "Acme",
            "company_code": "ac",
            "department": "Engineering",
            "dept_code": "EN",
            "team_name": "Core Platform",
            "team_code": "CO"
        }))
    );
}

#[tokio::test]
async fn create_team_with_missing_fields_sends_nothing() {
    let transport = MockTransport::new();
    let err = client(&transport)
        .create_team(&form(&[("company", "Acme")]))
        .await
        .unwrap_err();

    match err {
        ApiError::Validation(errors) => {
            assert_eq!(errors.len(), 5);
            assert!(errors.contains(&"團隊名稱 為必填欄位".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn file_listing_is_cached_until_a_delete() {
    let transport = MockTransport::new()
        .route(
            "action=files",
            200,
            r#"{"files":[{"key":"teams/AC-EN-CO/cv.pdf","name":"cv.pdf","size":2048,"lastModified":"2025-06-12T10:00:00Z"}]}"#,
        )
        .route("/delete-team-file", 200, r#"{"message":"deleted"}"#);
    let teams = client(&transport);

    let first = teams.list_files("AC-EN-CO").await.unwrap();
    let second = teams.list_files("AC-EN-CO").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].size, Some(2048));
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(
        transport.requests()[0].url,
        format!("{BASE_URL}/teams/AC-EN-CO?action=files")
    );

    teams.delete_file("AC-EN-CO", "teams/AC-EN-CO/cv.pdf").await.unwrap();
    let delete = transport.last_request().unwrap();
    assert_eq!(delete.method, Method::DELETE);
    assert_eq!(delete.url, format!("{BASE_URL}/delete-team-file"));
    assert_eq!(delete.body, RequestBody::Json(json!({"key": "teams/AC-EN-CO/cv.pdf"})));

    teams.list_files("AC-EN-CO").await.unwrap();
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn download_url_encodes_the_key() {
    let transport = MockTransport::new()
        .respond(200, r#"{"downloadUrl":"https://files.example.com/signed"}"#);
    let url = client(&transport)
        .download_url("teams/AC-EN-CO/cv.pdf")
        .await
        .unwrap();

    assert_eq!(url, "https://files.example.com/signed");
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{BASE_URL}/download-team-file/teams%2FAC-EN-CO%2Fcv.pdf")
    );
}

#[tokio::test]
async fn download_url_without_payload_is_malformed() {
    let transport = MockTransport::new().respond(200, "");
    let err = client(&transport).download_url("k").await.unwrap_err();
    assert_eq!(err, ApiError::MalformedResponse);
}

#[tokio::test]
async fn file_listing_errors_surface_the_backend_message() {
    let transport = MockTransport::new().respond(500, r#"{"error":"列出文件失敗"}"#);
    let err = client(&transport).list_files("AC-EN-CO").await.unwrap_err();
    assert_eq!(err.to_string(), "列出文件失敗");
}

#[tokio::test]
async fn update_team_sends_cleared_description() {
    let transport = MockTransport::new().respond(200, r#"{"message":"團隊更新成功"}"#);
    let mut edited = complete_team_form();
    edited.insert("teamDescription".to_string(), String::new());

    let team = client(&transport)
        .update_team("AC-EN-CO", &edited, None)
        .await
        .unwrap();
    assert_eq!(team.id, "AC-EN-CO");

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.url, format!("{BASE_URL}/teams/AC-EN-CO"));
    match request.body {
        RequestBody::Json(body) => {
            assert_eq!(body["team_description"], "");
            assert_eq!(body["team_name"], "Core Platform");
        }
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_files_needs_no_form_and_refreshes_the_listing() {
    let transport = MockTransport::new()
        .route("action=files", 200, r#"{"files":[]}"#)
        .route("/teams/AC-EN-CO", 200, "{}");
    let teams = client(&transport);

    teams.list_files("AC-EN-CO").await.unwrap();

    let cv = BinaryFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec());
    let attachments = Attachments::default().add(cv);
    let team = teams.upload_files("AC-EN-CO", &attachments).await.unwrap();
    assert_eq!(team.id, "AC-EN-CO");

    let upload = transport.last_request().unwrap();
    assert_eq!(upload.method, Method::PUT);
    match &upload.body {
        RequestBody::Multipart(parts) => {
            let fields = parts.iter().find_map(|part| match part {
                MultipartPart::Text { name, value } if name == "fields" => Some(value.as_str()),
                _ => None,
            });
            assert_eq!(fields, Some("{}"));
            assert_eq!(parts.iter().filter(|part| part.name() == "files").count(), 1);
        }
        other => panic!("expected multipart body, got {other:?}"),
    }

    teams.list_files("AC-EN-CO").await.unwrap();
    assert_eq!(transport.requests().len(), 3);
}
