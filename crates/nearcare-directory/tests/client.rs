//! Integration tests for `DirectoryClient` using wiremock HTTP mocks.

use nearcare_core::{fetch_nearby, Category, Coordinates, FilterSelection, ProfessionalKind};
use nearcare_directory::{DirectoryClient, DirectoryError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DirectoryClient {
    DirectoryClient::new(base_url, 30, "nearcare-test/0.1")
        .expect("client construction should not fail")
}

fn here() -> Coordinates {
    Coordinates::new(12.34, 56.78).expect("valid coordinates")
}

async fn mount_professionals(server: &MockServer, category: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/professionals/nearby"))
        .and(query_param("category", category))
        .and(query_param("lat", "12.34"))
        .and(query_param("lon", "56.78"))
        .and(query_param("radius", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

async fn mount_ambulances(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/ambulances/nearby"))
        .and(query_param("lat", "12.34"))
        .and(query_param("lon", "56.78"))
        .and(query_param("radius", "15"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_nearby_professionals_returns_parsed_records() {
    let server = MockServer::start().await;
    mount_professionals(
        &server,
        "doctor",
        serde_json::json!({
            "data": [
                {
                    "_id": "d-1",
                    "name": "Dr. Meera Rao",
                    "specialization": "Cardiology",
                    "bookingId": "user-41",
                    "latitude": 12.35,
                    "longitude": 56.79
                },
                { "id": "d-2", "name": "Dr. Omar Haddad" }
            ]
        }),
    )
    .await;

    let client = test_client(&server.uri());
    let records = client
        .get_nearby_professionals(ProfessionalKind::Doctor, here(), 15.0)
        .await
        .expect("should parse records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "d-1");
    assert_eq!(records[0].specialization.as_deref(), Some("Cardiology"));
    assert_eq!(records[0].booking_target(), "user-41");
    assert!(records[0].position().is_some());
    assert_eq!(records[1].booking_target(), "d-2");
}

#[tokio::test]
async fn get_nearby_ambulances_handles_empty_data() {
    let server = MockServer::start().await;
    mount_ambulances(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
    )
    .await;

    let client = test_client(&server.uri());
    let records = client
        .get_nearby_ambulances(here(), 15.0)
        .await
        .expect("empty list is not an error");
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_success_status_is_unexpected_status() {
    let server = MockServer::start().await;
    mount_ambulances(&server, ResponseTemplate::new(503)).await;

    let client = test_client(&server.uri());
    let err = client
        .get_nearby_ambulances(here(), 15.0)
        .await
        .unwrap_err();
    assert!(
        matches!(err, DirectoryError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;
    mount_ambulances(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let client = test_client(&server.uri());
    let err = client
        .get_nearby_ambulances(here(), 15.0)
        .await
        .unwrap_err();
    assert!(
        matches!(err, DirectoryError::Deserialize { .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let server = MockServer::start().await;
    let empty = ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] }));
    Mock::given(method("GET"))
        .and(path("/ambulances/nearby"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(empty)
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_api_token("t0ken");
    client
        .get_nearby_ambulances(here(), 15.0)
        .await
        .expect("authorized request should succeed");
}

#[tokio::test]
async fn fetch_nearby_over_http_tags_and_orders_records() {
    let server = MockServer::start().await;
    mount_professionals(
        &server,
        "doctor",
        serde_json::json!({
            "data": [
                { "id": "doctor1", "name": "Dr. A" },
                { "id": "doctor2", "name": "Dr. B" }
            ]
        }),
    )
    .await;
    mount_professionals(
        &server,
        "nurse",
        serde_json::json!({ "data": [ { "id": "nurse1", "name": "Nurse C" } ] }),
    )
    .await;
    mount_ambulances(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
    )
    .await;

    let client = test_client(&server.uri());
    let results = fetch_nearby(&client, here(), 15.0)
        .await
        .expect("aggregate should succeed");

    let all: Vec<(&str, Category)> = results
        .select(FilterSelection::All)
        .iter()
        .map(|t| (t.record.id.as_str(), t.category))
        .collect();
    assert_eq!(
        all,
        [
            ("doctor1", Category::Doctor),
            ("doctor2", Category::Doctor),
            ("nurse1", Category::Nurse),
        ]
    );
    assert!(results.select(FilterSelection::Ambulances).is_empty());
}

#[tokio::test]
async fn fetch_nearby_over_http_fails_when_one_lookup_fails() {
    let server = MockServer::start().await;
    mount_professionals(
        &server,
        "doctor",
        serde_json::json!({ "data": [ { "id": "doctor1", "name": "Dr. A" } ] }),
    )
    .await;
    mount_professionals(&server, "nurse", serde_json::json!({ "data": [] })).await;
    mount_ambulances(&server, ResponseTemplate::new(500)).await;

    let client = test_client(&server.uri());
    let err = fetch_nearby(&client, here(), 15.0)
        .await
        .expect_err("a failed lookup must fail the aggregate");
    assert_eq!(err.category, Category::Ambulance);
}
