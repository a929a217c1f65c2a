use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use reservo_api::{app, AppState};
use reservo_catalog::{Catalog, CatalogEntry};
use reservo_core::notify::NoopNotifier;
use reservo_store::DbClient;
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = DbClient::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let catalog = Catalog::new(vec![
        CatalogEntry::new("Projector", "RoomA"),
        CatalogEntry::new("Whiteboard", "RoomB"),
    ]);

    app(AppState::new(&db, catalog, Arc::new(NoopNotifier)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const ALICE: &str = "name=Alice&email=a%40x.com&password=pw1";
const ALICE_LOGIN: &str = "email=a%40x.com&password=pw1";

#[tokio::test]
async fn test_index_and_health() {
    let app = test_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Item Reservation App"));
    assert!(body.contains("View availability"));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_profile_twice() {
    let app = test_app().await;

    let (status, body) = post_form(&app, "/profile", ALICE).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User creation successful. Welcome, Alice!"));

    let (status, body) = post_form(&app, "/profile", "name=Bob&email=a%40x.com&password=other").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User creation failed. The email a@x.com is already taken."));
}

#[tokio::test]
async fn test_login_shows_nested_choice() {
    let app = test_app().await;
    post_form(&app, "/profile", ALICE).await;

    let (_, body) = post_form(&app, "/login", ALICE_LOGIN).await;
    assert!(body.contains("Welcome, Alice!"));
    assert!(body.contains("Reserve an item"));
    assert!(body.contains("action=\"/reservations\""));
    assert!(!body.contains("action=\"/requests\""));

    let (_, body) = post_form(&app, "/login", "email=a%40x.com&password=pw1&flow=request").await;
    assert!(body.contains("action=\"/requests\""));
    assert!(!body.contains("action=\"/reservations\""));

    let (status, body) = post_form(&app, "/login", "email=a%40x.com&password=wrong").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid email or password."));
    assert!(!body.contains("Welcome, Alice!"));
}

#[tokio::test]
async fn test_reserve_scenario() {
    let app = test_app().await;
    post_form(&app, "/profile", ALICE).await;
    post_form(&app, "/profile", "name=Bob&email=b%40x.com&password=pw2").await;

    let (_, body) = post_form(
        &app,
        "/reservations",
        "email=a%40x.com&password=pw1&item=Projector&location=RoomA&start_date=2024-03-01&end_date=2024-03-03",
    )
    .await;
    assert!(body.contains(
        "Reservation successful for Alice for Projector at RoomA from 2024-03-01 to 2024-03-03"
    ));

    let (_, body) = post_form(
        &app,
        "/reservations",
        "email=b%40x.com&password=pw2&item=Projector&location=RoomA&start_date=2024-03-02&end_date=2024-03-02",
    )
    .await;
    assert!(body.contains("Reservation failed for Bob for Projector at RoomA"));
    assert!(body.contains("The item is already reserved by someone else."));
}

#[tokio::test]
async fn test_reserve_rejects_bad_input() {
    let app = test_app().await;
    post_form(&app, "/profile", ALICE).await;

    let (_, body) = post_form(
        &app,
        "/reservations",
        "email=a%40x.com&password=pw1&item=Projector&location=RoomA&start_date=2024-03-05&end_date=2024-03-01",
    )
    .await;
    assert!(body.contains("The start date must not be after the end date."));

    let (_, body) = post_form(
        &app,
        "/reservations",
        "email=a%40x.com&password=bad&item=Projector&location=RoomA&start_date=2024-03-01&end_date=2024-03-01",
    )
    .await;
    assert!(body.contains("Invalid email or password."));
}

#[tokio::test]
async fn test_request_flow() {
    let app = test_app().await;
    post_form(&app, "/profile", ALICE).await;
    post_form(&app, "/profile", "name=Bob&email=b%40x.com&password=pw2").await;
    post_form(
        &app,
        "/reservations",
        "email=a%40x.com&password=pw1&item=Projector&location=RoomA&start_date=2024-03-01&end_date=2024-03-03",
    )
    .await;

    let (_, body) = post_form(
        &app,
        "/requests",
        "email=b%40x.com&password=pw2&item=Projector&location=RoomA&start_date=2024-03-02&end_date=2024-03-02",
    )
    .await;
    assert!(body.contains("The item is already reserved by Alice from 2024-03-01 to 2024-03-03."));
    assert!(body.contains("action=\"/requests/answer\""));

    let answer = "email=b%40x.com&password=pw2&item=Projector&location=RoomA&start_date=2024-03-02&end_date=2024-03-02";
    let (_, body) = post_form(&app, "/requests/answer", &format!("{answer}&answer=Y")).await;
    assert!(body.contains("Your request is sent to the user who reserved the item."));

    let (_, body) = post_form(&app, "/requests/answer", &format!("{answer}&answer=N")).await;
    assert!(body.contains("Your request is cancelled."));

    let (_, body) = post_form(&app, "/requests/answer", &format!("{answer}&answer=x")).await;
    assert!(body.contains("Invalid input. Please enter Y or N."));

    let (_, body) = post_form(
        &app,
        "/requests",
        "email=b%40x.com&password=pw2&item=Whiteboard&location=RoomB&start_date=2024-03-02&end_date=2024-03-02",
    )
    .await;
    assert!(body.contains("The item is available for the date range you selected."));
    assert!(!body.contains("action=\"/requests/answer\""));
}

#[tokio::test]
async fn test_availability_board_for_today() {
    let app = test_app().await;
    post_form(&app, "/profile", ALICE).await;

    let today = chrono::Local::now().date_naive();
    post_form(
        &app,
        "/reservations",
        &format!("email=a%40x.com&password=pw1&item=Projector&location=RoomA&start_date={today}&end_date={today}"),
    )
    .await;

    let (status, body) = get(&app, "/availability").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<tr><td>Projector</td><td>RoomA</td><td>false</td></tr>"));
    assert!(body.contains("<tr><td>Whiteboard</td><td>RoomB</td><td>true</td></tr>"));

    let (_, json) = get(&app, "/v1/availability").await;
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(rows[0]["item"], "Projector");
    assert_eq!(rows[0]["available"], false);
    assert_eq!(rows[1]["available"], true);
}
