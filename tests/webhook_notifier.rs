#![cfg(not(target_arch = "wasm32"))]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use textile_storefront::webhook::{FormSubmission, SubmissionKind, WebhookNotifier};

type Received = Arc<Mutex<Vec<Value>>>;

async fn accept(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
    received.lock().unwrap().push(body);
    StatusCode::OK
}

async fn fail() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "workflow crashed")
}

async fn spawn_webhook() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hook", post(accept))
        .route("/broken", post(fail))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), received)
}

fn quote() -> FormSubmission {
    FormSubmission {
        kind: SubmissionKind::Quote,
        name: "Taller Norte".to_string(),
        email: "compras@tallernorte.example".to_string(),
        company: "Taller Norte SRL".to_string(),
        products: vec!["Lino crudo x 50m".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn delivered_submission_reports_true() {
    let (base, received) = spawn_webhook().await;
    let notifier = WebhookNotifier::new(format!("{}/hook", base));

    assert!(notifier.notify(&quote()).await);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["type"], "quote");
    assert_eq!(received[0]["company"], "Taller Norte SRL");
    assert_eq!(received[0]["products"][0], "Lino crudo x 50m");
    assert!(received[0]["submitted_at"].is_string());
}

#[tokio::test]
async fn server_error_reports_false() {
    let (base, _) = spawn_webhook().await;
    let notifier = WebhookNotifier::new(format!("{}/broken", base));
    assert!(!notifier.notify(&quote()).await);
}

#[tokio::test]
async fn unreachable_endpoint_reports_false() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = WebhookNotifier::new(format!("http://{}/hook", addr));
    assert!(!notifier.notify(&quote()).await);
}

#[tokio::test]
async fn missing_url_reports_false() {
    let notifier = WebhookNotifier::new("");
    assert!(!notifier.notify(&quote()).await);
}
