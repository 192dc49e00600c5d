//! Integration tests for the investments HTTP client against an in-process backend.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use investment_planner_connect::InvestmentApiClient;
use investment_planner_core::errors::Error;
use investment_planner_core::investments::{Investment, InvestmentGateway};

#[derive(Clone, Default)]
struct Backend {
    records: Arc<Mutex<Vec<Investment>>>,
    next_id: Arc<Mutex<i64>>,
    received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Deserialize)]
struct IdQuery {
    id: i64,
}

async fn list_investments(State(backend): State<Backend>) -> Json<Vec<Investment>> {
    Json(backend.records.lock().unwrap().clone())
}

async fn get_investment(
    State(backend): State<Backend>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Investment>, StatusCode> {
    backend
        .records
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.investment_id == query.id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_investment(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> Result<Json<Investment>, StatusCode> {
    backend.received.lock().unwrap().push(body.clone());
    let mut investment: Investment =
        serde_json::from_value(body).map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut next_id = backend.next_id.lock().unwrap();
    *next_id += 1;
    investment.investment_id = *next_id;
    backend.records.lock().unwrap().push(investment.clone());
    Ok(Json(investment))
}

async fn update_investment(
    State(backend): State<Backend>,
    Json(investment): Json<Investment>,
) -> Result<Json<Investment>, StatusCode> {
    let mut records = backend.records.lock().unwrap();
    let slot = records
        .iter_mut()
        .find(|r| r.investment_id == investment.investment_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = investment.clone();
    Ok(Json(investment))
}

async fn delete_investment(
    State(backend): State<Backend>,
    Query(query): Query<IdQuery>,
) -> StatusCode {
    backend
        .records
        .lock()
        .unwrap()
        .retain(|r| r.investment_id != query.id);
    StatusCode::OK
}

fn backend_router(backend: Backend) -> Router {
    Router::new()
        .route("/get-all-investments", get(list_investments))
        .route("/get-Investment-by-id", get(get_investment))
        .route("/create-investment", post(create_investment))
        .route("/update-investment", put(update_investment))
        .route("/delete-Investment", delete(delete_investment))
        .with_state(backend)
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fund_a() -> Investment {
    Investment {
        investment_id: 0,
        investment_name: "Fund A".to_string(),
        initial_investment_amount: 1000.0,
        investment_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        current_value: 1200.0,
        investor_id: 7,
    }
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let backend = Backend::default();
    let url = spawn(backend_router(backend.clone())).await;
    let client = InvestmentApiClient::new(&url).unwrap();

    let created = client.create(fund_a()).await.unwrap();
    assert_eq!(created.investment_id, 1);

    let received = backend.received.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![json!({
            "investmentId": 0,
            "investmentName": "Fund A",
            "initialInvestmentAmount": 1000.0,
            "investmentStartDate": "2024-01-01",
            "currentValue": 1200.0,
            "investorId": 7
        })]
    );

    let all = client.list_all().await.unwrap();
    assert_eq!(
        all,
        vec![Investment {
            investment_id: 1,
            ..fund_a()
        }]
    );
}

#[tokio::test]
async fn get_update_and_delete() {
    let backend = Backend::default();
    let url = spawn(backend_router(backend.clone())).await;
    let client = InvestmentApiClient::new(&url).unwrap();
    let created = client.create(fund_a()).await.unwrap();

    let fetched = client.get_by_id(created.investment_id).await.unwrap();
    assert_eq!(fetched, created);

    let changed = Investment {
        current_value: 1500.0,
        ..fetched
    };
    let updated = client.update(changed.clone()).await.unwrap();
    assert_eq!(updated, changed);
    assert_eq!(client.list_all().await.unwrap(), vec![changed]);

    let deleted = client.delete_by_id(created.investment_id).await.unwrap();
    assert_eq!(deleted, Value::Null);
    assert!(client.list_all().await.unwrap().is_empty());

    // Deleting again is still a success for this backend.
    assert!(client.delete_by_id(created.investment_id).await.is_ok());
}

#[tokio::test]
async fn missing_record_is_a_network_error() {
    let url = spawn(backend_router(Backend::default())).await;
    let client = InvestmentApiClient::new(&url).unwrap();

    let err = client.get_by_id(99).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Network response was not ok");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let router = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable")
    });
    let url = spawn(router).await;
    let client = InvestmentApiClient::new(&url).unwrap();

    match client.list_all().await {
        Err(Error::Network { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("expected network error, got {:?}", other),
    }
    assert!(matches!(
        client.delete_by_id(1).await,
        Err(Error::Network { status: 500, .. })
    ));
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let router = Router::new()
        .route("/get-all-investments", get(|| async { "not json" }))
        .route(
            "/delete-Investment",
            delete(|| async { Json(json!({ "deleted": true })) }),
        );
    let url = spawn(router).await;
    let client = InvestmentApiClient::new(&url).unwrap();

    assert!(matches!(client.list_all().await, Err(Error::Decode(_))));
    assert_eq!(
        client.delete_by_id(4).await.unwrap(),
        json!({ "deleted": true })
    );
}

#[tokio::test]
async fn truncated_error_body_is_still_a_network_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        // Promise more body than is sent, then hang up.
        let _ = socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\npartial")
            .await;
    });
    let client = InvestmentApiClient::new(&format!("http://{}", addr)).unwrap();

    let err = client.list_all().await.unwrap_err();
    assert_eq!(err.status(), Some(503), "{:?}", err);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = InvestmentApiClient::new(&format!("http://{}", addr)).unwrap();

    let err = client.list_all().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{:?}", err);
    assert_eq!(err.status(), None);
}
