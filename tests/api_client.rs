//! Integration tests for the employee role API client, driven against an
//! in-process fake of the HR REST API.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use rh_admin::client::ApiClient;
use rh_admin::config::ApiConfig;
use rh_admin::error::AppError;
use rh_admin::models::{CreateEmployeeRole, UpdateEmployeeRole};

const PER_PAGE: usize = 15;

/// In-memory record store behind the fake API.
#[derive(Default)]
struct Store {
    next_id: i64,
    records: BTreeMap<i64, Value>,
}

type SharedStore = Arc<Mutex<Store>>;

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    search: String,
    #[serde(default = "default_page")]
    page: usize,
}

fn default_page() -> usize {
    1
}

async fn list_roles(State(store): State<SharedStore>, Query(params): Query<ListParams>) -> Json<Value> {
    let store = store.lock().unwrap();
    let matching: Vec<Value> = store
        .records
        .values()
        .filter(|r| {
            params.search.is_empty()
                || r["employee_id"].to_string().contains(&params.search)
                || r["role_id"].to_string().contains(&params.search)
        })
        .cloned()
        .collect();

    let last_page = matching.len().div_ceil(PER_PAGE).max(1);
    let page = params.page.max(1);
    let data: Vec<Value> = matching
        .iter()
        .skip((page - 1) * PER_PAGE)
        .take(PER_PAGE)
        .cloned()
        .collect();

    Json(json!({
        "data": data,
        "meta": {
            "current_page": page,
            "last_page": last_page,
            "total": matching.len(),
            "per_page": PER_PAGE,
        }
    }))
}

async fn get_role(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let store = store.lock().unwrap();
    store
        .records
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_role(
    State(store): State<SharedStore>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    let record = json!({
        "id": id,
        "employee_id": body["employee_id"],
        "role_id": body["role_id"],
        "created_at": Utc::now(),
        "updated_at": Utc::now(),
    });
    store.records.insert(id, record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn update_role(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = store.lock().unwrap();
    let record = store.records.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    record["employee_id"] = body["employee_id"].clone();
    record["role_id"] = body["role_id"].clone();
    record["updated_at"] = json!(Utc::now());
    Ok(Json(record.clone()))
}

async fn delete_role(State(store): State<SharedStore>, Path(id): Path<i64>) -> StatusCode {
    let mut store = store.lock().unwrap();
    if store.records.remove(&id).is_some() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Start the fake API on an ephemeral port and return a client pointed at it.
async fn spawn_fake_api() -> ApiClient {
    let store = SharedStore::default();
    let router = Router::new()
        .route("/api/employee_roles", get(list_roles).post(create_role))
        .route(
            "/api/employee_roles/{id}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn list_on_empty_store() {
    let client = spawn_fake_api().await;

    let page = client.list("", 1).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.last_page, 1);
}

#[tokio::test]
async fn create_round_trips_submitted_values() {
    let client = spawn_fake_api().await;

    let created = client
        .create(&CreateEmployeeRole {
            employee_id: 7,
            role_id: 2,
        })
        .await
        .unwrap();

    assert_eq!(created.employee_id, 7);
    assert_eq!(created.role_id, 2);
    assert!(created.id > 0);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn full_lifecycle() {
    let client = spawn_fake_api().await;

    // Create
    let created = client
        .create(&CreateEmployeeRole {
            employee_id: 7,
            role_id: 2,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    // Get returns the same record
    let fetched = client.get(1).await.unwrap();
    assert_eq!(fetched.employee_id, 7);
    assert_eq!(fetched.role_id, 2);

    // Update changes only the mutable fields
    let updated = client
        .update(
            1,
            &UpdateEmployeeRole {
                employee_id: 7,
                role_id: 5,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.role_id, 5);

    let refetched = client.get(1).await.unwrap();
    assert_eq!(refetched.role_id, 5);
    assert_eq!(refetched.id, created.id);
    assert_eq!(refetched.created_at, created.created_at);

    // Delete, then get fails with the not-found kind
    assert!(client.delete(1).await.unwrap());
    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let client = spawn_fake_api().await;

    let err = client.get(999).await.unwrap_err();
    match err {
        AppError::NotFound(message) => assert_eq!(message, "Rôle employé introuvable"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn delete_missing_record_fails() {
    let client = spawn_fake_api().await;

    let err = client.delete(999).await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
}

#[tokio::test]
async fn list_paginates_in_server_order() {
    let client = spawn_fake_api().await;

    for i in 1..=20 {
        client
            .create(&CreateEmployeeRole {
                employee_id: i,
                role_id: 1,
            })
            .await
            .unwrap();
    }

    let first = client.list("", 1).await.unwrap();
    assert_eq!(first.data.len(), 15);
    assert_eq!(first.meta.current_page, 1);
    assert_eq!(first.meta.last_page, 2);
    assert_eq!(first.data[0].employee_id, 1);

    let second = client.list("", 2).await.unwrap();
    assert_eq!(second.data.len(), 5);
    assert_eq!(second.meta.current_page, 2);
}

#[tokio::test]
async fn list_search_filters_records() {
    let client = spawn_fake_api().await;

    client
        .create(&CreateEmployeeRole {
            employee_id: 7,
            role_id: 1,
        })
        .await
        .unwrap();
    client
        .create(&CreateEmployeeRole {
            employee_id: 42,
            role_id: 1,
        })
        .await
        .unwrap();

    let page = client.list("42", 1).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].employee_id, 42);
}
