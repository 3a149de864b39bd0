#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use catalogo_admin::configuration::{
    Application, BackendSettings, NotificationSettings, Settings, ViewSettings,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
    fail_list: bool,
    malformed_list: bool,
    fail_writes: bool,
    write_delay: Duration,
    delete_status: StatusCode,
    requests: Vec<Recorded>,
}

/// In-process stand-in for the REST backend, served on an ephemeral port.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
    pub url: Url,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Inner {
            collections: HashMap::new(),
            next_id: 1,
            fail_list: false,
            malformed_list: false,
            fail_writes: false,
            write_delay: Duration::ZERO,
            delete_status: StatusCode::OK,
            requests: vec![],
        }));
        let app = Router::new()
            .route("/:collection", get(list).post(create))
            .route("/:collection/:id", axum::routing::put(update).delete(remove))
            .with_state(inner.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend failed");
        });
        Self {
            inner,
            url: Url::parse(&format!("http://{addr}")).expect("Failed to parse url"),
        }
    }

    pub fn seed(&self, collection: &str, rows: Value) {
        let rows = rows.as_array().cloned().expect("Seed must be an array");
        let mut inner = self.inner.lock().unwrap();
        let max_id = rows
            .iter()
            .filter_map(|row| row["id"].as_i64())
            .max()
            .unwrap_or(0);
        inner.next_id = inner.next_id.max(max_id + 1);
        inner.collections.insert(collection.to_string(), rows);
    }

    pub fn fail_list(&self) {
        self.inner.lock().unwrap().fail_list = true;
    }

    pub fn malformed_list(&self) {
        self.inner.lock().unwrap().malformed_list = true;
    }

    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().fail_writes = true;
    }

    /// Holds every PUT this long before answering.
    pub fn delay_writes(&self, delay: Duration) {
        self.inner.lock().unwrap().write_delay = delay;
    }

    pub fn delete_status(&self, status: StatusCode) {
        self.inner.lock().unwrap().delete_status = status;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

type Shared = Arc<Mutex<Inner>>;

async fn list(State(inner): State<Shared>, Path(collection): Path<String>) -> Response {
    let mut inner = inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: Method::GET,
        path: format!("/{collection}"),
        body: None,
    });
    if inner.fail_list {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if inner.malformed_list {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    let rows = inner.collections.get(&collection).cloned().unwrap_or_default();
    Json(Value::Array(rows)).into_response()
}

async fn create(
    State(inner): State<Shared>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: Method::POST,
        path: format!("/{collection}"),
        body: Some(body.clone()),
    });
    if inner.fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let id = inner.next_id;
    inner.next_id += 1;
    let mut row = body;
    row["id"] = Value::from(id);
    inner
        .collections
        .entry(collection)
        .or_default()
        .push(row.clone());
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn update(
    State(inner): State<Shared>,
    Path((collection, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Response {
    let delay = inner.lock().unwrap().write_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let mut inner = inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: Method::PUT,
        path: format!("/{collection}/{id}"),
        body: Some(body.clone()),
    });
    if inner.fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let rows = inner.collections.entry(collection).or_default();
    match rows.iter_mut().find(|row| row["id"].as_i64() == Some(id)) {
        Some(row) => {
            *row = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn remove(State(inner): State<Shared>, Path((collection, id)): Path<(String, i64)>) -> Response {
    let mut inner = inner.lock().unwrap();
    inner.requests.push(Recorded {
        method: Method::DELETE,
        path: format!("/{collection}/{id}"),
        body: None,
    });
    let status = inner.delete_status;
    if status.is_success() {
        if let Some(rows) = inner.collections.get_mut(&collection) {
            rows.retain(|row| row["id"].as_i64() != Some(id));
        }
    }
    status.into_response()
}

pub fn settings_for(base_url: &Url) -> Settings {
    Settings {
        application: Application {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        backend: BackendSettings {
            base_url: base_url.clone(),
            request_timeout: Duration::from_secs(5),
        },
        notifications: NotificationSettings {
            life: Duration::from_secs(60),
            capacity: 32,
            sweep_interval: Duration::from_millis(10),
        },
        views: ViewSettings { page_size: 10 },
    }
}

/// A base url nothing listens on.
pub fn unreachable_url() -> Url {
    Url::parse("http://127.0.0.1:1").expect("Failed to parse url")
}

pub fn soda() -> Value {
    serde_json::json!({
        "id": 1,
        "nombre": "Soda",
        "descripcion": "Bebida",
        "precio": 1.5,
        "categoria_id": 1
    })
}
