#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use campus_portal::infrastructure::http::HttpCatalogRepository;
use campus_portal::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Canned catalog API: every path answers with a fixed status and JSON body,
/// unknown paths answer 404.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    routes: HashMap<String, (StatusCode, Value)>,
}

/// A running [`FakeCatalog`].
pub struct RunningCatalog {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

struct Fixture {
    routes: HashMap<String, (StatusCode, Value)>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` with 200 at `path` (relative to `/api`, percent-encoded).
    pub fn with(self, path: &str, body: Value) -> Self {
        self.with_status(path, StatusCode::OK, body)
    }

    pub fn with_status(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.routes
            .insert(format!("/api/{}", path.trim_start_matches('/')), (status, body));
        self
    }

    /// Makes `path` answer 500.
    pub fn failing(self, path: &str) -> Self {
        self.with_status(
            path,
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"success": false, "message": "database unavailable"}),
        )
    }

    pub async fn spawn(self) -> RunningCatalog {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let fixture = Arc::new(Fixture {
            routes: self.routes,
            requests: requests.clone(),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(serve_fixture).with_state(fixture);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningCatalog {
            base_url: format!("http://{}/api", addr),
            requests,
        }
    }
}

impl RunningCatalog {
    pub fn state(&self) -> AppState {
        AppState::new(self.repository())
    }

    pub fn repository(&self) -> HttpCatalogRepository {
        HttpCatalogRepository::connect(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn was_requested(&self, path: &str) -> bool {
        let path = format!("/api/{}", path.trim_start_matches('/'));
        self.requests().iter().any(|p| *p == path)
    }
}

async fn serve_fixture(State(fixture): State<Arc<Fixture>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    fixture.requests.lock().unwrap().push(path.clone());

    match fixture.routes.get(&path) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "not found"}))).into_response(),
    }
}

/// State whose catalog API refuses connections.
pub async fn unreachable_state() -> AppState {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let repository =
        HttpCatalogRepository::connect(&format!("http://{}/api", addr), Duration::from_secs(2))
            .unwrap();
    AppState::new(repository)
}

pub fn categories() -> Value {
    json!([
        {"_id": "c1", "name": "Engineering", "description": "Four-year programmes"},
        {"_id": "c2", "name": "Management"}
    ])
}

pub fn departments() -> Value {
    json!({
        "success": true,
        "data": [
            {"_id": "d1", "name": "Computer Science"},
            {"_id": "d2", "name": "Physics", "description": "Pure and applied"}
        ]
    })
}

/// Courses in mixed reference shapes; `k4` sits in Physics.
pub fn courses() -> Value {
    json!({
        "success": true,
        "data": [
            {
                "_id": "k1",
                "name": "Data Structures",
                "categoryId": {"_id": "c1", "name": "Engineering"},
                "departmentId": "d1",
                "feeStructure": {"registrationFee": 500, "fullFee": 12000}
            },
            {"_id": "k2", "name": "Operating Systems", "categoryId": "c1", "departmentId": {"_id": "d1"}},
            {"_id": "k3", "name": "Compilers", "categoryId": "c1", "departmentId": "d1"},
            {"_id": "k4", "name": "Optics", "categoryId": "c1", "departmentId": "d2"},
            {"_id": "k5", "name": "Databases", "categoryId": "c2", "departmentId": "d1"},
            {"_id": "k6", "name": "Networks", "categoryId": "c2", "departmentId": "d1"}
        ]
    })
}

pub fn faculty() -> Value {
    json!([
        {"_id": "f1", "name": "Dr. Rao", "department": "Computer Science", "designation": "Professor"},
        {"_id": "f2", "name": "Dr. Iyer", "department": "Physics"},
        {"_id": "f3", "name": "Dr. Sen", "department": "computer science"}
    ])
}

pub fn course(id: &str) -> Option<Value> {
    let courses = courses();
    courses["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["_id"] == id)
        .cloned()
}

/// The full catalog with list endpoints and every course by id.
pub fn catalog() -> FakeCatalog {
    let mut catalog = FakeCatalog::new()
        .with("categories", categories())
        .with("courses", courses())
        .with("departments", departments())
        .with("faculty", faculty());

    for id in ["k1", "k2", "k3", "k4", "k5", "k6"] {
        let body = json!({"success": true, "data": course(id).unwrap()});
        catalog = catalog.with(&format!("courses/{}", id), body);
    }

    catalog
}
