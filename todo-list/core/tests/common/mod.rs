//! In-process stand-in for the remote task store.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use todo_list_core::Task;

#[derive(Debug, Default)]
struct StubData {
    tasks: Vec<Task>,
    next_id: u32,
    failing: Option<u16>,
    received: Vec<Value>,
}

/// A tiny `/api/tasks` server keeping its records in memory.
#[derive(Debug, Default)]
pub struct StubStore {
    data: Mutex<StubData>,
}

impl StubStore {
    pub fn with_tasks(tasks: Vec<Task>) -> Arc<Self> {
        let next_id = tasks.iter().map(|t| t.id.get()).max().unwrap_or(0) + 1;
        Arc::new(Self {
            data: Mutex::new(StubData {
                tasks,
                next_id,
                ..Default::default()
            }),
        })
    }

    /// Makes every following request answer with `status`.
    pub fn fail_with(&self, status: u16) {
        self.data.lock().unwrap().failing = Some(status);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.data.lock().unwrap().tasks.clone()
    }

    /// JSON bodies of all create and update requests, in arrival order.
    #[allow(dead_code)] // only the http store tests inspect request bodies
    pub fn received(&self) -> Vec<Value> {
        self.data.lock().unwrap().received.clone()
    }
}

fn failure(data: &StubData) -> Option<Response> {
    data.failing
        .map(|code| StatusCode::from_u16(code).unwrap().into_response())
}

async fn list_tasks(State(stub): State<Arc<StubStore>>) -> Response {
    let data = stub.data.lock().unwrap();
    if let Some(response) = failure(&data) {
        return response;
    }
    Json(data.tasks.clone()).into_response()
}

async fn get_task(State(stub): State<Arc<StubStore>>, Path(id): Path<u32>) -> Response {
    let data = stub.data.lock().unwrap();
    if let Some(response) = failure(&data) {
        return response;
    }
    match data.tasks.iter().find(|t| t.id.get() == id) {
        Some(task) => Json(task.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_task(State(stub): State<Arc<StubStore>>, Json(body): Json<Value>) -> Response {
    let mut data = stub.data.lock().unwrap();
    data.received.push(body.clone());
    if let Some(response) = failure(&data) {
        return response;
    }
    let task = Task::new(
        data.next_id,
        body["description"].as_str().unwrap_or_default(),
        body["is_completed"].as_bool().unwrap_or_default(),
    );
    data.next_id += 1;
    data.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn update_task(
    State(stub): State<Arc<StubStore>>,
    Path(id): Path<u32>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = stub.data.lock().unwrap();
    data.received.push(body.clone());
    if let Some(response) = failure(&data) {
        return response;
    }
    match data.tasks.iter_mut().find(|t| t.id.get() == id) {
        Some(task) => {
            if let Some(is_completed) = body["is_completed"].as_bool() {
                task.is_completed = is_completed;
            }
            Json(task.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_task(State(stub): State<Arc<StubStore>>, Path(id): Path<u32>) -> Response {
    let mut data = stub.data.lock().unwrap();
    if let Some(response) = failure(&data) {
        return response;
    }
    let before = data.tasks.len();
    data.tasks.retain(|t| t.id.get() != id);
    if data.tasks.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Serves `stub` on an ephemeral port and returns the API base URL.
pub async fn spawn(stub: Arc<StubStore>) -> String {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let app = Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", address)
}
