//! Scripted doubles for exercising clients and views without a network.

use crate::error::ApiError;
use crate::notify::Notifier;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

struct Route {
    method: String,
    path: String,
    replies: VecDeque<Result<ApiResponse, ApiError>>,
}

#[derive(Default)]
struct StubState {
    routes: Vec<Route>,
    requests: Vec<ApiRequest>,
}

/// Answers requests from scripted replies, matched by method and URL path suffix.
///
/// Replies for a route are consumed in order; the last one repeats. Unscripted
/// routes answer 404.
#[derive(Clone, Default)]
pub struct StubTransport {
    state: Arc<Mutex<StubState>>,
    gate: Arc<Mutex<Option<Arc<Semaphore>>>>,
}

/// Holds stubbed replies until permits are released.
#[derive(Clone)]
pub struct StubGate {
    semaphore: Arc<Semaphore>,
}

impl StubGate {
    pub fn release(&self, replies: usize) {
        self.semaphore.add_permits(replies);
    }
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, path: &str, reply: Result<ApiResponse, ApiError>) {
        let mut state = self.state.lock().unwrap();
        let method = method.to_uppercase();
        match state.routes.iter_mut().find(|r| r.method == method && r.path == path) {
            Some(route) => route.replies.push_back(reply),
            None => {
                state.routes.push(Route {
                    method,
                    path: path.to_string(),
                    replies: VecDeque::from(vec![reply]),
                });
                // Longest path first so "/movies/1/rating" is tried before "/movies/1"
                state.routes.sort_by(|a, b| b.path.len().cmp(&a.path.len()));
            }
        }
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        let response = ApiResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        };
        self.respond(method, path, Ok(response));
    }

    pub fn respond_status(&self, method: &str, path: &str, status: u16) {
        self.respond(method, path, Err(ApiError::from_status(status, path)));
    }

    pub fn respond_error(&self, method: &str, path: &str, error: ApiError) {
        self.respond(method, path, Err(error));
    }

    /// Every later reply waits for a permit from the returned gate
    pub fn hold(&self) -> StubGate {
        let semaphore = Arc::new(Semaphore::new(0));
        *self.gate.lock().unwrap() = Some(Arc::clone(&semaphore));
        StubGate { semaphore }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method.as_str().eq_ignore_ascii_case(method) && r.url.ends_with(path))
            .count()
    }

    fn next_reply(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        let method = request.method.as_str().to_uppercase();
        let route = state
            .routes
            .iter_mut()
            .find(|r| r.method == method && request.url.ends_with(&r.path));

        match route {
            Some(route) if route.replies.len() > 1 => route.replies.pop_front().unwrap(),
            Some(route) => route.replies[0].clone(),
            None => Err(ApiError::from_status(404, &request.url)),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.state.lock().unwrap().requests.push(request.clone());

        let gate = self.gate.lock().unwrap().clone();
        if let Some(semaphore) = gate {
            if let Ok(permit) = semaphore.acquire().await {
                permit.forget();
            }
        }

        self.next_reply(&request)
    }
}

/// Collects notifications instead of showing them.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
