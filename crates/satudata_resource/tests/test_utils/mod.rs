//! Test utilities for resource controller tests.
//!
//! Provides a scripted transport that records every request.

#![allow(dead_code)]

use async_trait::async_trait;
use satudata_core::{Resource, ResourceEndpoints};
use satudata_error::{HttpError, SatuDataResult};
use satudata_interface::{HttpRequest, HttpResponse, Method, Transport};
use satudata_resource::{Field, ResourceSpec};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with a status and JSON body.
    Json(u16, Value),
    /// Respond with a status and raw body text.
    Raw(u16, String),
    /// Fail without a response.
    NetworkError(String),
    /// Wait this many milliseconds, then give the inner reply.
    Delayed(u64, Box<MockReply>),
}

/// Transport answering from per-route queues.
///
/// The last reply of a route is repeated once its queue is drained.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<MockReply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for a route.
    pub fn on(self, method: Method, path: &str, reply: MockReply) -> Self {
        self.push(method, path, reply);
        self
    }

    /// Queue a reply for a route on a shared transport.
    pub fn push(&self, method: Method, path: &str, reply: MockReply) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for a route.
    pub fn call_count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| *r.method() == method && r.path() == path)
            .count()
    }

    /// Total number of requests received.
    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> SatuDataResult<HttpResponse> {
        let key = (*request.method(), request.path().clone());
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut routes = self.routes.lock().unwrap();
            let queue = routes.get_mut(&key);
            match queue {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        let reply = match reply {
            Some(MockReply::Delayed(millis, inner)) => {
                tokio::time::sleep(Duration::from_millis(millis)).await;
                Some(*inner)
            }
            other => other,
        };

        match reply {
            Some(MockReply::Json(status, body)) => Ok(HttpResponse::from_json(status, &body)),
            Some(MockReply::Raw(status, body)) => Ok(HttpResponse::new(status, body.into_bytes())),
            Some(MockReply::NetworkError(message)) => Err(HttpError::new(message).into()),
            Some(MockReply::Delayed(..)) => Err(HttpError::new("nested delay").into()),
            None => Ok(HttpResponse::from_json(404, &json!({"message": "Not Found"}))),
        }
    }
}

/// Staff account fixture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for Account {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

pub fn account_endpoints() -> ResourceEndpoints {
    ResourceEndpoints::new("/akun")
        .with_create("/akun")
        .with_update("/akun/{id}")
        .with_delete("/akun/{id}")
        .with_status("/akun/{id}/status")
}

pub fn account_spec() -> ResourceSpec<Account> {
    ResourceSpec::new("akun", account_endpoints())
        .search(Field::text("full_name", |a: &Account| Some(a.full_name.clone())))
        .search(Field::text("email", |a: &Account| Some(a.email.clone())))
        .filter(Field::text("status", |a: &Account| {
            Some(if a.is_active { "active" } else { "inactive" }.to_string())
        }))
        .timestamp(|a: &Account| a.created_at.clone())
}

/// Five accounts: three active, two inactive.
pub fn accounts_json() -> Value {
    json!([
        {"id": 1, "full_name": "Budi Santoso", "email": "budi@kab.go.id", "is_active": true, "created_at": "2024-02-01 08:00:00"},
        {"id": 2, "full_name": "Siti Aminah", "email": "siti@kab.go.id", "is_active": false, "created_at": "2023-06-11 10:00:00"},
        {"id": 3, "full_name": "Agus Salim", "email": "agus@kab.go.id", "is_active": true, "created_at": "2024-05-20T01:00:00.000000Z"},
        {"id": 4, "full_name": "Dewi Lestari", "email": "dewi@kab.go.id", "is_active": true},
        {"id": 5, "full_name": "Rudi Hartono", "email": "rudi@kab.go.id", "is_active": false, "created_at": "2022-01-01"}
    ])
}
