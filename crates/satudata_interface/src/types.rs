//! Request and response types exchanged with a [`Transport`](crate::Transport).

use derive_getters::Getters;
use satudata_error::{JsonError, SatuDataResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP method of a request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

/// A single request handed to a transport.
///
/// # Examples
///
/// ```
/// use satudata_interface::{HttpRequest, Method};
/// use serde_json::json;
///
/// let request = HttpRequest::builder()
///     .method(Method::Post)
///     .path("/opd")
///     .body(Some(json!({"nama_opd": "Dinas Kesehatan"})))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.method(), &Method::Post);
/// assert!(request.headers().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct HttpRequest {
    /// HTTP method.
    method: Method,
    /// Path relative to the backend base URL.
    path: String,
    /// Request headers.
    #[builder(default)]
    headers: BTreeMap<String, String>,
    /// JSON body, if any.
    #[builder(default)]
    body: Option<Value>,
}

impl HttpRequest {
    /// Creates a new request builder.
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// A body-less GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Merge headers into the request; existing keys are overwritten.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// Response returned by a transport.
///
/// The transport never interprets the status; callers decide what counts as
/// success.
///
/// # Examples
///
/// ```
/// use satudata_interface::HttpResponse;
///
/// let response = HttpResponse::new(200, br#"{"data": []}"#.to_vec());
/// assert!(response.is_success());
/// assert!(response.json().unwrap()["data"].is_array());
///
/// assert!(!HttpResponse::new(404, Vec::new()).is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct HttpResponse {
    /// Status code.
    status: u16,
    /// Raw body bytes.
    body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status code and raw body.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Create a response whose body is the serialized JSON value.
    pub fn from_json(status: u16, value: &Value) -> Self {
        Self {
            status,
            body: value.to_string().into_bytes(),
        }
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. An empty body decodes to `null`.
    pub fn json(&self) -> SatuDataResult<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            JsonError::new(format!("Failed to parse response body: {}", e)).into()
        })
    }
}
