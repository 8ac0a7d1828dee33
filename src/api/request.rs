use serde_json::Value;

/// HTTP method used by backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single request to a named backend endpoint.
///
/// Created per attempt and dropped once the response has been handed back.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/api/explain`.
    pub path: String,
    /// Query parameters, appended in order.
    pub params: Vec<(String, String)>,
    /// JSON body for POST endpoints.
    pub body: Option<Value>,
}

impl EndpointRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            params: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }
}
