use chrono::{DateTime, Utc};

use crate::api::EndpointError;

/// Lifecycle of a view's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Constructed, nothing requested yet. `data` holds the default.
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last applied response succeeded.
    Ready,
    /// The last applied response failed; `data` is stale or the default.
    Failed,
}

impl ViewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ViewStatus::Idle => "idle",
            ViewStatus::Loading => "loading",
            ViewStatus::Ready => "ready",
            ViewStatus::Failed => "failed",
        }
    }
}

/// Snapshot of one view: always-present data plus request bookkeeping.
///
/// `data` is never absent: it starts as the caller's default and is only
/// replaced by a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub data: T,
    pub status: ViewStatus,
    pub last_updated: Option<DateTime<Utc>>,
    pub error: Option<EndpointError>,
}

impl<T> ViewState<T> {
    pub fn new(default: T) -> Self {
        Self {
            data: default,
            status: ViewStatus::Idle,
            last_updated: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// `Idle | Ready | Failed → Loading`. Data and error are left untouched
    /// so the stale value keeps rendering while the request runs.
    pub(crate) fn start_loading(&mut self) {
        self.status = ViewStatus::Loading;
    }

    /// `Loading → Ready | Failed`.
    pub(crate) fn resolve(&mut self, result: Result<T, EndpointError>, now: DateTime<Utc>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.status = ViewStatus::Ready;
                self.last_updated = Some(now);
                self.error = None;
            }
            Err(err) => {
                self.status = ViewStatus::Failed;
                self.error = Some(err);
            }
        }
    }
}
