//! Single-flight view state machine.
//!
//! A [`DataView`] owns one [`ViewState`] and the source it refreshes from.
//! Every accepted request gets a sequence number; a response is applied only
//! when its number is still the newest issued and the view is still alive.
//! Everything else is dropped on the floor.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::{EndpointError, EndpointResult};
use crate::view::source::DataSource;
use crate::view::state::{ViewState, ViewStatus};

/// Published after every applied `Ready`/`Failed` transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEvent {
    pub view: String,
    pub seq: u64,
    pub status: ViewStatus,
    pub error: Option<EndpointError>,
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response was applied and the view moved to this status.
    Applied(ViewStatus),
    /// A newer request was issued after this one; response ignored.
    Stale,
    /// The view was torn down; response ignored.
    TornDown,
}

/// Outcome of [`DataView::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A request was already in flight or the view is torn down.
    Rejected,
    Completed(Completion),
}

/// An accepted request: its sequence number and the source to fetch from.
pub struct Ticket<T> {
    pub seq: u64,
    source: Arc<dyn DataSource<T>>,
}

impl<T: 'static> Ticket<T> {
    pub fn fetch(&self) -> crate::view::source::SourceFuture<T> {
        self.source.fetch()
    }
}

struct ViewInner<T> {
    state: ViewState<T>,
    source: Arc<dyn DataSource<T>>,
    /// Highest sequence number issued so far.
    issued: u64,
    in_flight: Option<u64>,
    /// Background task fetching `in_flight`, if it was spawned.
    task: Option<JoinHandle<()>>,
    torn_down: bool,
    events: Option<UnboundedSender<ViewEvent>>,
}

struct Shared<T> {
    name: String,
    inner: Mutex<ViewInner<T>>,
}

/// Cloneable handle to one view's state machine.
pub struct DataView<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for DataView<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> DataView<T> {
    /// Create a view in `Idle` with `default` as its data.
    pub fn new(name: impl Into<String>, default: T, source: impl DataSource<T>) -> Self {
        Self::from_shared_source(name, default, Arc::new(source))
    }

    pub fn from_shared_source(
        name: impl Into<String>,
        default: T,
        source: Arc<dyn DataSource<T>>,
    ) -> Self {
        let inner = ViewInner {
            state: ViewState::new(default),
            source,
            issued: 0,
            in_flight: None,
            task: None,
            torn_down: false,
            events: None,
        };
        Self {
            shared: Arc::new(Shared {
                name: name.into(),
                inner: Mutex::new(inner),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Route applied transitions to `sink`.
    pub fn set_event_sink(&self, sink: UnboundedSender<ViewEvent>) {
        self.shared.inner.lock().events = Some(sink);
    }

    pub fn snapshot(&self) -> ViewState<T> {
        self.shared.inner.lock().state.clone()
    }

    /// Borrow the current state without cloning the data.
    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        f(&self.shared.inner.lock().state)
    }

    pub fn status(&self) -> ViewStatus {
        self.shared.inner.lock().state.status
    }

    pub fn in_flight(&self) -> bool {
        self.shared.inner.lock().in_flight.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.inner.lock().torn_down
    }

    /// Highest sequence number issued so far (0 before the first request).
    pub fn issued(&self) -> u64 {
        self.shared.inner.lock().issued
    }

    /// Accept a new request unless one is already in flight.
    pub fn begin(&self) -> Option<Ticket<T>> {
        self.issue(false)
    }

    /// Accept a new request, abandoning any in-flight one.
    pub fn begin_superseding(&self) -> Option<Ticket<T>> {
        self.issue(true)
    }

    fn issue(&self, supersede: bool) -> Option<Ticket<T>> {
        let mut inner = self.shared.inner.lock();
        if inner.torn_down {
            tracing::debug!(view = %self.shared.name, "Request rejected: view torn down");
            return None;
        }
        if let Some(seq) = inner.in_flight {
            if !supersede {
                tracing::debug!(view = %self.shared.name, in_flight = seq, "Request dropped: fetch in flight");
                return None;
            }
            if let Some(task) = inner.task.take() {
                task.abort();
            }
            tracing::debug!(view = %self.shared.name, abandoned = seq, "Superseding in-flight request");
        }

        inner.issued += 1;
        let seq = inner.issued;
        inner.in_flight = Some(seq);
        inner.state.start_loading();
        tracing::debug!(view = %self.shared.name, seq, "Request issued");

        Some(Ticket {
            seq,
            source: Arc::clone(&inner.source),
        })
    }

    /// Apply the response for `seq` if it is still the newest request.
    pub fn complete(&self, seq: u64, result: EndpointResult<T>) -> Completion {
        let mut inner = self.shared.inner.lock();
        if inner.torn_down {
            tracing::debug!(view = %self.shared.name, seq, "Response discarded: view torn down");
            return Completion::TornDown;
        }
        if seq != inner.issued {
            tracing::debug!(view = %self.shared.name, seq, newest = inner.issued, "Stale response discarded");
            return Completion::Stale;
        }

        inner.in_flight = None;
        inner.task = None;
        inner.state.resolve(result, Utc::now());
        let status = inner.state.status;
        let error = inner.state.error.clone();

        match &error {
            Some(err) => tracing::warn!(
                view = %self.shared.name,
                seq,
                kind = %err.kind,
                error = %err.message,
                "View refresh failed, keeping last data"
            ),
            None => tracing::debug!(view = %self.shared.name, seq, "View refreshed"),
        }

        let sink = inner.events.clone();
        drop(inner);

        if let Some(sink) = sink {
            let _ = sink.send(ViewEvent {
                view: self.shared.name.clone(),
                seq,
                status,
                error,
            });
        }

        Completion::Applied(status)
    }

    /// Start a background refresh. Returns `false` if the request was dropped.
    pub fn request_refresh(&self) -> bool {
        match self.begin() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Abandon any in-flight request and start a fresh one in the background.
    pub fn supersede(&self) -> bool {
        match self.begin_superseding() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Swap the data source (new request parameters) and supersede.
    pub fn retarget(&self, source: impl DataSource<T>) -> bool {
        {
            let mut inner = self.shared.inner.lock();
            if inner.torn_down {
                return false;
            }
            inner.source = Arc::new(source);
        }
        self.supersede()
    }

    /// Refresh in the caller's task and wait for the outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(ticket) = self.begin() else {
            return RefreshOutcome::Rejected;
        };
        let result = ticket.fetch().await;
        RefreshOutcome::Completed(self.complete(ticket.seq, result))
    }

    /// Mark the view dead. Later responses are discarded and no new request
    /// is accepted.
    pub fn teardown(&self) {
        let mut inner = self.shared.inner.lock();
        if !inner.torn_down {
            inner.torn_down = true;
            inner.in_flight = None;
            if let Some(task) = inner.task.take() {
                task.abort();
            }
            inner.events = None;
            tracing::debug!(view = %self.shared.name, "View torn down");
        }
    }

    fn spawn_fetch(&self, ticket: Ticket<T>) {
        let view = self.clone();
        let seq = ticket.seq;
        match Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(async move {
                    let result = ticket.fetch().await;
                    view.complete(ticket.seq, result);
                });
                // Only the task for the current request is kept for abort.
                let mut inner = self.shared.inner.lock();
                if inner.in_flight == Some(seq) && !inner.torn_down {
                    inner.task = Some(task);
                } else {
                    task.abort();
                }
            }
            Err(_) => {
                self.complete(
                    ticket.seq,
                    Err(EndpointError::network("no async runtime available")),
                );
            }
        }
    }
}
