//! View state coordination.
//!
//! ```text
//! RefreshPolicy ──fire──→ DataView::begin ──Ticket──→ DataSource::fetch
//!                               ↑                             │
//!                               └──── complete(seq, result) ──┘
//! ```
//!
//! - **ViewState**: data (never absent), status, last update, last error
//! - **DataView**: single-flight state machine with sequence numbers
//! - **MountedView**: a view plus the policy that refreshes it

mod controller;
mod mounted;
mod source;
mod state;

pub use controller::{Completion, DataView, RefreshOutcome, Ticket, ViewEvent};
pub use mounted::MountedView;
pub use source::{DataSource, EndpointSource, FixtureSource, SourceFuture};
pub use state::{ViewState, ViewStatus};
