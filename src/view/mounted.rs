use crate::refresh::{RefreshPolicy, RefreshTrigger};
use crate::view::controller::DataView;
use crate::view::source::DataSource;
use crate::view::state::ViewState;

/// A view bound to its refresh policy for the lifetime of a page.
///
/// Dropping or unmounting stops the policy first, then tears the view down,
/// so no trigger can fire into a dead view.
pub struct MountedView<T: Clone + Send + 'static> {
    view: DataView<T>,
    policy: RefreshPolicy,
}

impl<T: Clone + Send + 'static> MountedView<T> {
    pub fn mount(view: DataView<T>, triggers: Vec<RefreshTrigger>) -> Self {
        let mut policy = RefreshPolicy::new(triggers);
        let target = view.clone();
        policy.start(move || {
            target.request_refresh();
        });
        Self { view, policy }
    }

    pub fn view(&self) -> &DataView<T> {
        &self.view
    }

    pub fn snapshot(&self) -> ViewState<T> {
        self.view.snapshot()
    }

    /// Fire the manual trigger. No-op while a fetch is in flight.
    ///
    /// Returns whether the view issued a new request.
    pub fn trigger(&self) -> bool {
        let before = self.view.issued();
        self.policy.trigger() && self.view.issued() > before
    }

    /// Swap the source and restart the fetch regardless of in-flight state.
    pub fn retarget(&self, source: impl DataSource<T>) -> bool {
        self.view.retarget(source)
    }

    pub fn is_mounted(&self) -> bool {
        self.policy.is_running()
    }

    pub fn unmount(&mut self) {
        self.policy.stop();
        self.view.teardown();
    }
}

impl<T: Clone + Send + 'static> Drop for MountedView<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
