use crate::controllers::run::events::run_event::RunEvent;

/// Outbound port for everything a run produces.
///
/// Called from the sort worker thread as well as the controlling thread, in
/// the order events happen.
pub trait RunControllerPresenterPort: Send + Sync {
    fn present(&self, event: RunEvent);
}
