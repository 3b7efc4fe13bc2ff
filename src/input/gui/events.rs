/// Custom user events for the GUI event loop.
///
/// These let the sort worker wake the UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A run event is waiting in the presenter adapter.
    ///
    /// Receiving this does not redraw by itself; the handler requests the
    /// redraw.
    Wake,
}
