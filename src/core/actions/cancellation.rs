use std::time::Duration;

/// Longest stretch a paced worker sleeps before re-reading its cancel token.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sort cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Cooperative cancellation signal polled by the sort engine.
///
/// `is_cancelled` is the negation of "should continue": once it returns
/// `true` the engine stops mutating and emitting.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Returns `Err(Cancelled)` when the token has fired, for use with `?`.
#[inline]
pub fn checkpoint(cancel: &dyn CancelToken) -> Result<(), Cancelled> {
    if cancel.is_cancelled() {
        Err(Cancelled)
    } else {
        Ok(())
    }
}

/// Sleeps for `delay`, waking every [`CANCEL_POLL_INTERVAL`] to check `cancel`.
///
/// Returns early with `Err(Cancelled)` if the token fires during the wait.
pub fn sleep_cancelable(delay: Duration, cancel: &dyn CancelToken) -> Result<(), Cancelled> {
    let mut remaining = delay;

    while !remaining.is_zero() {
        checkpoint(cancel)?;
        let slice = remaining.min(CANCEL_POLL_INTERVAL);
        std::thread::sleep(slice);
        remaining -= slice;
    }

    checkpoint(cancel)
}
