use crate::controllers::run::events::run_event::RunEvent;
use crate::controllers::run::ports::presenter::RunControllerPresenterPort;
use log::debug;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

/// Forwards every [`RunEvent`] into an `mpsc` channel.
///
/// Events sent after the receiver is dropped are discarded.
pub struct ChannelPresenter {
    sender: Mutex<Sender<RunEvent>>,
}

impl ChannelPresenter {
    pub fn new(sender: Sender<RunEvent>) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }

    /// Builds a presenter together with the receiving end of its channel.
    pub fn channel() -> (Self, Receiver<RunEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }
}

impl RunControllerPresenterPort for ChannelPresenter {
    fn present(&self, event: RunEvent) {
        let Ok(sender) = self.sender.lock() else {
            debug!("channel presenter lock poisoned, dropping event");
            return;
        };

        if sender.send(event).is_err() {
            debug!("run event receiver dropped, discarding event");
        }
    }
}
