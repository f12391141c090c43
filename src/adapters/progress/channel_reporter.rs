//! Progress reporter that pushes events into a tokio channel.
//!
//! Lets an async observer follow a solve running on a blocking thread.

use tokio::sync::mpsc;
use tracing::debug;

use crate::ports::{ProcessingCallbackData, ProgressReporter};

/// Sends every event on an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelProgressReporter {
    sender: mpsc::UnboundedSender<ProcessingCallbackData>,
}

impl ChannelProgressReporter {
    /// Creates a reporter and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProcessingCallbackData>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn new(sender: mpsc::UnboundedSender<ProcessingCallbackData>) -> Self {
        Self { sender }
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn report(&self, data: ProcessingCallbackData) {
        // A dropped receiver means nobody is watching any more.
        if self.sender.send(data).is_err() {
            debug!("Progress receiver dropped");
        }
    }
}
