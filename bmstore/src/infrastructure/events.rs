// bmstore/src/infrastructure/events.rs
use crate::domain::event::{BookmarkEvent, EventSink};
use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::{debug, info};

/// Forwards events into a channel; the receiving side belongs to the collaborator.
///
/// Publishing never blocks. Once the receiver is dropped events are discarded.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    sender: Sender<BookmarkEvent>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, Receiver<BookmarkEvent>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }

    pub fn from_sender(sender: Sender<BookmarkEvent>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelEventSink {
    fn publish(&self, event: BookmarkEvent) {
        if let Err(e) = self.sender.send(event) {
            debug!("Event receiver gone, dropping {}", e.0.name());
        }
    }
}

/// Writes every event to the log
#[derive(Debug, Clone, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: BookmarkEvent) {
        info!(event = event.name(), "{}", event);
    }
}

#[derive(Debug, Clone, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&self, _event: BookmarkEvent) {}
}
