//! Stream event types for the incremental chat response.

use std::pin::Pin;

use futures::Stream;

use crate::widget::WidgetKind;

/// An event decoded from the chat response stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Incremental text fragment for the in-progress bot reply. Consumers
    /// reconstruct the full reply by concatenating deltas in arrival order.
    TextDelta(String),
    /// Full replacement of one widget's display state.
    WidgetUpdate {
        /// Which widget the update addresses.
        widget: WidgetKind,
        /// The new display payload, replacing the old one wholesale.
        payload: serde_json::Value,
        /// The identifier the widget now represents (city, ticker, or name).
        key: String,
    },
    /// The transport failed mid-stream. Terminal: no further events follow.
    Error(String),
}

/// Handle to a live chat response stream.
pub struct StreamHandle {
    /// The stream of events. Consume with `StreamExt::next()`.
    pub receiver: Pin<Box<dyn Stream<Item = StreamEvent> + Send>>,
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}
