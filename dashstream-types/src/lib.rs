#![deny(missing_docs)]
//! Shared data model for the dashstream dashboard client.
//!
//! Holds the transcript types ([`ChatMessage`], [`Sender`]), the widget
//! addressing type ([`WidgetKind`]), and the stream event types
//! ([`StreamEvent`], [`StreamHandle`]) that flow from the chat stream
//! decoder into the session reducer.

pub mod chat;
pub mod stream;
pub mod widget;

// Re-exports
pub use chat::{ChatMessage, Sender};
pub use stream::{StreamEvent, StreamHandle};
pub use widget::WidgetKind;
