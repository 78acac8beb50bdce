#![deny(missing_docs)]
//! Dashboard state, stream event reducer, and chat session controller.
//!
//! [`DashboardState`] owns the four observable slots (transcript plus three
//! widgets) and applies [`StreamEvent`](dashstream_types::StreamEvent)s to
//! them in arrival order. [`ChatSession`] owns the session lifecycle: it
//! appends the user's message, opens the bot reply, drives the decoder
//! output through the reducer, and maps terminal conditions to transcript
//! entries.

pub mod config;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use session::{ChatSession, Phase};
pub use state::{DashboardState, WidgetSlot};
