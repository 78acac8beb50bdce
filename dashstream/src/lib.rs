#![deny(missing_docs)]
//! # dashstream — umbrella crate
//!
//! Provides a single import surface for the dashstream dashboard client:
//! the shared data model, the HTTP client with its chat stream decoder, and
//! the session layer, plus a `prelude` for the happy path.

pub use dashstream_client;
pub use dashstream_session;
pub use dashstream_types;

/// Happy-path imports for driving a dashboard.
pub mod prelude {
    pub use dashstream_client::{ClientError, DashClient};
    pub use dashstream_session::{ChatSession, DashboardState, Phase, SessionConfig, WidgetSlot};
    pub use dashstream_types::{ChatMessage, Sender, StreamEvent, StreamHandle, WidgetKind};
}
