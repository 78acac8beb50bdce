//! Chat session controller.
//!
//! One `submit` call is one session: append the user's message, open the
//! bot reply, stream events through the reducer, and settle back to idle.
//! Failures become a transcript entry instead of an `Err` — the transcript
//! is the user-visible error channel, matching the service's own behavior
//! of reporting errors as chat text.

use futures::StreamExt;

use dashstream_client::DashClient;
use dashstream_types::{StreamEvent, StreamHandle, WidgetKind};

use crate::config::SessionConfig;
use crate::state::DashboardState;

/// Where the session currently is in its lifecycle.
///
/// `Failed` is transient: the controller records the failure in the
/// transcript and settles back to `Idle` before `submit` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session in flight.
    Idle,
    /// Request issued, response not yet accepted.
    Sending,
    /// Response accepted, events being applied.
    Streaming,
    /// The session ended in a transport failure.
    Failed,
}

/// Controller for the dashboard's chat panel and widget refreshes.
///
/// Sessions are strictly sequential: `submit` takes `&mut self` and runs the
/// whole pipeline to completion, so a second session cannot start while one
/// is active.
pub struct ChatSession {
    client: DashClient,
    state: DashboardState,
    phase: Phase,
}

impl ChatSession {
    /// Create a session around an existing client, with default widget keys.
    pub fn new(client: DashClient) -> Self {
        Self {
            client,
            state: DashboardState::default(),
            phase: Phase::Idle,
        }
    }

    /// Create a session from configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            client: DashClient::new().base_url(config.base_url),
            state: DashboardState::new(
                config.weather_city,
                config.stock_ticker,
                config.pokemon_name,
            ),
            phase: Phase::Idle,
        }
    }

    /// The observable dashboard state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from the moment a request is issued until the stream settles.
    pub fn awaiting_response(&self) -> bool {
        matches!(self.phase, Phase::Sending | Phase::Streaming)
    }

    /// Submit a chat message and run the session to completion.
    ///
    /// Trimmed-empty input is a silent no-op: no transcript change, no
    /// request. Otherwise the user entry and an empty open bot entry are
    /// appended before the request goes out, so the submission is visible
    /// regardless of network outcome. Widget updates applied before a
    /// failure stay applied.
    pub async fn submit(&mut self, input: &str) {
        let message = input.trim();
        if message.is_empty() {
            return;
        }

        self.state.push_user(message);
        self.state.open_bot();
        self.phase = Phase::Sending;

        let handle = match self.client.stream_chat(message).await {
            Ok(handle) => handle,
            Err(e) => {
                self.fail(&e.to_string());
                return;
            }
        };
        self.phase = Phase::Streaming;
        self.drain(handle).await;
    }

    /// Apply stream events in arrival order until the stream ends or an
    /// in-band error terminates it. Settles the session either way.
    async fn drain(&mut self, handle: StreamHandle) {
        let mut events = handle.receiver;
        while let Some(event) = events.next().await {
            if let StreamEvent::Error(description) = event {
                self.fail(&description);
                return;
            }
            self.state.apply(event);
        }

        self.state.close_open();
        self.phase = Phase::Idle;
        tracing::debug!("chat session completed");
    }

    /// Refresh one widget through the request/response path.
    ///
    /// A trimmed-empty key is ignored, mirroring the edit-in-place commit
    /// rule. On failure the slot shows the error marker the card renders;
    /// the key is updated either way, since it is what the user asked for.
    pub async fn refresh(&mut self, kind: WidgetKind, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }

        match self.client.refresh_widget(kind, key).await {
            Ok(payload) => {
                let slot = self.state.widget_mut(kind);
                slot.key = key.to_owned();
                slot.data = Some(payload);
            }
            Err(e) => {
                tracing::warn!(widget = kind.wire_name(), error = %e, "widget refresh failed");
                let slot = self.state.widget_mut(kind);
                slot.key = key.to_owned();
                slot.data = Some(serde_json::json!({
                    "error": format!("Could not retrieve {} data.", kind.display_name()),
                }));
            }
        }
    }

    /// Refresh every widget with its current key.
    pub async fn refresh_all(&mut self) {
        for kind in WidgetKind::ALL {
            let key = self.state.widget(kind).key.clone();
            self.refresh(kind, &key).await;
        }
    }

    /// Record a failed session: one bot entry describing the failure, then
    /// back to idle.
    fn fail(&mut self, description: &str) {
        self.phase = Phase::Failed;
        tracing::warn!(error = %description, "chat session failed");
        self.state.close_open();
        self.state.push_bot(format!("Error: {description}"));
        self.phase = Phase::Idle;
    }
}
