//! Observable dashboard state and the stream event reducer.

use dashstream_types::{ChatMessage, StreamEvent, WidgetKind};
use serde_json::Value;

/// Display state for one widget: the key it currently represents and its
/// last known payload (`None` until something has been fetched or streamed).
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSlot {
    /// City name, ticker symbol, or pokemon name.
    pub key: String,
    /// The widget's display payload, or the `{"error": ...}` marker after a
    /// failed refresh.
    pub data: Option<Value>,
}

impl WidgetSlot {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: None,
        }
    }
}

/// The four observable state slots: the chat transcript and one
/// [`WidgetSlot`] per widget.
///
/// Only the reducer ([`apply`](DashboardState::apply)) and the session
/// controller mutate this; the presentation layer reads it between events.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Transcript, oldest-first. Exposed newest-first via
    /// [`transcript`](DashboardState::transcript).
    messages: Vec<ChatMessage>,
    /// Index of the bot entry currently being extended by text deltas.
    open: Option<usize>,
    weather: WidgetSlot,
    stock: WidgetSlot,
    pokemon: WidgetSlot,
}

impl DashboardState {
    /// Create state with the given initial widget keys and no data.
    pub fn new(
        weather_city: impl Into<String>,
        stock_ticker: impl Into<String>,
        pokemon_name: impl Into<String>,
    ) -> Self {
        Self {
            messages: Vec::new(),
            open: None,
            weather: WidgetSlot::new(weather_city),
            stock: WidgetSlot::new(stock_ticker),
            pokemon: WidgetSlot::new(pokemon_name),
        }
    }

    /// Transcript entries, newest first.
    pub fn transcript(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().rev()
    }

    /// Number of transcript entries.
    pub fn transcript_len(&self) -> usize {
        self.messages.len()
    }

    /// The bot entry currently being extended by deltas, if a stream is
    /// active.
    pub fn open_message(&self) -> Option<&ChatMessage> {
        self.open.map(|i| &self.messages[i])
    }

    /// One widget's current display state.
    pub fn widget(&self, kind: WidgetKind) -> &WidgetSlot {
        match kind {
            WidgetKind::Weather => &self.weather,
            WidgetKind::Stock => &self.stock,
            WidgetKind::Pokemon => &self.pokemon,
        }
    }

    pub(crate) fn widget_mut(&mut self, kind: WidgetKind) -> &mut WidgetSlot {
        match kind {
            WidgetKind::Weather => &mut self.weather,
            WidgetKind::Stock => &mut self.stock,
            WidgetKind::Pokemon => &mut self.pokemon,
        }
    }

    /// Append a user message to the transcript.
    pub(crate) fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Append a completed bot message to the transcript.
    pub(crate) fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    /// Append an empty bot entry and mark it as the open message that
    /// incoming deltas extend.
    pub(crate) fn open_bot(&mut self) {
        self.messages.push(ChatMessage::bot(""));
        self.open = Some(self.messages.len() - 1);
    }

    /// Close the open message. Subsequent deltas (there should be none) are
    /// dropped.
    pub(crate) fn close_open(&mut self) {
        self.open = None;
    }

    /// Apply one stream event, in arrival order.
    ///
    /// - `TextDelta` appends to the open message's text; concatenating all
    ///   deltas in order reconstructs the reply.
    /// - `WidgetUpdate` replaces the addressed slot's payload and key
    ///   wholesale; other slots are untouched, so reapplying the same event
    ///   is idempotent and updates to one widget never disturb another.
    /// - `Error` is terminal and owned by the session controller; the
    ///   reducer leaves state alone.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::TextDelta(text) => match self.open {
                Some(i) => self.messages[i].text.push_str(&text),
                None => tracing::debug!("dropping text delta with no open message"),
            },
            StreamEvent::WidgetUpdate {
                widget,
                payload,
                key,
            } => {
                tracing::debug!(widget = widget.wire_name(), key = %key, "applying widget update");
                let slot = self.widget_mut(widget);
                slot.key = key;
                slot.data = Some(payload);
            }
            StreamEvent::Error(_) => {}
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        let config = crate::config::SessionConfig::default();
        Self::new(config.weather_city, config.stock_ticker, config.pokemon_name)
    }
}
