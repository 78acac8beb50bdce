//! Wire payload shapes for the chat stream protocol.
//!
//! Each protocol line is `data: ` followed by one JSON object:
//!
//! ```text
//! data: {"type":"text","text":"Hello"}
//! data: {"type":"widget_update","widget":"stock","data":{"info":{"price":150},"ticker":"AAPL"}}
//! ```

use serde::Deserialize;

use dashstream_types::WidgetKind;

/// Prefix marking a protocol line. Lines without it are ignorable filler.
pub(crate) const DATA_PREFIX: &str = "data: ";

/// The JSON payload of one protocol line, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ChatPayload {
    /// Incremental reply text.
    Text { text: String },
    /// Full-state update for one widget.
    WidgetUpdate {
        widget: String,
        data: WidgetUpdateData,
    },
}

/// The `data` object of a `widget_update` payload: the display payload plus
/// exactly one identifying key field, which one depending on the widget.
#[derive(Debug, Deserialize)]
pub(crate) struct WidgetUpdateData {
    pub(crate) info: serde_json::Value,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) ticker: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl WidgetUpdateData {
    /// The identifying key for the given widget, if the payload carries it.
    pub(crate) fn key_for(&self, kind: WidgetKind) -> Option<&str> {
        match kind {
            WidgetKind::Weather => self.city.as_deref(),
            WidgetKind::Stock => self.ticker.as_deref(),
            WidgetKind::Pokemon => self.name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_payload() {
        let payload: ChatPayload =
            serde_json::from_str(r#"{"type":"text","text":"Hello"}"#).unwrap();
        assert!(matches!(payload, ChatPayload::Text { text } if text == "Hello"));
    }

    #[test]
    fn parses_widget_update_payload() {
        let payload: ChatPayload = serde_json::from_str(
            r#"{"type":"widget_update","widget":"stock","data":{"info":{"price":150},"ticker":"AAPL"}}"#,
        )
        .unwrap();
        let ChatPayload::WidgetUpdate { widget, data } = payload else {
            panic!("expected WidgetUpdate");
        };
        assert_eq!(widget, "stock");
        assert_eq!(data.key_for(WidgetKind::Stock), Some("AAPL"));
        assert_eq!(data.info["price"], 150);
    }

    #[test]
    fn unknown_type_fails_to_parse() {
        let result: Result<ChatPayload, _> =
            serde_json::from_str(r#"{"type":"usage","tokens":12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn key_for_picks_the_right_field() {
        let data = WidgetUpdateData {
            info: serde_json::json!({}),
            city: Some("Paris".into()),
            ticker: None,
            name: None,
        };
        assert_eq!(data.key_for(WidgetKind::Weather), Some("Paris"));
        assert_eq!(data.key_for(WidgetKind::Stock), None);
        assert_eq!(data.key_for(WidgetKind::Pokemon), None);
    }
}
