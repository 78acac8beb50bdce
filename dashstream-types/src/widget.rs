//! Widget addressing.

use serde::{Deserialize, Serialize};

/// The three dashboard widgets a stream event can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Current weather for a city.
    Weather,
    /// Latest quote for a stock ticker.
    Stock,
    /// Pokedex entry for a pokemon.
    Pokemon,
}

impl WidgetKind {
    /// All widget kinds, in display order.
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Weather, WidgetKind::Stock, WidgetKind::Pokemon];

    /// Name used for this widget on the wire (`widget` field of a
    /// `widget_update` payload).
    pub fn wire_name(self) -> &'static str {
        match self {
            WidgetKind::Weather => "weather",
            WidgetKind::Stock => "stock",
            WidgetKind::Pokemon => "pokemon",
        }
    }

    /// Parse a wire name. Returns `None` for anything unrecognized.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "weather" => Some(WidgetKind::Weather),
            "stock" => Some(WidgetKind::Stock),
            "pokemon" => Some(WidgetKind::Pokemon),
            _ => None,
        }
    }

    /// Name used in user-facing text. Pokemon is a proper noun; the other
    /// two are not.
    pub fn display_name(self) -> &'static str {
        match self {
            WidgetKind::Weather => "weather",
            WidgetKind::Stock => "stock",
            WidgetKind::Pokemon => "Pokemon",
        }
    }

    /// URL path segment of this widget's refresh endpoint.
    ///
    /// The stock endpoint is pluralized; the others are not.
    pub fn path_segment(self) -> &'static str {
        match self {
            WidgetKind::Weather => "weather",
            WidgetKind::Stock => "stocks",
            WidgetKind::Pokemon => "pokemon",
        }
    }

    /// Field of a `widget_update`'s `data` object that carries the widget's
    /// identifying key (city name, ticker symbol, or pokemon name).
    pub fn key_field(self) -> &'static str {
        match self {
            WidgetKind::Weather => "city",
            WidgetKind::Stock => "ticker",
            WidgetKind::Pokemon => "name",
        }
    }
}
