//! Session configuration.

/// Static configuration for a dashboard session.
///
/// The widget keys are what each widget shows before anything has been
/// fetched or streamed.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Dashboard service base URL.
    pub base_url: String,

    /// Initial city shown by the weather widget.
    pub weather_city: String,

    /// Initial ticker shown by the stock widget.
    pub stock_ticker: String,

    /// Initial name shown by the pokemon widget.
    pub pokemon_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            weather_city: "San Francisco".into(),
            stock_ticker: "AAPL".into(),
            pokemon_name: "Pikachu".into(),
        }
    }
}
