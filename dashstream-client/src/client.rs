//! Dashboard service client struct and builder.

use dashstream_types::{StreamHandle, WidgetKind};

use crate::error::{check_status, map_reqwest_error, ClientError};
use crate::streaming::stream_events;

/// Default service base URL for local development.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client for the dashboard service.
///
/// # Example
///
/// ```no_run
/// use dashstream_client::DashClient;
///
/// let client = DashClient::new().base_url("http://127.0.0.1:8000");
/// ```
pub struct DashClient {
    /// Service base URL (override for testing or deployment).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl DashClient {
    /// Create a new client pointed at the default local service URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the service base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the chat stream endpoint URL.
    pub(crate) fn stream_chat_url(&self) -> String {
        format!("{}/stream_chat", self.base_url)
    }

    /// Build the refresh endpoint URL for one widget.
    pub(crate) fn widget_url(&self, kind: WidgetKind, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.path_segment(), key)
    }

    /// Open the chat stream for a user message.
    ///
    /// Returns a [`StreamHandle`] whose receiver yields decoded
    /// [`StreamEvent`](dashstream_types::StreamEvent)s as the service pushes
    /// protocol lines. A non-success status is an error here; failures after
    /// the stream opens surface in-band as `StreamEvent::Error`.
    pub async fn stream_chat(&self, message: &str) -> Result<StreamHandle, ClientError> {
        let url = self.stream_chat_url();
        tracing::debug!(url = %url, "opening chat stream");

        // The service reads the message from the query string; the JSON
        // body is sent as well for parity with the browser client.
        let response = self
            .client
            .post(&url)
            .query(&[("message", message)])
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let response = check_status(response).await?;
        Ok(stream_events(response))
    }

    /// Fetch one widget's current data by its identifying key.
    ///
    /// The body is returned as parsed JSON: either the widget's success
    /// payload or the service's own `{"error": ...}` marker, passed through
    /// verbatim.
    pub async fn refresh_widget(
        &self,
        kind: WidgetKind,
        key: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.widget_url(kind, key);
        tracing::debug!(url = %url, widget = kind.wire_name(), "refreshing widget");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("invalid JSON body: {e}")))
    }
}

impl Default for DashClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let client = DashClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = DashClient::new().base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn stream_chat_url_includes_path() {
        let client = DashClient::new().base_url("http://localhost:9999");
        assert_eq!(client.stream_chat_url(), "http://localhost:9999/stream_chat");
    }

    #[test]
    fn widget_urls_use_each_segment() {
        let client = DashClient::new().base_url("http://x");
        assert_eq!(
            client.widget_url(WidgetKind::Weather, "Paris"),
            "http://x/weather/Paris"
        );
        assert_eq!(
            client.widget_url(WidgetKind::Stock, "AAPL"),
            "http://x/stocks/AAPL"
        );
        assert_eq!(
            client.widget_url(WidgetKind::Pokemon, "Pikachu"),
            "http://x/pokemon/Pikachu"
        );
    }
}
