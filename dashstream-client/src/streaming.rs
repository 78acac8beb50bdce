//! Chat stream decoding: raw byte chunks in, [`StreamEvent`]s out.
//!
//! The response body arrives as byte chunks whose boundaries bear no
//! relation to the protocol's line boundaries, or even to UTF-8 character
//! boundaries. Decoding is therefore layered:
//!
//! 1. [`Utf8Carry`] turns chunks into text, carrying an incomplete trailing
//!    character over to the next chunk.
//! 2. A line buffer reassembles `\n`-terminated protocol lines, carrying the
//!    unterminated tail over to the next chunk.
//! 3. [`parse_line`] classifies each complete line into an event or drops it.
//!
//! A malformed line is skipped with a diagnostic, never fatal. When the
//! stream ends, an unterminated trailing fragment is discarded: stream end
//! is a flush boundary, not a parse error.

use futures::{Stream, StreamExt};
use reqwest::Response;

use dashstream_types::{StreamEvent, StreamHandle, WidgetKind};

use crate::wire::{ChatPayload, DATA_PREFIX};

/// Wrap an HTTP response body into a [`StreamHandle`] that emits
/// [`StreamEvent`]s as protocol lines complete.
pub(crate) fn stream_events(response: Response) -> StreamHandle {
    let byte_stream = response.bytes_stream();
    StreamHandle {
        receiver: Box::pin(decode_stream(byte_stream)),
    }
}

/// Decode a raw byte stream into an ordered stream of [`StreamEvent`]s.
///
/// Events are yielded in the order their lines complete. A transport read
/// error yields a terminal [`StreamEvent::Error`] and ends the stream.
fn decode_stream<E>(
    byte_stream: impl Stream<Item = Result<bytes::Bytes, E>> + Send + 'static,
) -> impl Stream<Item = StreamEvent> + Send + 'static
where
    E: std::fmt::Display + Send + 'static,
{
    async_stream::stream! {
        let mut carry = Utf8Carry::default();
        let mut line_buf = String::new();
        let mut bytes_stream = std::pin::pin!(byte_stream);

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield StreamEvent::Error(format!("stream read error: {e}"));
                    return;
                }
            };

            line_buf.push_str(&carry.push(&chunk));

            // Emit every complete line; the tail stays buffered for the
            // next chunk.
            while let Some(newline_pos) = line_buf.find('\n') {
                let line = line_buf[..newline_pos].trim_end_matches('\r').to_string();
                line_buf.drain(..=newline_pos);

                if let Some(event) = parse_line(&line) {
                    yield event;
                }
            }
        }

        if !line_buf.is_empty() {
            tracing::debug!(len = line_buf.len(), "discarding unterminated trailing fragment");
        }
    }
}

/// Classify one complete line.
///
/// Returns `None` for everything that carries no event: lines without the
/// `data: ` prefix (the protocol interleaves filler lines), payloads that
/// fail to parse (logged and skipped), and updates for widgets this client
/// does not know (dropped without a diagnostic).
fn parse_line(line: &str) -> Option<StreamEvent> {
    let payload = line.strip_prefix(DATA_PREFIX)?;

    let parsed: ChatPayload = match serde_json::from_str(payload) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "dropping malformed protocol line");
            return None;
        }
    };

    match parsed {
        ChatPayload::Text { text } => Some(StreamEvent::TextDelta(text)),
        ChatPayload::WidgetUpdate { widget, data } => {
            let kind = WidgetKind::from_wire(&widget)?;
            let key = match data.key_for(kind) {
                Some(k) => k.to_owned(),
                None => {
                    tracing::warn!(
                        widget = kind.wire_name(),
                        missing = kind.key_field(),
                        "dropping widget update without its key field"
                    );
                    return None;
                }
            };
            Some(StreamEvent::WidgetUpdate {
                widget: kind,
                payload: data.info,
                key,
            })
        }
    }
}

/// Incremental UTF-8 decoder state.
///
/// Holds the trailing bytes of a multi-byte character that was split across
/// chunk boundaries (at most 3 bytes). Genuinely invalid sequences decode to
/// U+FFFD and decoding continues; bad input never aborts the stream.
#[derive(Debug, Default)]
struct Utf8Carry {
    pending: Vec<u8>,
}

impl Utf8Carry {
    /// Decode the next chunk, prepending any carried bytes. Returns the
    /// decoded text; an incomplete trailing character is held back for the
    /// next call.
    fn push(&mut self, chunk: &[u8]) -> String {
        let mut buf = std::mem::take(&mut self.pending);
        buf.extend_from_slice(chunk);

        let mut out = String::with_capacity(buf.len());
        let mut rest = buf.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    out.push_str(s);
                    break;
                }
                Err(e) => {
                    let (valid, tail) = rest.split_at(e.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        // Invalid sequence: substitute and keep decoding.
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &tail[len..];
                        }
                        // Incomplete trailing character: carry it over.
                        None => {
                            self.pending = tail.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }
}
