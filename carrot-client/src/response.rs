//! Response normalization
//!
//! The server is the sole authority on success and failure semantics: any
//! JSON it returns, payload or structured `{title, status, detail}` error,
//! is re-serialized verbatim with sorted keys and fixed indentation. Only at
//! the transport layer, where no JSON exists to show, does the client supply
//! its own human-readable sentences.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::http::{RawResponse, TransportError};

/// Console logging verbosity, set once from the CLI flags and threaded into
/// the client so message detail does not depend on ambient logger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    /// Whether the transport-error detail was already logged, making the
    /// "enable verbose logging" hint redundant.
    pub fn is_detailed(self) -> bool {
        self >= Verbosity::Verbose
    }
}

/// Non-JSON response fallback, serialized as `{"Body": ..., "Status": ...}`
#[derive(Serialize)]
struct RawBody<'a> {
    #[serde(rename = "Body")]
    body: &'a str,
    #[serde(rename = "Status")]
    status: u16,
}

/// Turn a dispatch outcome into the text shown to the user.
pub(crate) fn format_outcome(
    outcome: Result<RawResponse, TransportError>,
    verbosity: Verbosity,
) -> String {
    match outcome {
        Err(err) => transport_message(err, verbosity),
        Ok(raw) => match serde_json::from_str::<Value>(&raw.body) {
            // A literal `null` body carries as little as an empty one
            Ok(Value::Null) => empty_body_message(raw.status),
            Ok(json) => pretty(&json),
            Err(_) if raw.body.is_empty() => empty_body_message(raw.status),
            Err(_) => pretty(&RawBody {
                body: &raw.body,
                status: raw.status,
            }),
        },
    }
}

fn empty_body_message(status: u16) -> String {
    format!("Received response with status {status} and empty body")
}

fn transport_message(err: TransportError, verbosity: Verbosity) -> String {
    let base = err.to_string();
    if verbosity.is_detailed() {
        base
    } else if base.ends_with('.') {
        format!("{base} Enable verbose logging (-v) for more info")
    } else {
        format!("{base}. Enable verbose logging (-v) for more info")
    }
}

/// Pretty-print with sorted keys and 4-space indentation. serde_json's maps
/// are ordered, so two serializations of the same structure are identical.
pub(crate) fn pretty<T: Serialize>(value: &T) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut ser).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(status: u16, body: &str) -> Result<RawResponse, TransportError> {
        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_transport_messages_with_hint() {
        let cases = [
            (
                TransportError::Connection,
                "Encountered a connection error. Enable verbose logging (-v) for more info",
            ),
            (
                TransportError::InvalidUrl,
                "Invalid URL. Enable verbose logging (-v) for more info",
            ),
            (
                TransportError::Timeout,
                "Request timed out. Enable verbose logging (-v) for more info",
            ),
            (
                TransportError::TooManyRedirects,
                "Too many redirects. Enable verbose logging (-v) for more info",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(format_outcome(Err(err), Verbosity::Normal), expected);
            assert_eq!(format_outcome(Err(err), Verbosity::Quiet), expected);
        }
    }

    #[test]
    fn test_transport_messages_without_hint_when_detailed() {
        let cases = [
            (TransportError::Connection, "Encountered a connection error."),
            (TransportError::InvalidUrl, "Invalid URL."),
            (TransportError::Timeout, "Request timed out."),
            (TransportError::TooManyRedirects, "Too many redirects"),
        ];
        for (err, expected) in cases {
            assert_eq!(format_outcome(Err(err), Verbosity::Verbose), expected);
            assert_eq!(format_outcome(Err(err), Verbosity::Trace), expected);
        }
    }

    #[test]
    fn test_empty_body_message() {
        assert_eq!(
            format_outcome(ok(200, ""), Verbosity::Normal),
            "Received response with status 200 and empty body"
        );
    }

    #[test]
    fn test_null_body_treated_as_empty() {
        assert_eq!(
            format_outcome(ok(204, "null"), Verbosity::Normal),
            "Received response with status 204 and empty body"
        );
    }

    #[test]
    fn test_non_json_body_fallback() {
        let formatted = format_outcome(ok(500, "<html>oops</html>"), Verbosity::Normal);
        let parsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed["Status"], 500);
        assert_eq!(parsed["Body"], "<html>oops</html>");
        // Sorted keys: Body before Status
        assert!(formatted.find("\"Body\"").unwrap() < formatted.find("\"Status\"").unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let body = r#"{"name":"test_name","test_id":"123456789","nested":{"b":2,"a":1}}"#;
        let formatted = format_outcome(ok(200, body), Verbosity::Normal);
        let reparsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(reparsed, serde_json::from_str::<Value>(body).unwrap());
    }

    #[test]
    fn test_structured_error_printed_as_is() {
        let body = r#"{"title":"No pipelines found","status":404,"detail":"No pipelines found with the specified parameters"}"#;
        let formatted = format_outcome(ok(404, body), Verbosity::Normal);
        let reparsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(reparsed["title"], "No pipelines found");
        assert_eq!(reparsed["status"], 404);
    }

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let value: Value = serde_json::from_str(r#"{"a":1}"#).unwrap();
        assert_eq!(pretty(&value), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_is_stable() {
        let value: Value = serde_json::from_str(r#"{"b":1,"a":[1,2]}"#).unwrap();
        assert_eq!(pretty(&value), pretty(&value.clone()));
    }
}
