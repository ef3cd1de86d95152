use crate::error::RelayError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const FENCE_MARKER: &str = "```";

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\w*\n(.*?)\n```").expect("fenced block pattern is valid"));

/// How the payload is cut out of a model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceStyle {
    /// Everything between the first marker (minus its tag line) and the next marker.
    FirstMarker,
    /// The first complete block: marker, optional word tag, newline, body, newline, marker.
    FencedBlock,
}

/// Per-endpoint settings for turning a model reply into JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionProfile {
    pub fence: FenceStyle,
    pub parse_error: &'static str,
    pub disclose_raw: bool,
}

pub const OUTLINE_PROFILE: ExtractionProfile = ExtractionProfile {
    fence: FenceStyle::FirstMarker,
    parse_error: "Failed to parse outline response",
    disclose_raw: false,
};

pub const PROOFREAD_PROFILE: ExtractionProfile = ExtractionProfile {
    fence: FenceStyle::FencedBlock,
    parse_error: "Failed to parse AI response as JSON",
    disclose_raw: true,
};

/// Returns `text` untouched when no fence is found.
pub fn strip_fences(text: &str, style: FenceStyle) -> &str {
    match style {
        FenceStyle::FirstMarker => {
            let Some(first) = text.find(FENCE_MARKER) else {
                return text;
            };
            let mut remaining = &text[first + FENCE_MARKER.len()..];
            if let Some(newline) = remaining.find('\n') {
                remaining = &remaining[newline + 1..];
            }
            if let Some(closing) = remaining.find(FENCE_MARKER) {
                remaining = &remaining[..closing];
            }
            remaining.trim()
        }
        FenceStyle::FencedBlock => FENCED_BLOCK
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|inner| inner.as_str().trim())
            .unwrap_or(text),
    }
}

/// Parses the stripped reply. No shape is imposed on the result.
pub fn decode_payload(stripped: &str, profile: &ExtractionProfile) -> Result<Value, RelayError> {
    serde_json::from_str(stripped).map_err(|e| {
        log::warn!("{}: {e}", profile.parse_error);
        RelayError::Decode {
            message: profile.parse_error,
            raw: profile.disclose_raw.then(|| stripped.to_string()),
        }
    })
}

/// Accepts only a string that is non-blank after trimming; the untrimmed
/// string is what gets forwarded.
pub fn required_text<'a>(field: Option<&'a Value>, message: &str) -> Result<&'a str, RelayError> {
    match field.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(RelayError::Validation(message.to_string())),
    }
}

/// Absent or null is `None`; any other non-string value is rejected.
pub fn optional_text<'a>(
    field: Option<&'a Value>,
    message: &str,
) -> Result<Option<&'a str>, RelayError> {
    match field {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(RelayError::Validation(message.to_string())),
    }
}
