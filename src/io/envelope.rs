//! Unified JSON output envelope for `--json` mode.
//!
//! One object per invocation, designed for Unix piping: the result text or
//! error text always appears in `message`, structured payloads in `data`.

use serde::{Deserialize, Serialize};

use super::ExitCode;

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Operation succeeded with a result
    Success,
    /// Operation failed
    Error,
}

/// JSON envelope printed by `eval --json` and `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message: the result text or the error text
    pub message: String,

    /// Structured payload (absent on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: Status::Success,
            exit_code: ExitCode::Success.code(),
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>, exit: ExitCode) -> Self {
        Self {
            status: Status::Error,
            exit_code: exit.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Serialize to pretty-printed JSON. A serialization failure still
    /// yields a valid error object rather than a panic.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\"status\":\"error\",\"exit_code\":1,\"message\":\"serialization failed: {e}\"}}"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_round_trips() {
        let env: Envelope =
            Envelope::success("6", Some(serde_json::json!({"operation": "gcd", "result": "6"})));
        let text = env.to_json();
        let parsed: Envelope = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status, Status::Success);
        assert_eq!(parsed.exit_code, 0);
        assert_eq!(parsed.message, "6");
        assert_eq!(parsed.data.unwrap()["operation"], "gcd");
    }

    #[test]
    fn error_envelope_omits_data() {
        let env: Envelope = Envelope::error("division by zero", ExitCode::GeneralError);
        let text = env.to_json();
        assert!(!text.contains("\"data\""));
        let parsed: Envelope = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status, Status::Error);
        assert_eq!(parsed.exit_code, 1);
    }
}
