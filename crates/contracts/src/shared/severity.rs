use serde::{Deserialize, Serialize};

/// Classification tag shared by event-log entries and host notifications.
///
/// The wire form is the lowercase name the Tool Box APIs expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_round_trip() {
        for severity in [Severity::Info, Severity::Success, Severity::Warning, Severity::Error] {
            let json = serde_json::to_string(&severity).unwrap();
            let back: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, severity);
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
        }
    }
}
