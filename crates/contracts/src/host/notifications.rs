use serde::{Deserialize, Serialize};

use crate::shared::Severity;

/// Options for `toolboxAPI.utils.showNotification`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: Severity,
    /// Display time in milliseconds.
    pub duration: u32,
}

impl NotificationOptions {
    /// Toast with the host's default display time.
    pub fn new(title: impl Into<String>, body: impl Into<String>, kind: Severity) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
            duration: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let options = NotificationOptions::new("Saved", "All good", Severity::Success);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["duration"], 3000);
    }
}
