use serde::{Deserialize, Serialize};

/// Connection lifecycle events emitted by the host.
pub const CONNECTION_CREATED: &str = "connection:created";
pub const CONNECTION_UPDATED: &str = "connection:updated";
pub const CONNECTION_DELETED: &str = "connection:deleted";

/// Terminal activity events. Delivered on the same subscription but owned
/// by dedicated terminal surfaces, not by this tool.
pub const TERMINAL_OUTPUT: &str = "terminal:output";
pub const TERMINAL_COMMAND_COMPLETED: &str = "terminal:command:completed";
pub const TERMINAL_ERROR: &str = "terminal:error";

/// Payload delivered to the single `toolboxAPI.events.on` subscription.
///
/// `data` is opaque to this tool; hosts may omit it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolBoxEventPayload {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_with_data() {
        let payload: ToolBoxEventPayload =
            serde_json::from_str(r#"{"event":"connection:updated","data":{"id":"42"}}"#).unwrap();
        assert_eq!(payload.event, CONNECTION_UPDATED);
        assert_eq!(payload.data["id"], "42");
    }

    #[test]
    fn test_parse_payload_without_data() {
        let payload: ToolBoxEventPayload =
            serde_json::from_str(r#"{"event":"terminal:output"}"#).unwrap();
        assert_eq!(payload.event, TERMINAL_OUTPUT);
        assert!(payload.data.is_null());
    }
}
