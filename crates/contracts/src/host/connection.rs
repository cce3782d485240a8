use serde::{Deserialize, Serialize};

/// Active Dataverse connection as reported by the Tool Box host.
///
/// Supplied wholesale on every refresh; never partially mutated on the
/// client. Absence of a value means "no active connection".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataverseConnection {
    pub id: String,
    pub name: String,
    pub url: String,
    pub environment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_payload() {
        let json = r#"{
            "id": "b1f6…",
            "name": "Contoso Dev",
            "url": "https://contoso-dev.crm.dynamics.com",
            "environment": "Development"
        }"#;
        let conn: DataverseConnection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.name, "Contoso Dev");
        assert_eq!(conn.environment, "Development");
    }
}
