use serde::{Deserialize, Serialize};

/// Result of `dataverseAPI.create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResult {
    pub id: String,
}

/// Result set of a FetchXML query.
///
/// Row shape depends on the queried entity and selected attributes, so
/// rows stay as raw JSON objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchXmlResult {
    #[serde(default)]
    pub value: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_result() {
        let json = r#"{"value":[{"name":"Contoso","accountid":"1"},{"name":"Fabrikam","accountid":"2"}]}"#;
        let result: FetchXmlResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.value.len(), 2);
        assert_eq!(result.value[0]["name"], "Contoso");
    }

    #[test]
    fn test_empty_result_set() {
        let result: FetchXmlResult = serde_json::from_str("{}").unwrap();
        assert!(result.value.is_empty());
    }
}
