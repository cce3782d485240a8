use serde::{Deserialize, Serialize};

/// Entity metadata in the Dataverse wire form (PascalCase members).
///
/// `attributes` is only populated when the caller asked for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMetadata {
    pub logical_name: String,
    #[serde(default)]
    pub metadata_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<DisplayName>,
    #[serde(default)]
    pub attributes: Option<Vec<AttributeMetadata>>,
}

impl EntityMetadata {
    /// First localized display label, falling back to the logical name.
    pub fn label(&self) -> &str {
        self.display_name
            .as_ref()
            .and_then(|d| d.localized_labels.first())
            .map(|l| l.label.as_str())
            .unwrap_or(&self.logical_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayName {
    #[serde(default)]
    pub localized_labels: Vec<LocalizedLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalizedLabel {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeMetadata {
    pub logical_name: String,
    #[serde(default)]
    pub attribute_type: Option<String>,
}

/// Result of `dataverseAPI.getAllEntitiesMetadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadataCollection {
    /// OData-style collection member; lowercase on the wire.
    #[serde(default)]
    pub value: Vec<EntityMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pascal_case_wire_form() {
        let json = r#"{
            "LogicalName": "account",
            "MetadataId": "70816501-edb9-4740-a16c-6a5efbc05d84",
            "DisplayName": { "LocalizedLabels": [{ "Label": "Account" }] },
            "Attributes": [
                { "LogicalName": "name", "AttributeType": "String" },
                { "LogicalName": "accountid", "AttributeType": "Uniqueidentifier" }
            ]
        }"#;
        let metadata: EntityMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.logical_name, "account");
        assert_eq!(metadata.label(), "Account");
        assert_eq!(metadata.attributes.unwrap().len(), 2);
    }

    #[test]
    fn test_collection_member_is_lowercase_value() {
        let json = r#"{"value":[{"LogicalName":"contact"}]}"#;
        let collection: EntityMetadataCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.value.len(), 1);
        // no display name on the wire: the logical name is the label
        assert_eq!(collection.value[0].label(), "contact");
    }
}
