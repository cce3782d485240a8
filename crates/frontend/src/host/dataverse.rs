use contracts::host::metadata::{EntityMetadata, EntityMetadataCollection};
use contracts::host::records::{CreateRecordResult, FetchXmlResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::js_error_message;

/// JS bindings to the `dataverseAPI` object. Query and CRUD semantics
/// live entirely in the host.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = fetchXmlQuery, catch)]
    async fn fetch_xml_query_js(fetch_xml: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = create, catch)]
    async fn create_js(entity: &str, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = update, catch)]
    async fn update_js(entity: &str, id: &str, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = delete, catch)]
    async fn delete_js(entity: &str, id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = getEntityMetadata, catch)]
    async fn get_entity_metadata_js(
        logical_name: &str,
        include_attributes: bool,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = dataverseAPI, js_name = getAllEntitiesMetadata, catch)]
    async fn get_all_entities_metadata_js() -> Result<JsValue, JsValue>;
}

/// Record payloads are free-form JSON objects; the host expects plain JS
/// objects, not ES Maps, hence the json-compatible serializer.
fn to_js_object(data: &serde_json::Value) -> Result<JsValue, String> {
    data.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

/// Run a FetchXML query against the active connection.
pub async fn fetch_xml_query(fetch_xml: &str) -> Result<FetchXmlResult, String> {
    let value = fetch_xml_query_js(fetch_xml).await.map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Create a record; the host mints and returns its id.
pub async fn create_record(
    entity: &str,
    data: &serde_json::Value,
) -> Result<CreateRecordResult, String> {
    let data = to_js_object(data)?;
    let value = create_js(entity, data).await.map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Update the named fields of an existing record.
pub async fn update_record(
    entity: &str,
    id: &str,
    data: &serde_json::Value,
) -> Result<(), String> {
    let data = to_js_object(data)?;
    update_js(entity, id, data).await.map_err(js_error_message)?;
    Ok(())
}

pub async fn delete_record(entity: &str, id: &str) -> Result<(), String> {
    delete_js(entity, id).await.map_err(js_error_message)?;
    Ok(())
}

pub async fn get_entity_metadata(
    logical_name: &str,
    include_attributes: bool,
) -> Result<EntityMetadata, String> {
    let value = get_entity_metadata_js(logical_name, include_attributes)
        .await
        .map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Catalog of all entities, without attribute details.
pub async fn get_all_entities_metadata() -> Result<EntityMetadataCollection, String> {
    let value = get_all_entities_metadata_js().await.map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
