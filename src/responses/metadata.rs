use serde::{Deserialize, Serialize};

use crate::entities::{Attribute, CustomEntity, Meta, MetaEntity, State};
use crate::responses::ListEntity;

/// Metadata of an entity type with additional fields.
///
/// Returned by `GET {path}metadata` for agents, products and most
/// dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAttributeSharedResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ListEntity<Attribute>>,
    /// Whether new records are shared by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_shared: Option<bool>,
}

/// Metadata of a document type: additional fields plus workflow states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAttributeSharedStatesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ListEntity<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<State>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_shared: Option<bool>,
}

/// Metadata of the company settings: the user-defined dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettingsMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_entities: Option<Vec<CustomEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_shared: Option<bool>,
}

impl MetaEntity for MetadataAttributeSharedResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl MetaEntity for MetadataAttributeSharedStatesResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl MetaEntity for CompanySettingsMetadata {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StateType;
    use serde_json::json;

    #[test]
    fn test_document_metadata_with_states() {
        let metadata: MetadataAttributeSharedStatesResponse = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/loss/metadata",
                "mediaType": "application/json"
            },
            "attributes": {
                "meta": {"href": "x", "type": "attributemetadata", "size": 0},
                "rows": []
            },
            "states": [{
                "meta": {
                    "href": "https://api.moysklad.ru/api/remap/1.2/entity/loss/metadata/states/s1",
                    "type": "state"
                },
                "id": "s1",
                "name": "New",
                "stateType": "Regular"
            }],
            "createShared": false
        }))
        .unwrap();

        assert_eq!(metadata.create_shared, Some(false));
        assert_eq!(metadata.attributes.unwrap().total(), Some(0));
        let states = metadata.states.unwrap();
        assert_eq!(states[0].state_type, Some(StateType::Regular));
    }
}
