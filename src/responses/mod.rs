//! Response shapes that are not entities themselves: pages, metadata,
//! per-item mass delete results, print templates and auth tokens.

mod export;
mod list_entity;
mod metadata;

use serde::{Deserialize, Serialize};

use crate::clients::ErrorItem;

pub use export::{ExportExtension, ExportFile, Template};
pub use list_entity::ListEntity;
pub use metadata::{
    CompanySettingsMetadata, MetadataAttributeSharedResponse,
    MetadataAttributeSharedStatesResponse,
};

/// Result of deleting one item in a mass delete request.
///
/// Items are processed independently: a failed item has `errors` set and
/// does not stop the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassDeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorItem>,
}

impl MassDeleteResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Response of `POST /security/token`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mass_delete_mixed_results() {
        let results: Vec<MassDeleteResponse> = serde_json::from_value(json!([
            {"info": "Сущность 'store' с UUID: a успешно удалена"},
            {"errors": [{"error": "Объект не найден", "code": 1021}]}
        ]))
        .unwrap();

        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert_eq!(results[1].errors[0].code, Some(1021));
    }

    #[test]
    fn test_token_debug_is_masked() {
        let token = TokenResponse {
            access_token: "secret".to_string(),
        };
        assert!(!format!("{token:?}").contains("secret"));
    }
}
