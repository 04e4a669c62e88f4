use serde::{Deserialize, Serialize};

use crate::util::{make_href, parse_id, DEFAULT_BASE_URL};

/// Media type reported for JSON entities.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The `meta` object attached to every addressable value.
///
/// For entities `href` and `type` identify the record. For collections the
/// same object carries paging data (`size`, `limit`, `offset`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Canonical URL of the value.
    #[serde(default)]
    pub href: String,

    /// URL of the metadata of this entity type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_href: Option<String>,

    /// Entity type name (e.g. `store`).
    #[serde(rename = "type", default)]
    pub entity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Link to the entity in the web UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid_href: Option<String>,

    /// Download link for files and images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,

    /// Total number of rows in a collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Page size of a collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Page start of a collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Link to the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_href: Option<String>,

    /// Link to the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_href: Option<String>,
}

impl Meta {
    /// Creates a meta for the given href and type.
    #[must_use]
    pub fn new(href: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            entity_type: entity_type.into(),
            media_type: Some(JSON_MEDIA_TYPE.to_string()),
            ..Self::default()
        }
    }

    /// Creates the canonical meta of an ordinary entity.
    #[must_use]
    pub fn for_entity(entity_type: &str, id: &str) -> Self {
        Self::new(make_href(DEFAULT_BASE_URL, entity_type, id), entity_type)
    }

    /// Returns the entity ID encoded in `href`, if there is one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        if self.href.is_empty() {
            None
        } else {
            Some(parse_id(&self.href))
        }
    }
}

/// A bare `{meta}` reference, used for linked values this crate does not
/// model in full (e.g. related documents).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRef {
    /// The referenced value's meta.
    pub meta: Meta,
}

impl From<Meta> for MetaRef {
    fn from(meta: Meta) -> Self {
        Self { meta }
    }
}
