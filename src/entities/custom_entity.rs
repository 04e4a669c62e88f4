//! User-defined dictionaries ("custom entities") and their elements.
//!
//! Element hrefs carry the dictionary ID before the element ID:
//! `{base}/entity/customentity/{dictionary_id}/{id}`.

use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::agents::Employee;
use crate::entities::directories::Group;
use crate::entities::{Entity, Meta, MetaEntity};
use crate::util::{
    date_format, make_custom_entity_href, parse_custom_dictionary_id, CUSTOM_ENTITY_TYPE,
    DEFAULT_BASE_URL,
};

/// A user-defined dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl_entity!(CustomEntity, "customentity");

/// An element of a user-defined dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

impl CustomEntityElement {
    /// Creates a reference to an element of the given dictionary.
    ///
    /// ```rust
    /// use moysklad_api::entities::{CustomEntityElement, Entity};
    ///
    /// let element = CustomEntityElement::reference("dict", "elem");
    /// assert_eq!(element.id(), Some("elem"));
    /// assert_eq!(element.dictionary_id(), Some("dict"));
    /// ```
    #[must_use]
    pub fn reference(dictionary_id: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        let href = make_custom_entity_href(DEFAULT_BASE_URL, dictionary_id, &id);
        Self {
            meta: Some(Meta::new(href, CUSTOM_ENTITY_TYPE)),
            id: Some(id),
            ..Self::default()
        }
    }

    /// Returns the ID of the dictionary this element belongs to.
    #[must_use]
    pub fn dictionary_id(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| parse_custom_dictionary_id(&meta.href))
    }
}

impl MetaEntity for CustomEntityElement {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl Entity for CustomEntityElement {
    const ENTITY_TYPE: &'static str = CUSTOM_ENTITY_TYPE;

    fn id(&self) -> Option<&str> {
        self.id.as_deref().or_else(|| self.meta.as_ref().and_then(Meta::id))
    }

    // Without the dictionary ID no href can be built from the ID alone.
    fn href(&self) -> Option<String> {
        self.meta
            .as_ref()
            .map(|meta| meta.href.clone())
            .filter(|href| !href.is_empty())
    }
}

impl PartialEq for CustomEntityElement {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for CustomEntityElement {}

impl Hash for CustomEntityElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
