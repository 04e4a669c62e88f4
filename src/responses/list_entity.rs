use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::Meta;

/// A page of a collection.
///
/// `meta.size` is the total number of rows on the server, `meta.offset` and
/// `meta.limit` describe the window this page covers.
///
/// Embedded in a request body a list is sent as a plain array of its rows,
/// which is what the API expects when creating nested collections. It can
/// be read back from either a `{meta, rows}` page or a bare array.
///
/// # Example
///
/// ```rust
/// use moysklad_api::responses::ListEntity;
///
/// let page: ListEntity<String> = serde_json::from_str(
///     r#"{"meta":{"href":"","type":"store","size":3,"limit":2,"offset":0},"rows":["a","b"]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(page.total(), Some(3));
/// assert!(page.has_next_page());
/// assert_eq!(page.next_offset(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntity<T> {
    /// Collection meta with paging data.
    pub meta: Option<Meta>,
    /// Rows of this page.
    pub rows: Vec<T>,
}

impl<T> Default for ListEntity<T> {
    fn default() -> Self {
        Self {
            meta: None,
            rows: Vec::new(),
        }
    }
}

impl<T> ListEntity<T> {
    /// Wraps rows without paging data.
    #[must_use]
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { meta: None, rows }
    }

    /// Total number of rows on the server.
    #[must_use]
    pub fn total(&self) -> Option<u32> {
        self.meta.as_ref().and_then(|meta| meta.size)
    }

    /// Start of this page.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.meta.as_ref().and_then(|meta| meta.offset).unwrap_or(0)
    }

    /// Page size the server applied.
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.meta.as_ref().and_then(|meta| meta.limit)
    }

    /// Offset of the page that follows this one.
    #[must_use]
    pub fn next_offset(&self) -> u32 {
        let len = u32::try_from(self.rows.len()).unwrap_or(u32::MAX);
        self.offset().saturating_add(len)
    }

    /// Returns true if rows remain after this page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.total()
            .map_or(false, |total| self.next_offset() < total)
    }

    /// Consumes the page and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T> Deref for ListEntity<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl<T> From<Vec<T>> for ListEntity<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> IntoIterator for ListEntity<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<T: Serialize> Serialize for ListEntity<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListEntity<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let list = match serde_json::Value::deserialize(deserializer)? {
            rows @ serde_json::Value::Array(_) => serde_json::from_value(rows).map(Self::from_rows),
            serde_json::Value::Object(mut page) => {
                if !page.contains_key("meta") && !page.contains_key("rows") {
                    return Err(D::Error::custom("expected a page with `meta` or `rows`"));
                }
                let meta = page
                    .remove("meta")
                    .filter(|meta| !meta.is_null())
                    .map(serde_json::from_value::<Meta>)
                    .transpose()
                    .map_err(D::Error::custom)?;
                page.remove("rows")
                    .filter(|rows| !rows.is_null())
                    .map(serde_json::from_value::<Vec<T>>)
                    .transpose()
                    .map(|rows| Self {
                        meta,
                        rows: rows.unwrap_or_default(),
                    })
            }
            _ => return Err(D::Error::custom("expected a page or an array of rows")),
        };
        list.map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Store;
    use serde_json::json;

    fn page(size: u32, offset: u32, rows: usize) -> ListEntity<Store> {
        ListEntity {
            meta: Some(Meta {
                size: Some(size),
                limit: Some(100),
                offset: Some(offset),
                ..Meta::default()
            }),
            rows: (0..rows).map(|i| Store::with_id(format!("s{i}"))).collect(),
        }
    }

    #[test]
    fn test_partial_page_has_next() {
        let list = page(5, 0, 2);
        assert!(list.has_next_page());
        assert_eq!(list.next_offset(), 2);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let list = page(5, 3, 2);
        assert!(!list.has_next_page());
        assert_eq!(list.next_offset(), 5);
    }

    #[test]
    fn test_list_without_meta_has_no_next() {
        let list = ListEntity::from_rows(vec![Store::with_id("a")]);
        assert!(!list.has_next_page());
        assert_eq!(list.total(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let list = ListEntity::from_rows(vec![Store::with_id("a")]);
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["meta"]["type"], "store");
    }

    #[test]
    fn test_deserializes_page_and_bare_array() {
        let from_page: ListEntity<Store> = serde_json::from_value(json!({
            "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/store", "type": "store", "size": 1},
            "rows": [{"id": "a", "name": "Main"}]
        }))
        .unwrap();
        assert_eq!(from_page.total(), Some(1));
        assert_eq!(from_page.rows[0].name.as_deref(), Some("Main"));

        let from_array: ListEntity<Store> =
            serde_json::from_value(json!([{"id": "a"}, {"id": "b"}])).unwrap();
        assert!(from_array.meta.is_none());
        assert_eq!(from_array.len(), 2);
    }

    #[test]
    fn test_collapsed_page_without_rows() {
        let list: ListEntity<Store> = serde_json::from_value(json!({
            "meta": {"href": "x", "type": "store", "size": 4}
        }))
        .unwrap();
        assert!(list.rows.is_empty());
        assert!(list.has_next_page());
    }

    #[test]
    fn test_object_without_page_fields_is_rejected() {
        let result: Result<ListEntity<Store>, _> =
            serde_json::from_value(json!({"id": "s1", "name": "not a page"}));
        let error = result.unwrap_err().to_string();
        assert!(error.contains("expected a page"), "{error}");
    }

    #[test]
    fn test_scalar_is_rejected() {
        let result: Result<ListEntity<Store>, _> = serde_json::from_value(json!("rows"));
        assert!(result.is_err());
    }

    #[test]
    fn test_row_error_is_reported_as_is() {
        let result: Result<ListEntity<Store>, _> = serde_json::from_value(json!({
            "meta": {"href": "x", "type": "store", "size": 1},
            "rows": [{"id": "a", "updated": "2024-13-99 00:00:00.000"}]
        }));
        let error = result.unwrap_err().to_string();
        assert!(!error.contains("untagged"), "{error}");
        assert!(error.contains("out of range"), "{error}");
    }
}
