//! Query parameters for list and lookup requests.
//!
//! Parameters are collected as a slice of [`ApiParam`] and rendered by
//! [`render_query`] into an ordered list of key/value pairs:
//!
//! - every filter is merged into a single `filter` value, joined with `;`
//!   (the server treats this as AND)
//! - `search`, `limit` and `offset` keep the last value given
//! - `order` clauses are joined with `;`
//! - `expand` fields are joined with `,` without duplicates
//!
//! The rendered order is always `filter, search, order, expand, limit,
//! offset`, so the same parameters produce the same query string.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::params::{filter_eq, filter_gt, limit, order, render_query, Direction};
//!
//! let query = render_query(&[
//!     limit(10),
//!     filter_eq("name", "store_abc123"),
//!     order("updated", Direction::Desc),
//!     filter_gt("updated", "2024-01-01 00:00:00.000"),
//! ]);
//!
//! assert_eq!(
//!     query,
//!     vec![
//!         ("filter".to_string(), "name=store_abc123;updated>2024-01-01 00:00:00.000".to_string()),
//!         ("order".to_string(), "updated,desc".to_string()),
//!         ("limit".to_string(), "10".to_string()),
//!     ]
//! );
//! ```

use std::fmt;

use chrono::NaiveDateTime;

use crate::entities::Entity;
use crate::util::date_format;

/// Comparison operator of a filter clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `~` (substring match)
    Like,
    /// `~=` (prefix match)
    StartsWith,
    /// `=~` (suffix match)
    EndsWith,
}

impl FilterType {
    /// Returns the operator as it appears in the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Like => "~",
            Self::StartsWith => "~=",
            Self::EndsWith => "=~",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `field{op}value` filter clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterParam {
    /// Field name (or attribute href).
    pub field: String,
    /// Comparison operator.
    pub filter_type: FilterType,
    /// Rendered value.
    pub value: String,
}

impl fmt::Display for FilterParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.filter_type, self.value)
    }
}

/// Sort direction of an `order` clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending (the server default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// A single `order` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderParam {
    /// Field to sort by.
    pub field: String,
    /// Sort direction.
    pub direction: Direction,
}

impl fmt::Display for OrderParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Asc => f.write_str(&self.field),
            Direction::Desc => write!(f, "{},desc", self.field),
        }
    }
}

/// A query parameter descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiParam {
    /// A filter clause.
    Filter(FilterParam),
    /// Free-text search.
    Search(String),
    /// A sort clause.
    Order(OrderParam),
    /// Nested fields to expand in the response.
    Expand(Vec<String>),
    /// Page size.
    Limit(u32),
    /// Page start.
    Offset(u32),
}

/// Builds a filter clause with an arbitrary operator.
#[must_use]
pub fn filter(field: impl Into<String>, filter_type: FilterType, value: impl fmt::Display) -> ApiParam {
    ApiParam::Filter(FilterParam {
        field: field.into(),
        filter_type,
        value: value.to_string(),
    })
}

/// `field=value`
#[must_use]
pub fn filter_eq(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Eq, value)
}

/// `field!=value`
#[must_use]
pub fn filter_neq(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Neq, value)
}

/// `field>value`
#[must_use]
pub fn filter_gt(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Gt, value)
}

/// `field<value`
#[must_use]
pub fn filter_lt(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Lt, value)
}

/// `field>=value`
#[must_use]
pub fn filter_gte(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Gte, value)
}

/// `field<=value`
#[must_use]
pub fn filter_lte(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Lte, value)
}

/// `field~value`
#[must_use]
pub fn filter_like(field: impl Into<String>, value: impl fmt::Display) -> ApiParam {
    filter(field, FilterType::Like, value)
}

/// Filters a date field, rendering the value in the API date format.
#[must_use]
pub fn filter_date(field: impl Into<String>, filter_type: FilterType, value: &NaiveDateTime) -> ApiParam {
    filter(field, filter_type, date_format::format(value))
}

/// Filters a reference field by entity, rendering the entity's href.
///
/// Returns `None` if the entity has neither a meta href nor an ID.
#[must_use]
pub fn filter_entity<E: Entity>(field: impl Into<String>, entity: &E) -> Option<ApiParam> {
    entity.href().map(|href| filter_eq(field, href))
}

/// Free-text search. The last search wins.
#[must_use]
pub fn search(text: impl Into<String>) -> ApiParam {
    ApiParam::Search(text.into())
}

/// Sort clause.
#[must_use]
pub fn order(field: impl Into<String>, direction: Direction) -> ApiParam {
    ApiParam::Order(OrderParam {
        field: field.into(),
        direction,
    })
}

/// Expands nested fields.
#[must_use]
pub fn expand<I, S>(fields: I) -> ApiParam
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ApiParam::Expand(fields.into_iter().map(Into::into).collect())
}

/// Page size.
#[must_use]
pub const fn limit(limit: u32) -> ApiParam {
    ApiParam::Limit(limit)
}

/// Page start.
#[must_use]
pub const fn offset(offset: u32) -> ApiParam {
    ApiParam::Offset(offset)
}

/// Renders parameters into ordered query pairs.
///
/// Empty groups are omitted. Values are not percent-encoded here; the HTTP
/// client encodes them when building the URL.
#[must_use]
pub fn render_query(params: &[ApiParam]) -> Vec<(String, String)> {
    let mut filters = Vec::new();
    let mut search_text = None;
    let mut orders = Vec::new();
    let mut expands: Vec<&str> = Vec::new();
    let mut limit_value = None;
    let mut offset_value = None;

    for param in params {
        match param {
            ApiParam::Filter(f) => filters.push(f.to_string()),
            ApiParam::Search(text) => search_text = Some(text.as_str()),
            ApiParam::Order(o) => orders.push(o.to_string()),
            ApiParam::Expand(fields) => {
                for field in fields {
                    if !expands.contains(&field.as_str()) {
                        expands.push(field);
                    }
                }
            }
            ApiParam::Limit(n) => limit_value = Some(*n),
            ApiParam::Offset(n) => offset_value = Some(*n),
        }
    }

    let mut query = Vec::new();
    if !filters.is_empty() {
        query.push(("filter".to_string(), filters.join(";")));
    }
    if let Some(text) = search_text {
        query.push(("search".to_string(), text.to_string()));
    }
    if !orders.is_empty() {
        query.push(("order".to_string(), orders.join(";")));
    }
    if !expands.is_empty() {
        query.push(("expand".to_string(), expands.join(",")));
    }
    if let Some(n) = limit_value {
        query.push(("limit".to_string(), n.to_string()));
    }
    if let Some(n) = offset_value {
        query.push(("offset".to_string(), n.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Store;
    use chrono::NaiveDate;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_filter_operators_render() {
        let cases = [
            (FilterType::Eq, "a=1"),
            (FilterType::Neq, "a!=1"),
            (FilterType::Gt, "a>1"),
            (FilterType::Lt, "a<1"),
            (FilterType::Gte, "a>=1"),
            (FilterType::Lte, "a<=1"),
            (FilterType::Like, "a~1"),
            (FilterType::StartsWith, "a~=1"),
            (FilterType::EndsWith, "a=~1"),
        ];
        for (filter_type, expected) in cases {
            assert_eq!(render_query(&[filter("a", filter_type, 1)]), pairs(&[("filter", expected)]));
        }
    }

    #[test]
    fn test_filters_are_joined_with_semicolon() {
        let query = render_query(&[filter_eq("name", "x"), filter_neq("code", "y")]);
        assert_eq!(query, pairs(&[("filter", "name=x;code!=y")]));
    }

    #[test]
    fn test_canonical_order_and_last_search_wins() {
        let query = render_query(&[
            offset(20),
            expand(["agent"]),
            search("first"),
            limit(5),
            order("name", Direction::Asc),
            search("second"),
            filter_eq("archived", false),
            order("moment", Direction::Desc),
            expand(["agent", "organization"]),
        ]);

        assert_eq!(
            query,
            pairs(&[
                ("filter", "archived=false"),
                ("search", "second"),
                ("order", "name;moment,desc"),
                ("expand", "agent,organization"),
                ("limit", "5"),
                ("offset", "20"),
            ])
        );
    }

    #[test]
    fn test_empty_params_render_nothing() {
        assert!(render_query(&[]).is_empty());
    }

    #[test]
    fn test_filter_date_uses_api_format() {
        let moment = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let query = render_query(&[filter_date("moment", FilterType::Gte, &moment)]);
        assert_eq!(query, pairs(&[("filter", "moment>=2024-01-02 03:04:05.000")]));
    }

    #[test]
    fn test_filter_entity_uses_href() {
        let store = Store::with_id("42");
        let param = filter_entity("store", &store).unwrap();
        assert_eq!(
            render_query(&[param]),
            pairs(&[("filter", "store=https://api.moysklad.ru/api/remap/1.2/entity/store/42")])
        );

        assert!(filter_entity("store", &Store::default()).is_none());
    }
}
