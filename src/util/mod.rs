//! Shared helpers: the API date/time format and meta href conversions.

pub mod date_format;
mod meta_href;

pub use meta_href::{
    make_custom_entity_href, make_href, parse_custom_dictionary_id, parse_id, path_segment,
    CUSTOM_ENTITY_TYPE,
    DEFAULT_BASE_URL,
};
