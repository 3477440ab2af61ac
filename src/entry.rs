//! Entry records and the local deep-link contract

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::api::ENTRY_ID_PARAM;
use crate::error::{ConfigError, Result};

/// A single bookmarked or feed item as returned by the entries API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default)]
    pub page_rating_votes: i64,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Entry {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            link: None,
            date_published: None,
            page_rating_votes: 0,
            bookmarked: false,
        }
    }

    pub fn local_link(&self) -> String {
        entry_local_link(self.id)
    }
}

/// Relative link to a single entry, e.g. `?entry_id=42`
pub fn entry_local_link(id: i64) -> String {
    format!("?{}={}", ENTRY_ID_PARAM, id)
}

/// Local link for an untyped entry record
///
/// The record must carry an integer `id`, either as a JSON number or as a
/// string holding one, so the link always parses back with [`entry_id_from_query`].
pub fn entry_local_link_from_value(entry: &Value) -> Result<String> {
    let id = match entry.get("id") {
        None | Some(Value::Null) => return Err(ConfigError::MissingEntryId),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| ConfigError::InvalidEntryId(number.to_string()))?,
        Some(Value::String(string)) => string
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidEntryId(string.clone()))?,
        Some(other) => return Err(ConfigError::InvalidEntryId(other.to_string())),
    };
    Ok(entry_local_link(id))
}

/// Extract the entry id from a query string such as `?entry_id=42&page=2`
///
/// Returns `Ok(None)` when the parameter is absent.
pub fn entry_id_from_query(query: &str) -> Result<Option<i64>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name != ENTRY_ID_PARAM {
            continue;
        }
        return value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEntryId(value.to_string()));
    }
    Ok(None)
}
