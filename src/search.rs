//! Search suggestions
//!
//! Suggestions are fragments of the SQL-like filter language accepted by the
//! entries query builder, e.g. `t.tag LIKE '%funny%'`. They are passed on verbatim.

use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::initial_search_suggestions;

const LIKE_PATTERN: &str =
    r"^\s*(?P<column>[A-Za-z_][A-Za-z0-9_.]*)\s+(?i:LIKE)\s+'(?P<pattern>[^']*)'\s*$";

static LIKE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn like_regex() -> Option<&'static Regex> {
    LIKE_REGEX
        .get_or_init(|| match Regex::new(LIKE_PATTERN) {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::warn!("failed to parse regex {:?}: {}", LIKE_PATTERN, err);
                None
            }
        })
        .as_ref()
}

/// A `<column> LIKE '<pattern>'` fragment
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchSuggestion {
    pub text: String,
    pub column: String,
    pub pattern: String,
}

impl SearchSuggestion {
    pub fn parse(text: &str) -> Option<Self> {
        let captures = like_regex()?.captures(text)?;
        Some(Self {
            text: text.to_string(),
            column: captures["column"].to_string(),
            pattern: captures["pattern"].to_string(),
        })
    }

    /// Table alias of the column, `t` for `t.tag`
    pub fn table_alias(&self) -> Option<&str> {
        self.column.split_once('.').map(|(alias, _)| alias)
    }
}

/// Initial suggestions containing `input`, case-insensitively, in catalog order
pub fn matching_suggestions(input: &str) -> Vec<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return initial_search_suggestions().to_vec();
    }

    let pattern = regex::escape(input);
    let regex = match regex::RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(ok) => ok,
        Err(err) => {
            log::warn!("failed to parse regex {:?}: {}", pattern, err);
            return Vec::new();
        }
    };

    initial_search_suggestions()
        .iter()
        .copied()
        .filter(|suggestion| regex.is_match(suggestion))
        .collect()
}
