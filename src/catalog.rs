//! Fixed lookup data offered to the front end

use serde::Serialize;

use crate::constants::{api, app, files};

/// Canned filter expressions offered before the user types anything
const INITIAL_SEARCH_SUGGESTIONS: &[&str] = &[
    "link LIKE '%youtube.com/channel%'",
    "link LIKE '%github.com/%'",
    "link LIKE '%reddit.com/%'",
    "link LIKE 'https://x.com/%'",
    "t.tag LIKE '%search engine%'",
    "t.tag LIKE '%operating system%'",
    "t.tag LIKE '%interesting%'",
    "t.tag LIKE '%self host%'",
    "t.tag LIKE '%programming language%'",
    "t.tag LIKE '%music artist%'",
    "t.tag LIKE '%music band%'",
    "t.tag LIKE '%video games%'",
    "t.tag LIKE '%video game%'",
    "t.tag LIKE '%wtf%'",
    "t.tag LIKE '%funny%'",
];

const VIEW_STYLES: &[&str] = &[
    "standard",
    "gallery",
    "search-engine",
    "content-centric",
    "accordion",
    "links-only",
];

const ORDER_POSSIBILITIES: &[(&str, &str)] = &[
    ("page_rating_votes", "Votes ASC"),
    ("-page_rating_votes", "Votes DESC"),
    ("view_count", "Views ASC"),
    ("-view_count", "Views DESC"),
    ("date_published", "Date published ASC"),
    ("-date_published", "Date published DESC"),
    ("followers_count", "Followers ASC"),
    ("-followers_count", "Followers DESC"),
    ("stars", "Stars ASC"),
    ("-stars", "Stars DESC"),
];

pub fn file_version() -> &'static str {
    files::FILE_VERSION
}

pub fn system_version() -> &'static str {
    app::SYSTEM_VERSION
}

pub fn default_file_name() -> &'static str {
    files::DEFAULT_FILE_NAME
}

pub fn default_file_location() -> &'static str {
    files::DEFAULT_FILE_LOCATION
}

pub fn home_location() -> &'static str {
    app::HOME_LOCATION
}

/// Additional database files. Always empty, only [`default_file_name`] is loaded.
pub fn file_list() -> Vec<String> {
    Vec::new()
}

pub fn entry_api() -> &'static str {
    api::ENTRIES_PATH
}

pub fn initial_search_suggestions() -> &'static [&'static str] {
    INITIAL_SEARCH_SUGGESTIONS
}

/// Valid display types in menu order
pub fn view_styles() -> &'static [&'static str] {
    VIEW_STYLES
}

/// `(sort key, label)` pairs in menu order
pub fn order_possibilities() -> &'static [(&'static str, &'static str)] {
    ORDER_POSSIBILITIES
}

/// Snapshot of every catalog value
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    pub file_version: &'static str,
    pub system_version: &'static str,
    pub default_file_name: &'static str,
    pub default_file_location: &'static str,
    pub home_location: &'static str,
    pub file_list: Vec<String>,
    pub entry_api: &'static str,
    pub initial_search_suggestions: &'static [&'static str],
    pub view_styles: &'static [&'static str],
    pub order_possibilities: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            file_version: file_version(),
            system_version: system_version(),
            default_file_name: default_file_name(),
            default_file_location: default_file_location(),
            home_location: home_location(),
            file_list: file_list(),
            entry_api: entry_api(),
            initial_search_suggestions: initial_search_suggestions(),
            view_styles: view_styles(),
            order_possibilities: order_possibilities(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
