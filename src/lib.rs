//! Configuration for the feeds browsing front end
//!
//! Display preferences, sort order, entry API paths and the lookup lists shown
//! in the front end menus.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod registry;
pub mod search;
pub mod sort;
pub mod view;

pub use catalog::{
    Catalog, default_file_location, default_file_name, entry_api, file_list, file_version,
    home_location, initial_search_suggestions, order_possibilities, system_version, view_styles,
};
pub use config::DisplayPreferences;
pub use entry::{Entry, entry_id_from_query, entry_local_link, entry_local_link_from_value};
pub use error::{ConfigError, Result};
pub use registry::{DiagnosticSink, LogSink, MemorySink, Registry, RuntimeHandles, SharedRegistry};
pub use search::{SearchSuggestion, matching_suggestions};
pub use sort::{SortDirection, SortField, SortKey};
pub use view::{ViewStyle, VisualStyle};
