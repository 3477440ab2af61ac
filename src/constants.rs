//! Application-wide constants

/// Files served to the browser
pub mod files {
    /// Version token appended to distributed files, bump it to force caches to reload
    pub const FILE_VERSION: &str = "83";

    /// Default name of the feeds database
    pub const DEFAULT_FILE_NAME: &str = "feeds.db";

    /// Default location of the feeds database
    pub const DEFAULT_FILE_LOCATION: &str = "/";
}

/// Application metadata
pub mod app {
    /// Version of the whole application, independent of [`super::files::FILE_VERSION`]
    pub const SYSTEM_VERSION: &str = "1.3";

    /// Location of the home view
    pub const HOME_LOCATION: &str = "/";

    /// Log filter of the binary, low enough to let `notify` output through
    pub const DEFAULT_LOG_FILTER: &str = "info";

    /// Log filter of the binary in debug mode
    pub const DEBUG_LOG_FILTER: &str = "debug";
}

/// Entries API
pub mod api {
    /// Relative path used to fetch entries
    pub const ENTRIES_PATH: &str = "/api/entries";

    /// Query parameter used to deep-link a single entry
    pub const ENTRY_ID_PARAM: &str = "entry_id";
}

/// Display defaults
pub mod view {
    /// Number of entries requested per page
    pub const DEFAULT_PAGE_SIZE: usize = 200;

    /// Opacity of visited entries
    pub const ENTRIES_VISIT_ALPHA: f32 = 1.0;

    /// Opacity of dead entries
    pub const ENTRIES_DEAD_ALPHA: f32 = 0.5;

    /// Default age of the user
    pub const USER_AGE: u32 = 1;
}
