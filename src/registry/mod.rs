//! Configuration registry
//!
//! Owns the display preferences and runtime handles of the front end. The
//! application builds one [`Registry`] at startup and hands it to collaborators;
//! wrap it with [`Registry::into_shared`] when more than one thread needs it.

mod diagnostics;
pub use diagnostics::{DIAGNOSTICS_TARGET, DiagnosticSink, LogSink, MemorySink};

use log::Level;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::DisplayPreferences;
use crate::sort::SortKey;
use crate::view::{ViewStyle, VisualStyle};

/// Registry shared between threads
pub type SharedRegistry<W = (), D = ()> = Arc<Mutex<Registry<W, D>>>;

/// Handles assigned by the initialization code
#[derive(Debug)]
pub struct RuntimeHandles<W, D> {
    pub worker: Option<W>,
    pub db: Option<D>,
    /// Entry records fetched last
    pub object_list: Option<Vec<Value>>,
    pub initialized: bool,
}

impl<W, D> Default for RuntimeHandles<W, D> {
    fn default() -> Self {
        Self {
            worker: None,
            db: None,
            object_list: None,
            initialized: false,
        }
    }
}

pub struct Registry<W = (), D = ()> {
    preferences: DisplayPreferences,
    debug_mode: bool,
    handles: RuntimeHandles<W, D>,
    sink: Box<dyn DiagnosticSink>,
}

impl<W, D> Registry<W, D> {
    /// Registry with default preferences, writing diagnostics to the `log` facade
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            preferences: DisplayPreferences::default(),
            debug_mode: false,
            handles: RuntimeHandles::default(),
            sink,
        }
    }

    pub fn with_preferences(mut self, preferences: DisplayPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn into_shared(self) -> SharedRegistry<W, D> {
        Arc::new(Mutex::new(self))
    }

    pub fn preferences(&self) -> &DisplayPreferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut DisplayPreferences {
        &mut self.preferences
    }

    pub fn set_sink(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.sink = sink;
    }

    /// Write `text` to the diagnostic channel
    pub fn notify(&self, text: &str) {
        self.sink.emit(Level::Info, text);
    }

    /// Write `text` to the diagnostic channel if debug mode is on
    pub fn debug(&self, text: &str) {
        if self.debug_mode {
            self.sink.emit(Level::Debug, text);
        }
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn set_debug_mode(&mut self, debug_mode: bool) {
        if self.debug_mode != debug_mode {
            log::info!("debug mode {}", if debug_mode { "enabled" } else { "disabled" });
        }
        self.debug_mode = debug_mode;
    }

    // === Display preferences ===

    pub fn view_display_type(&self) -> ViewStyle {
        self.preferences.view_display_type
    }

    pub fn set_view_display_type(&mut self, view_display_type: ViewStyle) {
        self.preferences.view_display_type = view_display_type;
    }

    pub fn view_display_style(&self) -> VisualStyle {
        self.preferences.view_display_style
    }

    pub fn set_view_display_style(&mut self, view_display_style: VisualStyle) {
        self.preferences.view_display_style = view_display_style;
    }

    pub fn view_show_icons(&self) -> bool {
        self.preferences.view_show_icons
    }

    pub fn set_view_show_icons(&mut self, view_show_icons: bool) {
        self.preferences.view_show_icons = view_show_icons;
    }

    pub fn view_small_icons(&self) -> bool {
        self.preferences.view_small_icons
    }

    pub fn set_view_small_icons(&mut self, view_small_icons: bool) {
        self.preferences.view_small_icons = view_small_icons;
    }

    pub fn user_age(&self) -> u32 {
        self.preferences.user_age
    }

    pub fn set_user_age(&mut self, user_age: u32) {
        self.preferences.user_age = user_age;
    }

    pub fn entries_direct_links(&self) -> bool {
        self.preferences.entries_direct_links
    }

    pub fn set_entries_direct_links(&mut self, entries_direct_links: bool) {
        self.preferences.entries_direct_links = entries_direct_links;
    }

    pub fn highlight_bookmarks(&self) -> bool {
        self.preferences.highlight_bookmarks
    }

    pub fn set_highlight_bookmarks(&mut self, highlight_bookmarks: bool) {
        self.preferences.highlight_bookmarks = highlight_bookmarks;
    }

    pub fn click_behavior_modal_window(&self) -> bool {
        self.preferences.click_behavior_modal_window
    }

    pub fn set_click_behavior_modal_window(&mut self, click_behavior_modal_window: bool) {
        self.preferences.click_behavior_modal_window = click_behavior_modal_window;
    }

    pub fn sort_function(&self) -> SortKey {
        self.preferences.sort_function
    }

    pub fn set_sort_function(&mut self, sort_function: SortKey) {
        self.preferences.sort_function = sort_function;
    }

    pub fn default_page_size(&self) -> usize {
        self.preferences.default_page_size
    }

    pub fn set_default_page_size(&mut self, default_page_size: usize) {
        self.preferences.default_page_size = default_page_size;
    }

    pub fn entries_visit_alpha(&self) -> f32 {
        self.preferences.entries_visit_alpha
    }

    pub fn set_entries_visit_alpha(&mut self, entries_visit_alpha: f32) {
        self.preferences.entries_visit_alpha = entries_visit_alpha;
    }

    pub fn entries_dead_alpha(&self) -> f32 {
        self.preferences.entries_dead_alpha
    }

    pub fn set_entries_dead_alpha(&mut self, entries_dead_alpha: f32) {
        self.preferences.entries_dead_alpha = entries_dead_alpha;
    }

    // === Runtime handles ===

    pub fn worker(&self) -> Option<&W> {
        self.handles.worker.as_ref()
    }

    pub fn set_worker(&mut self, worker: Option<W>) {
        self.handles.worker = worker;
    }

    pub fn db(&self) -> Option<&D> {
        self.handles.db.as_ref()
    }

    pub fn set_db(&mut self, db: Option<D>) {
        self.handles.db = db;
    }

    pub fn object_list(&self) -> Option<&[Value]> {
        self.handles.object_list.as_deref()
    }

    pub fn set_object_list(&mut self, object_list: Option<Vec<Value>>) {
        self.handles.object_list = object_list;
    }

    pub fn is_initialized(&self) -> bool {
        self.handles.initialized
    }

    pub fn set_initialized(&mut self, initialized: bool) {
        self.handles.initialized = initialized;
    }

    /// Store both handles and flag the system as initialized
    pub fn mark_initialized(&mut self, worker: W, db: D) {
        if self.handles.initialized {
            log::warn!("registry initialized twice, replacing runtime handles");
        }
        self.handles.worker = Some(worker);
        self.handles.db = Some(db);
        self.handles.initialized = true;
        log::info!("registry initialized");
    }

    pub fn handles(&self) -> &RuntimeHandles<W, D> {
        &self.handles
    }
}

impl<W, D> Default for Registry<W, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, D> fmt::Debug for Registry<W, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("preferences", &self.preferences)
            .field("debug_mode", &self.debug_mode)
            .field("initialized", &self.handles.initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod registry_tests;
