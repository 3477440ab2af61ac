use super::*;
use crate::constants::app::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER};
use crate::sort::SortField;
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::sync::Once;
use std::thread;

// Captures diagnostics records per thread, filtered like env_logger would
struct CaptureLogger;

thread_local! {
    static CAPTURE_FILTER: Cell<LevelFilter> = const { Cell::new(LevelFilter::Off) };
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == DIAGNOSTICS_TARGET
            && metadata.level() <= CAPTURE_FILTER.with(|filter| filter.get())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|captured| {
                captured
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Run `f` with the log filter used by the binary and return what went through `LogSink`
fn capture_log(filter: &str, f: impl FnOnce()) -> Vec<(Level, String)> {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&CAPTURE_LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURE_FILTER.with(|current| current.set(filter.parse().unwrap()));
    CAPTURED.with(|captured| captured.borrow_mut().clear());
    f();
    CAPTURE_FILTER.with(|current| current.set(LevelFilter::Off));
    CAPTURED.with(|captured| captured.take())
}

fn memory_registry() -> (Registry, MemorySink) {
    let sink = MemorySink::new();
    let registry = Registry::with_sink(Box::new(sink.clone()));
    (registry, sink)
}

#[test]
fn test_new_registry_defaults() {
    let registry: Registry = Registry::new();
    assert_eq!(registry.view_display_type(), ViewStyle::SearchEngine);
    assert_eq!(registry.view_display_style(), VisualStyle::Light);
    assert!(registry.view_show_icons());
    assert!(registry.view_small_icons());
    assert_eq!(registry.user_age(), 1);
    assert!(!registry.debug_mode());
    assert!(registry.entries_direct_links());
    assert!(!registry.highlight_bookmarks());
    assert!(registry.click_behavior_modal_window());
    assert_eq!(registry.sort_function().to_string(), "-page_rating_votes");
    assert_eq!(registry.default_page_size(), 200);
    assert_eq!(registry.entries_visit_alpha(), 1.0);
    assert_eq!(registry.entries_dead_alpha(), 0.5);

    assert!(registry.worker().is_none());
    assert!(registry.db().is_none());
    assert!(registry.object_list().is_none());
    assert!(!registry.is_initialized());
}

#[test]
fn test_notify_always_emits() {
    let (registry, sink) = memory_registry();
    registry.notify("x");
    assert_eq!(sink.lines(), ["x"]);
    assert_eq!(sink.records(), [(Level::Info, "x".to_string())]);
}

#[test]
fn test_notify_ignores_debug_flag() {
    let (mut registry, sink) = memory_registry();
    registry.set_debug_mode(true);
    registry.notify("x");
    registry.set_debug_mode(false);
    registry.notify("y");
    assert_eq!(sink.lines(), ["x", "y"]);
}

#[test]
fn test_debug_gated_by_flag() {
    let (mut registry, sink) = memory_registry();

    registry.debug("x");
    assert!(sink.lines().is_empty());

    registry.set_debug_mode(true);
    registry.debug("x");
    assert_eq!(sink.records(), [(Level::Debug, "x".to_string())]);

    sink.clear();
    registry.set_debug_mode(false);
    registry.debug("hidden");
    assert!(sink.lines().is_empty());
}

#[test]
fn test_sort_function_round_trip() {
    let (mut registry, _sink) = memory_registry();
    registry.set_sort_function("-date_published".parse().unwrap());
    assert_eq!(registry.sort_function().to_string(), "-date_published");
    assert_eq!(
        registry.sort_function(),
        SortKey::descending(SortField::DatePublished)
    );
}

#[test]
fn test_display_settings_round_trip() {
    let (mut registry, _sink) = memory_registry();

    registry.set_view_display_type(ViewStyle::Accordion);
    registry.set_view_display_style(VisualStyle::Dark);
    registry.set_view_show_icons(false);
    registry.set_view_small_icons(false);
    registry.set_user_age(42);
    registry.set_entries_direct_links(false);
    registry.set_highlight_bookmarks(true);
    registry.set_click_behavior_modal_window(false);
    registry.set_default_page_size(50);
    registry.set_entries_visit_alpha(0.25);
    registry.set_entries_dead_alpha(0.1);

    assert_eq!(registry.view_display_type(), ViewStyle::Accordion);
    assert_eq!(registry.view_display_style(), VisualStyle::Dark);
    assert!(!registry.view_show_icons());
    assert!(!registry.view_small_icons());
    assert_eq!(registry.user_age(), 42);
    assert!(!registry.entries_direct_links());
    assert!(registry.highlight_bookmarks());
    assert!(!registry.click_behavior_modal_window());
    assert_eq!(registry.default_page_size(), 50);
    assert_eq!(registry.entries_visit_alpha(), 0.25);
    assert_eq!(registry.entries_dead_alpha(), 0.1);

    assert_eq!(registry.preferences().view_display_type, ViewStyle::Accordion);
}

#[test]
fn test_alpha_values_are_not_clamped() {
    let (mut registry, _sink) = memory_registry();
    registry.set_entries_dead_alpha(3.5);
    registry.set_entries_visit_alpha(-1.0);
    assert_eq!(registry.entries_dead_alpha(), 3.5);
    assert_eq!(registry.entries_visit_alpha(), -1.0);
}

#[test]
fn test_preferences_mut() {
    let (mut registry, _sink) = memory_registry();
    registry.preferences_mut().view_display_type = ViewStyle::LinksOnly;
    assert_eq!(registry.view_display_type(), ViewStyle::LinksOnly);
}

#[test]
fn test_with_preferences() {
    let mut preferences = DisplayPreferences::default();
    preferences.default_page_size = 10;
    let registry: Registry = Registry::new().with_preferences(preferences.clone());
    assert_eq!(registry.preferences(), &preferences);
}

#[test]
fn test_runtime_handles_round_trip() {
    let mut registry: Registry<String, u32> = Registry::with_sink(Box::new(MemorySink::new()));

    registry.set_worker(Some("worker".to_string()));
    registry.set_db(Some(7));
    registry.set_object_list(Some(vec![json!({"id": 1}), json!({"id": 2})]));
    registry.set_initialized(true);

    assert_eq!(registry.worker().map(String::as_str), Some("worker"));
    assert_eq!(registry.db(), Some(&7));
    assert_eq!(registry.object_list().map(|list| list.len()), Some(2));
    assert!(registry.is_initialized());

    registry.set_worker(None);
    registry.set_object_list(None);
    assert!(registry.worker().is_none());
    assert!(registry.object_list().is_none());
}

#[test]
fn test_mark_initialized() {
    let mut registry: Registry<&str, &str> = Registry::with_sink(Box::new(MemorySink::new()));
    registry.mark_initialized("worker", "feeds.db");
    assert!(registry.is_initialized());
    assert_eq!(registry.worker(), Some(&"worker"));
    assert_eq!(registry.db(), Some(&"feeds.db"));
    assert!(registry.handles().object_list.is_none());
}

#[test]
fn test_set_sink_redirects_output() {
    let (mut registry, first) = memory_registry();
    registry.notify("a");
    let second = MemorySink::new();
    registry.set_sink(Box::new(second.clone()));
    registry.notify("b");
    assert_eq!(first.lines(), ["a"]);
    assert_eq!(second.lines(), ["b"]);
}

#[test]
fn test_shared_registry_across_threads() {
    let sink = MemorySink::new();
    let shared: SharedRegistry = Registry::with_sink(Box::new(sink.clone())).into_shared();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut registry = shared.lock().unwrap();
                registry.set_user_age(i);
                registry.notify(&format!("thread {}", i));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.lines().len(), 4);
    assert!(shared.lock().unwrap().user_age() < 4);
}

#[test]
fn test_debug_output_does_not_show_sink() {
    let registry: Registry = Registry::new();
    let text = format!("{:?}", registry);
    assert!(text.starts_with("Registry"));
    assert!(text.contains("debug_mode: false"));
}

#[test]
fn test_log_sink_notify_passes_default_filter() {
    let records = capture_log(DEFAULT_LOG_FILTER, || {
        let registry: Registry = Registry::new();
        registry.notify("x");
    });
    assert_eq!(records, [(Level::Info, "x".to_string())]);
}

#[test]
fn test_log_sink_notify_passes_debug_filter() {
    let records = capture_log(DEBUG_LOG_FILTER, || {
        let registry: Registry = Registry::new();
        registry.notify("x");
    });
    assert_eq!(records, [(Level::Info, "x".to_string())]);
}

#[test]
fn test_log_sink_debug_under_debug_filter() {
    let records = capture_log(DEBUG_LOG_FILTER, || {
        let mut registry: Registry = Registry::new();
        registry.debug("hidden");
        registry.set_debug_mode(true);
        registry.debug("x");
    });
    assert_eq!(records, [(Level::Debug, "x".to_string())]);
}

#[test]
fn test_log_sink_debug_off_by_default() {
    let records = capture_log(DEFAULT_LOG_FILTER, || {
        let registry: Registry = Registry::new();
        registry.debug("x");
    });
    assert!(records.is_empty());
}
