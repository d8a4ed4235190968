//! Built-in handlers registered on every registry
//!
//! Two context handlers cover the settings-flag and selection-count keys
//! every key-binding scheme depends on; one lifecycle handler starts
//! watching a view's backing file once its buffer has loaded.

use crate::core::query::{Op, Operand, QueryResult};
use crate::core::registry::HookRegistry;
use crate::core::subject::{FileWatcher, View};
use std::sync::Arc;
use tracing::warn;

/// Keys of the form `setting.<name>` query the boolean setting `<name>`.
pub const SETTING_PREFIX: &str = "setting.";

/// Key querying the number of active selections in a view.
pub const NUM_SELECTIONS: &str = "num_selections";

pub(crate) fn register_default_contexts(registry: &HookRegistry) {
    registry.on_query_context.register(settings_flag);
    registry.on_query_context.register(selection_count);
}

/// `setting.<name>` under equality answers from the view's boolean
/// settings. Any other operator on a `setting.*` key is left for later
/// handlers.
fn settings_flag(
    view: &dyn View,
    key: &str,
    op: Op,
    _operand: &Operand,
    _match_all: bool,
) -> QueryResult {
    let Some(name) = key.strip_prefix(SETTING_PREFIX) else {
        return QueryResult::Unknown;
    };
    if op != Op::Equal {
        return QueryResult::Unknown;
    }
    QueryResult::from_match(view.bool_setting(name))
}

/// `num_selections` compares the operand against the view's selection
/// count under `Equal` or `NotEqual`.
fn selection_count(
    view: &dyn View,
    key: &str,
    op: Op,
    operand: &Operand,
    _match_all: bool,
) -> QueryResult {
    if key != NUM_SELECTIONS {
        return QueryResult::Unknown;
    }
    let wanted = operand.as_int();
    let actual = view.selection_count() as i64;
    match op {
        Op::Equal => QueryResult::from_match(actual == wanted),
        Op::NotEqual => QueryResult::from_match(actual != wanted),
        _ => QueryResult::Unknown,
    }
}

/// Register the watch-on-load handler: once a view's buffer has loaded,
/// ask the watch service to track its backing file. Views without a
/// backing file are skipped; a watcher failure is logged and tolerated so
/// the rest of the dispatch walk runs.
pub fn register_watch_on_load(registry: &HookRegistry, watcher: Arc<dyn FileWatcher>) {
    registry.on_load.register(move |view| {
        let Some(path) = view.file_path() else {
            return;
        };
        if let Err(err) = watcher.watch(&path, view.id()) {
            warn!(view = %view.id(), path = %path.display(), %err, "file watch failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subject::ViewId;
    use crate::error::{RelayError, Result};
    use parking_lot::Mutex;
    use std::path::{Path, PathBuf};

    struct TestView {
        wrap: bool,
        selections: usize,
        path: Option<PathBuf>,
    }

    impl TestView {
        fn with_selections(selections: usize) -> Self {
            Self {
                wrap: false,
                selections,
                path: None,
            }
        }

        fn with_wrap(wrap: bool) -> Self {
            Self {
                wrap,
                selections: 1,
                path: None,
            }
        }
    }

    impl View for TestView {
        fn id(&self) -> ViewId {
            ViewId(1)
        }

        fn bool_setting(&self, name: &str) -> bool {
            name == "wrap" && self.wrap
        }

        fn selection_count(&self) -> usize {
            self.selections
        }

        fn file_path(&self) -> Option<PathBuf> {
            self.path.clone()
        }
    }

    struct RecordingWatcher {
        watched: Mutex<Vec<(PathBuf, ViewId)>>,
        fail: bool,
    }

    impl RecordingWatcher {
        fn new() -> Self {
            Self {
                watched: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                watched: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl FileWatcher for RecordingWatcher {
        fn watch(&self, path: &Path, view: ViewId) -> Result<()> {
            if self.fail {
                return Err(RelayError::Watch("watch service down".to_string()));
            }
            self.watched.lock().push((path.to_path_buf(), view));
            Ok(())
        }
    }

    fn resolve(view: &dyn View, key: &str, op: Op, operand: Operand) -> QueryResult {
        let registry = HookRegistry::new();
        registry.on_query_context.resolve(view, key, op, &operand, false)
    }

    #[test]
    fn test_setting_flag_equality() {
        let on = TestView::with_wrap(true);
        let off = TestView::with_wrap(false);

        assert_eq!(
            resolve(&on, "setting.wrap", Op::Equal, Operand::Bool(true)),
            QueryResult::Match
        );
        assert_eq!(
            resolve(&off, "setting.wrap", Op::Equal, Operand::Bool(true)),
            QueryResult::NoMatch
        );
    }

    #[test]
    fn test_setting_flag_other_operator_falls_through() {
        let view = TestView::with_wrap(true);
        assert_eq!(
            resolve(&view, "setting.wrap", Op::NotEqual, Operand::Bool(true)),
            QueryResult::Unknown
        );
        assert_eq!(
            resolve(&view, "setting.wrap", Op::RegexMatch, Operand::from("tru.")),
            QueryResult::Unknown
        );
    }

    #[test]
    fn test_unset_setting_is_no_match() {
        let view = TestView::with_wrap(true);
        assert_eq!(
            resolve(&view, "setting.spell_check", Op::Equal, Operand::Bool(true)),
            QueryResult::NoMatch
        );
    }

    #[test]
    fn test_num_selections_equality() {
        let view = TestView::with_selections(2);

        assert_eq!(
            resolve(&view, "num_selections", Op::Equal, Operand::Number(2.0)),
            QueryResult::Match
        );
        assert_eq!(
            resolve(&view, "num_selections", Op::Equal, Operand::Number(3.0)),
            QueryResult::NoMatch
        );
        assert_eq!(
            resolve(&view, "num_selections", Op::NotEqual, Operand::Number(3.0)),
            QueryResult::Match
        );
        assert_eq!(
            resolve(&view, "num_selections", Op::NotEqual, Operand::Number(2.0)),
            QueryResult::NoMatch
        );
    }

    #[test]
    fn test_num_selections_other_operator_falls_through() {
        let view = TestView::with_selections(2);
        assert_eq!(
            resolve(&view, "num_selections", Op::RegexMatch, Operand::Number(2.0)),
            QueryResult::Unknown
        );
    }

    #[test]
    fn test_num_selections_non_numeric_operand_coerces_to_zero() {
        let view = TestView::with_selections(2);
        assert_eq!(
            resolve(&view, "num_selections", Op::Equal, Operand::from("two")),
            QueryResult::NoMatch
        );
        assert_eq!(
            resolve(&view, "num_selections", Op::NotEqual, Operand::from("two")),
            QueryResult::Match
        );
    }

    #[test]
    fn test_unhandled_key_is_unknown() {
        let view = TestView::with_selections(1);
        assert_eq!(
            resolve(&view, "vi_command_mode", Op::Equal, Operand::Bool(true)),
            QueryResult::Unknown
        );
    }

    #[test]
    fn test_watch_on_load_watches_backing_file() {
        let registry = HookRegistry::new();
        let watcher = Arc::new(RecordingWatcher::new());
        register_watch_on_load(&registry, Arc::clone(&watcher) as Arc<dyn FileWatcher>);

        let view = TestView {
            wrap: false,
            selections: 1,
            path: Some(PathBuf::from("/tmp/notes.txt")),
        };
        registry.on_load.fire(&view);

        assert_eq!(
            *watcher.watched.lock(),
            vec![(PathBuf::from("/tmp/notes.txt"), ViewId(1))]
        );
    }

    #[test]
    fn test_watch_on_load_skips_scratch_views() {
        let registry = HookRegistry::new();
        let watcher = Arc::new(RecordingWatcher::new());
        register_watch_on_load(&registry, Arc::clone(&watcher) as Arc<dyn FileWatcher>);

        registry.on_load.fire(&TestView::with_selections(1));
        assert!(watcher.watched.lock().is_empty());
    }

    #[test]
    fn test_watcher_failure_does_not_abort_walk() {
        let registry = HookRegistry::new();
        let watcher = Arc::new(RecordingWatcher::failing());
        register_watch_on_load(&registry, watcher as Arc<dyn FileWatcher>);

        let ran = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        registry.on_load.register(move |_view| {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        });

        let view = TestView {
            wrap: false,
            selections: 1,
            path: Some(PathBuf::from("/tmp/notes.txt")),
        };
        registry.on_load.fire(&view);
        assert!(ran.load(std::sync::atomic::Ordering::SeqCst));
    }
}
