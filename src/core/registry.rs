//! The hook registry: every declared extension point, owned in one place
//!
//! The registry is created by the host's composition root and handed to
//! feature modules during the init phase. Hook instances live as long as
//! the registry; there is no way to destroy or clear one. Independent
//! registries (e.g. one per test) never share state.

use crate::core::builtin;
use crate::core::hook::{InitHook, PathHook, ProjectHook, ViewHook, WindowHook};
use crate::core::query::QueryHook;

/// All built-in extension points of the editor host, each carrying its
/// display name for diagnostics.
pub struct HookRegistry {
    /// A new view was created.
    pub on_new: ViewHook,
    /// Loading a view's buffer has finished.
    pub on_load: ViewHook,
    /// A view gained input focus.
    pub on_activated: ViewHook,
    /// A view lost input focus.
    pub on_deactivated: ViewHook,
    /// A view is about to be closed.
    pub on_pre_close: ViewHook,
    /// A view has been closed.
    pub on_close: ViewHook,
    /// A view's buffer is about to be saved.
    pub on_pre_save: ViewHook,
    /// A view's buffer has been saved.
    pub on_post_save: ViewHook,
    /// The contents of a view's buffer changed.
    pub on_modified: ViewHook,
    /// A view's selection/cursor changed.
    pub on_selection_modified: ViewHook,
    /// A view's status changed.
    pub on_status_changed: ViewHook,

    /// A new window has been created.
    pub on_new_window: WindowHook,
    /// A window's project changed.
    pub on_project_changed: WindowHook,

    /// Context is being queried, typically while matching a key binding.
    pub on_query_context: QueryHook,

    /// Fired once at startup, before the main run loop.
    pub on_init: InitHook,

    /// A packages path was added.
    pub on_packages_path_add: PathHook,
    /// A packages path was removed.
    pub on_packages_path_remove: PathHook,
    /// A default-packages path was added.
    pub on_default_path_add: PathHook,
    /// A user-packages path was added.
    pub on_user_path_add: PathHook,

    /// A folder was added to a window's project.
    pub on_add_folder: ProjectHook,
    /// A folder was removed from a window's project.
    pub on_remove_folder: ProjectHook,
}

impl HookRegistry {
    /// A registry with the built-in context handlers already registered on
    /// `on_query_context`.
    pub fn new() -> Self {
        let registry = Self {
            on_new: ViewHook::named("on_new"),
            on_load: ViewHook::named("on_load"),
            on_activated: ViewHook::named("on_activated"),
            on_deactivated: ViewHook::named("on_deactivated"),
            on_pre_close: ViewHook::named("on_pre_close"),
            on_close: ViewHook::named("on_close"),
            on_pre_save: ViewHook::named("on_pre_save"),
            on_post_save: ViewHook::named("on_post_save"),
            on_modified: ViewHook::named("on_modified"),
            on_selection_modified: ViewHook::named("on_selection_modified"),
            on_status_changed: ViewHook::named("on_status_changed"),
            on_new_window: WindowHook::named("on_new_window"),
            on_project_changed: WindowHook::named("on_project_changed"),
            on_query_context: QueryHook::named("on_query_context"),
            on_init: InitHook::named("on_init"),
            on_packages_path_add: PathHook::named("on_packages_path_add"),
            on_packages_path_remove: PathHook::named("on_packages_path_remove"),
            on_default_path_add: PathHook::named("on_default_path_add"),
            on_user_path_add: PathHook::named("on_user_path_add"),
            on_add_folder: ProjectHook::named("on_add_folder"),
            on_remove_folder: ProjectHook::named("on_remove_folder"),
        };
        builtin::register_default_contexts(&registry);
        registry
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{Op, Operand, QueryResult};
    use crate::core::subject::{View, ViewId};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct TestView;

    impl View for TestView {
        fn id(&self) -> ViewId {
            ViewId(1)
        }

        fn bool_setting(&self, name: &str) -> bool {
            name == "wrap"
        }

        fn selection_count(&self) -> usize {
            1
        }

        fn file_path(&self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_hooks_carry_their_names() {
        let registry = HookRegistry::new();
        assert_eq!(registry.on_load.name(), "on_load");
        assert_eq!(registry.on_new_window.name(), "on_new_window");
        assert_eq!(registry.on_query_context.name(), "on_query_context");
        assert_eq!(registry.on_init.name(), "on_init");
        assert_eq!(registry.on_user_path_add.name(), "on_user_path_add");
        assert_eq!(registry.on_remove_folder.name(), "on_remove_folder");
    }

    #[test]
    fn test_new_registry_answers_builtin_contexts() {
        let registry = HookRegistry::new();
        let result = registry.on_query_context.resolve(
            &TestView,
            "setting.wrap",
            Op::Equal,
            &Operand::Bool(true),
            false,
        );
        assert_eq!(result, QueryResult::Match);
    }

    #[test]
    fn test_registries_are_independent() {
        let first = HookRegistry::new();
        let second = HookRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        first.on_new.register(move |_view| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        second.on_new.fire(&TestView);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        first.on_new.fire(&TestView);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
