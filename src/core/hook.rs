//! Typed hooks: append-only callback registries with multicast dispatch
//!
//! Every hook family shares the same discipline: callbacks are appended at
//! registration time and invoked in registration order on every fire. There
//! is no removal, no reordering, and no isolation between callbacks; a
//! panicking callback aborts the rest of the walk.

use crate::core::subject::{View, Window};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Append-only list of erased callbacks shared by every hook family.
///
/// Dispatch walks a snapshot of the list, so a callback that registers
/// another callback (or recursively fires the same hook) never contends
/// with the walk's lock.
pub(crate) struct CallbackList<F: ?Sized> {
    slots: RwLock<Vec<Arc<F>>>,
}

impl<F: ?Sized> CallbackList<F> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn push(&self, callback: Arc<F>) {
        self.slots.write().push(callback);
    }

    pub(crate) fn snapshot(&self) -> Vec<Arc<F>> {
        self.slots.read().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.read().len()
    }
}

/// Callback signature for view lifecycle hooks.
pub type ViewCallback = dyn Fn(&dyn View) + Send + Sync;

/// A view lifecycle hook: fired when a view is created, loaded, saved,
/// focused, and so on.
pub struct ViewHook {
    name: Option<&'static str>,
    callbacks: CallbackList<ViewCallback>,
}

impl ViewHook {
    /// A hook carrying a display name for log lines.
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&dyn View) + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    /// Invoke every registered callback in registration order.
    pub fn fire(&self, view: &dyn View) {
        trace!(hook = self.name(), view = %view.id(), "firing view hook");
        for callback in self.callbacks.snapshot() {
            callback(view);
        }
    }

    /// Display name used in log lines; empty for unnamed hooks.
    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for ViewHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}

/// Callback signature for window lifecycle hooks.
pub type WindowCallback = dyn Fn(&dyn Window) + Send + Sync;

/// A window lifecycle hook: fired when a window is created or its project
/// changes.
pub struct WindowHook {
    name: Option<&'static str>,
    callbacks: CallbackList<WindowCallback>,
}

impl WindowHook {
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&dyn Window) + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    pub fn fire(&self, window: &dyn Window) {
        trace!(hook = self.name(), window = %window.id(), "firing window hook");
        for callback in self.callbacks.snapshot() {
            callback(window);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for WindowHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}

/// Callback signature for the startup hook.
pub type InitCallback = dyn Fn() + Send + Sync;

/// The startup hook, fired once after the host is up and before its main
/// run loop. Feature modules use it to defer heavy initialization work
/// such as scanning for plugins or loading key bindings.
pub struct InitHook {
    name: Option<&'static str>,
    callbacks: CallbackList<InitCallback>,
}

impl InitHook {
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    pub fn fire(&self) {
        debug!(hook = self.name(), "init callbacks executing");
        for callback in self.callbacks.snapshot() {
            callback();
        }
        debug!(hook = self.name(), "init callbacks finished");
    }

    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for InitHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}

/// Callback signature for path hooks.
pub type PathCallback = dyn Fn(&Path) + Send + Sync;

/// A path hook: fired when a package or scan path is added or removed.
pub struct PathHook {
    name: Option<&'static str>,
    callbacks: CallbackList<PathCallback>,
}

impl PathHook {
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&Path) + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    pub fn fire(&self, path: &Path) {
        trace!(hook = self.name(), path = %path.display(), "firing path hook");
        for callback in self.callbacks.snapshot() {
            callback(path);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for PathHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}

/// Callback signature for project hooks.
pub type ProjectCallback = dyn Fn(&dyn Window, &Path) + Send + Sync;

/// A project hook: fired when a folder is added to or removed from a
/// window's project.
pub struct ProjectHook {
    name: Option<&'static str>,
    callbacks: CallbackList<ProjectCallback>,
}

impl ProjectHook {
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&dyn Window, &Path) + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    pub fn fire(&self, window: &dyn Window, path: &Path) {
        trace!(
            hook = self.name(),
            window = %window.id(),
            path = %path.display(),
            "firing project hook"
        );
        for callback in self.callbacks.snapshot() {
            callback(window, path);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for ProjectHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}
