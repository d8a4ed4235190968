//! Collaborator seams: the editor objects hooks are fired for

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a view, stable for the view's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Identity of a window, stable for the window's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// The slice of a view the dispatch core consumes. The host editor owns the
/// real view objects and hands them in as trait objects.
pub trait View {
    fn id(&self) -> ViewId;

    /// Boolean setting lookup on this view's settings. Unset settings read
    /// as false.
    fn bool_setting(&self, name: &str) -> bool;

    /// Number of active selections/cursors in this view.
    fn selection_count(&self) -> usize;

    /// Path of the buffer's backing file, if it has one.
    fn file_path(&self) -> Option<PathBuf>;
}

/// The slice of a window the dispatch core consumes.
pub trait Window {
    fn id(&self) -> WindowId;
}

/// External file-watch service. Stored by the watch-on-load handler, so it
/// must be shareable across threads.
pub trait FileWatcher: Send + Sync {
    fn watch(&self, path: &Path, view: ViewId) -> Result<()>;
}
