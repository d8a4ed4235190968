//! Core module: hooks, context queries, and the registry

pub mod builtin;
pub mod hook;
pub mod query;
pub mod registry;
pub mod subject;

pub use builtin::{register_watch_on_load, NUM_SELECTIONS, SETTING_PREFIX};
pub use hook::{InitHook, PathHook, ProjectHook, ViewHook, WindowHook};
pub use query::{Op, Operand, QueryHook, QueryResult};
pub use registry::HookRegistry;
pub use subject::{FileWatcher, View, ViewId, Window, WindowId};
