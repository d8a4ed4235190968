//! Quill Relay - extension-point dispatch for an editor host
//!
//! Typed hooks with append-only callback registries: multicast dispatch
//! for lifecycle notifications, short-circuit resolution for context
//! queries.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod error;
pub mod runtime;

pub mod prelude {
    //! Commonly used types and traits

    pub use crate::core::{
        register_watch_on_load, FileWatcher, HookRegistry, InitHook, Op, Operand, PathHook,
        ProjectHook, QueryHook, QueryResult, View, ViewHook, ViewId, Window, WindowHook, WindowId,
    };
    pub use crate::error::{ContextExt, RelayError, Result};
    pub use crate::runtime::{HostBuilder, HostConfig, Module, ModuleMetadata, RelayHost};
    pub use crate::bail;
}

pub use crate::core::{HookRegistry, Op, Operand, QueryResult, View, Window};
pub use crate::error::{RelayError, Result};
pub use crate::runtime::RelayHost;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

pub fn build_info() -> String {
    format!("Quill Relay {}", VERSION)
}
