//! Runtime module: host and module lifecycle

pub mod host;

pub use host::{HostBuilder, HostConfig, Module, ModuleMetadata, RelayHost};
