//! Host runtime: module lifecycle around the hook registry
//!
//! Registration happens in one explicit init phase before any dispatch.
//! Modules are registered in the order they were added; for context
//! queries that order decides which handler answers first, so the host
//! application controls it deliberately.

use crate::core::{builtin, FileWatcher, HookRegistry};
use crate::error::{ContextExt, RelayError, Result};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct ModuleMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl ModuleMetadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// A feature module. Its one lifecycle moment is `register`, called during
/// the host's init phase with the registry it may hook into; everything
/// after that happens through the callbacks it registered.
pub trait Module: Send + Sync {
    fn metadata(&self) -> ModuleMetadata {
        ModuleMetadata::new("unknown", "0.1.0")
    }

    fn register(&mut self, _hooks: &HookRegistry) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> String {
        self.metadata().name
    }
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub name: String,
    pub continue_on_failure: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: "QuillRelayHost".to_string(),
            continue_on_failure: false,
        }
    }
}

impl HostConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn continue_on_failure(mut self, continue_on_failure: bool) -> Self {
        self.continue_on_failure = continue_on_failure;
        self
    }
}

pub struct HostBuilder {
    config: Option<HostConfig>,
    modules: Vec<Box<dyn Module>>,
    watcher: Option<Arc<dyn FileWatcher>>,
}

impl HostBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            modules: Vec::new(),
            watcher: None,
        }
    }

    pub fn with_config(mut self, config: HostConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn add_module<M: Module + 'static>(mut self, module: M) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn add_modules<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Module>>,
    {
        self.modules.extend(modules);
        self
    }

    pub fn with_file_watcher(mut self, watcher: Arc<dyn FileWatcher>) -> Self {
        self.watcher = Some(watcher);
        self
    }

    pub fn build(self) -> RelayHost {
        let config = self.config.unwrap_or_default();
        let hooks = Arc::new(HookRegistry::new());

        // Wired before any module registers so it keeps its slot at the
        // front of on_load.
        if let Some(watcher) = self.watcher {
            builtin::register_watch_on_load(&hooks, watcher);
        }

        RelayHost {
            config,
            hooks,
            modules: self.modules,
            initialized: false,
        }
    }
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RelayHost {
    config: HostConfig,
    hooks: Arc<HookRegistry>,
    modules: Vec<Box<dyn Module>>,
    initialized: bool,
}

impl RelayHost {
    pub fn build() -> HostBuilder {
        HostBuilder::new()
    }

    /// Run the init phase: each module's `register` in insertion order,
    /// then fire `on_init` exactly once.
    pub fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Err(RelayError::HostState(
                "host already initialized".to_string(),
            ));
        }

        debug!(
            host = %self.config.name,
            modules = self.modules.len(),
            "registering modules"
        );

        for module in &mut self.modules {
            let name = module.name();
            if let Err(err) = module.register(&self.hooks).with_module(&name) {
                if self.config.continue_on_failure {
                    error!(module = %name, %err, "module registration failed, skipping");
                } else {
                    return Err(err);
                }
            }
        }

        self.hooks.on_init.fire();
        self.initialized = true;
        Ok(())
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Shared handle to the registry for collaborators that outlive a
    /// borrow of the host.
    pub fn shared_hooks(&self) -> Arc<HookRegistry> {
        Arc::clone(&self.hooks)
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn has_module(&self, name: &str) -> bool {
        self.modules.iter().any(|module| module.name() == name)
    }

    pub fn list_modules(&self) -> Vec<ModuleMetadata> {
        self.modules.iter().map(|module| module.metadata()).collect()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
