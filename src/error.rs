//! Error handling system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Module registration failed: {0}")]
    ModuleRegistration(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Host state error: {0}")]
    HostState(String),

    #[error("File watch failed: {0}")]
    Watch(String),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;

pub trait ContextExt<T> {
    fn with_module(self, module_name: &str) -> Result<T>;
    fn with_hook(self, hook_name: &str) -> Result<T>;
}

impl<T> ContextExt<T> for Result<T> {
    fn with_module(self, module_name: &str) -> Result<T> {
        self.map_err(|e| match e {
            RelayError::ModuleRegistration(msg) => {
                RelayError::ModuleRegistration(format!("{} [module: {}]", msg, module_name))
            }
            other => RelayError::ModuleRegistration(format!("{} [module: {}]", other, module_name)),
        })
    }

    fn with_hook(self, hook_name: &str) -> Result<T> {
        self.map_err(|e| match e {
            RelayError::Watch(msg) => {
                RelayError::Watch(format!("{} [hook: {}]", msg, hook_name))
            }
            other => RelayError::Other(format!("{} [hook: {}]", other, hook_name)),
        })
    }
}

impl From<std::io::Error> for RelayError {
    fn from(error: std::io::Error) -> Self {
        RelayError::IoError(error.to_string())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal) => {
        return Err($crate::error::RelayError::Other($msg.to_string()))
    };
    ($err:expr) => {
        return Err($crate::error::RelayError::Other($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::RelayError::Other(format!($fmt, $($arg)*)))
    };
}
