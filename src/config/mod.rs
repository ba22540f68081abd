//! Startup configuration from the environment.
//!
//! Two values are required and there are no defaults: the data-store
//! location and the listen port. Missing either is a startup failure:
//! the server never proceeds with an undefined port or an implicit store.

use std::path::PathBuf;

use crate::error::{HrError, HrResult};

/// Environment variable naming the data directory for the document store.
pub const DATA_DIR_VAR: &str = "HRCORE_DATA_DIR";

/// Environment variable naming the TCP port to listen on.
pub const PORT_VAR: &str = "HRCORE_PORT";

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the JSON document collections.
    pub data_dir: PathBuf,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> HrResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an injectable lookup, so tests can
    /// supply values without touching global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HrResult<Self> {
        let data_dir = lookup(DATA_DIR_VAR).ok_or_else(|| HrError::Config {
            message: format!("{DATA_DIR_VAR} is not set"),
        })?;

        let port_raw = lookup(PORT_VAR).ok_or_else(|| HrError::Config {
            message: format!("{PORT_VAR} is not set"),
        })?;
        let port: u16 = port_raw.parse().map_err(|_| HrError::Config {
            message: format!("{PORT_VAR} is not a valid port: {port_raw}"),
        })?;

        Ok(AppConfig {
            data_dir: PathBuf::from(data_dir),
            port,
        })
    }
}
