//! Constants and process-wide configurables.
//!
//! Constants are fixed by the wire protocol of the storage engine, configurables
//! are read once from the environment the first time [`configurables`] is called.

use std::sync::OnceLock;

/// Separator between the collection part and the local part of a handle
pub const HANDLE_SEPARATOR: char = '/';

/// Name of the database every deployment carries
pub const SYSTEM_DATABASE: &str = "_system";

/// Profiling level requested by profiled queries
pub const PROFILE_LEVEL: u8 = 2;

/// Numeric error codes shared with the storage engine.
pub mod codes {
    /// Collection or view does not exist
    pub const DATA_SOURCE_NOT_FOUND: i32 = 1203;
    /// Malformed document handle
    pub const DOCUMENT_HANDLE_BAD: i32 = 1205;
    /// Malformed index handle
    pub const INDEX_HANDLE_BAD: i32 = 1214;
}

/// Environment variable names read by [`configurables`].
pub mod env {
    pub const DATABASE: &str = "DBFACADE_DATABASE";
}

#[derive(Debug, Clone)]
pub struct Configurables {
    /// Database name used by [`crate::Database::with_default_name`]
    pub database: String,
}

impl Default for Configurables {
    fn default() -> Self {
        Self {
            database: SYSTEM_DATABASE.to_owned(),
        }
    }
}

impl Configurables {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(database) = lookup(env::DATABASE)
            && !database.is_empty()
        {
            cfg.database = database;
        }

        cfg
    }

    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

static CONFIGURABLES: OnceLock<Configurables> = OnceLock::new();

/// Returns the process-wide configurables, loading them on first access.
pub fn configurables() -> &'static Configurables {
    CONFIGURABLES.get_or_init(Configurables::from_env)
}
