//! Connection configuration and backend dialect capabilities.

use serde::{Deserialize, Serialize};

/// Namespace used by backends with real schema support.
pub const SCHEMA_NAME: &str = "bad_data_workshop";

/// Table-name prefix used by backends without schema support.
pub const TABLE_PREFIX: &str = "bdw_";

/// The supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Postgres,
    MySQL,
    Redshift,
}

impl BackendKind {
    /// All supported backends.
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Postgres,
        BackendKind::MySQL,
        BackendKind::Redshift,
    ];

    /// CLI/display name of the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Postgres => "postgres",
            BackendKind::MySQL => "mysql",
            BackendKind::Redshift => "redshift",
        }
    }

    /// Default server port when none is configured.
    pub fn default_port(&self) -> u16 {
        match self {
            BackendKind::Postgres => 5432,
            BackendKind::MySQL => 3306,
            BackendKind::Redshift => 5439,
        }
    }

    /// Column syntax for an auto-incrementing integer primary key.
    pub fn auto_increment(&self) -> &'static str {
        match self {
            BackendKind::Postgres => "SERIAL",
            BackendKind::MySQL => "INT AUTO_INCREMENT",
            BackendKind::Redshift => "INTEGER IDENTITY(1,1)",
        }
    }

    /// Prefix prepended to every generated table name.
    ///
    /// Postgres and Redshift isolate generated objects in a dedicated
    /// schema, so the prefix is the qualified namespace. MySQL has no
    /// sub-database namespace and uses a literal name prefix instead.
    pub fn table_prefix(&self) -> &'static str {
        match self {
            BackendKind::Postgres | BackendKind::Redshift => "bad_data_workshop.",
            BackendKind::MySQL => TABLE_PREFIX,
        }
    }

    /// Column type used for boolean values.
    pub fn boolean_type(&self) -> &'static str {
        match self {
            BackendKind::Postgres | BackendKind::Redshift => "BOOLEAN",
            BackendKind::MySQL => "TINYINT(1)",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database connection configuration for one setup/teardown run.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub kind: BackendKind,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}
