//! Database backend adapters for the bad-data-workshop generators.
//!
//! One [`DatabaseAdapter`] contract hides the dialect differences between
//! the supported backends:
//!
//! - PostgreSQL and Redshift isolate generated objects in a dedicated
//!   schema and drop it with `CASCADE`
//! - MySQL has no sub-database namespace, so teardown enumerates the
//!   `information_schema` catalog for prefixed table names and drops them
//!   one by one
//!
//! All data values travel as bound statement parameters; adapters never
//! interpolate values into SQL text. One connection and one open
//! transaction are held between `connect()` and `close()`; `commit()`
//! makes everything since the previous commit durable and reopens the
//! transaction.

pub mod batch;
pub mod mysql;
mod pgwire;
pub mod postgres;
pub mod redshift;
pub mod testing;

use async_trait::async_trait;
use thiserror::Error;
use workshop_core::{BackendKind, DbConfig, SqlValue};

/// Errors surfaced by the adapters.
///
/// No operation retries; every error propagates to the caller, which is
/// expected to close the connection on the way out.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The backend could not be reached or rejected the credentials.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Creating or dropping the namespace/prefixed tables failed.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A SQL statement failed to execute.
    #[error("Execution error: {0}")]
    Execution(String),

    /// An operation was attempted before `connect()` succeeded.
    #[error("Adapter is not connected")]
    NotConnected,
}

impl AdapterError {
    /// Reclassify an execution failure raised while manipulating the
    /// namespace itself.
    pub(crate) fn into_schema(self) -> AdapterError {
        match self {
            AdapterError::Execution(msg) => AdapterError::Schema(msg),
            other => other,
        }
    }
}

impl From<tokio_postgres::Error> for AdapterError {
    fn from(e: tokio_postgres::Error) -> Self {
        AdapterError::Execution(e.to_string())
    }
}

impl From<mysql_async::Error> for AdapterError {
    fn from(e: mysql_async::Error) -> Self {
        AdapterError::Execution(e.to_string())
    }
}

/// Uniform contract over the supported SQL backends.
#[async_trait]
pub trait DatabaseAdapter: Send {
    /// The dialect this adapter speaks.
    fn kind(&self) -> BackendKind;

    /// Establish the session and open the run's transaction.
    async fn connect(&mut self) -> Result<(), AdapterError>;

    /// Create the isolation boundary for generated objects.
    async fn create_schema(&mut self) -> Result<(), AdapterError>;

    /// Destroy the isolation boundary and everything in it.
    async fn drop_schema(&mut self) -> Result<(), AdapterError>;

    /// Run one unparameterized statement (DDL, transaction control).
    async fn execute(&mut self, sql: &str) -> Result<(), AdapterError>;

    /// Issue one bulk parameterized INSERT for `rows`.
    ///
    /// Every row must match `columns` in length and order.
    async fn insert_rows(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
    ) -> Result<(), AdapterError>;

    /// Commit the open transaction and begin a new one.
    async fn commit(&mut self) -> Result<(), AdapterError>;

    /// Release the session. Safe to call on a never-connected or
    /// partially-connected adapter.
    async fn close(&mut self) -> Result<(), AdapterError>;

    /// Auto-increment column syntax for this dialect.
    fn auto_increment(&self) -> &'static str {
        self.kind().auto_increment()
    }

    /// Prefix prepended to every generated table name.
    fn table_prefix(&self) -> &'static str {
        self.kind().table_prefix()
    }

    /// Boolean column type for this dialect.
    fn boolean_type(&self) -> &'static str {
        self.kind().boolean_type()
    }
}

/// Select the adapter implementation for the configured backend.
pub fn adapter_for(config: &DbConfig) -> Box<dyn DatabaseAdapter> {
    match config.kind {
        BackendKind::Postgres => Box::new(postgres::PostgresAdapter::new(config.clone())),
        BackendKind::MySQL => Box::new(mysql::MySQLAdapter::new(config.clone())),
        BackendKind::Redshift => Box::new(redshift::RedshiftAdapter::new(config.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: BackendKind) -> DbConfig {
        DbConfig {
            kind,
            host: "localhost".to_string(),
            port: kind.default_port(),
            database: "workshop".to_string(),
            user: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_factory_selects_matching_dialect() {
        for kind in BackendKind::ALL {
            let adapter = adapter_for(&config(kind));
            assert_eq!(adapter.kind(), kind);
        }
    }

    #[test]
    fn test_capabilities_delegate_to_kind() {
        let adapter = adapter_for(&config(BackendKind::MySQL));
        assert_eq!(adapter.auto_increment(), "INT AUTO_INCREMENT");
        assert_eq!(adapter.table_prefix(), "bdw_");
        assert_eq!(adapter.boolean_type(), "TINYINT(1)");
    }

    #[tokio::test]
    async fn test_close_is_idempotent_before_connect() {
        for kind in BackendKind::ALL {
            let mut adapter = adapter_for(&config(kind));
            adapter.close().await.unwrap();
            adapter.close().await.unwrap();
        }
    }
}
