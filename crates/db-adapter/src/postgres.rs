//! PostgreSQL adapter.

use crate::pgwire::PgSession;
use crate::{AdapterError, DatabaseAdapter};
use async_trait::async_trait;
use tracing::info;
use workshop_core::{BackendKind, DbConfig, SqlValue, SCHEMA_NAME};

/// Adapter for PostgreSQL. Generated objects live in a dedicated schema,
/// dropped with `CASCADE` on teardown.
pub struct PostgresAdapter {
    config: DbConfig,
    session: PgSession,
}

impl PostgresAdapter {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            session: PgSession::new(),
        }
    }
}

#[async_trait]
impl DatabaseAdapter for PostgresAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }

    async fn connect(&mut self) -> Result<(), AdapterError> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            "connecting to PostgreSQL"
        );
        self.session.connect(&self.config).await
    }

    async fn create_schema(&mut self) -> Result<(), AdapterError> {
        self.session
            .execute(&format!("CREATE SCHEMA IF NOT EXISTS {SCHEMA_NAME}"))
            .await
            .map_err(AdapterError::into_schema)?;
        self.session.commit().await
    }

    async fn drop_schema(&mut self) -> Result<(), AdapterError> {
        self.session
            .execute(&format!("DROP SCHEMA IF EXISTS {SCHEMA_NAME} CASCADE"))
            .await
            .map_err(AdapterError::into_schema)?;
        self.session.commit().await
    }

    async fn execute(&mut self, sql: &str) -> Result<(), AdapterError> {
        self.session.execute(sql).await
    }

    async fn insert_rows(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
    ) -> Result<(), AdapterError> {
        self.session.insert_rows(table, columns, rows).await
    }

    async fn commit(&mut self) -> Result<(), AdapterError> {
        self.session.commit().await
    }

    async fn close(&mut self) -> Result<(), AdapterError> {
        self.session.close().await
    }
}
