//! Shared session plumbing for backends speaking the PostgreSQL wire
//! protocol (PostgreSQL itself and Redshift).

use crate::AdapterError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use workshop_core::{DbConfig, SqlType, SqlValue};

/// One client connection with an open transaction.
pub(crate) struct PgSession {
    client: Option<Client>,
}

impl PgSession {
    pub(crate) fn new() -> Self {
        Self { client: None }
    }

    pub(crate) async fn connect(&mut self, config: &DbConfig) -> Result<(), AdapterError> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&config.host)
            .port(config.port)
            .dbname(&config.database)
            .user(&config.user)
            .password(&config.password);

        let (client, connection) = pg_config
            .connect(NoTls)
            .await
            .map_err(|e| AdapterError::Connection(e.to_string()))?;

        // The connection object drives the socket; it resolves when the
        // client is dropped.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("connection task error: {e}");
            }
        });

        client.batch_execute("BEGIN").await?;
        self.client = Some(client);
        Ok(())
    }

    fn client(&self) -> Result<&Client, AdapterError> {
        self.client.as_ref().ok_or(AdapterError::NotConnected)
    }

    pub(crate) async fn execute(&self, sql: &str) -> Result<(), AdapterError> {
        tracing::debug!(sql, "executing statement");
        self.client()?.batch_execute(sql).await?;
        Ok(())
    }

    pub(crate) async fn insert_rows(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
    ) -> Result<(), AdapterError> {
        if rows.is_empty() {
            return Ok(());
        }

        let sql = build_insert_sql(table, columns, rows.len());

        let params: Vec<Box<dyn ToSql + Sync + Send>> = rows
            .iter()
            .flat_map(|row| row.iter().map(value_to_boxed))
            .collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        self.client()?.execute(&sql, &param_refs).await?;
        Ok(())
    }

    pub(crate) async fn commit(&self) -> Result<(), AdapterError> {
        let client = self.client()?;
        client.batch_execute("COMMIT").await?;
        client.batch_execute("BEGIN").await?;
        Ok(())
    }

    pub(crate) async fn close(&mut self) -> Result<(), AdapterError> {
        // Dropping the client tears down the connection task.
        self.client.take();
        Ok(())
    }
}

/// Multi-row INSERT with `$1..$n` placeholders numbered across all rows.
pub(crate) fn build_insert_sql(table: &str, columns: &[&str], row_count: usize) -> String {
    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;
    for _ in 0..row_count {
        let row_placeholders: Vec<String> = (0..columns.len())
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Convert a generated value to a boxed ToSql trait object.
///
/// NULLs carry their column type so the binary protocol binds a
/// correctly-typed None.
fn value_to_boxed(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null(SqlType::Int) => Box::new(None::<i32>),
        SqlValue::Null(SqlType::Decimal) => Box::new(None::<Decimal>),
        SqlValue::Null(SqlType::Text) => Box::new(None::<String>),
        SqlValue::Null(SqlType::Bool) => Box::new(None::<bool>),
        SqlValue::Null(SqlType::Date) => Box::new(None::<NaiveDate>),
        SqlValue::Null(SqlType::Timestamp) => Box::new(None::<NaiveDateTime>),
        SqlValue::Int(i) => Box::new(*i),
        SqlValue::Decimal(d) => Box::new(*d),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Bool(b) => Box::new(*b),
        SqlValue::Date(d) => Box::new(*d),
        SqlValue::Timestamp(ts) => Box::new(*ts),
    }
}
