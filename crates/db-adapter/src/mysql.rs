//! MySQL adapter.
//!
//! MySQL has no sub-database namespace, so generated tables carry a name
//! prefix instead of living in a schema, and teardown walks the
//! `information_schema` catalog to find and drop them.

use crate::{AdapterError, DatabaseAdapter};
use async_trait::async_trait;
use chrono::{Datelike, Timelike};
use mysql_async::prelude::*;
use mysql_async::{Conn, OptsBuilder, Params, Value};
use tracing::{debug, info};
use workshop_core::{BackendKind, DbConfig, SqlValue};

/// Adapter for MySQL. A single connection (not a pool) owns the run's
/// transaction; `autocommit` is disabled at connect time.
pub struct MySQLAdapter {
    config: DbConfig,
    conn: Option<Conn>,
}

impl MySQLAdapter {
    pub fn new(config: DbConfig) -> Self {
        Self { config, conn: None }
    }

    fn conn(&mut self) -> Result<&mut Conn, AdapterError> {
        self.conn.as_mut().ok_or(AdapterError::NotConnected)
    }
}

#[async_trait]
impl DatabaseAdapter for MySQLAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::MySQL
    }

    async fn connect(&mut self) -> Result<(), AdapterError> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            "connecting to MySQL"
        );
        let opts = OptsBuilder::default()
            .ip_or_hostname(self.config.host.clone())
            .tcp_port(self.config.port)
            .db_name(Some(self.config.database.clone()))
            .user(Some(self.config.user.clone()))
            .pass(Some(self.config.password.clone()));

        let mut conn = Conn::new(opts)
            .await
            .map_err(|e| AdapterError::Connection(e.to_string()))?;
        conn.query_drop("SET autocommit = 0")
            .await
            .map_err(|e| AdapterError::Connection(e.to_string()))?;

        self.conn = Some(conn);
        Ok(())
    }

    async fn create_schema(&mut self) -> Result<(), AdapterError> {
        // Tables are isolated by name prefix; there is nothing to create.
        self.conn()?;
        Ok(())
    }

    async fn drop_schema(&mut self) -> Result<(), AdapterError> {
        let prefix_pattern = "bdw\\_%";
        let sql = format!(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = DATABASE() AND table_name LIKE '{prefix_pattern}'"
        );

        let conn = self.conn()?;
        let rows: Vec<mysql_async::Row> = conn
            .exec(&sql, ())
            .await
            .map_err(|e| AdapterError::Schema(e.to_string()))?;

        for row in rows {
            let table: String = row
                .get(0)
                .ok_or_else(|| AdapterError::Schema("catalog row without a name".to_string()))?;
            debug!(table, "dropping table");
            conn.query_drop(format!("DROP TABLE IF EXISTS {table}"))
                .await
                .map_err(|e| AdapterError::Schema(e.to_string()))?;
        }

        conn.query_drop("COMMIT")
            .await
            .map_err(|e| AdapterError::Schema(e.to_string()))?;
        Ok(())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), AdapterError> {
        debug!(sql, "executing statement");
        self.conn()?.query_drop(sql).await?;
        Ok(())
    }

    async fn insert_rows(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
    ) -> Result<(), AdapterError> {
        if rows.is_empty() {
            return Ok(());
        }

        let sql = build_insert_sql(table, columns, rows.len());
        let params: Vec<Value> = rows
            .iter()
            .flat_map(|row| row.iter().map(to_mysql_value))
            .collect();

        self.conn()?
            .exec_drop(&sql, Params::Positional(params))
            .await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), AdapterError> {
        self.conn()?.query_drop("COMMIT").await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), AdapterError> {
        if let Some(conn) = self.conn.take() {
            conn.disconnect().await?;
        }
        Ok(())
    }
}

/// Multi-row INSERT with `?` placeholders.
pub(crate) fn build_insert_sql(table: &str, columns: &[&str], row_count: usize) -> String {
    let row_template = format!(
        "({})",
        columns.iter().map(|_| "?").collect::<Vec<_>>().join(", ")
    );
    let rows_template: Vec<&str> = (0..row_count).map(|_| row_template.as_str()).collect();

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table,
        columns.join(", "),
        rows_template.join(", ")
    )
}

/// Convert a generated value to a MySQL parameter.
fn to_mysql_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null(_) => Value::NULL,
        SqlValue::Int(i) => Value::Int(*i as i64),
        // DECIMAL travels as its text rendering; the server parses it
        // into the column's fixed-point type.
        SqlValue::Decimal(d) => Value::Bytes(d.to_string().into_bytes()),
        SqlValue::Text(s) => Value::Bytes(s.clone().into_bytes()),
        SqlValue::Bool(b) => Value::Int(*b as i64),
        SqlValue::Date(d) => Value::Date(d.year() as u16, d.month() as u8, d.day() as u8, 0, 0, 0, 0),
        SqlValue::Timestamp(ts) => Value::Date(
            ts.year() as u16,
            ts.month() as u8,
            ts.day() as u8,
            ts.hour() as u8,
            ts.minute() as u8,
            ts.second() as u8,
            ts.and_utc().timestamp_subsec_micros(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use workshop_core::SqlType;

    #[test]
    fn test_insert_sql_uses_question_marks() {
        let sql = build_insert_sql("bdw_products", &["product_name", "price"], 2);
        assert_eq!(
            sql,
            "INSERT INTO bdw_products (product_name, price) VALUES (?, ?), (?, ?)"
        );
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(to_mysql_value(&SqlValue::Null(SqlType::Text)), Value::NULL);
        assert_eq!(to_mysql_value(&SqlValue::Int(7)), Value::Int(7));
        assert_eq!(to_mysql_value(&SqlValue::Bool(true)), Value::Int(1));
        assert_eq!(
            to_mysql_value(&SqlValue::Decimal(Decimal::new(1999, 2))),
            Value::Bytes(b"19.99".to_vec())
        );

        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(
            to_mysql_value(&SqlValue::Date(date)),
            Value::Date(2024, 6, 15, 0, 0, 0, 0)
        );
    }
}
