//! In-memory adapter for exercising generators without a live database.

use crate::{AdapterError, DatabaseAdapter};
use async_trait::async_trait;
use std::collections::BTreeMap;
use workshop_core::{BackendKind, SqlValue};

/// Everything recorded about one table.
#[derive(Debug, Default, Clone)]
pub struct RecordedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// A [`DatabaseAdapter`] that records every call instead of talking to a
/// server. Tests drive generators through it and assert on the recorded
/// DDL, rows, batches and commits.
pub struct RecordingAdapter {
    kind: BackendKind,
    pub connected: bool,
    pub closed: bool,
    pub schema_created: bool,
    pub schema_dropped: bool,
    pub statements: Vec<String>,
    pub tables: BTreeMap<String, RecordedTable>,
    pub batches: usize,
    pub commits: usize,
}

impl RecordingAdapter {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            connected: false,
            closed: false,
            schema_created: false,
            schema_dropped: false,
            statements: Vec::new(),
            tables: BTreeMap::new(),
            batches: 0,
            commits: 0,
        }
    }

    /// Look up a table by its bare name, ignoring the dialect prefix.
    pub fn table_named(&self, bare: &str) -> Option<&RecordedTable> {
        self.tables.iter().find_map(|(name, table)| {
            let stripped = name
                .strip_prefix(self.kind.table_prefix())
                .unwrap_or(name.as_str());
            (stripped == bare).then_some(table)
        })
    }

    /// Rows of a table by bare name; empty if the table was never written.
    pub fn rows(&self, bare: &str) -> &[Vec<SqlValue>] {
        self.table_named(bare).map(|t| t.rows.as_slice()).unwrap_or(&[])
    }

    /// Number of CREATE TABLE statements recorded.
    pub fn create_table_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|sql| sql.trim_start().starts_with("CREATE TABLE"))
            .count()
    }
}

#[async_trait]
impl DatabaseAdapter for RecordingAdapter {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    async fn connect(&mut self) -> Result<(), AdapterError> {
        self.connected = true;
        Ok(())
    }

    async fn create_schema(&mut self) -> Result<(), AdapterError> {
        self.schema_created = true;
        Ok(())
    }

    async fn drop_schema(&mut self) -> Result<(), AdapterError> {
        self.schema_dropped = true;
        self.tables.clear();
        Ok(())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), AdapterError> {
        self.statements.push(sql.to_string());
        Ok(())
    }

    async fn insert_rows(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
    ) -> Result<(), AdapterError> {
        for row in rows {
            if row.len() != columns.len() {
                return Err(AdapterError::Execution(format!(
                    "row width {} does not match {} columns of {table}",
                    row.len(),
                    columns.len()
                )));
            }
        }
        let entry = self.tables.entry(table.to_string()).or_default();
        if entry.columns.is_empty() {
            entry.columns = columns.iter().map(|c| c.to_string()).collect();
        }
        entry.rows.extend(rows.iter().cloned());
        self.batches += 1;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), AdapterError> {
        self.commits += 1;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), AdapterError> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_table_lookup_strips_prefix() {
        let mut db = RecordingAdapter::new(BackendKind::MySQL);
        db.insert_rows("bdw_orders", &["n"], &[vec![SqlValue::Int(1)]])
            .await
            .unwrap();

        assert!(db.table_named("orders").is_some());
        assert_eq!(db.rows("orders").len(), 1);
        assert!(db.rows("missing").is_empty());
    }

    #[tokio::test]
    async fn test_drop_schema_clears_tables() {
        let mut db = RecordingAdapter::new(BackendKind::Postgres);
        db.insert_rows("bad_data_workshop.t", &["n"], &[vec![SqlValue::Int(1)]])
            .await
            .unwrap();
        db.drop_schema().await.unwrap();

        assert!(db.schema_dropped);
        assert!(db.tables.is_empty());
    }
}
