//! Batched row loading shared by all generators.

use crate::{AdapterError, DatabaseAdapter};
use tracing::debug;
use workshop_core::SqlValue;

/// Rows accumulated before one bulk INSERT is issued.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Accumulates rows for one table and flushes them in bulk.
///
/// Rows buffer in memory until the batch size is reached, then go out as
/// a single parameterized multi-row INSERT. [`BatchWriter::finish`]
/// flushes the remainder and commits. There is no partial-batch retry; a
/// failed batch aborts the job and the error propagates to the caller.
pub struct BatchWriter<'a> {
    db: &'a mut dyn DatabaseAdapter,
    table: String,
    columns: &'static [&'static str],
    rows: Vec<Vec<SqlValue>>,
    written: u64,
    batch_size: usize,
}

impl<'a> BatchWriter<'a> {
    pub fn new(
        db: &'a mut dyn DatabaseAdapter,
        table: impl Into<String>,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            db,
            table: table.into(),
            columns,
            rows: Vec::with_capacity(DEFAULT_BATCH_SIZE),
            written: 0,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the flush threshold (tests use small batches).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Buffer one row, flushing if the batch is full.
    pub async fn push(&mut self, row: Vec<SqlValue>) -> Result<(), AdapterError> {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
        if self.rows.len() >= self.batch_size {
            self.flush().await?;
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), AdapterError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        self.db
            .insert_rows(&self.table, self.columns, &self.rows)
            .await?;
        self.written += self.rows.len() as u64;
        debug!(table = %self.table, rows = self.written, "batch flushed");
        self.rows.clear();
        Ok(())
    }

    /// Flush the remainder and commit. Returns the total rows written.
    pub async fn finish(mut self) -> Result<u64, AdapterError> {
        self.flush().await?;
        self.db.commit().await?;
        Ok(self.written)
    }
}
