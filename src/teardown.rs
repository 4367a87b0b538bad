//! The `teardown` command: remove everything a setup run created.

use anyhow::Context;
use db_adapter::adapter_for;
use tracing::info;
use workshop_core::DbConfig;

/// Connect, drop the namespace (or every prefixed table on backends
/// without one), and close the connection either way.
pub async fn run_teardown(config: DbConfig) -> anyhow::Result<()> {
    info!(
        backend = %config.kind,
        host = %config.host,
        port = config.port,
        database = %config.database,
        "tearing down workshop database"
    );

    let mut db = adapter_for(&config);
    db.connect()
        .await
        .with_context(|| format!("Failed to connect to {} at {}", config.kind, config.host))?;

    let result = db.drop_schema().await;
    let closed = db.close().await;

    result.context("Teardown failed")?;
    closed.context("Failed to close connection")?;

    info!("teardown complete; all workshop data removed");
    Ok(())
}
