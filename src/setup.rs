//! The `setup` command: fill a database with all fifteen problems.

use anyhow::Context;
use db_adapter::{adapter_for, AdapterError, DatabaseAdapter};
use defect_generators::plan;
use tracing::info;
use workshop_core::{DbConfig, GenContext, Scale};

/// Connect, populate every problem dataset, and close the connection
/// whether population succeeded or not.
pub async fn run_setup(config: DbConfig, scale: Scale, seed: u64) -> anyhow::Result<()> {
    info!(
        backend = %config.kind,
        host = %config.host,
        port = config.port,
        database = %config.database,
        scale = %scale,
        base_rows = scale.base_rows(),
        seed,
        "setting up workshop database"
    );

    let mut db = adapter_for(&config);
    db.connect()
        .await
        .with_context(|| format!("Failed to connect to {} at {}", config.kind, config.host))?;

    let result = populate(db.as_mut(), scale, seed).await;
    let closed = db.close().await;

    result.context("Setup failed")?;
    closed.context("Failed to close connection")?;

    info!("setup complete; run the diagnose command to see the detection queries");
    Ok(())
}

/// Create the namespace and run all generators in fixed order against
/// an already-connected adapter.
pub async fn populate(
    db: &mut dyn DatabaseAdapter,
    scale: Scale,
    seed: u64,
) -> Result<(), AdapterError> {
    db.create_schema().await?;

    let mut ctx = GenContext::new(seed);
    let jobs = plan(scale);
    let total = jobs.len();

    for (i, job) in jobs.into_iter().enumerate() {
        info!(
            "[{}/{}] {} ({} rows)",
            i + 1,
            total,
            job.problem.name(),
            job.row_count
        );
        job.problem.run(db, &mut ctx, job.row_count).await?;
    }

    Ok(())
}
