//! Problem 1: a customer table with no primary key.
//!
//! Nothing stops a row from appearing twice, so roughly one row in ten
//! is immediately written a second time with identical values.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{datetime, internet, person};
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &["customer_id", "first_name", "last_name", "email", "created_at"];

/// Probability that a row is duplicated verbatim.
const DUPLICATE_RATE: f64 = 0.1;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}customers_no_pk (
            customer_id INTEGER,
            first_name VARCHAR(100),
            last_name VARCHAR(100),
            email VARCHAR(255),
            created_at TIMESTAMP
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}customers_no_pk"), COLUMNS);
    for i in 0..row_count {
        let row = build_row(ctx, i as i32 + 1);
        let duplicate = ctx.chance(DUPLICATE_RATE);
        writer.push(row.clone()).await?;
        if duplicate {
            writer.push(row).await?;
        }
    }
    writer.finish().await?;
    Ok(())
}

fn build_row(ctx: &mut GenContext, customer_id: i32) -> Vec<SqlValue> {
    vec![
        customer_id.into(),
        person::first_name(&mut ctx.rng).into(),
        person::last_name(&mut ctx.rng).into(),
        internet::email(&mut ctx.rng).into(),
        datetime::datetime_between(&mut ctx.rng, ctx.now, -730, 0).into(),
    ]
}
