//! Problem 15: the same id stored as INTEGER in one table and as text in
//! another, with 40% of the text ids zero-padded to ten digits.
//!
//! A naive `a.account_id = t.account_id` join silently drops every
//! padded row; only a cast-based join recovers them.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{company, datetime};
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const ACCOUNT_COLUMNS: &[&str] = &["account_id", "account_name", "balance"];
const TXN_COLUMNS: &[&str] = &["txn_id", "account_id", "amount", "txn_date"];

/// Accounts seeded regardless of scale.
const ACCOUNT_COUNT: i32 = 1000;

/// Fraction of transaction ids zero-padded to ten digits.
const PADDED_RATE: f64 = 0.4;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();

    db.execute(&format!(
        "CREATE TABLE {prefix}accounts_int_id (
            account_id INTEGER PRIMARY KEY,
            account_name VARCHAR(200),
            balance DECIMAL(15,2)
        )"
    ))
    .await?;

    db.execute(&format!(
        "CREATE TABLE {prefix}transactions_str_id (
            txn_id INTEGER,
            account_id VARCHAR(20),
            amount DECIMAL(10,2),
            txn_date DATE
        )"
    ))
    .await?;

    let accounts: Vec<Vec<SqlValue>> = (1..=ACCOUNT_COUNT)
        .map(|id| {
            vec![
                id.into(),
                truncate_chars(&company::company(&mut ctx.rng), 200).into(),
                ctx.decimal(100, 100_000, 2).into(),
            ]
        })
        .collect();
    db.insert_rows(
        &format!("{prefix}accounts_int_id"),
        ACCOUNT_COLUMNS,
        &accounts,
    )
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}transactions_str_id"), TXN_COLUMNS);
    for i in 0..row_count {
        let row = vec![
            SqlValue::Int(i as i32 + 1),
            account_id_text(ctx).into(),
            ctx.decimal(-1000, 1000, 2).into(),
            datetime::date_between(&mut ctx.rng, ctx.today, -365, 0).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Render a valid account id as text, zero-padding 40% of them.
fn account_id_text(ctx: &mut GenContext) -> String {
    let id = ctx.int_range(1, ACCOUNT_COUNT);
    if ctx.chance(PADDED_RATE) {
        format!("{id:010}")
    } else {
        id.to_string()
    }
}
