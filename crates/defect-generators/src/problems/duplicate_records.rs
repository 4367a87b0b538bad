//! Problem 5: the same logical user stored several times.
//!
//! A base set of `row_count / 3` unique users is generated; every base
//! user is written once, and about half are immediately followed by one
//! to three verbatim copies. Only the auto-increment row id tells the
//! copies apart.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{datetime, internet, person};
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &["user_id", "username", "email", "phone", "created_at"];

/// Probability that a base user gets duplicated at all.
const DUPLICATE_RATE: f64 = 0.5;

/// Copies appended when a user is duplicated.
const MIN_COPIES: i32 = 1;
const MAX_COPIES: i32 = 3;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    let auto_inc = db.auto_increment();

    db.execute(&format!(
        "CREATE TABLE {prefix}users_duplicates (
            row_id {auto_inc} PRIMARY KEY,
            user_id INTEGER,
            username VARCHAR(100),
            email VARCHAR(255),
            phone VARCHAR(50),
            created_at TIMESTAMP
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}users_duplicates"), COLUMNS);
    for user_id in 1..=(row_count / 3) {
        let row = build_user(ctx, user_id as i32);
        let copies = copy_count(ctx);
        writer.push(row.clone()).await?;
        for _ in 0..copies {
            writer.push(row.clone()).await?;
        }
    }
    writer.finish().await?;
    Ok(())
}

fn build_user(ctx: &mut GenContext, user_id: i32) -> Vec<SqlValue> {
    vec![
        user_id.into(),
        internet::user_name(&mut ctx.rng).into(),
        internet::email(&mut ctx.rng).into(),
        person::phone_number(&mut ctx.rng).into(),
        datetime::datetime_between(&mut ctx.rng, ctx.now, -730, 0).into(),
    ]
}

/// How many verbatim copies follow a base user (0 for half of them).
fn copy_count(ctx: &mut GenContext) -> i32 {
    if ctx.chance(DUPLICATE_RATE) {
        ctx.int_range(MIN_COPIES, MAX_COPIES)
    } else {
        0
    }
}
