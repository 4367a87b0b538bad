//! Problem 9: an email column that is 30% garbage.
//!
//! The malformed values cover fourteen shapes seen in real CRM exports:
//! missing parts, doubled or spaced `@`s, stray dots, sentinel strings
//! and the occasional phone number typed into the wrong field.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{datetime, internet, person, text};
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &["subscriber_id", "name", "email", "subscribed_at"];

/// Fraction of rows with a malformed email.
const BAD_EMAIL_RATE: f64 = 0.3;

/// Number of distinct malformed shapes.
const BAD_PATTERN_COUNT: i32 = 14;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}subscribers_bad_emails (
            subscriber_id INTEGER,
            name VARCHAR(200),
            email VARCHAR(255),
            subscribed_at TIMESTAMP
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(
        &mut *db,
        format!("{prefix}subscribers_bad_emails"),
        COLUMNS,
    );
    for i in 0..row_count {
        let email = if ctx.chance(BAD_EMAIL_RATE) {
            malformed_email(ctx)
        } else {
            internet::email(&mut ctx.rng)
        };

        let row = vec![
            SqlValue::Int(i as i32 + 1),
            person::full_name(&mut ctx.rng).into(),
            email.into(),
            datetime::datetime_between(&mut ctx.rng, ctx.now, -730, 0).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// One of fourteen malformed email shapes, chosen uniformly.
fn malformed_email(ctx: &mut GenContext) -> String {
    match ctx.int_range(0, BAD_PATTERN_COUNT - 1) {
        0 => internet::user_name(&mut ctx.rng),
        1 => format!("{}@", internet::user_name(&mut ctx.rng)),
        2 => format!("@{}", internet::domain_name(&mut ctx.rng)),
        3 => format!(
            "{}@@{}",
            internet::user_name(&mut ctx.rng),
            internet::domain_name(&mut ctx.rng)
        ),
        4 => format!(
            "{} @{}",
            internet::user_name(&mut ctx.rng),
            internet::domain_name(&mut ctx.rng)
        ),
        5 => format!(
            "{}@{}",
            internet::user_name(&mut ctx.rng),
            text::word(&mut ctx.rng)
        ),
        6 => format!(
            "{}@.{}",
            internet::user_name(&mut ctx.rng),
            internet::domain_name(&mut ctx.rng)
        ),
        7 => format!(
            ".{}@{}",
            internet::user_name(&mut ctx.rng),
            internet::domain_name(&mut ctx.rng)
        ),
        8 => format!(
            "{}@{}.",
            internet::user_name(&mut ctx.rng),
            internet::domain_name(&mut ctx.rng)
        ),
        9 => "N/A".to_string(),
        10 => "none".to_string(),
        11 => "-".to_string(),
        12 => String::new(),
        _ => person::phone_number(&mut ctx.rng),
    }
}
