//! Problem 3: numbers, dates and booleans all stored as VARCHAR.
//!
//! Every value is text, and every column mixes several renderings so
//! nothing sorts, casts or compares cleanly.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::datetime;
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &[
    "transaction_id",
    "amount",
    "transaction_date",
    "quantity",
    "is_refund",
    "customer_age",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%B %d, %Y", "%Y%m%d"];

const BOOL_SPELLINGS: &[&str] = &["true", "false", "True", "False", "1", "0", "yes", "no"];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}transactions_bad_types (
            transaction_id VARCHAR(50),
            amount VARCHAR(50),
            transaction_date VARCHAR(50),
            quantity VARCHAR(20),
            is_refund VARCHAR(10),
            customer_age VARCHAR(10)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(
        &mut *db,
        format!("{prefix}transactions_bad_types"),
        COLUMNS,
    );
    for i in 0..row_count {
        let row = vec![
            SqlValue::Text((i + 1).to_string()),
            amount_text(ctx).into(),
            date_text(ctx).into(),
            ctx.int_range(1, 100).to_string().into(),
            SqlValue::Text((*ctx.pick(BOOL_SPELLINGS)).to_string()),
            ctx.int_range(18, 80).to_string().into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// An amount in one of four textual renderings: plain two-decimal,
/// currency-prefixed, four-decimal, or truncated to an integer.
fn amount_text(ctx: &mut GenContext) -> String {
    let value = ctx.decimal(10, 1000, 4);
    match ctx.int_range(0, 3) {
        0 => format!("{:.2}", value.round_dp(2)),
        1 => format!("${:.2}", value.round_dp(2)),
        2 => format!("{value:.4}"),
        _ => value.trunc().to_string(),
    }
}

/// A date rendered in one of five formats.
fn date_text(ctx: &mut GenContext) -> String {
    let date = datetime::date_between(&mut ctx.rng, ctx.today, -730, 0);
    let format = *ctx.pick(DATE_FORMATS);
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> GenContext {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        GenContext::new(42).with_reference(now)
    }

    #[test]
    fn test_amount_text_covers_all_renderings() {
        let mut ctx = ctx();
        let mut dollar = false;
        let mut four_decimals = false;
        let mut integer = false;
        for _ in 0..200 {
            let s = amount_text(&mut ctx);
            if s.starts_with('$') {
                dollar = true;
            } else if s.split('.').nth(1).map(|f| f.len()) == Some(4) {
                four_decimals = true;
            } else if !s.contains('.') {
                integer = true;
            }
        }
        assert!(dollar && four_decimals && integer);
    }

    #[test]
    fn test_bool_spellings_are_the_fixed_eight() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let s = *ctx.pick(BOOL_SPELLINGS);
            assert!(BOOL_SPELLINGS.contains(&s));
        }
        assert_eq!(BOOL_SPELLINGS.len(), 8);
    }

    #[test]
    fn test_date_text_parses_under_some_format() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let s = date_text(&mut ctx);
            let parsed = DATE_FORMATS
                .iter()
                .any(|f| NaiveDate::parse_from_str(&s, f).is_ok());
            assert!(parsed, "no format parses {s:?}");
        }
    }
}
