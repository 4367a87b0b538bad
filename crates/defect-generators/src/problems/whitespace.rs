//! Problem 8: invisible whitespace wrapped around otherwise clean values.
//!
//! Each column gets a 40% chance of a leading token and, independently,
//! a 40% chance of a trailing token drawn from a fixed set of spaces,
//! tabs and newlines.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::company;
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "sku",
    "product_name",
    "category",
    "supplier",
    "warehouse_location",
];

const WHITESPACE_TOKENS: &[&str] = &[" ", "  ", "   ", "\t", " \t", "\n", " \n "];

const CATEGORIES: &[&str] = &["Electronics", "Clothing", "Food", "Furniture", "Tools"];

/// Chance of a leading (and, separately, trailing) token.
const PAD_RATE: f64 = 0.4;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}inventory_whitespace (
            sku VARCHAR(100),
            product_name VARCHAR(200),
            category VARCHAR(100),
            supplier VARCHAR(200),
            warehouse_location VARCHAR(50)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}inventory_whitespace"), COLUMNS);
    for i in 0..row_count {
        let sku = format!("SKU-{:06}", i + 1);
        let name = truncate_chars(&company::catch_phrase(&mut ctx.rng), 200);
        let category = (*ctx.pick(CATEGORIES)).to_string();
        let supplier = truncate_chars(&company::company(&mut ctx.rng), 200);
        let location = format!(
            "W{}-R{}-S{}",
            ctx.int_range(1, 10),
            ctx.int_range(1, 50),
            ctx.int_range(1, 100)
        );

        let row = vec![
            pad(ctx, sku).into(),
            pad(ctx, name).into(),
            pad(ctx, category).into(),
            pad(ctx, supplier).into(),
            pad(ctx, location).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Independently prepend and append a random whitespace token.
fn pad(ctx: &mut GenContext, value: String) -> String {
    let mut result = value;
    if ctx.chance(PAD_RATE) {
        result = format!("{}{}", ctx.pick(WHITESPACE_TOKENS), result);
    }
    if ctx.chance(PAD_RATE) {
        result = format!("{}{}", result, ctx.pick(WHITESPACE_TOKENS));
    }
    result
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
    fn test_padding_uses_only_known_tokens() {
        let mut ctx = ctx();
        for _ in 0..500 {
            let padded = pad(&mut ctx, "VALUE".to_string());
            let trimmed = padded.trim_matches(|c| c == ' ' || c == '\t' || c == '\n');
            assert_eq!(trimmed, "VALUE");
        }
    }

    #[test]
    fn test_roughly_forty_percent_get_leading_whitespace() {
        let mut ctx = ctx();
        let n = 10_000;
        let padded = (0..n)
            .filter(|_| pad(&mut ctx, "X".to_string()).starts_with([' ', '\t', '\n']))
            .count();
        // Binomial band around p = 0.4.
        assert!((3_700..=4_300).contains(&padded), "got {padded}");
    }

    #[test]
    fn test_some_values_stay_clean() {
        let mut ctx = ctx();
        let clean = (0..1000)
            .filter(|_| pad(&mut ctx, "X".to_string()) == "X")
            .count();
        // (1 - 0.4)^2 = 36% expected untouched.
        assert!(clean > 200);
    }
}
