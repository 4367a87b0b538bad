//! Problem 7: the same values stored in five different casings.
//!
//! Each string column independently comes out lowercased, uppercased,
//! title-cased, per-character scrambled, or untouched.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{address, company, internet, person};
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &[
    "contact_id",
    "first_name",
    "last_name",
    "email",
    "company",
    "country",
];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}contacts_bad_casing (
            contact_id INTEGER,
            first_name VARCHAR(100),
            last_name VARCHAR(100),
            email VARCHAR(255),
            company VARCHAR(200),
            country VARCHAR(100)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}contacts_bad_casing"), COLUMNS);
    for i in 0..row_count {
        let first = person::first_name(&mut ctx.rng).to_string();
        let last = person::last_name(&mut ctx.rng).to_string();
        let email = internet::email(&mut ctx.rng);
        let company = company::company(&mut ctx.rng);
        let country = address::country(&mut ctx.rng).to_string();

        let row = vec![
            SqlValue::Int(i as i32 + 1),
            randomize_case(ctx, &first).into(),
            randomize_case(ctx, &last).into(),
            randomize_case(ctx, &email).into(),
            randomize_case(ctx, &company).into(),
            randomize_case(ctx, &country).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Apply one of five casings, chosen uniformly.
fn randomize_case(ctx: &mut GenContext, s: &str) -> String {
    match ctx.int_range(0, 4) {
        0 => s.to_lowercase(),
        1 => s.to_uppercase(),
        2 => title_case(s),
        3 => s
            .chars()
            .map(|c| {
                if ctx.chance(0.5) {
                    c.to_uppercase().next().unwrap_or(c)
                } else {
                    c.to_lowercase().next().unwrap_or(c)
                }
            })
            .collect(),
        _ => s.to_string(),
    }
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
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
    fn test_title_case() {
        assert_eq!(title_case("UNITED STATES"), "United States");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("jean-luc"), "Jean-Luc");
    }

    #[test]
    fn test_all_casings_show_up() {
        let mut ctx = ctx();
        let input = "United States";
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(randomize_case(&mut ctx, input));
        }
        assert!(seen.contains("united states"));
        assert!(seen.contains("UNITED STATES"));
        assert!(seen.contains("United States"));
        // The mixed casing produces more variants than the fixed four.
        assert!(seen.len() > 4);
    }

    #[test]
    fn test_casing_preserves_content() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let out = randomize_case(&mut ctx, "Acme Inc");
            assert_eq!(out.to_lowercase(), "acme inc");
        }
    }
}
