//! Problem 12: mixed scripts, emoji, control characters and other
//! encoding hazards.
//!
//! 30% of rows take their text fields straight from a list of known
//! troublemakers (accented Latin, CJK, Cyrillic, Arabic, Hebrew, emoji,
//! embedded newlines/tabs/quotes, a script-injection string, a null
//! byte); the rest use locale-varied synthetic values across six
//! locales.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use rand::seq::SliceRandom;
use synth_data::{locale, Locale};
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &["record_id", "customer_name", "address", "notes"];

/// Fraction of rows built from the problematic literals.
const SPECIAL_RATE: f64 = 0.3;

const SPECIAL_STRINGS: &[&str] = &[
    "Café résumé naïve",
    "日本語テスト",
    "Тест кириллицы",
    "مرحبا بالعالم",
    "שלום עולם",
    "🎉 Party 🎊 Time 🎈",
    "Line1\nLine2\nLine3",
    "Quote \"test\" here",
    "Tab\there\ttoo",
    "NULL",
    "null",
    "<script>alert('xss')</script>",
    "O'Brien's café",
    "50% off — limited time!",
    "Price: €100 or £80",
    "Ñoño",
    "\u{0} null byte",
    "末末末",
    "Beyoncé",
];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}international_data (
            record_id INTEGER,
            customer_name VARCHAR(300),
            address VARCHAR(500),
            notes VARCHAR(1000)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}international_data"), COLUMNS);
    for i in 0..row_count {
        let (name, address, notes) = if ctx.chance(SPECIAL_RATE) {
            special_fields(ctx)
        } else {
            localized_fields(ctx)
        };

        let row = vec![
            SqlValue::Int(i as i32 + 1),
            truncate_chars(&name, 300).into(),
            truncate_chars(&address, 500).into(),
            truncate_chars(&notes, 1000).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Name and address straight from the trouble list; notes are three
/// distinct entries joined with " | ".
fn special_fields(ctx: &mut GenContext) -> (String, String, String) {
    let name = (*ctx.pick(SPECIAL_STRINGS)).to_string();
    let address = (*ctx.pick(SPECIAL_STRINGS)).to_string();
    let notes: Vec<&str> = SPECIAL_STRINGS
        .choose_multiple(&mut ctx.rng, 3)
        .copied()
        .collect();
    (name, address, notes.join(" | "))
}

/// Locale-varied synthetic fields; each field picks its own locale, the
/// way multi-locale generators interleave.
fn localized_fields(ctx: &mut GenContext) -> (String, String, String) {
    let name_locale = Locale::any(&mut ctx.rng);
    let addr_locale = Locale::any(&mut ctx.rng);
    let notes_locale = Locale::any(&mut ctx.rng);
    (
        locale::name(&mut ctx.rng, name_locale),
        locale::address(&mut ctx.rng, addr_locale),
        locale::text(&mut ctx.rng, notes_locale, 200),
    )
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
    fn test_trouble_list_covers_the_hazard_classes() {
        assert_eq!(SPECIAL_STRINGS.len(), 19);
        assert!(SPECIAL_STRINGS.iter().any(|s| s.contains('\n')));
        assert!(SPECIAL_STRINGS.iter().any(|s| s.contains('\t')));
        assert!(SPECIAL_STRINGS.iter().any(|s| s.contains('\u{0}')));
        assert!(SPECIAL_STRINGS.iter().any(|s| s.contains("<script>")));
        assert!(SPECIAL_STRINGS.iter().any(|s| s.contains('€')));
    }

    #[test]
    fn test_special_notes_join_three_distinct_entries() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let (_, _, notes) = special_fields(&mut ctx);
            let parts: Vec<&str> = notes.split(" | ").collect();
            assert!(parts.len() >= 3, "notes: {notes:?}");
        }
    }

    #[test]
    fn test_localized_fields_are_nonempty() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let (name, address, notes) = localized_fields(&mut ctx);
            assert!(!name.is_empty());
            assert!(!address.is_empty());
            assert!(!notes.is_empty());
        }
    }
}
