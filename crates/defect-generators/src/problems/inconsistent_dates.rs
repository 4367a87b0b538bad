//! Problem 6: three related date columns, eleven textual formats.
//!
//! Start, end and registration deadline are all derived from one event
//! date, then each column independently picks a rendering, so the same
//! row routinely mixes ISO, US, European and prose-style dates.

use chrono::{Duration, NaiveDate};
use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{company, datetime};
use workshop_core::{GenContext, SqlValue};

const COLUMNS: &[&str] = &[
    "event_id",
    "event_name",
    "start_date",
    "end_date",
    "registration_deadline",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%Y%m%d",
    "%d.%m.%Y",
];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}events_bad_dates (
            event_id INTEGER,
            event_name VARCHAR(200),
            start_date VARCHAR(50),
            end_date VARCHAR(50),
            registration_deadline VARCHAR(50)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}events_bad_dates"), COLUMNS);
    for i in 0..row_count {
        let start = datetime::date_between(&mut ctx.rng, ctx.today, -365, 365);
        let end = start + Duration::days(ctx.int_range(1, 30) as i64);
        let deadline = start - Duration::days(ctx.int_range(7, 60) as i64);

        let row = vec![
            SqlValue::Int(i as i32 + 1),
            company::catch_phrase(&mut ctx.rng).into(),
            format_date(ctx, start).into(),
            format_date(ctx, end).into(),
            format_date(ctx, deadline).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Render a date in one of the eleven formats, chosen per call.
fn format_date(ctx: &mut GenContext, date: NaiveDate) -> String {
    let format = *ctx.pick(DATE_FORMATS);
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GenContext {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        GenContext::new(42).with_reference(now)
    }

    #[test]
    fn test_eleven_formats() {
        assert_eq!(DATE_FORMATS.len(), 11);
    }

    #[test]
    fn test_formats_actually_vary() {
        let mut ctx = ctx();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let mut renderings = std::collections::HashSet::new();
        for _ in 0..200 {
            renderings.insert(format_date(&mut ctx, date));
        }
        // All formats produce distinct text for this date.
        assert_eq!(renderings.len(), DATE_FORMATS.len());
    }

    #[test]
    fn test_column_relationships_hold_before_formatting() {
        let mut ctx = ctx();
        for _ in 0..100 {
            let start = datetime::date_between(&mut ctx.rng, ctx.today, -365, 365);
            let end = start + Duration::days(ctx.int_range(1, 30) as i64);
            let deadline = start - Duration::days(ctx.int_range(7, 60) as i64);
            assert!(end > start);
            assert!(deadline < start);
        }
    }
}
