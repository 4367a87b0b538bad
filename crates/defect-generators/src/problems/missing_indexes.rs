//! Problem 14: a large audit log with nothing indexed.
//!
//! The defect here is structural, not value-level: the columns every
//! realistic query filters on (user, action, status, timestamp) have no
//! index, and the table runs at five times the base scale so the cost is
//! visible in query plans.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{datetime, internet};
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "user_id",
    "action_type",
    "resource_type",
    "resource_id",
    "ip_address",
    "user_agent",
    "created_at",
    "session_id",
    "status",
];

const ACTION_TYPES: &[&str] = &["VIEW", "CREATE", "UPDATE", "DELETE", "LOGIN", "LOGOUT", "EXPORT"];
const RESOURCE_TYPES: &[&str] = &["user", "order", "product", "report", "setting", "document"];
const STATUSES: &[&str] = &["success", "failure", "pending", "timeout"];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    let auto_inc = db.auto_increment();

    db.execute(&format!(
        "CREATE TABLE {prefix}audit_log_no_index (
            log_id {auto_inc} PRIMARY KEY,
            user_id INTEGER,
            action_type VARCHAR(50),
            resource_type VARCHAR(50),
            resource_id INTEGER,
            ip_address VARCHAR(45),
            user_agent VARCHAR(500),
            created_at TIMESTAMP,
            session_id VARCHAR(100),
            status VARCHAR(20)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}audit_log_no_index"), COLUMNS);
    for _ in 0..row_count {
        writer.push(build_row(ctx)).await?;
    }
    writer.finish().await?;
    Ok(())
}

fn build_row(ctx: &mut GenContext) -> Vec<SqlValue> {
    vec![
        ctx.int_range(1, 10_000).into(),
        (*ctx.pick(ACTION_TYPES)).into(),
        (*ctx.pick(RESOURCE_TYPES)).into(),
        ctx.int_range(1, 100_000).into(),
        internet::ipv4(&mut ctx.rng).into(),
        truncate_chars(&internet::user_agent(&mut ctx.rng), 500).into(),
        datetime::datetime_between(&mut ctx.rng, ctx.now, -90, 0).into(),
        internet::uuid4(&mut ctx.rng).to_string().into(),
        (*ctx.pick(STATUSES)).into(),
    ]
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
    fn test_vocabulary_sizes() {
        assert_eq!(ACTION_TYPES.len(), 7);
        assert_eq!(RESOURCE_TYPES.len(), 6);
        assert_eq!(STATUSES.len(), 4);
    }

    #[test]
    fn test_row_values_come_from_the_vocabularies() {
        let mut ctx = ctx();
        for _ in 0..200 {
            let row = build_row(&mut ctx);
            assert_eq!(row.len(), COLUMNS.len());
            assert!(ACTION_TYPES.contains(&row[1].as_text().unwrap()));
            assert!(RESOURCE_TYPES.contains(&row[2].as_text().unwrap()));
            assert!(STATUSES.contains(&row[8].as_text().unwrap()));
        }
    }

    #[test]
    fn test_timestamps_fall_in_the_ninety_day_window() {
        let mut ctx = ctx();
        let now = ctx.now;
        for _ in 0..200 {
            let row = build_row(&mut ctx);
            if let SqlValue::Timestamp(ts) = row[6] {
                assert!(ts <= now);
                assert!(ts >= now - chrono::Duration::days(90));
            } else {
                panic!("created_at not a timestamp");
            }
        }
    }
}
