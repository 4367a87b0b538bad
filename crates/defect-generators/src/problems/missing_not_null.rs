//! Problem 4: critical employee fields randomly left NULL.
//!
//! Every column in the row is nullable and each gets blanked at its own
//! rate, from one-in-ten names up to one-in-three manager references.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{datetime, internet, person};
use workshop_core::{GenContext, SqlType, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "department",
    "salary",
    "hire_date",
    "manager_id",
    "is_active",
];

/// Per-column NULL rates, in column order.
const NULL_RATES: [f64; 8] = [0.1, 0.1, 0.15, 0.2, 0.25, 0.1, 0.3, 0.2];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    let auto_inc = db.auto_increment();
    let boolean = db.boolean_type();

    db.execute(&format!(
        "CREATE TABLE {prefix}employees_nulls (
            employee_id {auto_inc} PRIMARY KEY,
            first_name VARCHAR(100),
            last_name VARCHAR(100),
            email VARCHAR(255),
            department VARCHAR(100),
            salary DECIMAL(10,2),
            hire_date DATE,
            manager_id INTEGER,
            is_active {boolean}
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}employees_nulls"), COLUMNS);
    for _ in 0..row_count {
        writer.push(build_row(ctx)).await?;
    }
    writer.finish().await?;
    Ok(())
}

fn build_row(ctx: &mut GenContext) -> Vec<SqlValue> {
    vec![
        nullable(ctx, NULL_RATES[0], SqlType::Text, |ctx| {
            person::first_name(&mut ctx.rng).into()
        }),
        nullable(ctx, NULL_RATES[1], SqlType::Text, |ctx| {
            person::last_name(&mut ctx.rng).into()
        }),
        nullable(ctx, NULL_RATES[2], SqlType::Text, |ctx| {
            internet::email(&mut ctx.rng).into()
        }),
        nullable(ctx, NULL_RATES[3], SqlType::Text, |ctx| {
            truncate_chars(person::job(&mut ctx.rng), 100).into()
        }),
        nullable(ctx, NULL_RATES[4], SqlType::Decimal, |ctx| {
            ctx.decimal(30_000, 150_000, 2).into()
        }),
        nullable(ctx, NULL_RATES[5], SqlType::Date, |ctx| {
            datetime::date_between(&mut ctx.rng, ctx.today, -3650, 0).into()
        }),
        nullable(ctx, NULL_RATES[6], SqlType::Int, |ctx| {
            ctx.int_range(1, 100).into()
        }),
        nullable(ctx, NULL_RATES[7], SqlType::Bool, |ctx| {
            ctx.chance(0.5).into()
        }),
    ]
}

/// NULL with probability `rate`, otherwise the sampled value.
fn nullable(
    ctx: &mut GenContext,
    rate: f64,
    ty: SqlType,
    sample: impl FnOnce(&mut GenContext) -> SqlValue,
) -> SqlValue {
    if ctx.chance(rate) {
        SqlValue::Null(ty)
    } else {
        sample(ctx)
    }
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
    fn test_null_rates_track_their_columns() {
        let mut ctx = ctx();
        let n = 10_000;
        let mut null_counts = [0u32; 8];
        for _ in 0..n {
            let row = build_row(&mut ctx);
            for (col, value) in row.iter().enumerate() {
                if value.is_null() {
                    null_counts[col] += 1;
                }
            }
        }
        for (col, &rate) in NULL_RATES.iter().enumerate() {
            let expected = rate * n as f64;
            let got = null_counts[col] as f64;
            // Allow about five standard deviations of slack.
            let sigma = (n as f64 * rate * (1.0 - rate)).sqrt();
            assert!(
                (got - expected).abs() < 5.0 * sigma,
                "column {col}: expected ~{expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_nulls_carry_the_column_type() {
        let mut ctx = ctx();
        for _ in 0..1000 {
            let row = build_row(&mut ctx);
            if let SqlValue::Null(ty) = row[4] {
                assert_eq!(ty, SqlType::Decimal);
            }
            if let SqlValue::Null(ty) = row[7] {
                assert_eq!(ty, SqlType::Bool);
            }
        }
    }
}
