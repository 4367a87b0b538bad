//! Problem 10: values that are valid for the column type but absurd for
//! the business.
//!
//! One row in five is corrupted by exactly one defect kind: a negative
//! price, a negative quantity, a discount above 100%, a sale dated in
//! the future, an impossible age, or an off-scale rating. Only the
//! targeted column goes bad; its neighbours stay in range.

use chrono::Duration;
use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use rust_decimal::Decimal;
use synth_data::{company, datetime};
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "sale_id",
    "product_name",
    "unit_price",
    "quantity",
    "discount_percent",
    "sale_date",
    "customer_age",
    "rating",
];

/// Fraction of rows carrying a defect.
const DEFECT_RATE: f64 = 0.2;

const IMPOSSIBLE_AGES: &[i32] = &[-5, 0, 150, 999];

/// Off-scale ratings, in tenths (the column is DECIMAL(3,1)).
const BAD_RATINGS_TENTHS: &[i64] = &[-10, 0, 60, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefectKind {
    NegativePrice,
    NegativeQuantity,
    HugeDiscount,
    FutureDate,
    ImpossibleAge,
    BadRating,
}

const DEFECT_KINDS: &[DefectKind] = &[
    DefectKind::NegativePrice,
    DefectKind::NegativeQuantity,
    DefectKind::HugeDiscount,
    DefectKind::FutureDate,
    DefectKind::ImpossibleAge,
    DefectKind::BadRating,
];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}sales_bad_values (
            sale_id INTEGER,
            product_name VARCHAR(200),
            unit_price DECIMAL(10,2),
            quantity INTEGER,
            discount_percent DECIMAL(5,2),
            sale_date DATE,
            customer_age INTEGER,
            rating DECIMAL(3,1)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}sales_bad_values"), COLUMNS);
    for i in 0..row_count {
        writer.push(build_row(ctx, i as i32 + 1)).await?;
    }
    writer.finish().await?;
    Ok(())
}

fn build_row(ctx: &mut GenContext, sale_id: i32) -> Vec<SqlValue> {
    // Start from a fully in-range row.
    let mut price = ctx.decimal(10, 500, 2);
    let mut quantity = ctx.int_range(1, 10);
    let mut discount = ctx.decimal(0, 30, 2);
    let mut sale_date = datetime::date_between(&mut ctx.rng, ctx.today, -365, 0);
    let mut age = ctx.int_range(18, 80);
    let mut rating = Decimal::new(ctx.int_range(10, 50) as i64, 1);

    if ctx.chance(DEFECT_RATE) {
        match *ctx.pick(DEFECT_KINDS) {
            DefectKind::NegativePrice => price = -ctx.decimal(1, 100, 2),
            DefectKind::NegativeQuantity => quantity = -ctx.int_range(1, 100),
            DefectKind::HugeDiscount => discount = ctx.decimal(100, 500, 2),
            DefectKind::FutureDate => {
                sale_date = ctx.today + Duration::days(ctx.int_range(1, 365) as i64)
            }
            DefectKind::ImpossibleAge => age = *ctx.pick(IMPOSSIBLE_AGES),
            DefectKind::BadRating => rating = Decimal::new(*ctx.pick(BAD_RATINGS_TENTHS), 1),
        }
    }

    vec![
        sale_id.into(),
        truncate_chars(&company::catch_phrase(&mut ctx.rng), 200).into(),
        price.into(),
        quantity.into(),
        discount.into(),
        sale_date.into(),
        age.into(),
        rating.into(),
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

    fn defect_count(row: &[SqlValue], today: NaiveDate) -> usize {
        let mut defects = 0;
        if matches!(&row[2], SqlValue::Decimal(d) if d.is_sign_negative()) {
            defects += 1;
        }
        if matches!(&row[3], SqlValue::Int(q) if *q < 0) {
            defects += 1;
        }
        if matches!(&row[4], SqlValue::Decimal(d) if *d > Decimal::new(100, 0)) {
            defects += 1;
        }
        if matches!(&row[5], SqlValue::Date(d) if *d > today) {
            defects += 1;
        }
        if matches!(&row[6], SqlValue::Int(a) if !(1..=120).contains(a)) {
            defects += 1;
        }
        if matches!(&row[7], SqlValue::Decimal(r) if *r < Decimal::new(10, 1) || *r > Decimal::new(50, 1))
        {
            defects += 1;
        }
        defects
    }

    #[test]
    fn test_at_most_one_defect_per_row() {
        let mut ctx = ctx();
        let today = ctx.today;
        for i in 0..2000 {
            let row = build_row(&mut ctx, i + 1);
            assert!(defect_count(&row, today) <= 1);
        }
    }

    #[test]
    fn test_defect_fraction_near_twenty_percent() {
        let mut ctx = ctx();
        let today = ctx.today;
        let n = 10_000;
        let defective = (0..n)
            .filter(|&i| defect_count(&build_row(&mut ctx, i + 1), today) > 0)
            .count();
        // Binomial band around p = 0.2. The age defect can draw 0, which
        // our in-range check treats as defective either way.
        assert!((1_700..=2_300).contains(&defective), "got {defective}");
    }

    #[test]
    fn test_impossible_values_come_from_the_fixed_sets() {
        let mut ctx = ctx();
        for i in 0..5000 {
            let row = build_row(&mut ctx, i + 1);
            if let SqlValue::Int(age) = row[6] {
                if !(18..=80).contains(&age) {
                    assert!(IMPOSSIBLE_AGES.contains(&age));
                }
            }
        }
    }
}
