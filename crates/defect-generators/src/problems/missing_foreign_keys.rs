//! Problem 2: orders referencing customers and products that don't exist.
//!
//! Only 100 products are seeded and the customer domain tops out at
//! 10,000, but order rows draw ids far outside both ranges: 30% of
//! customer ids land in 900,000..=999,999 and, independently, 20% of
//! product ids land in 500..=999. No foreign key constraint is there to
//! object.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use synth_data::{company, datetime};
use workshop_core::{GenContext, SqlValue};

const PRODUCT_COLUMNS: &[&str] = &["product_name", "price"];
const ORDER_COLUMNS: &[&str] = &["customer_id", "product_id", "quantity", "order_date"];

/// Number of products actually seeded.
const PRODUCT_COUNT: usize = 100;

/// Fraction of orders pointing at a non-existent customer.
const ORPHAN_CUSTOMER_RATE: f64 = 0.3;

/// Fraction of orders pointing at a non-existent product.
const ORPHAN_PRODUCT_RATE: f64 = 0.2;

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    let auto_inc = db.auto_increment();

    db.execute(&format!(
        "CREATE TABLE {prefix}products (
            product_id {auto_inc} PRIMARY KEY,
            product_name VARCHAR(200),
            price DECIMAL(10,2)
        )"
    ))
    .await?;

    let products: Vec<Vec<SqlValue>> = (0..PRODUCT_COUNT)
        .map(|_| {
            vec![
                company::catch_phrase(&mut ctx.rng).into(),
                ctx.decimal(10, 500, 2).into(),
            ]
        })
        .collect();
    db.insert_rows(&format!("{prefix}products"), PRODUCT_COLUMNS, &products)
        .await?;

    db.execute(&format!(
        "CREATE TABLE {prefix}orders_no_fk (
            order_id {auto_inc} PRIMARY KEY,
            customer_id INTEGER,
            product_id INTEGER,
            quantity INTEGER,
            order_date TIMESTAMP
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}orders_no_fk"), ORDER_COLUMNS);
    for _ in 0..row_count {
        let row = build_order(ctx);
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

fn build_order(ctx: &mut GenContext) -> Vec<SqlValue> {
    vec![
        customer_id(ctx).into(),
        product_id(ctx).into(),
        ctx.int_range(1, 10).into(),
        datetime::datetime_between(&mut ctx.rng, ctx.now, -365, 0).into(),
    ]
}

/// Customer reference; orphaned ids are drawn from a range guaranteed to
/// be outside the 1..=10,000 customer domain.
fn customer_id(ctx: &mut GenContext) -> i32 {
    if ctx.chance(ORPHAN_CUSTOMER_RATE) {
        ctx.int_range(900_000, 999_999)
    } else {
        ctx.int_range(1, 10_000)
    }
}

/// Product reference; orphaned ids sit above the 100 seeded products.
fn product_id(ctx: &mut GenContext) -> i32 {
    if ctx.chance(ORPHAN_PRODUCT_RATE) {
        ctx.int_range(500, 999)
    } else {
        ctx.int_range(1, PRODUCT_COUNT as i32)
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
    fn test_orphan_customer_fraction() {
        let mut ctx = ctx();
        let n = 10_000;
        let orphans = (0..n).filter(|_| customer_id(&mut ctx) >= 900_000).count();
        // Binomial band around p = 0.3 at n = 10,000.
        assert!((2_700..=3_300).contains(&orphans), "got {orphans}");
    }

    #[test]
    fn test_orphan_ids_never_hit_the_valid_domain() {
        let mut ctx = ctx();
        for _ in 0..10_000 {
            let id = customer_id(&mut ctx);
            assert!((1..=10_000).contains(&id) || (900_000..=999_999).contains(&id));

            let pid = product_id(&mut ctx);
            assert!((1..=100).contains(&pid) || (500..=999).contains(&pid));
        }
    }
}
