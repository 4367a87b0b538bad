//! Problem 13: one massively denormalized table holding everything.
//!
//! A hundred customers and fifty products are generated once, then every
//! output row copies a full customer and product record next to its
//! order and line-item fields, so ~34 columns repeat the same attribute
//! data tens of thousands of times.

use chrono::{Duration, NaiveDateTime};
use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use rand::Rng;
use rust_decimal::Decimal;
use synth_data::{address, company, datetime, internet, person, text};
use workshop_core::{GenContext, SqlType, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "id",
    "customer_id",
    "customer_first_name",
    "customer_last_name",
    "customer_email",
    "customer_phone",
    "customer_address_line1",
    "customer_address_line2",
    "customer_city",
    "customer_state",
    "customer_zip",
    "customer_country",
    "customer_created_at",
    "order_id",
    "order_date",
    "order_status",
    "order_total",
    "order_shipping_cost",
    "order_tax",
    "product_id",
    "product_name",
    "product_description",
    "product_category",
    "product_subcategory",
    "product_brand",
    "product_unit_price",
    "product_cost",
    "quantity",
    "line_total",
    "shipping_carrier",
    "shipping_tracking",
    "shipping_method",
    "estimated_delivery",
    "actual_delivery",
];

const CUSTOMER_POOL: usize = 100;
const PRODUCT_POOL: usize = 50;

const ORDER_STATUSES: &[&str] = &["pending", "shipped", "delivered", "returned"];
const CARRIERS: &[&str] = &["UPS", "FedEx", "USPS", "DHL"];
const SHIPPING_METHODS: &[&str] = &["standard", "express", "overnight"];
const PRODUCT_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Home", "Sports", "Books"];

struct Customer {
    id: i32,
    first: String,
    last: String,
    email: String,
    phone: String,
    addr1: String,
    addr2: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    created: NaiveDateTime,
}

struct Product {
    id: i32,
    name: String,
    description: String,
    category: String,
    subcategory: String,
    brand: String,
    price: Decimal,
    cost: Decimal,
}

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}god_table (
            id INTEGER,
            customer_id INTEGER,
            customer_first_name VARCHAR(100),
            customer_last_name VARCHAR(100),
            customer_email VARCHAR(255),
            customer_phone VARCHAR(50),
            customer_address_line1 VARCHAR(200),
            customer_address_line2 VARCHAR(200),
            customer_city VARCHAR(100),
            customer_state VARCHAR(50),
            customer_zip VARCHAR(20),
            customer_country VARCHAR(100),
            customer_created_at TIMESTAMP,
            order_id INTEGER,
            order_date TIMESTAMP,
            order_status VARCHAR(50),
            order_total DECIMAL(10,2),
            order_shipping_cost DECIMAL(10,2),
            order_tax DECIMAL(10,2),
            product_id INTEGER,
            product_name VARCHAR(200),
            product_description VARCHAR(1000),
            product_category VARCHAR(100),
            product_subcategory VARCHAR(100),
            product_brand VARCHAR(100),
            product_unit_price DECIMAL(10,2),
            product_cost DECIMAL(10,2),
            quantity INTEGER,
            line_total DECIMAL(10,2),
            shipping_carrier VARCHAR(100),
            shipping_tracking VARCHAR(100),
            shipping_method VARCHAR(50),
            estimated_delivery DATE,
            actual_delivery DATE
        )"
    ))
    .await?;

    let customers: Vec<Customer> = (0..CUSTOMER_POOL)
        .map(|i| build_customer(ctx, i as i32 + 1))
        .collect();
    let products: Vec<Product> = (0..PRODUCT_POOL)
        .map(|i| build_product(ctx, i as i32 + 1))
        .collect();

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}god_table"), COLUMNS);
    for i in 0..row_count {
        let customer = &customers[ctx.rng.gen_range(0..customers.len())];
        let product = &products[ctx.rng.gen_range(0..products.len())];
        let row = build_row(ctx, i as i32 + 1, customer, product);
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

fn build_customer(ctx: &mut GenContext, id: i32) -> Customer {
    Customer {
        id,
        first: person::first_name(&mut ctx.rng).to_string(),
        last: person::last_name(&mut ctx.rng).to_string(),
        email: internet::email(&mut ctx.rng),
        phone: person::phone_number(&mut ctx.rng),
        addr1: address::street_address(&mut ctx.rng),
        addr2: if ctx.chance(0.3) {
            address::secondary_address(&mut ctx.rng)
        } else {
            String::new()
        },
        city: address::city(&mut ctx.rng).to_string(),
        state: address::state_abbr(&mut ctx.rng).to_string(),
        zip: address::zipcode(&mut ctx.rng),
        country: "USA".to_string(),
        created: datetime::datetime_between(&mut ctx.rng, ctx.now, -1095, -365),
    }
}

fn build_product(ctx: &mut GenContext, id: i32) -> Product {
    Product {
        id,
        name: truncate_chars(&company::catch_phrase(&mut ctx.rng), 200),
        description: text::text(&mut ctx.rng, 500),
        category: (*ctx.pick(PRODUCT_CATEGORIES)).to_string(),
        subcategory: text::word(&mut ctx.rng).to_string(),
        brand: truncate_chars(&company::company(&mut ctx.rng), 100),
        price: ctx.decimal(10, 500, 2),
        cost: ctx.decimal(5, 250, 2),
    }
}

fn build_row(ctx: &mut GenContext, id: i32, customer: &Customer, product: &Product) -> Vec<SqlValue> {
    let quantity = ctx.int_range(1, 5);
    let order_date = datetime::datetime_between(&mut ctx.rng, ctx.now, -365, 0);
    let qty = Decimal::from(quantity);
    let line_total = (product.price * qty).round_dp(2);
    // Order total carries a rough tax estimate on top of the line total.
    let order_total = (product.price * qty * Decimal::new(11, 1)).round_dp(2);
    let order_tax = (product.price * qty * Decimal::new(8, 2)).round_dp(2);

    let estimated = (order_date + Duration::days(ctx.int_range(3, 14) as i64)).date();
    let actual = if ctx.chance(0.7) {
        SqlValue::Date((order_date + Duration::days(ctx.int_range(3, 20) as i64)).date())
    } else {
        SqlValue::Null(SqlType::Date)
    };

    let tracking: String = internet::uuid4(&mut ctx.rng).to_string().chars().take(20).collect();

    vec![
        id.into(),
        customer.id.into(),
        customer.first.clone().into(),
        customer.last.clone().into(),
        customer.email.clone().into(),
        customer.phone.clone().into(),
        customer.addr1.clone().into(),
        customer.addr2.clone().into(),
        customer.city.clone().into(),
        customer.state.clone().into(),
        customer.zip.clone().into(),
        customer.country.clone().into(),
        customer.created.into(),
        ctx.int_range(10_000, 99_999).into(),
        order_date.into(),
        (*ctx.pick(ORDER_STATUSES)).into(),
        order_total.into(),
        ctx.decimal(5, 20, 2).into(),
        order_tax.into(),
        product.id.into(),
        product.name.clone().into(),
        product.description.clone().into(),
        product.category.clone().into(),
        product.subcategory.clone().into(),
        product.brand.clone().into(),
        product.price.into(),
        product.cost.into(),
        quantity.into(),
        line_total.into(),
        (*ctx.pick(CARRIERS)).into(),
        tracking.into(),
        (*ctx.pick(SHIPPING_METHODS)).into(),
        estimated.into(),
        actual,
    ]
}
