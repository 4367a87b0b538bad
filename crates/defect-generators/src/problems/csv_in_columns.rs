//! Problem 11: multi-valued attributes jammed into single columns.
//!
//! Tags, categories and related article ids are comma-joined strings, so
//! answering "which articles are tagged sql" means string surgery
//! instead of a join.

use db_adapter::batch::BatchWriter;
use db_adapter::{AdapterError, DatabaseAdapter};
use rand::seq::SliceRandom;
use rand::Rng;
use synth_data::{person, text};
use workshop_core::{GenContext, SqlValue};

use super::truncate_chars;

const COLUMNS: &[&str] = &[
    "article_id",
    "title",
    "author",
    "tags",
    "categories",
    "related_ids",
];

const ALL_TAGS: &[&str] = &[
    "python",
    "javascript",
    "sql",
    "database",
    "web",
    "api",
    "security",
    "cloud",
    "devops",
    "testing",
    "frontend",
    "backend",
    "mobile",
    "ai",
    "ml",
];

const ALL_CATEGORIES: &[&str] = &["Tutorial", "News", "Opinion", "Review", "Guide", "Reference"];

pub async fn run(
    db: &mut dyn DatabaseAdapter,
    ctx: &mut GenContext,
    row_count: u64,
) -> Result<(), AdapterError> {
    let prefix = db.table_prefix();
    db.execute(&format!(
        "CREATE TABLE {prefix}articles_csv_tags (
            article_id INTEGER,
            title VARCHAR(300),
            author VARCHAR(200),
            tags VARCHAR(500),
            categories VARCHAR(500),
            related_ids VARCHAR(200)
        )"
    ))
    .await?;

    let mut writer = BatchWriter::new(&mut *db, format!("{prefix}articles_csv_tags"), COLUMNS);
    for i in 0..row_count {
        let row = vec![
            SqlValue::Int(i as i32 + 1),
            truncate_chars(&text::sentence(&mut ctx.rng, 8), 300).into(),
            person::full_name(&mut ctx.rng).into(),
            joined_sample(ctx, ALL_TAGS, 1, 7).into(),
            joined_sample(ctx, ALL_CATEGORIES, 1, 3).into(),
            related_ids(ctx, row_count as i32).into(),
        ];
        writer.push(row).await?;
    }
    writer.finish().await?;
    Ok(())
}

/// Comma-join a without-replacement sample of `min..=max` pool entries.
fn joined_sample(ctx: &mut GenContext, pool: &[&str], min: usize, max: usize) -> String {
    let count = ctx.rng.gen_range(min..=max.min(pool.len()));
    let picked: Vec<&str> = pool
        .choose_multiple(&mut ctx.rng, count)
        .copied()
        .collect();
    picked.join(",")
}

/// Zero to five random article ids, comma-joined (possibly empty).
fn related_ids(ctx: &mut GenContext, max_id: i32) -> String {
    let count = ctx.int_range(0, 5);
    (0..count)
        .map(|_| ctx.int_range(1, max_id.max(1)).to_string())
        .collect::<Vec<_>>()
        .join(",")
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
    fn test_tags_are_unique_and_from_the_vocabulary() {
        let mut ctx = ctx();
        for _ in 0..500 {
            let tags = joined_sample(&mut ctx, ALL_TAGS, 1, 7);
            let parts: Vec<&str> = tags.split(',').collect();
            assert!((1..=7).contains(&parts.len()));
            assert!(parts.iter().all(|t| ALL_TAGS.contains(t)));

            let mut deduped = parts.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), parts.len(), "duplicate tag in {tags:?}");
        }
    }

    #[test]
    fn test_categories_capped_at_three() {
        let mut ctx = ctx();
        for _ in 0..200 {
            let cats = joined_sample(&mut ctx, ALL_CATEGORIES, 1, 3);
            assert!(cats.split(',').count() <= 3);
        }
    }

    #[test]
    fn test_related_ids_in_range_and_sometimes_empty() {
        let mut ctx = ctx();
        let mut empties = 0;
        for _ in 0..1000 {
            let ids = related_ids(&mut ctx, 500);
            if ids.is_empty() {
                empties += 1;
                continue;
            }
            for id in ids.split(',') {
                let id: i32 = id.parse().unwrap();
                assert!((1..=500).contains(&id));
            }
        }
        assert!(empties > 0);
    }
}
