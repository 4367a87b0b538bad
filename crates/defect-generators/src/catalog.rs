//! Diagnostic queries demonstrating how each defect is detected.
//!
//! Entries are static text; `{prefix}` is substituted with the
//! backend's namespace/prefix at render time and nothing is executed.

use crate::Problem;

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEntry {
    pub problem: Problem,
    pub name: &'static str,
    pub description: &'static str,
    query: &'static str,
}

impl DiagnosticEntry {
    /// The query with `{prefix}` replaced by the backend's prefix.
    pub fn render(&self, prefix: &str) -> String {
        self.query.replace("{prefix}", prefix)
    }
}

/// All fifteen entries, in problem order.
pub fn catalog() -> &'static [DiagnosticEntry] {
    CATALOG
}

static CATALOG: &[DiagnosticEntry] = &[
    DiagnosticEntry {
        problem: Problem::NoPrimaryKey,
        name: "Tables without Primary Keys",
        description: "Find duplicate rows that can't be uniquely identified",
        query: "\
-- Find exact duplicate rows
SELECT customer_id, first_name, last_name, email, COUNT(*) as count
FROM {prefix}customers_no_pk
GROUP BY customer_id, first_name, last_name, email
HAVING COUNT(*) > 1
ORDER BY count DESC
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::MissingForeignKeys,
        name: "Orphaned Foreign Key Records",
        description: "Find orders referencing non-existent customers/products",
        query: "\
-- Find orders with non-existent customers
SELECT COUNT(*) as orphaned_customer_orders
FROM {prefix}orders_no_fk o
LEFT JOIN {prefix}customers_no_pk c ON o.customer_id = c.customer_id
WHERE c.customer_id IS NULL;

-- Find orders with non-existent products
SELECT COUNT(*) as orphaned_product_orders
FROM {prefix}orders_no_fk o
LEFT JOIN {prefix}products p ON o.product_id = p.product_id
WHERE p.product_id IS NULL;",
    },
    DiagnosticEntry {
        problem: Problem::WrongDataTypes,
        name: "Wrong Data Types",
        description: "Identify strings that should be dates/numbers",
        query: "\
-- Show the variety of date formats stored as strings
SELECT transaction_date, COUNT(*) as count
FROM {prefix}transactions_bad_types
GROUP BY transaction_date
ORDER BY count DESC
LIMIT 20;

-- Show amount formats
SELECT amount, COUNT(*) as count
FROM {prefix}transactions_bad_types
GROUP BY amount
ORDER BY count DESC
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::MissingNotNull,
        name: "NULL Values in Critical Fields",
        description: "Count NULLs in fields that shouldn't be NULL",
        query: "\
SELECT
    COUNT(*) as total_rows,
    SUM(CASE WHEN first_name IS NULL THEN 1 ELSE 0 END) as null_first_name,
    SUM(CASE WHEN last_name IS NULL THEN 1 ELSE 0 END) as null_last_name,
    SUM(CASE WHEN email IS NULL THEN 1 ELSE 0 END) as null_email,
    SUM(CASE WHEN salary IS NULL THEN 1 ELSE 0 END) as null_salary,
    SUM(CASE WHEN hire_date IS NULL THEN 1 ELSE 0 END) as null_hire_date
FROM {prefix}employees_nulls;",
    },
    DiagnosticEntry {
        problem: Problem::DuplicateRecords,
        name: "Duplicate Records",
        description: "Find users that appear multiple times",
        query: "\
SELECT user_id, username, email, COUNT(*) as occurrences
FROM {prefix}users_duplicates
GROUP BY user_id, username, email
HAVING COUNT(*) > 1
ORDER BY occurrences DESC
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::InconsistentDates,
        name: "Inconsistent Date Formats",
        description: "Show the chaos of date format variations",
        query: "\
SELECT start_date, COUNT(*) as count
FROM {prefix}events_bad_dates
GROUP BY start_date
ORDER BY count DESC
LIMIT 30;",
    },
    DiagnosticEntry {
        problem: Problem::InconsistentCasing,
        name: "Inconsistent String Casing",
        description: "Find same value with different casing",
        query: "\
SELECT LOWER(country) as normalized_country,
       COUNT(DISTINCT country) as case_variations,
       COUNT(*) as total_records
FROM {prefix}contacts_bad_casing
GROUP BY LOWER(country)
HAVING COUNT(DISTINCT country) > 1
ORDER BY case_variations DESC;",
    },
    DiagnosticEntry {
        problem: Problem::Whitespace,
        name: "Whitespace Issues",
        description: "Find values with leading/trailing whitespace",
        query: "\
SELECT sku,
       LENGTH(sku) as length_with_whitespace,
       LENGTH(TRIM(sku)) as length_trimmed,
       LENGTH(sku) - LENGTH(TRIM(sku)) as whitespace_chars
FROM {prefix}inventory_whitespace
WHERE LENGTH(sku) != LENGTH(TRIM(sku))
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::InvalidEmails,
        name: "Invalid Email Formats",
        description: "Find emails that don't match basic patterns",
        query: "\
-- Emails without @ symbol
SELECT email, COUNT(*) as count
FROM {prefix}subscribers_bad_emails
WHERE email NOT LIKE '%@%' OR email = '' OR email IS NULL
GROUP BY email
ORDER BY count DESC
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::OutOfRange,
        name: "Out of Range Values",
        description: "Find business-logic violations",
        query: "\
SELECT
    SUM(CASE WHEN unit_price < 0 THEN 1 ELSE 0 END) as negative_prices,
    SUM(CASE WHEN quantity < 0 THEN 1 ELSE 0 END) as negative_quantities,
    SUM(CASE WHEN discount_percent > 100 THEN 1 ELSE 0 END) as impossible_discounts,
    SUM(CASE WHEN sale_date > CURRENT_DATE THEN 1 ELSE 0 END) as future_dates,
    SUM(CASE WHEN customer_age < 0 OR customer_age > 120 THEN 1 ELSE 0 END) as impossible_ages,
    SUM(CASE WHEN rating < 1 OR rating > 5 THEN 1 ELSE 0 END) as invalid_ratings
FROM {prefix}sales_bad_values;",
    },
    DiagnosticEntry {
        problem: Problem::CsvInColumns,
        name: "CSV Values in Columns (1NF Violation)",
        description: "Show multi-valued fields that should be separate tables",
        query: "\
-- Count articles by number of tags
SELECT
    (LENGTH(tags) - LENGTH(REPLACE(tags, ',', '')) + 1) as num_tags,
    COUNT(*) as article_count
FROM {prefix}articles_csv_tags
WHERE tags IS NOT NULL AND tags != ''
GROUP BY (LENGTH(tags) - LENGTH(REPLACE(tags, ',', '')) + 1)
ORDER BY num_tags;",
    },
    DiagnosticEntry {
        problem: Problem::EncodingIssues,
        name: "Encoding and Special Characters",
        description: "Find records with special characters",
        query: "\
SELECT customer_name, LENGTH(customer_name) as length
FROM {prefix}international_data
WHERE customer_name LIKE '%\\n%'
   OR customer_name LIKE '%\\t%'
   OR customer_name LIKE '%<script>%'
LIMIT 20;",
    },
    DiagnosticEntry {
        problem: Problem::GodTable,
        name: "God Table Redundancy",
        description: "Show data redundancy in denormalized table",
        query: "\
-- Same customer info repeated many times
SELECT customer_id, customer_email,
       COUNT(*) as times_repeated,
       COUNT(DISTINCT order_id) as unique_orders
FROM {prefix}god_table
GROUP BY customer_id, customer_email
ORDER BY times_repeated DESC
LIMIT 10;",
    },
    DiagnosticEntry {
        problem: Problem::MissingIndexes,
        name: "Missing Indexes Impact",
        description: "Show query that would benefit from indexes",
        query: "\
-- This query scans the full table without indexes
-- Compare EXPLAIN plans before/after adding an index
SELECT user_id, action_type, COUNT(*) as count
FROM {prefix}audit_log_no_index
WHERE created_at > CURRENT_DATE - INTERVAL '7 days'
  AND action_type = 'LOGIN'
  AND status = 'success'
GROUP BY user_id, action_type
ORDER BY count DESC
LIMIT 10;",
    },
    DiagnosticEntry {
        problem: Problem::TypeCoercion,
        name: "Type Coercion Join Failures",
        description: "Show how string/int ID mismatch breaks joins",
        query: "\
-- This join may fail or produce wrong results due to type mismatch
SELECT
    a.account_id as int_id,
    t.account_id as str_id,
    a.account_name,
    t.amount
FROM {prefix}accounts_int_id a
JOIN {prefix}transactions_str_id t
    ON a.account_id = CAST(t.account_id AS INTEGER)
WHERE t.account_id LIKE '0%'
LIMIT 10;

-- Count of transactions that won't join properly with direct comparison
SELECT COUNT(*) as problematic_transactions
FROM {prefix}transactions_str_id
WHERE account_id LIKE '0%';",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use workshop_core::BackendKind;

    #[test]
    fn test_exactly_fifteen_entries_in_problem_order() {
        let entries = catalog();
        assert_eq!(entries.len(), 15);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.problem, Problem::ALL[i]);
        }
    }

    #[test]
    fn test_render_substitutes_every_placeholder() {
        for kind in BackendKind::ALL {
            let prefix = kind.table_prefix();
            for entry in catalog() {
                let rendered = entry.render(prefix);
                assert!(!rendered.is_empty());
                assert!(
                    !rendered.contains("{prefix}"),
                    "{} left a placeholder for {kind}",
                    entry.name
                );
                assert!(rendered.contains(prefix));
            }
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for entry in catalog() {
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}
