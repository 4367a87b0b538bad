//! The `diagnose` command: print the detection query for every problem.

use defect_generators::catalog::catalog;
use workshop_core::BackendKind;

/// Render the full diagnostic catalog for one backend. Output goes to
/// stdout so it can be piped into a SQL client.
pub fn run_diagnose(kind: BackendKind) {
    let prefix = kind.table_prefix();

    println!("Diagnostic queries ({kind})");
    println!("Run these against a populated workshop database to explore each problem.");

    for entry in catalog() {
        println!();
        println!(
            "=== Problem {}: {} ===",
            entry.problem.number(),
            entry.name
        );
        println!("-- {}", entry.description);
        println!();
        println!("{}", entry.render(prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defect_generators::catalog::catalog;

    #[test]
    fn test_rendered_catalog_is_complete_for_all_backends() {
        for kind in BackendKind::ALL {
            let prefix = kind.table_prefix();
            let entries = catalog();
            assert_eq!(entries.len(), 15);
            for entry in entries {
                let rendered = entry.render(prefix);
                assert!(!rendered.contains("{prefix}"));
            }
        }
    }
}
