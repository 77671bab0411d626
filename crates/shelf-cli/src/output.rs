//! Output formatting for CLI responses.

use shelf_store::{SeedReport, TableSeed};

/// Prints a progress message to stdout.
pub fn print_message(message: &str) {
    println!("{message}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Human-readable lines describing a seeding pass, users first.
pub fn seed_report_lines(report: &SeedReport) -> [String; 2] {
    [
        table_line(&report.users, "Users", "user"),
        table_line(&report.products, "Products", "product"),
    ]
}

fn table_line(seed: &TableSeed, table: &str, singular: &str) -> String {
    match seed {
        TableSeed::Inserted(n) => format!("Inserted {n} sample {}", table.to_lowercase()),
        TableSeed::Skipped(n) => {
            format!("{table} table already has {n} records, skipping {singular} seeding")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_seed_lines() {
        let lines = seed_report_lines(&SeedReport {
            users: TableSeed::Inserted(5),
            products: TableSeed::Inserted(7),
        });
        assert_eq!(lines, ["Inserted 5 sample users", "Inserted 7 sample products"]);
    }

    #[test]
    fn skipped_seed_lines() {
        let lines = seed_report_lines(&SeedReport {
            users: TableSeed::Skipped(6),
            products: TableSeed::Inserted(7),
        });
        assert_eq!(
            lines[0],
            "Users table already has 6 records, skipping user seeding"
        );
        assert_eq!(lines[1], "Inserted 7 sample products");
    }
}
