//! Canonical test fixtures, shared by unit and integration tests.

use crate::types::{Catalog, PageEntry};

/// Construct a page entry from string slices.
pub fn make_page(
    name: &str,
    description: &str,
    href: &str,
    category: &str,
    keywords: &[&str],
) -> PageEntry {
    PageEntry {
        name: name.to_string(),
        description: description.to_string(),
        href: href.to_string(),
        category: category.to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
    }
}

/// A small admin-panel catalog used across the test suite.
pub fn test_catalog() -> Catalog {
    Catalog {
        pages: vec![
            make_page(
                "Dashboard",
                "Operational overview of the order processing pipeline",
                "/dashboard",
                "Overview",
                &["home", "overview"],
            ),
            make_page(
                "Order Sync",
                "Monitor order synchronization between datastores",
                "/analytics/order-sync",
                "Analytics",
                &["sync", "orders", "pipeline"],
            ),
            make_page(
                "Missing Orders",
                "Identify orders missing between source and reports",
                "/analytics/reports/missing-orders",
                "Reports",
                &["sync", "gap"],
            ),
            make_page(
                "SQL Query",
                "Run ad-hoc SQL queries against the reporting datastore",
                "/analytics/reports/sql-query",
                "Reports",
                &["sql", "query", "database"],
            ),
            make_page(
                "Loyalty Points",
                "Manage customer loyalty point balances",
                "/customers/loyalty",
                "Customers",
                &["points", "rewards"],
            ),
        ],
    }
}
