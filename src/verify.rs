//! Post-run integrity checks against a written database.

use crate::diesel_runtime::DbConnection;
use crate::error::{Result, ShopgenError};
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use serde::Serialize;

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = BigInt)]
    n: i64,
}

const FOREIGN_KEY_VIOLATIONS: &str = "SELECT COUNT(*) AS n FROM pragma_foreign_key_check";

const ORDER_TOTAL_MISMATCHES: &str = "\
    SELECT COUNT(*) AS n FROM Orders o \
    LEFT JOIN (SELECT order_id, ROUND(SUM(line_total), 2) AS items_total \
               FROM Order_Items GROUP BY order_id) i ON i.order_id = o.order_id \
    WHERE i.items_total IS NULL OR ABS(o.order_total - i.items_total) > 0.005";

const UNIT_PRICE_MISMATCHES: &str = "\
    SELECT COUNT(*) AS n FROM Order_Items i \
    JOIN Products p ON p.product_id = i.product_id \
    WHERE i.unit_price <> p.price";

const SHIPMENT_DATE_VIOLATIONS: &str = "\
    SELECT COUNT(*) AS n FROM Shipments \
    WHERE delivery_date IS NOT NULL \
      AND (shipped_date IS NULL OR delivery_date < shipped_date)";

const TOTAL_SPENT_MISMATCHES: &str = "\
    SELECT COUNT(*) AS n FROM Customers c \
    LEFT JOIN (SELECT customer_id, SUM(order_total) AS spent \
               FROM Orders GROUP BY customer_id) o ON o.customer_id = c.customer_id \
    WHERE ABS(COALESCE(c.total_spent, 0) - ROUND(COALESCE(o.spent, 0), 2)) > 0.005";

const CUSTOMERS_MISSING_CONTACT: &str = "\
    SELECT COUNT(*) AS n FROM Customers \
    WHERE email IS NULL OR phone_number IS NULL OR address IS NULL";

/// Violation counts for each checked property. All but
/// `customers_missing_contact` must be zero for a healthy database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub foreign_key_violations: i64,
    pub order_total_mismatches: i64,
    pub unit_price_mismatches: i64,
    pub shipment_date_violations: i64,
    pub total_spent_mismatches: i64,
    /// Injected noise, reported for information only.
    pub customers_missing_contact: i64,
}

impl IntegrityReport {
    /// Names and counts of the failed checks.
    pub fn violations(&self) -> Vec<(&'static str, i64)> {
        [
            ("foreign key violations", self.foreign_key_violations),
            ("order total mismatches", self.order_total_mismatches),
            ("unit price mismatches", self.unit_price_mismatches),
            ("shipment date violations", self.shipment_date_violations),
            ("total_spent mismatches", self.total_spent_mismatches),
        ]
        .into_iter()
        .filter(|(_, count)| *count != 0)
        .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.violations().is_empty()
    }

    /// Turn a report with violations into an error.
    pub fn into_result(self) -> Result<Self> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(self);
        }
        let summary: Vec<String> = violations
            .iter()
            .map(|(check, count)| format!("{} {}", count, check))
            .collect();
        Err(ShopgenError::Integrity(summary.join(", ")))
    }
}

fn count(conn: &mut DbConnection, sql: &str) -> QueryResult<i64> {
    diesel::sql_query(sql).get_result::<Count>(conn).map(|row| row.n)
}

/// Run every check against `conn`.
pub fn check_integrity(conn: &mut DbConnection) -> Result<IntegrityReport> {
    let report = IntegrityReport {
        foreign_key_violations: count(conn, FOREIGN_KEY_VIOLATIONS)?,
        order_total_mismatches: count(conn, ORDER_TOTAL_MISMATCHES)?,
        unit_price_mismatches: count(conn, UNIT_PRICE_MISMATCHES)?,
        shipment_date_violations: count(conn, SHIPMENT_DATE_VIOLATIONS)?,
        total_spent_mismatches: count(conn, TOTAL_SPENT_MISMATCHES)?,
        customers_missing_contact: count(conn, CUSTOMERS_MISSING_CONTACT)?,
    };

    if report.is_clean() {
        tracing::info!("Integrity checks passed");
    } else {
        tracing::warn!("Integrity checks failed: {:?}", report.violations());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::connection::SimpleConnection;

    #[test]
    fn test_report_violations() {
        let report = IntegrityReport {
            unit_price_mismatches: 2,
            customers_missing_contact: 20,
            ..IntegrityReport::default()
        };
        assert!(!report.is_clean());
        assert_eq!(report.violations(), vec![("unit price mismatches", 2)]);

        match report.into_result() {
            Err(ShopgenError::Integrity(msg)) => assert_eq!(msg, "2 unit price mismatches"),
            other => panic!("expected integrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_detects_bad_shipment_dates() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::diesel_runtime::Database::create(dir.path().join("store.db")).unwrap();
        let mut conn = db.get_connection().unwrap();

        conn.batch_execute(
            "INSERT INTO Customers (customer_id, customer_name) VALUES (1, 'Ann Lee');
             INSERT INTO Orders VALUES (1, 1, '2023-01-10', 0, NULL);
             INSERT INTO Shipments VALUES (1, 1, '2023-01-12', '2023-01-11', 'UPS', 'TRACK-00001');
             INSERT INTO Shipments VALUES (2, 1, NULL, '2023-01-11', 'UPS', 'TRACK-00002');",
        )
        .unwrap();

        let report = check_integrity(&mut conn).unwrap();
        assert_eq!(report.shipment_date_violations, 2);
        assert_eq!(report.foreign_key_violations, 0);
        // The order has no items.
        assert_eq!(report.order_total_mismatches, 1);
        assert_eq!(report.customers_missing_contact, 1);
    }

    #[test]
    fn test_detects_dangling_foreign_key() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::diesel_runtime::Database::create(dir.path().join("store.db")).unwrap();
        let mut conn = db.get_connection().unwrap();

        conn.batch_execute(
            "PRAGMA foreign_keys = OFF;
             INSERT INTO Orders VALUES (1, 42, '2023-01-10', 0, NULL);
             INSERT INTO Order_Items VALUES (1, 1, NULL, 1, 0, 0);",
        )
        .unwrap();

        let report = check_integrity(&mut conn).unwrap();
        assert_eq!(report.foreign_key_violations, 1);
        assert!(!report.is_clean());
        assert!(matches!(report.into_result(), Err(ShopgenError::Integrity(_))));
    }
}
