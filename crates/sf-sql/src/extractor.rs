//! Table reference extraction from SQL AST

use sqlparser::ast::{visit_relations, ObjectName, Statement};
use std::ops::ControlFlow;

/// Extract all table references from SQL statements, dotted, in the order
/// the AST visitor reaches them, without duplicates.
///
/// Uses `visit_relations` to walk FROM clauses, JOINs, subqueries and CTE
/// bodies.
pub fn extract_dependencies(statements: &[Statement]) -> Vec<String> {
    collect(statements, |name| {
        let parts: Vec<String> = name
            .0
            .iter()
            .filter_map(|part| part.as_ident().map(|ident| ident.value.clone()))
            .collect();
        (!parts.is_empty()).then(|| parts.join("."))
    })
}

/// Like [`extract_dependencies`], but only unqualified names. A
/// schema-qualified reference such as `raw.orders` never names a CTE.
pub fn extract_unqualified(statements: &[Statement]) -> Vec<String> {
    collect(statements, |name| match name.0.as_slice() {
        [only] => only.as_ident().map(|ident| ident.value.clone()),
        _ => None,
    })
}

fn collect<F>(statements: &[Statement], mut name_of: F) -> Vec<String>
where
    F: FnMut(&ObjectName) -> Option<String>,
{
    let mut deps: Vec<String> = Vec::new();
    for stmt in statements {
        let _ = visit_relations(stmt, |relation| {
            if let Some(name) = name_of(relation) {
                if !deps.contains(&name) {
                    deps.push(name);
                }
            }
            ControlFlow::<()>::Continue(())
        });
    }
    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlParser;

    fn parse(sql: &str) -> Vec<Statement> {
        SqlParser::duckdb().parse(sql).unwrap()
    }

    #[test]
    fn test_extract_from_simple_select() {
        assert_eq!(extract_dependencies(&parse("SELECT * FROM users")), vec!["users"]);
    }

    #[test]
    fn test_extract_from_join() {
        let deps = extract_dependencies(&parse(
            "SELECT * FROM orders o JOIN customers c ON o.customer_id = c.id",
        ));
        assert_eq!(deps, vec!["orders", "customers"]);
    }

    #[test]
    fn test_extract_from_subquery() {
        let deps = extract_dependencies(&parse(
            "SELECT * FROM (SELECT * FROM raw_data) AS sub JOIN other_table ON sub.id = other_table.id",
        ));
        assert!(deps.contains(&"raw_data".to_string()));
        assert!(deps.contains(&"other_table".to_string()));
    }

    #[test]
    fn test_extract_deduplicates() {
        let deps = extract_dependencies(&parse(
            "SELECT * FROM table1 UNION ALL SELECT * FROM table1",
        ));
        assert_eq!(deps, vec!["table1"]);
    }

    #[test]
    fn test_unqualified_skips_schema_names() {
        let stmts = parse("SELECT * FROM raw.orders JOIN orders_less USING (id)");
        assert_eq!(extract_dependencies(&stmts), vec!["raw.orders", "orders_less"]);
        assert_eq!(extract_unqualified(&stmts), vec!["orders_less"]);
    }

    #[test]
    fn test_quoted_name_unquoted() {
        let stmts = parse(r#"SELECT * FROM "my snippet""#);
        assert_eq!(extract_unqualified(&stmts), vec!["my snippet"]);
    }
}
