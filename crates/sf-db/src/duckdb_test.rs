use super::*;
use sf_core::ErrorKind;

async fn orders_db() -> DuckDbBackend {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE orders (order_id INT, customer_id INT, order_value DOUBLE);
         INSERT INTO orders VALUES (123, 15, 150.67), (211, 15, 251.43), (312, 5, 333.41);
         CREATE TABLE customers (customer_id INT, name VARCHAR);
         INSERT INTO customers VALUES (15, 'John'), (5, 'Mike');",
    )
    .await
    .unwrap();
    db
}

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::new(":memory:").unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn test_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snipflow.duckdb");
    let db = DuckDbBackend::from_path(&path).unwrap();
    db.execute_batch("CREATE TABLE t AS SELECT 1 AS id").await.unwrap();
    assert!(path.exists());
    assert_eq!(db.table_names().await.unwrap(), vec!["t"]);
}

#[tokio::test]
async fn test_query_rows() {
    let db = orders_db().await;
    let output = db
        .query("SELECT order_id, name FROM orders JOIN customers USING (customer_id) ORDER BY order_id")
        .await
        .unwrap();
    assert_eq!(output.columns, vec!["order_id", "name"]);
    assert_eq!(output.row_count(), 3);
    assert_eq!(output.rows[0], vec!["123", "John"]);
}

#[tokio::test]
async fn test_query_composed_cte() {
    let db = orders_db().await;
    let output = db
        .query("WITH \"another_orders\" AS (\nSELECT * FROM orders WHERE order_value > 250.0)\nSELECT count(*) AS n FROM another_orders")
        .await
        .unwrap();
    assert_eq!(output.rows, vec![vec!["2".to_string()]]);
}

#[tokio::test]
async fn test_null_rendering() {
    let db = DuckDbBackend::in_memory().unwrap();
    let output = db.query("SELECT NULL AS nothing").await.unwrap();
    assert_eq!(output.rows, vec![vec!["NULL".to_string()]]);
}

#[tokio::test]
async fn test_table_and_column_names() {
    let db = orders_db().await;
    assert_eq!(db.table_names().await.unwrap(), vec!["customers", "orders"]);

    let columns = db.column_names().await.unwrap();
    assert!(columns.contains(&"order_value".to_string()));
    assert_eq!(
        columns.iter().filter(|c| c.as_str() == "customer_id").count(),
        1
    );
}

#[tokio::test]
async fn test_missing_table_classified() {
    let db = orders_db().await;
    let err = db.query("SELECT * FROM orderz").await.unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)));

    let failure = err.to_failure("SELECT * FROM orderz");
    assert_eq!(failure.code.as_deref(), Some("42P01"));
    assert!(!failure.message.starts_with("[D003]"));
    assert_eq!(failure.sql.as_deref(), Some("SELECT * FROM orderz"));
}

#[tokio::test]
async fn test_missing_column_classified() {
    let db = orders_db().await;
    let err = db.query("SELECT nmae FROM customers").await.unwrap_err();
    assert!(matches!(err, DbError::ColumnNotFound(_)));
}

#[tokio::test]
async fn test_typo_translated_with_suggestion() {
    let db = orders_db().await;
    let sql = "SELECT * FROM orderz";
    let err = db.query(sql).await.unwrap_err();

    let known = sf_core::KnownNames::default().with_tables(db.table_names().await.unwrap());
    let translated = sf_core::ErrorTranslator::new().translate(&err.to_failure(sql), &known);

    assert_eq!(translated.kind(), ErrorKind::TableNotFound);
    assert!(translated.message().starts_with("There is no table with name 'orderz'.\nDid you mean: 'orders'"));
    assert!(translated.message().ends_with(err.driver_message()));
}

#[tokio::test]
async fn test_syntax_error_is_execution_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.query("SELECT last_name FRM author").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
    assert!(err.to_failure("").code.is_none());
}
