use super::*;
use crate::store::DeleteMode;

/// raw_orders <- stg_orders <- fct_orders, plus an unrelated snippet
fn build_store() -> SnippetStore {
    let mut store = SnippetStore::new();
    store.save::<&str>("raw_orders", "SELECT * FROM orders", &[]).unwrap();
    store
        .save("stg_orders", "SELECT id FROM raw_orders", &["raw_orders"])
        .unwrap();
    store
        .save::<&str>("fct_orders", "SELECT count(*) FROM stg_orders", &[])
        .unwrap();
    store.save::<&str>("unrelated", "SELECT 1", &[]).unwrap();
    store
}

#[test]
fn test_inferred_edges_included() {
    let dag = SnippetGraph::from_store(&build_store());
    assert_eq!(dag.dependents("stg_orders"), vec!["fct_orders"]);
    assert_eq!(dag.dependents("raw_orders"), vec!["stg_orders"]);
}

#[test]
fn test_descendants_nearest_first() {
    let dag = SnippetGraph::from_store(&build_store());
    assert_eq!(dag.descendants("raw_orders"), vec!["stg_orders", "fct_orders"]);
    assert!(dag.descendants("unrelated").is_empty());
    assert!(dag.descendants("missing").is_empty());
}

#[test]
fn test_dependents_in_insertion_order() {
    let mut store = SnippetStore::new();
    store.save::<&str>("base", "SELECT 1 AS id", &[]).unwrap();
    store.save::<&str>("second", "SELECT id FROM base", &[]).unwrap();
    store.save::<&str>("first", "SELECT id FROM base", &[]).unwrap();
    store.save("first", "SELECT id FROM base", &["base"]).unwrap();

    let dag = SnippetGraph::from_store(&store);
    assert_eq!(dag.dependents("base"), vec!["second", "first"]);
}

#[test]
fn test_cycle_does_not_loop_forever() {
    let mut store = SnippetStore::new();
    store.save::<&str>("a", "SELECT * FROM b", &[]).unwrap();
    store.save::<&str>("b", "SELECT * FROM a", &[]).unwrap();

    let dag = SnippetGraph::from_store(&store);
    assert_eq!(dag.descendants("a"), vec!["b"]);
}

#[test]
fn test_dangling_declared_dependency_has_no_edge() {
    let mut store = build_store();
    store.delete_with("raw_orders", DeleteMode::Force).unwrap();

    let dag = SnippetGraph::from_store(&store);
    assert!(dag.dependents("raw_orders").is_empty());
    assert_eq!(dag.descendants("stg_orders"), vec!["fct_orders"]);
}
