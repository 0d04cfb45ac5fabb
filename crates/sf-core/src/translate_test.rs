use super::*;
use crate::snippet_name::SnippetName;

fn name(s: &str) -> SnippetName {
    SnippetName::parse(s).unwrap()
}

fn composed(deps: &[&str], target: Option<&str>) -> ComposedQuery {
    ComposedQuery {
        sql: String::new(),
        dependencies: deps.iter().map(|d| name(d)).collect(),
        target: target.map(name),
        unverified: Vec::new(),
    }
}

#[test]
fn test_table_typo_exact_message() {
    let original =
        "(sqlite3.OperationalError) no such table: author_subb\n[SQL: SELECT last_name FROM author_subb;]";
    let known = KnownNames::default().with_snippets(["author_sub"]);

    let err = ErrorTranslator::new().translate(&DriverFailure::new(original), &known);

    assert_eq!(err.error_type(), "TableNotFoundError");
    assert_eq!(
        err.message(),
        "There is no table with name 'author_subb'.\nDid you mean: 'author_sub'\n\n\nOriginal error message from DB driver:\n(sqlite3.OperationalError) no such table: author_subb\n[SQL: SELECT last_name FROM author_subb;]"
    );
    assert_eq!(err.original(), original);
    assert_eq!(err.to_string(), err.message());
}

#[test]
fn test_table_suggestions_include_real_tables() {
    let known = KnownNames::default()
        .with_snippets(["author_sub"])
        .with_tables(["orders"]);

    let err = ErrorTranslator::new().translate(&DriverFailure::new("no such table: order"), &known);
    assert!(err.message().contains("Did you mean: 'orders'"));
}

#[test]
fn test_no_suggestion_without_close_match() {
    let known = KnownNames::default().with_snippets(["author_sub"]);
    let err = ErrorTranslator::new().translate(&DriverFailure::new("no such table: zzz"), &known);
    assert_eq!(
        err.message(),
        "There is no table with name 'zzz'.\n\n\nOriginal error message from DB driver:\nno such table: zzz"
    );
}

#[test]
fn test_column_suggestions_use_columns_only() {
    let known = KnownNames::default()
        .with_snippets(["nmae_snippet"])
        .with_columns(["name", "year"]);
    let err = ErrorTranslator::new().translate(
        &DriverFailure::new(r#"Binder Error: Referenced column "nmae" not found in FROM clause!"#),
        &known,
    );
    assert_eq!(err.kind(), ErrorKind::ColumnNotFound);
    assert!(err
        .message()
        .starts_with("There is no column with name 'nmae'.\nDid you mean: 'name'\n"));
}

#[test]
fn test_unrecognised_failure_keeps_original() {
    let err = ErrorTranslator::new()
        .translate(&DriverFailure::new("connection reset"), &KnownNames::default());
    assert_eq!(err.error_type(), "UnknownError");
    assert!(err.message().ends_with(&format!("{ORIGINAL_ERROR}connection reset")));
}

#[test]
fn test_cte_advisory_names_target() {
    let query = composed(&["positive_x"], Some("final"));
    let err = ErrorTranslator::new().translate_with_context(
        &DriverFailure::new("Parser Error: syntax error at or near \"FRM\""),
        &KnownNames::default(),
        Some(&query),
    );

    assert_eq!(err.error_type(), "SyntaxError");
    assert!(err.message().contains("`%sqlcmd snippets final`"));
    assert!(err.message().contains("--with"));
    let advisory_at = err.message().find("If using snippets").unwrap();
    let original_at = err.message().find("Original error message").unwrap();
    assert!(advisory_at < original_at);
}

#[test]
fn test_no_advisory_without_dependencies() {
    let query = composed(&[], None);
    let err = ErrorTranslator::new().translate_with_context(
        &DriverFailure::new("syntax error"),
        &KnownNames::default(),
        Some(&query),
    );
    assert!(!err.message().contains("If using snippets"));
}

#[test]
fn test_advisory_lists_unverified_snippets() {
    let mut query = composed(&["bad"], None);
    query.unverified = vec![name("bad")];
    let err = ErrorTranslator::new().translate_with_context(
        &DriverFailure::new("Catalog Error: Scalar Function with name frm does not exist!"),
        &KnownNames::default(),
        Some(&query),
    );
    assert_eq!(err.error_type(), "RuntimeError");
    assert!(err.message().contains("<name>"));
    assert!(err
        .message()
        .contains("Snippets saved without execution: 'bad'"));
}

#[test]
fn test_custom_suggestion_settings() {
    let known = KnownNames::default().with_snippets(["abcd", "abce", "abcf"]);
    let err = ErrorTranslator::new()
        .with_suggestions(0.6, 1)
        .translate(&DriverFailure::new("no such table: abcx"), &known);
    assert!(err.message().contains("Did you mean: 'abcd'\n"));
}

/// Recognises a vendor error code the built-in classifiers do not know
struct VendorCodeClassifier;

impl ErrorClassifier for VendorCodeClassifier {
    fn classify(&self, failure: &DriverFailure) -> Option<Classification> {
        (failure.code.as_deref() == Some("ORA-00942")).then(|| Classification {
            kind: ErrorKind::TableNotFound,
            identifier: failure.message.split_whitespace().last().map(String::from),
        })
    }
}

#[test]
fn test_custom_classifier_replaces_default() {
    let translator = ErrorTranslator::new().with_classifier(Box::new(VendorCodeClassifier));
    let known = KnownNames::default().with_snippets(["orders_less"]);
    let failure = DriverFailure::new("table or view does not exist: orders_lesss")
        .with_code("ORA-00942");

    let err = translator.translate(&failure, &known);
    assert_eq!(err.kind(), ErrorKind::TableNotFound);
    assert!(err
        .message()
        .starts_with("There is no table with name 'orders_lesss'.\nDid you mean: 'orders_less'"));

    // Failures the custom classifier declines fall through to Unknown
    let other = translator.translate(&DriverFailure::new("no such table: x"), &known);
    assert_eq!(other.error_type(), "UnknownError");
}
