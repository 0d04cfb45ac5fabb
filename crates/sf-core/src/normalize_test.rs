use super::*;

#[test]
fn test_trailing_semicolon_and_blank_lines_removed() {
    assert_eq!(
        normalize("SELECT * FROM number_table WHERE x > 0;\n\n\n"),
        "SELECT * FROM number_table WHERE x > 0"
    );
}

#[test]
fn test_comment_after_terminator() {
    assert_eq!(
        normalize("SELECT * FROM number_table WHERE x > 0;\n--some comment\n\n"),
        "SELECT * FROM number_table WHERE x > 0"
    );
}

#[test]
fn test_inline_comment_after_terminator() {
    assert_eq!(
        normalize("SELECT * FROM number_table\nWHERE x > 0; --some comment\n"),
        "SELECT * FROM number_table\nWHERE x > 0"
    );
}

#[test]
fn test_block_comment_leaves_its_newline() {
    assert_eq!(
        normalize("/* select all\nnumbers */\nSELECT * FROM number_table WHERE x > 0;\n--some comment\n\n"),
        "\nSELECT * FROM number_table WHERE x > 0"
    );
}

#[test]
fn test_full_line_comments_leave_blank_lines() {
    let raw = "--select all rows\nSELECT * FROM number_table\n--if x > 0\nWHERE x > 0;\n--final comment\n\n";
    assert_eq!(normalize(raw), "\nSELECT * FROM number_table\n\nWHERE x > 0");
}

#[test]
fn test_block_and_line_comments_together() {
    let raw = "/* select all\nrows*/\nSELECT * FROM number_table\n--if x > 0\nWHERE x > 0;\n--final comment\n\n";
    assert_eq!(normalize(raw), "\nSELECT * FROM number_table\n\nWHERE x > 0");
}

#[test]
fn test_block_comment_mid_line() {
    assert_eq!(
        normalize("SELECT a, /* the b column */ b FROM t"),
        "SELECT a,  b FROM t"
    );
}

#[test]
fn test_internal_terminators_preserved() {
    assert_eq!(
        normalize("CREATE TABLE t (x int);\nINSERT INTO t VALUES (1);\n"),
        "CREATE TABLE t (x int);\nINSERT INTO t VALUES (1)"
    );
}

#[test]
fn test_comment_markers_in_literals_untouched() {
    let raw = "SELECT '-- keep me', '/* and me */' FROM t;";
    assert_eq!(normalize(raw), "SELECT '-- keep me', '/* and me */' FROM t");
}

#[test]
fn test_comment_markers_in_quoted_identifier_untouched() {
    let raw = r#"SELECT "odd--name" FROM t"#;
    assert_eq!(normalize(raw), raw);
}

#[test]
fn test_internal_whitespace_preserved() {
    let raw = "\n        SELECT o.order_id\n        FROM another_orders o;\n        ";
    assert_eq!(
        normalize(raw),
        "\n        SELECT o.order_id\n        FROM another_orders o"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "SELECT 1;",
        "SELECT 1;;\n ;",
        "/* a */\nSELECT 1 -- b\n;\n",
        "--only a comment",
        "SELECT ';' AS semi;",
        "SELECT x/*c*/FROM t",
        "SELECT 1 -/* c */-1 AS v",
        "",
    ];
    for raw in inputs {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn test_comment_only_body_is_empty() {
    assert_eq!(normalize("-- nothing here\n/* at all */\n"), "");
}

#[test]
fn test_semicolon_inside_literal_at_end_kept() {
    assert_eq!(normalize("SELECT ';'"), "SELECT ';'");
}

#[test]
fn test_strip_comments_keeps_terminator() {
    assert_eq!(strip_comments("SELECT 1; -- done"), "SELECT 1; ");
}

#[test]
fn test_wedged_block_comment_keeps_tokens_apart() {
    assert_eq!(normalize("SELECT x/*c*/FROM t"), "SELECT x FROM t");
    assert_eq!(normalize("SELECT x/*a*//*b*/FROM t"), "SELECT x FROM t");
}

#[test]
fn test_wedged_block_comment_does_not_start_line_comment() {
    assert_eq!(normalize("SELECT 1 -/* c */-1 AS v"), "SELECT 1 - -1 AS v");
}

#[test]
fn test_block_comment_next_to_newline_adds_no_space() {
    assert_eq!(normalize("SELECT x/* c */\nFROM t"), "SELECT x\nFROM t");
    assert_eq!(normalize("/* head */SELECT 1"), "SELECT 1");
}
