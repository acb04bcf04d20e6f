//! Unit tests for comment-block formatting.

use rstest::rstest;

use super::{
    CommentInsertion, CommentStyle, build_insertion, compute_indentation, format_comment_body,
    format_header,
};

#[rstest]
#[case::no_indent("def f(x):\n    return x", "")]
#[case::spaces("    def f(x):", "    ")]
#[case::tabs("\t\tfn main() {}", "\t\t")]
#[case::mixed(" \t let x = 1;", " \t ")]
#[case::empty("", "")]
#[case::whitespace_only("   ", "   ")]
#[case::leading_blank_line("\n    def f(x):", "\n    ")]
#[case::byte_order_mark("\u{feff}def f(x):", "")]
#[case::next_line("\u{85}def f(x):", "\u{85}")]
#[case::ideographic_space("\u{3000}def f(x):", "\u{3000}")]
fn compute_indentation_returns_leading_whitespace(#[case] selected: &str, #[case] expected: &str) {
    assert_eq!(compute_indentation(selected), expected);
}

#[rstest]
#[case("    def f(x):\n        return x")]
#[case("\t x")]
#[case("plain")]
#[case("")]
#[case("  \u{a0}unicode space")]
fn indentation_is_whitespace_prefix_and_trim_is_idempotent(#[case] selected: &str) {
    let indentation = compute_indentation(selected);
    let remainder = selected.strip_prefix(indentation);

    assert!(
        indentation.chars().all(char::is_whitespace),
        "indentation {indentation:?} should be whitespace only"
    );
    assert_eq!(
        remainder.map(str::trim_start),
        remainder,
        "remainder of {selected:?} should have no leading whitespace"
    );
}

#[test]
fn body_for_single_line_without_indentation() {
    assert_eq!(format_comment_body("Computes x.", "", "# "), "# Computes x.\n");
}

#[test]
fn body_prefixes_every_line_with_indentation() {
    assert_eq!(
        format_comment_body("Line one\nLine two", "    ", "# "),
        "    # Line one\n    # Line two\n"
    );
}

#[test]
fn body_for_empty_explanation_is_one_empty_comment_line() {
    assert_eq!(format_comment_body("", "", "# "), "# \n");
    assert_eq!(format_comment_body("", "  ", "# "), "  # \n");
}

#[test]
fn body_prefixes_empty_trailing_line() {
    assert_eq!(format_comment_body("Done.\n", "", "# "), "# Done.\n# \n");
}

#[test]
fn body_does_not_double_newline_when_marker_is_empty() {
    assert_eq!(format_comment_body("a\n", "", ""), "a\n");
}

#[rstest]
#[case("Computes x.", "")]
#[case("one\ntwo\nthree", "  ")]
#[case("", "\t")]
#[case("trailing\n", "    ")]
#[case("\n\nblank lead", " ")]
fn body_lines_share_prefix_and_count(#[case] explanation: &str, #[case] indentation: &str) {
    let marker = "# ";
    let body = format_comment_body(explanation, indentation, marker);
    let prefix = format!("{indentation}{marker}");

    assert!(body.ends_with('\n'), "body {body:?} should end with newline");

    let lines: Vec<&str> = body
        .strip_suffix('\n')
        .unwrap_or(body.as_str())
        .split('\n')
        .collect();
    assert_eq!(lines.len(), explanation.split('\n').count());
    assert!(
        lines.iter().all(|line| line.starts_with(prefix.as_str())),
        "every line of {body:?} should start with {prefix:?}"
    );
}

#[test]
fn header_is_single_newline_terminated_line() {
    assert_eq!(
        format_header("  ", "# ", "Recommended name: (generated)"),
        "  # Recommended name: (generated)\n"
    );
}

#[test]
fn build_insertion_uses_default_marker_and_label() {
    let insertion = build_insertion("def f(x):\n    return x", "Computes x.");

    assert_eq!(
        insertion,
        CommentInsertion {
            header: "# Recommended name: (generated)\n".to_owned(),
            body: "# Computes x.\n".to_owned(),
        }
    );
    assert_eq!(
        insertion.to_text(),
        "# Recommended name: (generated)\n# Computes x.\n"
    );
}

#[test]
fn build_insertion_copies_selection_indentation() {
    let insertion = build_insertion("    def f(x):", "Line one\nLine two");

    assert_eq!(insertion.header, "    # Recommended name: (generated)\n");
    assert_eq!(insertion.body, "    # Line one\n    # Line two\n");
}

#[test]
fn custom_style_overrides_marker_and_label() {
    let style = CommentStyle::new("// ", "Suggested name");
    let insertion = style.build_insertion("  fn f() {}", "Use `double`.");

    assert_eq!(insertion.header, "  // Suggested name\n");
    assert_eq!(insertion.body, "  // Use `double`.\n");
}
