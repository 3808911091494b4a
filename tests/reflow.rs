use debugflow::{reflow_to_string, reflow_to_styled_lines, tokenize, SegmentStyle};
use rstest::rstest;

fn line_texts(input: &str, indentation: isize, colored: bool, prefix: &str) -> Vec<String> {
    reflow_to_styled_lines(&tokenize(input), indentation, colored, prefix)
        .unwrap()
        .iter()
        .map(|line| line.text())
        .collect()
}

#[test]
fn splits_at_commas_and_brackets() {
    let tokens = tokenize("a=1,b={},c=[1,2,3]");
    let report = reflow_to_string(&tokens, 2, "").unwrap();

    assert_eq!(report, "a=1,\nb={},\nc=[\n  1,\n  2,\n  3\n]");
}

#[test]
fn styled_output_matches_string_output_line_by_line() {
    let input = "a=1,b={},c=[1,2,3]";
    let report = reflow_to_string(&tokenize(input), 2, "").unwrap();
    let expected: Vec<String> = report.lines().map(str::to_string).collect();

    assert_eq!(line_texts(input, 2, true, ""), expected);
}

#[rstest]
#[case("x={},y=[],z=()", "x={},\ny=[],\nz=()")]
#[case("{[]}", "{\n    []\n}")]
#[case("literal{}", "literal{}")]
fn empty_bracket_pairs_stay_inline(#[case] input: &str, #[case] expected: &str) {
    let report = reflow_to_string(&tokenize(input), 4, "").unwrap();

    assert_eq!(report, expected);
}

#[rstest]
#[case("[1,2)")]
#[case("a]")]
#[case("({x)}")]
fn mismatched_brackets_are_rejected(#[case] input: &str) {
    let tokens = tokenize(input);

    assert!(reflow_to_string(&tokens, 2, "").is_err());
    assert!(reflow_to_styled_lines(&tokens, 2, true, "").is_err());
}

#[test]
fn unclosed_brackets_are_rejected() {
    assert!(reflow_to_string(&tokenize("[1,2"), 2, "").is_err());
}

#[rstest]
#[case(0)]
#[case(-1)]
fn nonpositive_indentation_disables_reflow(#[case] indentation: isize) {
    let tokens = tokenize("a=[1,2]");

    let report = reflow_to_string(&tokens, indentation, "> ").unwrap();
    assert_eq!(report, "> a=[1,2]");

    let lines = reflow_to_styled_lines(&tokens, indentation, false, "> ").unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "> a=[1,2]");
}

#[test]
fn nonpositive_indentation_skips_bracket_validation() {
    assert_eq!(reflow_to_string(&tokenize("[1,2)"), 0, "").unwrap(), "[1,2)");
}

#[test]
fn line_prefix_opens_every_line() {
    let report = reflow_to_string(&tokenize("k=[1]"), 2, "> ").unwrap();

    assert_eq!(report, "> k=[\n>   1\n> ]");
}

#[test]
fn incidental_spacing_does_not_leak_onto_fresh_lines() {
    let report = reflow_to_string(&tokenize("a, b"), 2, "").unwrap();

    assert_eq!(report, "a,\nb");
}

#[test]
fn spacing_within_a_line_is_preserved() {
    let report = reflow_to_string(&tokenize("a = 1"), 2, "").unwrap();

    assert_eq!(report, "a = 1");
}

#[test]
fn wrapped_string_interior_is_transparent_to_bracket_tracking() {
    let report = reflow_to_string(&tokenize("pattern{a,b[}"), 2, "").unwrap();

    assert_eq!(report, "pattern{\n  a,b[\n}");
}

#[test]
fn colored_segments_follow_the_classification_table() {
    let tokens = tokenize("k=['s',7,true,null]");
    let lines = reflow_to_styled_lines(&tokens, 2, true, "").unwrap();

    let styles: Vec<(String, SegmentStyle)> = lines
        .iter()
        .flat_map(|line| line.segments.iter())
        .map(|segment| (segment.text.clone(), segment.style))
        .collect();

    assert!(styles.contains(&("k".to_string(), SegmentStyle::Name)));
    assert!(styles.contains(&("=".to_string(), SegmentStyle::Structural)));
    assert!(styles.contains(&("s".to_string(), SegmentStyle::String)));
    assert!(styles.contains(&("7".to_string(), SegmentStyle::Number)));
    assert!(styles.contains(&("true".to_string(), SegmentStyle::Number)));
    assert!(styles.contains(&("null".to_string(), SegmentStyle::Null)));
}

#[test]
fn monochrome_output_uses_a_single_neutral_style() {
    let tokens = tokenize("k=['s',7,true,null]");
    let lines = reflow_to_styled_lines(&tokens, 2, false, "").unwrap();

    assert!(lines
        .iter()
        .flat_map(|line| line.segments.iter())
        .all(|segment| segment.style == SegmentStyle::Plain));
}

#[test]
fn empty_token_sequence_produces_empty_output() {
    assert_eq!(reflow_to_string(&[], 2, "").unwrap(), "");
    assert!(reflow_to_styled_lines(&[], 2, true, "").unwrap().is_empty());
}

#[test]
fn opening_and_closing_breaks_balance_out() {
    let input = "a={b=[1,2],c=(d={}, e=[f])},g=2";
    let report = reflow_to_string(&tokenize(input), 2, "").unwrap();

    let opening_count = report.matches(['[', '(', '{']).count();
    let closing_count = report.matches([']', ')', '}']).count();
    assert_eq!(opening_count, closing_count);

    // Each closing bracket of a split pair starts its own line.
    for line in report.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with([']', ')', '}']) {
            assert!(trimmed.len() <= 2, "closing line should hold only the bracket: {line:?}");
        }
    }
}
