use debugflow::TokenKind::{self, *};
use debugflow::{tokenize, Token};
use rstest::rstest;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|token| token.kind).collect()
}

fn contents(input: &str) -> Vec<String> {
    tokenize(input).iter().map(|token| token.content.clone()).collect()
}

#[rstest]
#[case("5", Integer)]
#[case("-17", Integer)]
#[case("3.14", Float)]
#[case("-0.5", Float)]
#[case("deadBEEF", Hex)]
#[case("fade", Hex)]
#[case("true", Boolean)]
#[case("false", Boolean)]
#[case("null", Null)]
fn classifies_standalone_literals(#[case] input: &str, #[case] kind: TokenKind) {
    assert_eq!(tokenize(input), vec![Token::new(kind, input)]);
}

#[test]
fn digits_embedded_in_identifiers_stay_words() {
    assert_eq!(tokenize("item42"), vec![Token::new(Word, "item42")]);
}

#[rstest]
#[case("1.2.3", vec![Word, Punctuation, Word, Punctuation, Word])]
#[case("truex", vec![Word])]
#[case("nullable", vec![Word])]
#[case("x=5", vec![Word, Punctuation, Integer])]
#[case("true,", vec![Boolean, Comma])]
#[case("a;b", vec![Word, Comma, Word])]
#[case("a-5", vec![Word, Punctuation, Hex])]
#[case("0xff", vec![Word])]
fn respects_literal_boundaries(#[case] input: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(input), expected);
}

#[test]
fn dotted_versions_split_into_words_and_punctuation() {
    assert_eq!(contents("1.2.3"), vec!["1", ".", "2", ".", "3"]);
}

#[test]
fn escaped_quote_does_not_terminate_string() {
    let tokens = tokenize(r#""he said \"hi\"""#);

    assert_eq!(kinds(r#""he said \"hi\"""#), vec![Quote, StringContent, Quote]);
    assert_eq!(tokens[1].content, r#"he said \"hi\""#);
}

#[test]
fn escaped_backslash_before_quote_still_terminates() {
    let tokens = tokenize(r#""a\\""#);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Token::new(StringContent, r"a\\"));
    assert_eq!(tokens[2], Token::new(Quote, "\""));
}

#[test]
fn single_quoted_string_ignores_inner_double_quotes() {
    let tokens = tokenize(r#"'say "hi"'"#);

    assert_eq!(kinds(r#"'say "hi"'"#), vec![Quote, StringContent, Quote]);
    assert_eq!(tokens[1].content, r#"say "hi""#);
}

#[test]
fn unterminated_string_consumes_to_end_of_input() {
    assert_eq!(
        tokenize("\"abc"),
        vec![Token::new(Quote, "\""), Token::new(StringContent, "abc")]
    );
}

#[test]
fn empty_string_produces_no_content_token() {
    assert_eq!(kinds("\"\""), vec![Quote, Quote]);
}

#[rstest]
#[case("literal{a,b[}", "a,b[")]
#[case("keybind{key.jump}", "key.jump")]
#[case("pattern{x*}", "x*")]
fn wrapped_string_spans_treat_interior_as_content(#[case] input: &str, #[case] interior: &str) {
    let tokens = tokenize(input);

    assert_eq!(
        kinds(input),
        vec![Word, OpeningBracket, StringContent, ClosingBracket]
    );
    assert_eq!(tokens[2].content, interior);
}

#[test]
fn wrapped_string_keyword_requires_word_boundary() {
    // Keyword preceded by a word char is ordinary text, so the braced span
    // tokenizes normally instead of as string content.
    assert_eq!(
        kinds("xliteral{q}"),
        vec![Word, OpeningBracket, Word, ClosingBracket]
    );
}

#[test]
fn wrapped_string_keyword_without_brace_is_a_word() {
    assert_eq!(kinds("literal,"), vec![Word, Comma]);
}

#[test]
fn empty_wrapped_string_span() {
    assert_eq!(kinds("literal{}"), vec![Word, OpeningBracket, ClosingBracket]);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[rstest]
#[case(r#"Item { id: 42, tags: ["a", "b"] }"#)]
#[case("literal{a,b[}x=-3.5,y=(),z=[null]")]
#[case(r#""unterminated ["#)]
#[case("héllo=1,ünïcode={}")]
fn concatenated_token_contents_reproduce_input(#[case] input: &str) {
    let joined: String = tokenize(input).iter().map(|token| token.content.as_str()).collect();

    assert_eq!(joined, input);
}
