use std::fs;
use std::ops::Range;

use cssnest_parser::cursor::clean_delimiters;
use cssnest_parser::node::{Node, NodeType};
use cssnest_parser::parser_config::ParserConfig;
use cssnest_parser::testing::{tokenize, tokenize_source};
use cssnest_parser::token::{tokens_from_json, Token, TokenType};
use cssnest_parser::walker::Walker;
use cssnest_parser::{parse, parse_with_config};
use cssnest_shared::errors::ErrorKind;
use cssnest_shared::source::SourceRef;
use test_case::test_case;

/// Checks that the nodes cover `range` in order, without overlap, leaving only delimiters out.
/// Blocks are checked recursively against the tokens between their braces.
fn assert_coverage(tokens: &[Token], nodes: &[Node], range: Range<usize>) {
    let mut cursor = range.start;

    for node in nodes {
        assert!(node.span.start >= cursor, "overlapping node {:?}", node);
        assert!(
            tokens[cursor..node.span.start].iter().all(Token::is_delimiter),
            "tokens dropped between {} and {}",
            cursor,
            node.span.start
        );

        if let NodeType::Block { content, .. } = &node.node_type {
            let span = &tokens[node.span.start..node.span.end];
            let open = span
                .iter()
                .position(Token::is_brace_open)
                .unwrap();
            assert!(span.last().unwrap().is_brace_close());

            assert_coverage(
                tokens,
                content,
                node.span.start + open + 1..node.span.end - 1,
            );
        }

        cursor = node.span.end;
    }

    assert!(cursor <= range.end);
    assert!(tokens[cursor..range.end].iter().all(Token::is_delimiter));
}

fn max_depth(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::depth).max().unwrap_or(0)
}

#[test_case(".a { color: red; }" ; "single rule")]
#[test_case("@media (min-width: 10px) { .a { color: red; } } " ; "media query")]
#[test_case("@import url(\"x.css\");" ; "bare at-rule")]
#[test_case("a: b; c: d e f; " ; "statements")]
#[test_case(".a { } .b { x: y; } .c { .d { .e { } } }" ; "siblings and nesting")]
#[test_case("  " ; "only whitespace")]
fn nodes_cover_all_tokens(input: &str) {
    let tokens = tokenize(input);
    let ast = parse(&tokens).unwrap();

    assert_coverage(&tokens, &ast, 0..tokens.len());
}

#[test_case("a: b;", 0 ; "flat")]
#[test_case(".a { }", 1 ; "one level")]
#[test_case("@media print { .a { b: c; } }", 2 ; "two levels")]
#[test_case(".a { .b { .c { .d { .e { } } } } }", 5 ; "five levels")]
fn nesting_depth_is_preserved(input: &str, depth: usize) {
    let tokens = tokenize(input);
    let ast = parse(&tokens).unwrap();

    assert_eq!(max_depth(&ast), depth);
}

#[test]
fn selectors_are_split_on_commas() {
    let tokens = tokenize(".a, .b > .c { }");
    let ast = parse(&tokens).unwrap();

    assert_eq!(
        ast[0].selectors(),
        Some(&[".a".to_string(), ".b > .c".to_string()][..])
    );
}

#[test]
fn at_rule_with_body() {
    let tokens = tokenize("@media (min-width: 10px) { .a { color: red; } }");
    let ast = parse(&tokens).unwrap();

    assert_eq!(ast.len(), 1);
    assert_eq!(ast[0].kind(), Some("media"));
    assert_eq!(ast[0].selectors(), None);

    let rule = &ast[0].content()[0];
    assert_eq!(rule.selectors(), Some(&[".a".to_string()][..]));

    let NodeType::Statement {
        property,
        value_tokens,
    } = &rule.content()[0].node_type
    else {
        panic!("expected a statement, got {:?}", rule.content()[0]);
    };
    assert_eq!(property, "color");
    assert_eq!(value_tokens.len(), 1);
    assert_eq!(value_tokens[0].source, "red");
    assert_eq!(value_tokens[0].token_type, TokenType::Word);
}

#[test]
fn bare_at_rule_keeps_its_tokens() {
    let input = "@import url(\"x.css\");";
    let tokens = tokenize(input);
    let ast = parse(&tokens).unwrap();

    assert_eq!(ast.len(), 1);
    let NodeType::At { child_tokens } = &ast[0].node_type else {
        panic!("expected an at-rule, got {:?}", ast[0]);
    };

    let mut expected = tokens.clone();
    clean_delimiters(&mut expected);
    assert_eq!(child_tokens, &expected);

    let joined: String = child_tokens.iter().map(|t| t.source.as_str()).collect();
    assert_eq!(joined, input.replace(' ', ""));
}

#[test_case("}", "}" ; "stray brace close")]
#[test_case("@ media;", "@" ; "marker without name")]
#[test_case("a: b;}", "}" ; "brace close after statement")]
fn unknown_tokens_fail_the_parse(input: &str, token: &str) {
    let tokens = tokenize(input);
    let err = parse(&tokens).unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnknownToken);
    assert_eq!(err.token, token);
}

#[test]
fn unmatched_brace() {
    let tokens = tokenize(".a { color: red;");
    let err = parse(&tokens).unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnmatchedBrace);
    assert_eq!(err.index, 15);
}

#[test]
fn errors_in_nested_blocks_abort_everything() {
    let tokens = tokenize(".a { } .b { .c { x } } .d { }");
    let err = parse(&tokens).unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.index, 18);
}

#[test]
fn error_message_payload() {
    let tokens = tokenize("body { color: red; }}");
    let err = parse(&tokens).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Parse error, unknown token\nAt 20\n\"body { color: red; }>>}<<\""
    );
}

#[test]
fn delimiter_cleanup_is_idempotent() {
    let mut tokens = tokenize(" a :  b ; { } ");
    clean_delimiters(&mut tokens);
    let once = tokens.clone();
    clean_delimiters(&mut tokens);

    assert_eq!(tokens, once);
}

#[test]
fn input_is_not_modified() {
    let tokens = tokenize("@media print { .a { b: c; } } d: e;");
    let before = tokens.clone();

    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();

    assert_eq!(tokens, before);
    assert_eq!(first, second);
}

#[test]
fn parses_in_parallel() {
    let tokens = tokenize(".a { b: c; } .d { .e { f: g; } }");
    let expected = parse(&tokens).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| parse(&tokens))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn deep_nesting_is_refused() {
    let input = format!("{}{}", ".a { ".repeat(1000), "} ".repeat(1000));
    let tokens = tokenize(&input);

    let err = parse(&tokens).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingTooDeep);

    let config = ParserConfig {
        max_nesting_depth: 2000,
        ..Default::default()
    };
    let input = format!("{}{}", ".a { ".repeat(100), "} ".repeat(100));
    let tokens = tokenize(&input);
    let ast = parse_with_config(&tokens, &config).unwrap();
    assert_eq!(max_depth(&ast), 100);
}

#[test]
fn external_tokens() {
    let css = fs::read_to_string("tests/data/cssnest/import.css").unwrap();
    let json = fs::read_to_string("tests/data/cssnest/import.tokens.json").unwrap();
    let source = SourceRef::with_name("import.css", css);

    let tokens = tokens_from_json(&json, &source).unwrap();
    assert_eq!(tokens[0].token_type, TokenType::Other("period".into()));

    let ast = parse(&tokens).unwrap();
    assert_eq!(
        Walker::new(&ast).walk_to_string(),
        "[Block] selectors: .a\n  [Statement] property: color value: red\n[At] @import url(a.css);\n"
    );
    assert_coverage(&tokens, &ast, 0..tokens.len());
}

#[test]
fn nested_fixture() {
    let css = fs::read_to_string("tests/data/cssnest/nested.css").unwrap();
    let tokens = tokenize_source(&SourceRef::with_name("nested.css", css));
    let ast = parse(&tokens).unwrap();

    assert_eq!(
        Walker::new(&ast).walk_to_string(),
        "[Block] kind: media\n  [Block] selectors: .a, .b > .c\n    [Statement] property: color value: red\n    [Statement] property: margin value: 0 auto\n  [Block] kind: supports\n    [Block] selectors: .d\n      [Statement] property: display value: grid\n"
    );
    assert_coverage(&tokens, &ast, 0..tokens.len());
}

#[test]
fn at_rule_after_delimiter_reads_as_statement() {
    let tokens = tokenize("@media print { a { b: c; } } @import x;");
    let ast = parse(&tokens).unwrap();

    assert_eq!(ast.len(), 2);
    let NodeType::Statement { property, .. } = &ast[1].node_type else {
        panic!("expected a statement, got {:?}", ast[1]);
    };
    assert_eq!(property, "@");
}

#[test]
fn ast_as_json() {
    let tokens = tokenize("@media print { a { b: c; } }");
    let ast = parse(&tokens).unwrap();
    let json = serde_json::to_value(&ast).unwrap();

    assert_eq!(json[0]["type"], "block");
    assert_eq!(json[0]["kind"], "media");
    assert_eq!(json[0]["content"][0]["selectors"][0], "a");
    assert_eq!(json[0]["content"][0]["content"][0]["type"], "statement");
    assert_eq!(json[0]["content"][0]["content"][0]["property"], "b");
    assert_eq!(
        json[0]["content"][0]["content"][0]["valueTokens"][0]["source"],
        "c"
    );
}
