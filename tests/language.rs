use minicalc::{
    ast::{SyntaxKind, SyntaxNode},
    error::{Diagnostic, RuntimeError, Severity},
    evaluate,
    interpreter::{
        compilation::{Compilation, EvaluationResult},
        lexer::{Lexer, SyntaxToken, TokenKind},
        parser::{MAX_NESTING_DEPTH, SyntaxTree},
        value::Value,
    },
    util::span::TextSpan,
};

fn assert_value(src: &str, expected: impl Into<Value>) {
    match evaluate(src) {
        Ok(EvaluationResult::Value(v)) => {
            let expected: Value = expected.into();
            assert_eq!(v, expected, "wrong value for {src:?}");
        },
        Ok(EvaluationResult::Diagnostics(d)) => panic!("{src:?} produced diagnostics: {d:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn diagnostics_of(src: &str) -> Vec<Diagnostic> {
    match evaluate(src) {
        Ok(EvaluationResult::Diagnostics(d)) => d,
        other => panic!("{src:?} was expected to produce diagnostics, got {other:?}"),
    }
}

fn assert_diagnostics(src: &str, expected: &[&str]) {
    let messages: Vec<String> = diagnostics_of(src).into_iter().map(|d| d.message).collect();
    assert_eq!(messages, expected, "diagnostics for {src:?}");
}

fn assert_fatal(src: &str) -> RuntimeError {
    assert!(Compilation::new(src).diagnostics().is_empty(),
            "{src:?} should bind cleanly");
    match evaluate(src) {
        Err(e) => e,
        Ok(other) => panic!("{src:?} was expected to fail, got {other:?}"),
    }
}

#[test]
fn arithmetic_respects_precedence() {
    assert_value("1 + 2 * 3", 7);
    assert_value("(1 + 2) * 3", 9);
    assert_value("2 * (3 + 4) - 1", 13);
    assert_value("1 + 2 * 3 - 4 / 2", 5);
    assert_value("((((42))))", 42);
}

#[test]
fn arithmetic_is_left_associative() {
    assert_value("10 - 3 - 2", 5);
    assert_value("100 / 10 / 5", 2);
    assert_value("2 * 3 / 4", 1);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
}

#[test]
fn unary_operators() {
    assert_value("-5", -5);
    assert_value("+5", 5);
    assert_value("--5", 5);
    assert_value("-2 * 3", -6);
    assert_value("1 - -1", 2);
    assert_value("-(1 + 2)", -3);
    assert_value("!false", true);
    assert_value("!!true", true);
}

#[test]
fn boolean_logic() {
    assert_value("!true == false", true);
    assert_value("true && false", false);
    assert_value("true || false", true);
    assert_value("false || false", false);
    assert_value("true || false && false", true);
    assert_value("(true || false) && false", false);
    assert_value("!(true && false)", true);
}

#[test]
fn equality_on_both_types() {
    assert_value("1 == 1", true);
    assert_value("1 != 2", true);
    assert_value("1 + 2 == 3", true);
    assert_value("false == false", true);
    assert_value("true != true", false);
    assert_value("1 == 2 == false", true);
    assert_value("3 * 4 == 12 && 2 != 3", true);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1+2*3", 7);
    assert_value("  \t 1 +\n 2  ", 3);
}

#[test]
fn undefined_binary_operator_is_one_diagnostic() {
    let diagnostics = diagnostics_of("1 + true");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message,
               "binary operator '+' is not defined for types Integer and Boolean");
    assert_eq!(diagnostics[0].span, TextSpan::new(2, 1));
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn undefined_unary_operator_is_one_diagnostic() {
    assert_diagnostics("-true", &["unary operator '-' is not defined for type Boolean"]);
    assert_diagnostics("+false", &["unary operator '+' is not defined for type Boolean"]);
    assert_diagnostics("!1", &["unary operator '!' is not defined for type Integer"]);
}

#[test]
fn logical_operators_need_booleans() {
    assert_diagnostics("1 && 2",
                       &["binary operator '&&' is not defined for types Integer and Integer"]);
    assert_diagnostics("true == 1",
                       &["binary operator '==' is not defined for types Boolean and Integer"]);
}

#[test]
fn comparisons_parse_but_do_not_bind() {
    assert_diagnostics("1 < 2",
                       &["binary operator '<' is not defined for types Integer and Integer"]);
    assert_diagnostics("2 >= 1",
                       &["binary operator '>=' is not defined for types Integer and Integer"]);
}

#[test]
fn unresolved_binary_operator_keeps_only_left_operand() {
    // `1 + true` binds as `1`, so the outer `+ 2` is still well typed.
    assert_diagnostics("1 + true + 2",
                       &["binary operator '+' is not defined for types Integer and Boolean"]);

    // `true + 2` binds as `true`, so the outer `&&` is well typed too.
    assert_diagnostics("true + 2 && false",
                       &["binary operator '+' is not defined for types Boolean and Integer"]);

    let compilation = Compilation::new("true + 2 * 3");
    assert_eq!(compilation.bound_root().ty(),
               minicalc::interpreter::value::ValueType::Boolean);
}

#[test]
fn unresolved_unary_operator_keeps_operand() {
    // `-true` binds as `true`, which is then compared with `false`.
    assert_diagnostics("-true == false",
                       &["unary operator '-' is not defined for type Boolean"]);
}

#[test]
fn every_offending_node_is_reported() {
    // Both operands recover to their left side, leaving `1 * false` to fail too.
    assert_diagnostics("(1 + true) * (false - 2)",
                       &["binary operator '+' is not defined for types Integer and Boolean",
                         "binary operator '-' is not defined for types Boolean and Integer",
                         "binary operator '*' is not defined for types Integer and Boolean"]);
}

#[test]
fn missing_closing_parenthesis() {
    let diagnostics = diagnostics_of("(1 + 2");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected closing parenthesis");
    assert_eq!(diagnostics[0].span, TextSpan::new(6, 0));

    let tree = SyntaxTree::parse("(1 + 2");
    assert_eq!(tree.root().kind(), SyntaxKind::ParenthesizedExpression);
}

#[test]
fn trailing_tokens_are_unexpected() {
    let diagnostics = diagnostics_of("1 )");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message,
               "unexpected token <CloseParenthesis>, expected <EndOfFile>");
    assert_eq!(diagnostics[0].span, TextSpan::new(2, 1));
}

#[test]
fn missing_operand_is_unexpected() {
    assert_diagnostics("", &["unexpected token <EndOfFile>, expected <Number>"]);
    assert_diagnostics("1 +", &["unexpected token <EndOfFile>, expected <Number>"]);
    // The invented operand is followed by a normal `* 2`.
    assert_diagnostics("* 2", &["unexpected token <Star>, expected <Number>"]);
}

#[test]
fn parser_diagnostics_come_before_binder_diagnostics() {
    assert_diagnostics("(true + 1",
                       &["expected closing parenthesis",
                         "binary operator '+' is not defined for types Boolean and Integer"]);
}

#[test]
fn bad_characters_are_reported_and_skipped() {
    let diagnostics = diagnostics_of("1 $ 2");

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "bad character input: '$'");
    assert_eq!(diagnostics[0].span, TextSpan::new(2, 1));
    assert_eq!(diagnostics[1].message,
               "unexpected token <Number>, expected <EndOfFile>");
    assert_eq!(diagnostics[1].span, TextSpan::new(4, 1));

    // Skipping the bad character leaves a well-formed expression behind.
    assert_diagnostics("1 +$ 2", &["bad character input: '$'"]);
}

#[test]
fn out_of_range_number_is_diagnosed() {
    let diagnostics = diagnostics_of("99999999999999999999 + 1");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message,
               "the number 99999999999999999999 is not a valid Integer");
    assert_eq!(diagnostics[0].span, TextSpan::new(0, 20));

    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn identifiers_are_not_expressions() {
    assert_diagnostics("x",
                       &["unexpected token <Identifier>, expected <Number>",
                         "unexpected token <Identifier>, expected <EndOfFile>"]);
}

#[test]
fn division_by_zero_is_fatal() {
    let error = assert_fatal("1 / 0");
    assert_eq!(error,
               RuntimeError::DivisionByZero { span: TextSpan::new(2, 1) });

    assert!(matches!(assert_fatal("(2 - 2) / (1 - 1)"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert!(matches!(assert_fatal("false && 1 / 0 == 0"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_fatal("true || 1 / 0 == 0"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn integer_overflow_is_fatal() {
    assert!(matches!(assert_fatal("9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(assert_fatal("-9223372036854775807 - 2"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(assert_fatal("(-9223372036854775807 - 1) / -1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(assert_fatal("-(-9223372036854775807 - 1)"),
                     RuntimeError::Overflow { .. }));
    assert_value("-9223372036854775807 - 1", i64::MIN);
}

#[test]
fn parsing_is_total() {
    let inputs = [")", "(((", "+", "!", "&&", "1 +", "((1)", "1 2 3", "()", "true false", "1 = 2",
                  "(1 + ) * 3", "--", "$%^"];

    for input in inputs {
        let tree = SyntaxTree::parse(input);
        assert!(!tree.diagnostics().is_empty(), "{input:?} should be diagnosed");
        assert_eq!(tree.end_of_file_token().kind, TokenKind::EndOfFile);
        assert_eq!(tree.end_of_file_token().span,
                   TextSpan::new(input.len(), 0),
                   "{input:?} should be parsed to its real end");
        assert!(matches!(evaluate(input), Ok(EvaluationResult::Diagnostics(_))));
    }
}

#[test]
fn leftover_tokens_are_reported_once() {
    let tree = SyntaxTree::parse("1 2 3");

    assert_eq!(tree.diagnostics().len(), 1);
    assert_eq!(tree.diagnostics().as_slice()[0].span, TextSpan::new(2, 1));
    assert_eq!(tree.end_of_file_token().span, TextSpan::new(5, 0));
}

#[test]
fn deep_nesting_is_diagnosed() {
    let depth = 100_000;
    let unary = format!("{}1", "-".repeat(depth));
    let grouped = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let chained = format!("{}1", "1+".repeat(depth));

    for input in [&unary, &grouped, &chained] {
        let diagnostics = diagnostics_of(input);
        assert_eq!(diagnostics.len(), 1, "{:?}...", &input[..8]);
        assert_eq!(diagnostics[0].message, "expression nested too deeply");

        let tree = SyntaxTree::parse(input);
        assert_eq!(tree.end_of_file_token().span, TextSpan::new(input.len(), 0));
    }

    assert_eq!(diagnostics_of(&unary)[0].span, TextSpan::new(MAX_NESTING_DEPTH, 1));
    assert_eq!(diagnostics_of(&grouped)[0].span, TextSpan::new(MAX_NESTING_DEPTH, 1));
}

#[test]
fn nesting_below_the_limit_evaluates() {
    assert_value(&format!("{}1", "-".repeat(100)), 1);
    assert_value(&format!("{}7{}", "(".repeat(200), ")".repeat(200)), 7);
    assert_value(&format!("{}1", "1+".repeat(200)), 201);
}

#[test]
fn spans_count_leading_whitespace() {
    let diagnostics = diagnostics_of("  1 + true");

    assert_eq!(diagnostics[0].span, TextSpan::new(4, 1));
}

#[test]
fn cloned_lexer_resumes_from_the_same_position() {
    let mut lexer = Lexer::new("1 + (2 * 3) $ 4");
    lexer.by_ref().take(3).for_each(drop);

    let restarted = lexer.clone();
    let rest: Vec<SyntaxToken> = lexer.collect();
    let replayed: Vec<SyntaxToken> = restarted.collect();

    assert_eq!(rest, replayed);
    assert_eq!(rest.first().map(|t| t.kind), Some(TokenKind::Number));
    assert_eq!(rest.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
}

#[test]
fn parsing_is_deterministic() {
    for input in ["1 + 2 * 3", "(1 + true", "!x == $"] {
        assert_eq!(SyntaxTree::parse(input), SyntaxTree::parse(input));
        assert_eq!(SyntaxTree::parse_tokens(input), SyntaxTree::parse_tokens(input));
    }
}

#[test]
fn tree_shape_follows_precedence() {
    let tree = SyntaxTree::parse("1 + 2 * 3");
    let SyntaxNode::Binary { left,
                             operator_token,
                             right, } = tree.root()
    else {
        panic!("expected a binary root, got {:?}", tree.root());
    };

    assert_eq!(operator_token.kind, TokenKind::Plus);
    assert_eq!(left.kind(), SyntaxKind::LiteralExpression);
    assert_eq!(right.kind(), SyntaxKind::BinaryExpression);
    assert_eq!(tree.root().span(), TextSpan::new(0, 9));
}

#[test]
fn unary_binds_tighter_than_equality() {
    let tree = SyntaxTree::parse("!true == false");
    let SyntaxNode::Binary { left, .. } = tree.root() else {
        panic!("expected a binary root, got {:?}", tree.root());
    };

    assert_eq!(left.kind(), SyntaxKind::UnaryExpression);
}

#[test]
fn tokens_carry_span_text_and_value() {
    let tokens = SyntaxTree::parse_tokens("12 && (true)");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Number,
                TokenKind::AmpersandAmpersand,
                TokenKind::OpenParenthesis,
                TokenKind::TrueKeyword,
                TokenKind::CloseParenthesis,
                TokenKind::EndOfFile]);

    assert_eq!(tokens[0].value, Some(Value::Integer(12)));
    assert_eq!(tokens[0].span, TextSpan::new(0, 2));
    assert_eq!(tokens[1].text, "&&");
    assert_eq!(tokens[1].value, None);
    assert_eq!(tokens[3].value, Some(Value::Boolean(true)));
    assert_eq!(tokens[5].span, TextSpan::new(12, 0));
}

#[test]
fn operators_use_longest_match() {
    let kinds: Vec<TokenKind> = SyntaxTree::parse_tokens("!= ! == <= < >= > || &&").iter()
                                                                                   .map(|t| t.kind)
                                                                                   .collect();

    assert_eq!(kinds,
               [TokenKind::BangEquals,
                TokenKind::Bang,
                TokenKind::EqualsEquals,
                TokenKind::LessEquals,
                TokenKind::Less,
                TokenKind::GreaterEquals,
                TokenKind::Greater,
                TokenKind::PipePipe,
                TokenKind::AmpersandAmpersand,
                TokenKind::EndOfFile]);
}

#[test]
fn keywords_need_word_boundaries() {
    let kinds: Vec<TokenKind> = SyntaxTree::parse_tokens("true truest false_").iter()
                                                                            .map(|t| t.kind)
                                                                            .collect();

    assert_eq!(kinds,
               [TokenKind::TrueKeyword,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfFile]);
}

#[test]
fn diagnostics_render_with_severity_and_span() {
    let diagnostics = diagnostics_of("1 + true");

    assert_eq!(diagnostics[0].to_string(),
               "error at 2..3: binary operator '+' is not defined for types Integer and Boolean");
}

#[test]
fn values_render_as_source_literals() {
    assert_eq!(Value::Integer(-12).to_string(), "-12");
    assert_eq!(Value::Boolean(true).to_string(), "true");
}
