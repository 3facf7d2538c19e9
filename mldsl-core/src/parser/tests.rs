use super::prelude::*;
use crate::builtin::prelude::BuiltinCategory;

fn parse(src: &str) -> Program {
    parse_program(src).expect("program should parse")
}

fn parse_err(src: &str) -> ParseErrorType {
    parse_program(src).expect_err("program should not parse").error
}

#[test]
fn test_assignment_statement() {
    let program = parse("x = 1 + 2;");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "x = 1 + 2;");
}

#[test]
fn test_assignment_requires_semicolon() {
    assert_eq!(parse_err("x = 1"), ParseErrorType::MissingSemicolon);
}

#[test]
fn test_expression_statement() {
    let program = parse("print(x);");

    match &program.statements[0] {
        Statement::Expression { expression: Expression::Call(call), .. } => {
            assert_eq!(
                call.target,
                CallTarget::Builtin { category: BuiltinCategory::Io, keyword: "print" }
            );
        },
        other => panic!("expected an expression statement, got {other:?}")
    }
}

#[test]
fn test_additive_and_multiplicative_precedence() {
    let program = parse("x = 2 + 3 * 4;");

    match &program.statements[0] {
        Statement::Assignment(assignment) => {
            assert_eq!(assignment.value.to_string(), "2 + 3 * 4");

            // the addition is at the top of the tree
            match &assignment.value {
                Expression::Infix(infix) => {
                    assert_eq!(infix.operator, BinOp::Add);
                    assert_eq!(infix.right.to_string(), "3 * 4");
                },
                other => panic!("expected an infix expression, got {other:?}")
            }
        },
        other => panic!("expected an assignment, got {other:?}")
    }
}

#[test]
fn test_power_chains_group_left() {
    let program = parse("x = 2 ^ 3 ^ 2;");

    match &program.statements[0] {
        Statement::Assignment(assignment) => match &assignment.value {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, BinOp::Pow);
                assert_eq!(infix.left.to_string(), "2 ^ 3");
                assert_eq!(infix.right.to_string(), "2");
            },
            other => panic!("expected an infix expression, got {other:?}")
        },
        other => panic!("expected an assignment, got {other:?}")
    }
}

#[test]
fn test_unary_minus_binds_a_base() {
    let program = parse("x = -2 ^ 2;");

    match &program.statements[0] {
        Statement::Assignment(assignment) => match &assignment.value {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, BinOp::Pow);
                assert!(matches!(*infix.left, Expression::Negate { .. }));
            },
            other => panic!("expected an infix expression, got {other:?}")
        },
        other => panic!("expected an assignment, got {other:?}")
    }
}

#[test]
fn test_conditional_with_else() {
    let program = parse("if (x > 0) { y = 1; } else { y = 2; }");

    match &program.statements[0] {
        Statement::Conditional(conditional) => {
            assert_eq!(conditional.condition.to_string(), "x > 0");
            assert_eq!(conditional.consequence.len(), 1);
            assert_eq!(conditional.alternative.as_ref().map(Vec::len), Some(1));
        },
        other => panic!("expected a conditional, got {other:?}")
    }
}

#[test]
fn test_for_loop_header() {
    let program = parse("for (i = 0; i < 3; i = i + 1) { print(i); }");

    match &program.statements[0] {
        Statement::For(loop_) => {
            assert_eq!(loop_.init.to_string(), "i = 0");
            assert_eq!(loop_.condition.to_string(), "i < 3");
            assert_eq!(loop_.update.to_string(), "i = i + 1");
            assert_eq!(loop_.body.len(), 1);
        },
        other => panic!("expected a for loop, got {other:?}")
    }
}

#[test]
fn test_while_loop() {
    let program = parse("while (x != 0) { x = x - 1; }");

    assert!(matches!(program.statements[0], Statement::While(_)));
}

#[test]
fn test_bare_condition() {
    let program = parse("while (x) { x = x - 1; }");

    match &program.statements[0] {
        Statement::While(loop_) => assert!(loop_.condition.rel.is_none()),
        other => panic!("expected a while loop, got {other:?}")
    }
}

#[test]
fn test_function_def() {
    let program = parse("def double(x) { return x * 2; }");

    match &program.statements[0] {
        Statement::FunctionDef(def) => {
            assert_eq!(def.name.value, "double");
            assert_eq!(def.params, vec!["x".to_string()]);
            assert!(def.body.is_empty());
            assert_eq!(def.return_expr.to_string(), "x * 2");
        },
        other => panic!("expected a function definition, got {other:?}")
    }
}

#[test]
fn test_function_def_requires_trailing_return() {
    assert_eq!(
        parse_err("def f(x) { y = x; }"),
        ParseErrorType::ExpectedReturn
    );
}

#[test]
fn test_builtin_names_cannot_be_redefined() {
    assert_eq!(parse_err("def print(x) { return x; }"), ParseErrorType::ExpectedIdent);
    assert_eq!(parse_err("kmeans = 1;"), ParseErrorType::ExpectedIdent);
}

#[test]
fn test_builtin_arity_is_checked_at_parse_time() {
    assert_eq!(
        parse_err("m = kmeans(data);"),
        ParseErrorType::WrongBuiltinArity { keyword: "kmeans", expected: 2, got: 1 }
    );
    assert_eq!(
        parse_err("t = transpose(a, b);"),
        ParseErrorType::WrongBuiltinArity { keyword: "transpose", expected: 1, got: 2 }
    );
}

#[test]
fn test_file_paths_must_be_string_literals() {
    assert_eq!(parse_err("d = read_file(path);"), ParseErrorType::ExpectedString);
    assert_eq!(parse_err("write_file(name, d);"), ParseErrorType::ExpectedString);

    let program = parse(r#"d = read_file("data.csv");"#);
    assert_eq!(program.statements[0].to_string(), r#"d = read_file("data.csv");"#);
}

#[test]
fn test_list_rows_keep_their_form() {
    let program = parse("m = [[1, 2], [3, 4]];");

    match &program.statements[0] {
        Statement::Assignment(assignment) => match &assignment.value {
            Expression::List(list) => {
                assert_eq!(list.rows.len(), 2);
                assert!(list.rows.iter().all(|row| matches!(row, Row::Bracketed(_))));
            },
            other => panic!("expected a list literal, got {other:?}")
        },
        other => panic!("expected an assignment, got {other:?}")
    }

    let program = parse("l = [1, 2, [3, 4]];");

    match &program.statements[0] {
        Statement::Assignment(assignment) => match &assignment.value {
            Expression::List(list) => {
                assert!(matches!(list.rows[0], Row::Bare(_)));
                assert!(matches!(list.rows[2], Row::Bracketed(_)));
            },
            other => panic!("expected a list literal, got {other:?}")
        },
        other => panic!("expected an assignment, got {other:?}")
    }
}

#[test]
fn test_user_call_versus_identifier() {
    let program = parse("y = f(x) + f;");

    match &program.statements[0] {
        Statement::Assignment(assignment) => match &assignment.value {
            Expression::Infix(infix) => {
                assert!(matches!(*infix.left, Expression::Call(_)));
                assert!(matches!(*infix.right, Expression::Identifier(_)));
            },
            other => panic!("expected an infix expression, got {other:?}")
        },
        other => panic!("expected an assignment, got {other:?}")
    }
}

#[test]
fn test_lex_errors_surface_as_parse_errors() {
    assert!(matches!(parse_err("x = 3.;"), ParseErrorType::LexError { .. }));
}

#[test]
fn test_unexpected_eof() {
    assert_eq!(parse_err("x ="), ParseErrorType::UnexpectedEof);
    assert_eq!(parse_err("if (x > 0) {"), ParseErrorType::UnexpectedEof);
}

#[test]
fn test_parse_from_stream_matches_parse() {
    let src = "x = 1 + 2; print(x);";

    let from_str = parse_program(src).expect("string parse");
    let from_stream = parse_program_from_stream(src.chars()).expect("stream parse");

    assert_eq!(from_str, from_stream);
}
