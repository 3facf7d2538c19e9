use super::prelude::{Lexer, LexicalErrorType, Token};

fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let mut tokens = vec![];

    loop {
        let (_, token, _) = lexer.next_token().expect("unexpected lexical error");

        if token == Token::Eof {
            break;
        }

        tokens.push(token);
    }

    tokens
}

fn lex_error(input: &str) -> LexicalErrorType {
    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    loop {
        match lexer.next_token() {
            Ok((_, Token::Eof, _)) => panic!("expected a lexical error"),
            Ok(_) => continue,
            Err(err) => return err.error
        }
    }
}

#[test]
fn test_numbers() {
    assert_eq!(
        lex("10 3.14 0 007"),
        vec![
            Token::Number(10),
            Token::Float(3.14),
            Token::Number(0),
            Token::Number(7),
        ]
    );
}

#[test]
fn test_number_missing_digit_after_period() {
    assert_eq!(lex_error("3."), LexicalErrorType::MissingDigitAfterPeriod);
    assert_eq!(lex_error("x = 10.;"), LexicalErrorType::MissingDigitAfterPeriod);
}

#[test]
fn test_number_too_large() {
    assert_eq!(
        lex_error("99999999999999999999"),
        LexicalErrorType::NumberTooLarge
    );
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        lex("if ifx for forty def print printer _tmp x1"),
        vec![
            Token::If,
            Token::Ident("ifx".into()),
            Token::For,
            Token::Ident("forty".into()),
            Token::Def,
            Token::Print,
            Token::Ident("printer".into()),
            Token::Ident("_tmp".into()),
            Token::Ident("x1".into()),
        ]
    );
}

#[test]
fn test_builtin_keywords() {
    assert_eq!(
        lex("linear_regression kmeans read_file scatter transpose sqrt"),
        vec![
            Token::LinearRegression,
            Token::Kmeans,
            Token::ReadFile,
            Token::Scatter,
            Token::Transpose,
            Token::Sqrt,
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        lex("= == != < <= > >= + - * / % ^"),
        vec![
            Token::Assign,
            Token::Equal,
            Token::NotEqual,
            Token::LessThan,
            Token::LessThanOrEqual,
            Token::GreaterThan,
            Token::GreaterThanOrEqual,
            Token::Plus,
            Token::Minus,
            Token::Mult,
            Token::Div,
            Token::Mod,
            Token::Caret,
        ]
    );
}

#[test]
fn test_strings() {
    assert_eq!(
        lex(r#"x = "data.csv";"#),
        vec![
            Token::Ident("x".into()),
            Token::Assign,
            Token::Str("data.csv".into()),
            Token::Semicolon,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(lex_error("\"oops"), LexicalErrorType::UnterminatedString);
    assert_eq!(lex_error("\"oops\nx\""), LexicalErrorType::UnterminatedString);
}

#[test]
fn test_comments_produce_no_tokens() {
    assert_eq!(
        lex("x = 1; // trailing comment\n// a full line\ny = 2;"),
        vec![
            Token::Ident("x".into()),
            Token::Assign,
            Token::Number(1),
            Token::Semicolon,
            Token::Ident("y".into()),
            Token::Assign,
            Token::Number(2),
            Token::Semicolon,
        ]
    );
}

#[test]
fn test_bang_alone_is_rejected() {
    assert_eq!(
        lex_error("x = !y;"),
        LexicalErrorType::UnrecognizedCharacter { ch: '!' }
    );
}

#[test]
fn test_spans() {
    let mut lexer = Lexer::new("ab = 12;".char_indices().map(|(i, c)| (i as u32, c)));

    assert_eq!(lexer.next_token(), Ok((0, Token::Ident("ab".into()), 2)));
    assert_eq!(lexer.next_token(), Ok((3, Token::Assign, 4)));
    assert_eq!(lexer.next_token(), Ok((5, Token::Number(12), 7)));
    assert_eq!(lexer.next_token(), Ok((7, Token::Semicolon, 8)));
}
