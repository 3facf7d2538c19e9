use crate::lexer::prelude::{LexicalError, Token};
use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedIdent,
    ExpectedString,
    ExpectedReturn,
    MissingSemicolon,
    WrongBuiltinArity {
        keyword: &'static str,
        expected: usize,
        got: usize
    },
    UnexpectedToken {
        token: Token,
        expected: Vec<String>
    },
    UnexpectedEof,
    LexError {
        error: LexicalError
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedIdent => {
                ("Expected an identifier".into(), vec![
                    "Keywords and built-in names cannot be used as variable or function names".into()
                ])
            },
            ParseErrorType::ExpectedString => {
                ("Expected a string literal".into(), vec![
                    "File paths must be written as quoted string literals".into()
                ])
            },
            ParseErrorType::ExpectedReturn => {
                ("Expected a `return` statement".into(), vec![
                    "Every function body must end with `return <expression>;`".into()
                ])
            },
            ParseErrorType::MissingSemicolon => {
                ("Missing `;`".into(), vec![])
            },
            ParseErrorType::WrongBuiltinArity { keyword, expected, got } => {
                (format!("`{keyword}` takes {expected} argument(s), but {got} were given"), vec![])
            },
            ParseErrorType::UnexpectedToken { token, expected } => {
                (format!("I was not expecting `{}`", token.as_literal()), vec![
                    format!("Expected one of: {}", expected.join(", "))
                ])
            },
            ParseErrorType::UnexpectedEof => {
                ("The program ended unexpectedly".into(), vec![])
            },
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
