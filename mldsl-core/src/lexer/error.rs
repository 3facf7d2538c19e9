use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    MissingDigitAfterPeriod,
    UnterminatedString,
    NumberTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (String, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => {
                (format!("I don't know what to do with `{ch}`"), vec![])
            },
            LexicalErrorType::MissingDigitAfterPeriod => {
                ("Expected at least one digit after the decimal point".into(), vec![])
            },
            LexicalErrorType::UnterminatedString => {
                ("This string is missing its closing quote".into(), vec![])
            },
            LexicalErrorType::NumberTooLarge => {
                ("This number does not fit into a literal".into(), vec![])
            }
        }
    }
}
