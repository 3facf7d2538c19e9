use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
    Some(match word {
        "if" => Token::If,
        "else" => Token::Else,
        "for" => Token::For,
        "while" => Token::While,
        "def" => Token::Def,
        "return" => Token::Return,

        "linear_regression" => Token::LinearRegression,
        "mlp_classifier" => Token::MlpClassifier,
        "neural_network" => Token::NeuralNetwork,
        "predict" => Token::Predict,
        "train" => Token::Train,
        "kmeans" => Token::Kmeans,
        "fit_predict" => Token::FitPredict,
        "get_centroids" => Token::GetCentroids,
        "autoencoder" => Token::Autoencoder,
        "encode" => Token::Encode,
        "decode" => Token::Decode,
        "reconstruct" => Token::Reconstruct,
        "reconstruction_error" => Token::ReconstructionError,

        "read_file" => Token::ReadFile,
        "write_file" => Token::WriteFile,
        "print" => Token::Print,

        "plot" => Token::Plot,
        "scatter" => Token::Scatter,
        "histogram" => Token::Histogram,

        "sin" => Token::Sin,
        "cos" => Token::Cos,
        "tan" => Token::Tan,
        "sqrt" => Token::Sqrt,

        "transpose" => Token::Transpose,
        "inverse" => Token::Inverse,
        "matmult" => Token::Matmult,
        "matadd" => Token::Matadd,
        "matsub" => Token::Matsub,

        _ => return None
    })
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
    position: u32,
    next_position: u32,
    ch: Option<char>,
    next_ch: Option<char>,
    input: T,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
    pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
            next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> LexResult {
        let span = match self.ch {
            Some(ch) => match ch {
                '(' => self.eat_one_char(Token::LParen),
                ')' => self.eat_one_char(Token::RParen),
                '{' => self.eat_one_char(Token::LBrace),
                '}' => self.eat_one_char(Token::RBrace),
                '[' => self.eat_one_char(Token::LBracket),
                ']' => self.eat_one_char(Token::RBracket),
                ',' => self.eat_one_char(Token::Comma),
                ';' => self.eat_one_char(Token::Semicolon),
                '+' => self.eat_one_char(Token::Plus),
                '-' => self.eat_one_char(Token::Minus),
                '*' => self.eat_one_char(Token::Mult),
                '%' => self.eat_one_char(Token::Mod),
                '^' => self.eat_one_char(Token::Caret),
                '/' => match self.next_ch {
                    Some('/') => return self.skip_comment(),
                    _ => self.eat_one_char(Token::Div)
                },
                '=' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::Equal),
                    _ => self.eat_one_char(Token::Assign)
                },
                '<' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::LessThanOrEqual),
                    _ => self.eat_one_char(Token::LessThan)
                },
                '>' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::GreaterThanOrEqual),
                    _ => self.eat_one_char(Token::GreaterThan)
                },
                '!' => match self.next_ch {
                    Some('=') => self.eat_two_chars(Token::NotEqual),
                    _ => {
                        let location = self.position;
                        return Err(LexicalError {
                            error: LexicalErrorType::UnrecognizedCharacter { ch: '!' },
                            location: SrcSpan {
                                start: location,
                                end: location,
                            },
                        });
                    }
                },
                '"' => return self.lex_string(),
                'a'..='z' | 'A'..='Z' | '_' => {
                    return Ok(self.lex_ident());
                },
                '0'..='9' => {
                    return self.lex_number();
                },
                '\n' | ' ' | '\t' | '\x0C' | '\r' => {
                    let _ = self.next_char();

                    return self.next_token();
                },
                c => {
                    let location = self.position;
                    return Err(LexicalError {
                        error: LexicalErrorType::UnrecognizedCharacter { ch: c },
                        location: SrcSpan {
                            start: location,
                            end: location,
                        },
                    });
                }
            },
            None => {
                self.eat_one_char(Token::Eof)
            }
        };

        Ok(span)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.ch;

        let next = match self.input.next() {
            Some((pos, ch)) => {
                self.position = self.next_position;
                self.next_position = pos;

                Some(ch)
            },
            None => {
                self.position = self.next_position;
                self.next_position += 1;

                None
            }
        };

        self.ch = self.next_ch;
        self.next_ch = next;

        ch
    }

    fn eat_one_char(&mut self, token: Token) -> Spanned {
        let start_pos = self.position;
        self.next_char();
        let end_pos = self.position;

        (start_pos, token, end_pos)
    }

    fn eat_two_chars(&mut self, token: Token) -> Spanned {
        let start_pos = self.position;
        self.next_char();
        self.next_char();
        let end_pos = self.position;

        (start_pos, token, end_pos)
    }

    fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
        let mut ident = String::new();

        loop {
            match self.ch {
                Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {
                    ident.push(self.next_char().unwrap())
                },
                _ => break
            }
        }

        let end_pos = self.position;

        // keywords and built-in names win over the identifier rule
        let token = match str_to_keyword(&ident) {
            Some(token) => token,
            None => Token::Ident(ident)
        };

        (start_pos, token, end_pos)
    }

    fn lex_number(&mut self) -> LexResult {
        let start_pos = self.position;
        let mut value = String::new();

        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            value.push(self.next_char().unwrap());
        }

        if self.ch != Some('.') {
            let end_pos = self.position;

            return match value.parse::<i64>() {
                Ok(value) => Ok((start_pos, Token::Number(value), end_pos)),
                Err(_) => Err(LexicalError {
                    error: LexicalErrorType::NumberTooLarge,
                    location: SrcSpan::from(start_pos, end_pos)
                })
            };
        }

        // a bare `3.` is neither NUMBER nor FLOAT
        if !matches!(self.next_ch, Some(ch) if ch.is_ascii_digit()) {
            self.next_char();

            return Err(LexicalError {
                error: LexicalErrorType::MissingDigitAfterPeriod,
                location: SrcSpan::from(start_pos, self.position)
            });
        }

        value.push(self.next_char().unwrap());

        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            value.push(self.next_char().unwrap());
        }

        let end_pos = self.position;

        match value.parse::<f64>() {
            Ok(value) => Ok((start_pos, Token::Float(value), end_pos)),
            Err(_) => Err(LexicalError {
                error: LexicalErrorType::NumberTooLarge,
                location: SrcSpan::from(start_pos, end_pos)
            })
        }
    }

    fn lex_string(&mut self) -> LexResult {
        let start_pos = self.position;

        self.next_char(); // opening quote

        let mut value = String::new();

        loop {
            match self.ch {
                Some('"') => {
                    self.next_char();
                    break;
                },
                Some('\n') | None => {
                    return Err(LexicalError {
                        error: LexicalErrorType::UnterminatedString,
                        location: SrcSpan::from(start_pos, self.position)
                    });
                },
                Some(_) => value.push(self.next_char().unwrap())
            }
        }

        let end_pos = self.position;

        Ok((start_pos, Token::Str(value), end_pos))
    }

    fn skip_comment(&mut self) -> LexResult {
        // `//` runs to the end of the line and produces no token
        while !matches!(self.ch, Some('\n') | None) {
            self.next_char();
        }

        self.next_token()
    }
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
    type Item = LexResult;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();

        Some(token)
    }
}
