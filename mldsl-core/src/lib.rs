pub mod builtin;
pub mod environment;
pub mod eval;
pub mod interpret;
pub mod lexer;
pub mod parser;
pub mod utils;
