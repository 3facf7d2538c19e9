#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter | _> { <letter> | <digit> | _ }
    Ident(String),
    // digits only
    Number(i64),
    // digits . digits, at least one digit on each side of the point
    Float(f64),
    // "..." with no escapes and no embedded quotes
    Str(String),

    // Keywords
    If, // if
    Else, // else
    For, // for
    While, // while
    Def, // def
    Return, // return

    // ML built-ins
    LinearRegression,
    MlpClassifier,
    NeuralNetwork,
    Predict,
    Train,
    Kmeans,
    FitPredict,
    GetCentroids,
    Autoencoder,
    Encode,
    Decode,
    Reconstruct,
    ReconstructionError,

    // IO built-ins
    ReadFile,
    WriteFile,
    Print,

    // Plot built-ins
    Plot,
    Scatter,
    Histogram,

    // Trigonometric / math functions
    Sin,
    Cos,
    Tan,
    Sqrt,

    // Matrix operations
    Transpose,
    Inverse,
    Matmult,
    Matadd,
    Matsub,

    // Operators
    Assign, // =
    Plus, // +
    Minus, // -
    Mult, // *
    Div, // /
    Mod, // %
    Caret, // ^

    // Relational operators
    Equal, // ==
    NotEqual, // !=
    LessThan, // <
    LessThanOrEqual, // <=
    GreaterThan, // >
    GreaterThanOrEqual, // >=

    // Delimiters
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    LBracket, // [
    RBracket, // ]
    Comma, // ,
    Semicolon, // ;

    Eof,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        match self {
            Token::If
            | Token::Else
            | Token::For
            | Token::While
            | Token::Def
            | Token::Return
            | Token::Sin
            | Token::Cos
            | Token::Tan
            | Token::Sqrt
            | Token::Transpose
            | Token::Inverse
            | Token::Matmult
            | Token::Matadd
            | Token::Matsub => true,
            _ => self.is_builtin_keyword()
        }
    }

    pub fn is_builtin_keyword(&self) -> bool {
        match self {
            Token::LinearRegression
            | Token::MlpClassifier
            | Token::NeuralNetwork
            | Token::Predict
            | Token::Train
            | Token::Kmeans
            | Token::FitPredict
            | Token::GetCentroids
            | Token::Autoencoder
            | Token::Encode
            | Token::Decode
            | Token::Reconstruct
            | Token::ReconstructionError
            | Token::ReadFile
            | Token::WriteFile
            | Token::Print
            | Token::Plot
            | Token::Scatter
            | Token::Histogram => true,
            _ => false
        }
    }

    pub fn is_rel_op(&self) -> bool {
        match self {
            Token::Equal
            | Token::NotEqual
            | Token::LessThan
            | Token::LessThanOrEqual
            | Token::GreaterThan
            | Token::GreaterThanOrEqual => true,
            _ => false
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Number(value) => format!("{}", value),
            Token::Float(value) => format!("{}", value),
            Token::Str(value) => format!("\"{}\"", value),

            Token::If => "if".to_string(),
            Token::Else => "else".to_string(),
            Token::For => "for".to_string(),
            Token::While => "while".to_string(),
            Token::Def => "def".to_string(),
            Token::Return => "return".to_string(),

            Token::LinearRegression => "linear_regression".to_string(),
            Token::MlpClassifier => "mlp_classifier".to_string(),
            Token::NeuralNetwork => "neural_network".to_string(),
            Token::Predict => "predict".to_string(),
            Token::Train => "train".to_string(),
            Token::Kmeans => "kmeans".to_string(),
            Token::FitPredict => "fit_predict".to_string(),
            Token::GetCentroids => "get_centroids".to_string(),
            Token::Autoencoder => "autoencoder".to_string(),
            Token::Encode => "encode".to_string(),
            Token::Decode => "decode".to_string(),
            Token::Reconstruct => "reconstruct".to_string(),
            Token::ReconstructionError => "reconstruction_error".to_string(),

            Token::ReadFile => "read_file".to_string(),
            Token::WriteFile => "write_file".to_string(),
            Token::Print => "print".to_string(),

            Token::Plot => "plot".to_string(),
            Token::Scatter => "scatter".to_string(),
            Token::Histogram => "histogram".to_string(),

            Token::Sin => "sin".to_string(),
            Token::Cos => "cos".to_string(),
            Token::Tan => "tan".to_string(),
            Token::Sqrt => "sqrt".to_string(),

            Token::Transpose => "transpose".to_string(),
            Token::Inverse => "inverse".to_string(),
            Token::Matmult => "matmult".to_string(),
            Token::Matadd => "matadd".to_string(),
            Token::Matsub => "matsub".to_string(),

            Token::Assign => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Mult => "*".to_string(),
            Token::Div => "/".to_string(),
            Token::Mod => "%".to_string(),
            Token::Caret => "^".to_string(),

            Token::Equal => "==".to_string(),
            Token::NotEqual => "!=".to_string(),
            Token::LessThan => "<".to_string(),
            Token::LessThanOrEqual => "<=".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::GreaterThanOrEqual => ">=".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::LBracket => "[".to_string(),
            Token::RBracket => "]".to_string(),
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
