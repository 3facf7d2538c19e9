use crate::lexer::prelude::Token;
use super::dispatch::BuiltinCategory;

/// One entry per built-in keyword: its spelling and the number of
/// arguments it accepts. Arities are fixed and checked at parse time.
pub type BuiltinEntry = (&'static str, usize);

pub static ML_BUILTINS: &[BuiltinEntry] = &[
    ("linear_regression", 2),
    ("mlp_classifier", 3),
    ("neural_network", 3),
    ("predict", 2),
    ("train", 2),
    ("kmeans", 2),
    ("fit_predict", 2),
    ("get_centroids", 1),
    ("autoencoder", 2),
    ("encode", 2),
    ("decode", 2),
    ("reconstruct", 2),
    ("reconstruction_error", 2),
];

pub static IO_BUILTINS: &[BuiltinEntry] = &[
    ("read_file", 1),
    ("write_file", 2),
    ("print", 1),
];

pub static PLOT_BUILTINS: &[BuiltinEntry] = &[
    ("plot", 1),
    ("scatter", 2),
    ("histogram", 1),
];

pub fn lookup_builtin(keyword: &str) -> Option<(BuiltinCategory, &'static str, usize)> {
    for &(name, arity) in ML_BUILTINS {
        if name == keyword {
            return Some((BuiltinCategory::Ml, name, arity));
        }
    }
    for &(name, arity) in IO_BUILTINS {
        if name == keyword {
            return Some((BuiltinCategory::Io, name, arity));
        }
    }
    for &(name, arity) in PLOT_BUILTINS {
        if name == keyword {
            return Some((BuiltinCategory::Plot, name, arity));
        }
    }

    None
}

pub fn builtin_for_token(token: &Token) -> Option<(BuiltinCategory, &'static str, usize)> {
    let keyword = match token {
        Token::LinearRegression => "linear_regression",
        Token::MlpClassifier => "mlp_classifier",
        Token::NeuralNetwork => "neural_network",
        Token::Predict => "predict",
        Token::Train => "train",
        Token::Kmeans => "kmeans",
        Token::FitPredict => "fit_predict",
        Token::GetCentroids => "get_centroids",
        Token::Autoencoder => "autoencoder",
        Token::Encode => "encode",
        Token::Decode => "decode",
        Token::Reconstruct => "reconstruct",
        Token::ReconstructionError => "reconstruction_error",
        Token::ReadFile => "read_file",
        Token::WriteFile => "write_file",
        Token::Print => "print",
        Token::Plot => "plot",
        Token::Scatter => "scatter",
        Token::Histogram => "histogram",
        _ => return None
    };

    lookup_builtin(keyword)
}
