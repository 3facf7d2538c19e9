use super::prelude::*;
use crate::environment::prelude::Value;
use crate::lexer::prelude::Token;

#[test]
fn lookup_covers_all_families() {
    assert_eq!(
        lookup_builtin("kmeans"),
        Some((BuiltinCategory::Ml, "kmeans", 2))
    );
    assert_eq!(
        lookup_builtin("write_file"),
        Some((BuiltinCategory::Io, "write_file", 2))
    );
    assert_eq!(
        lookup_builtin("scatter"),
        Some((BuiltinCategory::Plot, "scatter", 2))
    );
    assert_eq!(lookup_builtin("frobnicate"), None);
}

#[test]
fn token_maps_to_table_entry() {
    assert_eq!(
        builtin_for_token(&Token::MlpClassifier),
        Some((BuiltinCategory::Ml, "mlp_classifier", 3))
    );
    assert_eq!(builtin_for_token(&Token::Plus), None);
}

#[test]
fn recording_dispatcher_keeps_calls_in_order() {
    let mut dispatcher = RecordingDispatcher::new();

    let result = dispatcher
        .dispatch(BuiltinCategory::Io, "print", vec![Value::from(1.0)])
        .unwrap();
    assert_eq!(result, Value::None);

    dispatcher
        .dispatch(BuiltinCategory::Io, "print", vec![Value::from(2.0)])
        .unwrap();

    let calls = dispatcher.take();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].keyword, "print");
    assert_eq!(calls[0].args, vec![Value::from(1.0)]);
    assert_eq!(calls[1].args, vec![Value::from(2.0)]);
    assert!(dispatcher.calls.is_empty());
}

#[test]
fn failing_dispatcher_surfaces_message() {
    let mut dispatcher = RecordingDispatcher::failing("backend offline");

    let error = dispatcher
        .dispatch(BuiltinCategory::Ml, "train", vec![])
        .unwrap_err();

    assert_eq!(error.keyword, "train");
    assert_eq!(error.message, "backend offline");
}
