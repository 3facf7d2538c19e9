use std::{cell::RefCell, rc::Rc};

use crate::{
    builtin::prelude::{BuiltinCategory, NullDispatcher, RecordingDispatcher},
    environment::prelude::{Environment, Value},
    parser::prelude::parse_program
};

use super::error::{RuntimeError, RuntimeErrorType};
use super::eval;

fn run(src: &str) -> (Rc<RefCell<Environment>>, RecordingDispatcher) {
    let program = parse_program(src).expect("program should parse");
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut dispatcher = RecordingDispatcher::new();

    eval(&program, env.clone(), &mut dispatcher).expect("program should run");

    (env, dispatcher)
}

fn run_err(src: &str) -> RuntimeError {
    let program = parse_program(src).expect("program should parse");
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut dispatcher = NullDispatcher;

    eval(&program, env, &mut dispatcher).expect_err("program should fail")
}

fn get(env: &Rc<RefCell<Environment>>, name: &str) -> Value {
    env.borrow().get(name).expect("variable should be set")
}

#[test]
fn test_arithmetic_precedence() {
    let (env, _) = run("x = 2 + 3 * 4;");

    assert_eq!(get(&env, "x"), Value::from(14.0));
}

#[test]
fn test_power_is_left_to_right() {
    let (env, _) = run("x = 2 ^ 3 ^ 2;");

    assert_eq!(get(&env, "x"), Value::from(64.0));
}

#[test]
fn test_integers_widen_to_floats() {
    let (env, _) = run("x = 1 + 0.5;");

    assert_eq!(get(&env, "x"), Value::from(1.5));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run_err("x = 5 / 0;").error, RuntimeErrorType::DivisionByZero);
    assert_eq!(run_err("x = 5 % 0;").error, RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_negative_base_fractional_exponent() {
    assert!(matches!(
        run_err("x = -2 ^ 0.5;").error,
        RuntimeErrorType::DomainError { .. }
    ));
}

#[test]
fn test_sqrt_of_negative_number() {
    assert!(matches!(
        run_err("x = sqrt(0 - 4);").error,
        RuntimeErrorType::DomainError { .. }
    ));
}

#[test]
fn test_undefined_variable() {
    assert_eq!(
        run_err("x = y + 1;").error,
        RuntimeErrorType::UndefinedVariable { name: "y".into() }
    );
}

#[test]
fn test_conditional_branches() {
    let (env, _) = run("x = 5; if (x > 3) { y = 1; } else { y = 2; }");
    assert_eq!(get(&env, "y"), Value::from(1.0));

    let (env, _) = run("x = 5; if (x < 3) { y = 1; } else { y = 2; }");
    assert_eq!(get(&env, "y"), Value::from(2.0));
}

#[test]
fn test_bare_condition_is_numeric_truthiness() {
    let (env, _) = run("x = 2; if (x) { y = 1; } else { y = 0; }");
    assert_eq!(get(&env, "y"), Value::from(1.0));

    assert!(matches!(
        run_err(r#"if ("yes") { y = 1; }"#).error,
        RuntimeErrorType::TypeMismatch { .. }
    ));
}

#[test]
fn test_for_loop_prints_each_index() {
    let (_, dispatcher) = run("for (i = 0; i < 3; i = i + 1) { print(i); }");

    let printed = dispatcher.calls.iter()
        .map(|call| call.args[0].clone())
        .collect::<Vec<Value>>();

    assert_eq!(printed, vec![
        Value::from(0.0),
        Value::from(1.0),
        Value::from(2.0),
    ]);
}

#[test]
fn test_while_loop() {
    let (env, _) = run("x = 8; while (x > 1) { x = x / 2; }");

    assert_eq!(get(&env, "x"), Value::from(1.0));
}

#[test]
fn test_function_call() {
    let (env, _) = run("def double(n) { return n * 2; } x = double(21);");

    assert_eq!(get(&env, "x"), Value::from(42.0));
}

#[test]
fn test_function_reads_outer_but_writes_stay_local() {
    let (env, _) = run(r#"
        a = 10;
        def f(n) {
            a = 99;
            return n + a;
        }
        x = f(1);
    "#);

    assert_eq!(get(&env, "x"), Value::from(100.0));
    // the callee's write to `a` did not leak out
    assert_eq!(get(&env, "a"), Value::from(10.0));
}

#[test]
fn test_function_arity_mismatch() {
    assert_eq!(
        run_err("def f(a, b) { return a + b; } x = f(1);").error,
        RuntimeErrorType::ArityMismatch {
            function: "f".into(),
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_calling_an_undefined_function() {
    assert_eq!(
        run_err("x = g(1);").error,
        RuntimeErrorType::UndefinedFunction { name: "g".into() }
    );
}

#[test]
fn test_bracketed_rows_build_a_matrix() {
    let (env, _) = run("m = [[1, 2], [3, 4]];");

    assert_eq!(get(&env, "m"), Value::Matrix {
        rows: vec![vec![1.0, 2.0], vec![3.0, 4.0]]
    });
}

#[test]
fn test_bare_rows_build_a_list() {
    let (env, _) = run(r#"l = [1, "two", 3];"#);

    assert_eq!(get(&env, "l"), Value::List {
        values: vec![
            Value::from(1.0),
            Value::from("two"),
            Value::from(3.0),
        ]
    });
}

#[test]
fn test_mixed_rows_are_a_shape_error() {
    assert!(matches!(
        run_err("x = [1, 2, [3, 4]];").error,
        RuntimeErrorType::ShapeError { .. }
    ));
}

#[test]
fn test_ragged_rows_are_a_shape_error() {
    assert!(matches!(
        run_err("x = [[1, 2], [3]];").error,
        RuntimeErrorType::ShapeError { .. }
    ));
}

#[test]
fn test_transpose_round_trip() {
    let (env, _) = run("m = [[1, 2, 3], [4, 5, 6]]; t = transpose(transpose(m));");

    assert_eq!(get(&env, "t"), get(&env, "m"));
}

#[test]
fn test_matadd_elementwise() {
    let (env, _) = run("s = matadd([[1, 2], [3, 4]], [[10, 20], [30, 40]]);");

    assert_eq!(get(&env, "s"), Value::Matrix {
        rows: vec![vec![11.0, 22.0], vec![33.0, 44.0]]
    });
}

#[test]
fn test_matadd_shape_mismatch() {
    assert!(matches!(
        run_err("s = matadd([[1, 2]], [[1], [2]]);").error,
        RuntimeErrorType::ShapeError { .. }
    ));
}

#[test]
fn test_matmult() {
    let (env, _) = run("p = matmult([[1, 2]], [[3], [4]]);");

    assert_eq!(get(&env, "p"), Value::Matrix { rows: vec![vec![11.0]] });
}

#[test]
fn test_inverse_of_singular_matrix() {
    assert!(matches!(
        run_err("i = inverse([[1, 2], [2, 4]]);").error,
        RuntimeErrorType::ShapeError { .. }
    ));
}

#[test]
fn test_inverse_times_original_is_identity() {
    let (env, _) = run("m = [[4, 7], [2, 6]]; i = matmult(m, inverse(m));");

    match get(&env, "i") {
        Value::Matrix { rows } => {
            let expected = [[1.0, 0.0], [0.0, 1.0]];

            for (row, expected_row) in rows.iter().zip(expected) {
                for (value, expected_value) in row.iter().zip(expected_row) {
                    assert!((value - expected_value).abs() < 1e-9);
                }
            }
        },
        other => panic!("expected a matrix, got {other:?}")
    }
}

#[test]
fn test_ml_pipeline_calls_are_dispatched_in_order() {
    let (_, dispatcher) = run(r#"
        data = read_file("data.csv");
        model = kmeans(data, 3);
        labels = fit_predict(model, data);
        plot(labels);
    "#);

    let keywords = dispatcher.calls.iter()
        .map(|call| (call.category, call.keyword.as_str()))
        .collect::<Vec<(BuiltinCategory, &str)>>();

    assert_eq!(keywords, vec![
        (BuiltinCategory::Io, "read_file"),
        (BuiltinCategory::Ml, "kmeans"),
        (BuiltinCategory::Ml, "fit_predict"),
        (BuiltinCategory::Plot, "plot"),
    ]);

    // the path argument arrives as a string value
    assert_eq!(dispatcher.calls[0].args, vec![Value::from("data.csv")]);
}

#[test]
fn test_dispatch_failure_becomes_a_runtime_error() {
    let program = parse_program("x = train(1, 2);").expect("program should parse");
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut dispatcher = RecordingDispatcher::failing("backend offline");

    let error = eval(&program, env, &mut dispatcher).expect_err("dispatch should fail");

    assert!(matches!(error.error, RuntimeErrorType::DispatchFailure { .. }));
}

#[test]
fn test_dispatcher_results_flow_back_into_the_program() {
    let program = parse_program("c = get_centroids(1); x = matmult(c, c);")
        .expect("program should parse");
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut dispatcher = RecordingDispatcher::returning(Value::Matrix {
        rows: vec![vec![2.0]]
    });

    eval(&program, env.clone(), &mut dispatcher).expect("program should run");

    assert_eq!(get(&env, "x"), Value::Matrix { rows: vec![vec![4.0]] });
}
