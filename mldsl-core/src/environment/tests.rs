use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;

#[test]
fn get_walks_the_parent_chain() {
    let global = Rc::new(RefCell::new(Environment::new()));
    global.borrow_mut().set("x".into(), Value::from(1.0));

    let frame = Environment::with_parent(global.clone());

    assert_eq!(frame.get("x"), Some(Value::from(1.0)));
    assert_eq!(frame.get("y"), None);
}

#[test]
fn set_shadows_without_touching_the_parent() {
    let global = Rc::new(RefCell::new(Environment::new()));
    global.borrow_mut().set("x".into(), Value::from(1.0));

    let mut frame = Environment::with_parent(global.clone());
    frame.set("x".into(), Value::from(2.0));

    assert_eq!(frame.get("x"), Some(Value::from(2.0)));
    assert_eq!(global.borrow().get("x"), Some(Value::from(1.0)));
}

#[test]
fn values_display_like_source_literals() {
    let matrix = Value::Matrix {
        rows: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
    };
    assert_eq!(matrix.to_string(), "[[1, 2], [3, 4]]");

    let list = Value::List {
        values: vec![Value::from(1.0), Value::from("a")],
    };
    assert_eq!(list.to_string(), "[1, a]");
    assert_eq!(Value::None.to_string(), "none");
}
