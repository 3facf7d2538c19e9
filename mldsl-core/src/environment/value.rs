use std::rc::Rc;

use crate::parser::prelude::{Expression, Statement};

/// A user-defined function. The body runs in a fresh frame whose
/// parent is the environment of the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
    pub return_expr: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // all numerics widen to f64 at runtime
    Number { value: f64 },
    Str { value: String },
    List { values: Vec<Value> },
    Matrix { rows: Vec<Vec<f64>> },
    Function { function: Rc<UserFunction> },
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Str,
    List,
    Matrix,
    Function,
    None,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number { .. } => ValueKind::Number,
            Value::Str { .. } => ValueKind::Str,
            Value::List { .. } => ValueKind::List,
            Value::Matrix { .. } => ValueKind::Matrix,
            Value::Function { .. } => ValueKind::Function,
            Value::None => ValueKind::None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number { value }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str { value: value.into() }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { value } => write!(f, "{value}"),
            Value::Str { value } => write!(f, "{value}"),
            Value::List { values } => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Value::Matrix { rows } => {
                write!(f, "[")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{value}")?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            },
            Value::Function { function } => {
                write!(f, "<function {}>", function.name)
            },
            Value::None => write!(f, "none"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Str => write!(f, "string"),
            ValueKind::List => write!(f, "list"),
            ValueKind::Matrix => write!(f, "matrix"),
            ValueKind::Function => write!(f, "function"),
            ValueKind::None => write!(f, "none"),
        }
    }
}
