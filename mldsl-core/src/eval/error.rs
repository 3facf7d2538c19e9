use crate::builtin::prelude::DispatchError;
use crate::environment::prelude::ValueKind;
use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    UndefinedVariable {
        name: String
    },
    UndefinedFunction {
        name: String
    },
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize
    },
    DivisionByZero,
    DomainError {
        message: String
    },
    ShapeError {
        message: String
    },
    TypeMismatch {
        expected: &'static str,
        got: ValueKind
    },
    DispatchFailure {
        error: DispatchError
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (String, String) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { name } => (
                "Undefined variable".into(),
                format!("`{name}` has not been assigned a value")
            ),
            RuntimeErrorType::UndefinedFunction { name } => (
                "Undefined function".into(),
                format!("`{name}` has not been defined")
            ),
            RuntimeErrorType::ArityMismatch { function, expected, got } => (
                "Wrong number of arguments".into(),
                format!("`{function}` takes {expected} argument(s), but {got} were given")
            ),
            RuntimeErrorType::DivisionByZero => (
                "Division by zero".into(),
                "The right-hand side of this operation is zero".into()
            ),
            RuntimeErrorType::DomainError { message } => (
                "Math domain error".into(),
                message.clone()
            ),
            RuntimeErrorType::ShapeError { message } => (
                "Shape error".into(),
                message.clone()
            ),
            RuntimeErrorType::TypeMismatch { expected, got } => (
                "Type mismatch".into(),
                format!("Expected {expected}, found {got}")
            ),
            RuntimeErrorType::DispatchFailure { error } => (
                "Built-in call failed".into(),
                error.to_string()
            )
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, location: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, location })
}
