use thiserror::Error;

use crate::environment::prelude::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCategory {
    Ml,
    Io,
    Plot,
}

impl std::fmt::Display for BuiltinCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuiltinCategory::Ml => write!(f, "ml"),
            BuiltinCategory::Io => write!(f, "io"),
            BuiltinCategory::Plot => write!(f, "plot"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("built-in `{keyword}` failed: {message}")]
pub struct DispatchError {
    pub keyword: String,
    pub message: String,
}

impl DispatchError {
    pub fn new(keyword: &str, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}

/// Host hook for the ml, io and plot keyword families. The evaluator
/// never performs these effects itself, it hands evaluated arguments
/// to whichever implementation the embedder supplies.
pub trait BuiltinDispatcher {
    fn dispatch(
        &mut self,
        category: BuiltinCategory,
        keyword: &str,
        args: Vec<Value>,
    ) -> Result<Value, DispatchError>;
}

/// Swallows every call and returns `Value::None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDispatcher;

impl BuiltinDispatcher for NullDispatcher {
    fn dispatch(
        &mut self,
        _category: BuiltinCategory,
        _keyword: &str,
        _args: Vec<Value>,
    ) -> Result<Value, DispatchError> {
        Ok(Value::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchCall {
    pub category: BuiltinCategory,
    pub keyword: String,
    pub args: Vec<Value>,
}

/// Records every call it receives, for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct RecordingDispatcher {
    pub calls: Vec<DispatchCall>,
    result: Option<Value>,
    fail_with: Option<String>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with the given value instead of `Value::None`.
    pub fn returning(result: Value) -> Self {
        Self {
            calls: vec![],
            result: Some(result),
            fail_with: None,
        }
    }

    /// Fail every call with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: vec![],
            result: None,
            fail_with: Some(message.into()),
        }
    }

    pub fn take(&mut self) -> Vec<DispatchCall> {
        std::mem::take(&mut self.calls)
    }
}

impl BuiltinDispatcher for RecordingDispatcher {
    fn dispatch(
        &mut self,
        category: BuiltinCategory,
        keyword: &str,
        args: Vec<Value>,
    ) -> Result<Value, DispatchError> {
        self.calls.push(DispatchCall {
            category,
            keyword: keyword.into(),
            args,
        });

        match &self.fail_with {
            Some(message) => Err(DispatchError::new(keyword, message.clone())),
            None => Ok(self.result.clone().unwrap_or(Value::None))
        }
    }
}
