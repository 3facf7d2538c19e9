use mldsl_core::builtin::prelude::{BuiltinCategory, BuiltinDispatcher, DispatchError};
use mldsl_core::environment::prelude::Value;

/// The dispatcher the command line host plugs into the evaluator.
/// The io family talks to the local filesystem and stdout, the ml and
/// plot families have no backend here and report a failure instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDispatcher;

impl BuiltinDispatcher for HostDispatcher {
    fn dispatch(
        &mut self,
        category: BuiltinCategory,
        keyword: &str,
        args: Vec<Value>,
    ) -> Result<Value, DispatchError> {
        match category {
            BuiltinCategory::Io => dispatch_io(keyword, args),
            BuiltinCategory::Ml | BuiltinCategory::Plot => {
                Err(DispatchError::new(
                    keyword,
                    format!("no {category} backend is attached to this host")
                ))
            }
        }
    }
}

fn dispatch_io(keyword: &str, args: Vec<Value>) -> Result<Value, DispatchError> {
    match (keyword, args.as_slice()) {
        ("print", [value]) => {
            println!("{value}");

            Ok(Value::None)
        },
        ("read_file", [Value::Str { value: path }]) => {
            match std::fs::read_to_string(path) {
                Ok(contents) => Ok(Value::Str { value: contents }),
                Err(err) => Err(DispatchError::new(keyword, err.to_string()))
            }
        },
        ("write_file", [Value::Str { value: path }, value]) => {
            match std::fs::write(path, value.to_string()) {
                Ok(()) => Ok(Value::None),
                Err(err) => Err(DispatchError::new(keyword, err.to_string()))
            }
        },
        _ => Err(DispatchError::new(keyword, "unsupported io call"))
    }
}
