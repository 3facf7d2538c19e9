pub mod error;
pub mod matrix;

pub mod prelude {
    pub use super::error::*;
    pub use super::eval;
}

#[cfg(test)]
mod tests;

use std::{cell::RefCell, rc::Rc};

use crate::{
    builtin::prelude::BuiltinDispatcher,
    environment::prelude::{Environment, UserFunction, Value},
    parser::prelude::{
        Assignment, Call, CallTarget, Condition, Expression, ListLiteral,
        MatrixOpCall, MatrixOpKind, BinOp, Primitive, Program, RelOp, Row,
        Statement, TrigCall, TrigFn
    },
    utils::prelude::SrcSpan
};

use error::{runtime_error, RuntimeError, RuntimeErrorType};

pub fn eval(
    program: &Program,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), RuntimeError> {
    for statement in &program.statements {
        eval_statement(statement, env.clone(), dispatcher)?;
    }

    Ok(())
}

fn eval_statement(
    statement: &Statement,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), RuntimeError> {
    match statement {
        Statement::Assignment(assignment) => {
            eval_assignment(assignment, env, dispatcher)
        },
        Statement::Conditional(conditional) => {
            if eval_condition(&conditional.condition, env.clone(), dispatcher)? {
                eval_block(&conditional.consequence, env, dispatcher)
            } else if let Some(alternative) = &conditional.alternative {
                eval_block(alternative, env, dispatcher)
            } else {
                Ok(())
            }
        },
        Statement::For(loop_) => {
            eval_assignment(&loop_.init, env.clone(), dispatcher)?;

            while eval_condition(&loop_.condition, env.clone(), dispatcher)? {
                eval_block(&loop_.body, env.clone(), dispatcher)?;
                eval_assignment(&loop_.update, env.clone(), dispatcher)?;
            }

            Ok(())
        },
        Statement::While(loop_) => {
            while eval_condition(&loop_.condition, env.clone(), dispatcher)? {
                eval_block(&loop_.body, env.clone(), dispatcher)?;
            }

            Ok(())
        },
        Statement::FunctionDef(def) => {
            let function = Rc::new(UserFunction {
                name: def.name.value.clone(),
                params: def.params.clone(),
                body: def.body.clone(),
                return_expr: def.return_expr.clone()
            });

            env.borrow_mut().set(
                def.name.value.clone(),
                Value::Function { function }
            );

            Ok(())
        },
        Statement::Expression { expression, .. } => {
            let _ = eval_expression(expression, env, dispatcher)?;

            Ok(())
        }
    }
}

// blocks share the enclosing scope, only calls open a new frame
fn eval_block(
    statements: &[Statement],
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), RuntimeError> {
    for statement in statements {
        eval_statement(statement, env.clone(), dispatcher)?;
    }

    Ok(())
}

fn eval_assignment(
    assignment: &Assignment,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<(), RuntimeError> {
    let value = eval_expression(&assignment.value, env.clone(), dispatcher)?;

    env.borrow_mut().set(assignment.name.value.clone(), value);

    Ok(())
}

fn eval_condition(
    condition: &Condition,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<bool, RuntimeError> {
    let left = eval_expression(&condition.left, env.clone(), dispatcher)?;

    match &condition.rel {
        Some((op, right_expr)) => {
            let right = eval_expression(right_expr, env, dispatcher)?;

            compare(*op, &left, &right, condition.location)
        },
        None => is_truthy(&left, condition.location)
    }
}

// a bare condition is true when it is a non-zero number
fn is_truthy(value: &Value, location: SrcSpan) -> Result<bool, RuntimeError> {
    match value {
        Value::Number { value } => Ok(*value != 0.0),
        other => runtime_error(
            RuntimeErrorType::TypeMismatch {
                expected: "a number",
                got: other.kind()
            },
            location
        )
    }
}

fn compare(
    op: RelOp,
    left: &Value,
    right: &Value,
    location: SrcSpan
) -> Result<bool, RuntimeError> {
    match (left, right) {
        (Value::Number { value: l }, Value::Number { value: r }) => {
            Ok(match op {
                RelOp::Equal => l == r,
                RelOp::NotEqual => l != r,
                RelOp::LessThan => l < r,
                RelOp::LessThanOrEqual => l <= r,
                RelOp::GreaterThan => l > r,
                RelOp::GreaterThanOrEqual => l >= r
            })
        },
        (Value::Str { value: l }, Value::Str { value: r }) => {
            match op {
                RelOp::Equal => Ok(l == r),
                RelOp::NotEqual => Ok(l != r),
                _ => runtime_error(
                    RuntimeErrorType::TypeMismatch {
                        expected: "a number",
                        got: left.kind()
                    },
                    location
                )
            }
        },
        (Value::Number { .. }, other) | (other, _) => runtime_error(
            RuntimeErrorType::TypeMismatch {
                expected: "a number",
                got: other.kind()
            },
            location
        )
    }
}

fn eval_expression(
    expression: &Expression,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<Value, RuntimeError> {
    match expression {
        Expression::Identifier(ident) => {
            match env.borrow().get(&ident.value) {
                Some(value) => Ok(value),
                None => runtime_error(
                    RuntimeErrorType::UndefinedVariable {
                        name: ident.value.clone()
                    },
                    ident.location
                )
            }
        },
        Expression::Primitive(primitive) => Ok(match primitive {
            Primitive::Number { value, .. } => Value::Number { value: *value as f64 },
            Primitive::Float { value, .. } => Value::Number { value: *value },
            Primitive::Str { value, .. } => Value::Str { value: value.clone() }
        }),
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left, env.clone(), dispatcher)?;
            let right = eval_expression(&infix.right, env, dispatcher)?;

            eval_infix(infix.operator, &left, &right, infix.location)
        },
        Expression::Negate { expression, location } => {
            let value = eval_expression(expression, env, dispatcher)?;
            let value = expect_number(&value, *location)?;

            Ok(Value::Number { value: -value })
        },
        Expression::Trig(call) => eval_trig(call, env, dispatcher),
        Expression::MatrixOp(call) => eval_matrix_op(call, env, dispatcher),
        Expression::List(list) => eval_list_literal(list, env, dispatcher),
        Expression::Call(call) => eval_call(call, env, dispatcher),
        Expression::Grouping { expression, .. } => {
            eval_expression(expression, env, dispatcher)
        }
    }
}

fn eval_infix(
    op: BinOp,
    left: &Value,
    right: &Value,
    location: SrcSpan
) -> Result<Value, RuntimeError> {
    let left = expect_number(left, location)?;
    let right = expect_number(right, location)?;

    let value = match op {
        BinOp::Add => left + right,
        BinOp::Sub => left - right,
        BinOp::Mul => left * right,
        BinOp::Div => {
            if right == 0.0 {
                return runtime_error(RuntimeErrorType::DivisionByZero, location);
            }

            left / right
        },
        BinOp::Mod => {
            if right == 0.0 {
                return runtime_error(RuntimeErrorType::DivisionByZero, location);
            }

            left % right
        },
        BinOp::Pow => {
            if left == 0.0 && right < 0.0 {
                return runtime_error(RuntimeErrorType::DivisionByZero, location);
            }

            if left < 0.0 && right.fract() != 0.0 {
                return runtime_error(
                    RuntimeErrorType::DomainError {
                        message: format!(
                            "cannot raise the negative number {left} to the fractional power {right}"
                        )
                    },
                    location
                );
            }

            left.powf(right)
        }
    };

    Ok(Value::Number { value })
}

fn eval_trig(
    call: &TrigCall,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<Value, RuntimeError> {
    let argument = eval_expression(&call.argument, env, dispatcher)?;
    let argument = expect_number(&argument, call.location)?;

    let value = match call.function {
        TrigFn::Sin => argument.sin(),
        TrigFn::Cos => argument.cos(),
        TrigFn::Tan => argument.tan(),
        TrigFn::Sqrt => {
            if argument < 0.0 {
                return runtime_error(
                    RuntimeErrorType::DomainError {
                        message: format!("cannot take the square root of the negative number {argument}")
                    },
                    call.location
                );
            }

            argument.sqrt()
        }
    };

    Ok(Value::Number { value })
}

fn eval_matrix_op(
    call: &MatrixOpCall,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<Value, RuntimeError> {
    let mut matrices = Vec::with_capacity(call.args.len());

    for arg in &call.args {
        let value = eval_expression(arg, env.clone(), dispatcher)?;
        matrices.push(expect_matrix(&value, arg.location())?);
    }

    let result = match call.op {
        MatrixOpKind::Transpose => Ok(matrix::transpose(&matrices[0])),
        MatrixOpKind::Inverse => matrix::inverse(&matrices[0]),
        MatrixOpKind::Matmult => matrix::multiply(&matrices[0], &matrices[1]),
        MatrixOpKind::Matadd => matrix::add(&matrices[0], &matrices[1]),
        MatrixOpKind::Matsub => matrix::subtract(&matrices[0], &matrices[1])
    };

    match result {
        Ok(rows) => Ok(Value::Matrix { rows }),
        Err(message) => runtime_error(
            RuntimeErrorType::ShapeError { message },
            call.location
        )
    }
}

// [[..], [..]] builds a matrix, [a, b, c] builds a list, mixing the
// two row forms is a shape error
fn eval_list_literal(
    list: &ListLiteral,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<Value, RuntimeError> {
    if list.rows.is_empty() {
        return Ok(Value::List { values: vec![] });
    }

    let all_bracketed = list.rows.iter().all(|row| matches!(row, Row::Bracketed(_)));
    let all_bare = list.rows.iter().all(|row| matches!(row, Row::Bare(_)));

    if all_bare {
        let mut values = Vec::with_capacity(list.rows.len());

        for row in &list.rows {
            if let Row::Bare(expression) = row {
                values.push(eval_expression(expression, env.clone(), dispatcher)?);
            }
        }

        return Ok(Value::List { values });
    }

    if !all_bracketed {
        return runtime_error(
            RuntimeErrorType::ShapeError {
                message: "cannot mix bracketed rows and bare elements in one literal".into()
            },
            list.location
        );
    }

    let mut rows = Vec::with_capacity(list.rows.len());

    for row in &list.rows {
        if let Row::Bracketed(elements) = row {
            let mut values = Vec::with_capacity(elements.len());

            for element in elements {
                let value = eval_expression(element, env.clone(), dispatcher)?;
                values.push(expect_number(&value, element.location())?);
            }

            rows.push(values);
        }
    }

    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return runtime_error(
            RuntimeErrorType::ShapeError {
                message: "matrix rows must all have the same length".into()
            },
            list.location
        );
    }

    Ok(Value::Matrix { rows })
}

fn eval_call(
    call: &Call,
    env: Rc<RefCell<Environment>>,
    dispatcher: &mut dyn BuiltinDispatcher
) -> Result<Value, RuntimeError> {
    let mut args = Vec::with_capacity(call.args.len());

    for arg in &call.args {
        args.push(eval_expression(arg, env.clone(), dispatcher)?);
    }

    match &call.target {
        CallTarget::Builtin { category, keyword } => {
            dispatcher.dispatch(*category, keyword, args)
                .map_err(|error| RuntimeError {
                    error: RuntimeErrorType::DispatchFailure { error },
                    location: call.location
                })
        },
        CallTarget::User(name) => {
            let function = match env.borrow().get(name) {
                Some(Value::Function { function }) => function,
                Some(other) => return runtime_error(
                    RuntimeErrorType::TypeMismatch {
                        expected: "a function",
                        got: other.kind()
                    },
                    call.location
                ),
                None => return runtime_error(
                    RuntimeErrorType::UndefinedFunction {
                        name: name.clone()
                    },
                    call.location
                )
            };

            if args.len() != function.params.len() {
                return runtime_error(
                    RuntimeErrorType::ArityMismatch {
                        function: name.clone(),
                        expected: function.params.len(),
                        got: args.len()
                    },
                    call.location
                );
            }

            // the frame chains to the call site, so the callee reads
            // outer variables but its own writes stay local
            let frame = Rc::new(RefCell::new(Environment::with_parent(env)));

            for (param, arg) in function.params.iter().zip(args) {
                frame.borrow_mut().set(param.clone(), arg);
            }

            eval_block(&function.body, frame.clone(), dispatcher)?;

            eval_expression(&function.return_expr, frame, dispatcher)
        }
    }
}

fn expect_number(value: &Value, location: SrcSpan) -> Result<f64, RuntimeError> {
    match value {
        Value::Number { value } => Ok(*value),
        other => runtime_error(
            RuntimeErrorType::TypeMismatch {
                expected: "a number",
                got: other.kind()
            },
            location
        )
    }
}

fn expect_matrix(value: &Value, location: SrcSpan) -> Result<Vec<Vec<f64>>, RuntimeError> {
    match value {
        Value::Matrix { rows } => Ok(rows.clone()),
        other => runtime_error(
            RuntimeErrorType::TypeMismatch {
                expected: "a matrix",
                got: other.kind()
            },
            location
        )
    }
}
