use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: numeric identity for integers and floats.
/// - `Negate`: numeric negation for integers and floats. Negating the
///   smallest integer overflows.
/// - `Not`: boolean negation. Only booleans are accepted; there is no implicit
///   truthiness.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use quip::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// // Negation
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// // Boolean not
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// // Strings have no sign
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("a"), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Plus => match value {
            Value::Integer(_) | Value::Float(_) => Ok(value.clone()),
            _ => Err(sign_error(op, value, line)),
        },
        UnaryOperator::Negate => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
            Value::Float(r) => Ok(Value::Float(-r)),
            _ => Err(sign_error(op, value, line)),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.as_bool("'not'", line)?)),
    }
}

fn sign_error(op: UnaryOperator, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot apply unary {op} to {}",
                                               value.type_name()),
                              line }
}
