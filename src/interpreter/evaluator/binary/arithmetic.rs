use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{repeat_count, repeated_len},
};

/// Evaluates an arithmetic operation.
///
/// Integer operands stay integers for `+`, `-` and `*`, with overflow
/// reported as an error. If either operand is a float, both are promoted to
/// floats. `/` always produces a float. Two strings can be added, and a
/// string multiplied by an integer (on either side) is repeated. Any other
/// combination is a type error naming both operand types.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the result.
///
/// # Example
/// ```
/// use quip::{
///     ast::ArithmeticOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let q = eval_arithmetic(ArithmeticOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
/// assert_eq!(q.unwrap(), Value::Float(3.5));
///
/// let s = eval_arithmetic(ArithmeticOperator::Mul, &Value::from("ab"), &Value::Integer(3), 1);
/// assert_eq!(s.unwrap(), Value::from("ababab"));
///
/// let err = eval_arithmetic(ArithmeticOperator::Add, &Value::from("foo"), &Value::Integer(1), 1);
/// assert!(err.is_err());
/// ```
pub fn eval_arithmetic(op: ArithmeticOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use Value::{Integer, Str};

    match (op, left, right) {
        (ArithmeticOperator::Add, Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
        (ArithmeticOperator::Mul, Str(s), Integer(n)) | (ArithmeticOperator::Mul, Integer(n), Str(s)) => {
            repeat(s, *n, line)
        },
        (ArithmeticOperator::Add, ..) => numeric(op, left, right, line, i64::checked_add, |a, b| a + b),
        (ArithmeticOperator::Sub, ..) => numeric(op, left, right, line, i64::checked_sub, |a, b| a - b),
        (ArithmeticOperator::Mul, ..) => numeric(op, left, right, line, i64::checked_mul, |a, b| a * b),
        (ArithmeticOperator::Div, ..) => divide(left, right, line),
    }
}

/// Applies a numeric operation: checked on two integers, in floating point
/// otherwise.
fn numeric(op: ArithmeticOperator,
           left: &Value,
           right: &Value,
           line: usize,
           on_integers: fn(i64, i64) -> Option<i64>,
           on_floats: fn(f64, f64) -> f64)
           -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => on_integers(*a, *b).map(Value::Integer)
                                                                     .ok_or(RuntimeError::Overflow { line }),
        _ if left.is_numeric() && right.is_numeric() => {
            Ok(Value::Float(on_floats(left.as_float(line)?, right.as_float(line)?)))
        },
        _ => Err(type_error(op, left, right, line)),
    }
}

/// Divides two numeric values, always producing a float.
fn divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if !(left.is_numeric() && right.is_numeric()) {
        return Err(type_error(ArithmeticOperator::Div, left, right, line));
    }

    let divisor = right.as_float(line)?;
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Float(left.as_float(line)? / divisor))
}

/// Repeats `s` `count` times. Negative counts produce the empty string.
///
/// Results longer than [`crate::util::num::MAX_STRING_LEN`] are reported as
/// an overflow instead of being allocated.
fn repeat(s: &str, count: i64, line: usize) -> EvalResult<Value> {
    let count = repeat_count(count);
    repeated_len(s.len(), count).ok_or(RuntimeError::Overflow { line })?;
    Ok(Value::Str(s.repeat(count)))
}

fn type_error(op: ArithmeticOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot apply {op} to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
