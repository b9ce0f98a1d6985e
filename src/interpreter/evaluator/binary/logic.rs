use crate::{
    ast::LogicalOperator,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a logical operation between two boolean values.
///
/// The operands are converted to booleans using `as_bool`, so anything other
/// than a boolean is a type error. Supported operators are logical AND and
/// OR.
///
/// # Parameters
/// - `op`: The logical operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean.
///
/// # Example
/// ```
/// use quip::{
///     ast::LogicalOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let a = Value::Bool(true);
/// let b = Value::Bool(false);
///
/// let result = eval_logic(LogicalOperator::Or, &a, &b, 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
///
/// assert!(eval_logic(LogicalOperator::And, &a, &Value::Integer(1), 1).is_err());
/// ```
pub fn eval_logic(op: LogicalOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    let context = format!("'{op}'");
    let left = left.as_bool(&context, line)?;
    let right = right.as_bool(&context, line)?;

    Ok(Value::Bool(match op {
                       LogicalOperator::And => left && right,
                       LogicalOperator::Or => left || right,
                   }))
}
