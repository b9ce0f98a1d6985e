use crate::{
    ast::{BinaryOperator, OperatorFamily},
    interpreter::{
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// Both operands are computed before this function is called, so `and` and
/// `or` never short-circuit.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use quip::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(2), &Value::Float(0.5), 1);
/// assert_eq!(sum.unwrap(), Value::Float(2.5));
///
/// let less = eval_binary(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 1);
/// assert_eq!(less.unwrap(), Value::Bool(true));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op.family() {
        OperatorFamily::Arithmetic(op) => eval_arithmetic(op, left, right, line),
        OperatorFamily::Comparison(op) => eval_comparison(op, left, right, line),
        OperatorFamily::Logical(op) => eval_logic(op, left, right, line),
    }
}
