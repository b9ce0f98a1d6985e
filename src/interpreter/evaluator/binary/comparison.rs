use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::compare_i64_f64,
};

/// Orders two values of the same type family.
///
/// Integers and floats form one family and compare by exact numeric value;
/// an integer is never rounded to meet a float. Floats are wrapped in
/// [`OrderedFloat`] so the ordering is total. Strings compare
/// lexicographically and booleans order `false` before `true`.
///
/// # Returns
/// - `Some(Ordering)`: If both values belong to the same family.
/// - `None`: Otherwise.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use quip::interpreter::{evaluator::binary::comparison::compare, value::core::Value};
///
/// assert_eq!(compare(&Value::Integer(2), &Value::Float(2.5)), Some(Ordering::Less));
/// assert_eq!(compare(&Value::Bool(true), &Value::Bool(false)), Some(Ordering::Greater));
/// assert_eq!(compare(&Value::Integer(1), &Value::from("1")), None);
/// ```
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::{Bool, Float, Integer, Str};

    match (left, right) {
        (Integer(a), Integer(b)) => Some(a.cmp(b)),
        (Float(a), Float(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Integer(a), Float(b)) => Some(compare_i64_f64(*a, *b)),
        (Float(a), Integer(b)) => Some(compare_i64_f64(*b, *a).reverse()),
        (Str(a), Str(b)) => Some(a.cmp(b)),
        (Bool(a), Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `==` and `!=` are defined for every pair of values: values of different
/// type families are simply unequal. The ordering operators require both
/// operands to be in the same family and report a type error otherwise.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use quip::{
///     ast::ComparisonOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let a = Value::Integer(3);
/// let b = Value::Float(3.0);
///
/// let result = eval_comparison(ComparisonOperator::Equal, &a, &b, 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
///
/// let result = eval_comparison(ComparisonOperator::NotEqual, &a, &Value::from("3"), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
///
/// assert!(eval_comparison(ComparisonOperator::Less, &a, &Value::Bool(true), 1).is_err());
/// ```
pub fn eval_comparison(op: ComparisonOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let ordering = compare(left, right);
    let ordered = || {
        ordering.ok_or_else(|| RuntimeError::TypeError { details: format!("Cannot compare {} and {} with {op}",
                                                                          left.type_name(),
                                                                          right.type_name()),
                                                         line })
    };

    Ok(Value::Bool(match op {
                       ComparisonOperator::Equal => ordering == Some(Ordering::Equal),
                       ComparisonOperator::NotEqual => ordering != Some(Ordering::Equal),
                       ComparisonOperator::Less => ordered()?.is_lt(),
                       ComparisonOperator::Greater => ordered()?.is_gt(),
                       ComparisonOperator::LessEqual => ordered()?.is_le(),
                       ComparisonOperator::GreaterEqual => ordered()?.is_ge(),
                   }))
}
