use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions. Values are dynamically typed: every operator
/// inspects the variants of its operands at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// operations (`and`, `or`, `not`). Conditions of `if` and `while` must
    /// evaluate to `Bool`.
    Bool(bool),
    /// A string value.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's type as shown in error messages.
    ///
    /// # Example
    /// ```
    /// use quip::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::from("a").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. Integers beyond `2^53` are
    /// rounded to the nearest float, the same promotion every mixed operation
    /// uses.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is a float or an integer.
    /// - `Err(RuntimeError::TypeError)`: If not numeric.
    ///
    /// # Example
    /// ```
    /// use quip::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_float(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `if` and `while`, and for the operands of `and`,
    /// `or` and `not`. No other type is implicitly truthy.
    ///
    /// # Parameters
    /// - `context`: What needed the boolean, for the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeError)`: If not boolean.
    pub fn as_bool(&self, context: &str, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { details: format!("{context} requires a boolean, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }
    /// Returns `true` if the value is [`Value::Integer`] or [`Value::Float`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole floats keep a fractional digit so `10 / 2` prints as `5.0`.
            Self::Float(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Float(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}
