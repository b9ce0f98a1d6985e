/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: integers, floats, booleans and strings.
/// It is used in the AST to represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, with escapes already resolved.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every expression evaluates to exactly one value. Each variant records the
/// line of the token it starts with, or of its operator for binary nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call to `input()`, reading one line of text.
    Input {
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quip::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Input { line } => *line,
        }
    }
}

/// Represents a statement.
///
/// A program is a sequence of statements; `if` and `while` own the statement
/// sequences of their blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expr>`, writing the value followed by a newline.
    Print {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if (<condition>) { ... } else { ... }`.
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise, if an `else` block was given.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (<condition>) { ... }`.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number of the statement's first token.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Arithmetic operators: `+`, `-`, `*` and `/`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Comparison operators: `<`, `>`, `<=`, `>=`, `==` and `!=`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

/// Logical connectives: `and` and `or`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A binary operator split by the family of values it works on.
///
/// The evaluator dispatches on this so each family is matched exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorFamily {
    Arithmetic(ArithmeticOperator),
    Comparison(ComparisonOperator),
    Logical(LogicalOperator),
}

impl BinaryOperator {
    /// Returns the family this operator belongs to.
    ///
    /// # Example
    /// ```
    /// use quip::ast::{BinaryOperator, ComparisonOperator, OperatorFamily};
    ///
    /// assert_eq!(BinaryOperator::LessEqual.family(),
    ///            OperatorFamily::Comparison(ComparisonOperator::LessEqual));
    /// ```
    #[must_use]
    pub const fn family(self) -> OperatorFamily {
        use OperatorFamily::{Arithmetic, Comparison, Logical};

        match self {
            Self::Add => Arithmetic(ArithmeticOperator::Add),
            Self::Sub => Arithmetic(ArithmeticOperator::Sub),
            Self::Mul => Arithmetic(ArithmeticOperator::Mul),
            Self::Div => Arithmetic(ArithmeticOperator::Div),
            Self::Less => Comparison(ComparisonOperator::Less),
            Self::Greater => Comparison(ComparisonOperator::Greater),
            Self::LessEqual => Comparison(ComparisonOperator::LessEqual),
            Self::GreaterEqual => Comparison(ComparisonOperator::GreaterEqual),
            Self::Equal => Comparison(ComparisonOperator::Equal),
            Self::NotEqual => Comparison(ComparisonOperator::NotEqual),
            Self::And => Logical(LogicalOperator::And),
            Self::Or => Logical(LogicalOperator::Or),
        }
    }
}

impl From<ArithmeticOperator> for BinaryOperator {
    fn from(op: ArithmeticOperator) -> Self {
        match op {
            ArithmeticOperator::Add => Self::Add,
            ArithmeticOperator::Sub => Self::Sub,
            ArithmeticOperator::Mul => Self::Mul,
            ArithmeticOperator::Div => Self::Div,
        }
    }
}

impl From<ComparisonOperator> for BinaryOperator {
    fn from(op: ComparisonOperator) -> Self {
        match op {
            ComparisonOperator::Less => Self::Less,
            ComparisonOperator::Greater => Self::Greater,
            ComparisonOperator::LessEqual => Self::LessEqual,
            ComparisonOperator::GreaterEqual => Self::GreaterEqual,
            ComparisonOperator::Equal => Self::Equal,
            ComparisonOperator::NotEqual => Self::NotEqual,
        }
    }
}

impl From<LogicalOperator> for BinaryOperator {
    fn from(op: LogicalOperator) -> Self {
        match op {
            LogicalOperator::And => Self::And,
            LogicalOperator::Or => Self::Or,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        BinaryOperator::from(*self).fmt(f)
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        BinaryOperator::from(*self).fmt(f)
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        BinaryOperator::from(*self).fmt(f)
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
        };
        write!(f, "{operator}")
    }
}
