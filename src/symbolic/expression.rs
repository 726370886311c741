//! # Symbolic Expression Module
//!
//! This module provides the core symbolic expression type: an immutable tree
//! over floating point literals and named variables, closed under addition and
//! multiplication. It is the foundation the binding, simplification and
//! differentiation modules build on.
//!
//! ## Purpose
//!
//! The expression core allows users to:
//! - Create expressions from literals, variables and the `+` and `*` operators
//! - Print expressions in a canonical fully parenthesized form
//! - Inspect expressions: collect variable names, test for zero, extract literal payloads
//! - Bundle several variables at once with `symbols` and the `symbols!` macro
//!
//! ## Main Structures and Methods
//!
//! ### `Expression` Enum
//! The core symbolic expression type supporting:
//! - **Literals**: `Literal(f64)` - numerical constants
//! - **Variables**: `Variable(String)` - symbolic variables like "x", "y"
//! - **Operations**: `Addition`, `Multiplication` - binary arithmetic nodes
//!
//! There is deliberately no subtraction, division or power node: negation is
//! sugar for multiplication by -1.0, and the four variants stay a closed set
//! so every consumer can match on them exhaustively.
//!
//! ### Key Methods
//! - `literal(value: f64)` / `variable(name: &str)` - Explicit constructors
//! - `symbols(names: &str)` - Create multiple variables from comma-separated string
//! - `to_text()` - Canonical rendering, same as the Display output
//! - `variables()` - Sorted, deduplicated variable names in the tree
//!
//! Every constructor preserves exactly the shape it was asked for; nothing is
//! folded or rewritten until `simplify` is called.

use itertools::Itertools;
use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// Each variant represents a different type of mathematical construct. The enum uses
/// Box<Expression> for recursive structures, allowing arbitrarily deep expression trees.
/// Values are immutable: every operation on an expression returns a fresh tree.
///
/// Structural equality is derived via PartialEq; literal payloads compare by f64
/// equality, so trees carrying NaN are not equal to themselves. There is no Eq.
///
/// # Examples
/// ```
/// use RustedSymbolics::symbolic::expression::Expression;
/// let x = Expression::variable("x");
/// let expr = x + Expression::literal(2.0);
/// assert_eq!(expr.to_text(), "(x + 2.0)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// Numerical literal value
    Literal(f64),
    /// Symbolic variable with a name (e.g., "x", "y", "velocity")
    Variable(String),
    /// Addition operation: left + right
    Addition(Box<Expression>, Box<Expression>),
    /// Multiplication operation: left * right
    Multiplication(Box<Expression>, Box<Expression>),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Every binary node is wrapped in parentheses with one space around the
/// operator, so the printed text mirrors the tree shape exactly and needs no
/// precedence reasoning to read back. Literals keep their fractional part
/// (`8.0`, not `8`) and non-finite payloads print as `NaN`, `inf`, `-inf`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(val) => write!(f, "{:?}", val),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Addition(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expression::Multiplication(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
        }
    }
}

impl std::ops::Add for Expression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expression::Addition(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expression::Multiplication(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expression {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expression::Addition(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expression {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expression::Multiplication(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expression::Multiplication(Box::new(Expression::Literal(-1.0)), Box::new(self))
    }
}

impl Expression {
    //___________________________________CONSTRUCTION____________________________________

    /// Creates a literal expression carrying a numerical value.
    pub fn literal(value: f64) -> Expression {
        Expression::Literal(value)
    }

    /// Creates a variable expression with the given name.
    pub fn variable(name: &str) -> Expression {
        Expression::Variable(name.to_string())
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing variable names separated by commas and returns
    /// a vector of Expression::Variable instances. Whitespace is automatically
    /// trimmed and empty items are skipped.
    ///
    /// # Arguments
    /// * `names` - Comma-separated string of variable names (e.g., "x, y, z")
    ///
    /// # Returns
    /// Vector of Expression::Variable instances for each variable name
    ///
    /// # Examples
    /// ```
    /// use RustedSymbolics::symbolic::expression::Expression;
    /// let vars = Expression::symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// assert_eq!(vars[0], Expression::variable("x"));
    /// ```
    pub fn symbols(names: &str) -> Vec<Expression> {
        let names = names.to_string();
        let vec_trimmed: Vec<String> = names.split(',').map(|s| s.trim().to_string()).collect();
        let vector_of_symbolic_vars: Vec<Expression> = vec_trimmed
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| Expression::Variable(s.to_string()))
            .collect();
        vector_of_symbolic_vars
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    ///
    /// Essential for creating nested expressions since Expression variants use Box<Expression>.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    //___________________________________INSPECTION____________________________________

    /// Converts the expression to its canonical text form.
    ///
    /// Same string the Display implementation produces: fully parenthesized,
    /// literals in decimal form.
    pub fn to_text(&self) -> String {
        format!("{}", self)
    }

    /// Checks if expression is exactly zero (literal 0.0).
    ///
    /// # Returns
    /// true if expression is Literal(0.0), false otherwise
    pub fn is_zero(&self) -> bool {
        match self {
            Expression::Literal(val) => val == &0.0,
            Expression::Variable(_)
            | Expression::Addition(_, _)
            | Expression::Multiplication(_, _) => false,
        }
    }

    /// Returns the numerical payload if the expression is a single literal.
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Expression::Literal(val) => Some(*val),
            Expression::Variable(_)
            | Expression::Addition(_, _)
            | Expression::Multiplication(_, _) => None,
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expression::Literal(_) => false,
            Expression::Variable(name) => name == var_name,
            Expression::Addition(left, right) | Expression::Multiplication(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
        }
    }

    /// Returns all distinct variable names found in the expression.
    ///
    /// Names are collected recursively, then sorted and deduplicated, so the
    /// result does not depend on the tree shape.
    ///
    /// # Returns
    /// Sorted vector of unique variable names
    pub fn variables(&self) -> Vec<String> {
        let mut vars: Vec<String> = Vec::new();
        match self {
            Expression::Literal(_) => {}
            Expression::Variable(name) => {
                vars.push(name.clone());
            }
            Expression::Addition(lhs, rhs) | Expression::Multiplication(lhs, rhs) => {
                vars.extend(lhs.variables());
                vars.extend(rhs.variables());
            }
        }
        vars.into_iter().sorted().dedup().collect()
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variables x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = $crate::symbolic::expression::Expression::symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}
