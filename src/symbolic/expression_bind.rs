//! # Expression Binding Module
//!
//! This module substitutes values for named variables inside an expression
//! tree. Binding is purely structural: matching variables are swapped for the
//! new payload, the path above them is rebuilt, and nothing is folded or
//! simplified along the way.
//!
//! ## Key Methods
//! - `bind(name, value)` - Replace one variable with a numerical literal
//! - `bind_map(values)` - Replace many variables in a single traversal
//! - `substitute(name, replacement)` - Splice a whole expression in place of a variable
//!
//! Unknown names are a no-op: binding a variable that never occurs returns a
//! structurally equal tree.

use crate::symbolic::expression::Expression;
use std::collections::HashMap;

impl Expression {
    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Recursively traverses the expression tree and replaces all occurrences
    /// of the named variable (exact, case-sensitive match) with a literal
    /// carrying the given value. Binding never simplifies: the returned tree
    /// has the same shape with literals where the variable used to be.
    ///
    /// # Arguments
    /// * `name` - Name of the variable to substitute
    /// * `value` - Numerical value to substitute for the variable
    ///
    /// # Returns
    /// New expression with the variable bound
    ///
    /// # Examples
    /// ```
    /// use RustedSymbolics::symbolic::expression::Expression;
    /// let expr = Expression::literal(8.0) * Expression::variable("x") + Expression::literal(8.0);
    /// let bound = expr.bind("x", 4.0);
    /// assert_eq!(bound.to_text(), "((8.0 * 4.0) + 8.0)");
    /// ```
    pub fn bind(&self, name: &str, value: f64) -> Expression {
        match self {
            Expression::Literal(_) => self.clone(),
            Expression::Variable(var) if var == name => Expression::Literal(value),
            Expression::Variable(_) => self.clone(),
            Expression::Addition(lhs, rhs) => Expression::Addition(
                Box::new(lhs.bind(name, value)),
                Box::new(rhs.bind(name, value)),
            ),
            Expression::Multiplication(lhs, rhs) => Expression::Multiplication(
                Box::new(lhs.bind(name, value)),
                Box::new(rhs.bind(name, value)),
            ),
        }
    }

    /// Substitutes multiple variables with constant values using a HashMap.
    ///
    /// More efficient than multiple bind calls when substituting many
    /// variables. Only variables present in the map are substituted.
    ///
    /// # Arguments
    /// * `values` - HashMap mapping variable names to their replacement values
    ///
    /// # Returns
    /// New expression with all mapped variables bound
    pub fn bind_map(&self, values: &HashMap<String, f64>) -> Expression {
        match self {
            Expression::Literal(_) => self.clone(),
            Expression::Variable(name) if values.contains_key(name) => {
                Expression::Literal(values[name])
            }
            Expression::Variable(_) => self.clone(),
            Expression::Addition(lhs, rhs) => Expression::Addition(
                Box::new(lhs.bind_map(values)),
                Box::new(rhs.bind_map(values)),
            ),
            Expression::Multiplication(lhs, rhs) => Expression::Multiplication(
                Box::new(lhs.bind_map(values)),
                Box::new(rhs.bind_map(values)),
            ),
        }
    }

    /// substitute a variable with an expression
    pub fn substitute(&self, name: &str, replacement: &Expression) -> Expression {
        match self {
            Expression::Literal(_) => self.clone(),
            Expression::Variable(var) if var == name => replacement.clone(),
            Expression::Variable(_) => self.clone(),
            Expression::Addition(lhs, rhs) => Expression::Addition(
                Box::new(lhs.substitute(name, replacement)),
                Box::new(rhs.substitute(name, replacement)),
            ),
            Expression::Multiplication(lhs, rhs) => Expression::Multiplication(
                Box::new(lhs.substitute(name, replacement)),
                Box::new(rhs.substitute(name, replacement)),
            ),
        }
    }
}
