//! # Expression Derivatives Module
//!
//! This module extends the expression core with symbolic differentiation.
//! Derivatives are built by the classic recursive rules and returned raw:
//! no folding, no cleanup. Feed the result to `simplify` (repeatedly) to get
//! a readable form.
//!
//! ## Purpose
//!
//! - **Analytical Differentiation**: Automatic symbolic differentiation using calculus rules
//! - **Partial Semantics**: One variable at a time, every other variable is a constant symbol
//! - **Composability**: The derivative is an ordinary expression, so it can be
//!   bound, simplified and differentiated again

use crate::symbolic::expression::Expression;

impl Expression {
    /// Computes the symbolic partial derivative with respect to a variable.
    ///
    /// Rules, applied recursively:
    /// - literals differentiate to 0.0
    /// - the matched variable differentiates to 1.0, any other variable to 0.0
    /// - sums differentiate term by term
    /// - products follow the product rule, pairing each differentiated factor
    ///   with a clone of the other factor exactly as it appeared in the input
    ///
    /// The output is intentionally left unsimplified; `d(x*x)/dx` comes back
    /// as `((1.0 * x) + (x * 1.0))`. Nested products grow the result tree
    /// quickly since both factors are copied at every application of the
    /// product rule, which is the price of keeping the rules this simple.
    ///
    /// # Arguments
    /// * `var` - Name of the variable to differentiate by
    ///
    /// # Returns
    /// New expression holding the raw derivative
    ///
    /// # Examples
    /// ```
    /// use RustedSymbolics::symbolic::expression::Expression;
    /// let x = Expression::variable("x");
    /// let y = Expression::variable("y");
    /// let product = x * y;
    /// // y is treated as a constant symbol under d/dx
    /// assert_eq!(product.differentiate("x").to_text(), "((1.0 * y) + (x * 0.0))");
    /// ```
    pub fn differentiate(&self, var: &str) -> Expression {
        match self {
            Expression::Literal(_) => Expression::Literal(0.0),
            Expression::Variable(name) => {
                if name == var {
                    Expression::Literal(1.0)
                } else {
                    Expression::Literal(0.0)
                }
            }
            Expression::Addition(lhs, rhs) => Expression::Addition(
                Box::new(lhs.differentiate(var)),
                Box::new(rhs.differentiate(var)),
            ),
            Expression::Multiplication(lhs, rhs) => Expression::Addition(
                Box::new(Expression::Multiplication(
                    Box::new(lhs.differentiate(var)),
                    rhs.clone(),
                )),
                Box::new(Expression::Multiplication(
                    lhs.clone(),
                    Box::new(rhs.differentiate(var)),
                )),
            ),
        }
    }
}
