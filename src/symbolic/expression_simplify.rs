//! # Expression Simplification Module
//!
//! This module provides algebraic cleanup for expression trees built by the
//! constructors and the differentiation rules. It implements a deliberately
//! small rule set applied in a single structural pass:
//!
//! 1. **Constant Folding**: Evaluates arithmetic on pairs of literals
//! 2. **Zero Elimination**: Strips `0 + x`, `x + 0` and collapses `0 * x`, `x * 0`
//! 3. **Identity Multiplication**: Strips `1 * x` and `x * 1`
//!
//! ## One pass per call
//!
//! A single `simplify` call makes one rule decision per node, judged against
//! the operands the node had when the call began. Reductions that only become
//! visible after a child has been rewritten are picked up by the next call,
//! so callers iterate until the rendering (or the tree) stops changing.
//! There is intentionally no internal fixed-point loop and no rewrite-rule
//! machinery beyond the three rule families above: term collection,
//! reassociation and the like are out of this kernel's scope.

use crate::symbolic::expression::Expression;

impl Expression {
    //___________________________________SIMPLIFICATION____________________________________

    /// Performs one simplification pass and returns the reduced tree.
    ///
    /// Leaves are returned unchanged. At every binary node the rules below are
    /// checked against the operands in their original shape, first match wins:
    ///
    /// ### Addition
    /// - both operands literal: fold to their sum
    /// - left operand is 0.0: result is the simplified right operand
    /// - right operand is 0.0: result is the simplified left operand
    /// - otherwise: rebuild from the simplified operands
    ///
    /// ### Multiplication
    /// - both operands literal: fold to their product
    /// - either operand is 0.0: result is literal 0.0, the other side is
    ///   discarded unexamined (absorption is checked before the identity rule)
    /// - left operand is 1.0: result is the simplified right operand
    /// - right operand is 1.0: result is the simplified left operand
    /// - otherwise: rebuild from the simplified operands
    ///
    /// Zero and one tests use f64 equality, so -0.0 counts as zero and a NaN
    /// payload matches no rule and simply folds or flows through.
    ///
    /// ## Reaching a fixed point
    ///
    /// One call is one pass. In `(x * 0.0) + 5.0` the first call rewrites the
    /// left child to 0.0 and returns `(0.0 + 5.0)`; only the second call folds
    /// that to `5.0`. Run the pass until the output stops changing:
    ///
    /// ```
    /// use RustedSymbolics::symbolic::expression::Expression;
    /// let expr = Expression::variable("x") * Expression::literal(0.0) + Expression::literal(5.0);
    /// let once = expr.simplify();
    /// assert_eq!(once.to_text(), "(0.0 + 5.0)");
    /// let twice = once.simplify();
    /// assert_eq!(twice.to_text(), "5.0");
    /// assert_eq!(twice.simplify(), twice);
    /// ```
    ///
    /// A tree of nothing but literals reaches a single literal in at most
    /// depth-many calls; a tree already in normal form is a fixed point.
    ///
    /// # Returns
    /// New expression with one round of rules applied
    pub fn simplify(&self) -> Expression {
        match self {
            Expression::Literal(_) => self.clone(),
            Expression::Variable(_) => self.clone(),
            Expression::Addition(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
                (Expression::Literal(a), Expression::Literal(b)) => Expression::Literal(a + b), // (a) + (b) = (a + b)
                (Expression::Literal(0.0), _) => rhs.simplify(), // 0 + x = x
                (_, Expression::Literal(0.0)) => lhs.simplify(), // x + 0 = x
                (_, _) => Expression::Addition(Box::new(lhs.simplify()), Box::new(rhs.simplify())),
            },
            Expression::Multiplication(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
                (Expression::Literal(a), Expression::Literal(b)) => Expression::Literal(a * b), // (a) * (b) = (a * b)
                (Expression::Literal(0.0), _) | (_, Expression::Literal(0.0)) => {
                    Expression::Literal(0.0) // 0 * x = 0
                }
                (Expression::Literal(1.0), _) => rhs.simplify(), // 1 * x = x
                (_, Expression::Literal(1.0)) => lhs.simplify(), // x * 1 = x
                (_, _) => Expression::Multiplication(
                    Box::new(lhs.simplify()),
                    Box::new(rhs.simplify()),
                ),
            },
        }
    }
}
