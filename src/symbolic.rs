#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Expression core
/// a module holding the symbolic expression tree itself
/// 1) build expressions from literals, named variables and the + and * operators
/// 2) print expressions in canonical fully parenthesized form
/// 3) inspect expressions: collect variables, test for zero, extract literal payloads
///# Example
/// ```
/// use RustedSymbolics::symbolic::expression::Expression;
/// use RustedSymbolics::symbols;
/// let (x, y) = symbols!(x, y);
/// let expr = x * y + Expression::literal(2.0);
/// println!("expr = {}", expr);
/// assert_eq!(expr.to_text(), "((x * y) + 2.0)");
/// assert_eq!(expr.variables(), vec!["x".to_string(), "y".to_string()]);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expression;
///____________________________________________________________________________________________________________________________
/// # Variable binding
/// a module
/// 1) binds a named variable to a number throughout the tree
/// 2) binds many variables at once from a map
/// 3) splices a whole expression in place of a variable
///
/// binding never folds anything: the tree keeps its shape until simplify is called
///# Example
/// ```
/// use RustedSymbolics::symbolic::expression::Expression;
/// let expr = Expression::literal(8.0) * Expression::variable("x") + Expression::literal(8.0);
/// // bind x to a number; nothing is folded yet
/// let bound = expr.bind("x", 4.0);
/// assert_eq!(bound.to_text(), "((8.0 * 4.0) + 8.0)");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expression_bind;
///____________________________________________________________________________________________________________________________
/// # Simplification
/// one pass of constant folding and identity rules per call; run the pass
/// repeatedly to reach a fixed point
///# Example
/// ```
/// use RustedSymbolics::symbolic::expression::Expression;
/// let expr = Expression::literal(8.0) * Expression::variable("x") + Expression::literal(8.0);
/// let bound = expr.bind("x", 4.0);
/// // first pass folds the product, second pass folds the sum
/// let once = bound.simplify();
/// assert_eq!(once.to_text(), "(32.0 + 8.0)");
/// let twice = once.simplify();
/// assert_eq!(twice.to_text(), "40.0");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expression_simplify;
///____________________________________________________________________________________________________________________________
/// # Derivatives
/// symbolic partial differentiation with respect to a chosen variable;
/// other variables are treated as constant symbols
///# Example
/// ```
/// use RustedSymbolics::symbolic::expression::Expression;
/// let x = Expression::variable("x");
/// let square = x.clone() * x;
/// let derivative = square.differentiate("x");
/// // raw product rule output, then one cleanup pass
/// assert_eq!(derivative.to_text(), "((1.0 * x) + (x * 1.0))");
/// assert_eq!(derivative.simplify().to_text(), "(x + x)");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod expression_derivatives;
