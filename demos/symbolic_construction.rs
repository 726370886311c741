use RustedSymbolics::symbolic::expression::Expression;
use RustedSymbolics::symbols;

fn main() {
    // SOME USEFUL FEATURES
    // a symbolic expression is defined directly from variables and literals,
    // there is no parser in this crate
    // first define symbolic variables
    let vector_of_symbolic_vars = Expression::symbols("a, b, c");
    println!("vector_of_symbolic_vars = {:?}", vector_of_symbolic_vars);
    let (a, b, c) = (
        vector_of_symbolic_vars[0].clone(),
        vector_of_symbolic_vars[1].clone(),
        vector_of_symbolic_vars[2].clone(),
    );
    // construct a symbolic expression with the overloaded operators
    let symbolic_expression = a + b * c;
    println!("symbolic_expression = {:?}", symbolic_expression);
    // the same printed in canonical form: every binary node gets parentheses
    println!("rendered: {}", symbolic_expression);
    // if you want to change a variable into a constant:
    let expression_with_const = symbolic_expression.bind("a", 1.0);
    println!("expression_with_const = {}", expression_with_const);

    // the macro version is terser and gives a tuple of variables
    let (x, y) = symbols!(x, y);
    let mut acc = x.clone() * y;
    // the assign operators stack more terms on top
    acc += Expression::literal(2.0) * x;
    println!("acc = {}", acc);
    println!("variables of acc: {:?}", acc.variables());
    // negation is sugar for multiplication by -1.0
    println!("negated: {}", -acc);
}
