use RustedSymbolics::symbolic::expression::Expression;
use std::collections::HashMap;

// the library supplies one pass per simplify call; drivers loop until the
// tree settles
fn settle(expr: &Expression) -> Expression {
    let mut current = expr.clone();
    loop {
        let next = current.simplify();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn main() {
    // FUNCTION OF 1 VARIABLE
    // build 8*x + 8 and walk it through bind and simplify
    let f = Expression::literal(8.0) * Expression::variable("x") + Expression::literal(8.0);
    println!("f = {}", f);
    let bound = f.bind("x", 4.0);
    // binding substitutes, it never folds: the product is still visible
    println!("f at x = 4: {}", bound);
    let once = bound.simplify();
    println!("after one pass: {}", once);
    let twice = once.simplify();
    println!("after two passes: {}", twice);

    // derivative comes back raw from the product rule
    let df_dx = f.differentiate("x");
    println!("df_dx raw = {}", df_dx);
    println!("df_dx settled = {}", settle(&df_dx));

    // FUNCTION OF MULTIPLE VARIABLES
    // every variable of interest gets its own differentiate call
    let x = Expression::variable("x");
    let y = Expression::variable("y");
    let g = x.clone() * y.clone() + y.clone() * y;
    println!("g = {}", g);
    for name in g.variables() {
        let partial = settle(&g.differentiate(&name));
        println!("dg/d{} = {}", name, partial);
    }

    // evaluate the settled derivative at a point
    let mut point = HashMap::new();
    point.insert("x".to_string(), 1.0);
    point.insert("y".to_string(), 2.0);
    let dg_dy = settle(&g.differentiate("y")).bind_map(&point);
    println!("dg/dy at (1, 2) = {}", settle(&dg_dy));
}
