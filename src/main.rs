#![allow(non_snake_case)]
use RustedSymbolics::symbolic::expression::Expression;
use RustedSymbolics::symbols;
use itertools::Itertools;
use log::{info, warn};
use simplelog::*;
use std::collections::HashMap;

/// run the simplification pass until the tree stops changing
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
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {}
        Err(e) => println!("logger already set up: {}", e),
    }

    // SINGLE VARIABLE WALKTHROUGH
    // build 4*x*x + 8*x + 16 with the operator combinators; the tree keeps
    // exactly the shape written here until simplify is called
    let x = Expression::variable("x");
    let poly = Expression::literal(4.0) * x.clone() * x.clone()
        + Expression::literal(8.0) * x.clone()
        + Expression::literal(16.0);
    info!("poly = {}", poly);

    // raw product rule output first, then settle it pass by pass
    let derivative = poly.differentiate("x");
    info!("d(poly)/dx raw = {}", derivative);
    info!("d(poly)/dx settled = {}", settle(&derivative));

    // bind x and fold the tree down to a single number
    let bound = poly.bind("x", 4.0);
    info!("poly at x = 4: {}", bound);
    let value = settle(&bound);
    match value.as_literal() {
        Some(v) => info!("poly(4) = {}", v),
        None => warn!("poly(4) did not fold to a literal: {}", value),
    }

    // FUNCTION OF MULTIPLE VARIABLES
    // gradient of x*y + 4*x, driven by the variable list
    let (x, y) = symbols!(x, y);
    let mixed = x.clone() * y.clone() + Expression::literal(4.0) * x.clone();
    let var_names = mixed.variables();
    info!("mixed = {}, variables: {}", mixed, var_names.iter().join(", "));
    for name in &var_names {
        let partial = settle(&mixed.differentiate(name));
        info!("d(mixed)/d{} = {}", name, partial);
    }

    // evaluate the gradient at a point with one map traversal per component
    let mut point = HashMap::new();
    point.insert("x".to_string(), 2.0);
    point.insert("y".to_string(), 3.0);
    for name in &var_names {
        let partial = mixed.differentiate(name).bind_map(&point);
        match settle(&partial).as_literal() {
            Some(v) => info!("d(mixed)/d{} at (2, 3) = {}", name, v),
            None => warn!("gradient component {} did not fold", name),
        }
    }
}
