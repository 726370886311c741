use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use RustedSymbolics::symbolic::expression::Expression;

fn nested_product(depth: usize) -> Expression {
    let x = Expression::variable("x");
    let mut expr = x.clone();
    for _ in 0..depth {
        expr = expr * x.clone();
    }
    expr
}

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

fn bench_build_and_render(c: &mut Criterion) {
    c.bench_function("build and render polynomial", |b| {
        b.iter(|| {
            let x = Expression::variable("x");
            let poly = Expression::literal(4.0) * x.clone() * x.clone()
                + Expression::literal(8.0) * x.clone()
                + Expression::literal(16.0);
            black_box(poly.to_text())
        })
    });
}

fn bench_settle_bound_polynomial(c: &mut Criterion) {
    let x = Expression::variable("x");
    let poly = Expression::literal(4.0) * x.clone() * x.clone()
        + Expression::literal(8.0) * x.clone()
        + Expression::literal(16.0);
    let bound = poly.bind("x", 4.0);
    c.bench_function("settle bound polynomial", |b| b.iter(|| black_box(settle(&bound))));
}

// the product rule copies both factors on every application, so the
// derivative tree roughly doubles with each extra factor
fn bench_derivative_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivative growth");
    for depth in [4, 8, 12] {
        let expr = nested_product(depth);
        group.bench_function(format!("product depth {}", depth), |b| {
            b.iter(|| black_box(expr.differentiate("x")))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_and_render,
    bench_settle_bound_polynomial,
    bench_derivative_growth
);
criterion_main!(benches);
