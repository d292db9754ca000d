// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::numerical::Quad_api::{QuadMethod, Quadrature};
use crate::numerical::quadrature::gauss_legendre::{GaussLegendreIntegrator, GaussLegendreTable};
use crate::numerical::quadrature::quad_traits::{
    ClosureFunction, FallibleFunction, Integrator, QuadConfig, QuadError,
};
use crate::numerical::quadrature::quad_utils::{Stencil, derivative, derivative_with_stencil, linspace};
use crate::numerical::quadrature::simpson_runge::SimpsonRungeIntegrator;
use crate::numerical::quadrature::trapezoid::TrapezoidIntegrator;
use crate::symbolic::symbolic_function::compile;
use std::f64::consts::PI;

pub fn quad_examples(example: usize) -> Result<(), QuadError> {
    match example {
        0 => {
            // the problem the desktop calculator opens with: sin(x) on [0, pi], 6 digits
            let mut quad = Quadrature::new();
            quad.set_problem_from_str("sin(x)", "0", "pi", 6)?;
            quad.solve()?;
            for (method, result) in quad.results() {
                match result {
                    Ok(res) => println!("{} ({}): {}", method, method.description(), res.value),
                    Err(e) => println!("{}: {}", method, e),
                }
            }
        }
        1 => {
            // closures and the Integrator trait, every method on the same function
            let f = ClosureFunction::new(|x: f64| (-x * x).exp(), "exp(-x^2)".to_string());
            let methods: Vec<Box<dyn Integrator>> = vec![
                Box::new(TrapezoidIntegrator::new()),
                Box::new(SimpsonRungeIntegrator::new()),
                Box::new(GaussLegendreIntegrator::new()),
            ];
            for method in methods.iter() {
                let res = method.integrate_detailed(&f, -2.0, 2.0, 1e-8)?;
                println!(
                    "{}: {} error estimate {:?}, {} evaluations",
                    res.method, res.value, res.error_estimate, res.evaluations
                );
            }
        }
        2 => {
            // task document
            let task = "integral
                function: x * sin(x)
                lower: 0
                upper: 2*pi
                digits: 8
                methods: simpson, gauss
                solver_settings
                gauss_order: 32
                parallel: true
                loglevel: info";
            let mut quad = Quadrature::from_task_document(task)?;
            quad.solve()?;
            println!("exact value: {}", -2.0 * PI);
            println!("{}", quad.statistics_table());
        }
        3 => {
            // Legendre roots and weights
            for order in [1, 2, 3, 5] {
                let table = GaussLegendreTable::generate(order, 1e-15, 100)?;
                let (nodes, weights) = table.full_rule();
                println!("order {}: nodes {:?}", order, nodes);
                println!("order {}: weights {:?}", order, weights);
            }
        }
        4 => {
            // finite-difference derivatives and uniform grids
            let f = ClosureFunction::new(|x: f64| x.sin(), "sin(x)".to_string());
            for x in linspace(5, 0.0, PI) {
                let d1 = derivative(&f, x, 1)?;
                let d2 = derivative(&f, x, 2)?;
                println!("x = {:.4}: f' = {:.8} (cos = {:.8}), f'' = {:.6}", x, d1, x.cos(), d2);
            }
            // at the left end of sqrt only a forward stencil stays in the domain
            let g = compile("sqrt(x)")?;
            let d = derivative_with_stencil(&g, 1.0, 1, Stencil::Forward)?;
            println!("d/dx {} at 1 = {} (parsed as {})", g.text(), d, g.expression());
        }
        5 => {
            // refinement: smaller epsilon, more work, smaller error
            let exact = 2.0;
            for digits in 2..=10 {
                let eps = 10f64.powi(-digits);
                let f = ClosureFunction::new(|x: f64| x.sin(), "sin(x)".to_string());
                let trap = TrapezoidIntegrator::new().integrate_detailed(&f, 0.0, PI, eps)?;
                let simp = SimpsonRungeIntegrator::new().integrate_detailed(&f, 0.0, PI, eps)?;
                println!(
                    "eps = {:e}: trapezoid error {:.2e} ({} segments), simpson error {:.2e} ({} rounds)",
                    eps,
                    (trap.value - exact).abs(),
                    trap.iterations,
                    (simp.value - exact).abs(),
                    simp.iterations
                );
            }
        }
        6 => {
            // failures are results too
            let f = FallibleFunction::new(
                |x: f64| {
                    if x < 1.0 {
                        Ok(1.0 / (1.0 - x).sqrt())
                    } else {
                        Err("singular at x = 1".to_string())
                    }
                },
                "1/sqrt(1 - x)".to_string(),
            );
            let mut config = QuadConfig::default();
            config.max_refinements = 8;
            let simpson = SimpsonRungeIntegrator::with_config(config);
            println!("simpson: {:?}", simpson.integrate(&f, 0.0, 1.0, 1e-6));
            // Gauss-Legendre never samples the end points
            println!(
                "gauss: {:?} (exact 2)",
                GaussLegendreIntegrator::new().integrate(&f, 0.0, 1.0, 1e-6)
            );
            let mut quad = Quadrature::new();
            quad.set_problem_from_str("ln(x)", "0", "1", 6)?;
            quad.set_methods(vec![QuadMethod::Trapezoid, QuadMethod::GaussLegendre])?;
            quad.solve()?;
        }
        _ => println!("no example with number {}", example),
    }
    Ok(())
}
