#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// ________________________________________________________________________________________________________________________________
/// # Parser
/// turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedQuad::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("exp(-x^2) * cos(x)").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let all = parsed_expression.all_arguments_are_variables();
/// assert_eq!(all, vec!["x".to_string()]);
///  ```
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// expression tree, operator overloading, variable bookkeeping
pub mod symbolic_engine;
/// turns a symbolic expression into a Rust closure
pub mod symbolic_lambdify;
///____________________________________________________________________________________________________________________________
/// # Integrand from a string
///# Example
/// ```
/// use RustedQuad::symbolic::symbolic_function::compile;
/// use RustedQuad::numerical::quadrature::quad_traits::Integrator;
/// use RustedQuad::numerical::quadrature::gauss_legendre::GaussLegendreIntegrator;
/// let f = compile("1/(1 + x^2)").unwrap();
/// let value = GaussLegendreIntegrator::new().integrate(&f, 0.0, 1.0, 1e-10).unwrap();
/// assert!((value - std::f64::consts::PI / 4.0).abs() < 1e-10);
/// ```
pub mod symbolic_function;
