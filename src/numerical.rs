///  Example#1
/// ```
/// // the shortest way: integrate a closure with one method
/// use RustedQuad::numerical::quadrature::simpson_runge::simpson_runge;
/// let integral = simpson_runge(|x: f64| x.exp(), 0.0, 1.0, 1e-8).unwrap();
/// assert!((integral - (std::f64::consts::E - 1.0)).abs() < 1e-8);
/// ```
/// Example#2
/// ```
/// // or the problem defined by strings, all methods at once
/// use RustedQuad::numerical::Quad_api::{Quadrature, QuadMethod};
/// let mut quad = Quadrature::new();
/// quad.set_problem_from_str("1/(1 + x^2)", "0", "1", 8).unwrap();
/// quad.set_loglevel(Some("off".to_string())).unwrap();
/// quad.solve().unwrap();
/// for (method, result) in quad.results() {
///     println!("{}: {:?}", method, result);
/// }
/// println!("{}", quad.statistics_table());
/// ```
pub mod Quad_api;
/// trapezoid, Simpson-Runge and Gauss-Legendre integrators, Legendre roots and weights,
/// finite-difference derivatives
pub mod quadrature;
