//! # Quadrature
//!
//! Definite integrals of a real function of one variable over a finite interval [a, b]
//! to a requested precision epsilon. Three interchangeable methods implement the same
//! [`quad_traits::Integrator`] contract:
//!
//! - [`trapezoid::TrapezoidIntegrator`] - composite trapezoid, the number of segments is derived
//!   from the a priori error bound with M2 = max|f''| estimated by finite differences
//! - [`simpson_runge::SimpsonRungeIntegrator`] - composite Simpson rule, segments are doubled
//!   until the Runge estimate is below epsilon
//! - [`gauss_legendre::GaussLegendreIntegrator`] - Gauss-Legendre rule of fixed order (64 by default)
//!   after a smoothing cubic substitution; nodes and weights come from a Newton-Raphson
//!   Legendre root finder
//!
//! Functions are passed as [`quad_traits::Integrand`]; closures are wrapped with
//! `ClosureFunction` (or `FallibleFunction` when the evaluation can fail).
//!
//! # Example
//! ```
//! use RustedQuad::numerical::quadrature::quad_traits::{ClosureFunction, Integrator};
//! use RustedQuad::numerical::quadrature::simpson_runge::SimpsonRungeIntegrator;
//! use RustedQuad::numerical::quadrature::gauss_legendre::GaussLegendreIntegrator;
//! let f = ClosureFunction::new(|x: f64| x.sin(), "sin(x)".to_string());
//! let methods: Vec<Box<dyn Integrator>> = vec![
//!     Box::new(SimpsonRungeIntegrator::new()),
//!     Box::new(GaussLegendreIntegrator::new()),
//! ];
//! for method in methods {
//!     let value = method.integrate(&f, 0.0, std::f64::consts::PI, 1e-6).unwrap();
//!     assert!((value - 2.0).abs() < 1e-6);
//! }
//! ```
/// error type, function wrappers, the integrator trait and configuration
pub mod quad_traits;
/// uniform grids and finite-difference derivatives
pub mod quad_utils;
pub mod trapezoid;
pub mod simpson_runge;
/// Legendre root/weight generator and the Gauss-Legendre integrator
pub mod gauss_legendre;
