use std::fmt;

/// Error types for quadrature methods
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// lower bound is not strictly less than upper bound, or a bound is not finite
    InvalidInterval { a: f64, b: f64 },
    /// requested precision must be a positive finite number
    InvalidTolerance(f64),
    InvalidParameter(String),
    /// refinement stopped on its iteration cap before the precision was reached
    DidNotConverge {
        method: String,
        iterations: usize,
        estimate: f64,
        error_estimate: Option<f64>,
    },
    /// the integrand itself failed at point x
    FunctionEvaluation { x: f64, message: String },
    NumericalDegeneracy(String),
    Parse(String),
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadError::InvalidInterval { a, b } => write!(
                f,
                "Invalid interval [{}, {}]: lower bound must be finite and less than upper bound",
                a, b
            ),
            QuadError::InvalidTolerance(eps) => {
                write!(f, "Invalid tolerance {}: must be a positive number", eps)
            }
            QuadError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            QuadError::DidNotConverge {
                method,
                iterations,
                estimate,
                error_estimate,
            } => match error_estimate {
                Some(err) => write!(
                    f,
                    "{} did not converge after {} iterations (last estimate {}, error estimate {:.3e})",
                    method, iterations, estimate, err
                ),
                None => write!(
                    f,
                    "{} did not converge after {} iterations (last estimate {})",
                    method, iterations, estimate
                ),
            },
            QuadError::FunctionEvaluation { x, message } => {
                write!(f, "Function evaluation failed at x = {}: {}", x, message)
            }
            QuadError::NumericalDegeneracy(msg) => write!(f, "Numerical degeneracy: {}", msg),
            QuadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for QuadError {}
//////////////////////////////////TRAITS AND IMPLEMENTATIONS/////////////////////////////////

/// Trait for representing a function f(x) to be integrated.
/// Evaluation may fail: the error is handed to the caller of the integrator unchanged.
pub trait Integrand: Sync {
    /// Evaluate the function at point x
    fn evaluate(&self, x: f64) -> Result<f64, QuadError>;

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_function"
    }
}

/// Simple function wrapper for closures
pub struct ClosureFunction<F>
where
    F: Fn(f64) -> f64 + Sync,
{
    func: F,
    name: String,
}

impl<F> ClosureFunction<F>
where
    F: Fn(f64) -> f64 + Sync,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> Integrand for ClosureFunction<F>
where
    F: Fn(f64) -> f64 + Sync,
{
    fn evaluate(&self, x: f64) -> Result<f64, QuadError> {
        Ok((self.func)(x))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrapper for closures that can refuse to produce a value, e.g. user code
/// with its own domain checks
pub struct FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
{
    func: F,
    name: String,
}

impl<F> FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> Integrand for FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
{
    fn evaluate(&self, x: f64) -> Result<f64, QuadError> {
        (self.func)(x).map_err(|message| QuadError::FunctionEvaluation { x, message })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The quadrature contract: every method takes the same request (f, a, b, epsilon)
/// and the methods are freely interchangeable.
pub trait Integrator {
    /// Integrate and return a report with the value and convergence data
    fn integrate_detailed(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<QuadResult, QuadError>;

    /// Integrate and return the approximate value only
    fn integrate(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<f64, QuadError> {
        self.integrate_detailed(function, a, b, epsilon)
            .map(|result| result.value)
    }

    fn name(&self) -> &str;
}

///////////////////////////////////////////SETTERS AND GETTERS///////////////////////////////////////////
/// Result structure for quadrature methods. Only produced when the method reached the
/// requested precision; every failure is a `QuadError`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadResult {
    pub value: f64,
    /// a posteriori (Simpson-Runge) or a priori (trapezoid) error estimate, None for Gauss-Legendre
    pub error_estimate: Option<f64>,
    /// number of integrand evaluations
    pub evaluations: usize,
    /// refinement rounds, segment count or rule order depending on the method
    pub iterations: usize,
    pub method: String,
}

/// Configuration for quadrature methods
#[derive(Debug, Clone, PartialEq)]
pub struct QuadConfig {
    /// number of points where |f''| is sampled to estimate M2 (trapezoid)
    pub m2_candidate_count: usize,
    /// upper limit for the trapezoid segment count
    pub max_segments: usize,
    /// upper limit for the number of n -> 2n rounds (Simpson-Runge)
    pub max_refinements: usize,
    pub gauss_order: usize,
    pub max_newton_iterations: usize,
    /// evaluate sample points on the rayon thread pool
    pub parallel: bool,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            m2_candidate_count: 4096,
            max_segments: 50_000_000,
            max_refinements: 20,
            gauss_order: 64,
            max_newton_iterations: 100,
            parallel: false,
        }
    }
}

/// Checks the integration request. Every method calls this before touching the function.
pub fn validate_request(a: f64, b: f64, epsilon: f64) -> Result<(), QuadError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(QuadError::InvalidInterval { a, b });
    }
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(QuadError::InvalidTolerance(epsilon));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_function() {
        let func = ClosureFunction::new(|x| x * x - 4.0, "x^2 - 4".to_string());
        assert_eq!(func.evaluate(2.0), Ok(0.0));
        assert_eq!(func.evaluate(0.0), Ok(-4.0));
        assert_eq!(func.name(), "x^2 - 4");
    }

    #[test]
    fn test_fallible_function_reports_point() {
        let func = FallibleFunction::new(
            |x| {
                if x < 0.0 {
                    Err("negative argument".to_string())
                } else {
                    Ok(x.sqrt())
                }
            },
            "sqrt".to_string(),
        );
        assert_eq!(func.evaluate(4.0), Ok(2.0));
        assert_eq!(
            func.evaluate(-1.0),
            Err(QuadError::FunctionEvaluation {
                x: -1.0,
                message: "negative argument".to_string()
            })
        );
    }

    #[test]
    fn test_validate_request() {
        assert!(validate_request(0.0, 1.0, 1e-6).is_ok());
        assert_eq!(
            validate_request(1.0, 1.0, 1e-6),
            Err(QuadError::InvalidInterval { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            validate_request(2.0, 1.0, 1e-6),
            Err(QuadError::InvalidInterval { a: 2.0, b: 1.0 })
        );
        assert!(matches!(
            validate_request(0.0, f64::INFINITY, 1e-6),
            Err(QuadError::InvalidInterval { .. })
        ));
        assert_eq!(
            validate_request(0.0, 1.0, 0.0),
            Err(QuadError::InvalidTolerance(0.0))
        );
        assert!(matches!(
            validate_request(0.0, 1.0, f64::NAN),
            Err(QuadError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = QuadError::DidNotConverge {
            method: "simpson_runge".to_string(),
            iterations: 20,
            estimate: 1.5,
            error_estimate: None,
        };
        assert_eq!(
            err.to_string(),
            "simpson_runge did not converge after 20 iterations (last estimate 1.5)"
        );
        let err = QuadError::InvalidInterval { a: 1.0, b: 0.0 };
        assert!(err.to_string().starts_with("Invalid interval [1, 0]"));
    }
}
