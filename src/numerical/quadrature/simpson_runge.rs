//! Composite Simpson rule refined by doubling the number of segments until the
//! Runge estimate |I(n) - I(2n)| / (2^4 - 1) drops below epsilon.
//! The number of doublings is bounded; hitting the bound is an error, not a result.
use crate::numerical::quadrature::quad_traits::{
    ClosureFunction, Integrand, Integrator, QuadConfig, QuadError, QuadResult, validate_request,
};
use crate::numerical::quadrature::quad_utils::weighted_sum;
use log::{debug, info, warn};

/// order of accuracy of the Simpson rule
const Q: i32 = 4;
/// largest accepted number of doublings; the last round then has 2^31 segments
pub const MAX_REFINEMENTS_LIMIT: usize = 30;

pub struct SimpsonRungeIntegrator {
    config: QuadConfig,
}

impl SimpsonRungeIntegrator {
    pub fn new() -> Self {
        Self {
            config: QuadConfig::default(),
        }
    }

    pub fn with_config(config: QuadConfig) -> Self {
        Self { config }
    }

    /// Set maximum number of n -> 2n rounds
    pub fn set_max_refinements(&mut self, max_refinements: usize) {
        self.config.max_refinements = max_refinements;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Simpson formula i = (h/3) * (y0 + 4 s1 + 2 s2 + yn), n must be even
    pub fn simpson_formula(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        n: usize,
    ) -> Result<f64, QuadError> {
        if n == 0 || n % 2 != 0 {
            return Err(QuadError::InvalidParameter(format!(
                "Simpson rule needs an even positive number of segments, got {}",
                n
            )));
        }
        let h = (b - a) / n as f64;
        let simpson_weight = |i: usize| {
            if i == 0 || i == n {
                1.0
            } else if i % 2 == 1 {
                4.0
            } else {
                2.0
            }
        };
        let s = weighted_sum(function, a, b, n, simpson_weight, self.config.parallel)?;
        Ok(h * s / 3.0)
    }

    /// Runge rule: |i1 - i2| / (2^q - 1)
    fn runge_estimate(i1: f64, i2: f64) -> f64 {
        (i1 - i2).abs() / (2.0_f64.powi(Q) - 1.0)
    }
}

impl Default for SimpsonRungeIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SimpsonRungeIntegrator {
    fn integrate_detailed(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<QuadResult, QuadError> {
        validate_request(a, b, epsilon)?;
        if self.config.max_refinements > MAX_REFINEMENTS_LIMIT {
            return Err(QuadError::InvalidParameter(format!(
                "max_refinements must be at most {}, got {}",
                MAX_REFINEMENTS_LIMIT, self.config.max_refinements
            )));
        }

        let mut n: usize = 2;
        let mut i1 = self.simpson_formula(function, a, b, n)?;
        let mut evaluations = n + 1;
        let mut last_estimate = f64::NAN;
        let mut last_error = None;

        for refinement in 1..=self.config.max_refinements {
            // I(2n) of this round is I(n) of the next one
            let i2 = self.simpson_formula(function, a, b, 2 * n)?;
            evaluations += 2 * n + 1;
            let error = Self::runge_estimate(i1, i2);
            debug!(
                "simpson_runge round {}: n = {}, I(n) = {}, I(2n) = {}, runge = {:.3e}",
                refinement, n, i1, i2, error
            );
            if !error.is_finite() {
                return Err(QuadError::NumericalDegeneracy(format!(
                    "Runge estimate is {} at n = {} for {}",
                    error,
                    n,
                    function.name()
                )));
            }
            if error <= epsilon {
                info!(
                    "simpson_runge: integral of {} on [{}, {}] = {} ({} segments, {} rounds)",
                    function.name(),
                    a,
                    b,
                    i2,
                    2 * n,
                    refinement
                );
                return Ok(QuadResult {
                    value: i2,
                    error_estimate: Some(error),
                    evaluations,
                    iterations: refinement,
                    method: self.name().to_string(),
                });
            }
            last_estimate = i2;
            last_error = Some(error);
            i1 = i2;
            n *= 2;
        }

        warn!(
            "simpson_runge: no convergence for {} after {} rounds",
            function.name(),
            self.config.max_refinements
        );
        Err(QuadError::DidNotConverge {
            method: self.name().to_string(),
            iterations: self.config.max_refinements,
            estimate: last_estimate,
            error_estimate: last_error,
        })
    }

    fn name(&self) -> &str {
        "simpson_runge"
    }
}

/// Convenience function: Simpson-Runge integral of a closure with default settings
pub fn simpson_runge<F>(function: F, a: f64, b: f64, epsilon: f64) -> Result<f64, QuadError>
where
    F: Fn(f64) -> f64 + Sync,
{
    let wrapped = ClosureFunction::new(function, "simpson_closure".to_string());
    SimpsonRungeIntegrator::new().integrate(&wrapped, a, b, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_simpson_formula_exact_for_cubic() {
        let f = ClosureFunction::new(|x: f64| x.powi(3) + x * x, "x^3 + x^2".to_string());
        let integrator = SimpsonRungeIntegrator::new();
        // x^4/4 + x^3/3 on [0, 2]
        let exact = 4.0 + 8.0 / 3.0;
        let value = integrator.simpson_formula(&f, 0.0, 2.0, 2).unwrap();
        assert_relative_eq!(value, exact, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_formula_odd_segments_rejected() {
        let f = ClosureFunction::new(|x| x, "x".to_string());
        let integrator = SimpsonRungeIntegrator::new();
        assert!(matches!(
            integrator.simpson_formula(&f, 0.0, 1.0, 3),
            Err(QuadError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_quadratic_converges_in_one_round() {
        let f = ClosureFunction::new(|x| x * x, "x^2".to_string());
        let res = SimpsonRungeIntegrator::new()
            .integrate_detailed(&f, 0.0, 1.0, 1e-6)
            .unwrap();
        assert_relative_eq!(res.value, 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(res.iterations, 1);
    }

    #[test]
    fn test_sine_on_zero_pi() {
        let value = simpson_runge(|x: f64| x.sin(), 0.0, PI, 1e-6).unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_exponential_error_estimate() {
        let f = ClosureFunction::new(|x: f64| x.exp(), "exp".to_string());
        let res = SimpsonRungeIntegrator::new()
            .integrate_detailed(&f, 0.0, 1.0, 1e-10)
            .unwrap();
        let exact = std::f64::consts::E - 1.0;
        assert!(res.error_estimate.unwrap() <= 1e-10);
        // the Runge estimate tracks the true error of I(2n) closely for smooth f
        assert!((res.value - exact).abs() <= 2e-10);
    }

    #[test]
    fn test_refinement_cap_reports_non_convergence() {
        let f = ClosureFunction::new(|x: f64| (200.0 * x).sin(), "sin(200x)".to_string());
        let mut integrator = SimpsonRungeIntegrator::new();
        integrator.set_max_refinements(3);
        let res = integrator.integrate(&f, 0.0, 1.0, 1e-12);
        match res {
            Err(QuadError::DidNotConverge {
                iterations,
                error_estimate,
                ..
            }) => {
                assert_eq!(iterations, 3);
                assert!(error_estimate.is_some());
            }
            other => panic!("expected DidNotConverge, got {:?}", other),
        }
    }

    #[test]
    fn test_refinement_limit() {
        let f = ClosureFunction::new(|x| x * x, "x^2".to_string());
        let mut integrator = SimpsonRungeIntegrator::new();
        integrator.set_max_refinements(MAX_REFINEMENTS_LIMIT + 1);
        assert!(matches!(
            integrator.integrate(&f, 0.0, 1.0, 1e-6),
            Err(QuadError::InvalidParameter(_))
        ));
        integrator.set_max_refinements(MAX_REFINEMENTS_LIMIT);
        let value = integrator.integrate(&f, 0.0, 1.0, 1e-6).unwrap();
        assert_relative_eq!(value, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let f = ClosureFunction::new(|x: f64| (3.0 * x).cos() * x, "x cos(3x)".to_string());
        let mut integrator = SimpsonRungeIntegrator::new();
        let seq = integrator.integrate_detailed(&f, 0.0, 4.0, 1e-11).unwrap();
        integrator.set_parallel(true);
        let par = integrator.integrate_detailed(&f, 0.0, 4.0, 1e-11).unwrap();
        assert_eq!(seq.value.to_bits(), par.value.to_bits());
        assert_eq!(seq.iterations, par.iterations);
    }

    #[test]
    fn test_nan_is_degenerate() {
        let f = ClosureFunction::new(|x: f64| (x - 0.5).ln(), "ln(x - 0.5)".to_string());
        let res = SimpsonRungeIntegrator::new().integrate(&f, 0.0, 1.0, 1e-6);
        assert!(matches!(res, Err(QuadError::NumericalDegeneracy(_))));
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let f = ClosureFunction::new(|x| x, "x".to_string());
        let res = SimpsonRungeIntegrator::new().integrate(&f, 2.0, 0.0, 1e-6);
        assert_eq!(res, Err(QuadError::InvalidInterval { a: 2.0, b: 0.0 }));
    }
}
