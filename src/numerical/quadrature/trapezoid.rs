//! Composite trapezoid rule with the step chosen from the a priori error bound
//!  |E| <= (b - a) h^2 M2 / 12,   M2 = max |f''(x)| on [a, b]
//! M2 is estimated by sampling the finite-difference second derivative on a uniform grid,
//! then h = sqrt(12 eps / (M2 (b - a))) and n = ceil((b - a)/h) segments are used.
//!
//! # Example
//! ```
//! use RustedQuad::numerical::quadrature::quad_traits::{ClosureFunction, Integrator};
//! use RustedQuad::numerical::quadrature::trapezoid::TrapezoidIntegrator;
//! let f = ClosureFunction::new(|x: f64| x * x, "x^2".to_string());
//! let integral = TrapezoidIntegrator::new().integrate(&f, 0.0, 1.0, 1e-6).unwrap();
//! assert!((integral - 1.0 / 3.0).abs() < 1e-6);
//! ```
use crate::numerical::quadrature::quad_traits::{
    ClosureFunction, Integrand, Integrator, QuadConfig, QuadError, QuadResult, validate_request,
};
use crate::numerical::quadrature::quad_utils::{derivative_inside, linspace, weighted_sum};
use log::{debug, info};
use rayon::prelude::*;

pub struct TrapezoidIntegrator {
    config: QuadConfig,
}

impl TrapezoidIntegrator {
    pub fn new() -> Self {
        Self {
            config: QuadConfig::default(),
        }
    }

    pub fn with_config(config: QuadConfig) -> Self {
        Self { config }
    }

    /// Set number of points where |f''| is sampled
    pub fn set_m2_candidate_count(&mut self, count: usize) {
        self.config.m2_candidate_count = count;
    }

    pub fn set_max_segments(&mut self, max_segments: usize) {
        self.config.max_segments = max_segments;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// M2 = max |f''(x)| over the candidate grid
    pub fn calculate_m2(&self, function: &dyn Integrand, a: f64, b: f64) -> Result<f64, QuadError> {
        if self.config.m2_candidate_count == 0 {
            return Err(QuadError::InvalidParameter(
                "m2_candidate_count must be positive".to_string(),
            ));
        }
        let candidates = linspace(self.config.m2_candidate_count, a, b);
        let second_derivatives: Vec<f64> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|&x| derivative_inside(function, x, 2, a, b).map(f64::abs))
                .collect::<Result<Vec<f64>, QuadError>>()?
        } else {
            candidates
                .iter()
                .map(|&x| derivative_inside(function, x, 2, a, b).map(f64::abs))
                .collect::<Result<Vec<f64>, QuadError>>()?
        };
        // NaN must not be swallowed by f64::max
        if let Some(bad) = second_derivatives.iter().find(|d| !d.is_finite()) {
            return Err(QuadError::NumericalDegeneracy(format!(
                "second derivative estimate is {} on [{}, {}]",
                bad, a, b
            )));
        }
        Ok(second_derivatives.into_iter().fold(0.0, f64::max))
    }

    /// Segment count from the error bound. M2 = 0 (linear f) gives a single segment.
    fn segment_count(&self, m2: f64, length: f64, epsilon: f64) -> Result<usize, QuadError> {
        if m2 <= 0.0 {
            return Ok(1);
        }
        let h = (12.0 * epsilon / (m2 * length)).sqrt();
        if h >= length {
            return Ok(1);
        }
        let n = (length / h).ceil();
        if n > self.config.max_segments as f64 {
            return Err(QuadError::InvalidParameter(format!(
                "trapezoid needs {:.0} segments for epsilon = {:e} (M2 = {:.3e}), max_segments is {}",
                n, epsilon, m2, self.config.max_segments
            )));
        }
        Ok((n as usize).max(1))
    }

    /// Composite trapezoid sum on n segments
    pub fn trapezoid_formula(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        n: usize,
    ) -> Result<f64, QuadError> {
        let end_weight = |i: usize| if i == 0 || i == n { 0.5 } else { 1.0 };
        let s = weighted_sum(function, a, b, n, end_weight, self.config.parallel)?;
        Ok(s * (b - a) / n as f64)
    }
}

impl Default for TrapezoidIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for TrapezoidIntegrator {
    fn integrate_detailed(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<QuadResult, QuadError> {
        validate_request(a, b, epsilon)?;
        let length = (b - a).abs();

        let m2 = self.calculate_m2(function, a, b)?;
        let n = self.segment_count(m2, length, epsilon)?;
        debug!(
            "trapezoid for {}: M2 = {:.6e}, segments = {}",
            function.name(),
            m2,
            n
        );

        let value = self.trapezoid_formula(function, a, b, n)?;
        if !value.is_finite() {
            return Err(QuadError::NumericalDegeneracy(format!(
                "trapezoid sum is {} for {}",
                value,
                function.name()
            )));
        }
        let h = length / n as f64;
        let error_estimate = length * h * h * m2 / 12.0;
        info!(
            "trapezoid: integral of {} on [{}, {}] = {} ({} segments)",
            function.name(),
            a,
            b,
            value,
            n
        );
        Ok(QuadResult {
            value,
            error_estimate: Some(error_estimate),
            evaluations: 3 * self.config.m2_candidate_count + n + 1,
            iterations: n,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "trapezoid"
    }
}

/// Convenience function: adaptive trapezoid of a closure with default settings
pub fn trapezoid<F>(function: F, a: f64, b: f64, epsilon: f64) -> Result<f64, QuadError>
where
    F: Fn(f64) -> f64 + Sync,
{
    let wrapped = ClosureFunction::new(function, "trapezoid_closure".to_string());
    TrapezoidIntegrator::new().integrate(&wrapped, a, b, epsilon)
}
