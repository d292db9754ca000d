//! Fixed order Gauss-Legendre quadrature.
//!
//! The interval [a, b] is mapped onto [-1, 1] with the cubic substitution
//!   x(t) = (b - a)/4 * t (3 - t^2) + (b + a)/2,   x'(t) = 3 (b - a)/4 * (1 - t^2)
//! whose derivative vanishes at t = ±1, so the transformed integrand
//!   g(t) = f(x(t)) * 3 (b - a)/4 * (1 - t^2)
//! goes to zero at both ends. g is integrated with an order-n rule whose abscissas
//! are the roots of the Legendre polynomial P_n found by Newton-Raphson iterations.
//!
//! # Example
//! ```
//! use RustedQuad::numerical::quadrature::gauss_legendre::GaussLegendreTable;
//! let table = GaussLegendreTable::generate(3, 1e-12, 100).unwrap();
//! // odd order: the central root is stored first
//! assert_eq!(table.abscissas()[0], 0.0);
//! assert!((table.weights()[0] - 8.0 / 9.0).abs() < 1e-12);
//! ```
use crate::numerical::quadrature::quad_traits::{
    ClosureFunction, Integrand, Integrator, QuadConfig, QuadError, QuadResult, validate_request,
};
use itertools::izip;
use log::{debug, info, warn};
use std::f64::consts::PI;

/// Newton iterations cannot resolve root and weight changes below this
const ROOT_TOLERANCE_FLOOR: f64 = 1e-14;

/// P_n(x) and P_{n-1}(x) from Bonnet's recurrence
///  k P_k = (2k - 1) x P_{k-1} - (k - 1) P_{k-2}
pub fn legendre_pair(order: usize, x: f64) -> (f64, f64) {
    let mut p0 = x; // P_k
    let mut p1 = 1.0; // P_{k-1}
    for k in 2..=order {
        let p2 = p1;
        p1 = p0;
        let t = x * p1;
        p0 = t + (k as f64 - 1.0) / k as f64 * (t - p2);
    }
    (p0, p1)
}

/// Abscissas and weights of the order-n Gauss-Legendre rule on [-1, 1].
/// Only the non-negative half of the roots is kept, ascending; the rule is symmetric.
/// For odd n entry 0 is the central root x = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendreTable {
    order: usize,
    abscissas: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendreTable {
    /// Generates the table, refining every root until both the root and its weight
    /// move by less than max(eps, 1e-14) between Newton steps.
    pub fn generate(order: usize, eps: f64, max_iterations: usize) -> Result<Self, QuadError> {
        if order == 0 {
            return Err(QuadError::InvalidParameter(
                "Gauss-Legendre order must be at least 1".to_string(),
            ));
        }
        if max_iterations == 0 {
            return Err(QuadError::InvalidParameter(
                "at least one Newton iteration is needed".to_string(),
            ));
        }
        let tol = eps.max(ROOT_TOLERANCE_FLOOR);
        let n = order as f64;
        let m = (order + 1) / 2;
        let mut abscissas = vec![0.0; m];
        let mut weights = vec![0.0; m];

        // asymptotic initial guess x0 = cos(pi (4i - 1)/(4n + 2)) * t0
        let t0 = 1.0 - (1.0 - 1.0 / n) / (8.0 * n * n);
        let t1 = 1.0 / (4.0 * n + 2.0);

        for i in 1..=m {
            let mut x0 = (PI * (4 * i - 1) as f64 * t1).cos() * t0;
            let mut w0 = 0.0;
            let mut dx = f64::INFINITY;
            let mut converged = false;
            let mut iterations = 0;

            while iterations < max_iterations {
                let (p, p_prev) = legendre_pair(order, x0);
                let denominator = x0 * x0 - 1.0;
                if denominator.abs() < f64::EPSILON {
                    return Err(QuadError::NumericalDegeneracy(format!(
                        "Legendre root estimate {} of order {} reached ±1",
                        x0, order
                    )));
                }
                let dpdx = n * (x0 * p - p_prev) / denominator;
                let x1 = x0 - p / dpdx;
                let w1 = 2.0 / ((1.0 - x1 * x1) * dpdx * dpdx);
                if !x1.is_finite() || !w1.is_finite() {
                    return Err(QuadError::NumericalDegeneracy(format!(
                        "Newton step for root {} of order {} is not finite",
                        i, order
                    )));
                }
                if iterations == 0 {
                    w0 = 2.0 / ((1.0 - x0 * x0) * dpdx * dpdx);
                }
                dx = x0 - x1;
                let dw = w0 - w1;
                x0 = x1;
                w0 = w1;
                iterations += 1;
                if dx.abs() <= tol && dw.abs() <= tol {
                    converged = true;
                    break;
                }
            }

            if !converged {
                warn!(
                    "Legendre root {} of order {} not converged after {} iterations, |dx| = {:.3e}",
                    i, order, max_iterations, dx.abs()
                );
                return Err(QuadError::DidNotConverge {
                    method: "legendre_roots".to_string(),
                    iterations: max_iterations,
                    estimate: x0,
                    error_estimate: Some(dx.abs()),
                });
            }

            let index = m - i;
            // odd order: P_n is odd and its middle root is exactly zero
            abscissas[index] = if order % 2 == 1 && i == m { 0.0 } else { x0 };
            weights[index] = w0;
        }
        debug!("Gauss-Legendre table of order {} generated", order);
        Ok(Self {
            order,
            abscissas,
            weights,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// non-negative abscissas, ascending
    pub fn abscissas(&self) -> &[f64] {
        &self.abscissas
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// All `order` nodes and weights, ascending by node
    pub fn full_rule(&self) -> (Vec<f64>, Vec<f64>) {
        let start = self.order % 2;
        let mut nodes: Vec<f64> = self.abscissas[start..].iter().rev().map(|x| -x).collect();
        let mut weights: Vec<f64> = self.weights[start..].iter().rev().cloned().collect();
        nodes.extend_from_slice(&self.abscissas);
        weights.extend_from_slice(&self.weights);
        (nodes, weights)
    }

    /// Applies the rule to g on [lower, upper] using the symmetry of the nodes
    pub fn integrate_on<G>(&self, g: G, lower: f64, upper: f64) -> Result<f64, QuadError>
    where
        G: Fn(f64) -> Result<f64, QuadError>,
    {
        let half = 0.5 * (upper - lower);
        let mid = 0.5 * (upper + lower);
        let (mut sum, start) = if self.order % 2 == 1 {
            (self.weights[0] * g(mid)?, 1)
        } else {
            (0.0, 0)
        };
        for (x, w) in izip!(&self.abscissas[start..], &self.weights[start..]) {
            let d = half * x;
            sum += w * (g(mid + d)? + g(mid - d)?);
        }
        Ok(half * sum)
    }
}

pub struct GaussLegendreIntegrator {
    config: QuadConfig,
}

impl GaussLegendreIntegrator {
    pub fn new() -> Self {
        Self {
            config: QuadConfig::default(),
        }
    }

    pub fn with_config(config: QuadConfig) -> Self {
        Self { config }
    }

    pub fn set_order(&mut self, order: usize) {
        self.config.gauss_order = order;
    }

    pub fn set_max_newton_iterations(&mut self, max_iterations: usize) {
        self.config.max_newton_iterations = max_iterations;
    }

    pub fn order(&self) -> usize {
        self.config.gauss_order
    }
}

impl Default for GaussLegendreIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for GaussLegendreIntegrator {
    fn integrate_detailed(
        &self,
        function: &dyn Integrand,
        a: f64,
        b: f64,
        epsilon: f64,
    ) -> Result<QuadResult, QuadError> {
        validate_request(a, b, epsilon)?;
        let order = self.config.gauss_order;
        let table =
            GaussLegendreTable::generate(order, epsilon, self.config.max_newton_iterations)?;

        let scale = 3.0 * (b - a) / 4.0;
        let g = |t: f64| -> Result<f64, QuadError> {
            let x = (b - a) / 4.0 * t * (3.0 - t * t) + (b + a) / 2.0;
            Ok(function.evaluate(x)? * scale * (1.0 - t * t))
        };
        let value = table.integrate_on(g, -1.0, 1.0)?;
        if !value.is_finite() {
            return Err(QuadError::NumericalDegeneracy(format!(
                "Gauss-Legendre sum of order {} is {} for {}",
                order,
                value,
                function.name()
            )));
        }
        info!(
            "gauss_legendre: integral of {} on [{}, {}] = {} (order {})",
            function.name(),
            a,
            b,
            value,
            order
        );
        Ok(QuadResult {
            value,
            error_estimate: None,
            evaluations: order,
            iterations: order,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "gauss_legendre"
    }
}

/// Convenience function: order-64 Gauss-Legendre integral of a closure
pub fn gauss_legendre<F>(function: F, a: f64, b: f64, epsilon: f64) -> Result<f64, QuadError>
where
    F: Fn(f64) -> f64 + Sync,
{
    let wrapped = ClosureFunction::new(function, "gauss_closure".to_string());
    GaussLegendreIntegrator::new().integrate(&wrapped, a, b, epsilon)
}
