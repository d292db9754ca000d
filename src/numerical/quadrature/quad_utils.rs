//! Leaf utilities of the quadrature methods: uniform grids, finite-difference
//! derivatives and weighted sums of the integrand over a uniform grid.
use crate::numerical::quadrature::quad_traits::{Integrand, QuadError};
use rayon::prelude::*;

/// `num_values` evenly spaced values between `start` and `end`, both ends included.
/// The last value is exactly `end`.
pub fn linspace(num_values: usize, start: f64, end: f64) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values as f64 - 1.0);
            let mut values: Vec<f64> = (0..num_values)
                .map(|i| start + i as f64 * step)
                .collect();
            values[num_values - 1] = end;
            values
        }
    }
}

/// Placement of the finite-difference stencil relative to the point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stencil {
    /// points x + (n/2 - k)h, k = 0..n
    Central,
    /// points x + (n - k)h, never left of x
    Forward,
    /// points x - kh, never right of x
    Backward,
}

fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// step balancing truncation against rounding for an n-th difference
fn default_step(x: f64, order: usize) -> f64 {
    f64::EPSILON.powf(1.0 / (order as f64 + 2.0)) * x.abs().max(1.0)
}

/// n-th order finite difference with the given stencil and step
pub fn finite_difference(
    function: &dyn Integrand,
    x: f64,
    order: usize,
    stencil: Stencil,
    h: f64,
) -> Result<f64, QuadError> {
    if order == 0 {
        return function.evaluate(x);
    }
    let n = order as f64;
    let mut sum = 0.0;
    for k in 0..=order {
        let shift = match stencil {
            Stencil::Central => n / 2.0 - k as f64,
            Stencil::Forward => n - k as f64,
            Stencil::Backward => -(k as f64),
        };
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * binomial(order, k) * function.evaluate(x + shift * h)?;
    }
    Ok(sum / h.powi(order as i32))
}

/// Approximates the `order`-th derivative of f at x with a central difference
pub fn derivative(function: &dyn Integrand, x: f64, order: usize) -> Result<f64, QuadError> {
    derivative_with_stencil(function, x, order, Stencil::Central)
}

pub fn derivative_with_stencil(
    function: &dyn Integrand,
    x: f64,
    order: usize,
    stencil: Stencil,
) -> Result<f64, QuadError> {
    finite_difference(function, x, order, stencil, default_step(x, order))
}

/// Derivative that samples f only inside [a, b]: the stencil turns one-sided near the
/// ends and the step shrinks when the interval is shorter than the stencil.
pub fn derivative_inside(
    function: &dyn Integrand,
    x: f64,
    order: usize,
    a: f64,
    b: f64,
) -> Result<f64, QuadError> {
    let n = order as f64;
    let h = default_step(x, order).min((b - a) / n.max(1.0));
    let half_width = n / 2.0 * h;
    let stencil = if x - half_width < a {
        Stencil::Forward
    } else if x + half_width > b {
        Stencil::Backward
    } else {
        Stencil::Central
    };
    finite_difference(function, x, order, stencil, h)
}

/// nodes per block of `weighted_sum`
const SUM_BLOCK: usize = 4096;

/// Weighted sum  sum_i w(i) f(x_i)  over the uniform grid x_i = a + i (b - a)/n, i = 0..=n,
/// with x_n = b exactly. Nodes are produced on the fly, nothing of size n is allocated.
/// Blocks of nodes are summed on the rayon pool if `parallel` is set; the block sums are
/// always added in block order, so both paths give the same bits.
pub fn weighted_sum<W>(
    function: &dyn Integrand,
    a: f64,
    b: f64,
    n: usize,
    weight: W,
    parallel: bool,
) -> Result<f64, QuadError>
where
    W: Fn(usize) -> f64 + Sync,
{
    if n == 0 {
        return Err(QuadError::InvalidParameter(
            "at least one segment is needed".to_string(),
        ));
    }
    let h = (b - a) / n as f64;
    let node = |i: usize| if i == n { b } else { a + i as f64 * h };
    let block_sum = |block: usize| -> Result<f64, QuadError> {
        let first = block * SUM_BLOCK;
        let last = (first + SUM_BLOCK).min(n + 1);
        (first..last).try_fold(0.0, |acc, i| -> Result<f64, QuadError> {
            Ok(acc + weight(i) * function.evaluate(node(i))?)
        })
    };
    let blocks = n / SUM_BLOCK + 1;
    let block_sums: Vec<f64> = if parallel {
        (0..blocks)
            .into_par_iter()
            .map(block_sum)
            .collect::<Result<Vec<f64>, QuadError>>()?
    } else {
        (0..blocks)
            .map(block_sum)
            .collect::<Result<Vec<f64>, QuadError>>()?
    };
    Ok(block_sums.iter().sum())
}
