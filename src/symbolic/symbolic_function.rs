//! Integrand compiled from a text expression in the variable `x`, and evaluation of
//! constant expressions used for the integration bounds ("pi/2", "2*e", "-1").
//!
//! # Example
//! ```
//! use RustedQuad::symbolic::symbolic_function::{compile, eval_constant};
//! use RustedQuad::numerical::quadrature::quad_traits::Integrand;
//! let f = compile("sin(x)^2").unwrap();
//! let upper = eval_constant("pi/2").unwrap();
//! assert!((f.evaluate(upper).unwrap() - 1.0).abs() < 1e-15);
//! ```
use crate::numerical::quadrature::quad_traits::{Integrand, QuadError};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_lambdify::LambdifiedFn;
use log::debug;

/// name of the integration variable
pub const VARIABLE: &str = "x";

pub struct SymbolicFunction {
    text: String,
    expression: Expr,
    function: LambdifiedFn,
}

impl SymbolicFunction {
    /// Parse and lambdify; the only variable allowed is `x`
    pub fn from_string(text: &str) -> Result<Self, QuadError> {
        let expression = Expr::parse_expression(text)?;
        let unknown: Vec<String> = expression
            .all_arguments_are_variables()
            .into_iter()
            .filter(|v| v != VARIABLE)
            .collect();
        if !unknown.is_empty() {
            return Err(QuadError::Parse(format!(
                "unknown variable(s) {:?} in '{}', only '{}' is allowed",
                unknown, text, VARIABLE
            )));
        }
        debug!("compiled '{}' as {}", text, expression);
        let function = expression.lambdify1D();
        Ok(Self {
            text: text.trim().to_string(),
            expression,
            function,
        })
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Integrand for SymbolicFunction {
    fn evaluate(&self, x: f64) -> Result<f64, QuadError> {
        let value = (self.function)(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QuadError::FunctionEvaluation {
                x,
                message: format!("{} evaluates to {}", self.text, value),
            })
        }
    }

    fn name(&self) -> &str {
        self.text()
    }
}

impl std::fmt::Debug for SymbolicFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolicFunction")
            .field("text", &self.text)
            .field("expression", &self.expression)
            .finish()
    }
}

/// Compile an integrand text expression
pub fn compile(text: &str) -> Result<SymbolicFunction, QuadError> {
    SymbolicFunction::from_string(text)
}

/// Value of an expression without variables
pub fn eval_constant(text: &str) -> Result<f64, QuadError> {
    let expression = Expr::parse_expression(text)?;
    let vars = expression.all_arguments_are_variables();
    if !vars.is_empty() {
        return Err(QuadError::Parse(format!(
            "'{}' must be a constant expression, found variable(s) {:?}",
            text, vars
        )));
    }
    let value = expression.lambdify1D()(0.0);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuadError::Parse(format!("'{}' evaluates to {}", text, value)))
    }
}
