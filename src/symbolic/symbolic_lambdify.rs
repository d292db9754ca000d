use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;

/// thread-safe closure of one argument produced from an expression
pub type LambdifiedFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions
    ///
    /// Converts a single-variable symbolic expression into a closure. Every variable
    /// node is bound to the closure argument, so the caller checks that the expression
    /// has at most one variable name. The closure is `Send + Sync` and can be shared
    /// by rayon workers.
    ///
    /// # Examples
    /// ```
    /// use RustedQuad::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2 + 1").unwrap().lambdify1D();
    /// assert_eq!(f(3.0), 10.0);
    /// ```
    pub fn lambdify1D(&self) -> LambdifiedFn {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => match exp.as_ref() {
                // integer exponents keep negative bases defined
                Expr::Const(n) if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 => {
                    let n = *n as i32;
                    let base_fn = base.lambdify1D();
                    Box::new(move |x| base_fn(x).powi(n))
                }
                _ => {
                    let base_fn = base.lambdify1D();
                    let exp_fn = exp.lambdify1D();
                    Box::new(move |x| base_fn(x).powf(exp_fn(x)))
                }
            },
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::Sqrt(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sqrt())
            }
            Expr::Abs(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).abs())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::ctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| 1.0 / expr_fn(x).tan())
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).asin())
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).acos())
            }
            Expr::arctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).atan())
            }
            Expr::arcctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| PI / 2.0 - expr_fn(x).atan())
            }
        } // end of match
    } // end of lambdify1D
}

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::Expr;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn lambdified(text: &str) -> impl Fn(f64) -> f64 {
        Expr::parse_expression(text).unwrap().lambdify1D()
    }

    #[test]
    fn test_arithmetic() {
        let f = lambdified("(x + 1) * (x - 1) / 2");
        assert_eq!(f(3.0), 4.0);
        let f = lambdified("-x^2 + 2^3^2");
        assert_eq!(f(2.0), 508.0);
    }

    #[test]
    fn test_negative_base_integer_power() {
        let f = lambdified("x^3");
        assert_eq!(f(-2.0), -8.0);
        let f = lambdified("x^0.5");
        assert!(f(-4.0).is_nan());
    }

    #[test]
    fn test_trigonometry() {
        let x = 0.7_f64;
        assert_relative_eq!(lambdified("tg(x)")(x), x.tan(), epsilon = 1e-15);
        assert_relative_eq!(lambdified("ctg(x)")(x), 1.0 / x.tan(), epsilon = 1e-15);
        assert_relative_eq!(lambdified("arcctg(x)")(x), PI / 2.0 - x.atan(), epsilon = 1e-15);
        assert_relative_eq!(lambdified("arcsin(x) + arccos(x)")(x), PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_exp_ln_sqrt_abs() {
        assert_relative_eq!(lambdified("ln(exp(x))")(1.3), 1.3, epsilon = 1e-15);
        assert_eq!(lambdified("sqrt(abs(x))")(-16.0), 4.0);
        assert_eq!(lambdified("e")(100.0), std::f64::consts::E);
    }
}
