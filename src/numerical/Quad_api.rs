//! # Quadrature API
//!
//! `Quadrature` binds a problem (function, interval, precision), runs one or several
//! integration methods on it and keeps every result, so that a failing method does not
//! hide the others. The problem may be given as closures, as strings
//! (`"sin(x)^2"`, `"0"`, `"pi/2"`, digits) or as a task document.
//!
//! # Example
//! ```
//! use RustedQuad::numerical::Quad_api::{Quadrature, QuadMethod};
//! let mut quad = Quadrature::new();
//! quad.set_problem_from_str("x^2", "0", "1", 6).unwrap();
//! quad.set_loglevel(Some("off".to_string())).unwrap();
//! quad.solve().unwrap();
//! let simpson = quad.get_value(QuadMethod::SimpsonRunge).unwrap();
//! assert!((simpson - 1.0 / 3.0).abs() < 1e-6);
//! ```
use crate::Utils::task_parser::{DocumentMap, SectionMap, Value, parse_document_as, parse_file_as, template_from};
use crate::numerical::quadrature::gauss_legendre::GaussLegendreIntegrator;
use crate::numerical::quadrature::quad_traits::{
    Integrand, Integrator, QuadConfig, QuadError, QuadResult,
};
use crate::numerical::quadrature::simpson_runge::{MAX_REFINEMENTS_LIMIT, SimpsonRungeIntegrator};
use crate::numerical::quadrature::trapezoid::TrapezoidIntegrator;
use crate::symbolic::symbolic_function::{compile, eval_constant};
use chrono::Local;
use log::{error, info, warn};
use simplelog::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tabled::{builder::Builder, settings::Style};

/// largest number of significant digits that makes sense for f64
pub const MAX_DIGITS: u32 = 15;
pub const DEFAULT_DIGITS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum QuadMethod {
    #[strum(to_string = "trapezoid", serialize = "trap")]
    Trapezoid,
    #[strum(to_string = "simpson", serialize = "simpson_runge", serialize = "runge")]
    SimpsonRunge,
    #[strum(to_string = "gauss", serialize = "gauss_legendre", serialize = "legendre")]
    GaussLegendre,
}

impl QuadMethod {
    pub fn description(&self) -> &'static str {
        match self {
            QuadMethod::Trapezoid => "composite trapezoid, step from the a priori bound with M2 = max|f''|",
            QuadMethod::SimpsonRunge => "composite Simpson, segments doubled until the Runge estimate < eps",
            QuadMethod::GaussLegendre => "Gauss-Legendre rule after a cubic substitution",
        }
    }

    /// Parse a comma separated list like "trapezoid, gauss"
    pub fn parse_list(list: &str) -> Result<Vec<QuadMethod>, QuadError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                QuadMethod::from_str(s)
                    .map_err(|_| QuadError::Parse(format!("unknown integration method '{}'", s)))
            })
            .collect()
    }
}

/// Strategy object for a method
pub fn make_integrator(method: QuadMethod, config: &QuadConfig) -> Box<dyn Integrator> {
    match method {
        QuadMethod::Trapezoid => Box::new(TrapezoidIntegrator::with_config(config.clone())),
        QuadMethod::SimpsonRunge => Box::new(SimpsonRungeIntegrator::with_config(config.clone())),
        QuadMethod::GaussLegendre => Box::new(GaussLegendreIntegrator::with_config(config.clone())),
    }
}

/// Titles and keys of a task document
pub fn task_template() -> DocumentMap {
    template_from(&[
        ("integral", &["function", "lower", "upper", "digits", "methods"]),
        (
            "solver_settings",
            &[
                "gauss_order",
                "max_refinements",
                "m2_candidates",
                "max_segments",
                "max_newton_iterations",
                "parallel",
                "loglevel",
                "log_file",
            ],
        ),
    ])
}

pub struct Quadrature {
    pub function: Option<Box<dyn Integrand>>,
    pub a: f64,
    pub b: f64,
    pub epsilon: f64,
    pub methods: Vec<QuadMethod>,
    pub config: QuadConfig,
    pub loglevel: Option<String>,
    /// None - no log file, Some(None) - log file with a time stamp name, Some(Some(name))
    pub log_file: Option<Option<String>>,
    results: BTreeMap<QuadMethod, Result<QuadResult, QuadError>>,
    timings: BTreeMap<QuadMethod, Duration>,
}

impl Quadrature {
    pub fn new() -> Self {
        Quadrature {
            function: None,
            a: 0.0,
            b: 1.0,
            epsilon: 10f64.powi(-(DEFAULT_DIGITS as i32)),
            methods: QuadMethod::iter().collect(),
            config: QuadConfig::default(),
            loglevel: Some("info".to_string()),
            log_file: None,
            results: BTreeMap::new(),
            timings: BTreeMap::new(),
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    pub fn set_function(&mut self, function: Box<dyn Integrand>) {
        self.function = Some(function);
    }

    /// Compile the integrand from a string in the variable x
    pub fn set_function_from_str(&mut self, expression: &str) -> Result<(), QuadError> {
        let function = compile(expression)?;
        self.function = Some(Box::new(function));
        Ok(())
    }

    pub fn set_interval(&mut self, a: f64, b: f64) -> Result<(), QuadError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(QuadError::InvalidInterval { a, b });
        }
        self.a = a;
        self.b = b;
        Ok(())
    }

    /// Bounds may be constant expressions: "0", "-1.5", "pi/2"
    pub fn set_interval_from_str(&mut self, a: &str, b: &str) -> Result<(), QuadError> {
        let a = eval_constant(a)?;
        let b = eval_constant(b)?;
        self.set_interval(a, b)
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), QuadError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(QuadError::InvalidTolerance(epsilon));
        }
        self.epsilon = epsilon;
        Ok(())
    }

    /// epsilon = 10^(-digits)
    pub fn set_digits(&mut self, digits: u32) -> Result<(), QuadError> {
        if digits > MAX_DIGITS {
            return Err(QuadError::InvalidParameter(format!(
                "digits must be at most {}, got {}",
                MAX_DIGITS, digits
            )));
        }
        self.set_epsilon(10f64.powi(-(digits as i32)))
    }

    /// The whole problem from strings: integrand, bounds, number of digits
    pub fn set_problem_from_str(
        &mut self,
        expression: &str,
        a: &str,
        b: &str,
        digits: u32,
    ) -> Result<(), QuadError> {
        self.set_function_from_str(expression)?;
        self.set_interval_from_str(a, b)?;
        self.set_digits(digits)
    }

    pub fn set_methods(&mut self, methods: Vec<QuadMethod>) -> Result<(), QuadError> {
        if methods.is_empty() {
            return Err(QuadError::InvalidParameter(
                "at least one integration method must be selected".to_string(),
            ));
        }
        let mut methods = methods;
        methods.sort();
        methods.dedup();
        self.methods = methods;
        Ok(())
    }

    pub fn set_config(&mut self, config: QuadConfig) {
        self.config = config;
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) -> Result<(), QuadError> {
        if let Some(level) = &loglevel {
            level_filter(level)?;
        }
        self.loglevel = loglevel;
        Ok(())
    }

    /// Also write the log to a file; None gives a name stamped with the current time
    pub fn set_log_file(&mut self, file_name: Option<String>) {
        self.log_file = Some(file_name);
    }
    ////////////////////////////TASK DOCUMENT///////////////////////////////////////////////////////////////
    /// Build the problem from a task document:
    /// ```text
    /// integral
    /// function: sin(x)
    /// lower: 0
    /// upper: pi
    /// digits: 6
    /// methods: trapezoid, simpson, gauss
    /// solver_settings
    /// gauss_order: 64
    /// parallel: false
    /// loglevel: info
    /// ```
    pub fn from_task_document(text: &str) -> Result<Self, QuadError> {
        let document = parse_document_as(text, Some(task_template())).map_err(QuadError::Parse)?;
        Self::from_document_map(&document)
    }

    pub fn from_task_file(path: &Path) -> Result<Self, QuadError> {
        let document = parse_file_as(path, Some(task_template())).map_err(QuadError::Parse)?;
        Self::from_document_map(&document)
    }

    fn from_document_map(document: &DocumentMap) -> Result<Self, QuadError> {
        let empty = SectionMap::new();
        let integral = document.get("integral").unwrap_or(&empty);
        let settings = document.get("solver_settings").unwrap_or(&empty);

        let mut quad = Quadrature::new();
        let function = single_value(integral, "integral", "function")?
            .ok_or_else(|| QuadError::Parse("integral: function is required".to_string()))?;
        let lower = single_value(integral, "integral", "lower")?
            .ok_or_else(|| QuadError::Parse("integral: lower is required".to_string()))?;
        let upper = single_value(integral, "integral", "upper")?
            .ok_or_else(|| QuadError::Parse("integral: upper is required".to_string()))?;
        quad.set_function_from_str(&function.to_string_value())?;
        quad.set_interval_from_str(&lower.to_string_value(), &upper.to_string_value())?;

        if let Some(digits) = non_negative(integral, "integral", "digits")? {
            let digits = u32::try_from(digits).unwrap_or(u32::MAX);
            quad.set_digits(digits)?;
        }
        if let Some(Some(methods)) = integral.get("methods") {
            let list = methods
                .iter()
                .map(Value::to_string_value)
                .collect::<Vec<String>>()
                .join(",");
            quad.set_methods(QuadMethod::parse_list(&list)?)?;
        }

        let mut config = QuadConfig::default();
        if let Some(order) = non_negative(settings, "solver_settings", "gauss_order")? {
            config.gauss_order = order;
        }
        if let Some(n) = non_negative(settings, "solver_settings", "max_refinements")? {
            if n > MAX_REFINEMENTS_LIMIT {
                return Err(QuadError::Parse(format!(
                    "solver_settings: max_refinements must be at most {}, got {}",
                    MAX_REFINEMENTS_LIMIT, n
                )));
            }
            config.max_refinements = n;
        }
        if let Some(n) = non_negative(settings, "solver_settings", "m2_candidates")? {
            config.m2_candidate_count = n;
        }
        if let Some(n) = non_negative(settings, "solver_settings", "max_segments")? {
            config.max_segments = n;
        }
        if let Some(n) = non_negative(settings, "solver_settings", "max_newton_iterations")? {
            config.max_newton_iterations = n;
        }
        if let Some(parallel) = single_value(settings, "solver_settings", "parallel")? {
            config.parallel = parallel.as_boolean().ok_or_else(|| {
                QuadError::Parse(format!("solver_settings: parallel must be true or false, got {}", parallel))
            })?;
        }
        quad.set_config(config);

        if let Some(level) = single_value(settings, "solver_settings", "loglevel")? {
            quad.set_loglevel(Some(level.to_string_value()))?;
        }
        match single_value(settings, "solver_settings", "log_file")? {
            None | Some(Value::Boolean(false)) => {}
            Some(Value::Boolean(true)) => quad.set_log_file(None),
            Some(name) => quad.set_log_file(Some(name.to_string_value())),
        }
        Ok(quad)
    }
    ////////////////////////////SOLVING///////////////////////////////////////////////////////////////////
    /// run every selected method and store its result
    pub fn solver(&mut self) -> Result<(), QuadError> {
        let function = self.function.as_deref().ok_or_else(|| {
            QuadError::InvalidParameter("no function to integrate, set it first".to_string())
        })?;
        self.results.clear();
        self.timings.clear();
        info!(
            "integral of {} on [{}, {}] with epsilon = {:e}, methods: {:?}",
            function.name(),
            self.a,
            self.b,
            self.epsilon,
            self.methods
        );
        for method in self.methods.iter() {
            let integrator = make_integrator(*method, &self.config);
            let begin = Instant::now();
            let result = integrator.integrate_detailed(function, self.a, self.b, self.epsilon);
            let elapsed = begin.elapsed();
            match &result {
                Ok(res) => info!("{}: {} (evaluations: {})", method, res.value, res.evaluations),
                Err(e) => error!("{}: {}", method, e),
            }
            self.timings.insert(*method, elapsed);
            self.results.insert(*method, result);
        }
        self.calc_statistics();
        Ok(())
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<(), QuadError> {
        let level = match self.loglevel.as_deref() {
            Some(level) => level_filter(level)?,
            None => LevelFilter::Info,
        };
        if level == LevelFilter::Off {
            return self.solver();
        }
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];
        if let Some(file_name) = &self.log_file {
            let name = match file_name {
                Some(name) => name.clone(),
                None => {
                    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
                    format!("quad_log_{}.txt", date_and_time)
                }
            };
            match File::create(&name) {
                Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
                Err(e) => warn!("cannot create log file {}: {}", name, e),
            }
        }
        // a logger may already be installed by an earlier run in this process
        let _ = CombinedLogger::init(loggers);
        let res = self.solver();
        info!("Program ended");
        res
    }
    ////////////////////////////RESULTS///////////////////////////////////////////////////////////////////
    pub fn get_result(&self, method: QuadMethod) -> Option<&Result<QuadResult, QuadError>> {
        self.results.get(&method)
    }

    /// value computed by a method, None if it was not run or failed
    pub fn get_value(&self, method: QuadMethod) -> Option<f64> {
        match self.results.get(&method) {
            Some(Ok(res)) => Some(res.value),
            _ => None,
        }
    }

    pub fn results(&self) -> &BTreeMap<QuadMethod, Result<QuadResult, QuadError>> {
        &self.results
    }

    /// table with one row per method
    pub fn statistics_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![
            "method".to_string(),
            "value".to_string(),
            "error estimate".to_string(),
            "evaluations".to_string(),
            "iterations".to_string(),
            "time, ms".to_string(),
            "status".to_string(),
        ]);
        for (method, result) in self.results.iter() {
            let time = self
                .timings
                .get(method)
                .map(|t| format!("{:.3}", t.as_secs_f64() * 1e3))
                .unwrap_or_default();
            let row = match result {
                Ok(res) => vec![
                    method.to_string(),
                    format!("{:.15}", res.value),
                    res.error_estimate
                        .map(|e| format!("{:.3e}", e))
                        .unwrap_or_else(|| "-".to_string()),
                    res.evaluations.to_string(),
                    res.iterations.to_string(),
                    time,
                    "ok".to_string(),
                ],
                Err(e) => vec![
                    method.to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    time,
                    e.to_string(),
                ],
            };
            builder.push_record(row);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }

    fn calc_statistics(&self) {
        info!("\n \n CALC STATISTICS \n \n {}", self.statistics_table());
    }
}

impl Default for Quadrature {
    fn default() -> Self {
        Self::new()
    }
}

fn level_filter(level: &str) -> Result<LevelFilter, QuadError> {
    match level {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        _ => Err(QuadError::InvalidParameter(format!(
            "loglevel must be debug, info, warn, error or off, got {}",
            level
        ))),
    }
}

/// at most one value under a key
fn single_value<'a>(
    section: &'a SectionMap,
    title: &str,
    key: &str,
) -> Result<Option<&'a Value>, QuadError> {
    match section.get(key) {
        Some(Some(values)) => match values.as_slice() {
            [] => Ok(None),
            [value] => Ok(Some(value)),
            _ => Err(QuadError::Parse(format!(
                "{}: {} takes a single value, got {}",
                title,
                key,
                values.len()
            ))),
        },
        _ => Ok(None),
    }
}

fn non_negative(section: &SectionMap, title: &str, key: &str) -> Result<Option<usize>, QuadError> {
    match single_value(section, title, key)? {
        None => Ok(None),
        Some(Value::Integer(n)) if *n >= 0 => Ok(Some(*n as usize)),
        Some(other) => Err(QuadError::Parse(format!(
            "{}: {} must be a non-negative integer, got {}",
            title, key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::quadrature::quad_traits::ClosureFunction;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn quiet(quad: &mut Quadrature) {
        quad.set_loglevel(Some("off".to_string())).unwrap();
    }

    #[test]
    fn test_method_names() {
        assert_eq!(QuadMethod::Trapezoid.to_string(), "trapezoid");
        assert_eq!(QuadMethod::from_str("Gauss_Legendre").unwrap(), QuadMethod::GaussLegendre);
        assert_eq!(QuadMethod::from_str("runge").unwrap(), QuadMethod::SimpsonRunge);
        assert_eq!(
            QuadMethod::parse_list("simpson, trap ,").unwrap(),
            vec![QuadMethod::SimpsonRunge, QuadMethod::Trapezoid]
        );
        assert!(matches!(QuadMethod::parse_list("romberg"), Err(QuadError::Parse(_))));
        assert_eq!(QuadMethod::iter().count(), 3);
    }

    #[test]
    fn test_all_methods_from_strings() {
        let mut quad = Quadrature::new();
        quiet(&mut quad);
        quad.set_problem_from_str("sin(x)", "0", "pi", 6).unwrap();
        quad.solve().unwrap();
        assert_eq!(quad.results().len(), 3);
        for method in QuadMethod::iter() {
            assert_relative_eq!(quad.get_value(method).unwrap(), 2.0, epsilon = 1e-6);
        }
        let table = quad.statistics_table();
        assert!(table.contains("trapezoid"));
        assert!(table.contains("gauss"));
    }

    #[test]
    fn test_closure_problem() {
        let mut quad = Quadrature::new();
        quiet(&mut quad);
        quad.set_function(Box::new(ClosureFunction::new(|x: f64| x, "x".to_string())));
        quad.set_interval(0.0, 2.0).unwrap();
        quad.set_epsilon(1e-6).unwrap();
        quad.set_methods(vec![QuadMethod::GaussLegendre]).unwrap();
        quad.solver().unwrap();
        assert_relative_eq!(quad.get_value(QuadMethod::GaussLegendre).unwrap(), 2.0, epsilon = 1e-12);
        assert!(quad.get_result(QuadMethod::Trapezoid).is_none());
    }

    #[test]
    fn test_invalid_settings() {
        let mut quad = Quadrature::new();
        assert_eq!(
            quad.set_interval_from_str("1", "1"),
            Err(QuadError::InvalidInterval { a: 1.0, b: 1.0 })
        );
        assert!(matches!(quad.set_interval_from_str("2", "x"), Err(QuadError::Parse(_))));
        assert!(matches!(quad.set_digits(20), Err(QuadError::InvalidParameter(_))));
        assert!(matches!(quad.set_epsilon(0.0), Err(QuadError::InvalidTolerance(_))));
        assert!(matches!(quad.set_methods(vec![]), Err(QuadError::InvalidParameter(_))));
        assert!(matches!(
            quad.set_loglevel(Some("verbose".to_string())),
            Err(QuadError::InvalidParameter(_))
        ));
        assert!(matches!(quad.solver(), Err(QuadError::InvalidParameter(_))));
    }

    #[test]
    fn test_digits_to_epsilon() {
        let mut quad = Quadrature::new();
        quad.set_digits(8).unwrap();
        assert_relative_eq!(quad.epsilon, 1e-8);
        quad.set_digits(0).unwrap();
        assert_eq!(quad.epsilon, 1.0);
    }

    #[test]
    fn test_one_failing_method_keeps_others() {
        let mut quad = Quadrature::new();
        quiet(&mut quad);
        quad.set_problem_from_str("sin(200*x)", "0", "1", 12).unwrap();
        let mut config = QuadConfig::default();
        config.max_refinements = 2;
        quad.set_config(config);
        quad.set_methods(vec![QuadMethod::SimpsonRunge, QuadMethod::GaussLegendre]).unwrap();
        quad.solver().unwrap();
        assert!(matches!(
            quad.get_result(QuadMethod::SimpsonRunge),
            Some(Err(QuadError::DidNotConverge { .. }))
        ));
        assert!(quad.get_result(QuadMethod::GaussLegendre).unwrap().is_ok());
        assert!(quad.statistics_table().contains("did not converge"));
    }

    #[test]
    fn test_from_task_document() {
        let text = "integral\nfunction: x^3 - x\nlower: 0\nupper: 2\ndigits: 8\nmethods: simpson, gauss\nsolver_settings\ngauss_order: 16\nmax_refinements: 10\nparallel: true\nloglevel: off\n";
        let mut quad = Quadrature::from_task_document(text).unwrap();
        assert_eq!(quad.methods, vec![QuadMethod::SimpsonRunge, QuadMethod::GaussLegendre]);
        assert_eq!(quad.config.gauss_order, 16);
        assert_eq!(quad.config.max_refinements, 10);
        assert!(quad.config.parallel);
        assert_relative_eq!(quad.epsilon, 1e-8);
        quad.solve().unwrap();
        assert_relative_eq!(quad.get_value(QuadMethod::SimpsonRunge).unwrap(), 2.0, epsilon = 1e-8);
        assert_relative_eq!(quad.get_value(QuadMethod::GaussLegendre).unwrap(), 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_task_document_refinement_limit() {
        let task = |n: usize| {
            format!(
                "integral\nfunction: x\nlower: 0\nupper: 1\nsolver_settings\nmax_refinements: {}\n",
                n
            )
        };
        let quad = Quadrature::from_task_document(&task(MAX_REFINEMENTS_LIMIT)).unwrap();
        assert_eq!(quad.config.max_refinements, MAX_REFINEMENTS_LIMIT);
        match Quadrature::from_task_document(&task(40)) {
            Err(QuadError::Parse(message)) => assert!(message.contains("max_refinements")),
            Err(other) => panic!("expected Parse error, got {:?}", other),
            Ok(_) => panic!("max_refinements: 40 accepted"),
        }
    }

    #[test]
    fn test_task_document_errors() {
        assert!(matches!(
            Quadrature::from_task_document("integral\nlower: 0\nupper: 1\n"),
            Err(QuadError::Parse(_))
        ));
        assert!(matches!(
            Quadrature::from_task_document("integral\nfunction: x\nlower: 0\nupper: 1\ndigits: -3\n"),
            Err(QuadError::Parse(_))
        ));
        assert!(matches!(
            Quadrature::from_task_document("integral\nfunction: x\nlower: 0\nupper: 1\nmethods: romberg\n"),
            Err(QuadError::Parse(_))
        ));
        assert!(matches!(
            Quadrature::from_task_document("integral\nfunction: x\nlower: 2\nupper: 1\n"),
            Err(QuadError::InvalidInterval { .. })
        ));
        assert!(matches!(
            Quadrature::from_task_document("integral\nfunction: x\nlower: 0\nupper: 1\ntolerance: 3\n"),
            Err(QuadError::Parse(_))
        ));
    }

    #[test]
    fn test_from_task_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# exp on [0, 1]").unwrap();
        writeln!(file, "integral").unwrap();
        writeln!(file, "  function: exp(x)").unwrap();
        writeln!(file, "  lower: 0").unwrap();
        writeln!(file, "  upper: 1").unwrap();
        writeln!(file, "solver_settings").unwrap();
        writeln!(file, "  loglevel: off").unwrap();
        let mut quad = Quadrature::from_task_file(file.path()).unwrap();
        assert_eq!(quad.methods.len(), 3);
        quad.solve().unwrap();
        let exact = std::f64::consts::E - 1.0;
        for method in QuadMethod::iter() {
            assert!((quad.get_value(method).unwrap() - exact).abs() <= 1e-6);
        }
    }
}
