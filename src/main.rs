#![allow(non_snake_case)]
use RustedQuad::Examples::quad_examples::quad_examples;
use RustedQuad::numerical::Quad_api::{DEFAULT_DIGITS, QuadMethod, Quadrature};
use RustedQuad::numerical::quadrature::quad_traits::QuadError;
use std::env;
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "usage:
  rusted_quad <function of x> <lower> <upper> [digits] [methods]
  rusted_quad --task <task file>
  rusted_quad --example <number>
  rusted_quad                      (demonstration: sin(x) on [0, pi])
methods: comma separated list of trapezoid, simpson, gauss (all by default)";

fn run(args: &[String]) -> Result<(), QuadError> {
    match args {
        [] => quad_examples(0),
        [flag, n] if flag == "--example" => {
            let example = n
                .parse::<usize>()
                .map_err(|_| QuadError::Parse(format!("example number expected, got '{}'", n)))?;
            quad_examples(example)
        }
        [flag, path] if flag == "--task" => {
            let mut quad = Quadrature::from_task_file(Path::new(path))?;
            quad.solve()?;
            println!("{}", quad.statistics_table());
            Ok(())
        }
        [function, lower, upper, rest @ ..] if rest.len() <= 2 => {
            let digits = match rest.first() {
                Some(d) => d
                    .parse::<u32>()
                    .map_err(|_| QuadError::Parse(format!("number of digits expected, got '{}'", d)))?,
                None => DEFAULT_DIGITS,
            };
            let mut quad = Quadrature::new();
            quad.set_problem_from_str(function, lower, upper, digits)?;
            if let Some(methods) = rest.get(1) {
                quad.set_methods(QuadMethod::parse_list(methods)?)?;
            }
            quad.solve()?;
            println!("{}", quad.statistics_table());
            Ok(())
        }
        _ => Err(QuadError::InvalidParameter(format!(
            "unexpected arguments {:?}\n{}",
            args, USAGE
        ))),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
