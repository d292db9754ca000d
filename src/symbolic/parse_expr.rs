//! a module turns a String expression into a symbolic expression
use crate::numerical::quadrature::quad_traits::QuadError;
use crate::symbolic::symbolic_engine::Expr;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{map, map_res, opt, recognize},
    error::ErrorKind,
    multi::many0,
    sequence::{delimited, pair, preceded},
};
use std::f64::consts::{E, PI};
//                  grammar, lowest precedence first
//   sum      := product (('+' | '-') product)*
//   product  := unary (('*' | '/') unary)*
//   unary    := '-' unary | power
//   power    := atom ('^' unary)?           right associative: 2^3^2 = 2^(3^2)
//   atom     := number | name '(' sum ')' | name | '(' sum ')'
// names pi and e are constants, any other bare name is a variable

/// skip whitespace around a parser
fn ws<'a, O, P>(inner: P) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// 1, 2.5, .5, 1e-3, 2.5E+4
fn parse_number(input: &str) -> IResult<&str, Expr> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = opt((one_of("eE"), opt(one_of("+-")), digit1));
    map_res(recognize(pair(mantissa, exponent)), |s: &str| {
        s.parse::<f64>().map(Expr::Const)
    })
    .parse(input)
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(alpha1, many0(alt((alphanumeric1, tag("_")))))).parse(input)
}

/// function call or named constant or variable
fn parse_name_or_call(input: &str) -> IResult<&str, Expr> {
    let (rest, name) = parse_name(input)?;
    let (after_space, _) = multispace0(rest)?;
    if after_space.starts_with('(') {
        let (rest, arg) = delimited(char('('), parse_sum, char(')')).parse(after_space)?;
        match Expr::apply_function(name, arg) {
            Some(expr) => Ok((rest, expr)),
            // no backtracking: a call of an unknown function is an error, not a variable
            None => Err(nom::Err::Failure(nom::error::Error::new(
                input,
                ErrorKind::Verify,
            ))),
        }
    } else {
        let expr = match name {
            "pi" => Expr::Const(PI),
            "e" => Expr::Const(E),
            _ => Expr::Var(name.to_string()),
        };
        Ok((rest, expr))
    }
}

fn parse_atom(input: &str) -> IResult<&str, Expr> {
    ws(alt((
        parse_number,
        parse_name_or_call,
        delimited(char('('), parse_sum, char(')')),
    )))
    .parse(input)
}

fn parse_power(input: &str) -> IResult<&str, Expr> {
    let (input, base) = parse_atom(input)?;
    let (input, exponent) = opt(preceded(ws(char('^')), parse_unary)).parse(input)?;
    let expr = match exponent {
        Some(exponent) => base.pow(exponent),
        None => base,
    };
    Ok((input, expr))
}

fn parse_unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded(ws(char('-')), parse_unary), |expr| -expr),
        parse_power,
    ))
    .parse(input)
}

/// left-to-right fold of a chain of operations of the same precedence
fn fold_operations(first: Expr, rest: Vec<(char, Expr)>) -> Expr {
    rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '+' => acc + rhs,
        '-' => acc - rhs,
        '*' => acc * rhs,
        _ => acc / rhs,
    })
}

fn parse_product(input: &str) -> IResult<&str, Expr> {
    let (input, first) = parse_unary(input)?;
    let (input, rest) = many0(pair(ws(one_of("*/")), parse_unary)).parse(input)?;
    Ok((input, fold_operations(first, rest)))
}

fn parse_sum(input: &str) -> IResult<&str, Expr> {
    let (input, first) = parse_product(input)?;
    let (input, rest) = many0(pair(ws(one_of("+-")), parse_product)).parse(input)?;
    Ok((input, fold_operations(first, rest)))
}

pub fn parse_expression_func(input: &str) -> Result<Expr, QuadError> {
    if input.trim().is_empty() {
        return Err(QuadError::Parse("empty expression".to_string()));
    }
    match parse_sum(input) {
        Ok((remaining, expr)) => {
            if remaining.trim().is_empty() {
                Ok(expr)
            } else {
                Err(QuadError::Parse(format!(
                    "unexpected input '{}' in expression '{}'",
                    remaining.trim(),
                    input
                )))
            }
        }
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::Verify => Err(QuadError::Parse(
            format!("unknown function at '{}' in expression '{}'", e.input, input),
        )),
        Err(e) => Err(QuadError::Parse(format!(
            "cannot parse expression '{}': {:?}",
            input, e
        ))),
    }
}

impl Expr {
    /// Parse a text expression into a symbolic expression
    ///# Example
    /// ```
    /// use RustedQuad::symbolic::symbolic_engine::Expr;
    /// let parsed_expression = Expr::parse_expression("x^2 * ln(x + 1)").unwrap();
    /// assert_eq!(format!("{}", parsed_expression), "((x ^ 2) * ln((x + 1)))");
    /// ```
    pub fn parse_expression(input: &str) -> Result<Expr, QuadError> {
        parse_expression_func(input)
    }
}
