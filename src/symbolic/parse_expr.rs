//! turns a String expression into a symbolic expression
//!
//! # Example
//! ```
//! use RustedNumCalc::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("sin(x) + 3*x**2 + 13 / (x - 2)").unwrap();
//! println!("parsed_expression {}", parsed_expression);
//! let value = parsed_expression.eval_at("x", 0.0).unwrap();
//! assert!((value + 6.5).abs() < 1e-12);
//! ```
//
//  grammar, lowest precedence first:
//      add_sub  := mul_div (('+' | '-') mul_div)*
//      mul_div  := unary (('*' | '/') unary)*
//      unary    := ('-' | '+') unary | pow
//      pow      := primary (('^' | '**') unary)?        right associative
//      primary  := '(' add_sub ')' | number | identifier ['(' add_sub ')']
use crate::symbolic::symbolic_engine::Expr;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    error::ErrorKind,
    multi::{fold_many0, many0},
    sequence::{delimited, pair, preceded},
};
use std::f64::consts::{E, PI};
use std::fmt;

/// Error returned when a text cannot be turned into an `Expr`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseExprError {
    pub input: String,
    /// byte offset where parsing stopped
    pub position: usize,
    pub message: String,
}

impl fmt::Display for ParseExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot parse expression '{}' at position {}: {}",
            self.input, self.position, self.message
        )
    }
}

impl std::error::Error for ParseExprError {}

impl Expr {
    /// Parses a mathematical expression from string representation.
    ///
    /// # Supported Syntax
    /// - Variables: x, y, var_name
    /// - Constants: 3.14, 2.5e-3, pi, e
    /// - Operators: +, -, *, /, ^ and ** (power)
    /// - Functions: sin, cos, tan/tg, cot/ctg, exp, ln/log, sqrt, asin/arcsin,
    ///   acos/arccos, atan/arctan/arctg, acot/arcctg
    /// - Parentheses for grouping
    pub fn parse_expression(input: &str) -> Result<Expr, ParseExprError> {
        match all_consuming(ws(parse_add_sub)).parse(input) {
            Ok((_, expr)) => Ok(expr),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(ParseExprError {
                input: input.to_string(),
                position: input.len() - e.input.len(),
                message: describe(e.code, e.input),
            }),
            Err(nom::Err::Incomplete(_)) => Err(ParseExprError {
                input: input.to_string(),
                position: input.len(),
                message: "unexpected end of input".to_string(),
            }),
        }
    }
}

fn describe(code: ErrorKind, rest: &str) -> String {
    match code {
        ErrorKind::Verify => format!("unknown function near '{}'", rest.trim()),
        ErrorKind::Eof => format!("unexpected trailing input '{}'", rest.trim()),
        _ if rest.trim().is_empty() => "unexpected end of input".to_string(),
        other => format!("{:?} near '{}'", other, rest.trim()),
    }
}

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(one_of("+-")), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )
    .parse(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(one_of("*/")), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )
    .parse(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Expr> {
    // a Failure from the operand (unknown function) is passed on, an Error backtracks
    match preceded(ws(char('-')), parse_unary).parse(input) {
        Ok((rest, expr)) => {
            let negated = match expr {
                Expr::Const(val) => Expr::Const(-val),
                other => -other,
            };
            return Ok((rest, negated));
        }
        Err(nom::Err::Error(_)) => {}
        Err(e) => return Err(e),
    }
    match preceded(ws(char('+')), parse_unary).parse(input) {
        Ok((rest, expr)) => return Ok((rest, expr)),
        Err(nom::Err::Error(_)) => {}
        Err(e) => return Err(e),
    }
    parse_pow(input)
}

fn parse_pow(input: &str) -> IResult<&str, Expr> {
    let (rest, base) = parse_primary(input)?;
    match preceded(ws(alt((tag("**"), tag("^")))), parse_unary).parse(rest) {
        Ok((next, exponent)) => Ok((next, base.pow(exponent))),
        Err(nom::Err::Error(_)) => Ok((rest, base)),
        Err(e) => Err(e),
    }
}

fn parse_primary(input: &str) -> IResult<&str, Expr> {
    alt((parse_parens, parse_number, parse_identifier_or_call)).parse(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')'))).parse(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let number = recognize((
        mantissa,
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ));
    map_res(ws(number), |s: &str| s.parse::<f64>().map(Expr::Const)).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn parse_identifier_or_call(input: &str) -> IResult<&str, Expr> {
    let (rest, name) = ws(identifier).parse(input)?;
    let (rest, argument) =
        opt(delimited(ws(char('(')), parse_add_sub, ws(char(')')))).parse(rest)?;
    match argument {
        Some(arg) => match Expr::function_from_name(name, arg) {
            Some(expr) => Ok((rest, expr)),
            None => Err(nom::Err::Failure(nom::error::Error::new(
                input,
                ErrorKind::Verify,
            ))),
        },
        None => {
            let expr = match name {
                "pi" => Expr::Const(PI),
                "e" => Expr::Const(E),
                _ => Expr::Var(name.to_string()),
            };
            Ok((rest, expr))
        }
    }
}
