//! Which methods exist, which inputs each one asks for, and how raw text inputs
//! are turned into a call.
//!
//! Every input arrives as text (a form field, a line of a task file). `run` parses
//! the fields in the order of the method's argument descriptors, calls the method
//! and wraps the outcome into a `MethodResult`.
use crate::numerical::differentiation::{
    three_point_endpoint_derivative, three_point_midpoint_derivative,
};
use crate::numerical::evaluator::SymbolicFunction;
use crate::numerical::interpolation::lagrange_polynomial;
use crate::numerical::method_result::{FailureReason, MethodResult};
use crate::numerical::quadrature::{composite_simpsons_rule, composite_trapezoidal_rule};
use crate::numerical::root_finding::{IterationBudget, bisection_method, fixed_point_iteration};
use crate::numerical::sampling::string_to_list;
use log::info;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

/// What kind of text an input holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// expression in x, e.g. "sin(x) + 3*x**2"
    Expression,
    Real,
    /// non negative integer
    Integer,
    /// whitespace separated reals
    RealList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ArgumentKind,
}

const fn arg(key: &'static str, label: &'static str, kind: ArgumentKind) -> ArgumentDescriptor {
    ArgumentDescriptor { key, label, kind }
}

const FUNCTION: ArgumentDescriptor = arg(
    "function",
    "Enter the function f(x), e.g. sin(x) + 3*x**2 + 13 / (x - 2).",
    ArgumentKind::Expression,
);
const TOLERANCE: ArgumentDescriptor = arg("tolerance", "Set an error bound.", ArgumentKind::Real);
const MAX_ITERATIONS: ArgumentDescriptor = arg(
    "max_iterations",
    "Set a maximum number of iterations.",
    ArgumentKind::Integer,
);
static INTEGRATION_ARGUMENTS: [ArgumentDescriptor; 4] = [
    FUNCTION,
    arg("a", "Set an a for the interval of integration.", ArgumentKind::Real),
    arg("b", "Set a b for the interval of integration.", ArgumentKind::Real),
    arg(
        "n",
        "Set a number of intervals (even for Simpson's).",
        ArgumentKind::Integer,
    ),
];
static THREE_POINT_ARGUMENTS: [ArgumentDescriptor; 2] = [
    arg(
        "f_values",
        "Enter an array of f(x) values, e.g. 1 3.2 4.",
        ArgumentKind::RealList,
    ),
    arg(
        "x_values",
        "Enter an array of evenly spaced x values, e.g. 1 2 3 or 3 2 1.",
        ArgumentKind::RealList,
    ),
];

static BISECTION_ARGUMENTS: [ArgumentDescriptor; 5] = [
    FUNCTION,
    arg("a", "Set a left bound for the search.", ArgumentKind::Real),
    arg("b", "Set a right bound for the search.", ArgumentKind::Real),
    TOLERANCE,
    MAX_ITERATIONS,
];
static FIXED_POINT_ARGUMENTS: [ArgumentDescriptor; 4] = [
    FUNCTION,
    arg("p0", "Set an initial guess for a fixed point.", ArgumentKind::Real),
    TOLERANCE,
    MAX_ITERATIONS,
];
static LAGRANGE_ARGUMENTS: [ArgumentDescriptor; 2] = [
    arg(
        "f_values",
        "Enter an array of f(x) values, e.g. 3 3.2 4.",
        ArgumentKind::RealList,
    ),
    arg(
        "x_values",
        "Enter an array of x values, e.g. 1 2 3.6.",
        ArgumentKind::RealList,
    ),
];

/// The methods in the order they are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NumericalMethod {
    #[strum(to_string = "Bisection Method", serialize = "bisection")]
    Bisection,
    #[strum(to_string = "Fixed Point Iteration", serialize = "fixed_point")]
    FixedPoint,
    #[strum(to_string = "Lagrange Polynomial", serialize = "lagrange")]
    Lagrange,
    #[strum(to_string = "Three Point Midpoint (Differentiation)", serialize = "midpoint")]
    ThreePointMidpoint,
    #[strum(to_string = "Three Point Endpoint (Differentiation)", serialize = "endpoint")]
    ThreePointEndpoint,
    #[strum(to_string = "Composite Simpson's Rule", serialize = "simpson")]
    Simpson,
    #[strum(to_string = "Composite Trapezoidal Rule", serialize = "trapezoidal")]
    Trapezoidal,
}

impl NumericalMethod {
    /// short name used in task files
    pub fn key(&self) -> &'static str {
        match self {
            NumericalMethod::Bisection => "bisection",
            NumericalMethod::FixedPoint => "fixed_point",
            NumericalMethod::Lagrange => "lagrange",
            NumericalMethod::ThreePointMidpoint => "midpoint",
            NumericalMethod::ThreePointEndpoint => "endpoint",
            NumericalMethod::Simpson => "simpson",
            NumericalMethod::Trapezoidal => "trapezoidal",
        }
    }

    /// ordered inputs of the method
    pub fn arguments(&self) -> &'static [ArgumentDescriptor] {
        match self {
            NumericalMethod::Bisection => &BISECTION_ARGUMENTS,
            NumericalMethod::FixedPoint => &FIXED_POINT_ARGUMENTS,
            NumericalMethod::Lagrange => &LAGRANGE_ARGUMENTS,
            NumericalMethod::ThreePointMidpoint | NumericalMethod::ThreePointEndpoint => {
                &THREE_POINT_ARGUMENTS
            }
            NumericalMethod::Simpson | NumericalMethod::Trapezoidal => &INTEGRATION_ARGUMENTS,
        }
    }

    /// Name, key and the prompt of every input.
    pub fn usage(&self) -> String {
        let mut text = format!("{} ({})", self, self.key());
        for descriptor in self.arguments() {
            text.push_str(&format!("\n    {}: {}", descriptor.key, descriptor.label));
        }
        text
    }

    /// Runs the method on text inputs given in the order of `arguments()`.
    ///
    /// Trailing blank inputs are ignored. A missing input is an `InvalidArgument`
    /// failure, text that does not parse is a `ParseError` failure.
    pub fn run(&self, inputs: &[String]) -> MethodResult {
        info!("running {} with inputs {:?}", self, inputs);
        match self.compute(inputs) {
            Ok(result) => result,
            Err(reason) => MethodResult::Failure(reason),
        }
    }

    /// Same as `run` with the inputs looked up by descriptor key.
    pub fn run_named(&self, inputs: &HashMap<String, String>) -> MethodResult {
        let ordered: Vec<String> = self
            .arguments()
            .iter()
            .map(|descriptor| inputs.get(descriptor.key).cloned().unwrap_or_default())
            .collect();
        self.run(&ordered)
    }

    fn compute(&self, inputs: &[String]) -> Result<MethodResult, FailureReason> {
        let descriptors = self.arguments();
        let extra = inputs
            .iter()
            .skip(descriptors.len())
            .find(|s| !s.trim().is_empty());
        if let Some(extra) = extra {
            return Err(FailureReason::InvalidArgument(format!(
                "{} takes {} inputs, unexpected '{}'",
                self,
                descriptors.len(),
                extra
            )));
        }
        for (i, descriptor) in descriptors.iter().enumerate() {
            if inputs.get(i).is_none_or(|s| s.trim().is_empty()) {
                return Err(FailureReason::InvalidArgument(format!(
                    "missing value for '{}': {}",
                    descriptor.key, descriptor.label
                )));
            }
        }
        let result: MethodResult = match self {
            NumericalMethod::Bisection => {
                let function = parse_function(&inputs[0])?;
                let a = parse_real(&inputs[1])?;
                let b = parse_real(&inputs[2])?;
                let budget =
                    IterationBudget::new(parse_real(&inputs[3])?, parse_integer(&inputs[4])?)?;
                bisection_method(&function, a, b, budget.tolerance, budget.max_iterations).into()
            }
            NumericalMethod::FixedPoint => {
                let function = parse_function(&inputs[0])?;
                let p0 = parse_real(&inputs[1])?;
                let budget =
                    IterationBudget::new(parse_real(&inputs[2])?, parse_integer(&inputs[3])?)?;
                fixed_point_iteration(&function, p0, budget.tolerance, budget.max_iterations).into()
            }
            NumericalMethod::Lagrange => {
                let f_values = string_to_list(&inputs[0])?;
                let x_values = string_to_list(&inputs[1])?;
                lagrange_polynomial(&f_values, &x_values).into()
            }
            NumericalMethod::ThreePointMidpoint => three_point_midpoint_derivative(
                &string_to_list(&inputs[0])?,
                &string_to_list(&inputs[1])?,
            )
            .into(),
            NumericalMethod::ThreePointEndpoint => three_point_endpoint_derivative(
                &string_to_list(&inputs[0])?,
                &string_to_list(&inputs[1])?,
            )
            .into(),
            NumericalMethod::Simpson => {
                let function = parse_function(&inputs[0])?;
                composite_simpsons_rule(
                    &function,
                    parse_real(&inputs[1])?,
                    parse_real(&inputs[2])?,
                    parse_integer(&inputs[3])?,
                )
                .into()
            }
            NumericalMethod::Trapezoidal => {
                let function = parse_function(&inputs[0])?;
                composite_trapezoidal_rule(
                    &function,
                    parse_real(&inputs[1])?,
                    parse_real(&inputs[2])?,
                    parse_integer(&inputs[3])?,
                )
                .into()
            }
        };
        Ok(result)
    }
}

fn parse_function(input: &str) -> Result<SymbolicFunction, FailureReason> {
    Ok(SymbolicFunction::from_string(input)?)
}

fn parse_real(input: &str) -> Result<f64, FailureReason> {
    let token = input.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FailureReason::ParseError {
            token: token.to_string(),
        }),
    }
}

fn parse_integer(input: &str) -> Result<usize, FailureReason> {
    let token = input.trim();
    token.parse::<usize>().map_err(|_| FailureReason::ParseError {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn strings(inputs: &[&str]) -> Vec<String> {
        inputs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_names_and_keys() {
        let names: Vec<String> = NumericalMethod::iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Bisection Method",
                "Fixed Point Iteration",
                "Lagrange Polynomial",
                "Three Point Midpoint (Differentiation)",
                "Three Point Endpoint (Differentiation)",
                "Composite Simpson's Rule",
                "Composite Trapezoidal Rule"
            ]
        );
        for method in NumericalMethod::iter() {
            assert_eq!(NumericalMethod::from_str(&method.to_string()), Ok(method));
            assert_eq!(NumericalMethod::from_str(method.key()), Ok(method));
            assert_eq!(
                NumericalMethod::from_str(&method.key().to_uppercase()),
                Ok(method)
            );
            assert!(!method.arguments().is_empty());
        }
        assert!(NumericalMethod::from_str("newton").is_err());
    }

    #[test]
    fn test_argument_tables() {
        let keys: Vec<&str> = NumericalMethod::Bisection
            .arguments()
            .iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(keys, vec!["function", "a", "b", "tolerance", "max_iterations"]);
        assert_eq!(NumericalMethod::Simpson.arguments().len(), 4);
        assert_eq!(
            NumericalMethod::Lagrange.arguments()[0].kind,
            ArgumentKind::RealList
        );
        assert!(NumericalMethod::FixedPoint.usage().contains("p0: Set an initial guess"));
    }

    #[test]
    fn test_run_bisection() {
        let result = NumericalMethod::Bisection.run(&strings(&["x - 2", "0", "5", "1e-6", "100"]));
        match result {
            MethodResult::Value { value, description } => {
                assert_relative_eq!(value, 2.0, epsilon = 1e-6);
                assert!(description.ends_with("is an approximate root of the function."));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_run_lagrange_gives_polynomial() {
        let result = NumericalMethod::Lagrange.run(&strings(&["1 4 9", "1 2 3"]));
        assert!(matches!(result, MethodResult::Polynomial(_)));
    }

    #[test]
    fn test_run_ignores_trailing_blank_inputs() {
        let result = NumericalMethod::ThreePointMidpoint.run(&strings(&["1 4 9", "0 1 2", "", " "]));
        assert_eq!(
            result,
            MethodResult::Value {
                value: 4.0,
                description: "The derivative of the function is approximately 4 at 1.".to_string()
            }
        );
        let result = NumericalMethod::ThreePointMidpoint.run(&strings(&["1 4 9", "0 1 2", "7"]));
        assert!(matches!(
            result.failure(),
            Some(FailureReason::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_run_reports_failures() {
        let odd = NumericalMethod::Simpson.run(&strings(&["x", "0", "1", "3"]));
        assert_eq!(odd.failure(), Some(&FailureReason::OddIntervalCount { n: 3 }));

        let missing = NumericalMethod::Trapezoidal.run(&strings(&["x", "0", "1"]));
        assert!(matches!(
            missing.failure(),
            Some(FailureReason::InvalidArgument(msg)) if msg.contains("'n'")
        ));

        let bad_real = NumericalMethod::Trapezoidal.run(&strings(&["x", "zero", "1", "4"]));
        assert_eq!(
            bad_real.failure(),
            Some(&FailureReason::ParseError {
                token: "zero".to_string()
            })
        );

        let infinite_bound = NumericalMethod::Simpson.run(&strings(&["x", "0", "inf", "4"]));
        assert_eq!(
            infinite_bound.failure(),
            Some(&FailureReason::ParseError {
                token: "inf".to_string()
            })
        );

        let nan_sample = NumericalMethod::ThreePointEndpoint.run(&strings(&["nan 4 9", "0 1 2"]));
        assert_eq!(
            nan_sample.failure(),
            Some(&FailureReason::ParseError {
                token: "nan".to_string()
            })
        );

        let bad_list = NumericalMethod::Lagrange.run(&strings(&["1 4 nine", "1 2 3"]));
        assert_eq!(
            bad_list.failure(),
            Some(&FailureReason::ParseError {
                token: "nine".to_string()
            })
        );

        let bad_expression = NumericalMethod::Bisection.run(&strings(&["x +* 2", "0", "5", "1e-6", "100"]));
        assert_eq!(
            bad_expression.failure(),
            Some(&FailureReason::ParseError {
                token: "x +* 2".to_string()
            })
        );

        let bad_budget = NumericalMethod::FixedPoint.run(&strings(&["cos(x)", "0.5", "0", "100"]));
        assert!(matches!(
            bad_budget.failure(),
            Some(FailureReason::InvalidArgument(_))
        ));

        let negative_count = NumericalMethod::Simpson.run(&strings(&["x", "0", "1", "-2"]));
        assert!(matches!(
            negative_count.failure(),
            Some(FailureReason::ParseError { .. })
        ));
    }

    #[test]
    fn test_run_named() {
        let mut inputs = HashMap::new();
        inputs.insert("function".to_string(), "cos(x)".to_string());
        inputs.insert("p0".to_string(), "0.5".to_string());
        inputs.insert("tolerance".to_string(), "1e-6".to_string());
        inputs.insert("max_iterations".to_string(), "100".to_string());
        let result = NumericalMethod::FixedPoint.run_named(&inputs);
        match result {
            MethodResult::Value { value, .. } => assert_relative_eq!(value, 0.739085, epsilon = 1e-5),
            other => panic!("unexpected {:?}", other),
        }
        inputs.remove("p0");
        assert!(matches!(
            NumericalMethod::FixedPoint.run_named(&inputs).failure(),
            Some(FailureReason::InvalidArgument(_))
        ));
    }
}
