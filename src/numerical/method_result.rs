//! Outcomes of the numerical methods.
//!
//! Every method returns `Result<Payload, FailureReason>`; the payload type depends
//! on the method. `MethodResult` is the single tagged outcome handed to whatever
//! renders answers (the method table, the CLI): a value with its description, a
//! polynomial text, or a failure.
use crate::symbolic::parse_expr::ParseExprError;
use crate::symbolic::symbolic_engine::{DEFAULT_VARIABLE, Expr};
use crate::symbolic::symbolic_eval::EvaluationError;
use std::fmt;

/// Error types for the numerical methods
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// f(a) and f(b) have the same sign, no bracketed root is guaranteed
    SameSignEndpoints { fa: f64, fb: f64 },
    /// `kind` names the method that ran out of iterations
    MaxIterationsExceeded {
        max_iterations: usize,
        kind: EstimateKind,
    },
    LengthMismatch { f_len: usize, x_len: usize },
    /// the method needs a different number of sample points
    InvalidSampleShape { f_len: usize, x_len: usize },
    /// x_2 - x_1 != x_1 - x_0 (exact comparison)
    NonUniformSpacing { left: f64, right: f64 },
    OddIntervalCount { n: usize },
    ParseError { token: String },
    EvaluationFailed(EvaluationError),
    /// an argument outside the range the method is defined for
    InvalidArgument(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailureReason::SameSignEndpoints { fa, fb } => write!(
                f,
                "Both f(a) = {} and f(b) = {} are the same sign. Please try again.",
                fa, fb
            ),
            FailureReason::MaxIterationsExceeded {
                max_iterations,
                kind: EstimateKind::Root,
            } => write!(
                f,
                "The Bisection Method could not produce a root in under {} iterations for the tolerance level given.",
                max_iterations
            ),
            FailureReason::MaxIterationsExceeded {
                max_iterations,
                kind: EstimateKind::FixedPoint,
            } => write!(
                f,
                "Fixed Point Iteration could not produce a fixed point in under {} iterations for the tolerance level given.",
                max_iterations
            ),
            FailureReason::LengthMismatch { f_len, x_len } => write!(
                f,
                "The length of both arrays must be equivalent to one another (got {} f values and {} x values).",
                f_len, x_len
            ),
            FailureReason::InvalidSampleShape { f_len, x_len } => write!(
                f,
                "Wrong number of sample points (got {} f values and {} x values).",
                f_len, x_len
            ),
            FailureReason::NonUniformSpacing { left, right } => write!(
                f,
                "The spacing of the x values must be consistent ({} != {}).",
                left, right
            ),
            FailureReason::OddIntervalCount { n } => write!(
                f,
                "There must be an even number of subintervals (got {}).",
                n
            ),
            FailureReason::ParseError { token } => write!(f, "Cannot parse input '{}'.", token),
            FailureReason::EvaluationFailed(err) => {
                write!(f, "The function could not be evaluated: {}.", err)
            }
            FailureReason::InvalidArgument(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for FailureReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FailureReason::EvaluationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EvaluationError> for FailureReason {
    fn from(err: EvaluationError) -> Self {
        FailureReason::EvaluationFailed(err)
    }
}

impl From<ParseExprError> for FailureReason {
    fn from(err: ParseExprError) -> Self {
        FailureReason::ParseError { token: err.input }
    }
}

///////////////////////////////////////////PAYLOADS///////////////////////////////////////////

/// What an iterative method was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateKind {
    Root,
    FixedPoint,
}

/// Result of bisection or fixed point iteration
#[derive(Debug, Clone, PartialEq)]
pub struct RootEstimate {
    pub value: f64,
    /// f evaluated at `value`
    pub function_value: f64,
    pub iterations: usize,
    pub kind: EstimateKind,
}

impl fmt::Display for RootEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            EstimateKind::Root => write!(f, "{} is an approximate root of the function.", self.value),
            EstimateKind::FixedPoint => write!(
                f,
                "{} is an approximate fixed point of the function.",
                self.value
            ),
        }
    }
}

/// Unsimplified interpolating polynomial in `x`, kept as text.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    pub text: String,
}

impl LagrangePolynomial {
    /// Parses the text back into an expression.
    pub fn to_expr(&self) -> Result<Expr, ParseExprError> {
        Expr::parse_expression(&self.text)
    }

    /// Evaluates the polynomial text at `x`.
    pub fn evaluate_at(&self, x: f64) -> Result<f64, FailureReason> {
        Ok(self.to_expr()?.eval_at(DEFAULT_VARIABLE, x)?)
    }
}

impl fmt::Display for LagrangePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Three point difference formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceFormula {
    Midpoint,
    Endpoint,
}

/// Estimate of f' at one sample point
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeEstimate {
    pub estimate: f64,
    /// the x value the estimate belongs to
    pub at: f64,
    pub formula: DifferenceFormula,
}

impl fmt::Display for DerivativeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The derivative of the function is approximately {} at {}.",
            self.estimate, self.at
        )
    }
}

/// Composite quadrature rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureRule {
    Simpson,
    Trapezoidal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegralEstimate {
    pub value: f64,
    pub subintervals: usize,
    pub rule: QuadratureRule,
}

impl fmt::Display for IntegralEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "The integral of f over the region is {}.", self.value)
    }
}

///////////////////////////////////////////TAGGED OUTCOME///////////////////////////////////////////

/// Single outcome of one method call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Value { value: f64, description: String },
    Polynomial(String),
    Failure(FailureReason),
}

impl MethodResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, MethodResult::Failure(_))
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            MethodResult::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for MethodResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MethodResult::Value { description, .. } => write!(f, "{}", description),
            MethodResult::Polynomial(text) => write!(f, "{}", text),
            MethodResult::Failure(reason) => write!(f, "{}", reason),
        }
    }
}

impl From<Result<RootEstimate, FailureReason>> for MethodResult {
    fn from(outcome: Result<RootEstimate, FailureReason>) -> Self {
        match outcome {
            Ok(estimate) => MethodResult::Value {
                value: estimate.value,
                description: estimate.to_string(),
            },
            Err(reason) => MethodResult::Failure(reason),
        }
    }
}

impl From<Result<DerivativeEstimate, FailureReason>> for MethodResult {
    fn from(outcome: Result<DerivativeEstimate, FailureReason>) -> Self {
        match outcome {
            Ok(estimate) => MethodResult::Value {
                value: estimate.estimate,
                description: estimate.to_string(),
            },
            Err(reason) => MethodResult::Failure(reason),
        }
    }
}

impl From<Result<IntegralEstimate, FailureReason>> for MethodResult {
    fn from(outcome: Result<IntegralEstimate, FailureReason>) -> Self {
        match outcome {
            Ok(estimate) => MethodResult::Value {
                value: estimate.value,
                description: estimate.to_string(),
            },
            Err(reason) => MethodResult::Failure(reason),
        }
    }
}

impl From<Result<LagrangePolynomial, FailureReason>> for MethodResult {
    fn from(outcome: Result<LagrangePolynomial, FailureReason>) -> Self {
        match outcome {
            Ok(polynomial) => MethodResult::Polynomial(polynomial.text),
            Err(reason) => MethodResult::Failure(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_root_descriptions() {
        let root = RootEstimate {
            value: 2.0,
            function_value: 0.0,
            iterations: 1,
            kind: EstimateKind::Root,
        };
        assert_eq!(root.to_string(), "2 is an approximate root of the function.");
        let fixed = RootEstimate {
            kind: EstimateKind::FixedPoint,
            ..root
        };
        assert_eq!(
            fixed.to_string(),
            "2 is an approximate fixed point of the function."
        );
    }

    #[test]
    fn test_method_result_from_outcomes() {
        let ok: Result<IntegralEstimate, FailureReason> = Ok(IntegralEstimate {
            value: 0.5,
            subintervals: 10,
            rule: QuadratureRule::Trapezoidal,
        });
        let result = MethodResult::from(ok);
        assert!(result.is_success());
        assert_eq!(
            result,
            MethodResult::Value {
                value: 0.5,
                description: "The integral of f over the region is 0.5.".to_string()
            }
        );

        let failed: Result<IntegralEstimate, FailureReason> =
            Err(FailureReason::OddIntervalCount { n: 3 });
        let result = MethodResult::from(failed);
        assert!(!result.is_success());
        assert_eq!(
            result.failure(),
            Some(&FailureReason::OddIntervalCount { n: 3 })
        );
    }

    #[test]
    fn test_polynomial_outcome() {
        let poly: Result<LagrangePolynomial, FailureReason> = Ok(LagrangePolynomial {
            text: "(3)/(1)".to_string(),
        });
        assert_eq!(
            MethodResult::from(poly),
            MethodResult::Polynomial("(3)/(1)".to_string())
        );
    }

    #[test]
    fn test_evaluation_failure_keeps_source() {
        let reason = FailureReason::from(EvaluationError::DivisionByZero);
        assert_eq!(reason, FailureReason::EvaluationFailed(EvaluationError::DivisionByZero));
        assert!(reason.source().is_some());
        assert!(reason.to_string().contains("division by zero"));
    }

    #[test]
    fn test_parse_failure_reports_whole_text() {
        let err = Expr::parse_expression("x +* 1").unwrap_err();
        assert_eq!(
            FailureReason::from(err),
            FailureReason::ParseError {
                token: "x +* 1".to_string()
            }
        );
    }
}
