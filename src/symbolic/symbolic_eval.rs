use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;
use std::fmt;

/// Why an expression has no real value at a point.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    DivisionByZero,
    /// argument outside the real domain of a function (ln of a negative number etc.)
    DomainError { function: &'static str, argument: f64 },
    UnknownVariable(String),
    /// overflow or an indeterminate form produced a NaN or an infinity
    NonFinite { value: f64 },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationError::DivisionByZero => write!(f, "division by zero"),
            EvaluationError::DomainError { function, argument } => {
                write!(f, "{} is undefined at {}", function, argument)
            }
            EvaluationError::UnknownVariable(name) => {
                write!(f, "variable '{}' has no value", name)
            }
            EvaluationError::NonFinite { value } => {
                write!(f, "expression evaluated to a non-finite value ({})", value)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

fn finite(value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite { value })
    }
}

impl Expr {
    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates a one-variable expression with `var` set to `value`.
    ///
    /// Every node is checked: a zero divisor, an argument outside a function's real
    /// domain, a variable other than `var`, or a non-finite intermediate result is
    /// reported instead of silently producing NaN.
    pub fn eval_at(&self, var: &str, value: f64) -> Result<f64, EvaluationError> {
        match self {
            Expr::Var(name) if name == var => finite(value),
            Expr::Var(name) => Err(EvaluationError::UnknownVariable(name.clone())),
            Expr::Const(val) => finite(*val),
            Expr::Add(lhs, rhs) => finite(lhs.eval_at(var, value)? + rhs.eval_at(var, value)?),
            Expr::Sub(lhs, rhs) => finite(lhs.eval_at(var, value)? - rhs.eval_at(var, value)?),
            Expr::Mul(lhs, rhs) => finite(lhs.eval_at(var, value)? * rhs.eval_at(var, value)?),
            Expr::Div(lhs, rhs) => {
                let numerator = lhs.eval_at(var, value)?;
                let denominator = rhs.eval_at(var, value)?;
                if denominator == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                finite(numerator / denominator)
            }
            Expr::Pow(base, exp) => {
                let base_val = base.eval_at(var, value)?;
                let exp_val = exp.eval_at(var, value)?;
                if base_val == 0.0 && exp_val < 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                if base_val < 0.0 && exp_val.fract() != 0.0 {
                    return Err(EvaluationError::DomainError {
                        function: "pow",
                        argument: base_val,
                    });
                }
                finite(base_val.powf(exp_val))
            }
            Expr::Exp(expr) => finite(expr.eval_at(var, value)?.exp()),
            Expr::Ln(expr) => {
                let arg = expr.eval_at(var, value)?;
                if arg <= 0.0 {
                    return Err(EvaluationError::DomainError {
                        function: "ln",
                        argument: arg,
                    });
                }
                finite(arg.ln())
            }
            Expr::sin(expr) => finite(expr.eval_at(var, value)?.sin()),
            Expr::cos(expr) => finite(expr.eval_at(var, value)?.cos()),
            Expr::tg(expr) => {
                let arg = expr.eval_at(var, value)?;
                if arg.cos() == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                finite(arg.tan())
            }
            Expr::ctg(expr) => {
                let arg = expr.eval_at(var, value)?;
                if arg.sin() == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                finite(arg.cos() / arg.sin())
            }
            Expr::arcsin(expr) => {
                let arg = expr.eval_at(var, value)?;
                if !(-1.0..=1.0).contains(&arg) {
                    return Err(EvaluationError::DomainError {
                        function: "arcsin",
                        argument: arg,
                    });
                }
                finite(arg.asin())
            }
            Expr::arccos(expr) => {
                let arg = expr.eval_at(var, value)?;
                if !(-1.0..=1.0).contains(&arg) {
                    return Err(EvaluationError::DomainError {
                        function: "arccos",
                        argument: arg,
                    });
                }
                finite(arg.acos())
            }
            Expr::arctg(expr) => finite(expr.eval_at(var, value)?.atan()),
            Expr::arcctg(expr) => finite(PI / 2.0 - expr.eval_at(var, value)?.atan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eval(input: &str, x: f64) -> Result<f64, EvaluationError> {
        Expr::parse_expression(input).unwrap().eval_at("x", x)
    }

    #[test]
    fn test_eval_polynomial() {
        assert_relative_eq!(eval("x^2 + 2*x + 1", 3.0).unwrap(), 16.0);
    }

    #[test]
    fn test_eval_trigonometric() {
        assert_relative_eq!(eval("sin(x)^2 + cos(x)^2", 0.7).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("ctg(x)", 1.0).unwrap(), 1.0 / 1.0_f64.tan(), epsilon = 1e-12);
        assert_relative_eq!(eval("arcctg(x)", 1.0).unwrap(), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_exponential_and_log() {
        assert_relative_eq!(eval("ln(exp(x))", 2.5).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(x)", 9.0).unwrap(), 3.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("13 / (x - 2)", 2.0), Err(EvaluationError::DivisionByZero));
        assert_eq!(eval("x^-1", 0.0), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            eval("ln(x)", -1.0),
            Err(EvaluationError::DomainError { function: "ln", .. })
        ));
        assert!(matches!(
            eval("arcsin(x)", 2.0),
            Err(EvaluationError::DomainError { function: "arcsin", .. })
        ));
        assert!(matches!(
            eval("sqrt(x)", -4.0),
            Err(EvaluationError::DomainError { function: "pow", .. })
        ));
        // integer powers of negative numbers are fine
        assert_relative_eq!(eval("x^3", -2.0).unwrap(), -8.0);
    }

    #[test]
    fn test_unknown_variable() {
        assert_eq!(
            eval("x + y", 1.0),
            Err(EvaluationError::UnknownVariable("y".to_string()))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            eval("exp(x)", 1000.0),
            Err(EvaluationError::NonFinite { .. })
        ));
    }
}
