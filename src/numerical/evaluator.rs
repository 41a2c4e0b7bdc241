use crate::symbolic::parse_expr::ParseExprError;
use crate::symbolic::symbolic_engine::{DEFAULT_VARIABLE, Expr};
use crate::symbolic::symbolic_eval::EvaluationError;

//////////////////////////////////TRAITS AND IMPLEMENTATIONS/////////////////////////////////
/// The "evaluate expression at a point" capability every method is written against.
pub trait ExpressionEvaluator {
    /// Evaluate the function at point x
    fn evaluate_at(&self, x: f64) -> Result<f64, EvaluationError>;

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_function"
    }
}

impl<T: ExpressionEvaluator + ?Sized> ExpressionEvaluator for &T {
    fn evaluate_at(&self, x: f64) -> Result<f64, EvaluationError> {
        (**self).evaluate_at(x)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Simple function wrapper for closures
///
/// A NaN or infinite output of the closure is reported as `EvaluationError::NonFinite`.
pub struct ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
    name: String,
}

impl<F> ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> ExpressionEvaluator for ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate_at(&self, x: f64) -> Result<f64, EvaluationError> {
        let value = (self.func)(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvaluationError::NonFinite { value })
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

////////////////////////SYMBOLIC FUNCTIONS//////////////////////////////////////////
/// Symbolic function wrapper: an `Expr` in the variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicFunction {
    expr: Expr,
    name: String,
}

impl SymbolicFunction {
    /// Create a new symbolic function in `x` from a string expression
    pub fn from_string(expr_str: &str) -> Result<Self, ParseExprError> {
        let expr = Expr::parse_expression(expr_str)?;
        Ok(Self {
            expr,
            name: expr_str.trim().to_string(),
        })
    }
}

impl ExpressionEvaluator for SymbolicFunction {
    fn evaluate_at(&self, x: f64) -> Result<f64, EvaluationError> {
        self.expr.eval_at(DEFAULT_VARIABLE, x)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
