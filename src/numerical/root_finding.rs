use crate::numerical::evaluator::ExpressionEvaluator;
use crate::numerical::method_result::{EstimateKind, FailureReason, RootEstimate};
use crate::numerical::sampling::absolute;
use log::{debug, info, warn};

/// Tolerance and iteration cap of the iterative methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationBudget {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl IterationBudget {
    /// Checked constructor for user supplied budgets: tolerance > 0, max_iterations > 0.
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, FailureReason> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(FailureReason::InvalidArgument(format!(
                "tolerance must be a positive number, got {}",
                tolerance
            )));
        }
        if max_iterations == 0 {
            return Err(FailureReason::InvalidArgument(
                "maximum number of iterations must be positive".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }
}

/// Bisection on [a, b].
///
/// Stops as soon as |f(p)| < tolerance, so convergence is measured on the function
/// value and not on the interval width. f(a) is re-evaluated every iteration. A
/// product f(a)*f(p) that is exactly zero moves the right end (`b = p`).
pub fn bisection_method<F>(
    function: &F,
    mut a: f64,
    mut b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootEstimate, FailureReason>
where
    F: ExpressionEvaluator + ?Sized,
{
    info!(
        "bisection method for {} on [{}, {}], tolerance {}, max iterations {}",
        function.name(),
        a,
        b,
        tolerance,
        max_iterations
    );
    let fa = function.evaluate_at(a)?;
    let fb = function.evaluate_at(b)?;
    if fa * fb > 0.0 {
        warn!("f(a) = {} and f(b) = {} have the same sign", fa, fb);
        return Err(FailureReason::SameSignEndpoints { fa, fb });
    }

    for iteration in 1..=max_iterations {
        let p = (a + b) / 2.0;
        let fp = function.evaluate_at(p)?;
        debug!(
            "iteration {}: p = {:.10}, f(p) = {:.2e}, interval = [{:.6}, {:.6}]",
            iteration, p, fp, a, b
        );
        if absolute(fp) < tolerance {
            info!("bisection converged to {} in {} iterations", p, iteration);
            return Ok(RootEstimate {
                value: p,
                function_value: fp,
                iterations: iteration,
                kind: EstimateKind::Root,
            });
        }
        let fa = function.evaluate_at(a)?;
        if fa * fp > 0.0 {
            a = p;
        } else {
            b = p;
        }
    }
    warn!(
        "bisection did not reach tolerance {} in {} iterations",
        tolerance, max_iterations
    );
    Err(FailureReason::MaxIterationsExceeded {
        max_iterations,
        kind: EstimateKind::Root,
    })
}

/// Fixed point iteration p <- f(p) starting from p0.
///
/// Returns the p for which |f(p) - p| < tolerance, i.e. the value before the last
/// update. Divergence is not detected, a diverging sequence just runs out of iterations.
pub fn fixed_point_iteration<F>(
    function: &F,
    p0: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootEstimate, FailureReason>
where
    F: ExpressionEvaluator + ?Sized,
{
    info!(
        "fixed point iteration for {} from p0 = {}, tolerance {}, max iterations {}",
        function.name(),
        p0,
        tolerance,
        max_iterations
    );
    let mut p = p0;
    for iteration in 1..=max_iterations {
        let fp = function.evaluate_at(p)?;
        debug!("iteration {}: p = {:.10}, f(p) = {:.10}", iteration, p, fp);
        if absolute(fp - p) < tolerance {
            info!("fixed point {} found in {} iterations", p, iteration);
            return Ok(RootEstimate {
                value: p,
                function_value: fp,
                iterations: iteration,
                kind: EstimateKind::FixedPoint,
            });
        }
        p = fp;
    }
    warn!(
        "fixed point iteration did not reach tolerance {} in {} iterations, last p = {}",
        tolerance, max_iterations, p
    );
    Err(FailureReason::MaxIterationsExceeded {
        max_iterations,
        kind: EstimateKind::FixedPoint,
    })
}

/////////////////////////////////////////TESTS////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::evaluator::{ClosureFunction, SymbolicFunction};
    use crate::symbolic::symbolic_eval::EvaluationError;
    use approx::assert_relative_eq;

    #[test]
    fn test_bisection_linear() {
        let func = SymbolicFunction::from_string("x - 2").unwrap();
        let result = bisection_method(&func, 0.0, 5.0, 1e-6, 100).unwrap();
        assert_relative_eq!(result.value, 2.0, epsilon = 1e-6);
        assert!(result.function_value.abs() < 1e-6);
        assert_eq!(result.kind, EstimateKind::Root);
    }

    #[test]
    fn test_bisection_descending_bounds() {
        let func = ClosureFunction::new(|x| x * x - 4.0, "x^2 - 4".to_string());
        let result = bisection_method(&func, 5.0, 0.0, 1e-8, 100).unwrap();
        assert_relative_eq!(result.value, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_bisection_same_sign_endpoints() {
        let func = SymbolicFunction::from_string("x^2 + 1").unwrap();
        let result = bisection_method(&func, -1.0, 1.0, 1e-6, 100);
        assert_eq!(
            result,
            Err(FailureReason::SameSignEndpoints { fa: 2.0, fb: 2.0 })
        );
    }

    #[test]
    fn test_bisection_max_iterations() {
        let func = SymbolicFunction::from_string("x - 2").unwrap();
        let result = bisection_method(&func, 0.0, 5.0, 1e-12, 5);
        assert!(matches!(
            result,
            Err(FailureReason::MaxIterationsExceeded {
                max_iterations: 5,
                kind: EstimateKind::Root
            })
        ));
        assert_eq!(
            result.unwrap_err().to_string(),
            "The Bisection Method could not produce a root in under 5 iterations for the tolerance level given."
        );
        let result = bisection_method(&func, 0.0, 5.0, 1e-6, 0);
        assert!(matches!(
            result,
            Err(FailureReason::MaxIterationsExceeded {
                max_iterations: 0,
                kind: EstimateKind::Root
            })
        ));
    }

    #[test]
    fn test_bisection_zero_product_moves_right_end() {
        // f(a) = 0 makes every product zero, so b keeps shrinking towards a
        let func = ClosureFunction::new(|x| x, "x".to_string());
        let result = bisection_method(&func, 0.0, 4.0, 1e-6, 100).unwrap();
        assert_eq!(result.iterations, 22);
        assert_relative_eq!(result.value, 4.0 / 2f64.powi(22));

        // exact zero at the first midpoint with a zero tolerance: b = 2 is taken and
        // the search never returns to p = 2
        let func = ClosureFunction::new(|x| x - 2.0, "x - 2".to_string());
        let result = bisection_method(&func, 0.0, 4.0, 0.0, 30);
        assert_eq!(
            result,
            Err(FailureReason::MaxIterationsExceeded {
                max_iterations: 30,
                kind: EstimateKind::Root
            })
        );
    }

    #[test]
    fn test_bisection_evaluation_failure_aborts() {
        let func = SymbolicFunction::from_string("1/x").unwrap();
        let result = bisection_method(&func, -1.0, 1.0, 1e-6, 100);
        assert_eq!(
            result,
            Err(FailureReason::EvaluationFailed(EvaluationError::DivisionByZero))
        );
    }

    #[test]
    fn test_fixed_point_cos() {
        let func = SymbolicFunction::from_string("cos(x)").unwrap();
        let result = fixed_point_iteration(&func, 0.5, 1e-6, 100).unwrap();
        assert_relative_eq!(result.value, 0.739085, epsilon = 1e-5);
        assert_eq!(result.kind, EstimateKind::FixedPoint);
        // the returned value is the one before the last update
        assert_relative_eq!(result.function_value, result.value.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_fixed_point_returns_pre_update_value() {
        let func = ClosureFunction::new(|x| x / 2.0 + 1.0, "x/2 + 1".to_string());
        let result = fixed_point_iteration(&func, 2.0, 1e-9, 10).unwrap();
        assert_eq!(result.value, 2.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_fixed_point_diverges() {
        let func = SymbolicFunction::from_string("2*x").unwrap();
        let result = fixed_point_iteration(&func, 1.0, 1e-6, 10);
        assert!(matches!(
            result,
            Err(FailureReason::MaxIterationsExceeded {
                max_iterations: 10,
                kind: EstimateKind::FixedPoint
            })
        ));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Fixed Point Iteration could not produce a fixed point in under 10 iterations for the tolerance level given."
        );
    }

    #[test]
    fn test_fixed_point_evaluation_failure() {
        let func = SymbolicFunction::from_string("ln(x)").unwrap();
        let result = fixed_point_iteration(&func, 0.5, 1e-6, 100);
        assert!(matches!(
            result,
            Err(FailureReason::EvaluationFailed(
                EvaluationError::DomainError { function: "ln", .. }
            ))
        ));
    }

    #[test]
    fn test_methods_are_idempotent() {
        let func = SymbolicFunction::from_string("x^3 - x - 2").unwrap();
        assert_eq!(
            bisection_method(&func, 1.0, 2.0, 1e-8, 100),
            bisection_method(&func, 1.0, 2.0, 1e-8, 100)
        );
        let func = SymbolicFunction::from_string("cos(x)").unwrap();
        assert_eq!(
            fixed_point_iteration(&func, 0.5, 1e-6, 100),
            fixed_point_iteration(&func, 0.5, 1e-6, 100)
        );
    }

    #[test]
    fn test_iteration_budget() {
        assert_eq!(
            IterationBudget::new(1e-6, 100),
            Ok(IterationBudget::default())
        );
        assert!(matches!(
            IterationBudget::new(0.0, 100),
            Err(FailureReason::InvalidArgument(_))
        ));
        assert!(matches!(
            IterationBudget::new(-1.0, 100),
            Err(FailureReason::InvalidArgument(_))
        ));
        assert!(matches!(
            IterationBudget::new(1e-6, 0),
            Err(FailureReason::InvalidArgument(_))
        ));
    }
}
