//! Composite Newton-Cotes rules over n subintervals of [a, b].
//!
//! Both rules use the step h = (a - b)/n and negate the weighted sum at the end, so
//! the sign of the result follows the orientation of the interval: integrating from
//! b down to a gives minus the integral from a to b.
use crate::numerical::evaluator::ExpressionEvaluator;
use crate::numerical::method_result::{FailureReason, IntegralEstimate, QuadratureRule};
use crate::numerical::sampling::linspace;
use log::{debug, info, warn};

fn check_subintervals(n: usize) -> Result<(), FailureReason> {
    if n == 0 {
        warn!("integration called with zero subintervals");
        return Err(FailureReason::InvalidArgument(
            "the number of subintervals must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Composite Simpson's rule, n must be even.
pub fn composite_simpsons_rule<F>(
    function: &F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<IntegralEstimate, FailureReason>
where
    F: ExpressionEvaluator + ?Sized,
{
    check_subintervals(n)?;
    if n % 2 != 0 {
        warn!("Simpson's rule needs an even number of subintervals, got {}", n);
        return Err(FailureReason::OddIntervalCount { n });
    }
    info!(
        "composite Simpson's rule for {} on [{}, {}] with {} subintervals",
        function.name(),
        a,
        b,
        n
    );
    let h = (a - b) / n as f64;
    let x = linspace(a, b, n);
    let f0 = function.evaluate_at(a)?;
    let fn_ = function.evaluate_at(b)?;
    let mut even_sum = 0.0;
    for i in 1..n / 2 {
        even_sum += 2.0 * function.evaluate_at(x[2 * i])?;
    }
    let mut odd_sum = 0.0;
    for i in 1..=n / 2 {
        odd_sum += 4.0 * function.evaluate_at(x[2 * i - 1])?;
    }
    debug!(
        "h = {}, f(a) = {}, f(b) = {}, even sum = {}, odd sum = {}",
        h, f0, fn_, even_sum, odd_sum
    );
    let value = -(h / 3.0) * (f0 + even_sum + odd_sum + fn_);
    info!("integral = {}", value);
    Ok(IntegralEstimate {
        value,
        subintervals: n,
        rule: QuadratureRule::Simpson,
    })
}

/// Composite trapezoidal rule.
pub fn composite_trapezoidal_rule<F>(
    function: &F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<IntegralEstimate, FailureReason>
where
    F: ExpressionEvaluator + ?Sized,
{
    check_subintervals(n)?;
    info!(
        "composite trapezoidal rule for {} on [{}, {}] with {} subintervals",
        function.name(),
        a,
        b,
        n
    );
    let h = (a - b) / n as f64;
    let x = linspace(a, b, n);
    let f0 = function.evaluate_at(a)?;
    let fn_ = function.evaluate_at(b)?;
    let mut interior_sum = 0.0;
    for xi in &x[1..n] {
        interior_sum += 2.0 * function.evaluate_at(*xi)?;
    }
    debug!(
        "h = {}, f(a) = {}, f(b) = {}, interior sum = {}",
        h, f0, fn_, interior_sum
    );
    let value = -(h / 2.0) * (f0 + interior_sum + fn_);
    info!("integral = {}", value);
    Ok(IntegralEstimate {
        value,
        subintervals: n,
        rule: QuadratureRule::Trapezoidal,
    })
}
