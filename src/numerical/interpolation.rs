//! Lagrange interpolation through a sample of points.
//!
//! `lagrange_polynomial` builds the interpolant as unsimplified text in `x`,
//! `lagrange_interpolate` evaluates the same interpolant numerically at a point.
use crate::numerical::method_result::{FailureReason, LagrangePolynomial};
use crate::symbolic::symbolic_eval::EvaluationError;
use itertools::Itertools;
use log::{info, warn};

fn check_sample(f_values: &[f64], x_values: &[f64]) -> Result<(), FailureReason> {
    if f_values.len() != x_values.len() {
        warn!(
            "lagrange: {} f values but {} x values",
            f_values.len(),
            x_values.len()
        );
        return Err(FailureReason::LengthMismatch {
            f_len: f_values.len(),
            x_len: x_values.len(),
        });
    }
    if f_values.is_empty() {
        return Err(FailureReason::InvalidSampleShape { f_len: 0, x_len: 0 });
    }
    Ok(())
}

/// Interpolating polynomial of the points (x_i, f_i) as text.
///
/// Term i is `(x - x_0)*...*(x - x_n)*(f_i)/(d_i)` with the factor j == i left out and
/// d_i the product of (x_i - x_j). Terms are joined with " + ". Repeated x values give
/// a zero denominator in the text; nothing is evaluated here.
pub fn lagrange_polynomial(
    f_values: &[f64],
    x_values: &[f64],
) -> Result<LagrangePolynomial, FailureReason> {
    check_sample(f_values, x_values)?;
    info!("lagrange polynomial through {} points", x_values.len());
    let mut terms = f_values.iter().zip(x_values).enumerate().map(|(i, (fi, xi))| {
        let others = x_values
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, xj)| *xj);
        let denominator: f64 = others.clone().map(|xj| xi - xj).product();
        let numerator = others.map(|xj| format!("(x - {})", xj)).join("*");
        if numerator.is_empty() {
            format!("({})/({})", fi, denominator)
        } else {
            format!("{}*({})/({})", numerator, fi, denominator)
        }
    });
    let text = terms.join(" + ");
    info!("P(x) = {}", text);
    Ok(LagrangePolynomial { text })
}

/// Value of the Lagrange interpolant at `x`.
pub fn lagrange_interpolate(
    f_values: &[f64],
    x_values: &[f64],
    x: f64,
) -> Result<f64, FailureReason> {
    check_sample(f_values, x_values)?;
    let mut sum = 0.0;
    for (i, (fi, xi)) in f_values.iter().zip(x_values).enumerate() {
        let mut numerator = 1.0;
        let mut denominator = 1.0;
        for (j, xj) in x_values.iter().enumerate() {
            if j != i {
                numerator *= x - xj;
                denominator *= xi - xj;
            }
        }
        if denominator == 0.0 {
            return Err(EvaluationError::DivisionByZero.into());
        }
        sum += fi * numerator / denominator;
    }
    Ok(sum)
}
