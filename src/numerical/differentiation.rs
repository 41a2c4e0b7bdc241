use crate::numerical::method_result::{DerivativeEstimate, DifferenceFormula, FailureReason};
use log::{info, warn};

/// Checks three samples with uniform spacing and returns the spacing h.
fn uniform_step(f_values: &[f64], x_values: &[f64]) -> Result<f64, FailureReason> {
    if f_values.len() != 3 || x_values.len() != 3 {
        warn!(
            "three point formula called with {} f values and {} x values",
            f_values.len(),
            x_values.len()
        );
        return Err(FailureReason::InvalidSampleShape {
            f_len: f_values.len(),
            x_len: x_values.len(),
        });
    }
    let left = x_values[1] - x_values[0];
    let right = x_values[2] - x_values[1];
    // exact comparison, no tolerance
    if left != right {
        warn!("non uniform spacing {} != {}", left, right);
        return Err(FailureReason::NonUniformSpacing { left, right });
    }
    if left == 0.0 {
        return Err(FailureReason::InvalidArgument(
            "the x values must be distinct".to_string(),
        ));
    }
    Ok(left)
}

/// f'(x_1) ~ (f_2 - f_0) / 2h
pub fn three_point_midpoint_derivative(
    f_values: &[f64],
    x_values: &[f64],
) -> Result<DerivativeEstimate, FailureReason> {
    let h = uniform_step(f_values, x_values)?;
    let estimate = (f_values[2] - f_values[0]) / (2.0 * h);
    info!("midpoint derivative at {}: {}", x_values[1], estimate);
    Ok(DerivativeEstimate {
        estimate,
        at: x_values[1],
        formula: DifferenceFormula::Midpoint,
    })
}

/// f'(x_0) ~ (-3 f_0 + 4 f_1 - f_2) / 2h
pub fn three_point_endpoint_derivative(
    f_values: &[f64],
    x_values: &[f64],
) -> Result<DerivativeEstimate, FailureReason> {
    let h = uniform_step(f_values, x_values)?;
    let estimate = (-3.0 * f_values[0] + 4.0 * f_values[1] - f_values[2]) / (2.0 * h);
    info!("endpoint derivative at {}: {}", x_values[0], estimate);
    Ok(DerivativeEstimate {
        estimate,
        at: x_values[0],
        formula: DifferenceFormula::Endpoint,
    })
}
