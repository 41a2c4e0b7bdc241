use crate::numerical::method_result::FailureReason;
use log::debug;

/// n+1 evenly spaced points from `a` towards `b`: `a + i*(b - a)/n`.
///
/// The last point is not snapped to `b`, so it may differ from `b` by rounding.
/// For `n == 0` only `a` is returned.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![a];
    }
    let d = (b - a) / n as f64;
    (0..=n).map(|i| a + i as f64 * d).collect()
}

/// Parses a whitespace separated list of reals, e.g. "1 2 3.6".
///
/// "nan", "inf" and other non-finite spellings are rejected like any other bad token.
pub fn string_to_list(input: &str) -> Result<Vec<f64>, FailureReason> {
    let values = input
        .split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FailureReason::ParseError {
                token: token.to_string(),
            }),
        })
        .collect::<Result<Vec<f64>, FailureReason>>()?;
    debug!("parsed list {:?} from '{}'", values, input);
    Ok(values)
}

pub fn absolute(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}
