use std::ops::Add;

use crate::errors;
use crate::CensusError;

/// Sums optional values, treating absence as the additive identity.
///
/// The result is absent only when every input is absent.
pub fn combine<T, I>(values: I) -> Option<T>
where
    T: Add<Output = T>,
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().fold(None, |acc, value| match (acc, value) {
        (Some(left), Some(right)) => Some(left + right),
        (Some(left), None) => Some(left),
        (None, right) => right,
    })
}

/// Rounds half away from zero, the convention of PostgreSQL `numeric`.
///
/// Rounding works on the shortest decimal form of `value`, so `0.125`
/// rounds to `0.13` even though its binary value sits just below.
pub fn round_to(value: Option<f64>, decimals: u32) -> Option<f64> {
    value.map(|value| round_decimal(value, decimals))
}

fn round_decimal(value: f64, decimals: u32) -> f64 {
    let places = decimals as usize;
    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if fraction.len() <= places {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let Ok(mut scaled) = format!("{whole}{}", &fraction[..places]).parse::<u128>() else {
        return (value * factor).round() / factor;
    };
    if fraction.as_bytes()[places] >= b'5' {
        scaled += 1;
    }
    let rounded = scaled as f64 / factor;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// `100 * part / whole`, rounded half away from zero to `decimals` places.
///
/// Computed on the integer counts, so exact halves such as 23 of 80
/// (28.75%) round up. Fails when `whole` is absent or zero; an absent
/// `part` yields an absent result.
pub fn checked_percent(
    metric: &str,
    part: Option<i64>,
    whole: Option<i64>,
    decimals: u32,
) -> Result<Option<f64>, CensusError> {
    let whole = match whole {
        Some(value) if value != 0 => i128::from(value),
        _ => return Err(errors::division_error(metric)),
    };
    let Some(part) = part else {
        return Ok(None);
    };
    let scale = 10i128.pow(decimals);
    let numerator = i128::from(part) * 100 * scale;
    let (numerator, whole) = if whole < 0 {
        (-numerator, -whole)
    } else {
        (numerator, whole)
    };
    let magnitude = (2 * numerator.abs() + whole) / (2 * whole);
    let scaled = if numerator < 0 { -magnitude } else { magnitude };
    Ok(Some(scaled as f64 / scale as f64))
}
