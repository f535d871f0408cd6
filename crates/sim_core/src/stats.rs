//! Summary statistics for sweep aggregation.
//!
//! Every sweep reduces Monte-Carlo samples through the median, which is the
//! robust location estimate used throughout the analysis (terminal values are
//! lognormal-ish and heavily right-skewed, so means are dominated by a few
//! lucky paths).

use crate::types::SimError;

/// Exact median of a sample.
///
/// Sorts a copy of the input (`total_cmp` ordering) and returns the middle
/// element, or the mean of the two middle elements for even-length samples.
///
/// # Errors
///
/// Returns [`SimError::EmptySample`] on an empty slice.
///
/// # Examples
///
/// ```
/// use sim_core::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert!(median(&[]).is_err());
/// ```
pub fn median(values: &[f64]) -> Result<f64, SimError> {
    if values.is_empty() {
        return Err(SimError::EmptySample);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok(0.5 * (sorted[mid - 1] + sorted[mid]))
    }
}

/// Pointwise median across a set of equal-length rows.
///
/// Given `rows` where each row is one simulated path, returns the path whose
/// value at index `t` is the median of all row values at index `t`.
///
/// # Errors
///
/// Returns [`SimError::EmptySample`] if `rows` is empty, and
/// [`SimError::InvalidParameter`] if the rows do not all share the same
/// length.
pub fn pointwise_median(rows: &[Vec<f64>]) -> Result<Vec<f64>, SimError> {
    let first = rows.first().ok_or(SimError::EmptySample)?;
    let width = first.len();
    if rows.iter().any(|row| row.len() != width) {
        return Err(SimError::invalid_parameter(
            "rows",
            "pointwise median requires equal-length rows",
        ));
    }

    let mut column = vec![0.0; rows.len()];
    let mut result = Vec::with_capacity(width);
    for t in 0..width {
        for (k, row) in rows.iter().enumerate() {
            column[k] = row[t];
        }
        result.push(median(&column)?);
    }
    Ok(result)
}
