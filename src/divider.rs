//! Joint search for a standard-value feedback divider pair.
//!
//! The divider must satisfy `r2 / r1 == ratio` with both resistors drawn from
//! the same standard series. Rounding the two legs independently is not
//! optimal: fixing `r1` first changes which `r2` values are reachable, so the
//! search tries every series member as `r1` and keeps the pair whose `r2`
//! match error is smallest.

use crate::error::{CalcError, Result};
use crate::series::{Series, SeriesMatch};

/// A standard-value divider pair chosen for a target `r2 / r1` ratio.
///
/// Both legs are expressed in kilohms; `r1` is a raw series mantissa used
/// directly as a kΩ value, `r2` is the decade-scaled series match for
/// `ratio * r1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerMatch {
    /// Reference leg, kΩ.
    pub r1_kohm: f64,
    /// Upper leg, kΩ, snapped to the series.
    pub r2_kohm: f64,
    /// Signed percent error of the snapped `r2` vs `ratio * r1`, truncated
    /// to 1 decimal.
    pub error_percent: f64,
    /// Series table index of the winning `r2` match.
    pub index: usize,
}

impl DividerMatch {
    /// The error with display sign convention, matching
    /// [`SeriesMatch::display_error_percent`].
    pub fn display_error_percent(&self) -> f64 {
        0.0 - self.error_percent
    }
}

/// Find the series pair `(r1, r2)` whose ratio best approximates `ratio`.
///
/// Every series mantissa except the trailing `10.0` (which duplicates the
/// `1.0` candidate one decade up) is tried as `r1` in kΩ; the ideal
/// `r2 = ratio * r1` is snapped to the same series and the candidate with the
/// smallest absolute `r2` error wins. Ties go to the first candidate.
///
/// # Errors
///
/// Returns [`CalcError::InvalidParameter`] if `ratio` is not a positive
/// finite number; a non-positive ratio has no realizable divider.
pub fn best_divider(ratio: f64, series: Series) -> Result<DividerMatch> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(CalcError::invalid_parameter(
            "ratio",
            ratio,
            "divider search requires a positive finite ratio",
        ));
    }

    let table = series.mantissas();
    let mut best_r1 = table[0];
    let mut best: SeriesMatch = series.nearest(ratio * best_r1)?;
    for &r1 in &table[1..table.len() - 1] {
        let m = series.nearest(ratio * r1)?;
        if m.error_percent.abs() < best.error_percent.abs() {
            best_r1 = r1;
            best = m;
        }
    }

    Ok(DividerMatch {
        r1_kohm: best_r1,
        r2_kohm: best.value,
        error_percent: best.error_percent,
        index: best.index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_three_on_e12() {
        // Target ratio 3.0 (vout = 5 V): 3.3k / 10k hits 3.03, within 1%.
        let d = best_divider(3.0, Series::E12).unwrap();
        assert_relative_eq!(d.r1_kohm, 3.3);
        assert_relative_eq!(d.r2_kohm, 10.0);
        assert_relative_eq!(d.error_percent, -1.0);
    }

    #[test]
    fn test_exact_ratio_prefers_first_candidate() {
        // Ratio 2.2 is reachable exactly from r1 = 1.0 already.
        let d = best_divider(2.2, Series::E12).unwrap();
        assert_relative_eq!(d.r1_kohm, 1.0);
        assert_relative_eq!(d.r2_kohm, 2.2);
        assert_eq!(d.error_percent, 0.0);
    }

    #[test]
    fn test_never_worse_than_fixed_first_r1() {
        let table = Series::E12.mantissas();
        for ratio in [0.37, 1.9, 3.0, 4.44, 8.6, 23.0] {
            let joint = best_divider(ratio, Series::E12).unwrap();
            let fixed = Series::E12.nearest(ratio * table[0]).unwrap();
            assert!(joint.error_percent.abs() <= fixed.error_percent.abs());
        }
    }

    #[test]
    fn test_pair_ratio_tracks_target() {
        let d = best_divider(8.6, Series::E24).unwrap();
        let achieved = d.r2_kohm / d.r1_kohm;
        assert!((achieved - 8.6).abs() / 8.6 < 0.02);
    }

    #[test]
    fn test_rejects_nonpositive_ratio() {
        assert!(best_divider(0.0, Series::E12).is_err());
        assert!(best_divider(-3.0, Series::E24).is_err());
        assert!(best_divider(f64::INFINITY, Series::E6).is_err());
    }
}
