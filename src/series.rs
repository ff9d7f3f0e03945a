//! IEC 60063 standard component value series (E6, E12, E24) and the
//! nearest-standard-value search.
//!
//! A series stores one decade of mantissas in `[1.0, 10.0]` (both endpoints
//! included, as the tables are conventionally printed). An arbitrary positive
//! value is matched by scaling it into the decade, picking the mantissa with
//! the smallest relative error, and scaling back.

use crate::error::{CalcError, Result};

/// One decade of the E6 series.
pub const E6_MANTISSAS: [f64; 7] = [1.0, 1.5, 2.2, 3.3, 4.7, 6.8, 10.0];

/// One decade of the E12 series.
pub const E12_MANTISSAS: [f64; 13] = [
    1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2, 10.0,
];

/// One decade of the E24 series.
pub const E24_MANTISSAS: [f64; 25] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1, 10.0,
];

/// A standard component value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    E6,
    E12,
    E24,
}

impl Series {
    /// The mantissa table for this series, ascending, spanning one decade.
    pub fn mantissas(&self) -> &'static [f64] {
        match self {
            Series::E6 => &E6_MANTISSAS,
            Series::E12 => &E12_MANTISSAS,
            Series::E24 => &E24_MANTISSAS,
        }
    }

    /// Find the series member closest (by relative error) to `value`.
    ///
    /// `value` is brought into the mantissa decade by repeated scaling, each
    /// table entry is compared by relative error `(mantissa - entry) / entry`,
    /// and the entry with the smallest absolute error wins. Ties go to the
    /// lower index, preserving series order.
    ///
    /// The returned [`SeriesMatch`] carries the standard value (truncated to
    /// three decimal places), the signed percent error (truncated to one
    /// decimal place), and the winning table index. A negative error means
    /// the exact target lies below the chosen standard value.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidParameter`] if `value` is not a positive
    /// finite number.
    pub fn nearest(&self, value: f64) -> Result<SeriesMatch> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "value",
                value,
                "series lookup requires a positive finite value",
            ));
        }

        // Scale into [1, 10), tracking the decade so that
        // value == mantissa * scale throughout.
        let mut mantissa = value;
        let mut scale = 1.0;
        while mantissa < 1.0 {
            mantissa *= 10.0;
            scale /= 10.0;
        }
        while mantissa >= 10.0 {
            mantissa /= 10.0;
            scale *= 10.0;
        }

        let table = self.mantissas();
        let mut best_idx = 0;
        let mut best_err = f64::INFINITY;
        for (i, entry) in table.iter().enumerate() {
            let err = (mantissa - entry) / entry;
            if err.abs() < best_err.abs() {
                best_err = err;
                best_idx = i;
            }
        }

        Ok(SeriesMatch {
            value: truncate_decimals(table[best_idx] * scale, 3),
            error_percent: truncate_decimals(best_err * 100.0, 1),
            index: best_idx,
        })
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Series::E6 => write!(f, "E6"),
            Series::E12 => write!(f, "E12"),
            Series::E24 => write!(f, "E24"),
        }
    }
}

/// Result of matching one exact value against one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesMatch {
    /// The standard value, in the caller's unit, truncated to 3 decimals.
    pub value: f64,
    /// Signed relative error of `mantissa` vs the chosen entry, in percent,
    /// truncated to 1 decimal. Negative when the target sits below the
    /// standard value.
    pub error_percent: f64,
    /// Index of the chosen entry in the series mantissa table.
    pub index: usize,
}

impl SeriesMatch {
    /// The error with display sign convention: negative when the standard
    /// value undershoots the exact target. Written as a subtraction so a
    /// zero error never displays as `-0`.
    pub fn display_error_percent(&self) -> f64 {
        0.0 - self.error_percent
    }
}

/// Truncate toward zero at `digits` decimal places.
///
/// Reporting uses truncation rather than rounding; the distinction is
/// observable in the last displayed digit of values and errors.
pub(crate) fn truncate_decimals(x: f64, digits: u32) -> f64 {
    let pow = 10f64.powi(digits as i32);
    (x * pow).trunc() / pow
}
