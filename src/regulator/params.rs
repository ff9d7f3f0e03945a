//! Operating parameters and their validation.

use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, Result};
use crate::{FEEDBACK_REFERENCE, FMIN_MAX_HZ, FMIN_MIN_HZ, VIN_MAX_V, VIN_MIN_V};

/// Regulator circuit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Topology {
    /// Buck: vout below vin, same polarity.
    StepDown,
    /// Boost: vout above vin, same polarity.
    StepUp,
    /// Buck-boost invert: negative vout from positive vin.
    Inverting,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::StepDown => write!(f, "StepDown"),
            Topology::StepUp => write!(f, "StepUp"),
            Topology::Inverting => write!(f, "Inverting"),
        }
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stepdown" | "step-down" | "buck" => Ok(Topology::StepDown),
            "stepup" | "step-up" | "boost" => Ok(Topology::StepUp),
            "inverting" | "invert" => Ok(Topology::Inverting),
            other => Err(format!("unknown topology '{other}'")),
        }
    }
}

/// The seven operating parameters plus the topology they apply to.
///
/// Sign convention: `vout` is negative for [`Topology::Inverting`] and
/// positive otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingParameters {
    pub topology: Topology,
    /// Input supply voltage, V.
    pub vin: f64,
    /// Regulated output voltage, V.
    pub vout: f64,
    /// Output current, A.
    pub iout: f64,
    /// Switch saturation voltage, V.
    pub vsat: f64,
    /// Rectifier forward voltage, V.
    pub vf: f64,
    /// Minimum switching frequency, Hz.
    pub fmin: f64,
    /// Peak-to-peak output ripple target, V.
    pub vripple: f64,
}

impl Default for OperatingParameters {
    /// The 12 V → 5 V, 1 A step-down operating point used as the start-up
    /// example.
    fn default() -> Self {
        Self {
            topology: Topology::StepDown,
            vin: 12.0,
            vout: 5.0,
            iout: 1.0,
            vsat: 0.2,
            vf: 0.4,
            fmin: 50_000.0,
            vripple: 0.05,
        }
    }
}

impl OperatingParameters {
    /// Check every individual parameter bound, then the topology's voltage
    /// relation. Returns the first violation found; on success no values
    /// have been computed yet.
    pub fn validate(&self) -> Result<()> {
        self.check_bounds()?;
        self.check_topology()?;
        self.check_vout_reference()
    }

    fn check_bounds(&self) -> Result<()> {
        if !self.iout.is_finite() || self.iout <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "iout",
                self.iout,
                "output current must be positive",
            ));
        }
        if !self.vripple.is_finite() || self.vripple <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "vripple",
                self.vripple,
                "ripple target must be positive",
            ));
        }
        if !self.vsat.is_finite() || self.vsat <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "vsat",
                self.vsat,
                "switch saturation voltage must be positive",
            ));
        }
        if !self.vf.is_finite() || self.vf <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "vf",
                self.vf,
                "rectifier forward voltage must be positive",
            ));
        }
        if !self.vin.is_finite() || self.vin < VIN_MIN_V || self.vin > VIN_MAX_V {
            return Err(CalcError::invalid_parameter(
                "vin",
                self.vin,
                format!("supply voltage must be within [{VIN_MIN_V}, {VIN_MAX_V}] V"),
            ));
        }
        if !self.fmin.is_finite() || self.fmin < FMIN_MIN_HZ || self.fmin > FMIN_MAX_HZ {
            return Err(CalcError::invalid_parameter(
                "fmin",
                self.fmin,
                format!("switching frequency must be within [{FMIN_MIN_HZ}, {FMIN_MAX_HZ}] Hz"),
            ));
        }
        if !self.vout.is_finite() {
            return Err(CalcError::invalid_parameter(
                "vout",
                self.vout,
                "output voltage must be finite",
            ));
        }
        Ok(())
    }

    // The divider cannot set an output below the feedback reference; checked
    // after the topology relation so that e.g. an inverting vout of 0 is
    // reported as the topology violation it is.
    fn check_vout_reference(&self) -> Result<()> {
        if self.vout.abs() <= FEEDBACK_REFERENCE {
            return Err(CalcError::invalid_parameter(
                "vout",
                self.vout,
                format!("|vout| must exceed the {FEEDBACK_REFERENCE} V feedback reference"),
            ));
        }
        Ok(())
    }

    fn check_topology(&self) -> Result<()> {
        match self.topology {
            Topology::StepDown => {
                if self.vout <= 0.0 || self.vout >= self.vin {
                    return Err(CalcError::topology(
                        self.topology,
                        "step-down requires 0 < vout < vin",
                    ));
                }
            }
            Topology::StepUp => {
                if self.vout <= self.vin {
                    return Err(CalcError::topology(
                        self.topology,
                        "step-up requires vout > vin",
                    ));
                }
            }
            Topology::Inverting => {
                if self.vout >= 0.0 {
                    return Err(CalcError::topology(
                        self.topology,
                        "inverting requires vout < 0",
                    ));
                }
            }
        }
        Ok(())
    }

    /// The target `r2 / r1` ratio set by the feedback reference:
    /// `|vout| / 1.25 - 1`.
    pub fn divider_ratio(&self) -> f64 {
        self.vout.abs() / FEEDBACK_REFERENCE - 1.0
    }
}
