//! # MC34063 Calculator
//!
//! Component value calculator for MC34063-family switching regulators.
//!
//! This library provides:
//! - Closed-form component computation for step-down, step-up and inverting
//!   topologies (timing capacitor, sense resistor, inductor, output
//!   capacitor, feedback divider)
//! - Nearest-standard-value matching against the IEC 60063 E6/E12/E24 series
//! - A joint search for a feedback divider pair drawn from a standard series
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`series`] - Standard series tables and the nearest-value search
//! - [`divider`] - Joint R1/R2 divider-pair search
//! - [`regulator`] - Operating parameters, validation, computation, report
//! - [`error`] - The crate-wide error type
//!
//! ## Usage
//!
//! ```
//! use mc34063_calc::{compute, OperatingParameters, Topology};
//!
//! let params = OperatingParameters {
//!     topology: Topology::StepDown,
//!     vin: 12.0,
//!     vout: 5.0,
//!     iout: 1.0,
//!     vsat: 0.2,
//!     vf: 0.4,
//!     fmin: 50_000.0,
//!     vripple: 0.05,
//! };
//! let report = compute(&params).unwrap();
//! assert_eq!(report.ct_pf.value, 330.0); // 330 pF timing capacitor
//! ```
//!
//! The computation is a pure function from parameters to report: validation
//! rejects impossible inputs up front, the topology's design equations yield
//! exact values, and each reportable value is snapped to its series with the
//! approximation error attached.

pub mod divider;
pub mod error;
pub mod regulator;
pub mod series;

// Re-export main types for convenience
pub use divider::{best_divider, DividerMatch};
pub use error::{CalcError, Result};
pub use regulator::{compute, render_report, ComputedReport, ExactValues, OperatingParameters, Topology};
pub use series::{Series, SeriesMatch};

/// The IC's internal feedback reference voltage, V.
pub const FEEDBACK_REFERENCE: f64 = 1.25;

/// Timing capacitor per second of on time (Ct = 4e-5 * ton), F/s.
pub const CT_FARADS_PER_SECOND: f64 = 4.0e-5;

/// Current-limit sense threshold (Rsc = 0.3 / Ipk), V.
pub const SENSE_VOLTAGE: f64 = 0.3;

/// Feedback divider reference leg, Ω.
pub const R1_OHMS: f64 = 1000.0;

/// Supply voltage range accepted by the IC, V.
pub const VIN_MIN_V: f64 = 3.0;
/// Upper end of the accepted supply range, V.
pub const VIN_MAX_V: f64 = 40.0;

/// Practical switching frequency floor, Hz.
pub const FMIN_MIN_HZ: f64 = 10_000.0;
/// Oscillator ceiling, Hz.
pub const FMIN_MAX_HZ: f64 = 100_000.0;
