//! Error types for the regulator calculator.
//!
//! This module provides a unified error type [`CalcError`] covering the two
//! ways a computation can be rejected: an individual parameter outside its
//! bound, and a voltage relation that is impossible for the selected
//! topology. No other error kind crosses the library boundary; input text
//! that fails to parse as a number is a shell concern and never reaches the
//! core.

use thiserror::Error;

use crate::regulator::Topology;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An input fails its individual bound.
    #[error("Invalid parameter '{name}' = {value}: {message}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        message: String,
    },

    /// The vin/vout relation is wrong for the selected topology.
    #[error("{topology}: {message}")]
    TopologyConstraint { topology: Topology, message: String },
}

impl CalcError {
    /// Create an invalid-parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            message: message.into(),
        }
    }

    /// Create a topology-constraint error.
    pub fn topology(topology: Topology, message: impl Into<String>) -> Self {
        Self::TopologyConstraint {
            topology,
            message: message.into(),
        }
    }
}
