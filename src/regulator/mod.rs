//! Regulator solver: operating parameters, validation, and the closed-form
//! component computation for the three supported topologies.

mod compute;
mod params;
mod report;

pub use compute::{compute, ComputedReport, ExactValues};
pub use params::{OperatingParameters, Topology};
pub use report::render_report;
