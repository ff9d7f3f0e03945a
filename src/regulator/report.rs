//! Console report formatting.
//!
//! Pure string rendering over an already-computed report; no I/O and no
//! additional arithmetic beyond unit display. Errors are printed with the
//! display sign convention: negative when the standard value undershoots the
//! exact target.

use std::fmt::Write;

use super::compute::ComputedReport;
use super::params::OperatingParameters;

/// Program banner printed at the top of every report.
pub const BANNER: &str = "MC3x063A component calculator";

/// Render the full console report: banner with timestamp, topology, the
/// seven inputs, and the five standardized outputs with their percent
/// errors, one per line.
pub fn render_report(
    params: &OperatingParameters,
    report: &ComputedReport,
    timestamp: &str,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "================================================");
    let _ = writeln!(out, "{BANNER} - {timestamp}");
    let _ = writeln!(out, "Mode     = {}", params.topology);
    let _ = writeln!(out, "Vin      = {} V", params.vin);
    let _ = writeln!(out, "Vout     = {} V", params.vout);
    let _ = writeln!(out, "Iout     = {} A", params.iout);
    let _ = writeln!(out, "Vsat     = {} V", params.vsat);
    let _ = writeln!(out, "Vf       = {} V", params.vf);
    let _ = writeln!(out, "fmin     = {} Hz", params.fmin);
    let _ = writeln!(out, "Vripple  = {} mV", params.vripple * 1000.0);
    let _ = writeln!(
        out,
        "Ct       = {} pF ({} %)",
        report.ct_pf.value,
        report.ct_pf.display_error_percent()
    );
    let _ = writeln!(
        out,
        "Rsc      = 3 // {} Ohm ({} %)",
        report.rsc_ohm.value,
        report.rsc_ohm.display_error_percent()
    );
    let _ = writeln!(
        out,
        "R1       = {} kOhm  R2 = {} kOhm ({} %)",
        report.divider.r1_kohm,
        report.divider.r2_kohm,
        report.divider.display_error_percent()
    );
    let _ = writeln!(
        out,
        "Lmin     = {} uH ({} %)",
        report.lmin_uh.value,
        report.lmin_uh.display_error_percent()
    );
    let _ = writeln!(
        out,
        "Cout     = {} uF ({} %)",
        report.cout_uf.value,
        report.cout_uf.display_error_percent()
    );

    out
}
