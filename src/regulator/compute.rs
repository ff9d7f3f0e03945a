//! Closed-form component computation.
//!
//! All three topologies share one backbone: the on/off time ratio
//! `ton/toff` follows from a topology-specific voltage relation, the switching
//! period `1/fmin` is then split into `toff` and `ton`, and the timing
//! capacitor, sense resistor, inductor, output capacitor and feedback divider
//! all follow from those two times. Only the `ton/toff` relation, the peak
//! switch current and the inductor/output-capacitor forms differ per
//! topology.

use crate::divider::{best_divider, DividerMatch};
use crate::error::Result;
use crate::series::{Series, SeriesMatch};
use crate::{CT_FARADS_PER_SECOND, R1_OHMS, SENSE_VOLTAGE};

use super::params::{OperatingParameters, Topology};

/// Exact analytical values, before any series matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactValues {
    /// Ratio `ton / toff` from the topology's voltage relation.
    pub tonontoff: f64,
    /// Switching period `ton + toff = 1 / fmin`, s.
    pub tonplustoff: f64,
    /// Switch on time per cycle, s.
    pub ton: f64,
    /// Switch off time per cycle, s.
    pub toff: f64,
    /// Timing capacitor, F.
    pub ct: f64,
    /// Peak switch current, A. Drives `rsc` and `lmin`; not itself reported.
    pub ipk: f64,
    /// Current-sense resistor (composite of the three parallel legs), Ω.
    pub rsc: f64,
    /// Minimum inductor value, H.
    pub lmin: f64,
    /// Output capacitor, F.
    pub cout: f64,
    /// Feedback divider reference leg, Ω. Fixed.
    pub r1: f64,
    /// Feedback divider upper leg, Ω, exact.
    pub r2: f64,
}

/// The shell-facing result: each reportable value snapped to its series,
/// in display units, plus the exact values they were derived from.
///
/// Series plan: Ct and Rsc against E12, Lmin and Cout against E6, the
/// feedback divider against E12.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedReport {
    /// Timing capacitor, pF, E12.
    pub ct_pf: SeriesMatch,
    /// One leg of the sense resistor, Ω, E12. Three of these in parallel
    /// realize the exact `rsc`, spreading the dissipated power.
    pub rsc_ohm: SeriesMatch,
    /// Feedback divider pair, kΩ, E12.
    pub divider: DividerMatch,
    /// Minimum inductor, µH, E6.
    pub lmin_uh: SeriesMatch,
    /// Output capacitor, µF, E6.
    pub cout_uf: SeriesMatch,
    /// The exact values behind the matches.
    pub exact: ExactValues,
}

/// Validate `params`, evaluate the topology's closed forms, and snap every
/// reportable value to its standard series.
///
/// Pure and idempotent: identical parameters produce an identical report,
/// and nothing is retained between calls.
///
/// # Errors
///
/// [`crate::CalcError::InvalidParameter`] if an input fails its bound,
/// [`crate::CalcError::TopologyConstraint`] if the vin/vout relation is
/// impossible for the selected topology. On error nothing is computed.
pub fn compute(params: &OperatingParameters) -> Result<ComputedReport> {
    params.validate()?;
    let exact = exact_values(params);

    Ok(ComputedReport {
        ct_pf: Series::E12.nearest(exact.ct / 1e-12)?,
        rsc_ohm: Series::E12.nearest(exact.rsc * 3.0)?,
        divider: best_divider(params.divider_ratio(), Series::E12)?,
        lmin_uh: Series::E6.nearest(exact.lmin / 1e-6)?,
        cout_uf: Series::E6.nearest(exact.cout / 1e-6)?,
        exact,
    })
}

/// Evaluate the closed forms for pre-validated parameters.
fn exact_values(params: &OperatingParameters) -> ExactValues {
    let &OperatingParameters {
        topology,
        vin,
        vout,
        iout,
        vsat,
        vf,
        fmin,
        vripple,
    } = params;

    let tonontoff = match topology {
        // Same relation for both: the inverting vout is negative, so the
        // denominator grows by |vout| instead of shrinking.
        Topology::StepDown | Topology::Inverting => (vout.abs() + vf) / (vin - vsat - vout),
        Topology::StepUp => (vout.abs() + vf - vin) / (vin - vsat),
    };
    let tonplustoff = 1.0 / fmin;
    let toff = tonplustoff / (tonontoff + 1.0);
    let ton = tonplustoff - toff;
    let ct = CT_FARADS_PER_SECOND * ton;

    let ipk = match topology {
        Topology::StepDown => 2.0 * iout.abs(),
        Topology::StepUp | Topology::Inverting => 2.0 * iout.abs() * (tonontoff + 1.0),
    };
    let rsc = SENSE_VOLTAGE / ipk;

    let lmin = match topology {
        Topology::StepDown => (vin - vsat - vout) / ipk * ton,
        Topology::StepUp | Topology::Inverting => (vin - vsat) / ipk * ton,
    };
    let cout = match topology {
        Topology::StepDown => ipk * tonplustoff / (8.0 * vripple),
        Topology::StepUp | Topology::Inverting => 9.0 * iout * ton / vripple,
    };

    let r1 = R1_OHMS;
    let r2 = params.divider_ratio() * r1;

    ExactValues {
        tonontoff,
        tonplustoff,
        ton,
        toff,
        ct,
        ipk,
        rsc,
        lmin,
        cout,
        r1,
        r2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_down_worked_example() {
        // 12 V -> 5 V at 1 A, 50 kHz, 50 mV ripple.
        let report = compute(&OperatingParameters::default()).unwrap();
        let e = &report.exact;

        assert_relative_eq!(e.tonontoff, 5.4 / 6.8, max_relative = 1e-12);
        assert_relative_eq!(e.tonplustoff, 2e-5, max_relative = 1e-12);
        assert_relative_eq!(e.toff, 1.114754e-5, max_relative = 1e-5);
        assert_relative_eq!(e.ton, 8.852459e-6, max_relative = 1e-5);
        assert_relative_eq!(e.ct, 3.540984e-10, max_relative = 1e-5);
        assert_relative_eq!(e.ipk, 2.0);
        assert_relative_eq!(e.rsc, 0.15);
        assert_relative_eq!(e.lmin, 3.009836e-5, max_relative = 1e-5);
        assert_relative_eq!(e.cout, 1e-4, max_relative = 1e-12);
        assert_relative_eq!(e.r1, 1000.0);
        assert_relative_eq!(e.r2, 3000.0);

        // Ct = 354.1 pF snaps down to 330 pF on E12.
        assert_relative_eq!(report.ct_pf.value, 330.0);
        assert_relative_eq!(report.ct_pf.error_percent, 7.3);
        // One sense leg: 3 * 0.15 = 0.45 -> 0.47 ohm.
        assert_relative_eq!(report.rsc_ohm.value, 0.47);
        // Divider for ratio 3.0: 3.3k / 10k.
        assert_relative_eq!(report.divider.r1_kohm, 3.3);
        assert_relative_eq!(report.divider.r2_kohm, 10.0);
        // Lmin = 29.6 uH -> 33 uH on E6; Cout = 100 uF exact on E6.
        assert_relative_eq!(report.lmin_uh.value, 33.0);
        assert_relative_eq!(report.cout_uf.value, 100.0);
        assert_eq!(report.cout_uf.error_percent, 0.0);
    }

    #[test]
    fn test_step_up_five_to_twelve() {
        let params = OperatingParameters {
            topology: Topology::StepUp,
            vin: 5.0,
            vout: 12.0,
            iout: 0.5,
            ..OperatingParameters::default()
        };
        let report = compute(&params).unwrap();
        let e = &report.exact;

        // tonontoff = (12 + 0.4 - 5) / (5 - 0.2) = 7.4 / 4.8
        assert_relative_eq!(e.tonontoff, 7.4 / 4.8, max_relative = 1e-12);
        assert_relative_eq!(e.ipk, 2.0 * 0.5 * (7.4 / 4.8 + 1.0), max_relative = 1e-12);
        assert_relative_eq!(e.lmin, (5.0 - 0.2) / e.ipk * e.ton, max_relative = 1e-12);
        assert_relative_eq!(e.cout, 9.0 * 0.5 * e.ton / 0.05, max_relative = 1e-12);
        assert_relative_eq!(e.r2, (12.0 / 1.25 - 1.0) * 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_inverting_five_to_minus_twelve() {
        let params = OperatingParameters {
            topology: Topology::Inverting,
            vin: 5.0,
            vout: -12.0,
            iout: 0.5,
            ..OperatingParameters::default()
        };
        let report = compute(&params).unwrap();
        let e = &report.exact;

        // Negative vout widens the denominator: (12 + 0.4) / (5 - 0.2 + 12).
        assert_relative_eq!(e.tonontoff, 12.4 / 16.8, max_relative = 1e-12);
        assert_relative_eq!(e.ipk, 1.0 * (12.4 / 16.8 + 1.0), max_relative = 1e-12);
        assert_relative_eq!(e.lmin, 4.8 / e.ipk * e.ton, max_relative = 1e-12);
        // Divider ratio uses |vout|.
        assert_relative_eq!(e.r2, 8600.0, max_relative = 1e-12);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let params = OperatingParameters {
            topology: Topology::StepUp,
            vin: 9.0,
            vout: 24.0,
            iout: 0.25,
            ..OperatingParameters::default()
        };
        let a = compute(&params).unwrap();
        let b = compute(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejection_produces_no_report() {
        let params = OperatingParameters {
            vout: 12.0, // == vin
            ..OperatingParameters::default()
        };
        assert!(matches!(
            compute(&params),
            Err(CalcError::TopologyConstraint { .. })
        ));
    }

    #[test]
    fn test_period_splits_consistently() {
        for params in [
            OperatingParameters::default(),
            OperatingParameters {
                topology: Topology::Inverting,
                vin: 15.0,
                vout: -5.0,
                ..OperatingParameters::default()
            },
        ] {
            let e = compute(&params).unwrap().exact;
            assert_relative_eq!(e.ton + e.toff, 1.0 / params.fmin, max_relative = 1e-12);
            assert_relative_eq!(e.ton / e.toff, e.tonontoff, max_relative = 1e-9);
        }
    }
}
