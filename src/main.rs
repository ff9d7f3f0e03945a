//! mc34063 - Switching regulator component calculator
//!
//! Computes standard component values for an MC34063-family regulator and
//! prints the report to standard output.
//!
//! # Usage
//!
//! ```bash
//! mc34063 --topology step-down --vin 12 --vout 5 --iout 1
//! mc34063 --topology inverting --vin 5 --vout -12 --iout 0.5 --vripple 0.1
//! ```

use clap::Parser;
use mc34063_calc::{compute, render_report, OperatingParameters, Topology};

/// Switching regulator component calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Regulator topology
    #[arg(short, long, value_enum, default_value = "step-down")]
    topology: Topology,

    /// Input supply voltage, V
    #[arg(long, default_value_t = 12.0)]
    vin: f64,

    /// Output voltage, V (negative for inverting)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    vout: f64,

    /// Output current, A
    #[arg(long, default_value_t = 1.0)]
    iout: f64,

    /// Switch saturation voltage, V
    #[arg(long, default_value_t = 0.2)]
    vsat: f64,

    /// Rectifier forward voltage, V
    #[arg(long, default_value_t = 0.4)]
    vf: f64,

    /// Minimum switching frequency, Hz
    #[arg(long, default_value_t = 50_000.0)]
    fmin: f64,

    /// Peak-to-peak output ripple target, V
    #[arg(long, default_value_t = 0.05)]
    vripple: f64,
}

fn main() -> mc34063_calc::Result<()> {
    let args = Args::parse();

    let params = OperatingParameters {
        topology: args.topology,
        vin: args.vin,
        vout: args.vout,
        iout: args.iout,
        vsat: args.vsat,
        vf: args.vf,
        fmin: args.fmin,
        vripple: args.vripple,
    };

    let report = compute(&params)?;

    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    print!("{}", render_report(&params, &report, &timestamp));

    Ok(())
}
