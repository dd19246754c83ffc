//! Display curve command: linear vs normalized log mapping over [0, 1].

use crate::CurveArgs;
use anyhow::{Result, bail};
use bidr_chroma::display::display_curves;
use bidr_core::EngineConfig;
use serde::Serialize;

use super::write_report;

#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub eps: f64,
    pub x: Vec<f64>,
    pub linear: Vec<f64>,
    pub log: Vec<f64>,
}

/// Runs the curve command.
pub fn run(args: CurveArgs, config: &EngineConfig) -> Result<()> {
    let report = build_report(&args, config)?;
    write_report(&report, args.output.as_deref())
}

fn build_report(args: &CurveArgs, config: &EngineConfig) -> Result<CurveReport> {
    if args.count < 2 {
        bail!("--count must be at least 2, got {}", args.count);
    }
    let samples = display_curves(args.count, config.eps);
    let mut report = CurveReport {
        eps: config.eps,
        x: Vec::with_capacity(samples.len()),
        linear: Vec::with_capacity(samples.len()),
        log: Vec::with_capacity(samples.len()),
    };
    for (x, linear, log) in samples {
        report.x.push(x);
        report.linear.push(linear);
        report.log.push(log);
    }
    Ok(report)
}
