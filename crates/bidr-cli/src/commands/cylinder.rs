//! Lit/shadow "cylinder" command.
//!
//! Shadows each lit sample by a per-channel ratio, estimates the ISD from
//! the resulting pairs and samples the line between the two cluster means.
//! Real pixels of one material form a thin tube around that line.

use crate::CylinderArgs;
use anyhow::{Context, Result, bail};
use bidr_chroma::isd::estimate_isd;
use bidr_chroma::log::to_log_batch;
use bidr_chroma::trajectory::trajectory_between_clusters;
use bidr_core::EngineConfig;
use serde::Serialize;
use tracing::info;

use super::write_report;

#[derive(Debug, Serialize)]
pub struct CylinderReport {
    pub lit_log: Vec<[f64; 3]>,
    pub shadow_log: Vec<[f64; 3]>,
    pub isd: [f64; 3],
    /// Shadow mean first, lit mean last.
    pub trajectory: Vec<[f64; 3]>,
}

/// Runs the cylinder command.
pub fn run(args: CylinderArgs, config: &EngineConfig) -> Result<()> {
    let report = build_report(&args, config)?;
    write_report(&report, args.output.as_deref())
}

fn build_report(args: &CylinderArgs, config: &EngineConfig) -> Result<CylinderReport> {
    if args.lit.is_empty() {
        bail!("At least one --lit sample is required");
    }
    let config = match args.samples {
        Some(n) => {
            let c = config.with_sample_count(n);
            c.validate().context("Invalid --samples")?;
            c
        }
        None => *config,
    };

    let shadow: Vec<_> = args.lit.iter().map(|&l| l * args.ratio).collect();
    let lit_log = to_log_batch(&args.lit, config.eps);
    let shadow_log = to_log_batch(&shadow, config.eps);

    let isd = estimate_isd(&lit_log, &shadow_log, &config)?;
    let trajectory = trajectory_between_clusters(&lit_log, &shadow_log, &config)?;
    info!(
        samples = lit_log.len(),
        isd = ?isd.to_array(),
        trajectory = trajectory.len(),
        "estimated cylinder axis"
    );

    Ok(CylinderReport {
        lit_log: lit_log.iter().map(|p| p.to_array()).collect(),
        shadow_log: shadow_log.iter().map(|p| p.to_array()).collect(),
        isd: isd.to_array(),
        trajectory: trajectory.iter().map(|p| p.to_array()).collect(),
    })
}
