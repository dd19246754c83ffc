//! ISD estimation command.

use crate::IsdArgs;
use anyhow::{Result, bail};
use bidr_chroma::basis::build_basis;
use bidr_chroma::isd::{IsdEstimator, IsdSource};
use bidr_chroma::log::to_log_batch;
use bidr_core::EngineConfig;
use serde::Serialize;
use tracing::info;

use super::{BasisReport, write_report};

#[derive(Debug, Serialize)]
pub struct IsdReport {
    pub source: &'static str,
    pub basis: BasisReport,
}

/// Runs the isd command.
pub fn run(args: IsdArgs, config: &EngineConfig) -> Result<()> {
    let report = build_report(&args, config)?;
    write_report(&report, args.output.as_deref())
}

fn build_report(args: &IsdArgs, config: &EngineConfig) -> Result<IsdReport> {
    let estimator = IsdEstimator::new(*config);

    let (name, isd) = if let (Some(ambient), Some(direct)) = (args.ambient, args.direct) {
        let source = IsdSource::IlluminantVectors { ambient, direct };
        (source.name(), estimator.estimate(&source)?)
    } else if !args.lit.is_empty() || !args.shadow.is_empty() {
        let lit = to_log_batch(&args.lit, config.eps);
        let shadow = to_log_batch(&args.shadow, config.eps);
        let source = if args.clusters {
            IsdSource::ClusterMeans { lit: &lit, shadow: &shadow }
        } else {
            IsdSource::SamplePairs { lit: &lit, shadow: &shadow }
        };
        (source.name(), estimator.estimate(&source)?)
    } else {
        bail!("Provide --ambient and --direct, or --lit and --shadow samples");
    };

    info!(source = name, isd = ?isd.to_array(), "estimated ISD");
    Ok(IsdReport {
        source: name,
        basis: BasisReport::from(&build_basis(isd)),
    })
}
