//! CLI command implementations

pub mod curve;
pub mod cylinder;
pub mod isd;
pub mod plane;

use anyhow::{Context, Result};
use bidr_core::{EngineConfig, OrthonormalBasis};
use bidr_math::Vec3;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads the engine configuration.
///
/// Starts from `base`, replaced wholesale by the YAML file when one is
/// given, then applies the `--eps` override.
pub fn load_config(path: Option<&Path>, eps: Option<f64>, base: EngineConfig) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            EngineConfig::from_yaml_str(&text)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => base,
    };
    if let Some(eps) = eps {
        config = config.with_eps(eps);
        config.validate().context("Invalid --eps")?;
    }
    debug!(?config, "engine configuration");
    Ok(config)
}

/// Parses an `R,G,B` triplet.
pub fn parse_rgb(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected R,G,B, got '{s}'"));
    }
    let mut rgb = [0.0; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }
    Ok(Vec3::from_array(rgb))
}

/// Serializes `report` as pretty JSON to `output`, or stdout when `None`.
pub fn write_report<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Basis axes as plain arrays.
#[derive(Debug, Serialize)]
pub struct BasisReport {
    pub isd: [f64; 3],
    pub u1: [f64; 3],
    pub u2: [f64; 3],
}

impl From<&OrthonormalBasis> for BasisReport {
    fn from(b: &OrthonormalBasis) -> Self {
        Self {
            isd: b.v.to_array(),
            u1: b.u1.to_array(),
            u2: b.u2.to_array(),
        }
    }
}
