//! Synthetic chromaticity-plane command.
//!
//! Simulates one material across the full shadow-to-lit range under a fixed
//! illuminant pair, projects its log cloud onto the plane orthogonal to the
//! model ISD and reports the 2-D coordinates with a display patch.

use crate::PlaneArgs;
use anyhow::{Context, Result, bail};
use bidr_chroma::isd::IsdSource;
use bidr_chroma::model::{Illuminants, observe};
use bidr_chroma::{ChromaticityAnalysis, analyze};
use bidr_core::EngineConfig;
use bidr_math::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Normal, Uniform};
use serde::Serialize;
use tracing::info;

use super::{BasisReport, write_report};

#[derive(Debug, Serialize)]
pub struct PlaneReport {
    pub seed: u64,
    pub count: usize,
    pub basis: BasisReport,
    pub origin: [f64; 3],
    pub coordinates: Vec<[f64; 2]>,
    pub patch: PatchReport,
}

#[derive(Debug, Serialize)]
pub struct PatchReport {
    pub a_range: [f64; 2],
    pub b_range: [f64; 2],
    pub resolution: usize,
    /// Row-major, rows along b.
    pub points: Vec<[f64; 3]>,
}

/// Runs the plane command.
pub fn run(args: PlaneArgs, config: &EngineConfig) -> Result<()> {
    let report = build_report(&args, config)?;
    write_report(&report, args.output.as_deref())
}

fn build_report(args: &PlaneArgs, config: &EngineConfig) -> Result<PlaneReport> {
    let illum = Illuminants::new(args.ambient, args.direct);
    let samples = synthesize(args, &illum)?;

    let source = IsdSource::IlluminantVectors {
        ambient: illum.ambient,
        direct: illum.direct,
    };
    let analysis = analyze(&samples, &source, config).context("Chromaticity analysis failed")?;
    let patch = analysis.patch(config)?;

    info!(
        count = samples.len(),
        isd = ?analysis.isd.to_array(),
        "projected synthetic cloud"
    );

    let (a0, a1) = patch.a_range();
    let (b0, b1) = patch.b_range();
    Ok(PlaneReport {
        seed: args.seed,
        count: samples.len(),
        basis: BasisReport::from(&analysis.basis),
        origin: analysis.plane.origin.to_array(),
        coordinates: coordinates(&analysis),
        patch: PatchReport {
            a_range: [a0, a1],
            b_range: [b0, b1],
            resolution: patch.resolution(),
            points: patch.points().iter().map(|p| p.to_array()).collect(),
        },
    })
}

fn coordinates(analysis: &ChromaticityAnalysis) -> Vec<[f64; 2]> {
    analysis.coordinates().into_iter().map(|(a, b)| [a, b]).collect()
}

/// `I = (R + texture) · (A + γ·D) + noise`, with `γ ~ U[0, 1)`.
fn synthesize(args: &PlaneArgs, illum: &Illuminants) -> Result<Vec<Vec3>> {
    check_sigma("--texture-sigma", args.texture_sigma)?;
    check_sigma("--noise-sigma", args.noise_sigma)?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let gamma = Uniform::new(0.0, 1.0);
    let texture = Normal::new(0.0, args.texture_sigma).context("Invalid --texture-sigma")?;
    let noise = Normal::new(0.0, args.noise_sigma).context("Invalid --noise-sigma")?;

    let mut samples = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let g = rng.sample(&gamma);
        let tex = Vec3::new(rng.sample(&texture), rng.sample(&texture), rng.sample(&texture));
        let clean = observe(args.reflectance + tex, illum, g)?;
        let n = Vec3::new(rng.sample(&noise), rng.sample(&noise), rng.sample(&noise));
        samples.push(clean + n);
    }
    Ok(samples)
}

/// Rejects a negative or non-finite standard deviation.
fn check_sigma(flag: &str, sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        bail!("{flag} must be a non-negative finite value, got {sigma}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use approx::assert_abs_diff_eq;
    use clap::Parser;

    fn parse(argv: &[&str]) -> PlaneArgs {
        let mut full = vec!["bidr", "plane"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Plane(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.seed, 7);
        assert_eq!(args.count, 2000);
        assert_eq!(args.reflectance, Vec3::splat(0.55));
        assert_eq!(args.ambient, Illuminants::skylight_sun().ambient);
        assert_eq!(args.direct, Illuminants::skylight_sun().direct);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let cfg = EngineConfig::synthetic();
        let a = build_report(&parse(&["-n", "64"]), &cfg).unwrap();
        let b = build_report(&parse(&["-n", "64"]), &cfg).unwrap();
        assert_eq!(a.coordinates, b.coordinates);

        let c = build_report(&parse(&["-n", "64", "--seed", "8"]), &cfg).unwrap();
        assert_ne!(a.coordinates, c.coordinates);
    }

    #[test]
    fn test_report_shape() {
        let cfg = EngineConfig::synthetic();
        let report = build_report(&parse(&["-n", "200"]), &cfg).unwrap();
        assert_eq!(report.count, 200);
        assert_eq!(report.coordinates.len(), 200);
        assert_eq!(report.patch.points.len(), 400);

        let isd = Vec3::from_array(report.basis.isd);
        assert_abs_diff_eq!(isd.length(), 1.0, epsilon = 1e-9);
        assert!(isd.min_element() > 0.0);
    }

    #[test]
    fn test_noiseless_neutral_light_collapses() {
        // Neutral light keeps a noiseless material on a line along the ISD,
        // so every sample projects onto the origin.
        let cfg = EngineConfig::synthetic();
        let args = parse(&[
            "-n", "50",
            "--texture-sigma", "0",
            "--noise-sigma", "0",
            "--ambient", "0.5,0.5,0.5",
            "--direct", "1,1,1",
        ]);
        let report = build_report(&args, &cfg).unwrap();
        for [a, b] in &report.coordinates {
            assert_abs_diff_eq!(*a, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(*b, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rejects_negative_sigma() {
        let cfg = EngineConfig::synthetic();
        let args = parse(&["-n", "10", "--texture-sigma=-1"]);
        let err = build_report(&args, &cfg).unwrap_err();
        assert!(err.to_string().contains("--texture-sigma"));

        let args = parse(&["-n", "10", "--noise-sigma=-0.01"]);
        let err = build_report(&args, &cfg).unwrap_err();
        assert!(err.to_string().contains("--noise-sigma"));

        let args = parse(&["-n", "10", "--noise-sigma", "NaN"]);
        assert!(build_report(&args, &cfg).is_err());
    }
}
