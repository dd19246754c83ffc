//! Shared fixtures for the BIDR-RS benchmarks.

use bidr_chroma::model::{Illuminants, observe};
use bidr_math::Vec3;

/// `n` deterministic linear samples of a few materials across the full
/// shadow-to-lit range under the skylight/sun illuminant pair.
pub fn linear_samples(n: usize) -> Vec<Vec3> {
    let illum = Illuminants::skylight_sun();
    let materials = [
        Vec3::new(0.55, 0.55, 0.55),
        Vec3::new(0.6, 0.3, 0.2),
        Vec3::new(0.2, 0.4, 0.6),
    ];
    (0..n)
        .map(|i| {
            let r = materials[i % materials.len()];
            let gamma = (i as f64 * 0.618_033_988_75).fract();
            observe(r, &illum, gamma).unwrap_or(r)
        })
        .collect()
}
