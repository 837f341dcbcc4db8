//! Twisted-tube enhancement models.
//!
//! All coefficients in this module are calibration values tied to the
//! correlations they feed; the clamp ranges come from measured
//! twisted-tube performance envelopes.

use uom::si::{f64::Length, length::meter};

use crate::support::geometry::{LobeCount, LobeSection, helical_length_factor};

/// Cap on the heat-transfer area gained by twisting.
///
/// A twisted tube is a deformed round tube, not a finned one: the
/// developed surface grows modestly, and crediting more than 20% extra
/// area over-predicts. Empirical correction; do not derive.
pub const AREA_ENHANCEMENT_CAP: f64 = 1.20;

/// Convective enhancement factor of the helical lobed passage.
///
/// Swirl and repeated boundary-layer restarts raise both film
/// coefficients. The factor grows with lobe count and with twist
/// tightness `do/pitch`, clamped to the measured range [1.0, 2.5].
#[must_use]
pub fn twist_enhancement(peak_diameter: Length, pitch: Length, lobes: LobeCount) -> f64 {
    let pitch_m = pitch.get::<meter>();
    if pitch_m <= 0.0 {
        return 1.0;
    }
    let tightness = peak_diameter.get::<meter>() / pitch_m;
    let n = f64::from(lobes.count());
    (1.0 + 0.9 * (n / 6.0) * tightness.powf(0.6)).clamp(1.0, 2.5)
}

/// Ratio of twisted heat-transfer area to the equivalent smooth tube.
///
/// The developed lobed perimeter and the helical path both stretch the
/// surface; the product is credited up to [`AREA_ENHANCEMENT_CAP`].
#[must_use]
pub fn area_enhancement(
    insert: &LobeSection,
    nominal_diameter: Length,
    pitch: Length,
) -> f64 {
    let smooth_perimeter = std::f64::consts::PI * nominal_diameter.get::<meter>();
    let perimeter_ratio = insert.perimeter.get::<meter>() / smooth_perimeter;
    let helical = helical_length_factor(nominal_diameter, pitch);
    (perimeter_ratio * helical).clamp(1.0, AREA_ENHANCEMENT_CAP)
}

/// Maps the base enhancement into the desuperheating-zone range
/// [1.6, 2.0] used for the gas-phase Dittus-Boelter coefficient.
#[must_use]
pub fn desuperheat_enhancement(twist: f64) -> f64 {
    (1.6 + 0.4 * (twist - 1.0) / 1.5).clamp(1.6, 2.0)
}

/// Maps the base enhancement into the condensing-zone range [2.0, 3.5]
/// applied to the Nusselt film coefficient.
#[must_use]
pub fn condensing_enhancement(twist: f64) -> f64 {
    (2.0 + (twist - 1.0)).clamp(2.0, 3.5)
}
