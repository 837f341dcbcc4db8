//! Multi-lobed (star) cross-section geometry.
//!
//! A twisted tube's cross-section follows the polar profile
//! `r(θ) = R_avg + a·cos(nθ)` between a valley circle of diameter
//! `do_min` and a peak circle of diameter `do_max`. Rather than
//! integrating the profile numerically, [`LobeSection`] uses the valley
//! circle as a base and adds calibrated per-lobe corrections, which is
//! accurate to within a few percent over the supported lobe range.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::meter,
};

use super::GeometryError;

/// Calibrated fraction of each lobe's bounding strip that counts as
/// flow area.
pub const LOBE_AREA_FACTOR: f64 = 0.7;

/// Calibrated elongation of each lobe's two flanks relative to the
/// tooth height.
pub const LOBE_PERIMETER_FACTOR: f64 = 1.2;

/// Number of lobes on a twisted-tube profile.
///
/// Manufacturing practice keeps this between 3 and 6: fewer lobes do
/// not hold the helix shape, more leave no tooth depth to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LobeCount {
    Three,
    Four,
    Five,
    Six,
}

impl LobeCount {
    /// The lobe count as a number.
    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl TryFrom<u8> for LobeCount {
    type Error = GeometryError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            _ => Err(GeometryError::LobeCount { count }),
        }
    }
}

/// Area, perimeter, and equivalent diameter of a lobed cross-section.
///
/// A pure function of the peak diameter, valley diameter, and lobe
/// count. By construction `equivalent_diameter` is exactly
/// `4·area/perimeter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LobeSection {
    pub area: Area,
    pub perimeter: Length,
    pub equivalent_diameter: Length,
    pub tooth_height: Length,
}

impl LobeSection {
    /// Resolves the lobed section between `do_max` (peak) and `do_min`
    /// (valley).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if `do_min` is not positive or
    /// `do_max` does not exceed `do_min`.
    pub fn new(
        do_max: Length,
        do_min: Length,
        lobes: LobeCount,
    ) -> Result<Self, GeometryError> {
        let peak = do_max.get::<meter>();
        let valley = do_min.get::<meter>();
        if !(valley > 0.0) {
            return Err(GeometryError::NonPositiveValleyDiameter { diameter: do_min });
        }
        if !(peak > valley) {
            return Err(GeometryError::PeakNotAboveValley {
                peak: do_max,
                valley: do_min,
            });
        }

        let n = f64::from(lobes.count());
        let tooth_height = (peak - valley) / 2.0;
        let mean_diameter = (peak + valley) / 2.0;

        // Valley circle base plus one corrected strip per lobe. Each
        // strip spans the lobe's share of the mean circumference.
        let lobe_width = PI * mean_diameter / n;
        let area = PI * valley * valley / 4.0 + LOBE_AREA_FACTOR * n * lobe_width * tooth_height;

        // Each lobe adds two flanks climbing the tooth height.
        let perimeter = PI * valley + LOBE_PERIMETER_FACTOR * n * 2.0 * tooth_height;

        let equivalent_diameter = 4.0 * area / perimeter;

        Ok(Self {
            area: Area::new::<uom::si::area::square_meter>(area),
            perimeter: Length::new::<meter>(perimeter),
            equivalent_diameter: Length::new::<meter>(equivalent_diameter),
            tooth_height: Length::new::<meter>(tooth_height),
        })
    }
}

/// Elongation of the helical path at the peak radius relative to the
/// tube axis: `√(1 + (π·do_max/pitch)²)`.
///
/// Returns 1.0 for a non-positive pitch (no twist).
#[must_use]
pub fn helical_length_factor(peak_diameter: Length, pitch: Length) -> f64 {
    let pitch = pitch.get::<meter>();
    if pitch <= 0.0 {
        return 1.0;
    }
    let circumference = PI * peak_diameter.get::<meter>();
    (1.0 + (circumference / pitch).powi(2)).sqrt()
}
