//! Annular flow passage between the outer tube and the inner tube or
//! twisted insert.

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    length::meter,
};

use super::{GeometryError, LobeSection};

/// Coefficient of the spiral-channel area correction.
///
/// The helical channel formed between a twisted insert and the bore
/// carries slightly less effective flow area than the plain difference
/// of cross-sections; the deficit grows as the pitch tightens. The
/// correction is `1/(1 + c·do/pitch)` clamped to [0.9, 1.0], a
/// calibration rather than a derived result.
pub const SPIRAL_TIGHTNESS_COEFF: f64 = 0.08;

/// Resolved annular flow passage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnulusSection {
    /// Effective flow area after the spiral-channel correction.
    pub flow_area: Area,
    /// Hydraulic diameter, `4A/P_wetted`.
    pub hydraulic_diameter: Length,
    /// Diameter of the circle with the same area, `√(4A/π)`.
    pub area_equivalent_diameter: Length,
    /// Applied spiral-channel factor (1.0 for a plain insert).
    pub spiral_factor: f64,
}

impl AnnulusSection {
    /// Resolves the gap around a lobed twisted insert.
    ///
    /// `bore` is the outer tube's *effective* inner diameter (nominal
    /// plus installation clearance); `peak_diameter` is the insert's
    /// circumscribed diameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the pitch is not positive or the
    /// insert leaves no positive flow area.
    pub fn around_lobed(
        bore: Length,
        insert: &LobeSection,
        peak_diameter: Length,
        pitch: Length,
    ) -> Result<Self, GeometryError> {
        if !(pitch.get::<meter>() > 0.0) {
            return Err(GeometryError::NonPositivePitch { pitch });
        }

        let bore_m = bore.get::<meter>();
        let raw_area = PI * bore_m * bore_m / 4.0 - insert.area.get::<uom::si::area::square_meter>();
        if raw_area <= 0.0 {
            return Err(GeometryError::InsertFillsBore);
        }

        let tightness = peak_diameter.get::<meter>() / pitch.get::<meter>();
        let spiral_factor = (1.0 / (1.0 + SPIRAL_TIGHTNESS_COEFF * tightness)).clamp(0.9, 1.0);
        let flow_area = raw_area * spiral_factor;

        let wetted_perimeter = PI * bore_m + insert.perimeter.get::<meter>();

        Ok(Self {
            flow_area: Area::new::<uom::si::area::square_meter>(flow_area),
            hydraulic_diameter: Length::new::<meter>(4.0 * flow_area / wetted_perimeter),
            area_equivalent_diameter: Length::new::<meter>((4.0 * flow_area / PI).sqrt()),
            spiral_factor,
        })
    }

    /// Resolves the gap around a plain (straight) inner tube.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InsertTooLarge`] if the inner tube does
    /// not fit inside the bore.
    pub fn around_plain(bore: Length, insert_outer_diameter: Length) -> Result<Self, GeometryError> {
        let bore_m = bore.get::<meter>();
        let insert_m = insert_outer_diameter.get::<meter>();
        if insert_m >= bore_m {
            return Err(GeometryError::InsertTooLarge {
                insert: insert_outer_diameter,
                bore,
            });
        }

        let flow_area = PI * (bore_m * bore_m - insert_m * insert_m) / 4.0;

        Ok(Self {
            flow_area: Area::new::<uom::si::area::square_meter>(flow_area),
            // 4A/(πD + πd) reduces to D − d for a circular annulus.
            hydraulic_diameter: Length::new::<meter>(bore_m - insert_m),
            area_equivalent_diameter: Length::new::<meter>((4.0 * flow_area / PI).sqrt()),
            spiral_factor: 1.0,
        })
    }
}
