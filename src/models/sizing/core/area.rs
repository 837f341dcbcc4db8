//! Heat-transfer area and sizing margin.

use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval};

use crate::support::geometry::{GeometryError, HxGeometry};
use crate::support::hx::area_enhancement;

/// Margin classification of actual vs. required area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginClass {
    /// Less than 10% spare area.
    Insufficient,
    /// 10–25% spare area.
    Adequate,
    /// More than 25% spare area.
    Excessive,
}

impl MarginClass {
    /// Classifies a margin percentage.
    #[must_use]
    pub fn classify(margin_percent: f64) -> Self {
        if margin_percent < 10.0 {
            Self::Insufficient
        } else if margin_percent <= 25.0 {
            Self::Adequate
        } else {
            Self::Excessive
        }
    }
}

/// Heat-transfer area the bank actually offers.
///
/// The smooth outer surface of the inner tube bank, credited with the
/// twisted-tube area enhancement (capped) when an insert is fitted.
///
/// # Errors
///
/// Returns [`GeometryError`] if the twist parameters are degenerate.
pub(crate) fn actual_area(geometry: &HxGeometry) -> Result<Area, GeometryError> {
    let smooth = geometry.smooth_outer_area();
    match (&geometry.twist, geometry.insert_section()?) {
        (Some(twist), Some(insert)) => {
            let gain =
                area_enhancement(&insert, geometry.nominal_inner_tube_od(), twist.pitch);
            Ok(smooth * gain)
        }
        _ => Ok(smooth),
    }
}

/// Area required to move the duty: `A = Q/(U·LMTD)`.
pub(crate) fn required_area(duty: Power, u: HeatTransfer, lmtd: TemperatureInterval) -> Area {
    duty / (u * lmtd)
}

/// Spare area as a percentage of the requirement.
pub(crate) fn margin_percent(actual: Area, required: Area) -> f64 {
    100.0 * (actual.value - required.value) / required.value
}
