//! Exchanger geometry: lobed cross-sections, annular gaps, tube banks.

mod annulus;
mod lobe;
mod tube;

use thiserror::Error;
use uom::si::f64::Length;

pub use annulus::{AnnulusSection, SPIRAL_TIGHTNESS_COEFF};
pub use lobe::{
    LOBE_AREA_FACTOR, LOBE_PERIMETER_FACTOR, LobeCount, LobeSection, helical_length_factor,
};
pub use tube::{FlowSection, HxGeometry, TubeSpec, TwistSpec, installation_clearance};

/// Errors from resolving a cross-section or annular gap.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("valley diameter must be positive, got {diameter:?}")]
    NonPositiveValleyDiameter { diameter: Length },

    #[error("peak diameter {peak:?} must exceed the valley diameter {valley:?}")]
    PeakNotAboveValley { peak: Length, valley: Length },

    #[error("lobe count must be between 3 and 6, got {count}")]
    LobeCount { count: u8 },

    #[error("spiral pitch must be positive, got {pitch:?}")]
    NonPositivePitch { pitch: Length },

    #[error("insert outer diameter {insert:?} must be smaller than the bore {bore:?}")]
    InsertTooLarge { insert: Length, bore: Length },

    #[error("insert fills the bore: annulus flow area would not be positive")]
    InsertFillsBore,
}
