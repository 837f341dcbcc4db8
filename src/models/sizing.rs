//! Double-pipe heat exchanger sizing and rating.
//!
//! One call to [`size`] takes the full exchanger description (geometry,
//! both streams, flow arrangement, side assignment, duty mode,
//! coefficient mode, wall material, fouling) plus a property oracle,
//! and returns the resolved duty, LMTD, overall coefficient, areas,
//! margin classification, pressure drops, and supporting detail.
//!
//! # Example
//!
//! ```no_run
//! use hairpin::models::sizing::{SizingInput, size};
//! use hairpin::support::thermo::model::ConstantProperties;
//!
//! # fn input() -> SizingInput { unimplemented!() }
//! let oracle = ConstantProperties::water();
//! let results = size(&input(), &oracle)?;
//! println!(
//!     "required {:?} vs actual {:?} ({:?})",
//!     results.required_area, results.actual_area, results.margin
//! );
//! # Ok::<(), hairpin::models::sizing::SolveError>(())
//! ```

mod core;

pub use self::core::{
    CoefficientMode, DutySpec, FlowPath, InputError, MarginClass, PathPressureDrop,
    ProfileSample, SizingInput, SizingResults, SolveError, StreamSpec, ThreeZoneResult,
    ZoneResult,
};

use crate::support::thermo::PropertyOracle;

/// Sizes the exchanger described by `input` against the given property
/// oracle.
///
/// # Errors
///
/// Returns [`SolveError`] on invalid input, a non-positive temperature
/// approach, an unresolvable duty/flow combination, or a property
/// failure on a required path. Optional-path failures (three-zone
/// model, two-phase pressure drop) fall back internally and never
/// surface here.
pub fn size(
    input: &SizingInput,
    oracle: &dyn PropertyOracle,
) -> Result<SizingResults, SolveError> {
    self::core::solve(input, oracle)
}
