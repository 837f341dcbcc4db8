use thiserror::Error;

use crate::support::geometry::GeometryError;
use crate::support::hx::LmtdError;
use crate::support::thermo::PropertyError;

use super::config::InputError;

/// The single caller-visible failure surface of a sizing run.
///
/// The rendered message is the whole contract: hosts show it verbatim.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Invalid input, rejected before any property lookup.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The configured cross-sections are inconsistent.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// The terminal temperatures violate the flow arrangement.
    #[error("{0}")]
    TemperatureCross(#[from] LmtdError),

    /// A required property lookup failed.
    #[error("property lookup failed: {0}")]
    Property(#[from] PropertyError),

    /// Inverting the duty for a flow rate divides by a vanishing
    /// enthalpy change.
    #[error(
        "enthalpy change across the {stream} stream is too small to resolve its flow rate"
    )]
    DegenerateEnthalpy { stream: &'static str },
}
