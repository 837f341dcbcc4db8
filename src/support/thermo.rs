//! Fluid states, properties, and the property oracle boundary.
//!
//! The calculation core treats fluid property data as an external
//! service: the host constructs a [`PropertyOracle`] implementation once
//! and injects it into every solve. All property values crossing the
//! boundary are validated on construction; see [`FluidProperties`].

mod error;
mod oracle;
mod properties;
mod state;

pub mod model;

pub use error::PropertyError;
pub use oracle::PropertyOracle;
pub use properties::{FluidProperties, TwoPhaseProperties};
pub use state::{Fluid, FluidState, Quality};
