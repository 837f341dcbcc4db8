//! # Hairpin
//!
//! Sizing and rating models for double-pipe (hairpin) heat exchangers,
//! optionally fitted with a helically-twisted, multi-lobed inner tube.
//!
//! ## Crate layout
//!
//! - [`models`]: The sizing model and its public input/result surface.
//! - [`support`]: Geometry, correlation, and property utilities used by
//!   the models.
//!
//! ## Property data
//!
//! The calculation core never owns fluid property data. The host
//! constructs a [`support::thermo::PropertyOracle`] implementation once
//! and passes it to every solve; see
//! [`support::thermo::model::ConstantProperties`] for a simple built-in
//! model suitable for tests and rough estimates.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're
//! useful on their own (the correlations and geometry resolvers are
//! ordinary engineering tools), but their APIs are less stable than the
//! model surface in [`models`]. Breaking changes may occur as needed.

pub mod models;
pub mod support;
