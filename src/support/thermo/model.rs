//! Built-in property models.
//!
//! Only [`ConstantProperties`] ships with the crate: real property
//! backends (equation-of-state libraries, steam tables) live with the
//! host and reach the solver through the
//! [`PropertyOracle`](super::PropertyOracle) trait.

mod constant;

pub use constant::{ConstantProperties, SaturationPoint};
