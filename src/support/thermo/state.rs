use std::fmt;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Identifies a fluid to the property oracle.
///
/// Fluid identity is a runtime value because the oracle is a runtime
/// boundary: the same solve code runs against water, a refrigerant, or
/// whatever the host's property backend understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fluid(String);

impl Fluid {
    /// Creates a fluid id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Plain water, the default working fluid.
    #[must_use]
    pub fn water() -> Self {
        Self::new("water")
    }

    /// Returns the id string understood by the property oracle.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vapor mass fraction of a two-phase mixture.
///
/// 0 is saturated liquid, 1 is saturated vapor. The value is guaranteed
/// to lie in the closed unit interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quality(Constrained<f64, UnitInterval>);

impl Quality {
    /// Creates a quality from a mass fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(value)?))
    }

    /// Saturated liquid (x = 0).
    #[must_use]
    pub fn saturated_liquid() -> Self {
        Self::new(0.0).expect("0 is within the unit interval")
    }

    /// Saturated vapor (x = 1).
    #[must_use]
    pub fn saturated_vapor() -> Self {
        Self::new(1.0).expect("1 is within the unit interval")
    }

    /// Returns the mass fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

/// The thermodynamic state of a fluid at one point in the exchanger.
///
/// States are transient: one is constructed per property query and
/// dropped once the lookup returns.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidState {
    pub fluid: Fluid,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub quality: Option<Quality>,
}

impl FluidState {
    /// Creates a single-phase state.
    #[must_use]
    pub fn new(
        fluid: Fluid,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Self {
        Self {
            fluid,
            temperature,
            pressure,
            quality: None,
        }
    }

    /// Returns the state with a vapor quality attached.
    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }
}
