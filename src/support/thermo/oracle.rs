use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::units::SurfaceTension;

use super::{Fluid, FluidProperties, FluidState, PropertyError, Quality, TwoPhaseProperties};

/// The property lookup boundary between the solver and the host.
///
/// The host owns the oracle: it decides which backend answers (a real
/// property library, a table, constants), when to initialize it, and
/// how to retry or cancel failed lookups. The solver only borrows it
/// for the duration of one solve, issuing independent lookups
/// back-to-back, so implementations must tolerate repeated calls for
/// the same state.
///
/// Implementations are expected to return validated values; the solver
/// re-validates bulk property sets at the boundary and treats
/// non-finite or negative-where-nonnegative results as failures.
pub trait PropertyOracle {
    /// Bulk properties at the given state.
    ///
    /// States are transient: the solver constructs one per query. A
    /// backend may ignore the optional quality and treat the state as
    /// single-phase; mixture lookups go through [`two_phase`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is outside the backend's
    /// domain or a property cannot be evaluated.
    ///
    /// [`two_phase`]: PropertyOracle::two_phase
    fn properties(&self, state: &FluidState) -> Result<FluidProperties, PropertyError>;

    /// Saturation temperature at the given pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingSaturation`] when the backend has
    /// no saturation data for the fluid.
    fn saturation_temperature(
        &self,
        fluid: &Fluid,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    /// Saturated-liquid properties (x = 0) at the given pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if saturation data is unavailable.
    fn saturated_liquid(
        &self,
        fluid: &Fluid,
        pressure: Pressure,
    ) -> Result<FluidProperties, PropertyError>;

    /// Saturated-vapor properties (x = 1) at the given pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if saturation data is unavailable.
    fn saturated_vapor(
        &self,
        fluid: &Fluid,
        pressure: Pressure,
    ) -> Result<FluidProperties, PropertyError>;

    /// Liquid surface tension at the given temperature.
    ///
    /// Callers in the boiling path substitute a documented default when
    /// this fails, so implementations may simply error.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the backend cannot evaluate it.
    fn surface_tension(
        &self,
        fluid: &Fluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<SurfaceTension, PropertyError>;

    /// Critical pressure of the fluid.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the backend does not know it.
    fn critical_pressure(&self, fluid: &Fluid) -> Result<Pressure, PropertyError>;

    /// Properties of a two-phase mixture at the given quality.
    ///
    /// The default implementation looks up both saturated endpoints and
    /// mixes them per [`TwoPhaseProperties::mix`]: harmonic quality
    /// weighting for density and viscosity, linear for specific heat,
    /// enthalpy, and conductivity.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either endpoint lookup fails.
    fn two_phase(
        &self,
        fluid: &Fluid,
        pressure: Pressure,
        quality: Quality,
    ) -> Result<TwoPhaseProperties, PropertyError> {
        let liquid = self.saturated_liquid(fluid, pressure)?;
        let vapor = self.saturated_vapor(fluid, pressure)?;
        Ok(TwoPhaseProperties::mix(liquid, vapor, quality))
    }
}
