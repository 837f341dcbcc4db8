//! Constant-property fluid model.
//!
//! `ConstantProperties` implements the classic engineering
//! approximation for liquids: temperature-independent transport
//! properties with enthalpy linear in temperature. An optional
//! single-point saturation table extends it to phase-change duties,
//! with vapor properties held constant above the saturation
//! temperature.
//!
//! # When To Use
//!
//! Use this model for tests, examples, and rough estimates where the
//! working fluid stays close to a known state. For real
//! temperature/pressure-dependent behavior, implement
//! [`PropertyOracle`] over a property library on the host side.
//!
//! # Reference State
//!
//! Without a saturation table, enthalpy is `cp·(T − T_ref)` with
//! `T_ref = 25 °C`. With one, enthalpy is anchored to the table's
//! saturated-liquid/-vapor enthalpies and pieced together linearly on
//! either side of the saturation temperature, which keeps zone duty
//! splits exactly consistent with the table.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::{Fluid, FluidProperties, FluidState, PropertyError, PropertyOracle};
use crate::support::units::{SurfaceTension, TemperatureDifference};

/// A single saturation state used by [`ConstantProperties`].
///
/// The point is treated as pressure-independent: whatever pressure the
/// solver asks about, these are the saturation conditions it gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub temperature: ThermodynamicTemperature,
    pub liquid: FluidProperties,
    pub vapor: FluidProperties,
    pub surface_tension: SurfaceTension,
}

/// Constant-property liquid (and optionally vapor) model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProperties {
    liquid: FluidProperties,
    reference_temperature: ThermodynamicTemperature,
    saturation: Option<SaturationPoint>,
    critical_pressure: Pressure,
}

impl ConstantProperties {
    /// Creates a model from constant liquid properties.
    ///
    /// The given enthalpy field is ignored; enthalpy is reported as
    /// `cp·(T − 25 °C)` so that energy balances stay consistent.
    #[must_use]
    pub fn new(liquid: FluidProperties) -> Self {
        Self {
            liquid,
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            saturation: None,
            critical_pressure: Pressure::new::<megapascal>(22.064),
        }
    }

    /// Water near ambient conditions, with a 1 atm saturation point.
    #[must_use]
    pub fn water() -> Self {
        use uom::si::{
            available_energy::kilojoule_per_kilogram,
            dynamic_viscosity::pascal_second,
            f64::{DynamicViscosity, MassDensity, Ratio, SpecificHeatCapacity,
                  ThermalConductivity},
            mass_density::kilogram_per_cubic_meter,
            ratio::ratio,
            specific_heat_capacity::joule_per_kilogram_kelvin,
            thermal_conductivity::watt_per_meter_kelvin,
        };
        use crate::support::units::{SpecificEnthalpy, newton_per_meter};

        let bulk = FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(998.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(0.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.60),
            viscosity: DynamicViscosity::new::<pascal_second>(1.0e-3),
            prandtl: Ratio::new::<ratio>(6.99),
        };
        let saturated_liquid = FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(958.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4217.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(419.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.68),
            viscosity: DynamicViscosity::new::<pascal_second>(2.82e-4),
            prandtl: Ratio::new::<ratio>(1.75),
        };
        let saturated_vapor = FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(0.597),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2080.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2676.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            viscosity: DynamicViscosity::new::<pascal_second>(1.23e-5),
            prandtl: Ratio::new::<ratio>(1.02),
        };

        Self::new(bulk).with_saturation(SaturationPoint {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(100.0),
            liquid: saturated_liquid,
            vapor: saturated_vapor,
            surface_tension: newton_per_meter(0.0589),
        })
    }

    /// Attaches a saturation point, enabling phase-change lookups.
    #[must_use]
    pub fn with_saturation(mut self, saturation: SaturationPoint) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Overrides the critical pressure (default: water, 22.064 MPa).
    #[must_use]
    pub fn with_critical_pressure(mut self, critical_pressure: Pressure) -> Self {
        self.critical_pressure = critical_pressure;
        self
    }

    fn missing_saturation(&self, fluid: &Fluid) -> PropertyError {
        PropertyError::MissingSaturation {
            context: format!("constant-property model has no saturation point for {fluid}"),
        }
    }
}

impl PropertyOracle for ConstantProperties {
    fn properties(&self, state: &FluidState) -> Result<FluidProperties, PropertyError> {
        let temperature = state.temperature;
        let properties = match &self.saturation {
            // Piecewise-linear enthalpy anchored at the saturation point.
            Some(saturation) if temperature > saturation.temperature => FluidProperties {
                enthalpy: saturation.vapor.enthalpy
                    + saturation.vapor.specific_heat
                        * temperature.minus(saturation.temperature),
                ..saturation.vapor
            },
            Some(saturation) => FluidProperties {
                enthalpy: saturation.liquid.enthalpy
                    - saturation.liquid.specific_heat
                        * saturation.temperature.minus(temperature),
                ..self.liquid
            },
            None => FluidProperties {
                enthalpy: self.liquid.specific_heat
                    * temperature.minus(self.reference_temperature),
                ..self.liquid
            },
        };
        properties.validated(&format!("{} bulk properties", state.fluid))
    }

    fn saturation_temperature(
        &self,
        fluid: &Fluid,
        _pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        self.saturation
            .as_ref()
            .map(|s| s.temperature)
            .ok_or_else(|| self.missing_saturation(fluid))
    }

    fn saturated_liquid(
        &self,
        fluid: &Fluid,
        _pressure: Pressure,
    ) -> Result<FluidProperties, PropertyError> {
        self.saturation
            .as_ref()
            .map(|s| s.liquid)
            .ok_or_else(|| self.missing_saturation(fluid))
    }

    fn saturated_vapor(
        &self,
        fluid: &Fluid,
        _pressure: Pressure,
    ) -> Result<FluidProperties, PropertyError> {
        self.saturation
            .as_ref()
            .map(|s| s.vapor)
            .ok_or_else(|| self.missing_saturation(fluid))
    }

    fn surface_tension(
        &self,
        fluid: &Fluid,
        _temperature: ThermodynamicTemperature,
    ) -> Result<SurfaceTension, PropertyError> {
        self.saturation
            .as_ref()
            .map(|s| s.surface_tension)
            .ok_or_else(|| self.missing_saturation(fluid))
    }

    fn critical_pressure(&self, _fluid: &Fluid) -> Result<Pressure, PropertyError> {
        Ok(self.critical_pressure)
    }
}
