use uom::si::f64::{
    DynamicViscosity, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity,
};

use crate::support::units::SpecificEnthalpy;

use super::{PropertyError, Quality};

/// Bulk transport and thermal properties of a fluid at one state.
///
/// Produced by the property oracle and validated at the boundary:
/// every field must be finite, and every field except enthalpy (whose
/// sign depends on the backend's reference state) must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub enthalpy: SpecificEnthalpy,
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
    pub prandtl: Ratio,
}

impl FluidProperties {
    /// Validates the property set, consuming and returning it.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NonFinite`] for any `NaN`/infinite field
    /// and [`PropertyError::Negative`] for a negative value of a
    /// documented-nonnegative property.
    pub fn validated(self, context: &str) -> Result<Self, PropertyError> {
        let checks: [(&'static str, f64, bool); 6] = [
            ("density", self.density.value, true),
            ("specific heat", self.specific_heat.value, true),
            ("enthalpy", self.enthalpy.value, false),
            ("thermal conductivity", self.thermal_conductivity.value, true),
            ("viscosity", self.viscosity.value, true),
            ("prandtl number", self.prandtl.value, true),
        ];
        for (property, value, nonnegative) in checks {
            if !value.is_finite() {
                return Err(PropertyError::NonFinite {
                    property,
                    context: context.to_owned(),
                });
            }
            if nonnegative && value < 0.0 {
                return Err(PropertyError::Negative {
                    property,
                    context: context.to_owned(),
                });
            }
        }
        Ok(self)
    }
}

/// Properties of a two-phase mixture.
///
/// Carries the saturated-liquid and saturated-vapor endpoints alongside
/// the quality-weighted mixture used for bulk calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseProperties {
    pub liquid: FluidProperties,
    pub vapor: FluidProperties,
    pub quality: Quality,
    pub mixed: FluidProperties,
}

impl TwoPhaseProperties {
    /// Mixes saturated endpoints by quality.
    ///
    /// Density and viscosity mix harmonically (reciprocal quality
    /// weighting); specific heat, enthalpy, and conductivity mix
    /// linearly. The Prandtl number of the mixture is recomputed from
    /// the mixed transport properties.
    #[must_use]
    pub fn mix(liquid: FluidProperties, vapor: FluidProperties, quality: Quality) -> Self {
        let x = quality.value();

        let density = 1.0 / ((1.0 - x) / liquid.density + x / vapor.density);
        let viscosity = 1.0 / ((1.0 - x) / liquid.viscosity + x / vapor.viscosity);

        let specific_heat = (1.0 - x) * liquid.specific_heat + x * vapor.specific_heat;
        let enthalpy = (1.0 - x) * liquid.enthalpy + x * vapor.enthalpy;
        let thermal_conductivity =
            (1.0 - x) * liquid.thermal_conductivity + x * vapor.thermal_conductivity;

        let prandtl: Ratio = viscosity * specific_heat / thermal_conductivity;

        Self {
            liquid,
            vapor,
            quality,
            mixed: FluidProperties {
                density,
                specific_heat,
                enthalpy,
                thermal_conductivity,
                viscosity,
                prandtl,
            },
        }
    }

    /// Latent heat of vaporization at this saturation state.
    #[must_use]
    pub fn latent_heat(&self) -> SpecificEnthalpy {
        self.vapor.enthalpy - self.liquid.enthalpy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        dynamic_viscosity::pascal_second,
        mass_density::kilogram_per_cubic_meter,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    fn saturated_water_endpoints() -> (FluidProperties, FluidProperties) {
        let liquid = FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(958.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4217.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(419.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.68),
            viscosity: DynamicViscosity::new::<pascal_second>(2.82e-4),
            prandtl: Ratio::new::<ratio>(1.75),
        };
        let vapor = FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(0.597),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2080.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2676.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            viscosity: DynamicViscosity::new::<pascal_second>(1.23e-5),
            prandtl: Ratio::new::<ratio>(1.0),
        };
        (liquid, vapor)
    }

    #[test]
    fn mixing_recovers_endpoints_at_zero_and_one() {
        let (liquid, vapor) = saturated_water_endpoints();

        let at_zero = TwoPhaseProperties::mix(liquid, vapor, Quality::saturated_liquid());
        assert_relative_eq!(at_zero.mixed.density.value, liquid.density.value);
        assert_relative_eq!(at_zero.mixed.enthalpy.value, liquid.enthalpy.value);

        let at_one = TwoPhaseProperties::mix(liquid, vapor, Quality::saturated_vapor());
        assert_relative_eq!(at_one.mixed.density.value, vapor.density.value);
        assert_relative_eq!(at_one.mixed.viscosity.value, vapor.viscosity.value);
    }

    #[test]
    fn density_mixes_harmonically_not_linearly() {
        let (liquid, vapor) = saturated_water_endpoints();
        let x = Quality::new(0.5).unwrap();

        let mixed = TwoPhaseProperties::mix(liquid, vapor, x).mixed;

        let harmonic = 1.0 / (0.5 / 958.0 + 0.5 / 0.597);
        assert_relative_eq!(mixed.density.value, harmonic, max_relative = 1e-12);
        // A linear blend would be far denser.
        assert!(mixed.density.value < 0.5 * (958.0 + 0.597));
    }

    #[test]
    fn enthalpy_mixes_linearly() {
        let (liquid, vapor) = saturated_water_endpoints();
        let two_phase = TwoPhaseProperties::mix(liquid, vapor, Quality::new(0.25).unwrap());

        assert_relative_eq!(
            two_phase.mixed.enthalpy.get::<kilojoule_per_kilogram>(),
            0.75 * 419.0 + 0.25 * 2676.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            two_phase.latent_heat().get::<kilojoule_per_kilogram>(),
            2676.0 - 419.0
        );
    }

    #[test]
    fn validation_flags_bad_fields() {
        let (liquid, _) = saturated_water_endpoints();

        let mut bad = liquid;
        bad.density = MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN);
        assert!(matches!(
            bad.validated("test"),
            Err(PropertyError::NonFinite { property: "density", .. })
        ));

        let mut negative = liquid;
        negative.prandtl = Ratio::new::<ratio>(-1.0);
        assert!(matches!(
            negative.validated("test"),
            Err(PropertyError::Negative { property: "prandtl number", .. })
        ));

        assert!(liquid.validated("test").is_ok());
    }
}
