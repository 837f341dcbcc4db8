//! Two-phase frictional pressure drop after Lockhart–Martinelli with
//! the Chisholm form of the two-phase multiplier.

use thiserror::Error;
use uom::si::f64::{Length, Pressure};
use uom::si::{length::meter, pressure::pascal};

use crate::support::thermo::{FluidProperties, Quality};
use crate::support::units::MassFlux;

use super::single_phase::{FlowRegime, friction_factor};

/// Cap on the two-phase multiplier φ_L².
///
/// The raw Chisholm form over-predicts at very small Martinelli
/// parameters; the cap is an empirical correction, not a physical
/// limit.
pub const CHISHOLM_CAP: f64 = 20.0;

/// Below this quality margin the flow is effectively single-phase and
/// the split into phase streams degenerates.
const QUALITY_MARGIN: f64 = 1e-6;

/// Failure of the two-phase split; callers fall back to a single-phase
/// estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TwoPhaseDropError {
    #[error("quality {quality} leaves no meaningful second phase")]
    SinglePhaseLimit { quality: f64 },

    #[error("phase pressure drops are degenerate (ΔP_L = {liquid} Pa, ΔP_V = {vapor} Pa)")]
    DegenerateSplit { liquid: f64, vapor: f64 },
}

/// Inputs to [`lockhart_martinelli`].
#[derive(Debug, Clone, Copy)]
pub struct TwoPhaseDropInput<'a> {
    pub liquid: &'a FluidProperties,
    pub vapor: &'a FluidProperties,
    pub quality: Quality,
    pub mass_flux: MassFlux,
    pub diameter: Length,
    pub length: Length,
    pub relative_roughness: f64,
}

/// Resolved two-phase pressure drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseDrop {
    pub pressure_drop: Pressure,
    /// Liquid-phase-alone drop that the multiplier scales.
    pub liquid_drop: Pressure,
    /// Applied two-phase multiplier φ_L² (after the cap).
    pub multiplier: f64,
    /// Martinelli parameter X = √(ΔP_L/ΔP_V).
    pub martinelli: f64,
}

/// Chisholm constant for the (liquid, vapor) regime pair.
///
/// Transitional flow counts as turbulent here; the constant only
/// distinguishes laminar from not.
#[must_use]
pub fn chisholm_constant(liquid: FlowRegime, vapor: FlowRegime) -> f64 {
    match (liquid.is_laminar(), vapor.is_laminar()) {
        (true, true) => 5.0,
        (false, true) => 10.0,
        (true, false) => 12.0,
        (false, false) => 20.0,
    }
}

/// Two-phase multiplier `φ_L² = 1 + C/X + 1/X²`, capped at
/// [`CHISHOLM_CAP`].
#[must_use]
pub fn chisholm_multiplier(martinelli: f64, c: f64) -> f64 {
    (1.0 + c / martinelli + 1.0 / (martinelli * martinelli)).min(CHISHOLM_CAP)
}

/// Frictional pressure drop of a two-phase flow.
///
/// Computes the phase-alone drops, the Martinelli parameter, and the
/// Chisholm multiplier, returning `ΔP_TP = φ_L²·ΔP_L`.
///
/// # Errors
///
/// Returns [`TwoPhaseDropError`] when the quality leaves no meaningful
/// second phase; the caller is expected to use a single-phase estimate
/// instead.
pub fn lockhart_martinelli(
    input: &TwoPhaseDropInput,
) -> Result<TwoPhaseDrop, TwoPhaseDropError> {
    let x = input.quality.value();
    if x < QUALITY_MARGIN || x > 1.0 - QUALITY_MARGIN {
        return Err(TwoPhaseDropError::SinglePhaseLimit { quality: x });
    }

    let g = input.mass_flux.value;
    let d = input.diameter.get::<meter>();
    let l = input.length.get::<meter>();

    let phase_drop = |props: &FluidProperties, phase_flux: f64| -> (f64, FlowRegime) {
        let re = phase_flux * d / props.viscosity.value;
        let regime = FlowRegime::from_reynolds(re);
        let f = friction_factor(re, input.relative_roughness);
        let velocity = phase_flux / props.density.value;
        let dp = f * (l / d) * props.density.value * velocity * velocity / 2.0;
        (dp, regime)
    };

    let (dp_liquid, liquid_regime) = phase_drop(input.liquid, g * (1.0 - x));
    let (dp_vapor, vapor_regime) = phase_drop(input.vapor, g * x);

    if dp_liquid <= 0.0 || dp_vapor <= 0.0 {
        return Err(TwoPhaseDropError::DegenerateSplit {
            liquid: dp_liquid,
            vapor: dp_vapor,
        });
    }

    let martinelli = (dp_liquid / dp_vapor).sqrt();
    let multiplier = chisholm_multiplier(
        martinelli,
        chisholm_constant(liquid_regime, vapor_regime),
    );

    Ok(TwoPhaseDrop {
        pressure_drop: Pressure::new::<pascal>(multiplier * dp_liquid),
        liquid_drop: Pressure::new::<pascal>(dp_liquid),
        multiplier,
        martinelli,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        available_energy::kilojoule_per_kilogram,
        dynamic_viscosity::pascal_second,
        f64::{Area, DynamicViscosity, MassDensity, MassRate, Ratio, SpecificHeatCapacity,
              ThermalConductivity},
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        ratio::ratio as ratio_unit,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::units::SpecificEnthalpy;

    fn liquid() -> FluidProperties {
        FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(958.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4217.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(419.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.68),
            viscosity: DynamicViscosity::new::<pascal_second>(2.82e-4),
            prandtl: Ratio::new::<ratio_unit>(1.75),
        }
    }

    fn vapor() -> FluidProperties {
        FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(0.597),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2080.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2676.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            viscosity: DynamicViscosity::new::<pascal_second>(1.23e-5),
            prandtl: Ratio::new::<ratio_unit>(1.02),
        }
    }

    fn input<'a>(l: &'a FluidProperties, v: &'a FluidProperties, x: f64) -> TwoPhaseDropInput<'a> {
        TwoPhaseDropInput {
            liquid: l,
            vapor: v,
            quality: Quality::new(x).unwrap(),
            mass_flux: MassRate::new::<kilogram_per_second>(200.0)
                / Area::new::<square_meter>(1.0),
            diameter: Length::new::<meter>(0.021),
            length: Length::new::<meter>(6.0),
            relative_roughness: 1e-4,
        }
    }

    #[test]
    fn multiplier_increases_as_martinelli_shrinks() {
        let mut last = 0.0;
        for x_param in [5.0, 2.0, 1.0, 0.5, 0.4] {
            let phi = chisholm_multiplier(x_param, 5.0);
            assert!(phi > last, "φ² should grow as X → 0");
            last = phi;
        }
    }

    #[test]
    fn multiplier_caps_at_exactly_twenty() {
        // C = 20, X = 1: 1 + 20 + 1 = 22 raw, capped.
        assert_relative_eq!(chisholm_multiplier(1.0, 20.0), CHISHOLM_CAP);
        // Arbitrarily small X pins at the cap, never beyond.
        assert_relative_eq!(chisholm_multiplier(1e-6, 5.0), CHISHOLM_CAP);
        // Large X leaves the raw formula untouched.
        let raw = chisholm_multiplier(10.0, 5.0);
        assert_relative_eq!(raw, 1.0 + 0.5 + 0.01, max_relative = 1e-12);
    }

    #[test]
    fn chisholm_constant_by_regime_pair() {
        use FlowRegime::{Laminar, Transitional, Turbulent};
        assert_relative_eq!(chisholm_constant(Laminar, Laminar), 5.0);
        assert_relative_eq!(chisholm_constant(Turbulent, Laminar), 10.0);
        assert_relative_eq!(chisholm_constant(Laminar, Turbulent), 12.0);
        assert_relative_eq!(chisholm_constant(Turbulent, Turbulent), 20.0);
        assert_relative_eq!(chisholm_constant(Transitional, Transitional), 20.0);
    }

    #[test]
    fn two_phase_drop_exceeds_liquid_alone() {
        let l = liquid();
        let v = vapor();
        let drop = lockhart_martinelli(&input(&l, &v, 0.5)).unwrap();

        assert!(drop.pressure_drop > drop.liquid_drop);
        assert_relative_eq!(
            drop.pressure_drop.get::<pascal>(),
            drop.multiplier * drop.liquid_drop.get::<pascal>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_single_phase_limits() {
        let l = liquid();
        let v = vapor();
        assert!(matches!(
            lockhart_martinelli(&input(&l, &v, 0.0)),
            Err(TwoPhaseDropError::SinglePhaseLimit { .. })
        ));
        assert!(matches!(
            lockhart_martinelli(&input(&l, &v, 1.0)),
            Err(TwoPhaseDropError::SinglePhaseLimit { .. })
        ));
    }
}
