//! In-tube condensation after Shah and Nusselt film condensation.

use uom::si::f64::{HeatTransfer, Length, MassDensity, Pressure, TemperatureInterval};
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, length::meter,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::thermo::{FluidProperties, Quality};
use crate::support::units::{MassFlux, SpecificEnthalpy};

/// Floor on the Shah ratio: the two-phase coefficient never falls below
/// 10% of the all-liquid coefficient.
const SHAH_FLOOR: f64 = 0.1;

/// Standard acceleration of gravity, m/s².
const GRAVITY: f64 = 9.80665;

/// Inputs to [`shah_condensation`].
#[derive(Debug, Clone, Copy)]
pub struct ShahInput<'a> {
    pub liquid: &'a FluidProperties,
    pub quality: Quality,
    pub mass_flux: MassFlux,
    pub diameter: Length,
    pub pressure: Pressure,
    pub critical_pressure: Pressure,
}

/// Condensing coefficient after Shah.
///
/// The ratio to the all-liquid Dittus-Boelter coefficient branches on
/// `Z = (1/x − 1)^0.8 · p_red^0.4`: `1 + 3.8/Z^0.95` for Z ≥ 1 and
/// `4.8/Z^0.38` below, which meet at Z = 1. Quality is clamped to
/// [0.01, 0.99] so both branches stay defined at the endpoints.
#[must_use]
pub fn shah_condensation(input: &ShahInput) -> HeatTransfer {
    let x = input.quality.value().clamp(0.01, 0.99);
    let g = input.mass_flux.value;
    let d = input.diameter.get::<meter>();

    let mu_l = input.liquid.viscosity.value;
    let k_l = input.liquid.thermal_conductivity.value;
    let pr_l = input.liquid.prandtl.value;

    // All-liquid coefficient at the full mass flux.
    let re_l0 = g * d / mu_l;
    let h_l0 = 0.023 * re_l0.powf(0.8) * pr_l.powf(0.4) * k_l / d;

    let reduced_pressure = (input.pressure.value / input.critical_pressure.value).clamp(1e-3, 0.99);
    let z = (1.0 / x - 1.0).powf(0.8) * reduced_pressure.powf(0.4);

    let ratio = if z >= 1.0 {
        1.0 + 3.8 / z.powf(0.95)
    } else {
        4.8 / z.powf(0.38)
    };

    HeatTransfer::new::<watt_per_square_meter_kelvin>(ratio.max(SHAH_FLOOR) * h_l0)
}

/// Inputs to [`nusselt_film_condensation`].
#[derive(Debug, Clone, Copy)]
pub struct FilmCondensationInput<'a> {
    pub liquid: &'a FluidProperties,
    pub vapor_density: MassDensity,
    pub latent_heat: SpecificEnthalpy,
    pub diameter: Length,
    /// Temperature difference driving the film, `T_sat − T_wall`.
    pub film_delta_t: TemperatureInterval,
}

/// Laminar film condensation on a horizontal tube (Nusselt).
///
/// `h = 0.725·[g·ρ_l·(ρ_l − ρ_v)·h_fg·k_l³ / (μ_l·D·ΔT)]^¼`
#[must_use]
pub fn nusselt_film_condensation(input: &FilmCondensationInput) -> HeatTransfer {
    let rho_l = input.liquid.density.value;
    let rho_v = input.vapor_density.value;
    let k_l = input.liquid.thermal_conductivity.value;
    let mu_l = input.liquid.viscosity.value;
    let h_fg = input.latent_heat.value;
    let d = input.diameter.get::<meter>();
    // A vanishing driving ΔT blows the quarter-power up; a tenth of a
    // kelvin is below any resolvable film subcooling.
    let delta_t = input.film_delta_t.get::<delta_kelvin>().max(0.1);

    let buoyancy = rho_l * (rho_l - rho_v).max(0.0);
    let h = 0.725
        * (GRAVITY * buoyancy * h_fg * k_l.powi(3) / (mu_l * d * delta_t)).powf(0.25);

    HeatTransfer::new::<watt_per_square_meter_kelvin>(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        available_energy::kilojoule_per_kilogram,
        dynamic_viscosity::pascal_second,
        f64::{Area, DynamicViscosity, MassRate, Ratio, SpecificHeatCapacity,
              ThermalConductivity},
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        pressure::{bar, megapascal},
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    fn liquid() -> FluidProperties {
        FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(958.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4217.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(419.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.68),
            viscosity: DynamicViscosity::new::<pascal_second>(2.82e-4),
            prandtl: Ratio::new::<ratio>(1.75),
        }
    }

    fn shah_input(l: &FluidProperties, x: f64) -> ShahInput<'_> {
        ShahInput {
            liquid: l,
            quality: Quality::new(x).unwrap(),
            mass_flux: MassRate::new::<kilogram_per_second>(200.0)
                / Area::new::<square_meter>(1.0),
            diameter: Length::new::<meter>(0.021),
            pressure: Pressure::new::<bar>(1.0),
            critical_pressure: Pressure::new::<megapascal>(22.064),
        }
    }

    fn h_l0_reference() -> f64 {
        let re: f64 = 200.0 * 0.021 / 2.82e-4;
        0.023 * re.powf(0.8) * 1.75_f64.powf(0.4) * 0.68 / 0.021
    }

    #[test]
    fn shah_exceeds_all_liquid_coefficient() {
        let l = liquid();
        for x in [0.1, 0.5, 0.9] {
            let h = shah_condensation(&shah_input(&l, x));
            assert!(h.get::<watt_per_square_meter_kelvin>() > h_l0_reference());
        }
    }

    #[test]
    fn shah_grows_with_quality() {
        let l = liquid();
        let low = shah_condensation(&shah_input(&l, 0.2));
        let high = shah_condensation(&shah_input(&l, 0.8));
        assert!(high > low);
    }

    #[test]
    fn shah_branches_meet_at_z_equal_one() {
        // At Z = 1 both branch expressions evaluate to 4.8.
        assert_relative_eq!(1.0 + 3.8 / 1.0_f64.powf(0.95), 4.8);
        assert_relative_eq!(4.8 / 1.0_f64.powf(0.38), 4.8);
    }

    #[test]
    fn film_condensation_shrinks_with_driving_delta_t() {
        let l = liquid();
        let input = |dt: f64| FilmCondensationInput {
            liquid: &l,
            vapor_density: MassDensity::new::<kilogram_per_cubic_meter>(0.597),
            latent_heat: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2257.0),
            diameter: Length::new::<meter>(0.025),
            film_delta_t: TemperatureInterval::new::<delta_kelvin>(dt),
        };

        let gentle = nusselt_film_condensation(&input(5.0));
        let steep = nusselt_film_condensation(&input(40.0));
        assert!(gentle > steep);

        // Water films on small tubes sit in the 5–15 kW/m²K range.
        let h = gentle.get::<watt_per_square_meter_kelvin>();
        assert!(h > 3000.0 && h < 30_000.0, "unexpected h = {h}");
    }
}
