//! Flow-boiling coefficient after Chen.
//!
//! Chen superposes a two-phase-enhanced convective term and a
//! suppressed nucleate-boiling term: `h = F·h_l + S·h_nb`, with the
//! enhancement F a function of the Martinelli parameter and the
//! suppression S a function of the two-phase Reynolds number. The
//! nucleate term is Forster-Zuber pool boiling.

use uom::si::f64::{HeatTransfer, Length, TemperatureInterval, ThermodynamicTemperature};
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, length::meter,
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin as abs_kelvin,
};

use crate::support::thermo::{FluidProperties, Quality};
use crate::support::units::{MassFlux, SpecificEnthalpy, SurfaceTension};

/// Surface tension assumed when the oracle cannot supply one, N/m.
pub const SURFACE_TENSION_FALLBACK: f64 = 0.05;

/// Wall superheat assumed when the caller has no wall information, K.
pub const DEFAULT_WALL_SUPERHEAT: f64 = 5.0;

/// Inputs to [`chen_boiling`].
#[derive(Debug, Clone, Copy)]
pub struct ChenInput<'a> {
    pub liquid: &'a FluidProperties,
    pub vapor: &'a FluidProperties,
    pub quality: Quality,
    pub mass_flux: MassFlux,
    pub diameter: Length,
    pub latent_heat: SpecificEnthalpy,
    pub saturation_temperature: ThermodynamicTemperature,
    /// `None` falls back to [`SURFACE_TENSION_FALLBACK`].
    pub surface_tension: Option<SurfaceTension>,
    /// `None` assumes [`DEFAULT_WALL_SUPERHEAT`].
    pub wall_superheat: Option<TemperatureInterval>,
}

/// Flow-boiling coefficient after Chen.
#[must_use]
pub fn chen_boiling(input: &ChenInput) -> HeatTransfer {
    // A pure-vapor endpoint leaves no liquid film to boil; keep a thin
    // film in the model so every term stays finite.
    let x = input.quality.value().min(0.99);
    let g = input.mass_flux.value;
    let d = input.diameter.get::<meter>();

    let rho_l = input.liquid.density.value;
    let rho_v = input.vapor.density.value;
    let mu_l = input.liquid.viscosity.value;
    let mu_v = input.vapor.viscosity.value;
    let k_l = input.liquid.thermal_conductivity.value;
    let cp_l = input.liquid.specific_heat.value;
    let pr_l = input.liquid.prandtl.value;
    let h_fg = input.latent_heat.value;
    let t_sat = input.saturation_temperature.get::<abs_kelvin>();

    let sigma = input
        .surface_tension
        .map_or(SURFACE_TENSION_FALLBACK, |s| s.value);
    let delta_t = input
        .wall_superheat
        .map_or(DEFAULT_WALL_SUPERHEAT, |dt| dt.get::<delta_kelvin>());

    // Liquid-fraction convective term.
    let re_l = g * (1.0 - x) * d / mu_l;
    let h_l = 0.023 * re_l.powf(0.8) * pr_l.powf(0.4) * k_l / d;

    // Reynolds factor F from the inverse Martinelli parameter.
    let inv_xtt = if x > 0.0 {
        (x / (1.0 - x)).powf(0.9) * (rho_l / rho_v).powf(0.5) * (mu_v / mu_l).powf(0.1)
    } else {
        0.0
    };
    let reynolds_factor = if inv_xtt <= 0.1 {
        1.0
    } else {
        2.35 * (inv_xtt + 0.213).powf(0.736)
    };

    // Suppression factor S from the two-phase Reynolds number.
    let re_tp = re_l * reynolds_factor.powf(1.25);
    let suppression = 1.0 / (1.0 + 2.53e-6 * re_tp.powf(1.17));

    // Forster-Zuber nucleate term. The saturation pressure rise over
    // the wall superheat comes from Clausius-Clapeyron when the caller
    // has nothing better.
    let delta_p = rho_v * h_fg * delta_t / t_sat;
    let h_nb = 0.00122
        * (k_l.powf(0.79) * cp_l.powf(0.45) * rho_l.powf(0.49))
        / (sigma.powf(0.5) * mu_l.powf(0.29) * h_fg.powf(0.24) * rho_v.powf(0.24))
        * delta_t.powf(0.24)
        * delta_p.powf(0.75);

    let h = reynolds_factor * h_l + suppression * h_nb;
    HeatTransfer::new::<watt_per_square_meter_kelvin>(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        available_energy::kilojoule_per_kilogram,
        dynamic_viscosity::pascal_second,
        f64::{Area, DynamicViscosity, MassDensity, MassRate, Ratio, SpecificHeatCapacity,
              ThermalConductivity},
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::units::newton_per_meter;

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

    fn vapor() -> FluidProperties {
        FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(0.597),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2080.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2676.0),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.025),
            viscosity: DynamicViscosity::new::<pascal_second>(1.23e-5),
            prandtl: Ratio::new::<ratio>(1.02),
        }
    }

    fn mass_flux(kg_per_m2_s: f64) -> MassFlux {
        MassRate::new::<kilogram_per_second>(kg_per_m2_s) / Area::new::<square_meter>(1.0)
    }

    fn input<'a>(l: &'a FluidProperties, v: &'a FluidProperties, x: f64) -> ChenInput<'a> {
        ChenInput {
            liquid: l,
            vapor: v,
            quality: Quality::new(x).unwrap(),
            mass_flux: mass_flux(300.0),
            diameter: Length::new::<meter>(0.021),
            latent_heat: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2257.0),
            saturation_temperature: ThermodynamicTemperature::new::<degree_celsius>(100.0),
            surface_tension: Some(newton_per_meter(0.0589)),
            wall_superheat: None,
        }
    }

    #[test]
    fn boiling_exceeds_single_phase_liquid() {
        let l = liquid();
        let v = vapor();
        let h = chen_boiling(&input(&l, &v, 0.3));

        // All-liquid Dittus-Boelter at the same mass flux.
        let re: f64 = 300.0 * 0.021 / 2.82e-4;
        let h_l0 = 0.023 * re.powf(0.8) * 1.75_f64.powf(0.4) * 0.68 / 0.021;

        assert!(h.get::<watt_per_square_meter_kelvin>() > h_l0);
    }

    #[test]
    fn enhancement_grows_with_quality_in_the_working_range() {
        let l = liquid();
        let v = vapor();
        let low = chen_boiling(&input(&l, &v, 0.1));
        let high = chen_boiling(&input(&l, &v, 0.6));
        assert!(high > low);
    }

    #[test]
    fn surface_tension_fallback_is_usable() {
        let l = liquid();
        let v = vapor();
        let mut no_sigma = input(&l, &v, 0.3);
        no_sigma.surface_tension = None;

        let h = chen_boiling(&no_sigma);
        assert!(h.get::<watt_per_square_meter_kelvin>().is_finite());
        assert!(h.get::<watt_per_square_meter_kelvin>() > 0.0);
    }

    #[test]
    fn quality_endpoints_stay_finite() {
        let l = liquid();
        let v = vapor();
        for x in [0.0, 1.0] {
            let h = chen_boiling(&input(&l, &v, x));
            assert!(h.get::<watt_per_square_meter_kelvin>().is_finite());
        }
    }
}
