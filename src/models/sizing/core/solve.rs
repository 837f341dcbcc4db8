//! The orchestrating solve.
//!
//! Stage order is part of the contract: input validation and the LMTD
//! check run before the first property lookup; specialized coefficient
//! models run behind the strategy plan and fall back to the direct
//! network; pressure drop never fails the solve.

use uom::si::f64::HeatTransfer;

use crate::support::correlations::{
    ChenInput, ShahInput, chen_boiling, shah_condensation,
};
use crate::support::geometry::{FlowSection, HxGeometry};
use crate::support::hx::{
    NetworkInput, SideFlow, SideInput, TerminalTemperatures, WallSpec, assemble, lmtd,
    twist_enhancement,
};
use crate::support::thermo::PropertyOracle;

use super::area::{MarginClass, actual_area, margin_percent, required_area};
use super::config::{CoefficientMode, FlowPath, SizingInput};
use super::error::SolveError;
use super::pressure::path_drop;
use super::process::{PhaseChangeKind, Process};
use super::resolved::{ResolvedStream, resolve};
use super::results::{SizingResults, temperature_profile};
use super::strategy::{UStrategy, plan};
use super::three_zone::{ThreeZoneContext, solve_three_zone};

const PROFILE_SAMPLES: usize = 11;

pub(crate) fn solve(
    input: &SizingInput,
    oracle: &dyn PropertyOracle,
) -> Result<SizingResults, SolveError> {
    input.validate()?;

    // Terminal temperatures must close before anything is looked up.
    let terminals = TerminalTemperatures {
        hot_inlet: input.hot.inlet_temperature,
        hot_outlet: input.hot.outlet_temperature,
        cold_inlet: input.cold.inlet_temperature,
        cold_outlet: input.cold.outlet_temperature,
    };
    let lmtd_value = lmtd(input.arrangement, &terminals)?;

    let hot_process = Process::classify(&input.hot, oracle);
    let cold_process = Process::classify(&input.cold, oracle);
    let (sides, duty) = resolve(input, hot_process, cold_process, oracle)?;

    let tube_section = input.geometry.tube_flow()?;
    let annulus = input.geometry.annulus_flow()?;
    // Friction sees the wetted perimeter, heat transfer the open area:
    // hydraulic diameter for pressure drop, area-equivalent diameter
    // for the film correlations.
    let annulus_hydraulic = FlowSection {
        area: annulus.flow_area,
        diameter: annulus.hydraulic_diameter,
    };
    let annulus_thermal = FlowSection {
        area: annulus.flow_area,
        diameter: annulus.area_equivalent_diameter,
    };

    let wall = WallSpec {
        outer_diameter: input.geometry.nominal_inner_tube_od(),
        inner_diameter: input.geometry.nominal_inner_tube_od()
            - 2.0 * input.geometry.inner_tube.wall_thickness,
        conductivity: input.wall_material.thermal_conductivity(),
    };
    let enhancement = match &input.geometry.twist {
        Some(twist) => twist_enhancement(
            input.geometry.nominal_inner_tube_od(),
            twist.pitch,
            twist.lobes,
        ),
        None => 1.0,
    };

    // The direct network is always assembled: it is both the universal
    // fallback and the reported breakdown.
    let breakdown = assemble(&NetworkInput {
        inner: side_input(&sides.tube, tube_section, &input.geometry, oracle)?,
        outer: side_input(&sides.annulus, annulus_thermal, &input.geometry, oracle)?,
        wall,
        fouling: input.fouling,
        enhancement: input.geometry.is_twisted().then_some(enhancement),
    });

    let (u, three_zone) = match input.coefficient {
        CoefficientMode::Given(u) => (u, None),
        CoefficientMode::Computed => {
            let mut outcome: Option<(HeatTransfer, _)> = None;
            for strategy in plan(input, &sides) {
                match strategy {
                    UStrategy::ThreeZone => {
                        let (hot_section, cold_section) = match input.hot_path {
                            FlowPath::Tube => (tube_section, annulus_thermal),
                            FlowPath::Annulus => (annulus_thermal, tube_section),
                        };
                        let ctx = ThreeZoneContext {
                            hot: sides.hot(),
                            cold: sides.cold(),
                            geometry: &input.geometry,
                            wall,
                            fouling: input.fouling,
                            arrangement: input.arrangement,
                            hot_path: input.hot_path,
                            hot_section,
                            cold_section,
                            enhancement,
                        };
                        // Any failure here falls through to the next
                        // strategy in the plan.
                        if let Ok(zones) = solve_three_zone(&ctx, oracle) {
                            let u_effective =
                                zones.q_total / (zones.area_total * lmtd_value);
                            outcome = Some((u_effective, Some(zones)));
                            break;
                        }
                    }
                    UStrategy::DirectNetwork => {
                        outcome = Some((breakdown.u, None));
                        break;
                    }
                }
            }
            outcome.expect("the strategy plan always ends with the direct network")
        }
    };

    let actual = actual_area(&input.geometry)?;
    let required = match &three_zone {
        Some(zones) => zones.area_total,
        None => required_area(duty, u, lmtd_value),
    };
    let margin = margin_percent(actual, required);

    let tube_drop = path_drop(&sides.tube, tube_section, &input.geometry, oracle);
    let annulus_drop = path_drop(&sides.annulus, annulus_hydraulic, &input.geometry, oracle);

    Ok(SizingResults {
        duty,
        lmtd: lmtd_value,
        u,
        actual_area: actual,
        required_area: required,
        margin_percent: margin,
        margin: MarginClass::classify(margin),
        tube_drop,
        annulus_drop,
        resistance: breakdown,
        profile: temperature_profile(input.arrangement, &terminals, PROFILE_SAMPLES),
        three_zone,
    })
}

/// Builds one side of the resistance network: single-phase streams run
/// through the flow correlations, phase-change streams arrive as a film
/// coefficient from the matching correlation.
fn side_input<'a>(
    stream: &'a ResolvedStream<'a>,
    section: FlowSection,
    geometry: &HxGeometry,
    oracle: &dyn PropertyOracle,
) -> Result<SideInput<'a>, SolveError> {
    let per_assembly_flow = stream.mass_flow / f64::from(geometry.tubes_per_pass);

    let Some(phase_change) = stream.process.phase_change() else {
        return Ok(SideInput::Flow(SideFlow {
            properties: &stream.bulk,
            mass_flow: per_assembly_flow,
            direction: stream.process.direction(),
            flow_area: section.area,
            diameter: section.diameter,
        }));
    };

    let endpoints = oracle.two_phase(
        &stream.spec.fluid,
        stream.spec.pressure,
        phase_change.mean_quality(),
    )?;
    let mass_flux = per_assembly_flow / section.area;

    let h = match phase_change.kind {
        PhaseChangeKind::Condensing => {
            let critical_pressure = oracle.critical_pressure(&stream.spec.fluid)?;
            shah_condensation(&ShahInput {
                liquid: &endpoints.liquid,
                quality: phase_change.mean_quality(),
                mass_flux,
                diameter: section.diameter,
                pressure: stream.spec.pressure,
                critical_pressure,
            })
        }
        PhaseChangeKind::Evaporating => {
            // Surface tension is optional by contract: the correlation
            // substitutes its documented default on a failed lookup.
            let surface_tension = oracle
                .surface_tension(&stream.spec.fluid, phase_change.saturation_temperature)
                .ok();
            chen_boiling(&ChenInput {
                liquid: &endpoints.liquid,
                vapor: &endpoints.vapor,
                quality: phase_change.mean_quality(),
                mass_flux,
                diameter: section.diameter,
                latent_heat: endpoints.latent_heat(),
                saturation_temperature: phase_change.saturation_temperature,
                surface_tension,
                wall_superheat: None,
            })
        }
    };
    Ok(SideInput::Coefficient(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Length, MassRate, Power, Pressure, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        length::{meter, millimeter},
        mass_rate::kilogram_per_second,
        power::kilowatt,
        pressure::{bar, pascal},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::geometry::{LobeCount, TubeSpec, TwistSpec};
    use crate::support::hx::{FlowArrangement, FoulingFactors};
    use crate::support::materials::WallMaterial;
    use crate::support::thermo::model::ConstantProperties;
    use crate::support::thermo::{
        Fluid, FluidProperties, FluidState, PropertyError, Quality, TwoPhaseProperties,
    };
    use crate::support::units::SurfaceTension;

    use super::super::config::{DutySpec, StreamSpec};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn geometry(twisted: bool) -> HxGeometry {
        HxGeometry {
            inner_tube: TubeSpec {
                outer_diameter: Length::new::<millimeter>(25.0),
                wall_thickness: Length::new::<millimeter>(2.0),
            },
            outer_tube: TubeSpec {
                outer_diameter: Length::new::<millimeter>(57.0),
                wall_thickness: Length::new::<millimeter>(3.5),
            },
            length: Length::new::<meter>(3.0),
            passes: 1,
            tubes_per_pass: 1,
            roughness: Length::new::<meter>(1.5e-6),
            twist: twisted.then_some(TwistSpec {
                pitch: Length::new::<millimeter>(150.0),
                lobes: LobeCount::Four,
                tooth_height: Length::new::<millimeter>(3.0),
            }),
        }
    }

    fn water_water_input(twisted: bool) -> SizingInput {
        SizingInput {
            geometry: geometry(twisted),
            hot: StreamSpec::single_phase(
                Fluid::water(),
                celsius(80.0),
                celsius(60.0),
                Pressure::new::<bar>(2.0),
            )
            .with_mass_flow(MassRate::new::<kilogram_per_second>(0.5)),
            cold: StreamSpec::single_phase(
                Fluid::water(),
                celsius(20.0),
                celsius(40.0),
                Pressure::new::<bar>(2.0),
            )
            .with_mass_flow(MassRate::new::<kilogram_per_second>(0.5)),
            arrangement: FlowArrangement::CounterFlow,
            hot_path: FlowPath::Tube,
            duty: DutySpec::FromFlows,
            coefficient: CoefficientMode::Computed,
            wall_material: WallMaterial::StainlessSteel,
            fouling: FoulingFactors::clean(),
        }
    }

    #[test]
    fn water_water_counterflow_reference_case() {
        let oracle = ConstantProperties::water();
        let results = solve(&water_water_input(false), &oracle).unwrap();

        // 0.5 kg/s cooled 20 K: Q = 0.5·4186·20 ≈ 41.9 kW.
        assert_relative_eq!(
            results.duty.get::<kilowatt>(),
            0.5 * 4186.0 * 20.0 / 1000.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(results.lmtd.get::<delta_kelvin>(), 40.0, epsilon = 1e-9);

        let u = results.u.get::<watt_per_square_meter_kelvin>();
        assert!(u.is_finite() && u > 0.0, "u = {u}");
        assert!(results.actual_area.get::<square_meter>() > 0.0);
        assert!(results.required_area.get::<square_meter>() > 0.0);
        assert!(results.margin_percent.is_finite());

        // Both paths produce a finite, positive drop.
        assert!(results.tube_drop.pressure_drop.get::<pascal>() > 0.0);
        assert!(results.annulus_drop.pressure_drop.get::<pascal>() > 0.0);
        assert!(results.three_zone.is_none());
        assert_eq!(results.profile.len(), 11);
    }

    #[test]
    fn twisted_variant_needs_less_area_for_the_same_duty() {
        let oracle = ConstantProperties::water();
        let smooth = solve(&water_water_input(false), &oracle).unwrap();
        let twisted = solve(&water_water_input(true), &oracle).unwrap();

        assert_relative_eq!(
            smooth.duty.get::<kilowatt>(),
            twisted.duty.get::<kilowatt>(),
            max_relative = 1e-9
        );
        assert!(
            twisted.u > smooth.u,
            "twist enhancement must raise the overall coefficient"
        );
        assert!(twisted.required_area < smooth.required_area);

        // Actual area credit is capped at 1.20× the smooth equivalent.
        let smooth_equivalent = water_water_input(true).geometry.smooth_outer_area();
        assert!(
            twisted.actual_area.get::<square_meter>()
                <= 1.20 * smooth_equivalent.get::<square_meter>() + 1e-12
        );
    }

    #[test]
    fn given_u_short_circuits_the_network() {
        let oracle = ConstantProperties::water();
        let mut input = water_water_input(false);
        input.coefficient = CoefficientMode::Given(HeatTransfer::new::<
            watt_per_square_meter_kelvin,
        >(750.0));

        let results = solve(&input, &oracle).unwrap();
        assert_relative_eq!(
            results.u.get::<watt_per_square_meter_kelvin>(),
            750.0
        );
        assert_relative_eq!(
            results.required_area.get::<square_meter>(),
            results.duty.value / (750.0 * 40.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn duty_mode_resolves_both_flows() {
        let oracle = ConstantProperties::water();
        let mut input = water_water_input(false);
        input.duty = DutySpec::Duty(Power::new::<kilowatt>(41.86));
        input.hot.mass_flow = None;
        input.cold.mass_flow = None;

        let results = solve(&input, &oracle).unwrap();
        assert_relative_eq!(results.duty.get::<kilowatt>(), 41.86, max_relative = 1e-12);
        // The flows round-trip to ~0.5 kg/s each.
        assert!(results.tube_drop.velocity.value > 0.0);
        assert!(results.annulus_drop.velocity.value > 0.0);
    }

    #[test]
    fn margin_boundaries_classify_correctly() {
        assert_eq!(MarginClass::classify(9.999), MarginClass::Insufficient);
        assert_eq!(MarginClass::classify(10.0), MarginClass::Adequate);
        assert_eq!(MarginClass::classify(25.0), MarginClass::Adequate);
        assert_eq!(MarginClass::classify(25.001), MarginClass::Excessive);
    }

    #[test]
    fn twisted_condenser_runs_the_three_zone_model() {
        let oracle = ConstantProperties::water();
        let mut input = water_water_input(true);
        input.hot = StreamSpec::single_phase(
            Fluid::water(),
            celsius(140.0),
            celsius(70.0),
            Pressure::new::<bar>(1.0),
        )
        .with_mass_flow(MassRate::new::<kilogram_per_second>(0.05));
        input.cold.mass_flow = None;
        input.hot_path = FlowPath::Annulus;

        let results = solve(&input, &oracle).unwrap();
        let zones = results.three_zone.expect("three-zone model should apply");

        // Zone duties and areas sum to their aggregates.
        let duty_sum = zones.desuperheat.duty + zones.condense.duty + zones.subcool.duty;
        assert_relative_eq!(
            duty_sum.get::<kilowatt>(),
            zones.q_total.get::<kilowatt>(),
            max_relative = 1e-6
        );
        let area_sum = zones.desuperheat.area + zones.condense.area + zones.subcool.area;
        assert_relative_eq!(
            area_sum.get::<square_meter>(),
            zones.area_total.get::<square_meter>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            results.required_area.get::<square_meter>(),
            zones.area_total.get::<square_meter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            zones.saturation_temperature.get::<degree_celsius>(),
            100.0,
            epsilon = 1e-9
        );

        // The condensing film dominates the hot-side coefficients.
        assert!(zones.condense.h_hot > zones.desuperheat.h_hot);
        assert!(zones.condense.duty > zones.subcool.duty);
    }

    /// An oracle that fails the test if any lookup happens.
    struct PanickingOracle;

    impl PropertyOracle for PanickingOracle {
        fn properties(&self, _: &FluidState) -> Result<FluidProperties, PropertyError> {
            panic!("property lookup before input checks completed");
        }
        fn saturation_temperature(
            &self,
            _: &Fluid,
            _: Pressure,
        ) -> Result<ThermodynamicTemperature, PropertyError> {
            panic!("saturation lookup before input checks completed");
        }
        fn saturated_liquid(
            &self,
            _: &Fluid,
            _: Pressure,
        ) -> Result<FluidProperties, PropertyError> {
            panic!("saturation lookup before input checks completed");
        }
        fn saturated_vapor(
            &self,
            _: &Fluid,
            _: Pressure,
        ) -> Result<FluidProperties, PropertyError> {
            panic!("saturation lookup before input checks completed");
        }
        fn surface_tension(
            &self,
            _: &Fluid,
            _: ThermodynamicTemperature,
        ) -> Result<SurfaceTension, PropertyError> {
            panic!("surface tension lookup before input checks completed");
        }
        fn critical_pressure(&self, _: &Fluid) -> Result<Pressure, PropertyError> {
            panic!("critical pressure lookup before input checks completed");
        }
        fn two_phase(
            &self,
            _: &Fluid,
            _: Pressure,
            _: Quality,
        ) -> Result<TwoPhaseProperties, PropertyError> {
            panic!("two-phase lookup before input checks completed");
        }
    }

    #[test]
    fn temperature_cross_rejects_before_any_lookup() {
        let mut input = water_water_input(false);
        // Hot inlet at the cold outlet: the counterflow inlet approach
        // closes.
        input.hot.inlet_temperature = celsius(40.0);
        input.hot.outlet_temperature = celsius(39.0);

        let err = solve(&input, &PanickingOracle).unwrap_err();
        assert!(matches!(err, SolveError::TemperatureCross(_)));
    }

    #[test]
    fn invalid_input_rejects_before_any_lookup() {
        let mut input = water_water_input(false);
        input.hot.mass_flow = Some(MassRate::new::<kilogram_per_second>(-0.5));

        let err = solve(&input, &PanickingOracle).unwrap_err();
        assert!(matches!(err, SolveError::Input(_)));
        assert!(err.to_string().contains("hot mass flow"));
    }
}
