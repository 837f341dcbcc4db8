//! Three-zone condenser model.
//!
//! A hot stream entering superheated and leaving subcooled is sized as
//! three zones (desuperheat, condense, subcool), each with its own
//! film coefficient, LMTD, and area. Zone duties come from the
//! saturation enthalpies; coolant temperatures at the zone boundaries
//! are back-computed from the coolant's heat balance.

use thiserror::Error;
use uom::si::f64::{Area, HeatTransfer, Power, ThermodynamicTemperature};
use uom::si::ratio::ratio;

use crate::support::correlations::{
    FilmCondensationInput, HeatDirection, convective_coefficient, flow_velocity,
    nusselt, nusselt_film_condensation, reynolds,
};
use crate::support::geometry::{FlowSection, HxGeometry};
use crate::support::hx::{
    FlowArrangement, FoulingFactors, LmtdError, NetworkInput, SideInput, TerminalTemperatures,
    WallSpec, condensing_enhancement, desuperheat_enhancement, lmtd,
};
use crate::support::thermo::{FluidProperties, PropertyError, PropertyOracle, Quality};

use super::config::FlowPath;
use super::resolved::ResolvedStream;

/// One sized zone of the condenser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneResult {
    pub duty: Power,
    pub area: Area,
    pub u: HeatTransfer,
    /// Hot-side film coefficient used in this zone.
    pub h_hot: HeatTransfer,
    pub lmtd: uom::si::f64::TemperatureInterval,
    pub hot_inlet: ThermodynamicTemperature,
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_inlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
}

/// The three zones and their aggregates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeZoneResult {
    pub desuperheat: ZoneResult,
    pub condense: ZoneResult,
    pub subcool: ZoneResult,
    pub q_total: Power,
    pub area_total: Area,
    pub saturation_temperature: ThermodynamicTemperature,
}

/// Internal failure of the three-zone model; the caller falls back to
/// the direct resistance network.
#[derive(Debug, Error)]
pub(crate) enum ThreeZoneError {
    #[error("property failure: {0}")]
    Property(#[from] PropertyError),

    #[error("zone temperature approach failed: {0}")]
    Lmtd(#[from] LmtdError),

    #[error("the {zone} zone carries no positive duty")]
    NonPositiveZoneDuty { zone: &'static str },

    #[error("the hot stream does not transit the dome")]
    NotAFullTransit,
}

/// Everything the three-zone solver needs beyond the oracle.
pub(crate) struct ThreeZoneContext<'a> {
    pub hot: &'a ResolvedStream<'a>,
    pub cold: &'a ResolvedStream<'a>,
    pub geometry: &'a HxGeometry,
    pub wall: WallSpec,
    pub fouling: FoulingFactors,
    pub arrangement: FlowArrangement,
    pub hot_path: FlowPath,
    pub hot_section: FlowSection,
    pub cold_section: FlowSection,
    /// Base twist enhancement of the insert.
    pub enhancement: f64,
}

pub(crate) fn solve_three_zone(
    ctx: &ThreeZoneContext,
    oracle: &dyn PropertyOracle,
) -> Result<ThreeZoneResult, ThreeZoneError> {
    let Some(phase_change) = ctx.hot.process.phase_change() else {
        return Err(ThreeZoneError::NotAFullTransit);
    };
    if !phase_change.full_transit() {
        return Err(ThreeZoneError::NotAFullTransit);
    }
    let t_sat = phase_change.saturation_temperature;

    let spec = ctx.hot.spec;
    let endpoints = oracle.two_phase(
        &spec.fluid,
        spec.pressure,
        Quality::new(0.5).expect("0.5 is a valid quality"),
    )?;
    let h_g = endpoints.vapor.enthalpy;
    let h_f = endpoints.liquid.enthalpy;

    // Duty split by enthalpy differences at the saturated states.
    let m_hot = ctx.hot.mass_flow;
    let q_desup = m_hot * (ctx.hot.inlet_enthalpy - h_g);
    let q_cond = m_hot * (h_g - h_f);
    let q_sub = m_hot * (h_f - ctx.hot.outlet_enthalpy);
    for (q, zone) in [
        (q_desup, "desuperheat"),
        (q_cond, "condense"),
        (q_sub, "subcool"),
    ] {
        if !(q.value > 0.0) {
            return Err(ThreeZoneError::NonPositiveZoneDuty { zone });
        }
    }
    let q_total = q_desup + q_cond + q_sub;

    // Coolant boundary temperatures from its heat balance. In
    // counterflow the coolant meets the subcool zone first; in parallel
    // flow the desuperheat zone.
    let coolant_capacity = ctx.cold.mass_flow * ctx.cold.bulk.specific_heat;
    let t_cold_in = ctx.cold.spec.inlet_temperature;
    let rise = |q: Power| q / coolant_capacity;
    let (cold_desup, cold_cond, cold_sub) = match ctx.arrangement {
        FlowArrangement::CounterFlow => {
            let after_sub = t_cold_in + rise(q_sub);
            let after_cond = after_sub + rise(q_cond);
            let after_desup = after_cond + rise(q_desup);
            (
                (after_cond, after_desup),
                (after_sub, after_cond),
                (t_cold_in, after_sub),
            )
        }
        FlowArrangement::ParallelFlow => {
            let after_desup = t_cold_in + rise(q_desup);
            let after_cond = after_desup + rise(q_cond);
            let after_sub = after_cond + rise(q_sub);
            (
                (t_cold_in, after_desup),
                (after_desup, after_cond),
                (after_cond, after_sub),
            )
        }
    };

    // Coolant film coefficient, twist-enhanced, shared by all zones.
    let h_cold = single_phase_coefficient(
        &ctx.cold.bulk,
        ctx.cold.mass_flow / f64::from(ctx.geometry.tubes_per_pass),
        ctx.cold_section,
        ctx.cold.process.direction(),
    ) * ctx.enhancement;

    let hot_flow = ctx.hot.mass_flow / f64::from(ctx.geometry.tubes_per_pass);

    // Desuperheat: gas-phase Dittus-Boelter with the gas-zone mapping.
    let h_desup = single_phase_coefficient(
        &endpoints.vapor,
        hot_flow,
        ctx.hot_section,
        HeatDirection::Cooling,
    ) * desuperheat_enhancement(ctx.enhancement);

    // Subcool: liquid Dittus-Boelter with the base enhancement.
    let h_sub = single_phase_coefficient(
        &endpoints.liquid,
        hot_flow,
        ctx.hot_section,
        HeatDirection::Cooling,
    ) * ctx.enhancement;

    let zone = |duty: Power,
                h_hot: HeatTransfer,
                hot_in: ThermodynamicTemperature,
                hot_out: ThermodynamicTemperature,
                cold_pair: (ThermodynamicTemperature, ThermodynamicTemperature)|
     -> Result<ZoneResult, ThreeZoneError> {
        let terminals = TerminalTemperatures {
            hot_inlet: hot_in,
            hot_outlet: hot_out,
            cold_inlet: cold_pair.0,
            cold_outlet: cold_pair.1,
        };
        let zone_lmtd = lmtd(ctx.arrangement, &terminals)?;

        let (inner, outer) = match ctx.hot_path {
            FlowPath::Tube => (SideInput::Coefficient(h_hot), SideInput::Coefficient(h_cold)),
            FlowPath::Annulus => (SideInput::Coefficient(h_cold), SideInput::Coefficient(h_hot)),
        };
        let breakdown = crate::support::hx::assemble(&NetworkInput {
            inner,
            outer,
            wall: ctx.wall,
            fouling: ctx.fouling,
            enhancement: None,
        });

        Ok(ZoneResult {
            duty,
            area: duty / (breakdown.u * zone_lmtd),
            u: breakdown.u,
            h_hot,
            lmtd: zone_lmtd,
            hot_inlet: hot_in,
            hot_outlet: hot_out,
            cold_inlet: cold_pair.0,
            cold_outlet: cold_pair.1,
        })
    };

    let desuperheat = zone(
        q_desup,
        h_desup,
        ctx.hot.spec.inlet_temperature,
        t_sat,
        cold_desup,
    )?;

    // Condense: Nusselt film driven by the zone's own approach, with
    // the condensing-zone mapping. The film ΔT uses the saturation-to-
    // coolant approach of this zone.
    let film_delta_t = lmtd(
        ctx.arrangement,
        &TerminalTemperatures {
            hot_inlet: t_sat,
            hot_outlet: t_sat,
            cold_inlet: cold_cond.0,
            cold_outlet: cold_cond.1,
        },
    )?;
    let h_cond = nusselt_film_condensation(&FilmCondensationInput {
        liquid: &endpoints.liquid,
        vapor_density: endpoints.vapor.density,
        latent_heat: endpoints.latent_heat(),
        diameter: ctx.hot_section.diameter,
        film_delta_t,
    }) * condensing_enhancement(ctx.enhancement);
    let condense = zone(q_cond, h_cond, t_sat, t_sat, cold_cond)?;

    let subcool = zone(
        q_sub,
        h_sub,
        t_sat,
        ctx.hot.spec.outlet_temperature,
        cold_sub,
    )?;

    Ok(ThreeZoneResult {
        q_total,
        area_total: desuperheat.area + condense.area + subcool.area,
        saturation_temperature: t_sat,
        desuperheat,
        condense,
        subcool,
    })
}

fn single_phase_coefficient(
    properties: &FluidProperties,
    mass_flow: uom::si::f64::MassRate,
    section: FlowSection,
    direction: HeatDirection,
) -> HeatTransfer {
    let velocity = flow_velocity(mass_flow, properties.density, section.area);
    let re = reynolds(
        properties.density,
        velocity,
        section.diameter,
        properties.viscosity,
    );
    let nu = nusselt(
        re.get::<ratio>(),
        properties.prandtl.get::<ratio>(),
        direction,
    );
    convective_coefficient(nu, properties.thermal_conductivity, section.diameter)
}
