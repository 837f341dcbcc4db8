//! Frictional pressure drop on both flow paths.
//!
//! Single-phase paths use the Darcy drop over the full pass length.
//! Two-phase paths delegate to Lockhart–Martinelli at the mean quality;
//! a full superheat→subcool transit is split into
//! desuperheat/condense/subcool length fractions by a linear
//! temperature-enthalpy assumption. Every specialized path falls back
//! to the bulk single-phase estimate rather than failing the solve.

use uom::si::f64::{Length, Pressure, Velocity};

use crate::support::correlations::{
    darcy_pressure_drop, flow_velocity, friction_factor, lockhart_martinelli, reynolds,
    TwoPhaseDropInput,
};
use crate::support::geometry::{FlowSection, HxGeometry};
use crate::support::thermo::{FluidProperties, PropertyOracle, Quality, TwoPhaseProperties};
use uom::si::ratio::ratio;

use super::process::PhaseChange;
use super::resolved::ResolvedStream;

/// Pressure-drop summary for one flow path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPressureDrop {
    pub pressure_drop: Pressure,
    /// Darcy friction factor of the equivalent bulk flow.
    pub friction_factor: f64,
    /// Bulk velocity in the passage.
    pub velocity: Velocity,
}

/// Resolves the drop for one path. Never fails: specialized models fall
/// back to the bulk single-phase estimate.
pub(crate) fn path_drop(
    stream: &ResolvedStream,
    section: FlowSection,
    geometry: &HxGeometry,
    oracle: &dyn PropertyOracle,
) -> PathPressureDrop {
    let per_assembly_flow = stream.mass_flow / f64::from(geometry.tubes_per_pass);
    let length = geometry.flow_length();
    let relative_roughness = geometry.relative_roughness(section.diameter);

    let bulk = single_phase(
        &stream.bulk,
        per_assembly_flow,
        section,
        length,
        relative_roughness,
    );

    let Some(phase_change) = stream.process.phase_change() else {
        return bulk;
    };

    let specialized = if phase_change.full_transit() {
        condensation_segments(
            stream,
            phase_change,
            section,
            length,
            relative_roughness,
            per_assembly_flow,
            oracle,
        )
    } else {
        two_phase(
            stream,
            phase_change.mean_quality(),
            section,
            length,
            relative_roughness,
            per_assembly_flow,
            oracle,
        )
    };

    match specialized {
        Some(pressure_drop) => PathPressureDrop { pressure_drop, ..bulk },
        None => bulk,
    }
}

fn single_phase(
    properties: &FluidProperties,
    mass_flow: uom::si::f64::MassRate,
    section: FlowSection,
    length: Length,
    relative_roughness: f64,
) -> PathPressureDrop {
    let velocity = flow_velocity(mass_flow, properties.density, section.area);
    let re = reynolds(
        properties.density,
        velocity,
        section.diameter,
        properties.viscosity,
    );
    let f = friction_factor(re.get::<ratio>(), relative_roughness);
    PathPressureDrop {
        pressure_drop: darcy_pressure_drop(
            f,
            length,
            section.diameter,
            properties.density,
            velocity,
        ),
        friction_factor: f,
        velocity,
    }
}

fn two_phase(
    stream: &ResolvedStream,
    quality: Quality,
    section: FlowSection,
    length: Length,
    relative_roughness: f64,
    mass_flow: uom::si::f64::MassRate,
    oracle: &dyn PropertyOracle,
) -> Option<Pressure> {
    let endpoints = oracle
        .two_phase(&stream.spec.fluid, stream.spec.pressure, quality)
        .ok()?;
    two_phase_from_endpoints(
        &endpoints,
        quality,
        section,
        length,
        relative_roughness,
        mass_flow,
    )
}

fn two_phase_from_endpoints(
    endpoints: &TwoPhaseProperties,
    quality: Quality,
    section: FlowSection,
    length: Length,
    relative_roughness: f64,
    mass_flow: uom::si::f64::MassRate,
) -> Option<Pressure> {
    let drop = lockhart_martinelli(&TwoPhaseDropInput {
        liquid: &endpoints.liquid,
        vapor: &endpoints.vapor,
        quality,
        mass_flux: mass_flow / section.area,
        diameter: section.diameter,
        length,
        relative_roughness,
    })
    .ok()?;
    Some(drop.pressure_drop)
}

/// Splits a full transit into single-phase end segments and a two-phase
/// condensing core, apportioned by enthalpy fractions.
fn condensation_segments(
    stream: &ResolvedStream,
    phase_change: &PhaseChange,
    section: FlowSection,
    length: Length,
    relative_roughness: f64,
    mass_flow: uom::si::f64::MassRate,
    oracle: &dyn PropertyOracle,
) -> Option<Pressure> {
    let endpoints = oracle
        .two_phase(
            &stream.spec.fluid,
            stream.spec.pressure,
            Quality::new(0.5).expect("0.5 is a valid quality"),
        )
        .ok()?;

    let h_high = stream.inlet_enthalpy.value.max(stream.outlet_enthalpy.value);
    let h_low = stream.inlet_enthalpy.value.min(stream.outlet_enthalpy.value);
    let h_g = endpoints.vapor.enthalpy.value;
    let h_f = endpoints.liquid.enthalpy.value;
    let total = h_high - h_low;
    if !(total > 0.0) || h_g <= h_f {
        return None;
    }

    // Linear temperature-enthalpy assumption: length fractions follow
    // enthalpy fractions.
    let vapor_fraction = ((h_high - h_g) / total).clamp(0.0, 1.0);
    let liquid_fraction = ((h_f - h_low) / total).clamp(0.0, 1.0);
    let two_phase_fraction = (1.0 - vapor_fraction - liquid_fraction).clamp(0.0, 1.0);

    let vapor_drop = single_phase(
        &endpoints.vapor,
        mass_flow,
        section,
        length * vapor_fraction,
        relative_roughness,
    )
    .pressure_drop;
    let liquid_drop = single_phase(
        &endpoints.liquid,
        mass_flow,
        section,
        length * liquid_fraction,
        relative_roughness,
    )
    .pressure_drop;
    let core_length = length * two_phase_fraction;
    let core_drop = two_phase_from_endpoints(
        &endpoints,
        phase_change.mean_quality(),
        section,
        core_length,
        relative_roughness,
        mass_flow,
    )
    .unwrap_or_else(|| {
        single_phase(
            &endpoints.liquid,
            mass_flow,
            section,
            core_length,
            relative_roughness,
        )
        .pressure_drop
    });

    Some(vapor_drop + core_drop + liquid_drop)
}
