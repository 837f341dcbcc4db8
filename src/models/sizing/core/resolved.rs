//! Duty and flow resolution, and the one-time side assignment.
//!
//! The hot/cold streams are bound to their physical passages exactly
//! once, here. Downstream code asks for `sides.tube` or `sides.annulus`
//! and never branches on a swap flag again.

use uom::si::f64::{MassRate, Power};

use crate::support::thermo::{FluidProperties, FluidState, PropertyOracle};
use crate::support::units::{SpecificEnthalpy, TemperatureDifference};

use super::config::{DutySpec, FlowPath, SizingInput, StreamSpec};
use super::error::SolveError;
use super::process::Process;

/// Whether a resolved stream is the heat source or sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StreamRole {
    Hot,
    Cold,
}

impl StreamRole {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
        }
    }
}

/// A stream with its process, flow rate, and bulk properties resolved.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedStream<'a> {
    pub spec: &'a StreamSpec,
    pub role: StreamRole,
    pub process: Process,
    pub mass_flow: MassRate,
    /// Properties at the bulk state: the mean temperature for a
    /// single-phase stream, the mean-quality mixture otherwise.
    pub bulk: FluidProperties,
    /// Specific enthalpy change magnitude between the terminals.
    pub enthalpy_change: SpecificEnthalpy,
    pub inlet_enthalpy: SpecificEnthalpy,
    pub outlet_enthalpy: SpecificEnthalpy,
}

/// The two passages with their streams bound.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedSides<'a> {
    pub tube: ResolvedStream<'a>,
    pub annulus: ResolvedStream<'a>,
}

impl<'a> ResolvedSides<'a> {
    pub(crate) fn hot(&self) -> &ResolvedStream<'a> {
        match self.tube.role {
            StreamRole::Hot => &self.tube,
            StreamRole::Cold => &self.annulus,
        }
    }

    pub(crate) fn cold(&self) -> &ResolvedStream<'a> {
        match self.tube.role {
            StreamRole::Cold => &self.tube,
            StreamRole::Hot => &self.annulus,
        }
    }
}

/// Vanishing specific enthalpy change, J/kg, below which inverting the
/// duty for a flow rate is meaningless.
const ENTHALPY_EPSILON: f64 = 1.0e-3;

/// Resolves duty, flow rates, bulk properties, and side assignment.
pub(crate) fn resolve<'a>(
    input: &'a SizingInput,
    hot_process: Process,
    cold_process: Process,
    oracle: &dyn PropertyOracle,
) -> Result<(ResolvedSides<'a>, Power), SolveError> {
    let hot_partial = partial_stream(&input.hot, StreamRole::Hot, hot_process, oracle)?;
    let cold_partial = partial_stream(&input.cold, StreamRole::Cold, cold_process, oracle)?;

    let duty = match input.duty {
        DutySpec::Duty(q) => q,
        DutySpec::FromFlows => {
            let flow = input
                .hot
                .mass_flow
                .expect("validated: flow mode carries a hot mass flow");
            flow * hot_partial.enthalpy_change
        }
    };

    let hot = hot_partial.with_flow(duty)?;
    let cold = cold_partial.with_flow(duty)?;

    let sides = match input.hot_path {
        FlowPath::Tube => ResolvedSides { tube: hot, annulus: cold },
        FlowPath::Annulus => ResolvedSides { tube: cold, annulus: hot },
    };
    Ok((sides, duty))
}

struct PartialStream<'a> {
    spec: &'a StreamSpec,
    role: StreamRole,
    process: Process,
    bulk: FluidProperties,
    enthalpy_change: SpecificEnthalpy,
    inlet_enthalpy: SpecificEnthalpy,
    outlet_enthalpy: SpecificEnthalpy,
}

impl<'a> PartialStream<'a> {
    fn with_flow(self, duty: Power) -> Result<ResolvedStream<'a>, SolveError> {
        let mass_flow = match self.spec.mass_flow {
            Some(flow) => flow,
            None => {
                if self.enthalpy_change.value.abs() < ENTHALPY_EPSILON {
                    return Err(SolveError::DegenerateEnthalpy {
                        stream: self.role.label(),
                    });
                }
                duty / self.enthalpy_change
            }
        };
        Ok(ResolvedStream {
            spec: self.spec,
            role: self.role,
            process: self.process,
            mass_flow,
            bulk: self.bulk,
            enthalpy_change: self.enthalpy_change,
            inlet_enthalpy: self.inlet_enthalpy,
            outlet_enthalpy: self.outlet_enthalpy,
        })
    }
}

fn partial_stream<'a>(
    spec: &'a StreamSpec,
    role: StreamRole,
    process: Process,
    oracle: &dyn PropertyOracle,
) -> Result<PartialStream<'a>, SolveError> {
    let inlet_enthalpy = terminal_enthalpy(spec, spec.inlet_quality, true, oracle)?;
    let outlet_enthalpy = terminal_enthalpy(spec, spec.outlet_quality, false, oracle)?;

    let (bulk, enthalpy_change) = match &process {
        Process::SinglePhase { .. } => {
            // Bulk properties at the arithmetic mean temperature; the
            // specific duty follows cp·ΔT, matching how single-phase
            // duties are quoted.
            let t_in = spec.inlet_temperature;
            let t_out = spec.outlet_temperature;
            let mean = t_in + 0.5 * t_out.minus(t_in);
            let bulk = oracle
                .properties(&FluidState::new(spec.fluid.clone(), mean, spec.pressure))?
                .validated(&format!("{} bulk state", spec.fluid))?;
            let delta_h = (bulk.specific_heat * t_in.minus(t_out)).abs();
            (bulk, delta_h)
        }
        Process::PhaseChange(pc) => {
            let two_phase = oracle.two_phase(&spec.fluid, spec.pressure, pc.mean_quality())?;
            let bulk = two_phase
                .mixed
                .validated(&format!("{} two-phase state", spec.fluid))?;
            let delta_h = (inlet_enthalpy - outlet_enthalpy).abs();
            (bulk, delta_h)
        }
    };

    Ok(PartialStream {
        spec,
        role,
        process,
        bulk,
        enthalpy_change,
        inlet_enthalpy,
        outlet_enthalpy,
    })
}

fn terminal_enthalpy(
    spec: &StreamSpec,
    quality: Option<crate::support::thermo::Quality>,
    inlet: bool,
    oracle: &dyn PropertyOracle,
) -> Result<SpecificEnthalpy, SolveError> {
    let enthalpy = match quality {
        Some(x) => oracle.two_phase(&spec.fluid, spec.pressure, x)?.mixed.enthalpy,
        None => {
            let temperature = if inlet {
                spec.inlet_temperature
            } else {
                spec.outlet_temperature
            };
            oracle
                .properties(&FluidState::new(
                    spec.fluid.clone(),
                    temperature,
                    spec.pressure,
                ))?
                .enthalpy
        }
    };
    Ok(enthalpy)
}
