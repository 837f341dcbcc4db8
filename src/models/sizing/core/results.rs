//! The sizing result surface.

use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::hx::{FlowArrangement, ResistanceBreakdown, TerminalTemperatures};
use crate::support::units::TemperatureDifference;

use super::area::MarginClass;
use super::pressure::PathPressureDrop;
use super::three_zone::ThreeZoneResult;

/// One sample of the stream temperature distribution.
///
/// `position` runs 0 → 1 along the hot stream's flow direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub position: f64,
    pub hot: ThermodynamicTemperature,
    pub cold: ThermodynamicTemperature,
}

/// Everything one sizing run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResults {
    pub duty: Power,
    pub lmtd: TemperatureInterval,
    /// Overall coefficient referenced to the inner tube's outer
    /// surface.
    pub u: HeatTransfer,
    pub actual_area: Area,
    pub required_area: Area,
    pub margin_percent: f64,
    pub margin: MarginClass,
    pub tube_drop: PathPressureDrop,
    pub annulus_drop: PathPressureDrop,
    pub resistance: ResistanceBreakdown,
    pub profile: Vec<ProfileSample>,
    /// Present when the three-zone condenser model sized the exchanger.
    pub three_zone: Option<ThreeZoneResult>,
}

/// Linear-in-duty temperature distribution between the terminals.
pub(crate) fn temperature_profile(
    arrangement: FlowArrangement,
    terminals: &TerminalTemperatures,
    samples: usize,
) -> Vec<ProfileSample> {
    let hot_span = terminals.hot_outlet.minus(terminals.hot_inlet);
    (0..samples)
        .map(|i| {
            let position = i as f64 / (samples - 1) as f64;
            let hot = terminals.hot_inlet + position * hot_span;
            let cold = match arrangement {
                // Counterflow: the cold stream exits at the hot inlet.
                FlowArrangement::CounterFlow => {
                    let span = terminals.cold_inlet.minus(terminals.cold_outlet);
                    terminals.cold_outlet + position * span
                }
                FlowArrangement::ParallelFlow => {
                    let span = terminals.cold_outlet.minus(terminals.cold_inlet);
                    terminals.cold_inlet + position * span
                }
            };
            ProfileSample { position, hot, cold }
        })
        .collect()
}
