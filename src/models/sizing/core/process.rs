//! Phase and quality normalization.
//!
//! Stream terminal states arrive as temperatures with optional
//! qualities. This module folds them into a [`Process`] the rest of the
//! solve branches on, detecting phase change even between two
//! single-phase terminal states when they straddle the saturation
//! temperature.

use uom::si::f64::ThermodynamicTemperature;

use crate::support::correlations::HeatDirection;
use crate::support::thermo::{PropertyOracle, Quality};

use super::config::StreamSpec;

/// Direction of a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChangeKind {
    Condensing,
    Evaporating,
}

/// A resolved phase-change duty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseChange {
    pub kind: PhaseChangeKind,
    pub inlet_quality: Quality,
    pub outlet_quality: Quality,
    pub saturation_temperature: ThermodynamicTemperature,
    /// The inlet sits above saturation (dry vapor entering).
    pub superheated_inlet: bool,
    /// The outlet sits below saturation (liquid leaving).
    pub subcooled_outlet: bool,
}

impl PhaseChange {
    /// Mean of the terminal qualities, used for bulk two-phase
    /// properties.
    #[must_use]
    pub fn mean_quality(&self) -> Quality {
        let mean = 0.5 * (self.inlet_quality.value() + self.outlet_quality.value());
        Quality::new(mean).expect("mean of two qualities stays within the unit interval")
    }

    /// Whether the stream crosses the whole dome: superheated in,
    /// subcooled out.
    #[must_use]
    pub fn full_transit(&self) -> bool {
        self.superheated_inlet && self.subcooled_outlet
    }
}

/// What one stream does thermally between its terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Process {
    SinglePhase { direction: HeatDirection },
    PhaseChange(PhaseChange),
}

impl Process {
    /// Classifies a stream.
    ///
    /// Explicit terminal qualities always mean phase change. Otherwise
    /// the saturation temperature decides; when the oracle has no
    /// saturation data the stream is treated as single-phase (the
    /// documented phase-detection default).
    pub fn classify(stream: &StreamSpec, oracle: &dyn PropertyOracle) -> Self {
        let cooling = stream.outlet_temperature < stream.inlet_temperature;
        let single_phase = Self::SinglePhase {
            direction: if cooling {
                HeatDirection::Cooling
            } else {
                HeatDirection::Heating
            },
        };

        let saturation = oracle.saturation_temperature(&stream.fluid, stream.pressure);

        match (stream.inlet_quality, stream.outlet_quality) {
            (Some(inlet), Some(outlet)) => {
                let Ok(t_sat) = saturation else {
                    // Qualities without saturation data: keep the
                    // explicit phase-change intent, pinning saturation
                    // to the terminal temperatures.
                    return Self::PhaseChange(PhaseChange {
                        kind: kind_from_qualities(inlet, outlet),
                        inlet_quality: inlet,
                        outlet_quality: outlet,
                        saturation_temperature: stream.inlet_temperature,
                        superheated_inlet: false,
                        subcooled_outlet: false,
                    });
                };
                Self::PhaseChange(PhaseChange {
                    kind: kind_from_qualities(inlet, outlet),
                    inlet_quality: inlet,
                    outlet_quality: outlet,
                    saturation_temperature: t_sat,
                    superheated_inlet: stream.inlet_temperature > t_sat,
                    subcooled_outlet: stream.outlet_temperature < t_sat,
                })
            }
            _ => {
                let Ok(t_sat) = saturation else {
                    return single_phase;
                };
                let crosses = (stream.inlet_temperature > t_sat)
                    != (stream.outlet_temperature > t_sat);
                if !crosses {
                    return single_phase;
                }
                // Terminal states on opposite sides of the dome: the
                // stream condenses or evaporates through it.
                let (kind, inlet_quality, outlet_quality) = if cooling {
                    (
                        PhaseChangeKind::Condensing,
                        Quality::saturated_vapor(),
                        Quality::saturated_liquid(),
                    )
                } else {
                    (
                        PhaseChangeKind::Evaporating,
                        Quality::saturated_liquid(),
                        Quality::saturated_vapor(),
                    )
                };
                Self::PhaseChange(PhaseChange {
                    kind,
                    inlet_quality,
                    outlet_quality,
                    saturation_temperature: t_sat,
                    superheated_inlet: stream.inlet_temperature > t_sat,
                    subcooled_outlet: stream.outlet_temperature < t_sat,
                })
            }
        }
    }

    /// The single-phase heat direction, or the nearest equivalent for a
    /// phase change (condensing streams give heat up).
    #[must_use]
    pub fn direction(&self) -> HeatDirection {
        match self {
            Self::SinglePhase { direction } => *direction,
            Self::PhaseChange(pc) => match pc.kind {
                PhaseChangeKind::Condensing => HeatDirection::Cooling,
                PhaseChangeKind::Evaporating => HeatDirection::Heating,
            },
        }
    }

    #[must_use]
    pub fn phase_change(&self) -> Option<&PhaseChange> {
        match self {
            Self::PhaseChange(pc) => Some(pc),
            Self::SinglePhase { .. } => None,
        }
    }
}

fn kind_from_qualities(inlet: Quality, outlet: Quality) -> PhaseChangeKind {
    if outlet.value() < inlet.value() {
        PhaseChangeKind::Condensing
    } else {
        PhaseChangeKind::Evaporating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::Pressure, pressure::bar, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::model::ConstantProperties;
    use crate::support::thermo::Fluid;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn stream(t_in: f64, t_out: f64) -> StreamSpec {
        StreamSpec::single_phase(
            Fluid::water(),
            celsius(t_in),
            celsius(t_out),
            Pressure::new::<bar>(1.0),
        )
    }

    #[test]
    fn subcooled_liquid_stays_single_phase() {
        let oracle = ConstantProperties::water();
        let process = Process::classify(&stream(80.0, 60.0), &oracle);
        assert_eq!(
            process,
            Process::SinglePhase { direction: HeatDirection::Cooling }
        );
    }

    #[test]
    fn crossing_the_dome_is_detected_without_qualities() {
        let oracle = ConstantProperties::water();
        // Superheated steam in, condensate out: crosses 100 °C.
        let process = Process::classify(&stream(140.0, 70.0), &oracle);

        let Some(pc) = process.phase_change().copied() else {
            panic!("expected phase change, got {process:?}");
        };
        assert_eq!(pc.kind, PhaseChangeKind::Condensing);
        assert!(pc.superheated_inlet);
        assert!(pc.subcooled_outlet);
        assert!(pc.full_transit());
        assert_eq!(pc.inlet_quality.value(), 1.0);
        assert_eq!(pc.outlet_quality.value(), 0.0);
    }

    #[test]
    fn explicit_qualities_override_detection() {
        let oracle = ConstantProperties::water();
        let evaporator = stream(100.0, 100.0).with_qualities(
            Quality::new(0.1).unwrap(),
            Quality::new(0.8).unwrap(),
        );
        let process = Process::classify(&evaporator, &oracle);

        let pc = process.phase_change().copied().unwrap();
        assert_eq!(pc.kind, PhaseChangeKind::Evaporating);
        assert!(!pc.full_transit());
        assert_eq!(pc.mean_quality().value(), 0.45);
    }

    #[test]
    fn missing_saturation_defaults_to_single_phase() {
        // A model with no saturation table cannot place the dome.
        let oracle = ConstantProperties::water();
        let bare = match oracle.saturated_liquid(&Fluid::water(), Pressure::new::<bar>(1.0)) {
            Ok(liquid) => ConstantProperties::new(liquid),
            Err(_) => unreachable!("water model carries a saturation point"),
        };

        let process = Process::classify(&stream(140.0, 70.0), &bare);
        assert_eq!(
            process,
            Process::SinglePhase { direction: HeatDirection::Cooling }
        );
    }
}
