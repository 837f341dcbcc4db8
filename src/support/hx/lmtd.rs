//! Log-mean temperature difference.

use thiserror::Error;
use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};
use uom::si::temperature_interval::kelvin as delta_kelvin;

use crate::support::units::TemperatureDifference;

/// Relative flow direction of the two streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowArrangement {
    #[default]
    CounterFlow,
    ParallelFlow,
}

/// Terminal temperatures of both streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalTemperatures {
    pub hot_inlet: ThermodynamicTemperature,
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_inlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
}

/// The temperature approach closed at one end of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("temperature approach at the {end} end is not positive ({delta_t:?})")]
pub struct LmtdError {
    pub end: &'static str,
    pub delta_t: TemperatureInterval,
}

/// Log-mean temperature difference for the arrangement.
///
/// Falls back to the common value when both end differences are equal
/// (the log-mean is degenerate there but continuous).
///
/// # Errors
///
/// Returns [`LmtdError`] if either end's temperature approach is zero
/// or negative.
pub fn lmtd(
    arrangement: FlowArrangement,
    terminals: &TerminalTemperatures,
) -> Result<TemperatureInterval, LmtdError> {
    let (delta_inlet, delta_outlet) = match arrangement {
        FlowArrangement::CounterFlow => (
            terminals.hot_inlet.minus(terminals.cold_outlet),
            terminals.hot_outlet.minus(terminals.cold_inlet),
        ),
        FlowArrangement::ParallelFlow => (
            terminals.hot_inlet.minus(terminals.cold_inlet),
            terminals.hot_outlet.minus(terminals.cold_outlet),
        ),
    };

    let d1 = delta_inlet.get::<delta_kelvin>();
    let d2 = delta_outlet.get::<delta_kelvin>();
    if !(d1 > 0.0) {
        return Err(LmtdError {
            end: "hot inlet",
            delta_t: delta_inlet,
        });
    }
    if !(d2 > 0.0) {
        return Err(LmtdError {
            end: "hot outlet",
            delta_t: delta_outlet,
        });
    }

    let value = if (d1 - d2).abs() < 1e-9 {
        d1
    } else {
        (d1 - d2) / (d1 / d2).ln()
    };
    Ok(TemperatureInterval::new::<delta_kelvin>(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn equal_end_differences_return_the_common_value() {
        // Counterflow with both approaches at exactly 10 K.
        let terminals = TerminalTemperatures {
            hot_inlet: celsius(50.0),
            hot_outlet: celsius(30.0),
            cold_inlet: celsius(20.0),
            cold_outlet: celsius(40.0),
        };
        let value = lmtd(FlowArrangement::CounterFlow, &terminals).unwrap();
        assert_relative_eq!(value.get::<delta_kelvin>(), 10.0);
    }

    #[test]
    fn counterflow_reference_case() {
        let terminals = TerminalTemperatures {
            hot_inlet: celsius(80.0),
            hot_outlet: celsius(60.0),
            cold_inlet: celsius(20.0),
            cold_outlet: celsius(40.0),
        };
        let value = lmtd(FlowArrangement::CounterFlow, &terminals).unwrap();
        // ΔT1 = 40, ΔT2 = 40 → degenerate? No: 80−40 = 40, 60−20 = 40.
        assert_relative_eq!(value.get::<delta_kelvin>(), 40.0);

        // The classic non-degenerate case from the same temperatures in
        // parallel flow: ΔT1 = 60, ΔT2 = 20.
        let parallel = lmtd(FlowArrangement::ParallelFlow, &terminals).unwrap();
        assert_relative_eq!(
            parallel.get::<delta_kelvin>(),
            (60.0 - 20.0) / (60.0_f64 / 20.0).ln(),
            max_relative = 1e-12
        );
        assert_relative_eq!(parallel.get::<delta_kelvin>(), 36.41, max_relative = 1e-3);
    }

    #[test]
    fn counterflow_unbalanced_case() {
        let terminals = TerminalTemperatures {
            hot_inlet: celsius(80.0),
            hot_outlet: celsius(50.0),
            cold_inlet: celsius(20.0),
            cold_outlet: celsius(40.0),
        };
        // ΔT1 = 40, ΔT2 = 30.
        let value = lmtd(FlowArrangement::CounterFlow, &terminals).unwrap();
        assert_relative_eq!(
            value.get::<delta_kelvin>(),
            (40.0 - 30.0) / (40.0_f64 / 30.0).ln(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_positive_approach_is_an_error() {
        let crossed = TerminalTemperatures {
            hot_inlet: celsius(35.0),
            hot_outlet: celsius(30.0),
            cold_inlet: celsius(20.0),
            cold_outlet: celsius(40.0),
        };
        let err = lmtd(FlowArrangement::CounterFlow, &crossed).unwrap_err();
        assert_eq!(err.end, "hot inlet");

        let pinched = TerminalTemperatures {
            hot_inlet: celsius(80.0),
            hot_outlet: celsius(20.0),
            cold_inlet: celsius(20.0),
            cold_outlet: celsius(40.0),
        };
        let err = lmtd(FlowArrangement::CounterFlow, &pinched).unwrap_err();
        assert_eq!(err.end, "hot outlet");
    }
}
