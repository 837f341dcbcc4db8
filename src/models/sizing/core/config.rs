//! The explicit sizing configuration.
//!
//! Every recognized field and default lives here, validated once at the
//! solve boundary. Downstream code never re-checks raw numbers.

use thiserror::Error;
use uom::si::f64::{HeatTransfer, MassRate, Power, Pressure, ThermodynamicTemperature};
use uom::si::length::meter;

use crate::support::geometry::HxGeometry;
use crate::support::hx::{FlowArrangement, FoulingFactors};
use crate::support::materials::WallMaterial;
use crate::support::thermo::{Fluid, Quality};

/// Which passage carries the hot stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPath {
    #[default]
    Tube,
    Annulus,
}

impl FlowPath {
    /// The other passage.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Tube => Self::Annulus,
            Self::Annulus => Self::Tube,
        }
    }
}

/// How the thermal duty is established.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DutySpec {
    /// Duty follows from the hot stream's flow rate and terminal
    /// states; a missing cold flow is back-computed from the duty.
    #[default]
    FromFlows,
    /// Duty is given; missing flow rates are back-computed.
    Duty(Power),
}

/// How the overall coefficient is established.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoefficientMode {
    /// Computed from the resistance network (and, where it applies,
    /// the three-zone condenser model).
    #[default]
    Computed,
    /// Supplied by the caller, referenced to the inner tube's outer
    /// surface.
    Given(HeatTransfer),
}

/// One stream's terminal description.
///
/// Terminal qualities mark phase-change duties explicitly; without
/// them, a phase change is still detected when the terminal
/// temperatures straddle the saturation temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSpec {
    pub fluid: Fluid,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub inlet_quality: Option<Quality>,
    pub outlet_quality: Option<Quality>,
    /// Required for the hot stream in [`DutySpec::FromFlows`];
    /// back-computed where absent.
    pub mass_flow: Option<MassRate>,
}

impl StreamSpec {
    /// Single-phase stream between two temperatures.
    #[must_use]
    pub fn single_phase(
        fluid: Fluid,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Self {
        Self {
            fluid,
            inlet_temperature,
            outlet_temperature,
            pressure,
            inlet_quality: None,
            outlet_quality: None,
            mass_flow: None,
        }
    }

    /// Returns the stream with a known mass flow.
    #[must_use]
    pub fn with_mass_flow(mut self, mass_flow: MassRate) -> Self {
        self.mass_flow = Some(mass_flow);
        self
    }

    /// Returns the stream with terminal qualities attached.
    #[must_use]
    pub fn with_qualities(mut self, inlet: Quality, outlet: Quality) -> Self {
        self.inlet_quality = Some(inlet);
        self.outlet_quality = Some(outlet);
        self
    }
}

/// Invalid sizing input, rejected before any property lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a positive, finite value")]
    NonPositive { field: &'static str },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("wall thickness of the {tube} tube must be less than half its outer diameter")]
    WallTooThick { tube: &'static str },

    #[error("outer tube bore must exceed the inner tube outer diameter")]
    NoAnnularGap,

    #[error("tooth height must leave a positive valley diameter inside the insert wall")]
    ToothTooTall,

    #[error("mass flow is required for the {stream} stream when duty follows from flows")]
    MissingMassFlow { stream: &'static str },
}

/// The full parameter set of one sizing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput {
    pub geometry: HxGeometry,
    pub hot: StreamSpec,
    pub cold: StreamSpec,
    pub arrangement: FlowArrangement,
    /// Which passage the hot stream occupies.
    pub hot_path: FlowPath,
    pub duty: DutySpec,
    pub coefficient: CoefficientMode,
    pub wall_material: WallMaterial,
    pub fouling: FoulingFactors,
}

impl SizingInput {
    /// Validates every field once.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found. No property oracle is
    /// consulted here or before this runs.
    pub fn validate(&self) -> Result<(), InputError> {
        for (stream, label) in [(&self.hot, "hot"), (&self.cold, "cold")] {
            validate_stream(stream, label)?;
        }
        validate_geometry(&self.geometry)?;

        if let DutySpec::Duty(q) = self.duty
            && !(q.value > 0.0 && q.value.is_finite())
        {
            return Err(InputError::NonPositive { field: "duty" });
        }
        if matches!(self.duty, DutySpec::FromFlows) && self.hot.mass_flow.is_none() {
            return Err(InputError::MissingMassFlow { stream: "hot" });
        }
        if let CoefficientMode::Given(u) = self.coefficient
            && !(u.value > 0.0 && u.value.is_finite())
        {
            return Err(InputError::NonPositive {
                field: "overall coefficient",
            });
        }
        Ok(())
    }
}

fn validate_stream(stream: &StreamSpec, label: &'static str) -> Result<(), InputError> {
    let temperatures = [
        (stream.inlet_temperature.value, "inlet temperature"),
        (stream.outlet_temperature.value, "outlet temperature"),
    ];
    for (kelvin, what) in temperatures {
        if !kelvin.is_finite() {
            return Err(InputError::NonFinite { field: field_name(label, what) });
        }
        if kelvin <= 0.0 {
            return Err(InputError::NonPositive { field: field_name(label, what) });
        }
    }
    if !(stream.pressure.value > 0.0 && stream.pressure.value.is_finite()) {
        return Err(InputError::NonPositive { field: field_name(label, "pressure") });
    }
    if let Some(flow) = stream.mass_flow
        && !(flow.value > 0.0 && flow.value.is_finite())
    {
        return Err(InputError::NonPositive { field: field_name(label, "mass flow") });
    }
    Ok(())
}

fn field_name(stream: &'static str, what: &'static str) -> &'static str {
    // The pairing is small and fixed; spell the combinations out so the
    // error text stays a plain static string.
    match (stream, what) {
        ("hot", "inlet temperature") => "hot inlet temperature",
        ("hot", "outlet temperature") => "hot outlet temperature",
        ("hot", "pressure") => "hot stream pressure",
        ("hot", "mass flow") => "hot mass flow",
        ("cold", "inlet temperature") => "cold inlet temperature",
        ("cold", "outlet temperature") => "cold outlet temperature",
        ("cold", "pressure") => "cold stream pressure",
        _ => "cold mass flow",
    }
}

fn validate_geometry(geometry: &HxGeometry) -> Result<(), InputError> {
    let positive = [
        (geometry.inner_tube.outer_diameter.get::<meter>(), "inner tube outer diameter"),
        (geometry.inner_tube.wall_thickness.get::<meter>(), "inner tube wall thickness"),
        (geometry.outer_tube.outer_diameter.get::<meter>(), "outer tube outer diameter"),
        (geometry.outer_tube.wall_thickness.get::<meter>(), "outer tube wall thickness"),
        (geometry.length.get::<meter>(), "tube length"),
    ];
    for (value, field) in positive {
        if !value.is_finite() {
            return Err(InputError::NonFinite { field });
        }
        if value <= 0.0 {
            return Err(InputError::NonPositive { field });
        }
    }
    if geometry.passes == 0 {
        return Err(InputError::NonPositive { field: "pass count" });
    }
    if geometry.tubes_per_pass == 0 {
        return Err(InputError::NonPositive { field: "tubes per pass" });
    }
    if !(geometry.roughness.get::<meter>() >= 0.0) {
        return Err(InputError::NonPositive { field: "surface roughness" });
    }

    for (tube, label) in [(&geometry.inner_tube, "inner"), (&geometry.outer_tube, "outer")] {
        if 2.0 * tube.wall_thickness.get::<meter>() >= tube.outer_diameter.get::<meter>() {
            return Err(InputError::WallTooThick { tube: label });
        }
    }

    match &geometry.twist {
        None => {
            if geometry.outer_tube.inner_diameter() <= geometry.inner_tube.outer_diameter {
                return Err(InputError::NoAnnularGap);
            }
        }
        Some(twist) => {
            if !(twist.pitch.get::<meter>() > 0.0) {
                return Err(InputError::NonPositive { field: "twist pitch" });
            }
            if !(twist.tooth_height.get::<meter>() > 0.0) {
                return Err(InputError::NonPositive { field: "tooth height" });
            }
            // The insert's interior valley must stay open: the peak is
            // the nominal bore, shrunk by the tooth and both walls.
            let interior_valley = geometry.nominal_inner_tube_od()
                - 2.0 * twist.tooth_height
                - 2.0 * geometry.inner_tube.wall_thickness;
            if interior_valley.get::<meter>() <= 0.0 {
                return Err(InputError::ToothTooTall);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::Length, length::millimeter, mass_rate::kilogram_per_second, power::kilowatt,
        pressure::bar, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::geometry::{LobeCount, TubeSpec, TwistSpec};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn geometry() -> HxGeometry {
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
            twist: None,
        }
    }

    fn input() -> SizingInput {
        SizingInput {
            geometry: geometry(),
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
    fn baseline_input_validates() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_nonphysical_temperatures_and_flows() {
        let mut bad = input();
        bad.hot.inlet_temperature = ThermodynamicTemperature::new::<degree_celsius>(f64::NAN);
        assert!(matches!(bad.validate(), Err(InputError::NonFinite { .. })));

        let mut zero_flow = input();
        zero_flow.cold.mass_flow = Some(MassRate::new::<kilogram_per_second>(0.0));
        assert!(matches!(
            zero_flow.validate(),
            Err(InputError::NonPositive { field: "cold mass flow" })
        ));
    }

    #[test]
    fn rejects_thick_walls_and_closed_gaps() {
        let mut thick = input();
        thick.geometry.inner_tube.wall_thickness = Length::new::<millimeter>(13.0);
        assert!(matches!(
            thick.validate(),
            Err(InputError::WallTooThick { tube: "inner" })
        ));

        let mut closed = input();
        closed.geometry.outer_tube.outer_diameter = Length::new::<millimeter>(30.0);
        closed.geometry.outer_tube.wall_thickness = Length::new::<millimeter>(3.0);
        assert!(matches!(closed.validate(), Err(InputError::NoAnnularGap)));
    }

    #[test]
    fn flow_mode_requires_a_hot_flow() {
        let mut missing = input();
        missing.hot.mass_flow = None;
        assert!(matches!(
            missing.validate(),
            Err(InputError::MissingMassFlow { stream: "hot" })
        ));

        // Duty mode does not.
        missing.duty = DutySpec::Duty(Power::new::<kilowatt>(40.0));
        assert!(missing.validate().is_ok());
    }

    #[test]
    fn twist_validation() {
        let mut twisted = input();
        twisted.geometry.twist = Some(TwistSpec {
            pitch: Length::new::<millimeter>(150.0),
            lobes: LobeCount::Four,
            tooth_height: Length::new::<millimeter>(3.0),
        });
        assert!(twisted.validate().is_ok());

        let mut tall = twisted.clone();
        tall.geometry.twist = Some(TwistSpec {
            pitch: Length::new::<millimeter>(150.0),
            lobes: LobeCount::Four,
            tooth_height: Length::new::<millimeter>(24.0),
        });
        assert!(matches!(tall.validate(), Err(InputError::ToothTooTall)));
    }
}
