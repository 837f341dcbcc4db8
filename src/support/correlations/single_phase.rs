//! Single-phase internal-flow correlations.

use uom::si::f64::{
    Area, DynamicViscosity, HeatTransfer, Length, MassDensity, MassRate, Pressure, Ratio,
    ThermalConductivity, Velocity,
};
use uom::si::ratio::ratio;

/// Fully-developed laminar Nusselt number for a circular duct at
/// constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

const LAMINAR_LIMIT: f64 = 2300.0;
const TURBULENT_NUSSELT_LIMIT: f64 = 10_000.0;
const TURBULENT_FRICTION_LIMIT: f64 = 3000.0;

/// Flow regime by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re < 2300.
    Laminar,
    /// 2300 ≤ Re < 10⁴.
    Transitional,
    /// Re ≥ 10⁴.
    Turbulent,
}

impl FlowRegime {
    #[must_use]
    pub fn from_reynolds(re: f64) -> Self {
        if re < LAMINAR_LIMIT {
            Self::Laminar
        } else if re < TURBULENT_NUSSELT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }

    #[must_use]
    pub fn is_laminar(self) -> bool {
        matches!(self, Self::Laminar)
    }
}

/// Whether the stream is being heated or cooled by the wall.
///
/// Selects the Prandtl exponent of the Dittus-Boelter correlation:
/// 0.4 heating, 0.3 cooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatDirection {
    Heating,
    Cooling,
}

impl HeatDirection {
    fn prandtl_exponent(self) -> f64 {
        match self {
            Self::Heating => 0.4,
            Self::Cooling => 0.3,
        }
    }
}

/// Mean velocity of a mass flow through a passage.
#[must_use]
pub fn flow_velocity(mass_flow: MassRate, density: MassDensity, area: Area) -> Velocity {
    mass_flow / (density * area)
}

/// Reynolds number `ρvD/μ`.
#[must_use]
pub fn reynolds(
    density: MassDensity,
    velocity: Velocity,
    diameter: Length,
    viscosity: DynamicViscosity,
) -> Ratio {
    density * velocity * diameter / viscosity
}

/// Nusselt number across the three regimes: 3.66 laminar, Gnielinski
/// transitional, Dittus-Boelter turbulent.
#[must_use]
pub fn nusselt(re: f64, pr: f64, direction: HeatDirection) -> f64 {
    if re < LAMINAR_LIMIT {
        LAMINAR_NUSSELT
    } else if re < TURBULENT_NUSSELT_LIMIT {
        gnielinski(re, pr)
    } else {
        dittus_boelter(re, pr, direction)
    }
}

fn gnielinski(re: f64, pr: f64) -> f64 {
    let f = (0.79 * re.ln() - 1.64).powi(-2);
    (f / 8.0) * (re - 1000.0) * pr / (1.0 + 12.7 * (f / 8.0).sqrt() * (pr.powf(2.0 / 3.0) - 1.0))
}

fn dittus_boelter(re: f64, pr: f64, direction: HeatDirection) -> f64 {
    0.023 * re.powf(0.8) * pr.powf(direction.prandtl_exponent())
}

/// Darcy friction factor: 64/Re laminar, Swamee-Jain turbulent, with a
/// linear blend across 2300–3000 to avoid a jump at the transition.
#[must_use]
pub fn friction_factor(re: f64, relative_roughness: f64) -> f64 {
    if re < LAMINAR_LIMIT {
        64.0 / re.max(1.0)
    } else if re < TURBULENT_FRICTION_LIMIT {
        let laminar_end = 64.0 / LAMINAR_LIMIT;
        let turbulent_start = swamee_jain(TURBULENT_FRICTION_LIMIT, relative_roughness);
        let weight = (re - LAMINAR_LIMIT) / (TURBULENT_FRICTION_LIMIT - LAMINAR_LIMIT);
        laminar_end + weight * (turbulent_start - laminar_end)
    } else {
        swamee_jain(re, relative_roughness)
    }
}

fn swamee_jain(re: f64, relative_roughness: f64) -> f64 {
    0.25 / (relative_roughness / 3.7 + 5.74 / re.powf(0.9)).log10().powi(2)
}

/// Convective coefficient `h = Nu·k/D`.
#[must_use]
pub fn convective_coefficient(
    nu: f64,
    conductivity: ThermalConductivity,
    diameter: Length,
) -> HeatTransfer {
    nu * conductivity / diameter
}

/// Darcy-Weisbach pressure drop `Δp = f·(L/D)·ρv²/2`.
#[must_use]
pub fn darcy_pressure_drop(
    f: f64,
    length: Length,
    diameter: Length,
    density: MassDensity,
    velocity: Velocity,
) -> Pressure {
    let geometric: Ratio = length / diameter;
    0.5 * f * geometric.get::<ratio>() * density * velocity * velocity
}
