//! Thermal resistance network of a double-pipe exchanger.
//!
//! Series resistances referenced to the inner tube's outer surface:
//! inner convection, inner fouling, wall conduction, outer convection,
//! outer fouling. Twist enhancement scales only the convective terms.

use uom::si::f64::{Area, HeatTransfer, Length, MassRate, Ratio};
use uom::si::{length::meter, ratio::ratio};

use crate::support::constraint::{ConstraintResult, NonNegative};
use crate::support::correlations::{
    HeatDirection, convective_coefficient, flow_velocity, nusselt, reynolds,
};
use crate::support::thermo::FluidProperties;
use crate::support::units::AreaThermalResistance;

/// Convective input for one side of the network.
#[derive(Debug, Clone, Copy)]
pub struct SideFlow<'a> {
    pub properties: &'a FluidProperties,
    pub mass_flow: MassRate,
    pub direction: HeatDirection,
    /// Flow area of the passage on this side.
    pub flow_area: Area,
    /// Governing diameter of the passage on this side.
    pub diameter: Length,
}

/// One side of the network: either a flow to run through the
/// single-phase correlations, or an already-known film coefficient
/// (phase-change correlations, vendor data, the given-U path).
#[derive(Debug, Clone, Copy)]
pub enum SideInput<'a> {
    Flow(SideFlow<'a>),
    Coefficient(HeatTransfer),
}

impl SideInput<'_> {
    fn coefficient(&self) -> HeatTransfer {
        match self {
            Self::Coefficient(h) => *h,
            Self::Flow(flow) => {
                let velocity =
                    flow_velocity(flow.mass_flow, flow.properties.density, flow.flow_area);
                let re = reynolds(
                    flow.properties.density,
                    velocity,
                    flow.diameter,
                    flow.properties.viscosity,
                );
                let nu = nusselt(
                    re.get::<ratio>(),
                    flow.properties.prandtl.get::<ratio>(),
                    flow.direction,
                );
                convective_coefficient(nu, flow.properties.thermal_conductivity, flow.diameter)
            }
        }
    }
}

/// The separating wall between the two streams.
#[derive(Debug, Clone, Copy)]
pub struct WallSpec {
    pub outer_diameter: Length,
    pub inner_diameter: Length,
    pub conductivity: uom::si::f64::ThermalConductivity,
}

/// Fouling allowances on both surfaces, m²·K/W.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoulingFactors {
    inner: AreaThermalResistance,
    outer: AreaThermalResistance,
}

impl FoulingFactors {
    /// Validated fouling factors.
    ///
    /// # Errors
    ///
    /// Returns an error if either factor is negative or `NaN`.
    pub fn new(
        inner: AreaThermalResistance,
        outer: AreaThermalResistance,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            inner: NonNegative::new(inner)?.into_inner(),
            outer: NonNegative::new(outer)?.into_inner(),
        })
    }

    /// Clean surfaces on both sides.
    #[must_use]
    pub fn clean() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn inner(&self) -> AreaThermalResistance {
        self.inner
    }

    #[must_use]
    pub fn outer(&self) -> AreaThermalResistance {
        self.outer
    }
}

/// Complete input to [`assemble`].
#[derive(Debug, Clone, Copy)]
pub struct NetworkInput<'a> {
    pub inner: SideInput<'a>,
    pub outer: SideInput<'a>,
    pub wall: WallSpec,
    pub fouling: FoulingFactors,
    /// Twist enhancement factor applied to both convective
    /// coefficients; `None` for a straight tube.
    pub enhancement: Option<f64>,
}

/// Percentage contribution of each term to the total resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceShares {
    pub inner: f64,
    pub fouling_inner: f64,
    pub wall: f64,
    pub outer: f64,
    pub fouling_outer: f64,
}

/// Resolved resistance network.
///
/// All resistances are referenced to the inner tube's outer surface, so
/// `u · r_total = 1` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBreakdown {
    pub u: HeatTransfer,
    pub h_inner: HeatTransfer,
    pub h_outer: HeatTransfer,
    pub r_inner: AreaThermalResistance,
    pub r_fouling_inner: AreaThermalResistance,
    pub r_wall: AreaThermalResistance,
    pub r_outer: AreaThermalResistance,
    pub r_fouling_outer: AreaThermalResistance,
    pub r_total: AreaThermalResistance,
    pub shares: ResistanceShares,
}

/// Assembles the series network and the overall coefficient.
#[must_use]
pub fn assemble(input: &NetworkInput) -> ResistanceBreakdown {
    let enhancement = input.enhancement.unwrap_or(1.0).max(1.0);

    let h_inner = input.inner.coefficient() * enhancement;
    let h_outer = input.outer.coefficient() * enhancement;

    let do_m = input.wall.outer_diameter.get::<meter>();
    let di_m = input.wall.inner_diameter.get::<meter>();
    let area_ratio = do_m / di_m;

    let r_inner = area_ratio / h_inner;
    let r_fouling_inner = area_ratio * input.fouling.inner();
    let r_wall = input.wall.outer_diameter * (do_m / di_m).ln()
        / (2.0 * input.wall.conductivity);
    let r_outer = 1.0 / h_outer;
    let r_fouling_outer = input.fouling.outer();

    let r_total = r_inner + r_fouling_inner + r_wall + r_outer + r_fouling_outer;

    let percent = |r: AreaThermalResistance| -> f64 {
        let fraction: Ratio = r / r_total;
        100.0 * fraction.get::<ratio>()
    };

    ResistanceBreakdown {
        u: 1.0 / r_total,
        h_inner,
        h_outer,
        r_inner,
        r_fouling_inner,
        r_wall,
        r_outer,
        r_fouling_outer,
        r_total,
        shares: ResistanceShares {
            inner: percent(r_inner),
            fouling_inner: percent(r_fouling_inner),
            wall: percent(r_wall),
            outer: percent(r_outer),
            fouling_outer: percent(r_fouling_outer),
        },
    }
}
