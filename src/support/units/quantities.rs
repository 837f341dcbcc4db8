use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, P3, Z0},
};

use uom::si::{
    f64::{Force, HeatTransfer, Length},
    force::newton,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
};

/// Specific enthalpy, J/kg in SI.
///
/// Dimensionally identical to [`uom`]'s `AvailableEnergy`, so values can
/// be constructed with units from `uom::si::available_energy`.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass flux, kg/(m²·s) in SI.
pub type MassFlux = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Surface tension, N/m in SI.
pub type SurfaceTension = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// The reciprocal of a heat-transfer coefficient. Fouling factors and
/// the terms of a resistance network referenced to a common area are
/// expressed in this quantity.
pub type AreaThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds an [`AreaThermalResistance`] from its SI value in m²·K/W.
///
/// [`uom`] names no unit for this dimension, so the value is formed by
/// dividing by a unit heat-transfer coefficient.
#[must_use]
pub fn square_meter_kelvin_per_watt(value: f64) -> AreaThermalResistance {
    value / HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0)
}

/// Builds a [`SurfaceTension`] from its SI value in N/m.
#[must_use]
pub fn newton_per_meter(value: f64) -> SurfaceTension {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}
