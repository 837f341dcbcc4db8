//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. This module adds the
//! handful of quantities exchanger sizing needs that [`uom`] does not
//! name, plus a [`TemperatureDifference`] extension trait for
//! subtracting absolute temperatures into temperature intervals.

mod quantities;
mod temperature_difference;

pub use quantities::{
    AreaThermalResistance, MassFlux, SpecificEnthalpy, SurfaceTension, newton_per_meter,
    square_meter_kelvin_per_watt,
};
pub use temperature_difference::TemperatureDifference;
