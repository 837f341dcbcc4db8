//! Tube wall materials and their thermal conductivities.

use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

/// Tube wall material.
///
/// Conductivities are representative values near ambient temperature.
/// Unknown ids resolve to [`WallMaterial::StainlessSteel`], the
/// conservative default for exchanger duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallMaterial {
    #[default]
    StainlessSteel,
    CarbonSteel,
    Copper,
    CopperNickel,
    Aluminum,
    Titanium,
}

impl WallMaterial {
    /// Thermal conductivity of the material, W/(m·K).
    #[must_use]
    pub fn thermal_conductivity(self) -> ThermalConductivity {
        let w_per_m_k = match self {
            Self::StainlessSteel => 16.0,
            Self::CarbonSteel => 45.0,
            Self::Copper => 385.0,
            Self::CopperNickel => 29.0,
            Self::Aluminum => 205.0,
            Self::Titanium => 21.9,
        };
        ThermalConductivity::new::<watt_per_meter_kelvin>(w_per_m_k)
    }

    /// Resolves a material id, falling back to stainless steel.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "carbon_steel" | "carbon steel" | "cs" => Self::CarbonSteel,
            "copper" | "cu" => Self::Copper,
            "copper_nickel" | "cupronickel" | "cuni" => Self::CopperNickel,
            "aluminum" | "aluminium" | "al" => Self::Aluminum,
            "titanium" | "ti" => Self::Titanium,
            _ => Self::StainlessSteel,
        }
    }
}
