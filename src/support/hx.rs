//! Heat exchanger analysis toolkit: LMTD, the thermal resistance
//! network, and the twisted-tube enhancement models.

mod enhancement;
mod lmtd;
mod resistance;

pub use enhancement::{
    AREA_ENHANCEMENT_CAP, area_enhancement, condensing_enhancement, desuperheat_enhancement,
    twist_enhancement,
};
pub use lmtd::{FlowArrangement, LmtdError, TerminalTemperatures, lmtd};
pub use resistance::{
    FoulingFactors, NetworkInput, ResistanceBreakdown, ResistanceShares, SideFlow, SideInput,
    WallSpec, assemble,
};
