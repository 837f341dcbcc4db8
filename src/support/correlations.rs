//! Flow and heat-transfer correlations.
//!
//! Typed wrappers around the classic closed forms. Each correlation
//! keeps its arithmetic in raw SI `f64` kernels and converts at the
//! boundary, so the non-integer exponents stay readable while public
//! signatures remain unit-safe.

mod boiling;
mod condensation;
mod single_phase;
mod two_phase_drop;

pub use boiling::{ChenInput, DEFAULT_WALL_SUPERHEAT, SURFACE_TENSION_FALLBACK, chen_boiling};
pub use condensation::{
    FilmCondensationInput, ShahInput, nusselt_film_condensation, shah_condensation,
};
pub use single_phase::{
    FlowRegime, HeatDirection, LAMINAR_NUSSELT, convective_coefficient, darcy_pressure_drop,
    flow_velocity, friction_factor, nusselt, reynolds,
};
pub use two_phase_drop::{
    CHISHOLM_CAP, TwoPhaseDrop, TwoPhaseDropError, TwoPhaseDropInput, chisholm_constant,
    chisholm_multiplier, lockhart_martinelli,
};
