//! Ordered coefficient strategies.
//!
//! When the overall coefficient is computed, the applicable models are
//! tried in a fixed order and the first success wins. The order is data,
//! not control flow, so the fallback behavior is visible and testable
//! on its own.

use super::config::SizingInput;
use super::process::{PhaseChangeKind, Process};
use super::resolved::{ResolvedSides, StreamRole};

/// One way to obtain the overall coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UStrategy {
    /// Three-zone condenser model (desuperheat/condense/subcool).
    ThreeZone,
    /// Direct resistance network. Always applicable; always last.
    DirectNetwork,
}

/// The strategy order for this scenario.
///
/// The three-zone model leads only for a twisted tube whose
/// annulus-side stream condenses all the way from superheated vapor to
/// subcooled liquid against a single-phase coolant; everything else
/// goes straight to the network.
pub(crate) fn plan(input: &SizingInput, sides: &ResolvedSides) -> Vec<UStrategy> {
    let mut strategies = Vec::new();

    let annulus_condenses_fully = sides.annulus.role == StreamRole::Hot
        && sides
            .annulus
            .process
            .phase_change()
            .is_some_and(|pc| pc.kind == PhaseChangeKind::Condensing && pc.full_transit());
    let coolant_is_single_phase =
        matches!(sides.tube.process, Process::SinglePhase { .. });
    if input.geometry.is_twisted() && annulus_condenses_fully && coolant_is_single_phase {
        strategies.push(UStrategy::ThreeZone);
    }

    strategies.push(UStrategy::DirectNetwork);
    strategies
}
