#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn controller: decides when a turn ends and what the next turn looks like.
//!
//! Control alternates strictly between the two teams. A round is complete
//! when control returns to [`Team::FIRST`], and only then does the weather
//! advance one season. Ending a turn always drops the current selection.

use frontline_core::{Command, Event, Team, TurnStatus, Weather};

/// Result of ending the active team's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnTransition {
    /// Team whose turn just finished.
    pub previous: Team,
    /// Team that acts next.
    pub active: Team,
    /// Weather in effect after the transition.
    pub weather: Weather,
    /// Whether a new round started and the weather advanced.
    pub weather_changed: bool,
    /// Round number after the transition.
    pub round: u32,
}

/// Computes the turn that follows the provided status.
#[must_use]
pub fn transition(status: &TurnStatus) -> TurnTransition {
    let active = status.active_team.opponent();
    let new_round = active == Team::FIRST;
    let (weather, round) = if new_round {
        (status.weather.next(), status.round.saturating_add(1))
    } else {
        (status.weather, status.round)
    };

    TurnTransition {
        previous: status.active_team,
        active,
        weather,
        weather_changed: new_round,
        round,
    }
}

/// Pure system that ends the turn once the active team has moved.
#[derive(Debug, Default)]
pub struct Turn;

impl Turn {
    /// Creates a new turn system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Emits a single `Command::EndTurn` when the batch contains a completed move.
    ///
    /// Callers run this after the combat system so the turn ends only once
    /// any triggered engagement has been queued.
    pub fn handle(&self, events: &[Event], out: &mut Vec<Command>) {
        if events
            .iter()
            .any(|event| matches!(event, Event::UnitMoved { .. }))
        {
            out.push(Command::EndTurn);
        }
    }
}
