#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that resolves engagements triggered by movement.
//!
//! Combat happens only when a unit finishes a move orthogonally adjacent to
//! an enemy. Moving onto an enemy is never an attack; the world rejects it
//! as an occupied destination.

use frontline_core::{Command, Event, Team, UnitSnapshot, UnitView, Weather};

/// Damage dealt by every attack before modifiers.
pub const BASE_DAMAGE: i32 = 30;

/// Damage withheld from German attacks during Winter.
pub const WINTER_ATTRITION: i32 = 10;

/// Outcome of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatResolution {
    /// Health removed from the defender.
    pub damage: i32,
    /// Whether the defender's health drops to zero or below.
    pub defender_destroyed: bool,
}

/// Damage an attacker of the team deals under the weather.
///
/// The modifier is asymmetric: only German attackers suffer winter attrition.
#[must_use]
pub const fn damage_for(attacker: Team, weather: Weather) -> i32 {
    match (attacker, weather) {
        (Team::Germany, Weather::Winter) => BASE_DAMAGE - WINTER_ATTRITION,
        _ => BASE_DAMAGE,
    }
}

/// Resolves an attack without mutating either unit.
#[must_use]
pub fn resolve(
    attacker: &UnitSnapshot,
    defender: &UnitSnapshot,
    weather: Weather,
) -> CombatResolution {
    let damage = damage_for(attacker.team, weather);
    CombatResolution {
        damage,
        defender_destroyed: defender.health.saturating_sub(damage) <= 0,
    }
}

/// Finds the first enemy in roster order standing next to the unit.
#[must_use]
pub fn first_adjacent_enemy<'a>(
    units: &'a UnitView,
    unit: &UnitSnapshot,
) -> Option<&'a UnitSnapshot> {
    units
        .iter()
        .find(|other| other.is_enemy_of(unit) && other.cell.manhattan_distance(unit.cell) == 1)
}

/// Combat system that queues attack commands after completed moves.
#[derive(Debug, Default)]
pub struct Combat {
    scratch: Vec<Command>,
}

impl Combat {
    /// Creates a new combat system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `Command::ResolveAttack` for each move that ended next to an enemy.
    ///
    /// `units` must reflect the world after the moves in `events` were applied.
    pub fn handle(
        &mut self,
        events: &[Event],
        units: &UnitView,
        weather: Weather,
        out: &mut Vec<Command>,
    ) {
        self.scratch.clear();

        for event in events {
            let Event::UnitMoved { unit, .. } = event else {
                continue;
            };
            let Some(attacker) = units.get(unit) else {
                continue;
            };
            let Some(defender) = first_adjacent_enemy(units, attacker) else {
                continue;
            };

            let resolution = resolve(attacker, defender, weather);
            self.scratch.push(Command::ResolveAttack {
                attacker: attacker.id.clone(),
                defender: defender.id.clone(),
                damage: resolution.damage,
            });
        }

        if self.scratch.is_empty() {
            return;
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}
