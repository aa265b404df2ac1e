#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Frontline.

mod registry;

use frontline_core::{
    CellCoord, Command, CommandError, Event, GridDimensions, IllegalMove, Scenario, ScenarioError,
    Team, TurnPhase, UnitId, Weather, MOVE_RANGE, WELCOME_BANNER,
};
use frontline_system_turn::transition;
use tracing::{debug, error};

pub use registry::{Unit, UnitRegistry};

/// Turn bookkeeping owned by the world.
#[derive(Clone, Debug)]
struct GameState {
    active_team: Team,
    turn_phase: TurnPhase,
    weather: Weather,
    selected: Option<UnitId>,
    round: u32,
}

impl GameState {
    fn new() -> Self {
        Self {
            active_team: Team::FIRST,
            turn_phase: TurnPhase::Movement,
            weather: Weather::Summer,
            selected: None,
            round: 1,
        }
    }
}

/// Represents the authoritative Frontline world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: GridDimensions,
    units: UnitRegistry,
    state: GameState,
}

impl World {
    /// Creates a world populated with the standard two-tank scenario.
    ///
    /// The standard roster is checked against the default grid at compile
    /// time, so the empty board below is never expected in practice.
    #[must_use]
    pub fn new() -> Self {
        match Self::from_scenario(Scenario::default()) {
            Ok(world) => world,
            Err(reason) => {
                error!(%reason, "standard scenario rejected, starting with an empty board");
                Self::empty(GridDimensions::default())
            }
        }
    }

    /// Builds a world from an explicit grid and starting roster.
    ///
    /// Fails when the grid exceeds [`frontline_core::MAX_GRID_CELLS`], or when
    /// a unit is placed outside the grid, on top of another unit, or reuses
    /// an identifier.
    pub fn from_scenario(scenario: Scenario) -> Result<Self, ScenarioError> {
        if scenario.grid.exceeds_cell_limit() {
            return Err(ScenarioError::GridTooLarge {
                columns: scenario.grid.columns(),
                rows: scenario.grid.rows(),
            });
        }

        let mut world = Self::empty(scenario.grid);
        for seed in scenario.units {
            world.units.insert(seed, &world.grid)?;
        }
        debug!(
            units = world.units.len(),
            columns = world.grid.columns(),
            rows = world.grid.rows(),
            "world populated"
        );
        Ok(world)
    }

    fn empty(grid: GridDimensions) -> Self {
        Self {
            banner: WELCOME_BANNER,
            grid,
            units: UnitRegistry::default(),
            state: GameState::new(),
        }
    }

    fn select(&mut self, unit: UnitId, out_events: &mut Vec<Event>) {
        let reason = match self.units.get(&unit) {
            None => Some(CommandError::NotFound(unit.clone())),
            Some(record) if record.team() != self.state.active_team => {
                Some(CommandError::NotActiveTeam(unit.clone()))
            }
            Some(_) => None,
        };

        if let Some(reason) = reason {
            debug!(%unit, %reason, "selection rejected");
            out_events.push(Event::SelectionRejected { unit, reason });
            return;
        }

        self.state.selected = Some(unit.clone());
        out_events.push(Event::UnitSelected { unit });
    }

    fn validate_move(
        &self,
        unit: &UnitId,
        to: CellCoord,
    ) -> Result<(Team, CellCoord), CommandError> {
        let record = self
            .units
            .get(unit)
            .ok_or_else(|| CommandError::NotFound(unit.clone()))?;
        if record.team() != self.state.active_team {
            return Err(CommandError::NotActiveTeam(unit.clone()));
        }
        if self.state.selected.as_ref() != Some(unit) {
            return Err(CommandError::NotSelected(unit.clone()));
        }
        if !self.grid.in_bounds(to) {
            return Err(CommandError::OutOfBounds(to));
        }

        let distance = record.cell().manhattan_distance(to);
        if distance > MOVE_RANGE {
            return Err(IllegalMove::TooFar { distance }.into());
        }
        if self.units.unit_at(to).is_some() {
            return Err(IllegalMove::Occupied.into());
        }

        Ok((record.team(), record.cell()))
    }

    fn move_unit(&mut self, unit: UnitId, to: CellCoord, out_events: &mut Vec<Event>) {
        let (team, from) = match self.validate_move(&unit, to) {
            Ok(origin) => origin,
            Err(reason) => {
                debug!(%unit, %to, %reason, "move rejected");
                out_events.push(Event::MoveRejected { unit, to, reason });
                return;
            }
        };

        if let Some(record) = self.units.get_mut(&unit) {
            record.relocate(to);
        }
        debug!(%unit, %from, %to, "unit moved");
        out_events.push(Event::UnitMoved {
            unit,
            team,
            from,
            to,
        });
    }

    fn resolve_attack(
        &mut self,
        attacker: UnitId,
        defender: UnitId,
        damage: i32,
        out_events: &mut Vec<Event>,
    ) {
        if self.units.get(&attacker).is_none() {
            let reason = CommandError::NotFound(attacker.clone());
            out_events.push(Event::AttackRejected {
                attacker,
                defender,
                reason,
            });
            return;
        }

        let Some(record) = self.units.get_mut(&defender) else {
            let reason = CommandError::NotFound(defender.clone());
            out_events.push(Event::AttackRejected {
                attacker,
                defender,
                reason,
            });
            return;
        };

        let remaining_health = record.take_damage(damage);
        let team = record.team();
        let cell = record.cell();
        debug!(%attacker, %defender, damage, remaining_health, "attack resolved");
        out_events.push(Event::UnitDamaged {
            attacker,
            defender: defender.clone(),
            damage,
            remaining_health,
        });

        if remaining_health > 0 {
            return;
        }

        if self.units.remove(&defender).is_ok() {
            if self.state.selected.as_ref() == Some(&defender) {
                self.state.selected = None;
            }
            debug!(unit = %defender, %cell, "unit destroyed");
            out_events.push(Event::UnitDestroyed {
                unit: defender,
                team,
                cell,
            });
        }
    }

    fn end_turn(&mut self, out_events: &mut Vec<Event>) {
        let next = transition(&query::turn_status(self));
        let previous_weather = self.state.weather;

        self.state.active_team = next.active;
        self.state.weather = next.weather;
        self.state.round = next.round;
        self.state.selected = None;

        debug!(
            previous = %next.previous,
            active = %next.active,
            round = next.round,
            "turn ended"
        );
        out_events.push(Event::TurnEnded {
            previous: next.previous,
            active: next.active,
            round: next.round,
        });
        if next.weather_changed {
            out_events.push(Event::WeatherChanged {
                from: previous_weather,
                to: next.weather,
            });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Invalid commands never panic. They leave the world untouched and report a
/// rejection event carrying the reason.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SelectUnit { unit } => world.select(unit, out_events),
        Command::MoveUnit { unit, to } => world.move_unit(unit, to, out_events),
        Command::ResolveAttack {
            attacker,
            defender,
            damage,
        } => world.resolve_attack(attacker, defender, damage, out_events),
        Command::EndTurn => world.end_turn(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{UnitRegistry, World};
    use frontline_core::{CellCoord, GridDimensions, Team, TurnStatus, UnitSnapshot, UnitView};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides the fixed grid dimensions.
    #[must_use]
    pub fn grid(world: &World) -> GridDimensions {
        world.grid
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub fn in_bounds(world: &World, cell: CellCoord) -> bool {
        world.grid.in_bounds(cell)
    }

    /// Provides read-only access to the unit registry.
    #[must_use]
    pub fn registry(world: &World) -> &UnitRegistry {
        &world.units
    }

    /// Captures a read-only view of the units on the board in roster order.
    #[must_use]
    pub fn unit_view(world: &World) -> UnitView {
        world.units.view()
    }

    /// Returns a snapshot of the unit occupying the cell, if any.
    #[must_use]
    pub fn unit_at(world: &World, cell: CellCoord) -> Option<UnitSnapshot> {
        world.units.unit_at(cell).map(|unit| unit.snapshot())
    }

    /// Captures snapshots of every unit owned by the team.
    #[must_use]
    pub fn units_of_team(world: &World, team: Team) -> Vec<UnitSnapshot> {
        world
            .units
            .units_of_team(team)
            .map(|unit| unit.snapshot())
            .collect()
    }

    /// Captures the turn bookkeeping.
    #[must_use]
    pub fn turn_status(world: &World) -> TurnStatus {
        TurnStatus {
            active_team: world.state.active_team,
            turn_phase: world.state.turn_phase,
            weather: world.state.weather,
            selected: world.state.selected.clone(),
            round: world.state.round,
        }
    }

    /// Returns a snapshot of the selected unit when it still exists.
    #[must_use]
    pub fn selected_unit(world: &World) -> Option<UnitSnapshot> {
        world
            .state
            .selected
            .as_ref()
            .and_then(|id| world.units.get(id))
            .map(|unit| unit.snapshot())
    }
}
