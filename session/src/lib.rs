#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Runs complete player actions against the world and its systems.
//!
//! Each public action drives the command and event loop until no system has
//! anything left to say, refreshes the fog mask for the team that acts next
//! and summarises what happened as an [`ActionOutcome`].

use frontline_core::{
    ActionOutcome, ActionRejection, Command, CombatReport, Event, FogMask, GridDimensions,
    Scenario, ScenarioError, TurnOutcome, TurnStatus, UnitId, UnitView,
};
use frontline_system_combat::Combat;
use frontline_system_interaction::{CellSelection, Interaction};
use frontline_system_turn::Turn;
use frontline_system_visibility::Visibility;
use frontline_world::{self as world, query, World};
use tracing::info;

/// A single game in progress.
///
/// Every action runs to completion before the call returns, so observers
/// never see a half-applied move.
#[derive(Debug)]
pub struct Session {
    world: World,
    interaction: Interaction,
    combat: Combat,
    turn: Turn,
    visibility: Visibility,
    fog: FogMask,
    last_events: Vec<Event>,
}

impl Session {
    /// Builds a session from the scenario, validating every unit placement.
    pub fn new(scenario: Scenario) -> Result<Self, ScenarioError> {
        let world = World::from_scenario(scenario)?;
        Ok(Self::with_world(world))
    }

    fn with_world(world: World) -> Self {
        let mut session = Self {
            world,
            interaction: Interaction::new(),
            combat: Combat::new(),
            turn: Turn::new(),
            visibility: Visibility::new(),
            fog: FogMask::default(),
            last_events: Vec::new(),
        };
        session.refresh_fog();
        session
    }

    /// Welcome banner adapters may show before the first action.
    #[must_use]
    pub fn banner(&self) -> &'static str {
        query::welcome_banner(&self.world)
    }

    /// Handles a click on the grid cell at the signed coordinates.
    pub fn select_cell(&mut self, x: i64, y: i64) -> ActionOutcome {
        let status = query::turn_status(&self.world);
        let units = query::unit_view(&self.world);
        let grid = query::grid(&self.world);

        let mut commands = Vec::new();
        if let Err(rejection) = self.interaction.handle(
            CellSelection::new(x, y),
            &status,
            &units,
            &grid,
            &mut commands,
        ) {
            self.last_events.clear();
            info!(x, y, %rejection, "action ignored");
            return ActionOutcome::Ignored(rejection);
        }

        self.run(commands);
        let outcome = summarise(&self.last_events, self.turn_outcome());
        log_outcome(x, y, &outcome);
        outcome
    }

    /// Handles a click at a pixel position by mapping it onto the grid first.
    ///
    /// Positions left of or above the grid origin are ignored as out of bounds.
    pub fn select_pixel(&mut self, px: f32, py: f32) -> ActionOutcome {
        let Some((x, y)) = query::grid(&self.world).pixel_to_indices(px, py) else {
            self.last_events.clear();
            info!(px, py, "pointer ignored");
            return ActionOutcome::Ignored(ActionRejection::UnmappedPointer);
        };
        self.select_cell(x, y)
    }

    /// Passes the turn without moving.
    pub fn end_turn(&mut self) -> TurnOutcome {
        self.run(vec![Command::EndTurn]);
        let outcome = self.turn_outcome();
        info!(
            active = %outcome.active_team,
            weather = %outcome.weather,
            round = outcome.round,
            "turn passed"
        );
        outcome
    }

    /// Snapshot of every unit on the board in roster order.
    #[must_use]
    pub fn units(&self) -> UnitView {
        query::unit_view(&self.world)
    }

    /// Current turn bookkeeping.
    #[must_use]
    pub fn turn_status(&self) -> TurnStatus {
        query::turn_status(&self.world)
    }

    /// Dimensions of the battlefield.
    #[must_use]
    pub fn grid(&self) -> GridDimensions {
        query::grid(&self.world)
    }

    /// Cells hidden from the active team.
    #[must_use]
    pub fn fog(&self) -> &FogMask {
        &self.fog
    }

    /// Events produced by the most recent action, in application order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.last_events
    }

    fn run(&mut self, commands: Vec<Command>) {
        self.last_events.clear();
        let mut pending = commands;

        while !pending.is_empty() {
            let mut events = Vec::new();
            for command in pending.drain(..) {
                world::apply(&mut self.world, command, &mut events);
            }

            let units = query::unit_view(&self.world);
            let weather = query::turn_status(&self.world).weather;
            self.combat.handle(&events, &units, weather, &mut pending);
            self.turn.handle(&events, &mut pending);

            self.last_events.append(&mut events);
        }

        self.refresh_fog();
    }

    fn refresh_fog(&mut self) {
        let team = query::turn_status(&self.world).active_team;
        let units = query::unit_view(&self.world);
        let grid = query::grid(&self.world);
        self.fog = self.visibility.fog(team, &units, &grid).clone();
    }

    fn turn_outcome(&self) -> TurnOutcome {
        let status = query::turn_status(&self.world);
        TurnOutcome {
            active_team: status.active_team,
            weather: status.weather,
            weather_changed: self
                .last_events
                .iter()
                .any(|event| matches!(event, Event::WeatherChanged { .. })),
            round: status.round,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_world(World::default())
    }
}

/// Describes a finished action from the events it produced.
///
/// `turn` is only reported when the action moved a unit.
fn summarise(events: &[Event], turn: TurnOutcome) -> ActionOutcome {
    for event in events {
        match event {
            Event::UnitSelected { unit } => {
                return ActionOutcome::Selected { unit: unit.clone() };
            }
            Event::SelectionRejected { reason, .. } | Event::MoveRejected { reason, .. } => {
                return ActionOutcome::Ignored(ActionRejection::from(reason.clone()));
            }
            Event::UnitMoved { unit, from, to, .. } => {
                return ActionOutcome::Moved {
                    unit: unit.clone(),
                    from: *from,
                    to: *to,
                    combat: combat_report(events, unit),
                    turn,
                };
            }
            _ => {}
        }
    }
    ActionOutcome::Ignored(ActionRejection::NoEffect)
}

fn combat_report(events: &[Event], attacker: &UnitId) -> Option<CombatReport> {
    events.iter().find_map(|event| match event {
        Event::UnitDamaged {
            attacker: source,
            defender,
            damage,
            remaining_health,
        } if source == attacker => Some(CombatReport {
            attacker: source.clone(),
            defender: defender.clone(),
            damage: *damage,
            remaining_health: *remaining_health,
            defender_destroyed: was_destroyed(events, defender),
        }),
        _ => None,
    })
}

fn was_destroyed(events: &[Event], defender: &UnitId) -> bool {
    events
        .iter()
        .any(|event| matches!(event, Event::UnitDestroyed { unit, .. } if unit == defender))
}

fn log_outcome(x: i64, y: i64, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Selected { unit } => info!(%unit, "unit selected"),
        ActionOutcome::Moved {
            unit,
            from,
            to,
            combat,
            turn,
        } => {
            info!(%unit, %from, %to, "unit moved");
            if let Some(report) = combat {
                info!(
                    attacker = %report.attacker,
                    defender = %report.defender,
                    damage = report.damage,
                    remaining_health = report.remaining_health,
                    destroyed = report.defender_destroyed,
                    "combat resolved"
                );
            }
            info!(
                active = %turn.active_team,
                weather = %turn.weather,
                round = turn.round,
                "turn ended"
            );
        }
        ActionOutcome::Ignored(rejection) => info!(x, y, %rejection, "action ignored"),
    }
}
