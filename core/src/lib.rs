#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Frontline rules engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Systems translate player input and
//! world [`Event`] streams into [`Command`] values, the world executes those
//! commands via its `apply` entry point, and adapters observe the resulting
//! read-only views ([`UnitView`], [`TurnStatus`], [`FogMask`]).

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Frontline.";

/// Health every unit starts the game with.
pub const STARTING_HEALTH: i32 = 100;

/// Vision range assigned to units that do not specify one.
pub const DEFAULT_VISION_RANGE: u32 = 2;

const DEFAULT_GRID_COLUMNS: u32 = 12;
const DEFAULT_GRID_ROWS: u32 = 9;
const DEFAULT_CELL_SIZE: f32 = 64.0;

/// Largest Manhattan distance a unit may cover in a single move.
pub const MOVE_RANGE: u32 = 1;

/// Largest number of cells a scenario grid may contain.
pub const MAX_GRID_CELLS: u64 = 65_536;

// The standard roster sits one cell in from opposite corners of the default grid.
const _: () = assert!(
    DEFAULT_GRID_COLUMNS >= 4
        && DEFAULT_GRID_ROWS >= 4
        && (DEFAULT_GRID_COLUMNS as u64) * (DEFAULT_GRID_ROWS as u64) <= MAX_GRID_CELLS
);

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Marks a unit of the active team as the current selection.
    SelectUnit {
        /// Identifier of the unit to select.
        unit: UnitId,
    },
    /// Moves the selected unit into a neighbouring free cell.
    MoveUnit {
        /// Identifier of the unit attempting to move.
        unit: UnitId,
        /// Destination cell of the move.
        to: CellCoord,
    },
    /// Applies resolved combat damage from an attacker to a defender.
    ResolveAttack {
        /// Identifier of the attacking unit.
        attacker: UnitId,
        /// Identifier of the unit receiving damage.
        defender: UnitId,
        /// Health removed from the defender.
        damage: i32,
    },
    /// Hands control to the opposing team.
    EndTurn,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a unit became the current selection.
    UnitSelected {
        /// Identifier of the selected unit.
        unit: UnitId,
    },
    /// Reports that a selection request was rejected.
    SelectionRejected {
        /// Identifier of the unit named in the request.
        unit: UnitId,
        /// Specific reason the selection failed.
        reason: CommandError,
    },
    /// Confirms that a unit moved between two cells.
    UnitMoved {
        /// Identifier of the unit that moved.
        unit: UnitId,
        /// Team that owns the unit.
        team: Team,
        /// Cell the unit occupied before moving.
        from: CellCoord,
        /// Cell the unit occupies after the move.
        to: CellCoord,
    },
    /// Reports that a move request was rejected.
    MoveRejected {
        /// Identifier of the unit named in the request.
        unit: UnitId,
        /// Destination requested for the move.
        to: CellCoord,
        /// Specific reason the move failed.
        reason: CommandError,
    },
    /// Confirms that a defender lost health to an attack.
    UnitDamaged {
        /// Identifier of the attacking unit.
        attacker: UnitId,
        /// Identifier of the damaged unit.
        defender: UnitId,
        /// Health removed by the attack.
        damage: i32,
        /// Health the defender retains after the attack. May be zero or negative.
        remaining_health: i32,
    },
    /// Announces that a unit was destroyed and removed from the board.
    UnitDestroyed {
        /// Identifier of the destroyed unit.
        unit: UnitId,
        /// Team that owned the unit.
        team: Team,
        /// Cell the unit occupied when it was destroyed.
        cell: CellCoord,
    },
    /// Reports that an attack could not be applied.
    AttackRejected {
        /// Identifier of the attacking unit.
        attacker: UnitId,
        /// Identifier of the intended defender.
        defender: UnitId,
        /// Specific reason the attack failed.
        reason: CommandError,
    },
    /// Announces that control passed to the other team.
    TurnEnded {
        /// Team whose turn just finished.
        previous: Team,
        /// Team that is now permitted to act.
        active: Team,
        /// Round number after the transition.
        round: u32,
    },
    /// Announces that the weather advanced at the start of a new round.
    WeatherChanged {
        /// Weather before the change.
        from: Weather,
        /// Weather after the change.
        to: Weather,
    },
}

/// Unique identifier assigned to a unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(String);

impl UnitId {
    /// Creates a new unit identifier from the provided label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retrieves the textual representation of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Converts signed input coordinates, rejecting values that cannot name a cell.
    #[must_use]
    pub fn from_signed(column: i64, row: i64) -> Option<Self> {
        let column = u32::try_from(column).ok()?;
        let row = u32::try_from(row).ok()?;
        Some(Self::new(column, row))
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column()
            .abs_diff(other.column())
            .saturating_add(self.row().abs_diff(other.row()))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Fixed rectangular layout of the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
    cell_size: f32,
}

impl GridDimensions {
    /// Creates a new grid description.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, cell_size: f32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Side length of a single square cell expressed in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Resolves signed coordinates into a cell when they lie inside the grid.
    #[must_use]
    pub fn cell_at(&self, column: i64, row: i64) -> Option<CellCoord> {
        CellCoord::from_signed(column, row).filter(|cell| self.in_bounds(*cell))
    }

    /// Signed grid indices under a pixel position, `floor(pixel / cell_size)`.
    ///
    /// The indices may lie outside the grid. Returns `None` when the position
    /// is not finite or the cell size is not positive.
    #[must_use]
    pub fn pixel_to_indices(&self, x: f32, y: f32) -> Option<(i64, i64)> {
        if self.cell_size.is_nan()
            || self.cell_size <= 0.0
            || !x.is_finite()
            || !y.is_finite()
        {
            return None;
        }

        let column = (x / self.cell_size).floor() as i64;
        let row = (y / self.cell_size).floor() as i64;
        Some((column, row))
    }

    /// Maps a pixel position onto the cell beneath it.
    ///
    /// Returns `None` for positions left of or above the grid origin, beyond
    /// the grid extent, or when the cell size is not positive.
    #[must_use]
    pub fn cell_at_pixel(&self, x: f32, y: f32) -> Option<CellCoord> {
        let (column, row) = self.pixel_to_indices(x, y)?;
        self.cell_at(column, row)
    }

    /// Reports whether the grid holds more than [`MAX_GRID_CELLS`] cells.
    #[must_use]
    pub fn exceeds_cell_limit(&self) -> bool {
        u64::from(self.columns) * u64::from(self.rows) > MAX_GRID_CELLS
    }

    /// Number of cells covered by the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_CELL_SIZE)
    }
}

/// Factions competing on the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Moves first every round and suffers winter attrition.
    Germany,
    /// Moves second every round.
    Russia,
}

impl Team {
    /// Team that opens every round.
    pub const FIRST: Team = Team::Germany;

    /// Returns the opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Germany => Self::Russia,
            Self::Russia => Self::Germany,
        }
    }

    /// Human readable faction name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Germany => "Germany",
            Self::Russia => "Russia",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Seasonal weather that cycles once per full round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Opening season with no combat modifiers.
    #[default]
    Summer,
    /// Transitional season with no combat modifiers.
    Fall,
    /// Harsh season that weakens German attacks.
    Winter,
}

impl Weather {
    /// Returns the season that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Summer => Self::Fall,
            Self::Fall => Self::Winter,
            Self::Winter => Self::Summer,
        }
    }

    /// Human readable season name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase of the active team's turn.
///
/// The phase is tracked for display only. Movement and combat happen within
/// a single action, so the value currently never leaves
/// [`TurnPhase::Movement`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Units may be selected and moved.
    #[default]
    Movement,
    /// Reserved for separated combat resolution.
    Combat,
    /// Reserved for reinforcement arrival.
    Reinforcement,
}

impl TurnPhase {
    /// Lower-case phase name used in status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movement => "movement",
            Self::Combat => "combat",
            Self::Reinforcement => "reinforcement",
        }
    }
}

/// Immutable representation of a single unit's state used for queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    /// Unique identifier assigned to the unit.
    pub id: UnitId,
    /// Team that owns the unit.
    pub team: Team,
    /// Descriptive unit type such as "Panzer" or "T-34".
    pub kind: String,
    /// Grid cell currently occupied by the unit.
    pub cell: CellCoord,
    /// Remaining health. Always positive while the unit is on the board.
    pub health: i32,
    /// Manhattan radius revealed by the unit.
    pub vision_range: u32,
}

impl UnitSnapshot {
    /// Reports whether the other unit belongs to the opposing team.
    #[must_use]
    pub fn is_enemy_of(&self, other: &UnitSnapshot) -> bool {
        self.team != other.team
    }

    /// Reports whether the provided cell lies within the unit's vision range.
    #[must_use]
    pub fn sees(&self, cell: CellCoord) -> bool {
        self.cell.manhattan_distance(cell) <= self.vision_range
    }
}

/// Read-only snapshot describing all units on the board in roster order.
///
/// Roster order is the order in which units were created and determines
/// which enemy is engaged first when several are adjacent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitView {
    snapshots: Vec<UnitSnapshot>,
}

impl UnitView {
    /// Creates a new unit view from snapshots already in roster order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<UnitSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured unit snapshots in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitSnapshot> {
        self.snapshots.iter()
    }

    /// Returns the unit occupying the provided cell, if any.
    #[must_use]
    pub fn unit_at(&self, cell: CellCoord) -> Option<&UnitSnapshot> {
        self.snapshots.iter().find(|unit| unit.cell == cell)
    }

    /// Iterator over the units owned by the provided team.
    pub fn units_of_team(&self, team: Team) -> impl Iterator<Item = &UnitSnapshot> {
        self.snapshots.iter().filter(move |unit| unit.team == team)
    }

    /// Looks up a unit by identifier.
    #[must_use]
    pub fn get(&self, id: &UnitId) -> Option<&UnitSnapshot> {
        self.snapshots.iter().find(|unit| &unit.id == id)
    }

    /// Number of units captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view contains no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<UnitSnapshot> {
        self.snapshots
    }
}

/// Turn bookkeeping exposed to systems and adapters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnStatus {
    /// Team permitted to select and move units.
    pub active_team: Team,
    /// Phase of the current turn.
    pub turn_phase: TurnPhase,
    /// Current season.
    pub weather: Weather,
    /// Unit currently selected by the active team, if any.
    pub selected: Option<UnitId>,
    /// One-based round counter. A round is one German and one Russian turn.
    pub round: u32,
}

impl Default for TurnStatus {
    fn default() -> Self {
        Self {
            active_team: Team::FIRST,
            turn_phase: TurnPhase::Movement,
            weather: Weather::Summer,
            selected: None,
            round: 1,
        }
    }
}

/// Set of cells hidden from a team by the fog of war.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FogMask {
    hidden: BTreeSet<CellCoord>,
}

impl FogMask {
    /// Creates a fog mask from the cells that are not visible.
    #[must_use]
    pub fn from_hidden(hidden: BTreeSet<CellCoord>) -> Self {
        Self { hidden }
    }

    /// Reports whether the cell is covered by fog.
    #[must_use]
    pub fn is_fogged(&self, cell: CellCoord) -> bool {
        self.hidden.contains(&cell)
    }

    /// Iterator over the fogged cells, column by column.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.hidden.iter().copied()
    }

    /// Number of fogged cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    /// Reports whether every cell is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}

/// Initial placement of a single unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSeed {
    /// Unique identifier for the unit.
    pub id: UnitId,
    /// Team that owns the unit.
    pub team: Team,
    /// Descriptive unit type.
    pub kind: String,
    /// Starting cell.
    pub cell: CellCoord,
    /// Manhattan radius revealed by the unit.
    pub vision_range: u32,
}

impl UnitSeed {
    /// Creates a new unit seed.
    #[must_use]
    pub fn new(
        id: impl Into<UnitId>,
        team: Team,
        kind: impl Into<String>,
        cell: CellCoord,
        vision_range: u32,
    ) -> Self {
        Self {
            id: id.into(),
            team,
            kind: kind.into(),
            cell,
            vision_range,
        }
    }
}

/// Grid and starting roster used to build a world.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Dimensions of the battlefield.
    pub grid: GridDimensions,
    /// Units placed at game start, in roster order.
    pub units: Vec<UnitSeed>,
}

impl Scenario {
    /// Builds the standard two-tank roster for the provided grid.
    ///
    /// A German Panzer starts one cell in from the top-left corner and a
    /// Russian T-34 one cell in from the bottom-right corner.
    #[must_use]
    pub fn standard(grid: GridDimensions) -> Self {
        let units = vec![
            UnitSeed::new(
                "g1",
                Team::Germany,
                "Panzer",
                CellCoord::new(1, 1),
                DEFAULT_VISION_RANGE,
            ),
            UnitSeed::new(
                "r1",
                Team::Russia,
                "T-34",
                CellCoord::new(
                    grid.columns().saturating_sub(2),
                    grid.rows().saturating_sub(2),
                ),
                DEFAULT_VISION_RANGE,
            ),
        ];
        Self { grid, units }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::standard(GridDimensions::default())
    }
}

/// Reasons a unit move is illegal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The destination lies more than one cell away.
    #[error("destination is {distance} cells away, units move one cell per turn")]
    TooFar {
        /// Manhattan distance between the unit and the destination.
        distance: u32,
    },
    /// The destination already holds a unit of either team.
    #[error("destination is occupied")]
    Occupied,
}

/// Reasons the world may reject a command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// No unit with the provided identifier exists.
    #[error("unit {0} does not exist")]
    NotFound(UnitId),
    /// The unit belongs to the team that is not currently acting.
    #[error("unit {0} does not belong to the active team")]
    NotActiveTeam(UnitId),
    /// The unit must be selected before it can move.
    #[error("unit {0} is not selected")]
    NotSelected(UnitId),
    /// The requested cell lies outside the grid.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(CellCoord),
    /// The requested move breaks movement rules.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

/// Failures raised while maintaining the unit registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No unit with the provided identifier exists.
    #[error("unit {0} does not exist")]
    NotFound(UnitId),
    /// A unit with the provided identifier is already registered.
    #[error("unit {0} is already registered")]
    DuplicateId(UnitId),
    /// The unit would be placed outside the grid.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(CellCoord),
    /// The unit would share a cell with another unit.
    #[error("cell {0} is already occupied")]
    Occupied(CellCoord),
}

/// Raised when a scenario cannot be turned into a valid world.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// The grid holds more than [`MAX_GRID_CELLS`] cells.
    #[error(
        "grid of {columns}x{rows} cells exceeds the limit of {limit} cells",
        limit = MAX_GRID_CELLS
    )]
    GridTooLarge {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// A unit could not be placed.
    #[error("invalid unit placement: {0}")]
    Placement(#[from] RegistryError),
}

/// Reasons a player action degraded to a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionRejection {
    /// The selected coordinates lie outside the grid.
    #[error("({x}, {y}) lies outside the grid")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },
    /// Nothing is selected and the cell holds no friendly unit.
    #[error("no unit selected")]
    NoSelection,
    /// The selected unit no longer exists.
    #[error("unit {0} no longer exists")]
    NotFound(UnitId),
    /// The move target is too far away or occupied.
    #[error(transparent)]
    IllegalMove(IllegalMove),
    /// The pointer position cannot be mapped onto grid indices.
    #[error("pointer position does not map onto the grid")]
    UnmappedPointer,
    /// The world refused the resulting command.
    #[error("rejected by the world: {0}")]
    Rejected(CommandError),
    /// The world applied the action without a selection or move taking effect.
    #[error("the action had no effect")]
    NoEffect,
}

impl From<CommandError> for ActionRejection {
    fn from(error: CommandError) -> Self {
        match error {
            CommandError::NotFound(unit) => Self::NotFound(unit),
            CommandError::IllegalMove(illegal) => Self::IllegalMove(illegal),
            CommandError::OutOfBounds(cell) => Self::OutOfBounds {
                x: i64::from(cell.column()),
                y: i64::from(cell.row()),
            },
            other => Self::Rejected(other),
        }
    }
}

/// Summary of a single resolved engagement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    /// Identifier of the attacking unit.
    pub attacker: UnitId,
    /// Identifier of the defending unit.
    pub defender: UnitId,
    /// Health removed from the defender.
    pub damage: i32,
    /// Health the defender retains. Zero or below means it was destroyed.
    pub remaining_health: i32,
    /// Whether the defender was removed from the board.
    pub defender_destroyed: bool,
}

/// Turn state after an action that ended the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Team now permitted to act.
    pub active_team: Team,
    /// Weather after the transition.
    pub weather: Weather,
    /// Whether the transition started a new round and advanced the weather.
    pub weather_changed: bool,
    /// Round number after the transition.
    pub round: u32,
}

/// Discriminated result of a single player action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A friendly unit became the current selection.
    Selected {
        /// Identifier of the selected unit.
        unit: UnitId,
    },
    /// The selected unit moved, possibly fought, and the turn ended.
    Moved {
        /// Identifier of the unit that moved.
        unit: UnitId,
        /// Cell the unit left.
        from: CellCoord,
        /// Cell the unit entered.
        to: CellCoord,
        /// Engagement triggered by the move, if an enemy was adjacent.
        combat: Option<CombatReport>,
        /// Turn state after the move ended the turn.
        turn: TurnOutcome,
    },
    /// The action changed nothing.
    Ignored(ActionRejection),
}

impl ActionOutcome {
    /// Reports whether the action left the game untouched.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
