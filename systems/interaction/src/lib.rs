#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns a selected grid cell into a select or move command.

use frontline_core::{
    ActionRejection, CellCoord, Command, GridDimensions, IllegalMove, TurnStatus, UnitView,
    MOVE_RANGE,
};

/// Cell chosen by the player, expressed in signed grid coordinates.
///
/// Coordinates are signed so adapters can forward raw input without
/// pre-validating it; anything outside the grid is rejected here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSelection {
    /// Requested column.
    pub x: i64,
    /// Requested row.
    pub y: i64,
}

impl CellSelection {
    /// Creates a new cell selection.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<CellCoord> for CellSelection {
    fn from(cell: CellCoord) -> Self {
        Self::new(i64::from(cell.column()), i64::from(cell.row()))
    }
}

/// Interaction system that decides what a cell selection means.
#[derive(Debug, Default, Clone)]
pub struct Interaction;

impl Interaction {
    /// Creates a new interaction system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Emits the command implied by selecting the cell, or explains the no-op.
    ///
    /// A friendly unit on the cell is always selected, even when another unit
    /// is already selected. Otherwise the selected unit moves when the cell
    /// is free and adjacent. An enemy on the cell blocks the move; there is
    /// no attack by moving onto an enemy.
    pub fn handle(
        &self,
        selection: CellSelection,
        status: &TurnStatus,
        units: &UnitView,
        grid: &GridDimensions,
        out: &mut Vec<Command>,
    ) -> Result<(), ActionRejection> {
        let Some(target) = grid.cell_at(selection.x, selection.y) else {
            return Err(ActionRejection::OutOfBounds {
                x: selection.x,
                y: selection.y,
            });
        };

        let occupant = units.unit_at(target);
        if let Some(friend) = occupant.filter(|unit| unit.team == status.active_team) {
            out.push(Command::SelectUnit {
                unit: friend.id.clone(),
            });
            return Ok(());
        }

        let Some(selected_id) = status.selected.as_ref() else {
            return Err(ActionRejection::NoSelection);
        };
        let selected = units
            .get(selected_id)
            .ok_or_else(|| ActionRejection::NotFound(selected_id.clone()))?;

        let distance = selected.cell.manhattan_distance(target);
        if distance > MOVE_RANGE {
            return Err(ActionRejection::IllegalMove(IllegalMove::TooFar {
                distance,
            }));
        }
        if occupant.is_some() {
            return Err(ActionRejection::IllegalMove(IllegalMove::Occupied));
        }

        out.push(Command::MoveUnit {
            unit: selected.id.clone(),
            to: target,
        });
        Ok(())
    }
}
