use frontline_core::{
    ActionRejection, CellCoord, Command, GridDimensions, IllegalMove, Team, TurnStatus, UnitId,
    UnitSnapshot, UnitView, STARTING_HEALTH,
};
use frontline_system_interaction::{CellSelection, Interaction};
use proptest::prelude::*;

fn grid() -> GridDimensions {
    GridDimensions::new(12, 9, 64.0)
}

fn unit(id: &str, team: Team, column: u32, row: u32) -> UnitSnapshot {
    UnitSnapshot {
        id: UnitId::new(id),
        team,
        kind: String::from("Tank"),
        cell: CellCoord::new(column, row),
        health: STARTING_HEALTH,
        vision_range: 2,
    }
}

fn board() -> UnitView {
    UnitView::from_snapshots(vec![
        unit("g1", Team::Germany, 1, 1),
        unit("g2", Team::Germany, 1, 2),
        unit("r1", Team::Russia, 2, 2),
    ])
}

fn selecting(id: &str) -> TurnStatus {
    TurnStatus {
        selected: Some(UnitId::new(id)),
        ..TurnStatus::default()
    }
}

fn run(x: i64, y: i64, status: &TurnStatus) -> (Result<(), ActionRejection>, Vec<Command>) {
    let mut out = Vec::new();
    let result = Interaction::new().handle(
        CellSelection::new(x, y),
        status,
        &board(),
        &grid(),
        &mut out,
    );
    (result, out)
}

#[test]
fn friendly_unit_is_selected() {
    let (result, commands) = run(1, 1, &TurnStatus::default());

    assert_eq!(result, Ok(()));
    assert_eq!(
        commands,
        vec![Command::SelectUnit {
            unit: UnitId::new("g1"),
        }]
    );
}

#[test]
fn friendly_unit_replaces_existing_selection() {
    let (result, commands) = run(1, 2, &selecting("g1"));

    assert_eq!(result, Ok(()));
    assert_eq!(
        commands,
        vec![Command::SelectUnit {
            unit: UnitId::new("g2"),
        }]
    );
}

#[test]
fn enemy_or_empty_cell_without_selection_is_a_no_op() {
    let (enemy, enemy_commands) = run(2, 2, &TurnStatus::default());
    let (empty, empty_commands) = run(6, 6, &TurnStatus::default());

    assert_eq!(enemy, Err(ActionRejection::NoSelection));
    assert_eq!(empty, Err(ActionRejection::NoSelection));
    assert!(enemy_commands.is_empty());
    assert!(empty_commands.is_empty());
}

#[test]
fn enemy_unit_is_never_selected_during_its_opponents_turn() {
    let russian_turn = TurnStatus {
        active_team: Team::Russia,
        ..TurnStatus::default()
    };

    let (result, commands) = run(1, 1, &russian_turn);

    assert_eq!(result, Err(ActionRejection::NoSelection));
    assert!(commands.is_empty());
}

#[test]
fn adjacent_free_cell_produces_move() {
    let (result, commands) = run(2, 1, &selecting("g1"));

    assert_eq!(result, Ok(()));
    assert_eq!(
        commands,
        vec![Command::MoveUnit {
            unit: UnitId::new("g1"),
            to: CellCoord::new(2, 1),
        }]
    );
}

#[test]
fn moving_onto_an_enemy_is_blocked() {
    let (result, commands) = run(2, 2, &selecting("g2"));

    assert_eq!(
        result,
        Err(ActionRejection::IllegalMove(IllegalMove::Occupied))
    );
    assert!(commands.is_empty());
}

#[test]
fn diagonal_cell_is_too_far() {
    let (result, commands) = run(2, 0, &selecting("g1"));

    assert_eq!(
        result,
        Err(ActionRejection::IllegalMove(IllegalMove::TooFar { distance: 2 }))
    );
    assert!(commands.is_empty());
}

proptest! {
    #[test]
    fn targets_beyond_one_cell_never_emit_commands(x in 0i64..12, y in 0i64..9) {
        let target = CellCoord::new(x as u32, y as u32);
        prop_assume!(CellCoord::new(1, 1).manhattan_distance(target) > 1);
        prop_assume!(board().unit_at(target).map_or(true, |unit| unit.team != Team::Germany));

        let (result, commands) = run(x, y, &selecting("g1"));

        let is_too_far = matches!(
            result,
            Err(ActionRejection::IllegalMove(IllegalMove::TooFar { .. }))
        );
        prop_assert!(is_too_far);
        prop_assert!(commands.is_empty());
    }

    #[test]
    fn coordinates_outside_the_grid_are_rejected(x in -20i64..40, y in -20i64..40) {
        prop_assume!(!(0..12).contains(&x) || !(0..9).contains(&y));

        let (result, commands) = run(x, y, &selecting("g1"));

        prop_assert_eq!(result, Err(ActionRejection::OutOfBounds { x, y }));
        prop_assert!(commands.is_empty());
    }
}
