use frontline_core::{
    CellCoord, Command, Event, Team, UnitId, UnitSnapshot, UnitView, Weather, STARTING_HEALTH,
};
use frontline_system_combat::{damage_for, resolve, Combat, BASE_DAMAGE};
use proptest::prelude::*;

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

fn moved(id: &str, team: Team, from: (u32, u32), to: (u32, u32)) -> Event {
    Event::UnitMoved {
        unit: UnitId::new(id),
        team,
        from: CellCoord::new(from.0, from.1),
        to: CellCoord::new(to.0, to.1),
    }
}

#[test]
fn move_next_to_enemy_queues_attack() {
    let mut combat = Combat::new();
    let units = UnitView::from_snapshots(vec![
        unit("g1", Team::Germany, 2, 1),
        unit("r1", Team::Russia, 2, 2),
    ]);
    let mut commands = Vec::new();

    combat.handle(
        &[moved("g1", Team::Germany, (1, 1), (2, 1))],
        &units,
        Weather::Summer,
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::ResolveAttack {
            attacker: UnitId::new("g1"),
            defender: UnitId::new("r1"),
            damage: 30,
        }]
    );
}

#[test]
fn winter_attack_by_germany_deals_twenty() {
    let mut combat = Combat::new();
    let units = UnitView::from_snapshots(vec![
        unit("g1", Team::Germany, 2, 1),
        unit("r1", Team::Russia, 2, 2),
    ]);
    let mut commands = Vec::new();

    combat.handle(
        &[moved("g1", Team::Germany, (1, 1), (2, 1))],
        &units,
        Weather::Winter,
        &mut commands,
    );

    assert!(matches!(
        commands.as_slice(),
        [Command::ResolveAttack { damage: 20, .. }]
    ));
}

#[test]
fn isolated_move_and_other_events_are_ignored() {
    let mut combat = Combat::new();
    let units = UnitView::from_snapshots(vec![
        unit("g1", Team::Germany, 5, 5),
        unit("r1", Team::Russia, 2, 2),
    ]);
    let mut commands = Vec::new();

    combat.handle(
        &[
            Event::UnitSelected {
                unit: UnitId::new("g1"),
            },
            moved("g1", Team::Germany, (5, 4), (5, 5)),
        ],
        &units,
        Weather::Summer,
        &mut commands,
    );

    assert!(commands.is_empty());
}

fn arb_team() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::Germany), Just(Team::Russia)]
}

fn arb_weather() -> impl Strategy<Value = Weather> {
    prop_oneof![Just(Weather::Summer), Just(Weather::Fall), Just(Weather::Winter)]
}

proptest! {
    #[test]
    fn only_german_winter_attacks_are_reduced(
        attacker in arb_team(),
        weather in arb_weather(),
        health in 1i32..=STARTING_HEALTH,
    ) {
        let mut defender = unit("d", attacker.opponent(), 0, 1);
        defender.health = health;

        let resolution = resolve(&unit("a", attacker, 0, 0), &defender, weather);

        let expected = if attacker == Team::Germany && weather == Weather::Winter {
            20
        } else {
            BASE_DAMAGE
        };
        prop_assert_eq!(resolution.damage, expected);
        prop_assert_eq!(resolution.damage, damage_for(attacker, weather));
        prop_assert_eq!(resolution.defender_destroyed, health <= expected);
    }
}
