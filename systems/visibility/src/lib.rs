#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fog-of-war computation for the active team.
//!
//! A cell is visible when at least one unit of the team lies within its
//! vision range of the cell, measured as Manhattan distance. The fog mask is
//! the complement: every in-bounds cell that no friendly unit can see.

use std::collections::BTreeSet;

use frontline_core::{CellCoord, FogMask, GridDimensions, Team, UnitView};

/// Reports whether any unit of the team can see the cell.
#[must_use]
pub fn is_visible_to(team: Team, units: &UnitView, cell: CellCoord) -> bool {
    units.units_of_team(team).any(|unit| unit.sees(cell))
}

/// Computes the set of cells hidden from the team.
///
/// A team without units sees nothing, so the whole grid is fogged.
#[must_use]
pub fn compute_fog(team: Team, units: &UnitView, grid: &GridDimensions) -> FogMask {
    let observers: Vec<_> = units.units_of_team(team).collect();
    let hidden: BTreeSet<CellCoord> = grid
        .cells()
        .filter(|cell| !observers.iter().any(|unit| unit.sees(*cell)))
        .collect();
    FogMask::from_hidden(hidden)
}

/// Caches the most recent fog mask until the observing units change.
///
/// The cache key covers the team, the grid extent and every friendly unit's
/// position and vision range. Enemy movement never changes what a team sees,
/// so it does not invalidate the cache.
#[derive(Debug, Default)]
pub struct Visibility {
    cache: Option<(FogKey, FogMask)>,
    recomputations: u64,
}

impl Visibility {
    /// Creates a visibility system with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fog mask for the team, recomputing it when the key changed.
    pub fn fog(&mut self, team: Team, units: &UnitView, grid: &GridDimensions) -> &FogMask {
        let key = FogKey::capture(team, units, grid);
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |(cached, _)| *cached != key);
        if stale {
            self.cache = None;
        }

        let recomputations = &mut self.recomputations;
        let (_, mask) = self.cache.get_or_insert_with(|| {
            *recomputations = recomputations.saturating_add(1);
            (key, compute_fog(team, units, grid))
        });
        mask
    }

    /// Number of full recomputations performed so far.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FogKey {
    team: Team,
    columns: u32,
    rows: u32,
    observers: Vec<(CellCoord, u32)>,
}

impl FogKey {
    fn capture(team: Team, units: &UnitView, grid: &GridDimensions) -> Self {
        Self {
            team,
            columns: grid.columns(),
            rows: grid.rows(),
            observers: units
                .units_of_team(team)
                .map(|unit| (unit.cell, unit.vision_range))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontline_core::{UnitId, UnitSnapshot, STARTING_HEALTH};

    fn unit(id: &str, team: Team, column: u32, row: u32, vision_range: u32) -> UnitSnapshot {
        UnitSnapshot {
            id: UnitId::new(id),
            team,
            kind: String::from("Tank"),
            cell: CellCoord::new(column, row),
            health: STARTING_HEALTH,
            vision_range,
        }
    }

    fn opening() -> UnitView {
        UnitView::from_snapshots(vec![
            unit("g1", Team::Germany, 1, 1, 2),
            unit("r1", Team::Russia, 9, 6, 2),
        ])
    }

    #[test]
    fn fog_respects_manhattan_vision() {
        let grid = GridDimensions::new(12, 9, 64.0);

        let fog = compute_fog(Team::Germany, &opening(), &grid);

        assert!(fog.is_fogged(CellCoord::new(3, 3)));
        assert!(!fog.is_fogged(CellCoord::new(2, 2)));
        assert!(!fog.is_fogged(CellCoord::new(1, 3)));
        assert!(fog.is_fogged(CellCoord::new(9, 6)));
    }

    #[test]
    fn vision_diamond_has_expected_size() {
        let grid = GridDimensions::new(12, 9, 64.0);
        let units = UnitView::from_snapshots(vec![unit("g1", Team::Germany, 5, 4, 2)]);

        let fog = compute_fog(Team::Germany, &units, &grid);

        assert_eq!(grid.cell_count() - fog.len(), 13);
    }

    #[test]
    fn team_without_units_sees_nothing() {
        let grid = GridDimensions::new(5, 4, 10.0);
        let units = UnitView::from_snapshots(vec![unit("g1", Team::Germany, 0, 0, 3)]);

        let fog = compute_fog(Team::Russia, &units, &grid);

        assert_eq!(fog.len(), grid.cell_count());
    }

    #[test]
    fn cache_recomputes_only_when_friendly_observers_change() {
        let grid = GridDimensions::new(12, 9, 64.0);
        let mut visibility = Visibility::new();
        let units = opening();

        let first = visibility.fog(Team::Germany, &units, &grid).clone();
        let second = visibility.fog(Team::Germany, &units, &grid).clone();
        assert_eq!(first, second);
        assert_eq!(visibility.recomputations(), 1);

        let enemy_moved = UnitView::from_snapshots(vec![
            unit("g1", Team::Germany, 1, 1, 2),
            unit("r1", Team::Russia, 8, 6, 2),
        ]);
        let _ = visibility.fog(Team::Germany, &enemy_moved, &grid);
        assert_eq!(visibility.recomputations(), 1);

        let friend_moved = UnitView::from_snapshots(vec![
            unit("g1", Team::Germany, 2, 1, 2),
            unit("r1", Team::Russia, 8, 6, 2),
        ]);
        let moved = visibility.fog(Team::Germany, &friend_moved, &grid).clone();
        assert_eq!(visibility.recomputations(), 2);
        assert!(!moved.is_fogged(CellCoord::new(4, 1)));

        let _ = visibility.fog(Team::Russia, &friend_moved, &grid);
        assert_eq!(visibility.recomputations(), 3);
    }
}
