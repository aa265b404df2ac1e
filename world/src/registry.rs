//! Roster-ordered storage for the units on the battlefield.

use frontline_core::{
    CellCoord, GridDimensions, RegistryError, Team, UnitId, UnitSeed, UnitSnapshot, UnitView,
};

/// Authoritative record of a single unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    team: Team,
    kind: String,
    cell: CellCoord,
    health: i32,
    vision_range: u32,
}

impl Unit {
    fn from_seed(seed: UnitSeed) -> Self {
        Self {
            id: seed.id,
            team: seed.team,
            kind: seed.kind,
            cell: seed.cell,
            health: frontline_core::STARTING_HEALTH,
            vision_range: seed.vision_range,
        }
    }

    /// Unique identifier of the unit.
    #[must_use]
    pub fn id(&self) -> &UnitId {
        &self.id
    }

    /// Team that owns the unit.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Descriptive unit type.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Cell the unit occupies.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Remaining health.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Manhattan radius revealed by the unit.
    #[must_use]
    pub const fn vision_range(&self) -> u32 {
        self.vision_range
    }

    /// Captures an immutable snapshot of the unit.
    #[must_use]
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id.clone(),
            team: self.team,
            kind: self.kind.clone(),
            cell: self.cell,
            health: self.health,
            vision_range: self.vision_range,
        }
    }

    pub(crate) fn relocate(&mut self, cell: CellCoord) {
        self.cell = cell;
    }

    /// Subtracts damage and returns the remaining health.
    pub(crate) fn take_damage(&mut self, damage: i32) -> i32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }
}

/// Mapping of unit identifiers to unit records, kept in roster order.
///
/// Every other component reads unit state through the registry. At most one
/// unit occupies any cell; callers check [`UnitRegistry::unit_at`] before
/// placing or moving a unit.
#[derive(Clone, Debug, Default)]
pub struct UnitRegistry {
    units: Vec<Unit>,
}

impl UnitRegistry {
    /// Adds a unit at full health after validating its placement.
    pub(crate) fn insert(
        &mut self,
        seed: UnitSeed,
        grid: &GridDimensions,
    ) -> Result<(), RegistryError> {
        if self.get(&seed.id).is_some() {
            return Err(RegistryError::DuplicateId(seed.id));
        }
        if !grid.in_bounds(seed.cell) {
            return Err(RegistryError::OutOfBounds(seed.cell));
        }
        if self.unit_at(seed.cell).is_some() {
            return Err(RegistryError::Occupied(seed.cell));
        }

        self.units.push(Unit::from_seed(seed));
        Ok(())
    }

    /// Looks up a unit by identifier.
    #[must_use]
    pub fn get(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| &unit.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| &unit.id == id)
    }

    /// Returns the unit occupying the cell, if any.
    #[must_use]
    pub fn unit_at(&self, cell: CellCoord) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.cell == cell)
    }

    /// Iterator over the units owned by the team in roster order.
    pub fn units_of_team(&self, team: Team) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |unit| unit.team == team)
    }

    /// Iterator over every unit in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Reports whether no units remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Deletes a unit, preserving the order of the remaining roster.
    pub(crate) fn remove(&mut self, id: &UnitId) -> Result<Unit, RegistryError> {
        let index = self
            .units
            .iter()
            .position(|unit| &unit.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        Ok(self.units.remove(index))
    }

    /// Captures a read-only view of every unit in roster order.
    #[must_use]
    pub fn view(&self) -> UnitView {
        UnitView::from_snapshots(self.units.iter().map(Unit::snapshot).collect())
    }
}
