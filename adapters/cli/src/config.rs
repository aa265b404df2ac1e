//! Scenario files describing the battlefield and the starting roster.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use frontline_core::{
    CellCoord, GridDimensions, Scenario, Team, UnitSeed, DEFAULT_VISION_RANGE,
};
use serde::Deserialize;

/// Top-level layout of a scenario TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    #[serde(default)]
    grid: GridSection,
    #[serde(default)]
    units: Vec<UnitEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GridSection {
    columns: u32,
    rows: u32,
    cell_size: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        let grid = GridDimensions::default();
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cell_size: grid.cell_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitEntry {
    id: String,
    team: Team,
    kind: String,
    column: u32,
    row: u32,
    #[serde(default = "default_vision_range")]
    vision_range: u32,
}

fn default_vision_range() -> u32 {
    DEFAULT_VISION_RANGE
}

impl ScenarioFile {
    fn into_scenario(self) -> Scenario {
        let grid = GridDimensions::new(self.grid.columns, self.grid.rows, self.grid.cell_size);
        if self.units.is_empty() {
            return Scenario::standard(grid);
        }

        let units = self
            .units
            .into_iter()
            .map(|unit| {
                UnitSeed::new(
                    unit.id,
                    unit.team,
                    unit.kind,
                    CellCoord::new(unit.column, unit.row),
                    unit.vision_range,
                )
            })
            .collect();
        Scenario { grid, units }
    }
}

/// Loads the scenario at `path`, or the standard scenario when no path is given.
pub(crate) fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario from {}", path.display()))?;
    parse_scenario(&text)
        .with_context(|| format!("failed to parse scenario from {}", path.display()))
}

/// Parses scenario TOML. Missing sections fall back to the defaults.
pub(crate) fn parse_scenario(text: &str) -> Result<Scenario> {
    let file: ScenarioFile = toml::from_str(text).context("invalid scenario TOML")?;
    Ok(file.into_scenario())
}
