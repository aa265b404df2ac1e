#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Frontline adapters.
//!
//! Adapters turn engine snapshots into a [`Scene`] and feed player input back
//! as [`FrameInput`]. Nothing here draws pixels; backends decide how a scene
//! reaches the screen.

use anyhow::Result as AnyResult;
use frontline_core::{
    CellCoord, FogMask, GridDimensions, Team, TurnStatus, UnitId, UnitView,
};
use glam::Vec2;
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates an opaque color from a `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Returns the same color with the provided alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Light grey behind the board.
pub const BACKGROUND_COLOR: Color = Color::from_hex(0xe0e0e0);

/// Dark grey used for grid lines.
pub const GRID_LINE_COLOR: Color = Color::from_hex(0x333333);

/// White ring drawn around every unit marker.
pub const UNIT_OUTLINE_COLOR: Color = Color::from_hex(0xffffff);

/// Half-transparent black drawn over hidden cells.
pub const FOG_COLOR: Color = Color::from_hex(0x000000).with_alpha(0.5);

/// Fill color of a team's units.
#[must_use]
pub const fn team_color(team: Team) -> Color {
    match team {
        Team::Germany => Color::from_hex(0xff0000),
        Team::Russia => Color::from_hex(0x0000ff),
    }
}

/// Status line shown above the board, e.g. `Turn: Germany (movement) - Weather: Summer`.
#[must_use]
pub fn status_text(status: &TurnStatus) -> String {
    format!(
        "Turn: {} ({}) - Weather: {}",
        status.active_team,
        status.turn_phase.label(),
        status.weather
    )
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Grid cell the player selected this frame, as raw signed indices.
    pub cell: Option<(i64, i64)>,
    /// Pointer position in world units when the player clicked this frame.
    pub pointer: Option<Vec2>,
    /// Whether the player asked to pass the turn.
    pub end_turn: bool,
}

impl FrameInput {
    /// Reports whether the frame carries no player intent.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.cell.is_none() && self.pointer.is_none() && !self.end_turn
    }
}

/// Describes the square cell grid that adapters draw the board on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGridPresentation {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Side length of a single cell expressed in pixels.
    pub cell_size: f32,
    /// Color used when drawing grid lines.
    pub line_color: Color,
}

impl TileGridPresentation {
    /// Creates a new grid descriptor matching the battlefield.
    ///
    /// Returns an error when the cell size is not a positive number.
    pub fn new(grid: GridDimensions, line_color: Color) -> Result<Self, RenderingError> {
        let cell_size = grid.cell_size();
        if cell_size.is_nan() || cell_size <= 0.0 {
            return Err(RenderingError::InvalidCellSize { cell_size });
        }

        Ok(Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cell_size,
            line_color,
        })
    }

    /// Calculates the total width of the grid.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    /// Calculates the total height of the grid.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Maps a pixel position onto the cell beneath it.
    #[must_use]
    pub fn cell_at(&self, position: Vec2) -> Option<CellCoord> {
        GridDimensions::new(self.columns, self.rows, self.cell_size)
            .cell_at_pixel(position.x, position.y)
    }

    /// Pixel position of the centre of the cell.
    #[must_use]
    pub fn cell_center(&self, cell: CellCoord) -> Vec2 {
        (Vec2::new(cell.column() as f32, cell.row() as f32) + Vec2::splat(0.5)) * self.cell_size
    }

    /// Radius of a unit marker, a third of the cell size.
    #[must_use]
    pub fn unit_radius(&self) -> f32 {
        self.cell_size / 3.0
    }
}

/// Unit drawn as a filled circle with a white outline, centred in its cell.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitPresentation {
    /// Identifier of the unit.
    pub id: UnitId,
    /// Team that owns the unit.
    pub team: Team,
    /// Zero-based column of the cell holding the unit.
    pub column: u32,
    /// Zero-based row of the cell holding the unit.
    pub row: u32,
    /// Pixel centre of the marker.
    pub center: Vec2,
    /// Marker radius in pixels.
    pub radius: f32,
    /// Team color filling the marker.
    pub color: Color,
    /// Color of the marker outline.
    pub outline_color: Color,
    /// Unit type shown next to the marker.
    pub label: String,
    /// Remaining health.
    pub health: i32,
    /// Whether the unit is the current selection.
    pub selected: bool,
}

/// Cells covered by the fog overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct FogPresentation {
    /// Hidden cells in row-major order.
    pub cells: Vec<CellCoord>,
    /// Overlay color.
    pub color: Color,
}

impl FogPresentation {
    /// Builds the overlay for the fog mask.
    #[must_use]
    pub fn from_mask(mask: &FogMask) -> Self {
        let mut cells: Vec<_> = mask.iter().collect();
        cells.sort_by_key(|cell| (cell.row(), cell.column()));
        Self {
            cells,
            color: FOG_COLOR,
        }
    }

    /// Reports whether the cell is covered.
    #[must_use]
    pub fn covers(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }
}

/// Scene description combining the grid, units, fog and status line.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Grid that composes the battlefield.
    pub tile_grid: TileGridPresentation,
    /// Units on the board in roster order.
    pub units: Vec<UnitPresentation>,
    /// Fog overlay for the active team.
    pub fog: FogPresentation,
    /// Turn and weather line.
    pub status: String,
    /// Feedback about the most recent action, if any.
    pub message: Option<String>,
}

impl Scene {
    /// Captures the current state of the battlefield.
    ///
    /// Units standing under the fog are left out so the active team only sees
    /// what its own units can see.
    #[must_use]
    pub fn capture(
        tile_grid: TileGridPresentation,
        units: &UnitView,
        fog: &FogMask,
        status: &TurnStatus,
    ) -> Self {
        let units = units
            .iter()
            .filter(|unit| !fog.is_fogged(unit.cell))
            .map(|unit| UnitPresentation {
                id: unit.id.clone(),
                team: unit.team,
                column: unit.cell.column(),
                row: unit.cell.row(),
                center: tile_grid.cell_center(unit.cell),
                radius: tile_grid.unit_radius(),
                color: team_color(unit.team),
                outline_color: UNIT_OUTLINE_COLOR,
                label: unit.kind.clone(),
                health: unit.health,
                selected: status.selected.as_ref() == Some(&unit.id),
            })
            .collect();

        Self {
            tile_grid,
            units,
            fog: FogPresentation::from_mask(fog),
            status: status_text(status),
            message: None,
        }
    }

    /// Attaches feedback about the most recent action.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the unit drawn on the cell, if any.
    #[must_use]
    pub fn unit_at(&self, cell: CellCoord) -> Option<&UnitPresentation> {
        self.units
            .iter()
            .find(|unit| unit.column == cell.column() && unit.row == cell.row())
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window or header.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Frontline scenes.
pub trait RenderingBackend {
    /// Runs the backend until the player quits or input runs out.
    ///
    /// `update_scene` receives the input gathered for each frame and refreshes
    /// the scene before it is presented again.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cell size must be positive to map pixels onto cells.
    InvalidCellSize {
        /// Provided cell size that failed validation.
        cell_size: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell_size must be positive (received {cell_size})")
            }
        }
    }
}

impl Error for RenderingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use frontline_core::{TurnPhase, UnitSnapshot, Weather};
    use std::collections::BTreeSet;

    fn grid() -> TileGridPresentation {
        TileGridPresentation::new(GridDimensions::default(), GRID_LINE_COLOR)
            .expect("default grid is valid")
    }

    fn unit(id: &str, team: Team, column: u32, row: u32) -> UnitSnapshot {
        UnitSnapshot {
            id: UnitId::new(id),
            team,
            kind: String::from("Tank"),
            cell: CellCoord::new(column, row),
            health: 100,
            vision_range: 2,
        }
    }

    #[test]
    fn tile_grid_rejects_non_positive_cell_size_without_panicking() {
        let error = TileGridPresentation::new(GridDimensions::new(4, 4, 0.0), GRID_LINE_COLOR)
            .expect_err("zero cell size must be rejected");

        assert_eq!(error, RenderingError::InvalidCellSize { cell_size: 0.0 });
    }

    #[test]
    fn cell_at_floors_pixel_positions() {
        let grid = grid();

        assert_eq!(grid.cell_at(Vec2::new(130.0, 70.0)), Some(CellCoord::new(2, 1)));
        assert_eq!(grid.cell_at(Vec2::new(0.0, 0.0)), Some(CellCoord::new(0, 0)));
        assert_eq!(grid.cell_at(Vec2::new(-1.0, 10.0)), None);
        assert_eq!(grid.cell_at(Vec2::new(grid.width(), 10.0)), None);
    }

    #[test]
    fn grid_extent_follows_cell_size() {
        let grid = grid();

        assert_eq!(grid.width(), 768.0);
        assert_eq!(grid.height(), 576.0);
        assert_eq!(grid.line_color, Color::from_rgb_u8(0x33, 0x33, 0x33));
    }

    #[test]
    fn cell_center_lies_inside_the_cell() {
        let grid = grid();
        let center = grid.cell_center(CellCoord::new(2, 1));

        assert_eq!(center, Vec2::new(160.0, 96.0));
        assert_eq!(grid.cell_at(center), Some(CellCoord::new(2, 1)));
    }

    #[test]
    fn status_text_matches_the_banner_format() {
        let status = TurnStatus {
            active_team: Team::Russia,
            turn_phase: TurnPhase::Movement,
            weather: Weather::Winter,
            selected: None,
            round: 3,
        };

        assert_eq!(
            status_text(&status),
            "Turn: Russia (movement) - Weather: Winter"
        );
        assert_eq!(
            status_text(&TurnStatus::default()),
            "Turn: Germany (movement) - Weather: Summer"
        );
    }

    #[test]
    fn team_colors_match_faction_palette() {
        assert_eq!(team_color(Team::Germany), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(team_color(Team::Russia), Color::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn capture_hides_units_under_fog_and_marks_selection() {
        let units = UnitView::from_snapshots(vec![
            unit("g1", Team::Germany, 1, 1),
            unit("r1", Team::Russia, 10, 7),
        ]);
        let fog = FogMask::from_hidden(BTreeSet::from([CellCoord::new(10, 7)]));
        let status = TurnStatus {
            selected: Some(UnitId::new("g1")),
            ..TurnStatus::default()
        };

        let scene = Scene::capture(grid(), &units, &fog, &status).with_message("selected g1");

        assert_eq!(scene.units.len(), 1);
        let german = scene.unit_at(CellCoord::new(1, 1)).expect("visible unit");
        assert!(german.selected);
        assert_eq!(german.color, team_color(Team::Germany));
        assert_eq!(german.center, Vec2::new(96.0, 96.0));
        assert!((german.radius - 64.0 / 3.0).abs() < f32::EPSILON * 64.0);
        assert_eq!(german.outline_color, Color::new(1.0, 1.0, 1.0, 1.0));
        assert!(scene.unit_at(CellCoord::new(10, 7)).is_none());
        assert!(scene.fog.covers(CellCoord::new(10, 7)));
        assert_eq!(scene.message.as_deref(), Some("selected g1"));
    }
}
