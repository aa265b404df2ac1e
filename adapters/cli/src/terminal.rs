//! Line-oriented backend that reads player input and prints the board as text.

use std::{
    error::Error,
    fmt,
    io::{BufRead, Write},
};

use anyhow::{Context, Result as AnyResult};
use frontline_core::{CellCoord, Team};
use frontline_rendering::{FrameInput, Presentation, RenderingBackend, Scene};
use glam::Vec2;

/// Command typed by the player on a single line.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum InputLine {
    /// Blank line or comment.
    Blank,
    /// `<x> <y>` selects a grid cell.
    Cell { x: i64, y: i64 },
    /// `px <x> <y>` selects a pixel position.
    Pixel { x: f32, y: f32 },
    /// `end` passes the turn.
    EndTurn,
    /// `quit` stops reading input.
    Quit,
}

impl InputLine {
    fn into_frame(self) -> FrameInput {
        match self {
            Self::Cell { x, y } => FrameInput {
                cell: Some((x, y)),
                ..FrameInput::default()
            },
            Self::Pixel { x, y } => FrameInput {
                pointer: Some(Vec2::new(x, y)),
                ..FrameInput::default()
            },
            Self::EndTurn => FrameInput {
                end_turn: true,
                ..FrameInput::default()
            },
            Self::Blank | Self::Quit => FrameInput::default(),
        }
    }
}

/// Errors raised while parsing an input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputError {
    /// The line did not match any known command.
    Unrecognised(String),
    /// A coordinate could not be parsed as a number.
    InvalidNumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognised(line) => write!(
                f,
                "unrecognised input `{line}` (expected `x y`, `px x y`, `end` or `quit`)"
            ),
            Self::InvalidNumber(value) => write!(f, "`{value}` is not a valid coordinate"),
        }
    }
}

impl Error for InputError {}

/// Parses a single input line. Text after `#` is ignored.
pub(crate) fn parse_line(line: &str) -> Result<InputLine, InputError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    let words: Vec<&str> = content.split_whitespace().collect();

    match words.as_slice() {
        [] => Ok(InputLine::Blank),
        ["end"] => Ok(InputLine::EndTurn),
        ["quit"] => Ok(InputLine::Quit),
        ["px", x, y] => Ok(InputLine::Pixel {
            x: parse_number(x)?,
            y: parse_number(y)?,
        }),
        ["px", ..] => Err(InputError::Unrecognised(content.to_owned())),
        [x, y] => Ok(InputLine::Cell {
            x: parse_number(x)?,
            y: parse_number(y)?,
        }),
        _ => Err(InputError::Unrecognised(content.to_owned())),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, InputError> {
    value
        .parse()
        .map_err(|_| InputError::InvalidNumber(value.to_owned()))
}

/// Draws the scene as a grid of characters.
///
/// Empty visible cells are `.`, fogged cells `#`, German units `G` and
/// Russian units `R`. The selected unit is drawn in lower case.
pub(crate) fn render_board(scene: &Scene) -> String {
    let grid = &scene.tile_grid;
    let mut board = String::from("   ");
    for column in 0..grid.columns {
        board.push_str(&format!("{:>2}", column % 100));
    }
    board.push('\n');

    for row in 0..grid.rows {
        board.push_str(&format!("{:>2} ", row % 100));
        for column in 0..grid.columns {
            let cell = CellCoord::new(column, row);
            board.push(' ');
            board.push(glyph(scene, cell));
        }
        board.push('\n');
    }

    board.push_str(&scene.status);
    board.push('\n');
    for unit in &scene.units {
        board.push_str(&format!(
            "  {} {} at ({}, {}) health {}\n",
            unit.id, unit.label, unit.column, unit.row, unit.health
        ));
    }
    if let Some(message) = &scene.message {
        board.push_str(&format!("> {message}\n"));
    }
    board
}

fn glyph(scene: &Scene, cell: CellCoord) -> char {
    if let Some(unit) = scene.unit_at(cell) {
        let glyph = match unit.team {
            Team::Germany => 'G',
            Team::Russia => 'R',
        };
        return if unit.selected {
            glyph.to_ascii_lowercase()
        } else {
            glyph
        };
    }
    if scene.fog.covers(cell) {
        '#'
    } else {
        '.'
    }
}

/// Backend that reads commands from `input` and writes boards to `output`.
#[derive(Debug)]
pub(crate) struct TerminalBackend<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalBackend<R, W> {
    /// Creates a backend over the provided reader and writer.
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> RenderingBackend for TerminalBackend<R, W> {
    fn run<F>(mut self, presentation: Presentation, mut update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            mut scene,
            ..
        } = presentation;
        writeln!(self.output, "{window_title}")?;
        write!(self.output, "{}", render_board(&scene))?;

        for line in self.input.lines() {
            let line = line.context("failed to read input line")?;
            let parsed = match parse_line(&line) {
                Ok(parsed) => parsed,
                Err(error) => {
                    writeln!(self.output, "> {error}")?;
                    continue;
                }
            };
            if parsed == InputLine::Quit {
                break;
            }
            let frame = parsed.into_frame();
            if frame.is_idle() {
                continue;
            }

            update_scene(frame, &mut scene);
            write!(self.output, "{}", render_board(&scene))?;
        }

        self.output.flush().context("failed to flush output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontline_core::{FogMask, GridDimensions, TurnStatus, UnitId, UnitSnapshot, UnitView};
    use frontline_rendering::{TileGridPresentation, BACKGROUND_COLOR, GRID_LINE_COLOR};
    use std::{
        collections::BTreeSet,
        io::Cursor,
        sync::{Arc, Mutex},
    };

    fn scene() -> Scene {
        let grid = TileGridPresentation::new(GridDimensions::new(4, 3, 64.0), GRID_LINE_COLOR)
            .expect("valid grid");
        let units = UnitView::from_snapshots(vec![
            UnitSnapshot {
                id: UnitId::new("g1"),
                team: Team::Germany,
                kind: String::from("Panzer"),
                cell: CellCoord::new(1, 1),
                health: 100,
                vision_range: 2,
            },
            UnitSnapshot {
                id: UnitId::new("r1"),
                team: Team::Russia,
                kind: String::from("T-34"),
                cell: CellCoord::new(2, 1),
                health: 70,
                vision_range: 2,
            },
        ]);
        let fog = FogMask::from_hidden(BTreeSet::from([CellCoord::new(3, 2)]));
        let status = TurnStatus {
            selected: Some(UnitId::new("g1")),
            ..TurnStatus::default()
        };
        Scene::capture(grid, &units, &fog, &status)
    }

    #[test]
    fn parse_line_understands_every_command() {
        assert_eq!(parse_line("3 4"), Ok(InputLine::Cell { x: 3, y: 4 }));
        assert_eq!(parse_line("  -1 0  "), Ok(InputLine::Cell { x: -1, y: 0 }));
        assert_eq!(
            parse_line("px 130 70.5"),
            Ok(InputLine::Pixel { x: 130.0, y: 70.5 })
        );
        assert_eq!(parse_line("end"), Ok(InputLine::EndTurn));
        assert_eq!(parse_line("quit # done"), Ok(InputLine::Quit));
        assert_eq!(parse_line("# comment"), Ok(InputLine::Blank));
        assert_eq!(parse_line(""), Ok(InputLine::Blank));
    }

    #[test]
    fn parse_line_reports_malformed_input() {
        assert_eq!(
            parse_line("attack"),
            Err(InputError::Unrecognised(String::from("attack")))
        );
        assert_eq!(
            parse_line("one 2"),
            Err(InputError::InvalidNumber(String::from("one")))
        );
        assert_eq!(
            parse_line("px 5"),
            Err(InputError::Unrecognised(String::from("px 5")))
        );
        assert_eq!(
            parse_line("px 1 2 3"),
            Err(InputError::Unrecognised(String::from("px 1 2 3")))
        );
    }

    #[test]
    fn render_board_draws_units_fog_and_status() {
        let board = render_board(&scene().with_message("selected g1"));
        let lines: Vec<_> = board.lines().collect();

        assert_eq!(lines[0], "    0 1 2 3");
        assert_eq!(lines[1], " 0  . . . .");
        assert_eq!(lines[2], " 1  . g R .");
        assert_eq!(lines[3], " 2  . . . #");
        assert_eq!(lines[4], "Turn: Germany (movement) - Weather: Summer");
        assert_eq!(lines[5], "  g1 Panzer at (1, 1) health 100");
        assert_eq!(lines[6], "  r1 T-34 at (2, 1) health 70");
        assert_eq!(lines[7], "> selected g1");
    }

    #[test]
    fn backend_forwards_frames_until_quit() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&frames);
        let input = Cursor::new("1 1\n# skip\nbogus\npx 10 20\nend\nquit\n2 2\n");
        let mut output = Vec::new();

        TerminalBackend::new(input, &mut output)
            .run(
                Presentation::new("Welcome", BACKGROUND_COLOR, scene()),
                move |frame, _scene| {
                    recorded.lock().expect("frame log").push(frame);
                },
            )
            .expect("backend runs");

        let frames = frames.lock().expect("frame log");
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].cell, Some((1, 1)));
        assert_eq!(frames[1].pointer, Some(Vec2::new(10.0, 20.0)));
        assert!(frames[2].end_turn);

        let printed = String::from_utf8(output).expect("utf8 output");
        assert!(printed.starts_with("Welcome\n"));
        assert!(printed.contains("unrecognised input `bogus`"));
    }
}
