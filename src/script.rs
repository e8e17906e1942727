//! Line-oriented pointer-event scripts.
//!
//! Lets a recorded or hand-written gesture sequence drive a [`DrawingEngine`]
//! without a live input device. One command per line:
//!
//! ```text
//! # comment
//! mode stamp
//! brush leaf
//! down 10 10
//! move 35 10
//! up
//! grid
//! clear
//! redraw
//! resize 640 480
//! ```

use crate::brush::{BrushMode, StampHandle};
use crate::engine::DrawingEngine;
use crate::error::EngineError;
use crate::util::Point;
use thiserror::Error;

/// One scripted engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Pointer down: `start_drawing`
    Down(Point),
    /// Pointer move: `draw`
    Move(Point),
    /// Pointer up: `stop_drawing`
    Up,
    /// `set_brush_mode`
    Mode(BrushMode),
    /// `set_brush_image` (`brush none` clears it)
    Brush(Option<StampHandle>),
    /// `toggle_grid`
    Grid,
    /// `clear`
    Clear,
    /// `redraw_history`
    Redraw,
    /// `resize`
    Resize { width: i32, height: i32 },
}

/// Errors found while parsing a script. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: '{value}' is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {message}")]
    InvalidMode { line: usize, message: String },
}

fn number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn point(line: usize, x: &str, y: &str) -> Result<Point, ScriptError> {
    let (x, y): (f64, f64) = (number(line, x)?, number(line, y)?);
    if !x.is_finite() || !y.is_finite() {
        return Err(ScriptError::InvalidNumber {
            line,
            value: format!("{} {}", x, y),
        });
    }
    Ok(Point::new(x, y))
}

impl ScriptCommand {
    /// Parses one non-empty, non-comment line.
    pub fn parse(line_no: usize, line: &str) -> Result<Self, ScriptError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: String::new(),
            });
        };
        let keyword = command.to_lowercase();

        let arity = |expected: &'static str| ScriptError::WrongArity {
            line: line_no,
            command: keyword.clone(),
            expected,
        };

        match (keyword.as_str(), args) {
            ("down", [x, y]) => Ok(Self::Down(point(line_no, x, y)?)),
            ("move", [x, y]) => Ok(Self::Move(point(line_no, x, y)?)),
            ("down" | "move", _) => Err(arity("two coordinates")),
            ("up", []) => Ok(Self::Up),
            ("grid", []) => Ok(Self::Grid),
            ("clear", []) => Ok(Self::Clear),
            ("redraw", []) => Ok(Self::Redraw),
            ("up" | "grid" | "clear" | "redraw", _) => Err(arity("no arguments")),
            ("mode", [mode]) => mode
                .parse()
                .map(Self::Mode)
                .map_err(|message| ScriptError::InvalidMode {
                    line: line_no,
                    message,
                }),
            ("mode", _) => Err(arity("one of line or stamp")),
            ("brush", [name]) if name.eq_ignore_ascii_case("none") => Ok(Self::Brush(None)),
            ("brush", [name]) => Ok(Self::Brush(Some(StampHandle::new(*name)))),
            ("brush", _) => Err(arity("a stamp name or none")),
            ("resize", [w, h]) => Ok(Self::Resize {
                width: number(line_no, w)?,
                height: number(line_no, h)?,
            }),
            ("resize", _) => Err(arity("width and height")),
            _ => Err(ScriptError::UnknownCommand {
                line: line_no,
                command: command.to_string(),
            }),
        }
    }

    /// Runs the command against `engine`.
    ///
    /// Only `resize` can fail; every other command is infallible.
    pub fn apply(&self, engine: &mut DrawingEngine) -> Result<(), EngineError> {
        match self {
            Self::Down(point) => engine.start_drawing(*point),
            Self::Move(point) => {
                engine.draw(*point);
            }
            Self::Up => engine.stop_drawing(),
            Self::Mode(mode) => engine.set_brush_mode(*mode),
            Self::Brush(handle) => engine.set_brush_image(handle.clone()),
            Self::Grid => engine.toggle_grid(),
            Self::Clear => engine.clear(),
            Self::Redraw => engine.redraw_history(),
            Self::Resize { width, height } => engine.resize(*width, *height)?,
        }
        Ok(())
    }
}

/// Parses a whole script, skipping blank lines and `#` comments.
///
/// Stops at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(line_no, line)| ScriptCommand::parse(line_no, line))
        .collect()
}
