use image::{imageops, RgbaImage};

use std::str;

use crate::error::ConfigError;

/// Axis of the original image that is walked as a processing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    AlongRows,
    #[default]
    AlongColumns,
}

impl Direction {
    /// Number of counter-clockwise quarter turns applied before sorting.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::AlongRows => 0,
            Direction::AlongColumns => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::AlongRows => "rows",
            Direction::AlongColumns => "columns",
        }
    }
}

impl str::FromStr for Direction {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rows" | "row" | "horizontal" => Ok(Direction::AlongRows),
            "columns" | "column" | "vertical" => Ok(Direction::AlongColumns),
            _ => Err(ConfigError::UnknownDirection(String::from(s))),
        }
    }
}

/// Returns an owned working copy whose rows are the lines of `direction`.
/// Columns are read top to bottom.
pub fn orient(image: &RgbaImage, direction: Direction) -> RgbaImage {
    match direction.quarter_turns() {
        0 => image.clone(),
        _ => imageops::rotate270(image),
    }
}

/// Undoes [`orient`]. Row sorting hands the buffer straight back.
pub fn restore(image: RgbaImage, direction: Direction) -> RgbaImage {
    match direction.quarter_turns() {
        0 => image,
        _ => imageops::rotate90(&image),
    }
}
