//! Maps drawn as text.
//!
//! An [`AsciiMap`] parses a block of text into a fixed-size character grid
//! and converts it into a [`NavGrid`]. Legend:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | floor |
//! | `#` | wall |
//! | `S` | floor, start marker |
//! | `G` | floor, goal marker |

use std::str::FromStr;

use thiserror::Error;
use wayfind_core::Point;

use crate::grid::{Cell, NavGrid};

pub const FLOOR: char = '.';
pub const WALL: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Errors produced while parsing an [`AsciiMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("line {line} is {found} wide, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

/// A rectangular character map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    rows: Vec<Vec<char>>,
    size: Point,
}

impl AsciiMap {
    /// Parse `s`. Blank leading and trailing lines are dropped and each
    /// line is trimmed of surrounding whitespace; every remaining line must
    /// have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let Some(first) = lines.first().filter(|l| !l.is_empty()) else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();

        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let row: Vec<char> = line.chars().collect();
            if row.len() != width {
                return Err(MapError::InconsistentSize {
                    line: y,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&ch| !is_legend(ch)) {
                return Err(MapError::InvalidChar {
                    ch: row[x],
                    pos: Point::new(x as i32, y as i32),
                });
            }
            rows.push(row);
        }

        Ok(Self {
            size: Point::new(width as i32, rows.len() as i32),
            rows,
        })
    }

    /// Width and height in cells.
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// The character at `p`, if inside the map.
    pub fn at(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }

    /// Iterate over positions and characters in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &ch)| (Point::new(x as i32, y as i32), ch))
        })
    }

    /// First position holding `ch`, in row-major order.
    pub fn find(&self, ch: char) -> Option<Point> {
        self.iter().find(|&(_, c)| c == ch).map(|(p, _)| p)
    }

    /// Walkability grid of this map, one world unit per cell.
    pub fn to_nav_grid(&self) -> NavGrid {
        let mut grid = NavGrid::new(self.size.x, self.size.y);
        grid.fill_fn(|p| match self.at(p) {
            Some(WALL) | None => Cell::WALL,
            Some(_) => Cell::WALKABLE,
        });
        grid
    }
}

impl FromStr for AsciiMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_legend(ch: char) -> bool {
    matches!(ch, FLOOR | WALL | START | GOAL)
}
