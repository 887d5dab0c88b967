//! The surface grid and its one-character-per-cell text encoding.

use core::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MapError;

/// Height of a surface cell, 0 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Elevation(u8);

impl Elevation {
    pub const MAX: u8 = 9;

    pub fn new(height: u8) -> Option<Self> {
        (height <= Self::MAX).then_some(Self(height))
    }

    pub fn height(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    /// The landed ship the survey starts from.
    Origin,
    Elevation(Elevation),
    Buildable,
}

impl Cell {
    const ORIGIN_CHAR: char = '#';
    const BUILDABLE_CHAR: char = '@';

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            Self::ORIGIN_CHAR => Some(Cell::Origin),
            Self::BUILDABLE_CHAR => Some(Cell::Buildable),
            _ => c
                .to_digit(10)
                .and_then(|d| Elevation::new(d as u8))
                .map(Cell::Elevation),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Origin => Self::ORIGIN_CHAR,
            Cell::Buildable => Self::BUILDABLE_CHAR,
            Cell::Elevation(e) => char::from(b'0' + e.height()),
        }
    }

    pub fn elevation(self) -> Option<Elevation> {
        match self {
            Cell::Elevation(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Rectangular surface, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MapError> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(MapError::MalformedGrid {
                row,
                expected: columns,
                found,
            });
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Decodes one text row; `row` is only used for error reporting.
    pub fn parse_row(row: usize, line: &str) -> Result<Vec<Cell>, MapError> {
        line.chars()
            .enumerate()
            .map(|(column, c)| {
                Cell::from_char(c).ok_or(MapError::InvalidElevation {
                    row,
                    column,
                    found: c,
                })
            })
            .collect()
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| Self::parse_row(row, line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// (rows, columns)
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn get(&self, pos: Coordinate) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Coordinate, cell: Cell) {
        let i = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("Invalid position: {}", pos));
        self.cells[i] = cell;
    }

    fn index_of(&self, pos: Coordinate) -> Option<usize> {
        (pos.row < self.rows && pos.column < self.columns)
            .then(|| pos.row * self.columns + pos.column)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coordinate::new(i / columns, i % columns), cell))
    }

    /// Locates the single origin cell.
    pub fn origin(&self) -> Result<Coordinate, MapError> {
        let mut origins = self
            .cells()
            .filter(|&(_, cell)| cell == Cell::Origin)
            .map(|(pos, _)| pos);
        match (origins.next(), origins.next()) {
            (None, _) => Err(MapError::MissingOrigin),
            (Some(first), Some(second)) => Err(MapError::MultipleOrigins { first, second }),
            (Some(only), None) => Ok(only),
        }
    }

    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |row| {
            self.cells[row * self.columns..(row + 1) * self.columns]
                .iter()
                .map(|c| c.to_char())
                .collect()
        })
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
