use core::fmt;

use crate::grid::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbour order used by the mapper unless told otherwise.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Steps one cell in this direction. Returns `None` when that would leave a
    /// grid of `size` (rows, columns); the surface has no wraparound.
    pub fn offset_pos(&self, pos: Coordinate, size: (usize, usize)) -> Option<Coordinate> {
        let (rows, columns) = size;
        assert!(
            pos.row < rows && pos.column < columns,
            "Invalid position: {}",
            pos
        );

        let row = match self {
            Direction::Up => pos.row.checked_sub(1)?,
            Direction::Down => Some(pos.row + 1).filter(|&r| r < rows)?,
            _ => pos.row,
        };
        let column = match self {
            Direction::Left => pos.column.checked_sub(1)?,
            Direction::Right => Some(pos.column + 1).filter(|&c| c < columns)?,
            _ => pos.column,
        };
        Some(Coordinate::new(row, column))
    }

    pub fn all_directions() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        })
    }
}
