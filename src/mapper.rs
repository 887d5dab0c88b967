use std::collections::VecDeque;

use log::{debug, trace};
use serde::Serialize;

use crate::direction::Direction;
use crate::error::MapError;
use crate::grid::{Cell, Coordinate, Elevation, Grid};

/// Water line for a run. A cell is dry when ten times its height is strictly
/// above this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FloodLevel(pub u32);

impl FloodLevel {
    /// Height 0 is under water at every flood level.
    pub fn is_dry(self, elevation: Elevation) -> bool {
        let height = u32::from(elevation.height());
        height != 0 && height * 10 > self.0
    }
}

/// Counters from one mapping run, plus a census of the final grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Survey {
    /// Frontier entries popped, the origin included.
    pub expanded: usize,
    /// Cells turned buildable by this run.
    pub marked: usize,
    pub buildable: usize,
    pub submerged: usize,
    /// Dry cells the survey never reached.
    pub stranded: usize,
}

impl Survey {
    fn census(mut self, grid: &Grid, flood_level: FloodLevel) -> Self {
        self.buildable = grid.count(|c| c == Cell::Buildable);
        self.submerged = grid.count(|c| matches!(c, Cell::Elevation(e) if !flood_level.is_dry(e)));
        self.stranded = grid.count(|c| matches!(c, Cell::Elevation(e) if flood_level.is_dry(e)));
        self
    }
}

/// A queued cell and the form it had before it was marked. Marked cells no
/// longer carry a height, so the reference height travels with the entry.
#[derive(Debug, Clone, Copy)]
struct Probe {
    at: Coordinate,
    reference: Cell,
}

/// Whether `cell` may be built on when reached from a cell whose form was
/// `reference`.
///
/// Only untouched elevations qualify, and only when they are above the flood
/// level. Next to the origin any height will do; elsewhere the path may stay
/// level or step down by exactly one.
pub fn admissible(cell: Cell, reference: Cell, flood_level: FloodLevel) -> bool {
    let height = match cell {
        Cell::Elevation(e) if flood_level.is_dry(e) => e.height(),
        _ => return false,
    };
    match reference {
        Cell::Origin => true,
        Cell::Elevation(r) => height == r.height() || height + 1 == r.height(),
        Cell::Buildable => false,
    }
}

pub fn map_surface(
    grid: &mut Grid,
    origin: Coordinate,
    flood_level: FloodLevel,
) -> Result<Survey, MapError> {
    map_surface_with_order(grid, origin, flood_level, &Direction::SCAN_ORDER)
}

/// Breadth-first survey from `origin`, marking every admissible cell
/// buildable. `order` is the neighbour order used for each expansion; it
/// changes discovery order only, never the final grid.
pub fn map_surface_with_order(
    grid: &mut Grid,
    origin: Coordinate,
    flood_level: FloodLevel,
    order: &[Direction],
) -> Result<Survey, MapError> {
    if grid.origin()? != origin {
        return Err(MapError::NotOrigin { at: origin });
    }

    let size = grid.size();
    debug!(
        "mapping {}x{} surface from {} at flood level {}",
        size.0, size.1, origin, flood_level.0
    );

    let mut survey = Survey::default();
    let mut frontier = VecDeque::new();
    frontier.push_back(Probe {
        at: origin,
        reference: Cell::Origin,
    });

    while let Some(current) = frontier.pop_front() {
        survey.expanded += 1;

        for direction in order {
            let Some(next) = direction.offset_pos(current.at, size) else {
                continue;
            };
            let Some(cell) = grid.get(next) else {
                continue;
            };

            if admissible(cell, current.reference, flood_level) {
                trace!("{} buildable from {} ({})", next, current.at, direction);
                grid.set(next, Cell::Buildable);
                survey.marked += 1;
                frontier.push_back(Probe {
                    at: next,
                    reference: cell,
                });
            }
        }
    }

    let survey = survey.census(grid, flood_level);
    debug!(
        "survey done: {} expanded, {} marked, {} stranded",
        survey.expanded, survey.marked, survey.stranded
    );
    Ok(survey)
}

/// By-value form of [`map_surface`].
pub fn mapped(
    mut grid: Grid,
    origin: Coordinate,
    flood_level: FloodLevel,
) -> Result<Grid, MapError> {
    map_surface(&mut grid, origin, flood_level)?;
    Ok(grid)
}
