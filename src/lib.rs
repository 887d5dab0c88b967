//! Surveys a landing site for buildable ground.
//!
//! A grid of single-digit elevations surrounds the landed ship (the origin).
//! Starting there, [`mapper::map_surface`] walks the surface breadth-first and
//! marks every cell a road could reach: above the flood level, and never
//! climbing or dropping more than one unit per step.

pub mod config;
pub mod direction;
pub mod error;
pub mod graph;
pub mod grid;
pub mod io;
pub mod mapper;

pub use error::MapError;
pub use grid::{Cell, Coordinate, Elevation, Grid};
pub use mapper::{map_surface, mapped, FloodLevel, Survey};
