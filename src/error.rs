use std::io;

use thiserror::Error;

use crate::grid::Coordinate;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot read grid source {source_name}")]
    SourceUnreadable {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid has no origin cell")]
    MissingOrigin,
    #[error("grid has more than one origin cell: {first} and {second}")]
    MultipleOrigins { first: Coordinate, second: Coordinate },
    #[error("start cell {at} is not the origin")]
    NotOrigin { at: Coordinate },
    #[error("invalid cell {found:?} at row {row}, column {column}")]
    InvalidElevation {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("cannot write grid")]
    SinkUnwritable(#[source] io::Error),
}
