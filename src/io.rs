use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use log::debug;

use crate::config::Source;
use crate::error::MapError;
use crate::grid::{Coordinate, Grid};

/// Opens the configured grid source for reading.
pub fn open_source(source: &Source) -> Result<Box<dyn Read>, MapError> {
    let reader: Box<dyn Read> = match source {
        Source::Stdin => Box::new(io::stdin()),
        Source::Path(path) => Box::new(File::open(path).map_err(|err| {
            MapError::SourceUnreadable {
                source_name: source.name(),
                source: err,
            }
        })?),
    };
    Ok(reader)
}

pub struct GridReader<R: Read> {
    inner: BufReader<R>,
    name: String,
    line: String,
}

impl<R: Read> GridReader<R> {
    /// `name` identifies the source in error messages.
    pub fn new(inner: R, name: impl Into<String>) -> GridReader<R> {
        GridReader {
            inner: BufReader::new(inner),
            name: name.into(),
            line: String::new(),
        }
    }

    /// Reads the whole source and locates its origin.
    pub fn read(&mut self) -> Result<(Grid, Coordinate), MapError> {
        let mut rows = Vec::new();
        loop {
            self.line.clear();
            let bytes_read =
                self.inner
                    .read_line(&mut self.line)
                    .map_err(|source| MapError::SourceUnreadable {
                        source_name: self.name.clone(),
                        source,
                    })?;
            if bytes_read == 0 {
                break;
            }

            let line = self.line.strip_suffix('\n').unwrap_or(&self.line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            rows.push(Grid::parse_row(rows.len(), line)?);
        }

        let grid = Grid::from_rows(rows)?;
        let origin = grid.origin()?;
        let (rows, columns) = grid.size();
        debug!(
            "read {}x{} grid from {}, origin at {}",
            rows, columns, self.name, origin
        );
        Ok((grid, origin))
    }
}

pub struct GridWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> GridWriter<W> {
    pub fn new(inner: W) -> GridWriter<W> {
        GridWriter {
            inner: BufWriter::new(inner),
        }
    }

    pub fn write(&mut self, grid: &Grid) -> Result<(), MapError> {
        for line in grid.lines() {
            writeln!(self.inner, "{}", line).map_err(MapError::SinkUnwritable)?;
        }
        self.inner.flush().map_err(MapError::SinkUnwritable)?;
        Ok(())
    }
}
