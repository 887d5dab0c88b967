use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::mapper::FloodLevel;

pub const USAGE: &str = "usage: surface-mapper <SOURCE> <FLOOD_LEVEL>\n\
                         \n\
                         SOURCE       grid file, or - for stdin\n\
                         FLOOD_LEVEL  non-negative integer water line";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// Name used for this source in log lines and errors.
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::Path(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub flood_level: FloodLevel,
}

impl Config {
    /// Builds the run configuration from the positional arguments, program
    /// name excluded.
    pub fn from_args<I>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let [source, flood_level] = &args[..] else {
            return Err(anyhow!(
                "expected 2 arguments, but got {}\n\n{}",
                args.len(),
                USAGE
            ));
        };

        let source = match source.as_str() {
            "-" => Source::Stdin,
            path => Source::Path(PathBuf::from(path)),
        };
        let flood_level = flood_level
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid flood level: {:?}\n\n{}", flood_level, USAGE))?;

        Ok(Config {
            source,
            flood_level: FloodLevel(flood_level),
        })
    }
}
