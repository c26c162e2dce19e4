use crate::consts::{DEFAULT_GRID_SIZE, DEFAULT_LOG_FILE, MIN_GRID_EXTENT};
use crate::grid::Size;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Snake on a wrap-around grid, with bombs and portals
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version)]
pub(crate) struct Cli {
    /// Arena width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.width, value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EXTENT)..=200))]
    pub(crate) width: u16,

    /// Arena height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.height, value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EXTENT)..=200))]
    pub(crate) height: u16,

    /// Seed for the random number generator; a random one is picked (and logged) when omitted
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub(crate) log_file: PathBuf,

    /// Log debug output as well
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn grid_size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
