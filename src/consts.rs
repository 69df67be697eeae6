//! Crate-wide constants

/// Blast-scaling coefficient K in D = K * W^(1/3)
pub const DEFAULT_K_FACTOR: f64 = 4.0;

/// Explosive weight used when a scene does not specify one
pub const DEFAULT_EXPLOSIVE_WEIGHT: f64 = 100.0;

/// Fewest vertices a footprint may have
pub const MIN_POLYGON_VERTICES: usize = 3;

pub const LOG_LEVEL_FILTER_RELEASE: log::LevelFilter = log::LevelFilter::Info;

pub const LOG_LEVEL_FILTER_DEBUG: log::LevelFilter = log::LevelFilter::Debug;

pub const LOG_FILE_PATH: &str = "logs/standoff_server.txt";
