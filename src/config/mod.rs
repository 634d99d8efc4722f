//! Configuration loading and management for the Tax Engine.
//!
//! This module provides functionality to load tax schedules from YAML files,
//! including statute metadata, the Personal Income Tax band table and rent
//! relief, and the Company Income Tax thresholds and rates. The statutory
//! schedule is also available built in.
//!
//! # Example
//!
//! ```no_run
//! use tax_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nta2025").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CitSchedule, PitSchedule, RentRelief, StatuteMetadata, TaxBand, TaxConfig};
