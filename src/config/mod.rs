//! Configuration resolution
//!
//! Chooses where to look, loads every recognised file once, and merges the
//! results with last-writer-wins precedence.

pub mod engine;
pub mod locations;
pub mod merge;

pub use engine::{EngineBuilder, LoadState, LoadedConfig, ResolutionEngine, Source};
pub use locations::{Locations, CONF_DIR_NAME};
pub use merge::merge_into;
