//! Core types shared by the parsers, scanner and resolution engine

pub mod environment;
pub mod error;
pub mod format;
pub mod value;

pub use environment::Environment;
pub use error::{ConfigError, Result};
pub use format::{detect, detect_path, Format};
pub use value::{ConfigTable, ConfigValue};
