pub mod config;
pub mod history;
pub mod model;

pub use config::{BrushLimits, CanvasConfig, ConfigError};
pub use history::History;
pub use model::*;
