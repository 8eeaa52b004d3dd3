//! Reef core - portfolio content, section visibility, and configuration
//!
//! Everything the terminal frontend needs that does not touch a terminal:
//! the portfolio content model with its built-in data, the closed section
//! registry, the visibility state machine behind the accordion and the
//! reveal-on-scroll behavior, and TOML configuration loading.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod paths;
pub mod section;
pub mod visibility;

pub use content::Portfolio;
pub use error::Error;
pub use section::SectionId;
pub use visibility::{ScrollMetrics, SectionMap, SectionRect, VisibilityController};
