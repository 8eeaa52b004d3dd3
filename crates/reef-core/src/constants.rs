//! Shared constants
//!
//! Thresholds and file names used across the workspace.

/// Fraction of the viewport height a section's top edge must rise above
/// before the section counts as revealed.
pub const REVEAL_FRACTION: f32 = 0.75;

/// Fraction of the viewport height used to decide which section is
/// "active" for navigation highlighting.
pub const ACTIVE_FRACTION: f32 = 0.40;

/// Config directory name under the home directory.
pub const CONFIG_DIR_NAME: &str = ".reef";

/// File name for portfolio content overrides.
pub const PORTFOLIO_FILE_NAME: &str = "portfolio.toml";

/// File name for UI settings.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Theme used when nothing is configured.
pub const DEFAULT_THEME: &str = "ocean";
