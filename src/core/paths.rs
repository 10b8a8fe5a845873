//! Centralized path helpers for the config directory.

use std::path::PathBuf;

use crate::core::app;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/vibe-card/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Default location of the user's glyph override file (~/.config/vibe-card/glyphs.json).
pub fn default_glyphs_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("glyphs.json"))
}
