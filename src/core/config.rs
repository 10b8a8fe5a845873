use std::env;
use std::path::PathBuf;

use crate::core::glyphs::{GlyphTable, GlyphTableError};
use crate::core::paths;
use crate::core::share::DEFAULT_SHARE_URL;

/// Env var naming a glyph override file.
pub const GLYPHS_ENV: &str = "VIBE_CARD_GLYPHS";
/// Env var overriding the share URL.
pub const SHARE_URL_ENV: &str = "VIBE_CARD_SHARE_URL";

/// Where the glyph table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphSource {
    Builtin,
    /// Path from `VIBE_CARD_GLYPHS`; must be readable.
    Env(PathBuf),
    /// `glyphs.json` in the config directory; skipped with a warning if unreadable.
    UserConfig(PathBuf),
}

impl std::fmt::Display for GlyphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphSource::Builtin => write!(f, "builtin"),
            GlyphSource::Env(p) => write!(f, "{} (from {})", p.display(), GLYPHS_ENV),
            GlyphSource::UserConfig(p) => write!(f, "{} (config dir)", p.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub glyphs: GlyphSource,
    /// Raw value; checked by [`Config::share_url`] only when a command needs it.
    share_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Share URL must start with http:// or https://, got '{0}'")]
    InvalidShareUrl(String),
    #[error("Failed to load glyphs: {0}")]
    Glyphs(#[from] GlyphTableError),
}

/// Check that a share URL is http(s). Also used as the clap parser for `--url`.
pub fn validate_share_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidShareUrl(url.to_string()))
    }
}

/// Load configuration from environment. Nothing is validated until it is used.
pub fn load() -> Config {
    let default_glyphs = paths::default_glyphs_path().filter(|p| p.is_file());
    load_from(|key| env::var(key).ok(), default_glyphs)
}

/// Build configuration from a variable lookup and the default override path (if it exists).
pub fn load_from<F>(var: F, default_glyphs: Option<PathBuf>) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let share_url = var(SHARE_URL_ENV)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SHARE_URL.to_string());

    let glyphs = match var(GLYPHS_ENV).filter(|s| !s.trim().is_empty()) {
        Some(path) => GlyphSource::Env(PathBuf::from(path.trim())),
        None => default_glyphs
            .map(GlyphSource::UserConfig)
            .unwrap_or(GlyphSource::Builtin),
    };

    Config { glyphs, share_url }
}

impl Config {
    #[cfg(test)]
    pub fn new(glyphs: GlyphSource, share_url: &str) -> Self {
        Config {
            glyphs,
            share_url: share_url.to_string(),
        }
    }

    /// Share URL from `VIBE_CARD_SHARE_URL` or the default, validated.
    pub fn share_url(&self) -> Result<String, ConfigError> {
        validate_share_url(&self.share_url)
    }

    /// Build the glyph table once: builtin entries plus any configured overrides.
    pub fn glyph_table(&self) -> Result<GlyphTable, ConfigError> {
        let builtin = GlyphTable::builtin();
        let table = match &self.glyphs {
            GlyphSource::Builtin => builtin.clone(),
            GlyphSource::Env(path) => builtin.with_overrides(GlyphTable::load_overrides(path)?),
            GlyphSource::UserConfig(path) => match GlyphTable::load_overrides(path) {
                Ok(overrides) => builtin.with_overrides(overrides),
                Err(e) => {
                    log::warn!("Ignoring glyph overrides: {}", e);
                    builtin.clone()
                }
            },
        };
        log::info!("Glyph table: {} entries from {}", table.len(), self.glyphs);
        Ok(table)
    }
}
