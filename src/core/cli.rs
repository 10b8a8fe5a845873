//! CLI commands: render, name, glyph, card, share, glyphs, config.
//!
//! Each command returns its output as a string; printing is left to the caller.

use crate::core::card::Card;
use crate::core::config::{Config, ConfigError};
use crate::core::glyphs::{Category, GlyphTable};
use crate::core::paths;
use crate::core::render::{parse_document, render};
use crate::core::resolve::resolve_glyph;
use crate::core::share::{
    SHARE_TITLE, SocialPlatform, image_file_name, share_text, social_share_url,
};
use crate::core::subject::extract_name;

/// Output format for the `render` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

/// Render a response. `glyph` overrides the resolved glyph.
pub fn render_command(
    response: &str,
    table: &GlyphTable,
    format: OutputFormat,
    width: usize,
    glyph: Option<&str>,
) -> Result<String, serde_json::Error> {
    let name = extract_name(response);
    let glyph = glyph.unwrap_or_else(|| resolve_glyph(&name, table));
    let out = match format {
        OutputFormat::Html => render(response, glyph),
        OutputFormat::Text => parse_document(response, glyph).to_text(width),
        OutputFormat::Json => serde_json::to_string_pretty(&parse_document(response, glyph))?,
    };
    Ok(out)
}

pub fn name_command(response: &str) -> String {
    extract_name(response)
}

/// Resolve the glyph for the given words, joined with spaces.
pub fn glyph_command(words: &[String], table: &GlyphTable) -> String {
    resolve_glyph(&words.join(" "), table).to_string()
}

pub fn card_command(response: &str, table: &GlyphTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Card::from_response(response, table))
}

/// Share title, share text, and image file name, one per line. With `platform`, the
/// platform's share link is appended.
pub fn share_command(
    response: &str,
    table: &GlyphTable,
    url: &str,
    platform: Option<SocialPlatform>,
) -> String {
    let name = extract_name(response);
    let glyph = resolve_glyph(&name, table);
    let mut out = format!(
        "{}\n{}\n{}",
        SHARE_TITLE,
        share_text(&name, glyph, url),
        image_file_name(&name)
    );
    if let Some(platform) = platform {
        out.push('\n');
        out.push_str(&social_share_url(platform, &name, glyph, url));
    }
    out
}

/// List table entries, optionally restricted to a category and filtered by query.
pub fn glyphs_command(
    table: &GlyphTable,
    category: Option<Category>,
    query: Option<&str>,
) -> String {
    table
        .matching(category, query.unwrap_or(""))
        .iter()
        .map(|e| format!("{}  {:<16} {}", e.glyph, e.key, e.category))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Config dir, glyph source, and share URL. Fails on an invalid share URL.
pub fn config_command(config: &Config) -> Result<String, ConfigError> {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    Ok(format!(
        "Config:    {}\nGlyphs:    {}\nShare URL: {}",
        config_dir,
        config.glyphs,
        config.share_url()?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GlyphSource;

    const RESPONSE: &str = "**Animal:** Red Fox\n**Explanation:** Clever.\n- Quick";

    #[test]
    fn render_html_resolves_glyph_from_name() {
        let out = render_command(RESPONSE, GlyphTable::builtin(), OutputFormat::Html, 80, None)
            .unwrap();
        assert!(out.contains("🦊 Red Fox 🦊"));
        assert!(out.contains("<h2>Explanation</h2><p>Clever.</p>"));
    }

    #[test]
    fn render_glyph_override() {
        let out = render_command(
            RESPONSE,
            GlyphTable::builtin(),
            OutputFormat::Html,
            80,
            Some("*"),
        )
        .unwrap();
        assert!(out.contains("* Red Fox *"));
    }

    #[test]
    fn render_text_and_json() {
        let text =
            render_command(RESPONSE, GlyphTable::builtin(), OutputFormat::Text, 80, None).unwrap();
        assert!(text.starts_with("🦊 Red Fox 🦊"));
        assert!(text.contains("• Quick"));

        let json =
            render_command(RESPONSE, GlyphTable::builtin(), OutputFormat::Json, 80, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["blocks"][0]["glyph"], "🦊");
    }

    #[test]
    fn glyph_joins_words() {
        let words = vec!["Arctic".to_string(), "Fox".to_string()];
        assert_eq!(glyph_command(&words, GlyphTable::builtin()), "🦊");
        assert_eq!(glyph_command(&[], GlyphTable::builtin()), "");
    }

    #[test]
    fn card_is_json() {
        let json = card_command(RESPONSE, GlyphTable::builtin()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Red Fox");
        assert_eq!(value["glyph"], "🦊");
    }

    #[test]
    fn share_lines() {
        let out = share_command(
            RESPONSE,
            GlyphTable::builtin(),
            "https://example.com",
            None,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                SHARE_TITLE,
                "I got Red Fox! 🦊 Discover your vibe animal at https://example.com",
                "vibe-animal-red-fox.png",
            ]
        );
    }

    #[test]
    fn share_with_platform_appends_link() {
        let out = share_command(
            RESPONSE,
            GlyphTable::builtin(),
            "https://example.com",
            Some(SocialPlatform::Twitter),
        );
        let last = out.lines().last().unwrap();
        assert!(last.starts_with("https://twitter.com/intent/tweet?text=I%20got%20Red%20Fox"));
    }

    #[test]
    fn glyphs_by_category_and_query() {
        let table = GlyphTable::builtin();
        let mythical = glyphs_command(table, Some(Category::Mythical), None);
        assert_eq!(mythical.lines().count(), 2);
        assert!(mythical.contains("dragon"));
        assert!(mythical.contains("unicorn"));

        let owl = glyphs_command(table, None, Some("OWL"));
        assert_eq!(owl.lines().count(), 1);
        assert!(owl.starts_with("🦉"));
    }

    #[test]
    fn config_lists_source_and_url() {
        let config = Config::new(GlyphSource::Builtin, "https://example.com");
        let out = config_command(&config).unwrap();
        assert!(out.contains("Glyphs:    builtin"));
        assert!(out.contains("Share URL: https://example.com"));
    }

    #[test]
    fn config_rejects_invalid_share_url() {
        let config = Config::new(GlyphSource::Builtin, "ftp://nope");
        assert!(matches!(
            config_command(&config),
            Err(ConfigError::InvalidShareUrl(_))
        ));
    }
}
