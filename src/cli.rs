//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::cli::OutputFormat;
use crate::core::config::validate_share_url;
use crate::core::glyphs::Category;
use crate::core::share::SocialPlatform;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  vibe-card render response.txt            Render a response as HTML
  cat response.txt | vibe-card render      Read the response from stdin
  vibe-card render -f text -w 60 -         Plain-text preview wrapped at 60 columns
  vibe-card name response.txt              Print the subject name
  vibe-card glyph snow leopard             Resolve a glyph for a name
  vibe-card share response.txt             Share text and image file name
  vibe-card share -p twitter response.txt  Also print a tweet link
  vibe-card glyphs --category bird         List bird glyphs
  vibe-card completions bash               Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render vibe-animal responses into shareable cards",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a response (HTML by default)
    Render {
        /// Response file; '-' or omitted reads stdin
        input: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Wrap width for text output
        #[arg(
            short,
            long,
            default_value_t = 80,
            value_parser = clap::value_parser!(u16).range(20..=400)
        )]
        width: u16,
        /// Use this glyph instead of resolving one from the name
        #[arg(short, long)]
        glyph: Option<String>,
    },
    /// Print the subject name from the first line
    Name {
        /// Response file; '-' or omitted reads stdin
        input: Option<PathBuf>,
    },
    /// Resolve the glyph for a subject name
    Glyph {
        /// Name words, e.g. `snow leopard`
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Print name, glyph, and HTML as JSON
    Card {
        /// Response file; '-' or omitted reads stdin
        input: Option<PathBuf>,
    },
    /// Print share title, share text, and image file name
    Share {
        /// Response file; '-' or omitted reads stdin
        input: Option<PathBuf>,
        /// Link appended to the share text (overrides VIBE_CARD_SHARE_URL)
        #[arg(long, value_parser = validate_share_url)]
        url: Option<String>,
        /// Also print a share link for this platform
        #[arg(short, long, value_enum)]
        platform: Option<SocialPlatform>,
    },
    /// List the glyph table
    Glyphs {
        /// Only this category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
        /// Filter by key or category
        #[arg(long)]
        query: Option<String>,
    },
    /// Show config path, glyph source, and share URL
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
