//! # Vibe Card
//!
//! Turns a vibe-animal response into a card: the subject name, its glyph, and an HTML
//! fragment (or plain-text / JSON preview) ready for display or image export.

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    if let Err(e) = run::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
