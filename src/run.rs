//! Application run modes: logger init and subcommand dispatch.

use std::io::{self, Write};

use clap::CommandFactory;

use crate::cli::{self, Args, Commands};
use crate::core;
use crate::core::cli::OutputFormat;
use crate::core::input::read_input;

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q level.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));
    logger.target(env_logger::Target::Stderr);
    let _ = logger.try_init();
}

/// Run the selected subcommand. No subcommand renders stdin as HTML.
pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let command = args.command.unwrap_or(Commands::Render {
        input: None,
        format: OutputFormat::Html,
        width: 80,
        glyph: None,
    });

    if let Commands::Completions { shell } = command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
        return Ok(());
    }

    let config = core::config::load();
    // Only commands that look up glyphs pay for (and can fail on) the override file.
    let table = || config.glyph_table();

    let out = match command {
        Commands::Render {
            input,
            format,
            width,
            glyph,
        } => {
            let response = read_input(input.as_deref())?;
            core::cli::render_command(
                &response,
                &table()?,
                format,
                usize::from(width),
                glyph.as_deref(),
            )?
        }
        Commands::Name { input } => core::cli::name_command(&read_input(input.as_deref())?),
        Commands::Glyph { name } => core::cli::glyph_command(&name, &table()?),
        Commands::Card { input } => {
            core::cli::card_command(&read_input(input.as_deref())?, &table()?)?
        }
        Commands::Share {
            input,
            url,
            platform,
        } => {
            let response = read_input(input.as_deref())?;
            let url = match url {
                Some(url) => url,
                None => config.share_url()?,
            };
            core::cli::share_command(&response, &table()?, &url, platform)
        }
        Commands::Glyphs { category, query } => {
            core::cli::glyphs_command(&table()?, category, query.as_deref())
        }
        Commands::Config => core::cli::config_command(&config)?,
        Commands::Completions { .. } => return Ok(()),
    };

    print_output(&out)?;
    Ok(())
}

fn print_output(out: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    if !out.is_empty() && !out.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
