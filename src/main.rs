// file: src/main.rs
// version: 1.0.0
// guid: 8e28b0ff-cb54-47e5-aa97-47be99cc0514

//! Docker Command Reference - Main entry point

use clap::Parser;
use docker_reference::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    config::loader::ConfigLoader,
    logging::logger,
    surface::OutputFormat,
    Result,
};
use std::io::{IsTerminal, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    let settings = ConfigLoader::new().discover_settings(cli.config.as_deref())?;

    let stdout = std::io::stdout();
    if let Commands::Show { display } | Commands::Search { display, .. } = &cli.command {
        // Colors are forced on when asked for, even when stdout is not a terminal
        if output_format(&settings, display) == OutputFormat::Text
            && color_enabled(&settings, display, stdout.is_terminal())
        {
            colored::control::set_override(true);
        }
    }
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show { display } => show_command(&settings, &display, None, &mut out)?,
        Commands::Search { query, display } => {
            show_command(&settings, &display, Some(query.as_str()), &mut out)?
        }
        Commands::Categories { source } => {
            categories_command(&settings, source.as_deref(), &mut out)?
        }
        Commands::Validate { source } => validate_command(&source, &mut out)?,
        Commands::Export { format, output } => {
            export_command(format.into(), output.as_deref(), &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
