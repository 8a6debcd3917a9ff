// file: src/cli/commands.rs
// version: 1.0.0
// guid: 8ace4210-09c8-4660-93ed-a5f3de9b1ec0

//! Command implementations for the CLI

use super::args::DisplayArgs;
use crate::{
    catalog::{CommandDescription, CommandRegistry},
    config::{loader::ConfigLoader, settings::expand_path, ColorChoice, Settings, SourceFormat},
    logging::with_operation_span,
    render::{CommandListView, RenderedList},
    surface::{self, OutputFormat},
    Result,
};
use serde::Serialize;
use std::fs;
use std::io::{IsTerminal, Write};
use std::path::Path;
use tracing::{debug, error, info};

/// Printed instead of the reference when it cannot be displayed
pub const FALLBACK_MESSAGE: &str = "Unable to display the command reference.";

/// Render the reference, optionally narrowed by `query`
pub fn show_command(
    settings: &Settings,
    display: &DisplayArgs,
    query: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let format = output_format(settings, display);
    let color = color_enabled(settings, display, std::io::stdout().is_terminal());

    let mut layout = settings.layout();
    layout.grouped |= display.group;

    let list = build_list(settings, display, query);
    match list {
        Ok(list) => surface::present(&list, format, color, &layout, out),
        Err(e) if e.is_display_failure() && !display.strict => {
            error!("{}", e);
            writeln!(out, "{}", FALLBACK_MESSAGE)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Output format from the command line, else from settings
pub fn output_format(settings: &Settings, display: &DisplayArgs) -> OutputFormat {
    display
        .format
        .map(OutputFormat::from)
        .unwrap_or(settings.display.format)
}

/// Whether to colorize, from the command line, else from settings
pub fn color_enabled(settings: &Settings, display: &DisplayArgs, is_terminal: bool) -> bool {
    display
        .color
        .map(ColorChoice::from)
        .unwrap_or(settings.display.color)
        .enabled(is_terminal)
}

/// Load, narrow and render the registry selected by the arguments
fn build_list(settings: &Settings, display: &DisplayArgs, query: Option<&str>) -> Result<RenderedList> {
    let mut registry = resolve_registry(settings, display.source.as_deref())?;

    if let Some(category) = display.category.as_deref() {
        registry = registry.by_category(category);
        debug!("{} commands in category {}", registry.len(), category);
    }
    if let Some(query) = query {
        registry = registry.search(query);
        debug!("{} commands match {:?}", registry.len(), query);
    }

    with_operation_span("render", || CommandListView::new().render(&registry))
}

/// The registry named on the command line, else in settings, else the bundled one
pub fn resolve_registry(settings: &Settings, source: Option<&str>) -> Result<CommandRegistry> {
    let path = match source {
        Some(raw) => Some(expand_path(raw)?),
        None => settings.source_path()?,
    };

    match path {
        Some(path) => ConfigLoader::new().load_registry(path),
        None => {
            debug!("Using bundled command table");
            Ok(CommandRegistry::builtin())
        }
    }
}

/// List categories with their command counts
pub fn categories_command(settings: &Settings, source: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let registry = resolve_registry(settings, source)?;
    let categories = registry.categories();

    if categories.is_empty() {
        writeln!(out, "No categories defined.")?;
        return Ok(());
    }

    let width = categories.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in categories {
        writeln!(out, "{:<width$}  {}", name, count, width = width)?;
    }
    Ok(())
}

/// Load a data file and report how many commands it holds
pub fn validate_command(source: &str, out: &mut dyn Write) -> Result<()> {
    let path = expand_path(source)?;
    info!("Validating command file: {}", path.display());

    let registry = ConfigLoader::new().load_registry(&path)?;
    writeln!(out, "{}: {} commands OK", path.display(), registry.len())?;
    Ok(())
}

#[derive(Serialize)]
struct CommandFile<'a> {
    commands: &'a [CommandDescription],
}

/// Serialize a registry as a data file that `load_registry` reads back
pub fn export_registry(registry: &CommandRegistry, format: SourceFormat) -> Result<String> {
    let file = CommandFile {
        commands: registry.as_slice(),
    };
    let text = match format {
        SourceFormat::Yaml => serde_yaml::to_string(&file)?,
        SourceFormat::Json => serde_json::to_string_pretty(&file)? + "\n",
        SourceFormat::Toml => toml::to_string_pretty(&file)?,
    };
    Ok(text)
}

/// Write the bundled table to `output`, or to `out` when no file is given
pub fn export_command(format: SourceFormat, output: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let registry = CommandRegistry::builtin();
    let text = export_registry(&registry, format)?;

    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("Exported {} commands to {}", registry.len(), path.display());
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}
