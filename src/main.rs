//! railview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// TUI for browsing a media catalog as draggable poster rails
#[derive(Parser, Debug)]
#[command(name = "railview")]
#[command(version)]
#[command(about = "Browse a media catalog as draggable poster rails")]
pub struct Args {
    /// Path to the catalog JSONL file (reads from stdin if not provided)
    pub catalog: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_parser = railview::view::THEME_NAMES.to_vec())]
    pub theme: Option<String>,

    /// Start on the profile icon picker page
    #[arg(long)]
    pub profile_picker: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = railview::config::load_config_with_precedence(args.config.clone())?;
        let merged = railview::config::merge_config(config_file);
        let with_env = railview::config::apply_env_overrides(merged);
        railview::config::apply_cli_overrides(with_env, args.theme.clone())
    };

    // Initialize tracing with the configured log file path
    railview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Detect the catalog source (file or stdin) and ingest it once
    let mut source = railview::source::detect_catalog_source(args.catalog.clone())?;
    let origin = source.describe();
    let lines = source.read_lines()?;
    let entries = railview::integration::process_lines(lines, 1);

    // Log malformed lines; ingest continues with the valid remainder
    let mut library = railview::model::Library::new();
    for entry in entries {
        if let Some(malformed) = entry.as_malformed() {
            warn!(
                "Parse error at line {}: {}",
                malformed.line_number(),
                malformed.error_message()
            );
        }
        library.add_entry(entry);
    }

    info!(
        shelves = library.shelf_count(),
        shows = library.show_count(),
        icons = library.icons().len(),
        malformed = library.malformed_count(),
        "Catalog loaded"
    );

    let options = railview::view::UiOptions {
        theme: config.theme,
        profile_name: config.profile_name,
        start_in_picker: args.profile_picker,
        no_color: args.no_color,
    };

    railview::view::run_with_library(library, origin, options)?;

    Ok(())
}
