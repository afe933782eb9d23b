//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Picker style selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Header followed by `[x]` checkbox rows
    Checkbox,
    /// Wrapping cloud of filled chips
    Chips,
    /// Full-width rows with a trailing check mark
    InlineList,
    /// Title that opens a popover of toggles (default)
    #[default]
    Menu,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The picker as drawn in a terminal, without colors (default)
    #[default]
    Text,
    /// Options and their selection state as JSON
    Json,
    /// Options and their selection state as YAML
    Yaml,
}

/// Multi-selection picker for the terminal with checkbox, chip, inline list and menu styles.
#[derive(Parser, Debug)]
#[command(name = "multipicker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Picker title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Values to pick from, in display order (repeatable or comma separated)
    #[arg(
        short,
        long = "source",
        value_name = "VALUE",
        value_delimiter = ',',
        required_unless_present_any = ["config", "completions"]
    )]
    pub sources: Vec<String>,

    /// Values selected initially (repeatable or comma separated)
    #[arg(long = "selected", value_name = "VALUE", value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Toggle these values after loading, in order (repeatable)
    #[arg(long = "toggle", value_name = "VALUE")]
    pub toggles: Vec<String>,

    /// Picker style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Draw menu style pickers with their options open
    #[arg(long)]
    pub expanded: bool,

    /// Width offered to the picker, in cells (default: 40)
    #[arg(short, long, value_name = "CELLS")]
    pub width: Option<u16>,

    /// Output format: text, json or yaml
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Launch the interactive TUI showing every style over one selection
    #[arg(short, long)]
    pub interactive: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the resulting configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: multipicker.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
