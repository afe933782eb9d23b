//! CLI entry point for multipicker.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};

use multipicker::cli::{Cli, OutputFormat};
use multipicker::config::AppConfig;
use multipicker::render::{PickerSnapshot, render_plain};
use multipicker::{Binding, Environment, Interaction, MultiPicker, tui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "multipicker", &mut io::stdout());
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    // Launch TUI if --interactive flag is set
    if cli.interactive {
        return tui::run(&cli, &config);
    }

    if config.picker.sources.is_empty() {
        bail!("Nothing to pick from: pass --source or set picker.sources in the config file");
    }

    for value in config.unknown_selected() {
        eprintln!("Warning: selected value '{value}' is not one of the sources");
    }

    let theme = config.theme()?;
    let selection = Binding::new(config.selection());
    let picker = MultiPicker::new(
        config.picker.title.clone(),
        config.picker.sources.clone(),
        selection,
    );

    for value in &cli.toggles {
        if !picker.sources().contains(value) {
            eprintln!("Warning: toggled value '{value}' is not one of the sources");
        }
        picker.toggle(value);
    }

    let environment = Environment::new()
        .with_any_multi_picker_style(config.picker.style.into_style())
        .with_theme(theme);

    match cli.format {
        OutputFormat::Text => {
            let interaction = Interaction {
                highlighted: None,
                expanded: config.picker.expanded,
            };
            let body = picker.body(&environment, config.picker.width, interaction);
            println!("{}", render_plain(&body));
        }
        OutputFormat::Json => {
            let snapshot = PickerSnapshot::new(&picker.configuration(), config.picker.style);
            let json = serde_json::to_string_pretty(&snapshot)
                .wrap_err("Failed to serialize picker to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let snapshot = PickerSnapshot::new(&picker.configuration(), config.picker.style);
            let yaml = serde_yaml::to_string(&snapshot)
                .wrap_err("Failed to serialize picker to YAML")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
