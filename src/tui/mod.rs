//! Interactive demo: every built-in style over one shared selection.
//!
//! Each style is a tui-realm component hosting the same [`MultiPicker`]
//! binding, so toggling an option in one panel is visible in all of them on
//! the next frame.
//!
//! [`MultiPicker`]: crate::MultiPicker

mod app;
mod components;
mod ids;
mod model;
mod msg;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher,
    defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::logging::init_logging;

pub use components::PickerComponent;
pub use model::Model;
pub use msg::{Msg, UserEvent};

use app::App;

// ============================================================================
// Event handling
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Flip the highlighted option
    Toggle,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    config.bind(
        ActionBinding::builder()
            .action(AppAction::Toggle)
            .key(keys::char(' '))
            .description("Toggle option")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive TUI.
pub fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    let model = Model::from_config(config)?;
    tracing::info!(
        sources = model.sources.len(),
        style = ?model.initial_style,
        "starting interactive picker"
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = App::new(model).and_then(|mut app| app.run(&mut terminal));

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Ok(selected) = &result {
        println!("{}", selected.join("\n"));
    }

    result.map(|_| ())
}
