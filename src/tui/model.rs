//! Application model for the TUI.

use std::collections::HashSet;

use color_eyre::eyre::Result;
use tuirealm::Update;

use crate::binding::Binding;
use crate::config::AppConfig;
use crate::environment::Environment;
use crate::picker::MultiPicker;
use crate::style::StyleKind;

use super::msg::Msg;

/// Application model containing all state shared between pickers.
pub struct Model {
    pub title: String,
    pub sources: Vec<String>,
    /// The one selection every picker reads and writes.
    pub selection: Binding<HashSet<String>>,
    /// Root environment; each picker panel derives its own style from it.
    pub environment: Environment,
    /// Style focused on startup.
    pub initial_style: StyleKind,
    /// Whether the menu picker starts open.
    pub expanded: bool,

    // UI state
    pub show_help: bool,
    pub quit: bool,
    pub message: Option<String>,
}

impl Model {
    /// Initialize model from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let theme = config.theme()?;

        let message = match config.unknown_selected().as_slice() {
            [] => None,
            unknown => Some(format!("Not among the sources: {}", unknown.join(", "))),
        };

        Ok(Self {
            title: config.picker.title.clone(),
            sources: config.picker.sources.clone(),
            selection: Binding::new(config.selection()),
            environment: Environment::new().with_theme(theme),
            initial_style: config.picker.style,
            expanded: config.picker.expanded,
            show_help: false,
            quit: false,
            message,
        })
    }

    /// A picker over the model's sources and shared selection.
    pub fn picker(&self) -> MultiPicker<String> {
        MultiPicker::new(
            self.title.clone(),
            self.sources.clone(),
            self.selection.clone(),
        )
    }

    /// The environment for the panel drawn with `kind`.
    pub fn environment_for(&self, kind: StyleKind) -> Environment {
        self.environment
            .with_any_multi_picker_style(kind.into_style())
    }

    /// Selected values in source order.
    pub fn selected_labels(&self) -> Vec<String> {
        self.selection.with(|set| {
            self.sources
                .iter()
                .filter(|value| set.contains(*value))
                .cloned()
                .collect()
        })
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }
            Msg::SelectionChanged => {
                self.message = None;
                tracing::info!(selected = ?self.selected_labels(), "selection changed");
                None
            }
            // Focus is handled by the application loop
            Msg::FocusNext | Msg::FocusPrev => None,
        }
    }
}
