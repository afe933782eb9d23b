//! Application setup and main loop for tui-realm.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Frame, Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::style::StyleKind;

use super::components::{FOOTER_ACTIONS, PickerComponent, format_footer, render_help};
use super::ids::Id;
use super::model::Model;
use super::msg::{Msg, UserEvent};

/// Focusable pickers in Tab order.
const ALL_FOCUS_IDS: [Id; 4] = [
    Id::Picker(StyleKind::Checkbox),
    Id::Picker(StyleKind::Chips),
    Id::Picker(StyleKind::InlineList),
    Id::Picker(StyleKind::Menu),
];

/// Manages focus state for Tab navigation.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    /// Start with focus on the picker drawn with `kind`.
    pub fn starting_at(kind: StyleKind) -> Self {
        let current_idx = ALL_FOCUS_IDS
            .iter()
            .position(|id| *id == Id::Picker(kind))
            .unwrap_or(0);
        Self { current_idx }
    }

    /// Get the current focus component ID.
    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS[self.current_idx % ALL_FOCUS_IDS.len()]
    }

    /// Move focus to next component and return its ID.
    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    /// Move focus to previous component and return its ID.
    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

/// The picker gallery: a tui-realm application plus the shared model.
pub struct App {
    app: Application<Id, Msg, UserEvent>,
    focus: FocusManager,
    model: Model,
}

impl App {
    pub fn new(model: Model) -> Result<Self> {
        let mut app = Self::create_application();
        Self::mount_components(&mut app, &model)?;

        let focus = FocusManager::starting_at(model.initial_style);
        app.active(&focus.current_focus())?;

        Ok(Self { app, focus, model })
    }

    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount one picker per style, each in its own derived environment.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        for kind in StyleKind::ALL {
            let component = PickerComponent::new(
                kind.display_name(),
                model.picker(),
                model.environment_for(kind),
            )
            .expanded(model.expanded && kind == StyleKind::Menu);
            app.mount(Id::Picker(kind), Box::new(component), vec![])?;
        }
        Ok(())
    }

    /// Run until the user quits. Returns the selected values in source order.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<Vec<String>> {
        while !self.model.quit {
            terminal.draw(|frame| self.draw(frame))?;

            // Help modal intercepts all input when visible
            if self.model.show_help {
                if let Event::Key(key) = event::read()?
                    && matches!(
                        key.code,
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
                    )
                {
                    self.model.update(Some(Msg::HideHelp));
                }
                continue;
            }

            // Timeouts are fine, just continue
            if let Ok(messages) = self.app.tick(PollStrategy::Once) {
                for msg in messages {
                    self.handle(msg);
                }
            }
        }

        Ok(self.model.selected_labels())
    }

    fn handle(&mut self, msg: Msg) {
        match msg {
            Msg::FocusNext => {
                let next = self.focus.focus_next();
                let _ = self.app.active(&next);
            }
            Msg::FocusPrev => {
                let prev = self.focus.focus_prev();
                let _ = self.app.active(&prev);
            }
            _ => {}
        }

        // Process through model, handle chained messages
        let mut current = Some(msg);
        while let Some(m) = current {
            current = self.model.update(Some(m));
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [title_area, content, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(format!(" {} ", self.model.title))
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(content);
        let halves = |area| Layout::horizontal([Constraint::Percentage(50); 2]).areas::<2>(area);
        let [checkbox, chips] = halves(top);
        let [inline_list, menu] = halves(bottom);

        self.app.view(&Id::Picker(StyleKind::Checkbox), frame, checkbox);
        self.app.view(&Id::Picker(StyleKind::Chips), frame, chips);
        self.app.view(&Id::Picker(StyleKind::InlineList), frame, inline_list);
        self.app.view(&Id::Picker(StyleKind::Menu), frame, menu);

        let status = self.model.message.clone().unwrap_or_else(|| {
            let selected = self.model.selected_labels();
            if selected.is_empty() {
                "Nothing selected".to_string()
            } else {
                format!("Selected: {}", selected.join(", "))
            }
        });
        frame.render_widget(Paragraph::new(status), status_area);

        let footer = Paragraph::new(format_footer(FOOTER_ACTIONS, &[("open", "Enter")]))
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(footer, footer_area);

        if self.model.show_help {
            render_help(frame);
        }
    }
}
