//! Keyboard-driven picker component.

use std::collections::HashSet;
use std::hash::Hash;

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::environment::Environment;
use crate::picker::MultiPicker;
use crate::style::{Body, Interaction};
use crate::tui::msg::{Msg, UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Hosts a [`MultiPicker`] inside a bordered panel.
///
/// The component owns only interaction state: which option is highlighted and
/// whether a menu is open. The selection lives in the picker's binding, so
/// several components over one binding always agree.
pub struct PickerComponent<T> {
    props: Props,
    label: String,
    picker: MultiPicker<T>,
    environment: Environment,
    highlighted: usize,
    expanded: bool,
}

impl<T> PickerComponent<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    pub fn new(label: impl Into<String>, picker: MultiPicker<T>, environment: Environment) -> Self {
        Self {
            props: Props::default(),
            label: label.into(),
            picker,
            environment,
            highlighted: 0,
            expanded: false,
        }
    }

    /// Start with a menu style picker open.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    fn focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }

    fn len(&self) -> usize {
        self.picker.sources().len()
    }

    /// Whether the style hides its options behind a trigger.
    fn uses_trigger(&self) -> bool {
        self.body(u16::MAX, false).has_trigger()
    }

    /// Options are reachable unless they sit behind a closed trigger.
    fn options_visible(&self) -> bool {
        self.expanded || !self.uses_trigger()
    }

    fn body(&self, width: u16, focused: bool) -> Body {
        let interaction = Interaction {
            highlighted: focused.then_some(self.highlighted),
            expanded: self.expanded,
        };
        self.picker.body(&self.environment, width, interaction)
    }

    fn move_highlight(&mut self, forward: bool) -> CmdResult {
        let len = self.len();
        if len == 0 || !self.options_visible() {
            return CmdResult::None;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
        CmdResult::Changed(self.state())
    }

    fn toggle_highlighted(&mut self) -> CmdResult {
        if !self.options_visible() {
            return CmdResult::None;
        }
        let Some(value) = self.picker.sources().get(self.highlighted).cloned() else {
            return CmdResult::None;
        };
        self.picker.toggle(&value);
        tracing::debug!(
            picker = %self.label,
            index = self.highlighted,
            "toggled option"
        );
        CmdResult::Changed(self.state())
    }

    fn set_expanded(&mut self, expanded: bool) -> CmdResult {
        if self.expanded == expanded || !self.uses_trigger() {
            return CmdResult::None;
        }
        self.expanded = expanded;
        tracing::debug!(picker = %self.label, expanded, "menu state changed");
        CmdResult::Changed(self.state())
    }

    fn msg_for(result: CmdResult) -> Option<Msg> {
        match result {
            CmdResult::Changed(_) => Some(Msg::SelectionChanged),
            _ => None,
        }
    }
}

impl<T> MockComponent for PickerComponent<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focused();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = self.body(inner.width, focused);
        frame.render_widget(&body, inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    /// Indices of the selected sources.
    fn state(&self) -> State {
        let selected: Vec<StateValue> = self.picker.selection().with(|set: &HashSet<T>| {
            self.picker
                .sources()
                .iter()
                .enumerate()
                .filter(|(_, value)| set.contains(*value))
                .map(|(index, _)| StateValue::Usize(index))
                .collect()
        });
        State::Vec(selected)
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Down | CmdDirection::Right) => self.move_highlight(true),
            Cmd::Move(CmdDirection::Up | CmdDirection::Left) => self.move_highlight(false),
            Cmd::Toggle => self.toggle_highlighted(),
            Cmd::Submit => {
                if self.options_visible() {
                    self.toggle_highlighted()
                } else {
                    self.set_expanded(true)
                }
            }
            Cmd::Cancel => self.set_expanded(false),
            _ => CmdResult::None,
        }
    }
}

impl<T> Component<Msg, UserEvent> for PickerComponent<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !self.focused() {
            return None;
        }

        // Extract keyboard event
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        let cmd = match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => {
                return Some(Msg::FocusNext);
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => {
                return Some(Msg::FocusPrev);
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                Cmd::Move(CmdDirection::Up)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                Cmd::Move(CmdDirection::Down)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                Cmd::Move(CmdDirection::Left)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                Cmd::Move(CmdDirection::Right)
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Cmd::Submit,
            AppAction::Tui(TuiEvent::Input(InputEvent::Cancel)) => Cmd::Cancel,
            AppAction::Toggle => Cmd::Toggle,
            _ => return None,
        };

        Self::msg_for(self.perform(cmd))
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::Binding;
    use crate::style::{CheckboxStyle, MenuStyle};

    use super::*;

    type Letters = HashSet<&'static str>;

    fn component(environment: Environment) -> (PickerComponent<&'static str>, Binding<Letters>) {
        let selection = Binding::new(HashSet::from(["b"]));
        let picker = MultiPicker::new("Letters", ["a", "b", "c"], selection.clone());
        (PickerComponent::new("Test", picker, environment), selection)
    }

    #[test]
    fn state_lists_selected_indices() {
        let (component, _) = component(Environment::new());
        assert_eq!(component.state(), State::Vec(vec![StateValue::Usize(1)]));
    }

    #[test]
    fn highlight_wraps_around() {
        let env = Environment::new().with_multi_picker_style(CheckboxStyle);
        let (mut component, _) = component(env);

        component.perform(Cmd::Move(CmdDirection::Up));
        assert_eq!(component.highlighted, 2);
        component.perform(Cmd::Move(CmdDirection::Down));
        assert_eq!(component.highlighted, 0);
    }

    #[test]
    fn toggle_writes_to_shared_binding() {
        let env = Environment::new().with_multi_picker_style(CheckboxStyle);
        let (mut component, selection) = component(env);

        component.perform(Cmd::Move(CmdDirection::Down));
        let result = component.perform(Cmd::Toggle);

        assert!(matches!(result, CmdResult::Changed(_)));
        assert_eq!(selection.get(), HashSet::new());
    }

    #[test]
    fn closed_menu_opens_before_toggling() {
        let env = Environment::new().with_multi_picker_style(MenuStyle);
        let (mut component, selection) = component(env);

        assert!(matches!(component.perform(Cmd::Toggle), CmdResult::None));
        component.perform(Cmd::Submit);
        assert!(component.expanded);
        assert_eq!(selection.get(), HashSet::from(["b"]));

        component.perform(Cmd::Submit);
        assert_eq!(selection.get(), HashSet::from(["a", "b"]));

        component.perform(Cmd::Cancel);
        assert!(!component.expanded);
    }

    #[test]
    fn cancel_is_ignored_without_trigger() {
        let env = Environment::new().with_multi_picker_style(CheckboxStyle);
        let (mut component, _) = component(env);
        assert!(matches!(component.perform(Cmd::Cancel), CmdResult::None));
    }
}
