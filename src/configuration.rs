//! The value a picker hands to its style.

use std::fmt;
use std::sync::Arc;

use ratatui::text::Line;

use crate::identity::AnyHashable;

type LabelFn = dyn Fn() -> Line<'static> + Send + Sync;
type ToggleFn = dyn Fn() + Send + Sync;

/// One selectable entry in a [`Configuration`].
#[derive(Clone)]
pub struct PickerOption {
    id: AnyHashable,
    is_selected: bool,
    label: Arc<LabelFn>,
    toggle: Arc<ToggleFn>,
}

impl PickerOption {
    pub fn new(
        id: AnyHashable,
        label: impl Fn() -> Line<'static> + Send + Sync + 'static,
        is_selected: bool,
        toggle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            is_selected,
            label: Arc::new(label),
            toggle: Arc::new(toggle),
        }
    }

    pub fn id(&self) -> &AnyHashable {
        &self.id
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Build the label. Called at render time, possibly more than once.
    pub fn label(&self) -> Line<'static> {
        (self.label)()
    }

    /// Request a change to this option's selection state.
    ///
    /// `is_selected` on this descriptor is a snapshot and does not change;
    /// the next configuration built by the picker reflects the new state.
    pub fn toggle(&self) {
        (self.toggle)()
    }
}

impl fmt::Debug for PickerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOption")
            .field("id", &self.id)
            .field("is_selected", &self.is_selected)
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of a picker, rebuilt on every render pass.
#[derive(Debug, Clone)]
pub struct Configuration {
    title: Line<'static>,
    options: Vec<PickerOption>,
}

impl Configuration {
    pub fn new(title: impl Into<Line<'static>>, options: Vec<PickerOption>) -> Self {
        Self {
            title: title.into(),
            options,
        }
    }

    pub fn title(&self) -> &Line<'static> {
        &self.title
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_selected()).count()
    }
}
