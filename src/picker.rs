//! The multi-selection picker.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::sync::Arc;

use ratatui::text::Line;
use tracing::trace;

use crate::binding::Binding;
use crate::configuration::{Configuration, PickerOption};
use crate::environment::Environment;
use crate::identity::AnyHashable;
use crate::style::{Body, Interaction, StyleContext};

type ItemLabel<T> = dyn Fn(&T) -> Line<'static> + Send + Sync;

/// Insert `value` if it is missing from `set`, remove it otherwise.
///
/// Returns whether the value is selected afterwards.
pub fn toggle_membership<T: Hash + Eq + Clone>(set: &mut HashSet<T>, value: &T) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.clone());
        true
    }
}

/// A picker over `sources` whose selection lives in a host-owned binding.
///
/// The picker holds no state of its own. Every call to
/// [`configuration`](Self::configuration) or [`body`](Self::body) reads the
/// binding again, so drawing it each frame always reflects the latest
/// selection.
pub struct MultiPicker<T> {
    title: Line<'static>,
    sources: Vec<T>,
    selection: Binding<HashSet<T>>,
    item_label: Arc<ItemLabel<T>>,
}

impl<T> MultiPicker<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    /// Picker whose option labels are built by `item_label`.
    pub fn with_label<F, L>(
        title: impl Into<Line<'static>>,
        sources: impl IntoIterator<Item = T>,
        selection: Binding<HashSet<T>>,
        item_label: F,
    ) -> Self
    where
        F: Fn(&T) -> L + Send + Sync + 'static,
        L: Into<Line<'static>>,
    {
        Self {
            title: title.into(),
            sources: sources.into_iter().collect(),
            selection,
            item_label: Arc::new(move |value: &T| item_label(value).into()),
        }
    }

    /// Picker labelling each option with a string field of the value.
    pub fn with_label_key<K>(
        title: impl Into<Line<'static>>,
        sources: impl IntoIterator<Item = T>,
        selection: Binding<HashSet<T>>,
        key: K,
    ) -> Self
    where
        K: Fn(&T) -> &str + Send + Sync + 'static,
    {
        Self::with_label(title, sources, selection, move |value| {
            Line::from(key(value).to_owned())
        })
    }

    pub fn title(&self) -> &Line<'static> {
        &self.title
    }

    pub fn sources(&self) -> &[T] {
        &self.sources
    }

    pub fn selection(&self) -> &Binding<HashSet<T>> {
        &self.selection
    }

    /// Flip the selection state of `value`.
    pub fn toggle(&self, value: &T) {
        let selected = self
            .selection
            .update(|set| toggle_membership(set, value));
        trace!(selected, "toggled picker option");
    }

    /// Snapshot the picker for a style: one option per source, in order.
    pub fn configuration(&self) -> Configuration {
        let options = self.selection.with(|set| {
            self.sources
                .iter()
                .map(|value| {
                    let label_value = value.clone();
                    let item_label = Arc::clone(&self.item_label);
                    let toggle_value = value.clone();
                    let selection = self.selection.clone();

                    PickerOption::new(
                        AnyHashable::new(value.clone()),
                        move || item_label(&label_value),
                        set.contains(value),
                        move || {
                            let selected =
                                selection.update(|set| toggle_membership(set, &toggle_value));
                            trace!(selected, "toggled picker option");
                        },
                    )
                })
                .collect()
        });

        Configuration::new(self.title.clone(), options)
    }

    /// Build the body with the style and theme of `environment`.
    pub fn body(&self, environment: &Environment, width: u16, interaction: Interaction) -> Body {
        let context = StyleContext::new(width)
            .with_interaction(interaction)
            .with_theme(*environment.theme());
        environment
            .multi_picker_style()
            .make_body(&self.configuration(), &context)
    }
}

impl<T> MultiPicker<T>
where
    T: Display + Hash + Eq + Clone + Send + Sync + 'static,
{
    /// Picker labelling each option with the value's `Display` output.
    pub fn new(
        title: impl Into<Line<'static>>,
        sources: impl IntoIterator<Item = T>,
        selection: Binding<HashSet<T>>,
    ) -> Self {
        Self::with_label(title, sources, selection, |value: &T| {
            Line::from(value.to_string())
        })
    }
}

impl<T> Clone for MultiPicker<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            sources: self.sources.clone(),
            selection: self.selection.clone(),
            item_label: Arc::clone(&self.item_label),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MultiPicker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiPicker")
            .field("title", &self.title)
            .field("sources", &self.sources)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
