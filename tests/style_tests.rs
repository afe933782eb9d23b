use std::collections::HashSet;

use ratatui::layout::Position;
use ratatui::style::{Color, Modifier};
use ratatui::text::Line;

use multipicker::{
    AnyHashable, AnyMultiPickerStyle, Binding, CheckboxStyle, ChipsStyle, Configuration,
    Environment, InlineListStyle, Interaction, MenuStyle, MultiPicker, MultiPickerStyle,
    PickerOption, Role, StyleContext, StyleKind, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Size {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

fn sizes(selected: &[Size]) -> (MultiPicker<Size>, Binding<HashSet<Size>>) {
    let selection = Binding::new(selected.iter().copied().collect());
    let picker = MultiPicker::new(
        "Size",
        [Size::Small, Size::Medium, Size::Large],
        selection.clone(),
    );
    (picker, selection)
}

fn body_with<S: MultiPickerStyle>(
    style: S,
    picker: &MultiPicker<Size>,
    width: u16,
    interaction: Interaction,
) -> multipicker::Body {
    let environment = Environment::new().with_multi_picker_style(style);
    picker.body(&environment, width, interaction)
}

#[test]
fn test_distinct_enum_cases_have_distinct_identities() {
    let (picker, _) = sizes(&[]);
    let ids: HashSet<AnyHashable> = picker
        .configuration()
        .options()
        .iter()
        .map(|o| o.id().clone())
        .collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_wrapped_values_of_different_types_differ() {
    assert_ne!(AnyHashable::new(1_u8), AnyHashable::new(1_u16));
    assert_ne!(AnyHashable::new("a"), AnyHashable::new("a".to_string()));
    assert_eq!(AnyHashable::new(Size::Small), AnyHashable::new(Size::Small));
}

#[test]
fn test_checkbox_hit_test_maps_rows_to_options() {
    let (picker, _) = sizes(&[Size::Medium]);
    let body = body_with(CheckboxStyle, &picker, 30, Interaction::default());

    assert_eq!(body.hit_test(Position::new(0, 0)), Some(Role::Title));
    assert_eq!(body.hit_test(Position::new(1, 1)), Some(Role::Option(0)));
    assert_eq!(body.hit_test(Position::new(4, 3)), Some(Role::Option(2)));
    assert_eq!(body.hit_test(Position::new(0, 4)), None);
}

#[test]
fn test_checkbox_marks_follow_selection() {
    let (picker, selection) = sizes(&[Size::Large]);
    let marks = |picker: &MultiPicker<Size>| -> Vec<String> {
        body_with(CheckboxStyle, picker, 30, Interaction::default())
            .elements()
            .iter()
            .filter(|e| matches!(e.role, Role::Option(_)))
            .map(|e| e.content.spans[0].content.to_string())
            .collect()
    };

    assert_eq!(marks(&picker), vec!["[ ]", "[ ]", "[x]"]);
    picker.toggle(&Size::Small);
    assert_eq!(marks(&picker), vec!["[x]", "[ ]", "[x]"]);
    assert_eq!(selection.get(), HashSet::from([Size::Small, Size::Large]));
}

#[test]
fn test_checkbox_highlight_fills_row() {
    let (picker, _) = sizes(&[]);
    let interaction = Interaction {
        highlighted: Some(1),
        expanded: false,
    };
    let body = body_with(CheckboxStyle, &picker, 30, interaction);
    let highlighted: Vec<_> = body
        .elements()
        .iter()
        .filter(|e| e.fill.add_modifier.contains(Modifier::REVERSED))
        .map(|e| e.role)
        .collect();
    assert_eq!(highlighted, vec![Role::Option(1)]);
}

#[test]
fn test_chips_fill_with_accent_or_neutral() {
    let (picker, _) = sizes(&[Size::Small]);
    let body = body_with(ChipsStyle::default(), &picker, 40, Interaction::default());
    let theme = Theme::default();

    let fills: Vec<Option<Color>> = body
        .elements()
        .iter()
        .filter(|e| matches!(e.role, Role::Option(_)))
        .map(|e| e.fill.bg)
        .collect();
    assert_eq!(
        fills,
        vec![Some(theme.accent), Some(theme.neutral), Some(theme.neutral)]
    );
}

#[test]
fn test_chips_wrap_to_width() {
    let (picker, _) = sizes(&[]);

    let wide = body_with(ChipsStyle::default(), &picker, 40, Interaction::default());
    assert_eq!(wide.size().height, 2);

    // " Small " and " Medium " fit in 16 cells, " Large " does not.
    let narrow = body_with(ChipsStyle::default(), &picker, 16, Interaction::default());
    assert_eq!(narrow.option_area(2).map(|a| (a.x, a.y)), Some((0, 3)));
    assert_eq!(narrow.size().height, 4);
}

#[test]
fn test_chips_spacing_is_configurable() {
    let (picker, _) = sizes(&[]);
    let body = body_with(ChipsStyle { spacing: 3 }, &picker, 80, Interaction::default());
    let second = body.option_area(1).map(|a| a.x);
    assert_eq!(second, Some(7 + 3));
}

#[test]
fn test_inline_list_rows_span_offered_width() {
    let (picker, _) = sizes(&[Size::Medium]);
    let body = body_with(InlineListStyle, &picker, 24, Interaction::default());

    for index in 0..3 {
        assert_eq!(body.option_area(index).map(|a| a.width), Some(24));
    }
    assert_eq!(body.hit_test(Position::new(23, 2)), Some(Role::Option(1)));
}

#[test]
fn test_inline_list_never_clips_labels() {
    let (picker, _) = sizes(&[]);
    let body = body_with(InlineListStyle, &picker, 3, Interaction::default());
    // "Medium" plus a gap and the mark column.
    assert_eq!(body.size().width, 8);
}

#[test]
fn test_menu_hides_options_until_expanded() {
    let (picker, _) = sizes(&[Size::Small]);

    let closed = body_with(MenuStyle, &picker, 30, Interaction::default());
    assert_eq!(closed.hit_test(Position::new(0, 0)), Some(Role::Trigger));
    assert_eq!(closed.option_area(0), None);
    assert_eq!(closed.size().height, 1);

    let open = body_with(
        MenuStyle,
        &picker,
        30,
        Interaction {
            highlighted: None,
            expanded: true,
        },
    );
    assert_eq!(open.size().height, 6);
    assert_eq!(open.hit_test(Position::new(0, 2)), Some(Role::Decoration));
    assert_eq!(open.hit_test(Position::new(1, 2)), Some(Role::Option(0)));
    assert_eq!(open.hit_test(Position::new(3, 4)), Some(Role::Option(2)));
}

#[test]
fn test_hit_test_then_toggle_writes_through() {
    let (picker, selection) = sizes(&[]);
    let configuration = picker.configuration();
    let body = body_with(CheckboxStyle, &picker, 30, Interaction::default());

    if let Some(Role::Option(index)) = body.hit_test(Position::new(2, 2)) {
        configuration.options()[index].toggle();
    }

    assert_eq!(selection.get(), HashSet::from([Size::Medium]));
}

#[test]
fn test_custom_style_through_environment() {
    struct CountOnly;

    impl MultiPickerStyle for CountOnly {
        fn make_body(
            &self,
            configuration: &Configuration,
            _context: &StyleContext,
        ) -> multipicker::Body {
            let mut body = multipicker::Body::new();
            body.push(multipicker::Element::text(
                0,
                0,
                Line::from(format!("{} selected", configuration.selected_count())),
                Role::Title,
            ));
            body
        }
    }

    let (picker, _) = sizes(&[Size::Small, Size::Large]);
    let body = body_with(CountOnly, &picker, 30, Interaction::default());
    assert_eq!(body.elements()[0].content.to_string(), "2 selected");
}

#[test]
fn test_each_style_kind_draws_every_option() {
    let configuration = Configuration::new(
        "Letters",
        ["a", "b"]
            .into_iter()
            .map(|l| PickerOption::new(AnyHashable::new(l), move || Line::from(l), false, || {}))
            .collect(),
    );
    let context = StyleContext::new(20).with_interaction(Interaction {
        highlighted: None,
        expanded: true,
    });

    for kind in StyleKind::ALL {
        let style: AnyMultiPickerStyle = kind.into_style();
        let body = style.make_body(&configuration, &context);
        assert!(body.option_area(0).is_some(), "{kind:?} drew option 0");
        assert!(body.option_area(1).is_some(), "{kind:?} drew option 1");
    }
}
