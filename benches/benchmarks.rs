//! Performance benchmarks for picker layout.
//!
//! Measures the per-frame hot paths:
//! - Flow layout placement
//! - Body construction for each built-in style
//! - Plain-text rendering

use std::collections::HashSet;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::layout::Size;

use multipicker::render::render_plain;
use multipicker::{Binding, Environment, FlowLayout, Interaction, MultiPicker, StyleKind};

fn picker(n: usize) -> MultiPicker<String> {
    let sources: Vec<String> = (0..n).map(|i| format!("Option {i}")).collect();
    let selected: HashSet<String> = sources.iter().step_by(3).cloned().collect();
    MultiPicker::new("Benchmark", sources, Binding::new(selected))
}

/// Benchmark flow layout of 1000 mixed-width items.
fn bench_flow_layout(c: &mut Criterion) {
    let sizes: Vec<Size> = (0..1000u16).map(|i| Size::new(4 + i % 13, 1)).collect();
    let layout = FlowLayout::default();

    c.bench_function("flow_layout_1000", |b| {
        b.iter(|| layout.place(black_box(80), black_box(&sizes)))
    });
}

/// Benchmark body construction for 200 options in every style.
fn bench_make_body(c: &mut Criterion) {
    let picker = picker(200);
    let interaction = Interaction {
        highlighted: Some(10),
        expanded: true,
    };

    for kind in StyleKind::ALL {
        let environment = Environment::new().with_any_multi_picker_style(kind.into_style());
        c.bench_function(&format!("make_body_{kind:?}_200"), |b| {
            b.iter(|| picker.body(black_box(&environment), 80, interaction))
        });
    }
}

/// Benchmark drawing a chips body into text.
fn bench_render_plain(c: &mut Criterion) {
    let environment = Environment::new().with_any_multi_picker_style(StyleKind::Chips.into_style());
    let body = picker(200).body(&environment, 80, Interaction::default());

    c.bench_function("render_plain_chips_200", |b| {
        b.iter(|| render_plain(black_box(&body)))
    });
}

criterion_group!(benches, bench_flow_layout, bench_make_body, bench_render_plain);
criterion_main!(benches);
