#![no_main]

use arbitrary::Arbitrary;
use boxlay_core::event::PointerEvent;
use boxlay_core::geometry::{BoxBounds, Surface};
use boxlay_core::model::{BoxSet, LabeledBox};
use boxlay_runtime::{Editor, InvertPolicy, OverlayConfig};
use boxlay_style::palette::LabelPalette;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Move(i16, i16),
    Down(i16, i16),
    Up(i16, i16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    normalize: bool,
    // (top, left, height, width) in 1/1000ths of the surface; may be negative.
    boxes: Vec<(i16, i16, i16, i16)>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let Some(surface) = Surface::new(f64::from(input.width.max(1)), f64::from(input.height.max(1)))
    else {
        return;
    };
    let boxes: Vec<LabeledBox> = input
        .boxes
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, &(t, l, h, w))| {
            let f = |v: i16| f64::from(v) / 1000.0;
            LabeledBox::new(i.to_string(), format!("l{}", i % 3), BoxBounds::new(f(t), f(l), f(h), f(w)))
        })
        .collect();
    let Ok(set) = BoxSet::new(boxes) else {
        return;
    };
    let policy = if input.normalize { InvertPolicy::Normalize } else { InvertPolicy::Permit };
    let config = OverlayConfig::default().invert_policy(policy);
    let mut editor = Editor::new(surface, set, config, &LabelPalette::default());
    let _ = editor.init();

    for op in input.ops.iter().take(512) {
        let event = match *op {
            Op::Move(x, y) => PointerEvent::moved(f64::from(x), f64::from(y)),
            Op::Down(x, y) => PointerEvent::down(f64::from(x), f64::from(y)),
            Op::Up(x, y) => PointerEvent::up(f64::from(x), f64::from(y)),
        };
        let step = editor.handle(event);
        assert!(editor.state().is_consistent(), "state invariants broken");
        if let Some(commit) = step.commit {
            assert!(matches!(event, PointerEvent::Up(_)), "commit outside Up");
            if input.normalize {
                assert!(!commit.bounds.is_inverted(), "normalize left inverted bounds");
            }
        }
    }
});
