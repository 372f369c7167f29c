use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gamelib::{
    event::KeyCode,
    geom::Rect,
    style::Color,
    testing::{Harness, RecordingCanvas},
    widgets::{AnimatedFill, ButtonGroup, ClickableButton},
};

/// A group of `rows` x `cols` animated buttons with every third one locked.
fn populated(rows: usize, cols: usize) -> ButtonGroup {
    let mut g = ButtonGroup::default();
    for r in 0..rows {
        if r > 0 {
            g.new_line();
        }
        for c in 0..cols {
            let b = ClickableButton::new(Rect::new(
                10.0 + 12.0 * c as f64,
                5.0 + 4.0 * r as f64,
                10.0,
                3.0,
            ))
            .with_label(format!("{r}:{c}"))
            .with_lock((r * cols + c) % 3 == 1)
            .with_visual(AnimatedFill::new(Color::BLUE));
            g.push(b, false);
        }
    }
    g
}

fn bench_frame(c: &mut Criterion) {
    c.bench_function("group_update_10x10", |b| {
        let mut h = Harness::new();
        let mut g = populated(10, 10);
        h.key_down(KeyCode::RIGHT);
        b.iter(|| {
            h.pointer(40.0, 20.0);
            h.frame(|rt| g.update(black_box(rt.input())));
        });
    });

    c.bench_function("group_draw_10x10", |b| {
        let g = populated(10, 10);
        let mut canvas = RecordingCanvas::new();
        b.iter(|| {
            canvas.clear();
            g.draw(Some(&mut canvas))
        });
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
