// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_scroll_zoom`: per-event wheel handling and
//! scroll position resolution.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};

use understory_scroll_zoom::{
    AxisExtents, Modifiers, ScrollBaseline, ViewportConfig, ViewportController, ViewportGeometry,
    WheelEvent, anchored_offset, resolve_position_str,
};

fn geometry() -> ViewportGeometry {
    ViewportGeometry {
        view_rect: Rect::new(0.0, 0.0, 1280.0, 720.0),
        content_size: Size::new(4000.0, 3000.0),
        content_start: Size::new(1280.0, 720.0),
        scroll_size: Size::new(6560.0, 4440.0),
    }
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_zoom/wheel");

    group.bench_function("gesture_64_ticks", |b| {
        b.iter_batched(
            || {
                let mut vp = ViewportController::new(ViewportConfig::default());
                vp.set_geometry(geometry());
                vp.set_scroll_offset(Vec2::new(1500.0, 900.0));
                vp
            },
            |mut vp| {
                for i in 0..64 {
                    let effects = vp.on_wheel(&WheelEvent {
                        position: Point::new(640.0 + f64::from(i), 360.0),
                        delta_y: if i % 2 == 0 { -1.0 } else { 0.5 },
                        modifiers: Modifiers::CTRL,
                    });
                    black_box(effects);
                }
                vp.on_pointer_move();
                black_box(vp.scale())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("anchored_offset", |b| {
        let baseline = ScrollBaseline::new(Vec2::new(1500.0, 900.0), 1.0);
        let viewport = Size::new(1280.0, 720.0);
        b.iter(|| {
            black_box(anchored_offset(
                black_box(&baseline),
                black_box(2.5),
                Some(Point::new(300.0, 200.0)),
                viewport,
            ))
        });
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let axis = AxisExtents {
        viewport: 1280.0,
        content: 4000.0,
        content_start: 1280.0,
        scroll: 6560.0,
    };
    let mut group = c.benchmark_group("scroll_zoom/resolve");
    for text in ["center", "content-end", "37.5%", "bogus%"] {
        group.bench_function(text, |b| {
            b.iter(|| black_box(resolve_position_str(black_box(text), &axis)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wheel, bench_resolve);
criterion_main!(benches);
