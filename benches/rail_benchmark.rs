//! Rail command throughput benchmarks.
//!
//! Verifies that move commands, drag tracking, and glide settling stay
//! cheap even over very wide content strips.
//!
//! Run with: cargo bench --bench rail_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use railview::state::{RailController, RailDirection, Viewport};
use railview::view_state::RailViewport;

/// 10k cards of 26 columns under a 300-column window.
fn wide_viewport() -> RailViewport {
    RailViewport::new(300, 10_000 * 26)
}

fn bench_move_commands(c: &mut Criterion) {
    c.bench_function("move_by_page_burst", |b| {
        b.iter(|| {
            let mut viewport = wide_viewport();
            let mut rail = RailController::new();
            for _ in 0..1_000 {
                rail.move_by(black_box(Some(&mut viewport)), RailDirection::Right);
            }
            viewport.offset()
        })
    });
}

fn bench_drag_sweep(c: &mut Criterion) {
    c.bench_function("drag_column_sweep", |b| {
        b.iter(|| {
            let mut viewport = wide_viewport();
            viewport.scroll_to(50_000, false);
            let mut rail = RailController::new();
            rail.begin_drag(Some(&viewport), 250);
            for column in 0..500u16 {
                rail.update_drag(black_box(Some(&mut viewport)), column);
            }
            rail.end_drag()
        })
    });
}

fn bench_glide_settle(c: &mut Criterion) {
    c.bench_function("glide_settle", |b| {
        b.iter(|| {
            let mut viewport = wide_viewport();
            viewport.scroll_to(black_box(100_000), true);
            let mut frames = 0u32;
            while viewport.tick() {
                frames += 1;
            }
            frames
        })
    });
}

criterion_group!(
    benches,
    bench_move_commands,
    bench_drag_sweep,
    bench_glide_settle
);
criterion_main!(benches);
