//! Benchmarks for the interaction engine hot paths.
//!
//! Run with: cargo bench -p shiftlist

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shiftlist::mapper;
use shiftlist::{
    InteractionEngine, ListAdapter, ListViewport, PointerEvent, RectF, RowSnapshot, Vec2,
    autoscroll,
};
use shiftlist_core::velocity::VelocityTracker;
use std::hint::black_box;
use std::time::Duration;

const ROW_H: f32 = 40.0;

// ============================================================================
// Fixtures
// ============================================================================

struct BenchList;

impl ListAdapter for BenchList {
    fn count(&self) -> usize {
        10_000
    }

    fn hide_position(&mut self, _index: usize) {}

    fn show_position(&mut self, _index: usize) {}

    fn set_placeholder_height(&mut self, _height: f32) {}

    fn section_of(&self, index: usize) -> usize {
        index / 100
    }

    fn start_index_of(&self, section: usize) -> usize {
        section * 100
    }

    fn header_height(&self, _section: usize) -> Option<f32> {
        Some(24.0)
    }

    fn move_item(&mut self, _from: usize, _to: usize) {}
}

struct NullSnapshot;

impl RowSnapshot for NullSnapshot {
    fn size(&self) -> Vec2 {
        Vec2::new(320.0, ROW_H)
    }
}

struct BenchViewport {
    first_visible: usize,
}

impl ListViewport for BenchViewport {
    fn first_visible(&self) -> usize {
        self.first_visible
    }

    fn last_visible(&self) -> usize {
        self.first_visible + 11
    }

    fn hit_test(&self, position: Vec2) -> Option<usize> {
        let slot = (position.y.max(0.0) / ROW_H) as usize;
        (slot < 12).then_some(self.first_visible + slot)
    }

    fn child_frame(&self, slot: usize) -> Option<RectF> {
        (slot < 12).then(|| RectF::new(0.0, slot as f32 * ROW_H, 320.0, ROW_H))
    }

    fn set_child_height(&mut self, _slot: usize, _height: f32) {}

    fn capture_snapshot(&mut self, _slot: usize) -> Option<Box<dyn RowSnapshot>> {
        Some(Box::new(NullSnapshot))
    }

    fn smooth_scroll_by(&mut self, _delta: f32, _duration: Duration) {}
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Pointer path
// ============================================================================

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/pointer_move");

    let mut engine = InteractionEngine::default();
    engine.on_size_changed(320.0, 480.0);
    let mut list = BenchList;
    let mut vp = BenchViewport { first_visible: 0 };
    engine.on_pointer_down(PointerEvent::down(10.0, 130.0, ms(0)), &mut list, &mut vp);

    let mut t = 0u64;
    group.bench_function("tracking", |b| {
        b.iter(|| {
            t += 8;
            let y = 140.0 + (t % 300) as f32;
            black_box(engine.on_pointer_move(
                PointerEvent::moved(10.0, y, ms(t)),
                &mut list,
                &mut vp,
            ));
        })
    });

    group.finish();
}

fn bench_full_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/full_drag");

    group.bench_function("open_move_release_settle", |b| {
        b.iter(|| {
            let mut engine = InteractionEngine::default();
            engine.on_size_changed(320.0, 480.0);
            let mut list = BenchList;
            let mut vp = BenchViewport { first_visible: 0 };
            engine.on_pointer_down(PointerEvent::down(10.0, 130.0, ms(0)), &mut list, &mut vp);
            for i in 1..=10u64 {
                engine.on_pointer_move(
                    PointerEvent::moved(10.0, 130.0 + i as f32 * 24.0, ms(i * 8)),
                    &mut list,
                    &mut vp,
                );
            }
            engine.on_pointer_up(PointerEvent::up(10.0, 370.0, ms(96)), &mut vp);
            while engine.is_animating() {
                engine.tick(ms(16), &mut list, &mut vp);
            }
            black_box(engine.is_dragging());
        })
    });

    group.finish();
}

// ============================================================================
// Leaf components
// ============================================================================

fn bench_index_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/index_at");

    for original in [5usize, 500, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(original),
            &original,
            |b, &original| {
                let mut raw = 0usize;
                b.iter(|| {
                    raw = (raw + 7) % 10_000;
                    black_box(mapper::index_at(Some(raw), original));
                })
            },
        );
    }

    group.finish();
}

fn bench_autoscroll_delta(c: &mut Criterion) {
    c.bench_function("autoscroll/scroll_delta", |b| {
        let mut y = 0.0f32;
        b.iter(|| {
            y = (y + 17.0) % 480.0;
            black_box(autoscroll::scroll_delta(y, 480.0, true, true));
        })
    });
}

fn bench_velocity_estimate(c: &mut Criterion) {
    c.bench_function("velocity/add_and_estimate", |b| {
        let mut tracker = VelocityTracker::new();
        let mut t = 0u64;
        b.iter(|| {
            t += 8;
            tracker.add(ms(t), Vec2::new((t % 320) as f32, (t % 480) as f32));
            black_box(tracker.velocity(ms(10)));
        })
    });
}

fn bench_sticky_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/scroll_changed");

    let mut engine = InteractionEngine::default();
    engine.on_size_changed(320.0, 480.0);
    let list = BenchList;
    let mut fv = 0usize;
    group.bench_function("sticky_header", |b| {
        b.iter(|| {
            fv = (fv + 1) % 9_900;
            let vp = BenchViewport { first_visible: fv };
            black_box(engine.on_scroll_changed(fv, &list, &vp));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pointer_move,
    bench_full_drag,
    bench_index_mapping,
    bench_autoscroll_delta,
    bench_velocity_estimate,
    bench_sticky_scroll,
);

criterion_main!(benches);
