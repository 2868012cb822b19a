#![allow(clippy::all)]

//! Dispatcher Benchmarks
//!
//! Benchmarks for handler registration, identity lookups, and dispatch fan-out.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use herald::prelude::*;
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

struct CountingHandler {
    count: AtomicU64,
}

impl EventHandler for CountingHandler {
    fn handle(&self, _event: &dyn Event) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

fn handlers(n: usize) -> Vec<Arc<dyn EventHandler>> {
    (0..n)
        .map(|_| {
            Arc::new(CountingHandler {
                count: AtomicU64::new(0),
            }) as Arc<dyn EventHandler>
        })
        .collect()
}

fn quiet_dispatcher() -> EventDispatcher {
    EventDispatcher::builder().enable_logging(false).build()
}

// =============================================================================
// Registration Benchmarks
// =============================================================================

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    for size in [1usize, 16, 128] {
        group.bench_with_input(BenchmarkId::new("register", size), &size, |b, &size| {
            b.iter_batched(
                || (quiet_dispatcher(), handlers(size)),
                |(dispatcher, handlers)| {
                    for handler in handlers {
                        dispatcher.register("bench", handler).unwrap();
                    }
                    dispatcher
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    let dispatcher = quiet_dispatcher();
    let registered = handlers(128);
    for handler in &registered {
        dispatcher.register("bench", handler.clone()).unwrap();
    }
    let last = registered.last().unwrap().clone();

    group.bench_function("has_last_of_128", |b| {
        b.iter(|| black_box(dispatcher.has("bench", &last)))
    });

    group.bench_function("duplicate_rejected", |b| {
        b.iter(|| black_box(dispatcher.register("bench", last.clone()).is_err()))
    });

    group.finish();
}

// =============================================================================
// Dispatch Benchmarks
// =============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let event = GenericEvent::new("bench", 42u64);

    for size in [0usize, 1, 16, 128] {
        let dispatcher = quiet_dispatcher();
        for handler in handlers(size) {
            dispatcher.register("bench", handler).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("fan_out", size), &size, |b, _| {
            b.iter(|| dispatcher.dispatch(black_box(&event)))
        });
    }

    let dispatcher = quiet_dispatcher();
    group.bench_function("unregistered_name", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&event)))
    });

    group.finish();
}

criterion_group!(benches, bench_registration, bench_dispatch);
criterion_main!(benches);
