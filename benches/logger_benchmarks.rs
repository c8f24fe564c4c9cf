//! Criterion benchmarks for linelog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linelog::prelude::*;
use linelog::Formatter;
use std::sync::Arc;

fn memory_logger(synchronous: bool) -> Logger {
    Logger::builder()
        .synchronous(synchronous)
        .min_level(LogLevel::Debug)
        .queue_capacity(10_000)
        .standard(MemoryAppender::new())
        .error(MemoryAppender::new())
        .build()
        .expect("Failed to build logger")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_sync", |b| {
        b.iter(|| black_box(memory_logger(true)));
    });

    group.bench_function("new_async", |b| {
        b.iter(|| black_box(memory_logger(false)));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(true);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(&[black_box("Info message").into()]));
    });

    group.bench_function("error", |b| {
        b.iter(|| logger.error(&[black_box("Error message").into()]));
    });

    group.finish();
}

fn bench_async_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_logging");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(false);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(&[black_box("Info message").into()]));
    });

    group.bench_function("mixed_parts", |b| {
        b.iter(|| {
            logger.info(&[
                "Transmission completed,".into(),
                "(".into(),
                black_box(0.25).into(),
                "sec".into(),
                ")".into(),
            ])
        });
    });

    group.bench_function("with_timestamps", |b| {
        logger.enable_timestamps(true);
        b.iter(|| logger.info(&[black_box("Stamped message").into()]));
        logger.enable_timestamps(false);
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(memory_logger(false));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.info(&[black_box("Concurrent message").into()]);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let formatter = Formatter::default();
    let rules = SpacingRules::default();

    group.bench_function("format_parts", |b| {
        b.iter(|| {
            formatter.format(
                LogLevel::Info,
                &["Foo ".into(), black_box(100).into(), " \t\t\tfoo foo.".into()],
                None,
            )
        });
    });

    group.bench_function("crush", |b| {
        b.iter(|| rules.crush(black_box("   This    is   \t\ttest ( with , noise )  ")));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = memory_logger(false);
    logger.set_level(LogLevel::Error);

    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(&[black_box("Filtered message").into()]));
    });

    group.bench_function("should_log", |b| {
        b.iter(|| logger.should_log(black_box(LogLevel::Info)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_async_logging,
    bench_concurrent_logging,
    bench_formatting,
    bench_level_filtering,
);
criterion_main!(benches);
