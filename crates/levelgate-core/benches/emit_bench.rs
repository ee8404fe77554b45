use criterion::{black_box, criterion_group, criterion_main, Criterion};
use levelgate_core::{Fields, Logger, MemoryBackend, Severity};

fn bench_emit(c: &mut Criterion) {
    let logger = Logger::with_backend(MemoryBackend::new());
    logger.set_level(Severity::Warn);
    let args = Fields::new().with("peer", "10.0.0.8:3306");

    c.bench_function("emit_suppressed", |b| {
        b.iter(|| {
            logger.debug(
                black_box("proxy"),
                black_box("route"),
                black_box("picked backend"),
                black_box(42),
                &args,
            );
        });
    });

    // The memory backend grows on every accepted call; drain it per batch.
    let backend = std::sync::Arc::new(MemoryBackend::new());
    let accepting = Logger::new(Default::default(), backend.clone());
    c.bench_function("emit_accepted", |b| {
        b.iter(|| {
            accepting.error(
                black_box("proxy"),
                black_box("route"),
                black_box("backend down"),
                black_box(42),
                &args,
            );
            backend.take();
        });
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
