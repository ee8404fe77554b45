//! Counts heap allocations made by the current thread while a suppressed
//! call runs.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use levelgate_core::{Fields, Logger, MemoryBackend, Severity};

struct CountingAlloc;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.with(|count| count.set(count.get() + 1));
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn allocations_during<F: FnOnce()>(f: F) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    f();
    ALLOCATIONS.with(Cell::get) - before
}

#[test]
fn suppressed_calls_do_not_allocate() {
    let logger = Logger::with_backend(MemoryBackend::new());
    logger.set_level(Severity::Error);
    let args = Fields::new();

    let allocated = allocations_during(|| {
        logger.trace("pool", "acquire", "waiting for connection", 11, &args);
        logger.debug("pool", "acquire", "waiting for connection", 11, &args);
        logger.info("pool", "acquire", "waiting for connection", 11, &args);
        logger.warn("pool", "acquire", "waiting for connection", 11, &args);
    });

    assert_eq!(allocated, 0);
}

#[test]
fn accepted_calls_reach_backend() {
    let backend = std::sync::Arc::new(MemoryBackend::new());
    let logger = Logger::new(Default::default(), backend.clone());
    logger.set_level(Severity::Error);

    let allocated = allocations_during(|| {
        logger.error("pool", "acquire", "no connection available", 11, &Fields::new());
    });

    assert!(allocated > 0);
    assert_eq!(backend.len(), 1);
}
