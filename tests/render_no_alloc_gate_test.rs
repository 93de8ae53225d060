use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use block_drop::term::{encode_diff_into, encode_full_into, Cell, CellStyle, FrameBuffer, Rgb};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn diff_encoding_is_allocation_free_after_warmup() {
    let prev = FrameBuffer::new(40, 20);
    let mut next = FrameBuffer::new(40, 20);
    let style = CellStyle::new(Rgb::new(0, 255, 0), Rgb::new(0, 0, 0));
    // One changed cell per row, each its own run.
    for y in 0..20 {
        next.set(y * 2, y, Cell { ch: '█', style });
    }

    // Warm-up: a full redraw is larger than any diff, so it sizes the buffer.
    let mut out = Vec::new();
    encode_full_into(&next, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
        }
    });

    assert_eq!(allocs, 0);
    assert!(!out.is_empty());
}
