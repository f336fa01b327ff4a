//! Timing and allocation measurement for a single strategy.

use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::config::InputSize;
use crate::sequence::InputSequence;
use crate::strategy::Strategy;

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// System allocator that counts every allocation, process-wide.
///
/// Only takes effect when installed with `#[global_allocator]`; otherwise
/// every [`Measurement`] reports zero allocations.
pub struct CountingAllocator;

impl CountingAllocator {
    fn record(size: usize) {
        ALLOCATED_BYTES.fetch_add(size as u64, Ordering::Relaxed);
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        Self::record(layout.size());
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        Self::record(layout.size());
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        Self::record(new_size);
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationSnapshot {
    pub bytes: u64,
    pub count: u64,
}

impl AllocationSnapshot {
    pub fn take() -> Self {
        Self {
            bytes: ALLOCATED_BYTES.load(Ordering::Relaxed),
            count: ALLOCATIONS.load(Ordering::Relaxed),
        }
    }

    /// Allocations made between `earlier` and `self`.
    pub fn since(self, earlier: Self) -> Self {
        Self {
            bytes: self.bytes.saturating_sub(earlier.bytes),
            count: self.count.saturating_sub(earlier.count),
        }
    }
}

/// Timing and allocation totals for one (strategy, size) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub size: InputSize,
    pub iterations: u64,
    pub elapsed: Duration,
    pub allocated_bytes: u64,
    pub allocations: u64,
}

impl Measurement {
    pub fn mean(&self) -> Duration {
        let iterations = u32::try_from(self.iterations.max(1)).unwrap_or(u32::MAX);
        self.elapsed / iterations
    }

    pub fn nanos_per_op(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iterations.max(1) as f64
    }

    pub fn bytes_per_op(&self) -> f64 {
        self.allocated_bytes as f64 / self.iterations.max(1) as f64
    }
}

/// Runs `strategy` over `items` `iterations` times with a no-op body.
pub fn measure(
    strategy: Strategy,
    items: &InputSequence,
    size: InputSize,
    iterations: u64,
) -> Measurement {
    let visit = |item: i32| {
        black_box(item);
    };

    // Warmup
    let warmup = std::cmp::min(iterations / 10, 10);
    for _ in 0..warmup {
        strategy.run(black_box(items), visit);
    }

    let before = AllocationSnapshot::take();
    let start = Instant::now();
    for _ in 0..iterations {
        strategy.run(black_box(items), visit);
    }
    let elapsed = start.elapsed();
    let allocated = AllocationSnapshot::take().since(before);

    Measurement {
        strategy,
        size,
        iterations,
        elapsed,
        allocated_bytes: allocated.bytes,
        allocations: allocated.count,
    }
}
