use std::{
    cell::Cell,
    hint::black_box,
    marker::PhantomData,
    sync::atomic::{AtomicI32, Ordering},
};

/// Loop count used by the entry point.
pub const N: i32 = 100;

/// A 32-bit counter stored in an `AtomicI32`.
///
/// The atomic is only there to measure the cost of the instructions. A counter
/// is never shared: it is `Send` but not `Sync`, so one counter has a single
/// writer and a single reader at any time.
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<atomic_cost::Counter>();
/// ```
///
/// ```
/// fn assert_send<T: Send>() {}
/// assert_send::<atomic_cost::Counter>();
/// ```
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI32,
    marker: PhantomData<Cell<()>>,
}

impl Counter {
    pub const fn new(value: i32) -> Self {
        Self {
            value: AtomicI32::new(value),
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn store(&self, value: i32) {
        self.value.store(value, Ordering::SeqCst);
    }

    #[inline]
    pub fn load(&self) -> i32 {
        self.value.load(Ordering::SeqCst)
    }

    /// Plain read of the current value, not part of what is measured.
    #[inline]
    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> i32 {
        self.value.into_inner()
    }
}

/// Stores the constant `1` `n` times.
pub fn store_const(n: i32) -> i32 {
    let counter = Counter::new(0);

    for _ in 0..n {
        counter.store(1);
    }

    counter.into_inner()
}

/// Stores `i + 1` for every `i` in `0..n`; the last write wins, so the result is `n`.
pub fn store_add(n: i32) -> i32 {
    let counter = Counter::new(0);

    for i in 0..n {
        counter.store(i + 1);
    }

    counter.into_inner()
}

/// Stores `counter + 1` `n` times.
///
/// Only the store is atomic. The read of the current value and the store are two
/// separate operations with no compare-and-swap between them, so this is not an
/// increment that concurrent writers could use. It returns `n` because the counter
/// is local to the call.
pub fn store_inc(n: i32) -> i32 {
    let counter = Counter::new(0);

    for _ in 0..n {
        counter.store(counter.get() + 1);
    }

    counter.into_inner()
}

/// Loop baseline: iterates `n` times and leaves the counter untouched.
pub fn empty(n: i32) -> i32 {
    let counter = Counter::new(0);

    for i in 0..n {
        black_box(i);
    }

    counter.into_inner()
}

pub fn load_only(value: i32, n: i32) {
    let counter = Counter::new(value);

    for _ in 0..n {
        black_box(counter.load());
    }
}

pub fn store_then_load(value: i32, n: i32) {
    let counter = Counter::new(value);

    for _ in 0..n {
        counter.store(1);
        black_box(counter.load());
    }
}
