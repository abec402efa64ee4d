pub mod counter;
pub mod env;

pub use counter::*;

/// Sums the `store_add` and `store_inc` results, then loads and stores against the sum.
pub fn run() -> i32 {
    let mut value = 0;

    let added = store_add(N);
    log::debug!("store_add({}) -> {}", N, added);
    value += added;

    let incremented = store_inc(N);
    log::debug!("store_inc({}) -> {}", N, incremented);
    value += incremented;

    load_only(value, N);
    store_then_load(value, N);
    log::debug!("load_only and store_then_load done with {}", value);

    value
}
