//! Prints a csv table of the heap bytes held by many small sets, for OrderedSmallSet vs. HashSet.
extern crate stats_alloc;

use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

use small_collections::OrderedSmallSet;
use std::collections::HashSet;

struct PlotStats {
    bytes_persistent: isize,
    allocations: usize,
}

impl From<stats_alloc::Stats> for PlotStats {
    fn from(value: stats_alloc::Stats) -> Self {
        Self {
            bytes_persistent: value.bytes_allocated as isize + value.bytes_reallocated
                - value.bytes_deallocated as isize,
            allocations: value.allocations,
        }
    }
}

fn measure<S>(count: usize, size: usize, make: impl Fn(Vec<String>) -> S) -> PlotStats {
    let reg = Region::new(GLOBAL);
    let sets: Vec<S> = (0..count)
        .map(|_| make((0..size).map(|i| format!("value{}", i)).collect()))
        .collect();
    let stats: stats_alloc::Stats = reg.change();
    std::mem::drop(sets);
    stats.into()
}

fn main() {
    let count = 100_000;
    println!("size,\tOrderedSmallSet persistent,\tOrderedSmallSet nalloc,\tOrderedSmallSet<_, 2> persistent,\tOrderedSmallSet<_, 2> nalloc,\tHashSet persistent,\tHashSet nalloc");
    for size in 0..=4 {
        let ss = measure(count, size, |v| v.into_iter().collect::<OrderedSmallSet<_>>());
        let is = measure(count, size, |v| v.into_iter().collect::<OrderedSmallSet<_, 2>>());
        let hs = measure(count, size, |v| v.into_iter().collect::<HashSet<_>>());
        println!(
            "{},\t{},\t{},\t{},\t{},\t{},\t{}",
            size,
            ss.bytes_persistent,
            ss.allocations,
            is.bytes_persistent,
            is.allocations,
            hs.bytes_persistent,
            hs.allocations,
        );
    }
}
