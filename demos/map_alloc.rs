//! Prints a csv table of the heap bytes held by many small maps, for OrderedSmallMap vs. HashMap.
//!
//! Column 0 is the number of maps. Every other column is one kind of map with 0, 1 or 2 entries.
extern crate stats_alloc;

use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

use small_collections::OrderedSmallMap;
use std::collections::HashMap;

const MAX_NUM_MAPS: usize = 100_000;
const NUM_INTERVAL: usize = 1000;

trait Populate: Sized {
    fn populate(size: usize) -> Self;
}

impl<const N: usize> Populate for OrderedSmallMap<String, String, N> {
    fn populate(size: usize) -> Self {
        (0..size)
            .map(|i| (format!("key{}", i), format!("value{}", i)))
            .collect()
    }
}

impl Populate for HashMap<String, String> {
    fn populate(size: usize) -> Self {
        (0..size)
            .map(|i| (format!("key{}", i), format!("value{}", i)))
            .collect()
    }
}

/// bytes still allocated after creating `count` maps of `size` entries, including the array holding them
fn persistent_bytes<M: Populate>(count: usize, size: usize) -> isize {
    let reg = Region::new(GLOBAL);
    let maps: Vec<M> = (0..count).map(|_| M::populate(size)).collect();
    let stats = reg.change();
    std::mem::drop(maps);
    stats.bytes_allocated as isize + stats.bytes_reallocated - stats.bytes_deallocated as isize
}

fn column<M: Populate>(size: usize) -> Vec<isize> {
    (0..MAX_NUM_MAPS / NUM_INTERVAL)
        .map(|i| persistent_bytes::<M>(i * NUM_INTERVAL, size))
        .collect()
}

fn main() {
    type Small = OrderedSmallMap<String, String>;
    type Inline = OrderedSmallMap<String, String, 2>;
    type Hash = HashMap<String, String>;
    let columns = vec![
        ("EmptySmallMaps", column::<Small>(0)),
        ("EmptyHashMaps", column::<Hash>(0)),
        ("OneSmallMaps", column::<Small>(1)),
        ("OneInlineSmallMaps", column::<Inline>(1)),
        ("OneHashMaps", column::<Hash>(1)),
        ("PairSmallMaps", column::<Small>(2)),
        ("PairInlineSmallMaps", column::<Inline>(2)),
        ("PairHashMaps", column::<Hash>(2)),
    ];
    let header = columns
        .iter()
        .map(|(name, _)| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(",");
    println!("\"Number of maps\",{}", header);
    for i in 0..MAX_NUM_MAPS / NUM_INTERVAL {
        let row = columns
            .iter()
            .map(|(_, values)| values[i].to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!("{},{}", i * NUM_INTERVAL, row);
    }
}
