//! Benchmarks for candidate filtering and list placement
//!
//! Run with: cargo bench suggestions

use taghelper::config::ListConfig;
use taghelper::geometry::{Rect, Size};
use taghelper::store::{TagSet, TagStore};
use taghelper::suggestions::{matching_candidates, place};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn store(count: usize) -> TagSet {
    (0..count).map(|i| format!("tag-{:05}-Project", i)).collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn filter_common_query(bencher: divan::Bencher, count: usize) {
    let tags = store(count).list();
    bencher.bench_local(|| divan::black_box(matching_candidates(&tags, "proj", 20)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn filter_rare_query(bencher: divan::Bencher, count: usize) {
    let tags = store(count).list();
    bencher.bench_local(|| divan::black_box(matching_candidates(&tags, "00042", 20)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn list_sorted_tags(bencher: divan::Bencher, count: usize) {
    let tags = store(count);
    bencher.bench_local(|| divan::black_box(tags.list()));
}

#[divan::bench]
fn place_near_viewport_corner() -> Rect {
    place(
        divan::black_box(Rect::anchor(1250.0, 790.0)),
        20,
        Size::new(1280.0, 800.0),
        &ListConfig::default(),
    )
}
