//! Wall-clock probes behind the comparison and performance sections.
//!
//! Everything here is illustrative rather than benchmark-grade: timings are
//! environment-dependent, small inputs are dominated by measurement overhead,
//! and the footprint numbers sample a handful of elements instead of walking
//! the allocator. The sections that print these numbers say so.

use std::collections::HashSet;
use std::mem;
use std::time::{Duration, Instant};
use sysinfo::{RefreshKind, System};

pub const SAMPLE_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];
pub const MEMBERSHIP_ITERATIONS: u32 = 1_000;
pub const FOOTPRINT_SAMPLE: usize = 10;

/// Container header plus per-element size for at most [`FOOTPRINT_SAMPLE`]
/// elements. Deliberately approximate bookkeeping.
pub fn approximate_footprint<'a, T: 'a, I>(base: usize, elements: I) -> usize
where
    I: IntoIterator<Item = &'a T>,
{
    base + elements
        .into_iter()
        .take(FOOTPRINT_SAMPLE)
        .map(|e| mem::size_of_val(e))
        .sum::<usize>()
}

/// Approximate footprints of the three collection shapes built from the same
/// integer range.
pub struct FootprintReport {
    pub size: usize,
    pub vec_bytes: usize,
    pub set_bytes: usize,
    pub boxed_bytes: usize,
}

pub fn footprint_report(size: usize) -> FootprintReport {
    let vec: Vec<i64> = (0..size as i64).collect();
    let set: HashSet<i64> = (0..size as i64).collect();
    let boxed: Box<[i64]> = (0..size as i64).collect();

    FootprintReport {
        size,
        vec_bytes: approximate_footprint(mem::size_of::<Vec<i64>>(), &vec),
        set_bytes: approximate_footprint(mem::size_of::<HashSet<i64>>(), &set),
        boxed_bytes: approximate_footprint(mem::size_of::<Box<[i64]>>(), boxed.iter()),
    }
}

/// Runs `probe` the requested number of times and reports elapsed wall-clock
/// time. The probe must not mutate what it measures; callers pass a borrowed
/// `contains` check.
pub fn time_membership<F>(mut probe: F, iterations: u32) -> Duration
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(probe());
    }
    start.elapsed()
}

/// Vec-side duration divided by set-side duration. `None` when the set side
/// measured as zero, which does happen below clock resolution.
pub fn membership_ratio(vec_elapsed: Duration, set_elapsed: Duration) -> Option<f64> {
    if set_elapsed.is_zero() {
        None
    } else {
        Some(vec_elapsed.as_secs_f64() / set_elapsed.as_secs_f64())
    }
}

/// Resident memory of this process in megabytes, as supplementary context for
/// the performance section. `None` when the platform refuses to say.
pub fn process_memory_mb() -> Option<u64> {
    let mut system = System::new_with_specifics(RefreshKind::everything());
    system.refresh_all();
    let pid = sysinfo::get_current_pid().ok()?;
    let process = system.process(pid)?;
    Some(process.memory() / 1024 / 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_counts_base_plus_sampled_elements() {
        let vec: Vec<i64> = (0..100).collect();
        let expected = mem::size_of::<Vec<i64>>() + FOOTPRINT_SAMPLE * mem::size_of::<i64>();
        assert_eq!(approximate_footprint(mem::size_of::<Vec<i64>>(), &vec), expected);
    }

    #[test]
    fn footprint_sample_is_capped_for_small_collections() {
        let vec: Vec<i64> = (0..3).collect();
        let expected = mem::size_of::<Vec<i64>>() + 3 * mem::size_of::<i64>();
        assert_eq!(approximate_footprint(mem::size_of::<Vec<i64>>(), &vec), expected);
    }

    #[test]
    fn membership_timer_runs_exactly_the_requested_iterations() {
        let mut calls = 0u32;
        let set: HashSet<i64> = (0..10).collect();
        time_membership(
            || {
                calls += 1;
                set.contains(&9)
            },
            MEMBERSHIP_ITERATIONS,
        );
        assert_eq!(calls, MEMBERSHIP_ITERATIONS);
    }

    #[test]
    fn ratio_is_vec_over_set() {
        let ratio = membership_ratio(Duration::from_micros(500), Duration::from_micros(50));
        assert!((ratio.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_guards_against_zero_set_duration() {
        assert_eq!(membership_ratio(Duration::from_micros(500), Duration::ZERO), None);
    }
}
