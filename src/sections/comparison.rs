use crate::core::timing::{membership_ratio, time_membership, MEMBERSHIP_ITERATIONS};
use crate::utils::error::Result;
use crate::utils::format::{section_header, subsection_header};
use std::collections::HashSet;
use std::io::Write;
use std::time::Instant;

const COMPARISON_SIZE: usize = 10_000;

pub fn comparison_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "6. HASHSET vs VEC vs BOXED SLICE")?;

    subsection_header(out, "Construction Time")?;
    writeln!(
        out,
        "Building three collections from the same {} integers.",
        COMPARISON_SIZE
    )?;
    writeln!(out, "Numbers below are wall-clock and vary per machine; treat them")?;
    writeln!(out, "as illustration, not as a benchmark.")?;

    let start = Instant::now();
    let vec: Vec<i64> = (0..COMPARISON_SIZE as i64).collect();
    let vec_build = start.elapsed();

    let start = Instant::now();
    let set: HashSet<i64> = (0..COMPARISON_SIZE as i64).collect();
    let set_build = start.elapsed();

    let start = Instant::now();
    let boxed: Box<[i64]> = (0..COMPARISON_SIZE as i64).collect();
    let boxed_build = start.elapsed();

    writeln!(out, "  Vec<i64>:      {:?}", vec_build)?;
    writeln!(out, "  HashSet<i64>:  {:?}  (hashing costs extra up front)", set_build)?;
    writeln!(out, "  Box<[i64]>:    {:?}", boxed_build)?;

    subsection_header(out, "Membership Testing")?;

    let needle = COMPARISON_SIZE as i64 - 1; // worst case for a linear scan
    writeln!(
        out,
        "Searching for {} ({} iterations each):",
        needle, MEMBERSHIP_ITERATIONS
    )?;

    let vec_elapsed = time_membership(|| vec.contains(&needle), MEMBERSHIP_ITERATIONS);
    let set_elapsed = time_membership(|| set.contains(&needle), MEMBERSHIP_ITERATIONS);
    let boxed_elapsed = time_membership(|| boxed.contains(&needle), MEMBERSHIP_ITERATIONS);

    writeln!(out, "  Vec (linear scan):   {:?}", vec_elapsed)?;
    writeln!(out, "  HashSet (hashed):    {:?}", set_elapsed)?;
    writeln!(out, "  Boxed slice (scan):  {:?}", boxed_elapsed)?;

    match membership_ratio(vec_elapsed, set_elapsed) {
        Some(ratio) => writeln!(out, "  Vec took {:.1}x as long as the HashSet here.", ratio)?,
        None => writeln!(out, "  HashSet time was below clock resolution; no ratio to report.")?,
    }

    subsection_header(out, "Use Case Recommendations")?;

    writeln!(out, "When to use a HashSet:")?;
    writeln!(out, "  - unique elements only")?;
    writeln!(out, "  - fast membership testing")?;
    writeln!(out, "  - mathematical set operations")?;
    writeln!(out, "  - order does not matter")?;
    writeln!(out, "\nWhen to use a Vec:")?;
    writeln!(out, "  - ordered collection, duplicates allowed")?;
    writeln!(out, "  - indexing and slicing")?;
    writeln!(out, "  - growth and in-place sorting")?;
    writeln!(out, "\nWhen to use a boxed slice (Box<[T]>):")?;
    writeln!(out, "  - fixed-length ordered data that never grows")?;
    writeln!(out, "  - shaving the capacity field off a Vec you will not resize")?;

    Ok(())
}
