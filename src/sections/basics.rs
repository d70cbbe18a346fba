use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

pub fn creation_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "1. SET CREATION AND BASICS")?;

    writeln!(out, "A HashSet is an unordered collection of unique elements.")?;
    writeln!(out, "Let's explore different ways to create one:\n")?;

    writeln!(out, "1. Creating an empty set:")?;
    let empty: HashSet<i32> = HashSet::new();
    writeln!(out, "   let empty: HashSet<i32> = HashSet::new();  // {}", sorted_display(empty))?;
    writeln!(out, "   The element type must be spelled out somewhere; an empty")?;
    writeln!(out, "   HashSet::new() on its own gives the compiler nothing to infer from.")?;

    writeln!(out, "\n2. Creating a set from an array:")?;
    let fruits = HashSet::from(["apple", "banana", "cherry", "apple"]);
    writeln!(out, "   HashSet::from([\"apple\", \"banana\", \"cherry\", \"apple\"])")?;
    writeln!(out, "   Result: {}  // duplicates silently dropped!", sorted_display(fruits))?;

    writeln!(out, "\n3. Collecting from another collection:")?;
    let numbers_vec = vec![1, 2, 3, 3, 4, 4, 5];
    let numbers_set: HashSet<i32> = numbers_vec.iter().copied().collect();
    writeln!(out, "   let numbers_vec = {:?};", numbers_vec)?;
    writeln!(out, "   let numbers_set: HashSet<i32> = numbers_vec.iter().copied().collect();")?;
    writeln!(out, "   Result: {}", sorted_display(numbers_set))?;

    let chars: HashSet<char> = "hello".chars().collect();
    writeln!(out, "\n   \"hello\".chars().collect() = {}", sorted_display(chars))?;

    writeln!(out, "\n4. Element type requirements:")?;
    writeln!(out, "   HashSet elements must implement Eq + Hash.")?;
    writeln!(out, "   Integers, &str, String, char, bool and tuples of these all qualify;")?;
    writeln!(out, "   f64 does not implement Eq, so a HashSet<f64> will not compile.")?;
    writeln!(out, "   Unlike dynamic languages, one set holds exactly one element type.")?;

    writeln!(out, "\n5. Sets of compound values:")?;
    let pairs: HashSet<(i32, i32)> = HashSet::from([(1, 2), (3, 4), (1, 2)]);
    writeln!(out, "   HashSet::from([(1, 2), (3, 4), (1, 2)]) has {} elements", pairs.len())?;
    writeln!(out, "   Tuples are hashable as long as every field is.")?;

    Ok(())
}

pub fn properties_examples(out: &mut dyn Write) -> Result<()> {
    subsection_header(out, "Set Properties and Characteristics")?;

    let sample: HashSet<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    writeln!(out, "Sample set: {}", sorted_display(sample.iter().copied()))?;

    writeln!(out, "\n1. Unordered collection:")?;
    writeln!(out, "   Iteration order of a HashSet is arbitrary and can change between")?;
    writeln!(out, "   runs. Never rely on it; use a BTreeSet when order matters.")?;

    writeln!(out, "\n2. Unique elements only:")?;
    let duplicates = vec![1, 1, 2, 2, 3, 3];
    let unique: HashSet<i32> = duplicates.iter().copied().collect();
    writeln!(out, "   Original vec: {:?}", duplicates)?;
    writeln!(out, "   As a set:     {}", sorted_display(unique))?;

    writeln!(out, "\n3. Mutable (when the binding is mut):")?;
    let mut mutable: HashSet<i32> = [1, 2, 3].into_iter().collect();
    writeln!(out, "   Original: {}", sorted_display(mutable.iter().copied()))?;
    mutable.insert(4);
    writeln!(out, "   After insert(4): {}", sorted_display(mutable.iter().copied()))?;
    mutable.remove(&1);
    writeln!(out, "   After remove(&1): {}", sorted_display(mutable.iter().copied()))?;

    writeln!(out, "\n4. Not indexed:")?;
    writeln!(out, "   set[0] does not compile; HashSet implements no Index.")?;
    writeln!(out, "   Use contains() for membership testing instead.")?;

    writeln!(out, "\n5. Length and membership:")?;
    writeln!(out, "   sample.len() = {}", sample.len())?;
    writeln!(out, "   sample.contains(&4) = {}", sample.contains(&4))?;
    writeln!(out, "   sample.contains(&10) = {}", sample.contains(&10))?;

    Ok(())
}
