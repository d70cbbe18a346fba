use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::{BTreeSet, HashSet};
use std::io::Write;

pub fn iteration_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "5. SET ITERATION TECHNIQUES")?;

    let fruits: HashSet<&str> = ["apple", "banana", "cherry", "date", "elderberry"]
        .into_iter()
        .collect();
    let numbers: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();

    writeln!(out, "Fruit set:   {}", sorted_display(fruits.iter().copied()))?;
    writeln!(out, "Numbers set: {}", sorted_display(numbers.iter().copied()))?;

    subsection_header(out, "Basic Iteration")?;

    // Iterate a sorted copy so the narration is reproducible.
    let in_order: BTreeSet<&str> = fruits.iter().copied().collect();

    writeln!(out, "1. Plain for loop (order shown via a BTreeSet copy):")?;
    for fruit in &in_order {
        writeln!(out, "   {}", fruit)?;
    }

    writeln!(out, "\n2. enumerate() (remember: HashSet order is arbitrary):")?;
    for (i, fruit) in in_order.iter().enumerate() {
        writeln!(out, "   {}: {}", i, fruit)?;
    }

    subsection_header(out, "Conditional Iteration")?;

    writeln!(out, "3. Filtering inside the loop:")?;
    for fruit in &in_order {
        if fruit.len() > 5 {
            writeln!(out, "   Long fruit: {}", fruit)?;
        }
    }

    writeln!(out, "\n4. Filtering into a Vec:")?;
    let mut long_fruits: Vec<&str> = fruits.iter().copied().filter(|f| f.len() > 5).collect();
    long_fruits.sort();
    writeln!(out, "   Long fruits: {:?}", long_fruits)?;

    subsection_header(out, "Aggregation")?;

    writeln!(out, "5. Numeric folds work directly on the iterator:")?;
    let total: i32 = numbers.iter().sum();
    writeln!(out, "   Sum of numbers: {}", total)?;

    let mut squared: Vec<i32> = numbers.iter().map(|x| x * x).collect();
    squared.sort();
    writeln!(out, "   Squared: {:?}", squared)?;

    writeln!(out, "\n6. map() and filter() adapters:")?;
    let mut doubled: Vec<i32> = numbers.iter().map(|x| x * 2).collect();
    doubled.sort();
    writeln!(out, "   Doubled: {:?}", doubled)?;

    let mut evens: Vec<i32> = numbers.iter().copied().filter(|x| x % 2 == 0).collect();
    evens.sort();
    writeln!(out, "   Evens:   {:?}", evens)?;

    Ok(())
}
