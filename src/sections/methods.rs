use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

pub fn methods_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "3. SET METHODS")?;

    let mut sample: HashSet<i32> = [1, 2, 3].into_iter().collect();
    writeln!(out, "Starting set: {}", sorted_display(sample.iter().copied()))?;

    subsection_header(out, "Adding Elements")?;

    writeln!(out, "1. insert() adds one element and reports whether it was new:")?;
    let was_new = sample.insert(4);
    writeln!(out, "   insert(4) returned {} -> {}", was_new, sorted_display(sample.iter().copied()))?;
    let was_new = sample.insert(3);
    writeln!(
        out,
        "   insert(3) returned {} -> {}  (already present, no change)",
        was_new,
        sorted_display(sample.iter().copied())
    )?;

    writeln!(out, "\n2. extend() adds many elements at once:")?;
    sample.extend([5, 6, 7]);
    writeln!(out, "   After extend([5, 6, 7]): {}", sorted_display(sample.iter().copied()))?;
    sample.extend([8, 9].into_iter().chain([10, 11]));
    writeln!(
        out,
        "   After extending with a chained iterator: {}",
        sorted_display(sample.iter().copied())
    )?;

    subsection_header(out, "Removing Elements")?;

    writeln!(out, "1. remove() reports whether the element was there:")?;
    let removed = sample.remove(&10);
    writeln!(out, "   remove(&10) returned {} -> {}", removed, sorted_display(sample.iter().copied()))?;
    let removed = sample.remove(&100);
    writeln!(out, "   remove(&100) returned {}  (absent elements are not an error)", removed)?;

    writeln!(out, "\n2. take() removes and hands the element back:")?;
    let taken = sample.take(&11);
    writeln!(out, "   take(&11) = {:?} -> {}", taken, sorted_display(sample.iter().copied()))?;
    let taken = sample.take(&100);
    writeln!(out, "   take(&100) = {:?}  (None instead of a panic)", taken)?;

    writeln!(out, "\n3. retain() keeps only elements matching a predicate:")?;
    sample.retain(|&x| x % 2 == 0);
    writeln!(out, "   After retain(|&x| x % 2 == 0): {}", sorted_display(sample.iter().copied()))?;

    writeln!(out, "\n4. Popping an arbitrary element:")?;
    writeln!(out, "   HashSet has no pop(); grab any element via the iterator, then remove it:")?;
    if let Some(popped) = sample.iter().next().copied() {
        sample.remove(&popped);
        writeln!(out, "   Popped element: {}", popped)?;
        writeln!(out, "   Remaining ({} elements)", sample.len())?;
    }

    writeln!(out, "\n5. clear() removes everything:")?;
    let mut temp: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    writeln!(out, "   Before clear(): {}", sorted_display(temp.iter().copied()))?;
    temp.clear();
    writeln!(out, "   After clear(): {} (is_empty() = {})", sorted_display(temp.iter().copied()), temp.is_empty())?;

    Ok(())
}

pub fn copy_examples(out: &mut dyn Write) -> Result<()> {
    subsection_header(out, "Cloning and Ownership")?;

    let mut original: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    writeln!(out, "Original set: {}", sorted_display(original.iter().copied()))?;

    let cloned = original.clone();
    writeln!(out, "Cloned set:   {}", sorted_display(cloned.iter().copied()))?;

    original.insert(6);
    writeln!(out, "\nAfter inserting 6 into the original:")?;
    writeln!(out, "  Original: {}", sorted_display(original.iter().copied()))?;
    writeln!(out, "  Clone:    {}  (independent storage)", sorted_display(cloned.iter().copied()))?;

    writeln!(out, "\nMoves vs clones:")?;
    writeln!(out, "  let moved = original;   // transfers ownership, original is gone")?;
    writeln!(out, "  let copy = original.clone();  // deep copy, both usable")?;
    writeln!(out, "There is no aliased same-object assignment to be surprised by;")?;
    writeln!(out, "the borrow checker rules out shared mutation at compile time.")?;

    let moved = original;
    writeln!(out, "\nAfter the move, only `moved` is usable: {}", sorted_display(moved.iter().copied()))?;

    Ok(())
}
