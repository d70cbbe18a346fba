use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::Write;

pub fn frozen_set_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "8. FROZEN SETS")?;

    writeln!(out, "Rust has no separate frozenset type; immutability comes from the")?;
    writeln!(out, "binding. A set bound without `mut` cannot be modified, and a")?;
    writeln!(out, "BTreeSet additionally implements Hash and Ord, so it can serve as")?;
    writeln!(out, "a key in a map or as an element of another set.")?;

    subsection_header(out, "Immutability by Binding")?;

    let frozen: BTreeSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    writeln!(out, "let frozen: BTreeSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();")?;
    writeln!(out, "frozen = {:?}", frozen)?;
    writeln!(out, "frozen.insert(6) does not compile: the binding is not mut.")?;
    writeln!(out, "That is a compile-time guarantee, not a runtime check.")?;

    subsection_header(out, "Frozen Set Operations")?;

    let fs1: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let fs2: BTreeSet<i32> = [3, 4, 5, 6].into_iter().collect();

    writeln!(out, "fs1 = {:?}", fs1)?;
    writeln!(out, "fs2 = {:?}", fs2)?;
    writeln!(out, "Union:                {:?}", &fs1 | &fs2)?;
    writeln!(out, "Intersection:         {:?}", &fs1 & &fs2)?;
    writeln!(out, "Difference:           {:?}", &fs1 - &fs2)?;
    writeln!(out, "Symmetric difference: {:?}", &fs1 ^ &fs2)?;
    writeln!(out, "Every operator builds a brand-new set; the operands are untouched.")?;

    subsection_header(out, "Sets as Map Keys")?;

    let mut coordinates: HashMap<BTreeSet<char>, (i32, i32)> = HashMap::new();
    coordinates.insert(['x', 'y'].into_iter().collect(), (10, 20));
    coordinates.insert(['z', 'w'].into_iter().collect(), (30, 40));

    let key: BTreeSet<char> = ['x', 'y'].into_iter().collect();
    writeln!(out, "HashMap<BTreeSet<char>, (i32, i32)> with two entries.")?;
    writeln!(out, "Value for {:?}: {:?}", key, coordinates.get(&key))?;
    writeln!(out, "(A HashSet cannot be a key: it does not implement Hash itself.)")?;

    subsection_header(out, "Sets of Sets")?;

    let mut families: HashSet<BTreeSet<i32>> = HashSet::new();
    families.insert([1, 2].into_iter().collect());
    families.insert([3, 4].into_iter().collect());
    families.insert([1, 2].into_iter().collect()); // duplicate inner set

    writeln!(out, "Inserted {{1, 2}}, {{3, 4}}, {{1, 2}} -> {} distinct inner sets", families.len())?;

    subsection_header(out, "Deriving New Sets")?;

    let addition: BTreeSet<i32> = [6, 7].into_iter().collect();
    let extended = &frozen | &addition;
    writeln!(out, "Original: {:?}", frozen)?;
    writeln!(out, "Extended: {}", sorted_display(extended))?;
    writeln!(out, "The original stays frozen; growth happens in a fresh set.")?;

    Ok(())
}
