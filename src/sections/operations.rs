use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

pub fn operations_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "2. SET OPERATIONS")?;

    let set_a: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    let set_b: HashSet<i32> = [4, 5, 6, 7, 8].into_iter().collect();
    let set_c: HashSet<i32> = [1, 3, 5, 7, 9].into_iter().collect();

    writeln!(out, "Sample sets:")?;
    writeln!(out, "set_a = {}", sorted_display(set_a.iter().copied()))?;
    writeln!(out, "set_b = {}", sorted_display(set_b.iter().copied()))?;
    writeln!(out, "set_c = {}", sorted_display(set_c.iter().copied()))?;

    subsection_header(out, "Union")?;
    writeln!(out, "Union combines all unique elements from both sets.")?;

    let union_op = &set_a | &set_b;
    writeln!(out, "&set_a | &set_b = {}", sorted_display(union_op))?;

    let union_iter: HashSet<i32> = set_a.union(&set_b).copied().collect();
    writeln!(out, "set_a.union(&set_b) = {}", sorted_display(union_iter))?;
    writeln!(out, "(union() returns a lazy iterator; collect it or loop over it)")?;

    let union_three = &(&set_a | &set_b) | &set_c;
    writeln!(out, "&(&set_a | &set_b) | &set_c = {}", sorted_display(union_three))?;

    subsection_header(out, "Intersection")?;
    writeln!(out, "Intersection keeps the elements present in both sets.")?;

    let intersection_op = &set_a & &set_b;
    writeln!(out, "&set_a & &set_b = {}", sorted_display(intersection_op))?;

    let intersection_iter: HashSet<i32> = set_a.intersection(&set_b).copied().collect();
    writeln!(out, "set_a.intersection(&set_b) = {}", sorted_display(intersection_iter))?;

    let intersection_three = &(&set_a & &set_b) & &set_c;
    writeln!(out, "&(&set_a & &set_b) & &set_c = {}", sorted_display(intersection_three))?;

    subsection_header(out, "Difference")?;
    writeln!(out, "Difference keeps the elements of the first set missing from the second.")?;

    let difference_op = &set_a - &set_b;
    writeln!(out, "&set_a - &set_b = {}", sorted_display(difference_op))?;

    let difference_iter: HashSet<i32> = set_a.difference(&set_b).copied().collect();
    writeln!(out, "set_a.difference(&set_b) = {}", sorted_display(difference_iter))?;

    let reverse = &set_b - &set_a;
    writeln!(out, "&set_b - &set_a = {}  // not symmetric", sorted_display(reverse))?;

    subsection_header(out, "Symmetric Difference")?;
    writeln!(out, "Symmetric difference keeps elements in exactly one of the two sets.")?;

    let sym_op = &set_a ^ &set_b;
    writeln!(out, "&set_a ^ &set_b = {}", sorted_display(sym_op))?;

    let sym_iter: HashSet<i32> = set_a.symmetric_difference(&set_b).copied().collect();
    writeln!(out, "set_a.symmetric_difference(&set_b) = {}", sorted_display(sym_iter))?;

    Ok(())
}

pub fn comparison_examples(out: &mut dyn Write) -> Result<()> {
    subsection_header(out, "Set Comparison Operations")?;

    let set1: HashSet<i32> = [1, 2, 3].into_iter().collect();
    let set2: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    let set3: HashSet<i32> = [3, 4, 5].into_iter().collect();
    let set4: HashSet<i32> = [1, 2, 3].into_iter().collect();

    writeln!(out, "set1 = {}", sorted_display(set1.iter().copied()))?;
    writeln!(out, "set2 = {}", sorted_display(set2.iter().copied()))?;
    writeln!(out, "set3 = {}", sorted_display(set3.iter().copied()))?;
    writeln!(out, "set4 = {}", sorted_display(set4.iter().copied()))?;

    writeln!(out, "\n1. Equality (element-wise, order never matters):")?;
    writeln!(out, "   set1 == set4: {}", set1 == set4)?;
    writeln!(out, "   set1 == set2: {}", set1 == set2)?;

    writeln!(out, "\n2. Subset checks:")?;
    writeln!(out, "   set1.is_subset(&set2): {}", set1.is_subset(&set2))?;
    writeln!(
        out,
        "   set1.is_subset(&set4): {}  // equal sets are subsets of each other",
        set1.is_subset(&set4)
    )?;
    writeln!(
        out,
        "   proper subset: set1.is_subset(&set2) && set1 != set2: {}",
        set1.is_subset(&set2) && set1 != set2
    )?;

    writeln!(out, "\n3. Superset checks:")?;
    writeln!(out, "   set2.is_superset(&set1): {}", set2.is_superset(&set1))?;
    writeln!(
        out,
        "   proper superset: set2.is_superset(&set1) && set2 != set1: {}",
        set2.is_superset(&set1) && set2 != set1
    )?;

    writeln!(out, "\n4. Disjoint sets:")?;
    let disjoint1: HashSet<i32> = [1, 2].into_iter().collect();
    let disjoint2: HashSet<i32> = [3, 4].into_iter().collect();
    writeln!(out, "   disjoint1 = {}", sorted_display(disjoint1.iter().copied()))?;
    writeln!(out, "   disjoint2 = {}", sorted_display(disjoint2.iter().copied()))?;
    writeln!(
        out,
        "   disjoint1.is_disjoint(&disjoint2): {}",
        disjoint1.is_disjoint(&disjoint2)
    )?;
    writeln!(out, "   set1.is_disjoint(&set3): {}", set1.is_disjoint(&set3))?;

    Ok(())
}
