use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

/// Order-preserving dedup: first occurrence wins.
fn dedup_preserving_order(seq: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    seq.iter().copied().filter(|&x| seen.insert(x)).collect()
}

pub fn advanced_techniques(out: &mut dyn Write) -> Result<()> {
    section_header(out, "7. ADVANCED SET TECHNIQUES")?;

    subsection_header(out, "Removing Duplicates from Sequences")?;

    let original = vec![1, 3, 2, 3, 1, 4, 2, 5];
    writeln!(out, "Original: {:?}", original)?;

    let unique_simple: HashSet<i32> = original.iter().copied().collect();
    writeln!(
        out,
        "Method 1 - collect into a set (order lost): {}",
        sorted_display(unique_simple)
    )?;

    writeln!(
        out,
        "Method 2 - seen-set filter (order kept): {:?}",
        dedup_preserving_order(&original)
    )?;

    writeln!(out, "   The trick: HashSet::insert returns false for repeats, so")?;
    writeln!(out, "   filter(|&x| seen.insert(x)) keeps only first occurrences.")?;

    let mut sorted_dedup = original.clone();
    sorted_dedup.sort();
    sorted_dedup.dedup();
    writeln!(out, "Method 3 - sort() + dedup() (sorted order): {:?}", sorted_dedup)?;

    subsection_header(out, "Set-based Filtering and Analysis")?;

    let list1 = vec![1, 2, 3, 4, 5];
    let list2 = vec![3, 4, 5, 6, 7];
    let list3 = vec![4, 5, 6, 7, 8];

    let set1: HashSet<i32> = list1.iter().copied().collect();
    let set2: HashSet<i32> = list2.iter().copied().collect();
    let set3: HashSet<i32> = list3.iter().copied().collect();

    let common = &(&set1 & &set2) & &set3;
    writeln!(out, "Sources: {:?}, {:?}, {:?}", list1, list2, list3)?;
    writeln!(out, "Common to all three: {}", sorted_display(common))?;

    let all_elements = &(&set1 | &set2) | &set3;
    let only_first = &(&set1 - &set2) - &set3;
    writeln!(out, "Every element seen:  {}", sorted_display(all_elements))?;
    writeln!(out, "Unique to source 1:  {}", sorted_display(only_first))?;

    subsection_header(out, "Permission Masks")?;

    let admin: HashSet<&str> = ["read", "write", "delete", "execute"].into_iter().collect();
    let user: HashSet<&str> = ["read", "write"].into_iter().collect();

    writeln!(out, "Admin: {}", sorted_display(admin.iter().copied()))?;
    writeln!(out, "User:  {}", sorted_display(user.iter().copied()))?;
    writeln!(out, "Can user delete? {}", user.contains("delete"))?;

    let missing = &admin - &user;
    writeln!(out, "User lacks: {}", sorted_display(missing))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        assert_eq!(dedup_preserving_order(&[1, 3, 2, 3, 1, 4, 2, 5]), vec![1, 3, 2, 4, 5]);
    }

    #[test]
    fn dedup_of_empty_slice_is_empty() {
        assert_eq!(dedup_preserving_order(&[]), Vec::<i32>::new());
    }
}
