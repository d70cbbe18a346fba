use std::io::{self, Write};

const SECTION_WIDTH: usize = 80;
const SUBSECTION_WIDTH: usize = 60;

/// Full-width banner used at the start of every major section.
pub fn section_header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(SECTION_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{:=^width$}", format!(" {} ", title), width = SECTION_WIDTH)?;
    writeln!(out, "{}", rule)
}

pub fn subsection_header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "-".repeat(SUBSECTION_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, " {} ", title)?;
    writeln!(out, "{}", rule)
}

/// Renders a set-like collection with sorted elements so the narration is
/// stable across runs; iteration order of a `HashSet` is arbitrary and would
/// otherwise make the printed examples jitter.
pub fn sorted_display<T, I>(items: I) -> String
where
    T: ToString + Ord,
    I: IntoIterator<Item = T>,
{
    let mut elems: Vec<T> = items.into_iter().collect();
    elems.sort();
    let rendered: Vec<String> = elems.iter().map(ToString::to_string).collect();
    format!("{{{}}}", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sorted_display_is_stable_for_hash_sets() {
        let set: HashSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(sorted_display(set), "{1, 2, 3}");
    }

    #[test]
    fn sorted_display_handles_empty_input() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(sorted_display(empty), "{}");
    }

    #[test]
    fn section_header_is_centered_and_full_width() {
        let mut buf = Vec::new();
        section_header(&mut buf, "TEST").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(" TEST "));
        for line in text.lines().filter(|l| !l.is_empty()) {
            assert_eq!(line.chars().count(), 80);
        }
    }
}
