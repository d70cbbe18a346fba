use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

pub fn builders_examples(out: &mut dyn Write) -> Result<()> {
    section_header(out, "4. BUILDING SETS FROM ITERATORS")?;

    writeln!(out, "Rust's counterpart to a set comprehension is an iterator chain")?;
    writeln!(out, "collected into a HashSet:")?;
    writeln!(out, "    (range).map(expr).filter(cond).collect::<HashSet<_>>()")?;

    subsection_header(out, "Basic Builders")?;

    let squares: HashSet<i32> = (1..6).map(|x| x * x).collect();
    writeln!(out, "Squares: (1..6).map(|x| x * x) = {}", sorted_display(squares))?;

    let even_squares: HashSet<i32> = (1..11).filter(|x| x % 2 == 0).map(|x| x * x).collect();
    writeln!(
        out,
        "Even squares: (1..11).filter(|x| x % 2 == 0).map(|x| x * x) = {}",
        sorted_display(even_squares)
    )?;

    let words = ["hello", "world", "rust", "sets"];
    let upper: HashSet<String> = words.iter().map(|w| w.to_uppercase()).collect();
    writeln!(out, "Uppercase: words.iter().map(|w| w.to_uppercase()) = {}", sorted_display(upper))?;

    let long_words: HashSet<&str> = words.iter().copied().filter(|w| w.len() > 4).collect();
    writeln!(out, "Long words (len > 4): {}", sorted_display(long_words))?;

    subsection_header(out, "Advanced Builders")?;

    let pairs: HashSet<(i32, i32)> = [1, 2]
        .into_iter()
        .flat_map(|x| [3, 4].into_iter().map(move |y| (x, y)))
        .collect();
    let mut rendered: Vec<(i32, i32)> = pairs.into_iter().collect();
    rendered.sort();
    writeln!(out, "Cartesian pairs via flat_map: {:?}", rendered)?;

    let sentences = ["hello world", "rust programming", "set builders"];
    let unique_letters: HashSet<char> = sentences
        .iter()
        .flat_map(|s| s.chars())
        .filter(|c| c.is_alphabetic())
        .collect();
    writeln!(out, "Unique letters across sentences: {}", sorted_display(unique_letters))?;

    let triples: HashSet<(i32, i32, i32)> = (1..15)
        .flat_map(|a| (a..15).flat_map(move |b| (b..15).map(move |c| (a, b, c))))
        .filter(|&(a, b, c)| a * a + b * b == c * c)
        .collect();
    let mut triples: Vec<(i32, i32, i32)> = triples.into_iter().collect();
    triples.sort();
    writeln!(out, "Pythagorean triples below 15: {:?}", triples)?;

    Ok(())
}
