use anyhow::Result;
use sets_guide::{MenuChoice, Section};

/// The expected dispatch table: key, then demo names in invocation order.
/// Any change here is a deliberate change to the guide's surface.
const EXPECTED: [(u8, &[&str]); 10] = [
    (1, &["set_creation_examples", "set_properties_examples"]),
    (2, &["set_operations_examples", "set_comparison_examples"]),
    (3, &["set_methods_examples", "set_copy_examples"]),
    (4, &["set_builders_examples"]),
    (5, &["set_iteration_examples"]),
    (6, &["collection_comparison_examples"]),
    (7, &["advanced_set_techniques"]),
    (8, &["frozen_set_examples"]),
    (9, &["practical_applications"]),
    (10, &["performance_analysis"]),
];

#[test]
fn registry_matches_the_expected_table() {
    assert_eq!(Section::ALL.len(), EXPECTED.len());

    for (key, names) in EXPECTED {
        let section = Section::from_key(key).expect("key must resolve");
        let actual: Vec<&str> = section.demos().iter().map(|d| d.name).collect();
        assert_eq!(actual, names.to_vec(), "demo table mismatch for key {}", key);
    }
}

#[test]
fn every_menu_key_parses_to_its_section() {
    for (key, _) in EXPECTED {
        let choice: MenuChoice = key.to_string().parse().unwrap();
        assert_eq!(choice, MenuChoice::Section(Section::from_key(key).unwrap()));
    }
    assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
}

#[test]
fn every_demo_runs_cleanly_and_writes_output() -> Result<()> {
    for section in Section::ALL {
        for demo in section.demos() {
            let mut buf = Vec::new();
            (demo.run)(&mut buf)?;
            assert!(!buf.is_empty(), "{} wrote nothing", demo.name);
        }
    }
    Ok(())
}

#[test]
fn performance_demo_reports_a_ratio_or_the_resolution_fallback() -> Result<()> {
    let section = Section::from_key(10).unwrap();
    let mut buf = Vec::new();
    (section.demos()[0].run)(&mut buf)?;
    let text = String::from_utf8(buf)?;

    assert!(
        text.contains("as long as the set lookup") || text.contains("below clock resolution"),
        "membership comparison must always conclude with a line"
    );
    Ok(())
}
