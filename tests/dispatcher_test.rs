use anyhow::Result;
use sets_guide::{Demo, Guide, GuideError};
use std::io::{Cursor, Write};
use std::sync::atomic::Ordering;

fn run_session(input: &str) -> Result<String> {
    let mut output = Vec::new();
    {
        let mut guide = Guide::new(Cursor::new(input.as_bytes().to_vec()), &mut output);
        guide.run()?;
    }
    Ok(String::from_utf8(output)?)
}

const FAREWELL: &str = "Happy coding with sets!";
const INVALID: &str = "Invalid choice. Please enter a number between 0 and 10.";
const PAUSE: &str = "Press Enter to continue to the next section...";

#[test]
fn exit_key_terminates_with_farewell_and_nothing_after() -> Result<()> {
    let output = run_session("0\n")?;

    assert!(output.contains("Thank you for using the Rust Sets Guide!"));
    // Nothing may follow the farewell.
    assert!(output.trim_end().ends_with(FAREWELL));
    assert!(!output.contains(PAUSE));
    Ok(())
}

#[test]
fn section_one_then_exit_prints_content_once() -> Result<()> {
    // Select section 1, acknowledge the pause, then exit.
    let output = run_session("1\n\n0\n")?;

    assert_eq!(output.matches("1. SET CREATION AND BASICS").count(), 1);
    assert_eq!(output.matches("Set Properties and Characteristics").count(), 1);
    assert_eq!(output.matches(PAUSE).count(), 1);

    let content_at = output.find("1. SET CREATION AND BASICS").unwrap();
    let farewell_at = output.find(FAREWELL).unwrap();
    assert!(content_at < farewell_at);
    assert!(output.trim_end().ends_with(FAREWELL));
    Ok(())
}

#[test]
fn out_of_range_choice_is_rejected_without_running_anything() -> Result<()> {
    let output = run_session("99\n0\n")?;

    assert_eq!(output.matches(INVALID).count(), 1);
    assert!(!output.contains(PAUSE));
    assert!(!output.contains("1. SET CREATION AND BASICS"));
    assert!(output.trim_end().ends_with(FAREWELL));
    Ok(())
}

#[test]
fn each_bad_input_gets_exactly_one_rejection() -> Result<()> {
    let output = run_session("abc\n-1\n11\n0\n")?;

    assert_eq!(output.matches(INVALID).count(), 3);
    assert!(!output.contains(PAUSE));
    assert!(output.trim_end().ends_with(FAREWELL));
    Ok(())
}

#[test]
fn eof_on_stdin_takes_the_farewell_path() -> Result<()> {
    let output = run_session("")?;

    assert!(output.trim_end().ends_with(FAREWELL));
    Ok(())
}

#[test]
fn interrupt_flag_stops_the_loop_gracefully() -> Result<()> {
    let mut output = Vec::new();
    {
        let input = Cursor::new(b"1\n\n0\n".to_vec());
        let mut guide = Guide::new(input, &mut output);
        guide.interrupt_flag().store(true, Ordering::SeqCst);
        guide.run()?;
    }
    let output = String::from_utf8(output)?;

    // Interrupted before the selection was read: no section ran.
    assert!(!output.contains("1. SET CREATION AND BASICS"));
    assert!(output.trim_end().ends_with(FAREWELL));
    Ok(())
}

fn failing_demo(_out: &mut dyn Write) -> sets_guide::Result<()> {
    Err(GuideError::DemoError {
        message: "synthetic demo failure".to_string(),
    })
}

#[test]
fn failing_demo_is_reported_in_one_line_and_swallowed() -> Result<()> {
    let demo = Demo {
        name: "failing_demo",
        run: failing_demo,
    };

    let mut output = Vec::new();
    {
        let mut guide = Guide::new(Cursor::new(Vec::new()), &mut output);
        guide.run_demo(&demo)?;
    }
    let output = String::from_utf8(output)?;

    assert_eq!(
        output.matches("Error running example: synthetic demo failure").count(),
        1
    );
    Ok(())
}
