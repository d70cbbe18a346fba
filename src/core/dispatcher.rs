use crate::core::menu::{Demo, MenuChoice, Section};
use crate::utils::error::Result;
use crate::utils::format::section_header;
use std::io::{BufRead, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const MENU_WIDTH: usize = 62;

/// Outcome of one blocking read: either a trimmed line, or a request to wind
/// the session down (exit key aside, that is EOF or an interrupt).
enum Prompted {
    Line(String),
    Stop,
}

/// The interactive loop. Generic over its streams so tests can drive a full
/// session from a `Cursor` and inspect the output buffer.
pub struct Guide<R: BufRead, W: Write> {
    input: R,
    output: W,
    interrupted: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> Guide<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag for a signal handler to flip. The loop checks it around
    /// every blocking read.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn run(&mut self) -> Result<()> {
        self.welcome()?;

        loop {
            self.show_menu()?;
            let line = match self.prompt("Enter your choice (0-10): ")? {
                Prompted::Line(line) => line,
                Prompted::Stop => break,
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(MenuChoice::Section(section)) => {
                    tracing::debug!("Running section {}: {}", section.key(), section.title());
                    for demo in section.demos() {
                        self.run_demo(demo)?;
                    }
                    if let Prompted::Stop = self.pause()? {
                        break;
                    }
                }
                Err(invalid) => {
                    tracing::debug!("Rejected menu input: {}", invalid);
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 0 and 10."
                    )?;
                }
            }
        }

        self.farewell()
    }

    /// Runs one demo behind the per-demo guard: a failing demo is summarized
    /// in one line and the session carries on. Only a failure to write the
    /// summary itself ends the run.
    pub fn run_demo(&mut self, demo: &Demo) -> Result<()> {
        if let Err(e) = (demo.run)(&mut self.output) {
            tracing::warn!("Demo {} failed: {}", demo.name, e);
            writeln!(self.output, "Error running example: {}", e)?;
        }
        Ok(())
    }

    fn welcome(&mut self) -> Result<()> {
        section_header(&mut self.output, "WELCOME TO THE RUST SETS GUIDE")?;
        writeln!(
            self.output,
            "This interactive guide covers Rust's set collections, HashSet first."
        )?;
        writeln!(
            self.output,
            "Each section prints explanations alongside the output of real operations."
        )?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n╔{}╗", "═".repeat(MENU_WIDTH))?;
        writeln!(self.output, "║{:^width$}║", "RUST SETS GUIDE", width = MENU_WIDTH)?;
        writeln!(self.output, "║{:^width$}║", "Interactive Menu", width = MENU_WIDTH)?;
        writeln!(self.output, "╠{}╣", "═".repeat(MENU_WIDTH))?;
        for section in Section::ALL {
            writeln!(
                self.output,
                "║ {:>2}. {:<width$} ║",
                section.key(),
                section.title(),
                width = MENU_WIDTH - 6
            )?;
        }
        writeln!(self.output, "║{:^width$}║", "", width = MENU_WIDTH)?;
        writeln!(self.output, "║ {:>2}. {:<width$} ║", 0, "Exit", width = MENU_WIDTH - 6)?;
        writeln!(self.output, "╚{}╝", "═".repeat(MENU_WIDTH))?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\nThank you for using the Rust Sets Guide!")?;
        writeln!(self.output, "Happy coding with sets!")?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self) -> Result<Prompted> {
        self.prompt("\nPress Enter to continue to the next section...")
    }

    fn prompt(&mut self, text: &str) -> Result<Prompted> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(Prompted::Stop);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // EOF on stdin: nothing more will ever arrive, wind down.
            Ok(0) => Ok(Prompted::Stop),
            Ok(_) => {
                if self.interrupted.load(Ordering::SeqCst) {
                    Ok(Prompted::Stop)
                } else {
                    Ok(Prompted::Line(line.trim().to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => Ok(Prompted::Stop),
            Err(e) => {
                tracing::error!("Failed to read menu input: {}", e);
                Err(e.into())
            }
        }
    }
}
