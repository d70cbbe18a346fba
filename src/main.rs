use clap::Parser;
use sets_guide::utils::logger;
use sets_guide::{CliConfig, Guide};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sets-guide");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut guide = Guide::new(stdin, stdout);

    // Ctrl-C flips the shared flag; the dispatcher notices on its next
    // read and takes the farewell path instead of unwinding.
    let interrupted = guide.interrupt_flag();
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted.store(true, std::sync::atomic::Ordering::SeqCst);
    }) {
        tracing::warn!("Could not install Ctrl-C handler: {}", e);
    }

    if let Err(e) = guide.run() {
        // Errors never escalate to the exit status; everything the user
        // needs to see was already written to the output stream.
        tracing::error!("Guide session ended with an error: {}", e);
        eprintln!("Session ended: {}", e);
    }

    Ok(())
}
