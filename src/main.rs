//! Contact Assistant - Main entry point
//!
//! Runs the read-eval-print loop: prompt, read a line, hand it to the
//! assistant, print the reply.

use anyhow::{Context, Result};
use contact_assistant::bot::GOODBYE;
use contact_assistant::{Assistant, Config, Reply};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first: it decides the default log level
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for replies)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    run(&config, io::stdin().lock(), io::stdout().lock())
}

/// Drive one session until `close`/`exit` or end of input.
fn run(config: &Config, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut assistant = Assistant::new();
    let mut lines = input.lines();

    writeln!(output, "Welcome to the assistant bot!")?;

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => {
                info!("End of input, closing session");
                break;
            }
        };

        match assistant.handle_line(&line) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Exit => break,
        }
    }

    writeln!(output, "{}", GOODBYE)?;
    info!(
        "Session finished with {} contact(s)",
        assistant.book().len()
    );
    Ok(())
}
