
use zed::driver;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use std::io;

/// Environment variable holding the log filter, in
/// [`EnvFilter`] syntax.
const LOG_ENV_VAR: &str = "ZED_LOG";

fn setup_tracing() {
  // Logs go to stderr so that stdout carries only the program output.
  let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
    .unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn main() -> anyhow::Result<()> {
  setup_tracing();
  let stdin = io::stdin();
  let stdout = io::stdout();
  driver::fibonacci(&mut stdin.lock(), &mut stdout.lock())
    .context("Could not print the Fibonacci sequence")?;
  Ok(())
}
