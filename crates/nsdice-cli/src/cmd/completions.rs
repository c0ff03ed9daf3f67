use anyhow::Result;
use clap::Args;
use clap_complete::{Shell, generate};

/// Arguments for `nsdice completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script generation.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to stdout.
///
/// # Errors
///
/// Returns an error if flushing stdout fails.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> Result<()> {
    let mut out = std::io::stdout().lock();
    generate(shell, command, "nsdice", &mut out);
    std::io::Write::flush(&mut out)?;
    Ok(())
}
