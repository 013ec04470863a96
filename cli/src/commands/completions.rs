//! Shell completions generation command.

use std::io::Write;

use clap::CommandFactory as _;
use clap_complete::{Generator, Shell};

use crate::cli::Cli;

/// Generate shell completions for the specified shell.
pub fn generate_completions(shell: Shell) {
    let mut stdout = std::io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush().ok();
}

fn write_completions<G: Generator>(generator: G, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    clap_complete::generate(generator, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buffer = Vec::new();
        write_completions(Shell::Bash, &mut buffer);
        let script = String::from_utf8(buffer).expect("completions are UTF-8");

        assert!(script.contains("gigboard"));
        assert!(script.contains("render"));
        assert!(script.contains("check"));
    }
}
