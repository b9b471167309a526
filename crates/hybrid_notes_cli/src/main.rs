//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `hybrid_notes_core` linkage with deterministic output.
//! - Render the demo outline (`--demo`) or turn stdin lines into an outline
//!   and print its export document.

use clap::Parser;
use hybrid_notes_core::{MemoryEntryStore, OutlineService};
use std::io::BufRead;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "hybrid-notes", version, about = "Hybrid Notes outline smoke tool")]
struct Cli {
    /// Render the bundled demo outline instead of reading stdin.
    #[arg(long)]
    demo: bool,

    /// Prefix non-`log` entries with their type when rendering.
    #[arg(long)]
    details: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("hybrid_notes_core ping={}", hybrid_notes_core::ping());
    println!("hybrid_notes_core version={}", hybrid_notes_core::core_version());

    let mut service = OutlineService::new(MemoryEntryStore::new());
    if cli.details {
        service.toggle_details();
    }

    if cli.demo {
        if let Err(err) = service.load_demo() {
            eprintln!("failed to load demo: {err}");
            return ExitCode::FAILURE;
        }
        for row in service.view() {
            let marker = if row.has_children { "▾" } else { "•" };
            let indent = "  ".repeat(usize::from(row.entry.indent));
            let first_line = row.display.lines().next().unwrap_or_default();
            println!("{indent}{marker} {first_line}");
        }
        return ExitCode::SUCCESS;
    }

    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                service.add_entry(&line);
            }
            Err(err) => {
                eprintln!("failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    match service.export_all() {
        Ok(artifact) => {
            println!("{}", artifact.contents);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to export: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn flags_default_to_stdin_mode() {
        let cli = Cli::try_parse_from(["hybrid-notes"]).unwrap();
        assert!(!cli.demo);
        assert!(!cli.details);
    }

    #[test]
    fn demo_and_details_flags_parse() {
        let cli = Cli::try_parse_from(["hybrid-notes", "--demo", "--details"]).unwrap();
        assert!(cli.demo);
        assert!(cli.details);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["hybrid-notes", "--bogus"]).is_err());
    }
}
