use anyhow::Result;
use aurabesh_core::ForcePath;
use clap::{Parser, Subcommand};

mod commands;

/// Aurabesh language runner.
///
/// Aurabesh is a small scripting language with a Force Path permission
/// system: `try`/`catch` and `switch` only work on the Sith path. This CLI
/// runs programs and exposes the front half of the pipeline for tooling.
///
/// EXAMPLES:
///     aura run holocron.aura                    Run a program
///     aura run holocron.aura --force-path sith  Run with Sith permissions
///     aura tokens holocron.aura                 List the token stream
///     aura ast holocron.aura                    Dump the AST as JSON
#[derive(Parser)]
#[command(name = "aura")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an Aurabesh source file
    ///
    /// Executes the file and prints each `print` line to stdout in order.
    /// Note that the `Set Force Path` directive in source only satisfies the
    /// parser; Sith constructs also need `--force-path sith` to execute.
    ///
    /// EXAMPLES:
    ///     aura run holocron.aura                    Run a program
    ///     aura run holocron.aura --force-path sith  Unlock Sith constructs
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Aurabesh source file
        file: String,
        /// Force path for the interpreter (sith or jedi)
        #[arg(long, value_name = "PATH")]
        force_path: Option<ForcePath>,
    },

    /// List the token stream of a source file
    ///
    /// Tokenizes the file and prints one `line:column kind 'text'` row per
    /// token, ending with the end-of-input marker.
    Tokens {
        /// Path to the Aurabesh source file
        file: String,
    },

    /// Dump the AST to JSON
    ///
    /// Parses the source file and outputs the syntax tree in JSON format
    /// for tooling or debugging purposes.
    Ast {
        /// Path to the Aurabesh source file
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, force_path } => commands::run::run(&file, force_path),
        Commands::Tokens { file } => commands::tokens::run(&file),
        Commands::Ast { file } => commands::ast::run(&file),
    }
}
