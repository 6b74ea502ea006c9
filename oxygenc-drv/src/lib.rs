//! `oxygenc-drv` - the CLI driver binding `oxygenc-lex` and `oxygenc-par`
//! into a runnable front end.
//!
//! The driver does no compilation of its own - it reads a source file,
//! hands it to the lexer or parser, and renders whatever comes back
//! (tokens, an AST, or an error) the way the original tool's driver did.

pub mod error;

use std::fmt::Debug;
use std::path::Path;

use clap::{Parser as ClapParser, Subcommand};
use oxygenc_util::diagnostic::Diagnostic;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use error::{DrvError, Result};

/// `oxygenc` - the OxygenC front-end driver.
#[derive(ClapParser, Debug)]
#[command(name = "oxygenc")]
#[command(author = "OxygenC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex and parse OxygenC source files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Raise the logging level to debug.
    #[arg(short, long, global = true, env = "OXYGENC_VERBOSE")]
    pub verbose: bool,

    /// Disable colored diagnostic output.
    #[arg(long, global = true, env = "OXYGENC_NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the `oxygenc` driver.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream for a source file.
    Lex(LexCommand),
    /// Print the parsed AST for a source file.
    Parse(ParseCommand),
}

#[derive(ClapParser, Debug)]
pub struct LexCommand {
    /// Source file to lex.
    pub file: std::path::PathBuf,
}

#[derive(ClapParser, Debug)]
pub struct ParseCommand {
    /// Source file to parse.
    pub file: std::path::PathBuf,
}

/// Initialize the `tracing` subscriber: `debug` filter when `--verbose` is
/// set, `info` otherwise, target/thread metadata stripped from output.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Logging(e.to_string()))?;

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DrvError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Print a `[-] Error: ...` line (message `\uXXXX`-decoded) and return the
/// process exit code the caller should use.
fn report_error(err: impl std::fmt::Display, no_color: bool) -> i32 {
    let message = oxygenc_util::diagnostic::decode_ascii_escapes(&err.to_string());
    eprintln!("{}", Diagnostic::error(message).render(no_color));
    1
}

fn print_each<T: Debug>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("{:?}", item);
    }
}

/// Run the `lex` subcommand: print every token, one per line, ending in EOF.
pub fn run_lex(args: &LexCommand, no_color: bool) -> Result<i32> {
    tracing::debug!(file = %args.file.display(), "lexing");

    let source = read_source(&args.file)?;
    let mut lexer = match oxygenc_lex::Lexer::new(&source) {
        Ok(lexer) => lexer,
        Err(e) => return Ok(report_error(e, no_color)),
    };

    match lexer.analyse_tokens() {
        Ok(tokens) => {
            print_each(tokens);
            Ok(0)
        }
        Err(e) => Ok(report_error(e, no_color)),
    }
}

/// Run the `parse` subcommand: print the parsed `Program` tree.
pub fn run_parse(args: &ParseCommand, no_color: bool) -> Result<i32> {
    tracing::debug!(file = %args.file.display(), "parsing");

    let source = read_source(&args.file)?;
    let file = args.file.display().to_string();

    let mut parser = match oxygenc_par::Parser::new(&source, &file) {
        Ok(parser) => parser,
        Err(e) => return Ok(report_error(e, no_color)),
    };

    match parser.parse() {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(0)
        }
        Err(e) => Ok(report_error(e, no_color)),
    }
}

/// Dispatch to the selected subcommand, returning the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Lex(args) => run_lex(args, cli.no_color),
        Commands::Parse(args) => run_parse(args, cli.no_color),
    }
}
