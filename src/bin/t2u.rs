//! Termtex CLI - render LaTeX math as multi-line Unicode text

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::io::{self, Read};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "t2u")]
#[command(version)]
#[command(about = "Termtex - LaTeX math to multi-line Unicode text", long_about = None)]
struct Cli {
    /// Expression; multiple arguments are joined with spaces
    /// (reads from stdin when no arguments are given)
    expression: Vec<String>,

    /// Treat the input as markdown and render every $...$ / $$...$$ span
    #[arg(short, long)]
    document: bool,

    /// Print tolerated-input diagnostics to stderr
    #[arg(long)]
    diagnostics: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let input = if cli.expression.is_empty() {
        let mut buf = String::new();
        if io::stdin().read_to_string(&mut buf).is_err() {
            buf.clear();
        }
        buf.trim_end().to_string()
    } else {
        cli.expression.join(" ")
    };

    if cli.document {
        println!("{}", termtex::render_document(&input));
    } else {
        let output = termtex::render_with_diagnostics(&input);
        println!("{}", output.content);
        if cli.diagnostics {
            for diag in &output.diagnostics {
                eprintln!("{}", diag);
            }
        }
    }
    // Completion is always exit code 0; diagnostics never fail the run
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install termtex --features cli");
    eprintln!("  t2u [OPTIONS] [EXPRESSION]...");
}
