use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lilt_codegen::Emitter;
use lilt_parser::parse_source;
use lilt_syntax::EmitOptions;

#[derive(Parser)]
#[command(name = "lilt", about = "lilt — indentation-structured scripting compiled to JavaScript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpile a .lt file and write the generated JavaScript.
    Build {
        /// Input .lt file.
        input: PathBuf,
        /// Output file.
        #[arg(short, long, default_value = "build.js")]
        output: PathBuf,
        /// Interleave each statement with a comment echoing its source line.
        #[arg(long)]
        show_source: bool,
    },
    /// Run the full transformation and report the first error, if any.
    Check {
        input: PathBuf,
    },
    /// Classify every line and dump the statements.
    Parse {
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            show_source,
        } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let emitter = Emitter::new(EmitOptions {
                annotate_source: show_source,
            });
            let js = emitter.emit_source(&source)?;
            std::fs::write(&output, &js)
                .with_context(|| format!("failed to write {}", output.display()))?;
            eprintln!("Wrote {}", output.display());
        }
        Commands::Check { input } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            Emitter::new(EmitOptions::default()).emit_source(&source)?;
            eprintln!("OK: {}", input.display());
        }
        Commands::Parse { input, json } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let statements: Vec<_> = parse_source(&source)?
                .into_iter()
                .map(|parsed| parsed.statement)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&statements)?);
            } else {
                println!("{statements:#?}");
            }
        }
    }

    Ok(())
}
