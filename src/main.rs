//! Mixtape CLI — compile a playlist source file, print the result, and
//! optionally render the HTML page.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mixtape::dsl::{CompilationResult, Compiler};
use mixtape::html::render_page;

#[derive(Parser)]
#[command(name = "mixtape", version, about = "Playlist language compiler")]
struct Cli {
    /// Playlist source file to compile.
    input: Option<PathBuf>,

    /// Write the rendered HTML page to this path on success.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("usage: mixtape <playlist-file> [-o <page.html>]");
        return ExitCode::SUCCESS;
    };

    let source = match fs::read_to_string(&input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("cannot read {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };

    let result = match Compiler::compile(&source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("compilation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        CompilationResult::Failure(errors) => {
            eprintln!("semantic errors found:");
            for error in &errors {
                eprintln!("- {error}");
            }
            ExitCode::FAILURE
        }
        CompilationResult::Success(playlist) => {
            match serde_json::to_string_pretty(&playlist) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("cannot serialize playlist: {e}");
                    return ExitCode::FAILURE;
                }
            }

            if let Some(output) = cli.output {
                let page = render_page(&playlist);
                if let Err(e) = fs::write(&output, page) {
                    eprintln!("cannot write {}: {e}", output.display());
                    return ExitCode::FAILURE;
                }
                eprintln!("wrote {}", output.display());
            }

            ExitCode::SUCCESS
        }
    }
}
