use std::{fs, io::Write, path::PathBuf, process};

use clap::Parser;
use setcalc::interpreter::evaluator::core::Context;

/// setcalc is a batch calculator for finite sets and binary relations over
/// a fixed universe.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input file holding the universe, declarations and commands.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.file.display());
                                                   process::exit(3);
                                               });

    let mut context = Context::new();

    // Fragments are streamed as lines are processed; the separating line
    // break goes in front of every fragment but the first, and the output
    // carries no trailing newline.
    for (index, line) in source.lines().enumerate() {
        match context.process_line(line) {
            Ok(fragment) => {
                if index > 0 {
                    print!("\n{fragment}");
                } else {
                    print!("{fragment}");
                }
            },
            Err(e) => fail(e.as_ref()),
        }
    }

    if let Err(e) = context.finish() {
        fail(&e);
    }

    let _ = std::io::stdout().flush();
}

/// Flushes what was already produced, reports the error and exits with the
/// format-error code.
fn fail(error: &dyn std::error::Error) -> ! {
    let _ = std::io::stdout().flush();
    eprintln!("{error}");
    process::exit(2);
}
