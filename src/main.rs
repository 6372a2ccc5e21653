use std::path::PathBuf;

use clap::Parser;
use logica::Interpreter;

/// logica evaluates a propositional-logic sentence read from a file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the file holding the sentence to evaluate.
    #[arg(short, long)]
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    let mut interpreter = Interpreter::from_file(&args.input).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.input.display());
        std::process::exit(1);
    });

    if let Some(value) = interpreter.evaluate() {
        println!("Given expression evaluates to: {value}");
    }
}
