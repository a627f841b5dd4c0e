//! Binary to convert a JSON Schema document to Python `TypedDict` source.
//!
//! Usage: `json2typeddict [INPUT_PATH] [OUTPUT_PATH]`
//!
//! Both paths are optional; `-` or omission selects stdin / stdout.

use std::io::{read_to_string, stdin, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use typeddict_gen::{GenerateSettings, TypedDictGenError, generate_to_writer};

/// Converts JSON Schema to Python `TypedDict` source code
#[derive(Parser, Debug)]
#[command(name = "json2typeddict", version)]
struct Cli {
    /// Input .json path. Use - or leave empty for stdin
    input_path: Option<PathBuf>,

    /// Output .py path. Use - or leave empty for stdout
    output_path: Option<PathBuf>,
}

/// `None` when the argument is absent or the `-` stream placeholder.
fn stream_path(argument: Option<&PathBuf>) -> Option<&PathBuf> {
    argument.filter(|path| path.as_os_str() != "-")
}

fn run(cli: &Cli) -> Result<(), TypedDictGenError> {
    let schema_json: String = match stream_path(cli.input_path.as_ref()) {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_to_string(stdin())?,
    };

    let settings = GenerateSettings::default();
    match stream_path(cli.output_path.as_ref()) {
        Some(path) => {
            let mut output_file: std::fs::File = std::fs::File::create(path)?;
            generate_to_writer(&schema_json, &mut output_file, &settings)?;
        }
        None => generate_to_writer(&schema_json, &mut stdout(), &settings)?,
    }
    Ok(())
}

fn main() {
    let cli: Cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
