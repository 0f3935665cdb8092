//! Termstream Event Dumper
//!
//! Parses terminal output from stdin or a file and prints the resulting
//! event stream. Useful for inspecting what a program writes to its pty
//! and for testing the parser against real world output.

use std::io::{self, Read};
use std::process::ExitCode;

use termstream::parser::Parser;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut chunk_size = 0usize;
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--chunk" => {
                i += 1;
                if i < args.len() {
                    chunk_size = args[i].parse().unwrap_or(0);
                }
            },
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    // Read input
    let input_data = match &input_file {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            // Read from stdin
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        },
    };
    let input = String::from_utf8_lossy(&input_data);

    // Process input, optionally in fixed character chunks to exercise the
    // resumption path
    let mut parser = Parser::new();
    for chunk in char_chunks(&input, chunk_size) {
        for event in parser.parse(chunk) {
            match output_format {
                OutputFormat::Text => println!("{:?}", event),
                OutputFormat::Json => match serde_json::to_string(&event) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing event: {}", e);
                        return ExitCode::FAILURE;
                    },
                },
            }
        }
    }

    if parser.has_leftover() {
        eprintln!("Warning: input ended inside an escape sequence");
    }

    // Output final style
    match output_format {
        OutputFormat::Text => {
            println!("---");
            println!("Final style: {:?}", parser.style());
        },
        OutputFormat::Json => match serde_json::to_string(&parser.style()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing style: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

/// Split input into chunks of at most `size` characters. A size of zero
/// means a single chunk.
fn char_chunks(input: &str, size: usize) -> Vec<&str> {
    if size == 0 {
        return vec![input];
    }
    let mut chunks = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(size)
            .map(|(at, _)| at)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(split);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

fn print_help() {
    println!("Termstream Event Dumper");
    println!();
    println!("Usage: termstream-dump [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -c, --chunk <N>    Feed input in chunks of N characters (default: whole input)");
    println!("  -f, --file <PATH>  Read input from file");
    println!("  -j, --json         Output events as JSON lines");
    println!("  -t, --text         Output events as debug text (default)");
    println!("  -h, --help         Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  echo -e 'Hello\\x1b[31mWorld\\x1b[0m' | termstream-dump");
    println!("  termstream-dump --chunk 3 input.txt");
    println!("  termstream-dump --json < capture.bin > events.jsonl");
}
