use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use lettercode::{parse_probabilities, Codec};

/// Huffman-code lines of uppercase text from a letter probability table.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// File with one `<letter> <probability>` entry per uppercase letter
    probabilities: String,

    /// Encode this line instead of prompting on stdin
    #[clap(short, long)]
    text: Option<String>,

    /// Print progress information. Repeat for more detail
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .unwrap();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(&args.probabilities)?;
    let pairs = parse_probabilities(&raw)?;

    info!("building the Huffman tree from {}", args.probabilities);
    let codec = Codec::from_probabilities(&pairs)?;
    info!("code table ready");

    let text = match &args.text {
        Some(text) => text.clone(),
        None => prompt("Enter a line (uppercase letters and spaces): ")?,
    };

    let encoded = codec.encode(&text)?;
    println!("Encoded: {}", encoded);

    let decoded = codec.decode(&encoded)?;
    println!("Decoded: {}", decoded);

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
