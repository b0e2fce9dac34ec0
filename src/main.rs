use clap::{Parser, Subcommand};
use serde::Serialize;

use mnemonic_checksum::config::Config;
use mnemonic_checksum::mnemonic::{self, Wordlist};
use mnemonic_checksum::{ApiError, ApiResponse, ChecksumError, ChecksumResponse, WordCount};

/// Walk through BIP-39 checksum derivation and verification.
#[derive(Parser)]
#[command(name = "mnemonic-checksum")]
#[command(about = "Show how a BIP-39 mnemonic checksum is derived and verified")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random entropy and its mnemonic
    Generate {
        /// Number of words (12, 15, 18, 21 or 24)
        #[arg(short, long, default_value_t = 12)]
        words: usize,
    },

    /// Compute the checksum bits of hex-encoded entropy
    Checksum {
        entropy_hex: String,
    },

    /// Re-derive a mnemonic's checksum and show every step
    Validate {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Show the 11-bit index of every word
    Bits {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}

#[derive(Serialize)]
struct WordBits {
    word: String,
    bits: String,
}

#[derive(Serialize)]
struct BitsReport {
    words: Vec<WordBits>,
    binary: String,
    decimal: String,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.debug, cli.json);
    config.apply();

    if let Err(e) = run(cli.command, &config) {
        let api_error = match e.downcast::<ChecksumError>() {
            Ok(engine_error) => ApiError::from(engine_error),
            Err(other) => ApiError::internal(other.to_string()),
        };
        if config.json_output {
            println!("{}", ApiResponse::<()>::err(api_error.clone()).to_json());
        }
        eprintln!("Error: {}", api_error.message);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let wordlist = Wordlist::english();

    match command {
        Commands::Generate { words } => {
            let word_count = WordCount::try_from(words)?;
            let (_entropy, generated) = mnemonic::generate_mnemonic(word_count, wordlist)?;
            if config.json_output {
                println!("{}", ApiResponse::ok(&generated).to_json());
            } else {
                println!("Word count: {}", generated.word_count);
                println!("Entropy (hex): {}", generated.entropy_hex);
                println!("Checksum: {}", generated.checksum);
                println!("Mnemonic: {}", generated.mnemonic);
                println!();
                println!("{}", word_count.fun_fact());
            }
        }
        Commands::Checksum { entropy_hex } => {
            let checksum = mnemonic::calculate_checksum(&entropy_hex)?;
            let response = ChecksumResponse {
                entropy_bits: entropy_hex.len() * 4,
                checksum,
            };
            if config.json_output {
                println!("{}", ApiResponse::ok(&response).to_json());
            } else {
                println!("Entropy bits: {}", response.entropy_bits);
                println!("Checksum: {}", response.checksum);
            }
        }
        Commands::Validate { words } => {
            let trace = mnemonic::validate_mnemonic_checksum(&words.join(" "), wordlist)?;
            if config.json_output {
                println!("{}", ApiResponse::ok(&trace).to_json());
            } else {
                for step in trace.steps() {
                    if step.value.is_empty() {
                        println!("{}", step.label);
                    } else {
                        println!("{}: {}", step.label, step.value);
                    }
                }
            }
        }
        Commands::Bits { words } => {
            let phrase = words.join(" ");
            let split: Vec<&str> = phrase.split(' ').collect();
            let groups = mnemonic::words_to_bits(&split, wordlist)?;
            let binary = groups.concat();
            let report = BitsReport {
                decimal: mnemonic::binary_to_decimal(&binary)?,
                words: split
                    .iter()
                    .zip(groups)
                    .map(|(word, bits)| WordBits {
                        word: word.to_string(),
                        bits,
                    })
                    .collect(),
                binary,
            };
            if config.json_output {
                println!("{}", ApiResponse::ok(&report).to_json());
            } else {
                for entry in &report.words {
                    println!("{:<10} {}", entry.word, entry.bits);
                }
                println!("Binary: {}", report.binary);
                println!("Decimal: {}", report.decimal);
            }
        }
    }

    Ok(())
}
