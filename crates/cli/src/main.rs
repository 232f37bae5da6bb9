//! Floating-point emulator diagnostics CLI.
//!
//! This binary drives the emulation core outside a kernel. It performs:
//! 1. **Decode:** Print the fields and disassembly of an instruction word.
//! 2. **Run:** Replay a JSON-described trap through `Emulator::emulate` and
//!    print the resulting state as JSON.

mod scenario;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fpemu_core::isa::decode::decode;

#[derive(Parser, Debug)]
#[command(
    name = "fpemu",
    author,
    version,
    about = "Trap-time floating-point emulator diagnostics",
    long_about = "Decode floating-point instruction words or replay trap scenarios.\n\nExamples:\n  fpemu decode 0x10020e53\n  fpemu run scenario.json\n  RUST_LOG=trace fpemu run scenario.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one instruction word (hex with 0x prefix, or decimal).
    Decode {
        /// The 32-bit instruction word.
        word: String,
    },

    /// Replay a trap scenario described in JSON.
    Run {
        /// Path to the scenario file.
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Decode { word } => cmd_decode(&word),
        Commands::Run { path } => cmd_run(&path),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Parses an instruction word in `0x`-prefixed hex or decimal.
fn parse_word(text: &str) -> Result<u32, scenario::CliError> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse(),
    };
    parsed.map_err(|_| scenario::CliError::BadWord(text.to_string()))
}

fn cmd_decode(text: &str) -> Result<(), scenario::CliError> {
    let word = parse_word(text)?;
    let Some(insn) = decode(word) else {
        println!("{word:#010x}: not a supported floating-point instruction");
        return Ok(());
    };
    println!("{word:#010x}: {insn}");
    println!("  op   {:?}", insn.op);
    println!("  rd   {}", insn.rd);
    println!("  rs1  {}", insn.rs1);
    println!("  rs2  {}", insn.rs2);
    println!("  rs3  {}", insn.rs3);
    println!("  rm   {}", insn.rm);
    println!("  imm  {}", insn.imm);
    Ok(())
}

fn cmd_run(path: &std::path::Path) -> Result<(), scenario::CliError> {
    let scenario = scenario::Scenario::load(path)?;
    let report = scenario.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
