use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use legv8_rs::isa::legv8::Legv8Decoder;
use legv8_rs::Disassembler;

#[derive(Parser, Debug)]
#[command(author, version, about = "LEGv8 disassembler CLI", long_about = None)]
struct Cli {
    /// Input binary path (big-endian 32-bit instruction words)
    #[arg(value_name = "BINFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let file =
        File::open(&cli.input).with_context(|| format!("cannot open {}", cli.input))?;

    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    let mut stdout = io::stdout().lock();
    dis.write_listing(&dec, BufReader::new(file), &mut stdout)?;
    Ok(())
}
