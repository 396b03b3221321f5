use clap::Parser;
use colored::*;

/// quark-hash - Quark proof-of-work hash of block headers
#[derive(Parser, Debug)]
#[command(name = "quark-hash")]
#[command(author = "Quark Hash Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute Quark proof-of-work hashes of block headers", long_about = None)]
pub struct Args {
    /// Hex-encoded inputs (any length). Read one per line from stdin when omitted
    #[arg(value_name = "HEX")]
    pub headers: Vec<String>,

    /// Hash algorithm (quark, sha256d)
    #[arg(short, long, default_value = "quark", value_name = "ALGORITHM")]
    pub algo: String,

    /// Compact target to check against (e.g. 1e0ffff0). 80-byte headers
    /// are checked against their own nBits when omitted
    #[arg(short, long, value_name = "NBITS")]
    pub bits: Option<String>,

    /// Print hash bytes in natural (little-endian) order instead of display order
    #[arg(long)]
    pub raw: bool,

    /// Show the primitive applied at each Quark stage
    #[arg(long)]
    pub path: bool,

    /// Emit one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

pub fn display_banner() {
    eprintln!(
        "{} {}",
        "quark-hash".bright_cyan().bold(),
        format!("v{} | blake → bmw → groestl/skein → … → keccak/jh", env!("CARGO_PKG_VERSION")).bright_black(),
    );
}
