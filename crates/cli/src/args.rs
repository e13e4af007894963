use clap::Parser;
use ledger_snapshot::FormatMode;
use std::path::PathBuf;

/// Command-line arguments for ledger-dump
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ledger-dump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dump a complete ledger (header, transactions, state tree) to a JSON file",
    long_about = "Retrieves a ledger by sequence number from a full-history server and writes it to ledger.<seq>. The server is best effort: a failed run exits non-zero and can simply be re-run."
)]
pub struct CliArgs {
    /// Ledger sequence number
    #[arg(value_name = "LEDGER", allow_negative_numbers = true)]
    pub ledger: String,

    /// Specifies the config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output layout (pretty, compact)
    #[arg(short = 'f', long = "format", env = "LEDGER_DUMP_FORMAT", value_name = "FORMAT")]
    pub format: Option<FormatMode>,

    /// JSON-RPC endpoint of the full-history server
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write to this path instead of ledger.<seq>
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only create the output file once the whole ledger has been written
    #[arg(long = "atomic")]
    pub atomic: bool,
}

impl CliArgs {
    /// The requested ledger sequence number.
    pub fn sequence(&self) -> u32 {
        parse_sequence(&self.ledger)
    }
}

/// Reads a ledger sequence the lenient way: leading whitespace and an
/// optional sign, then as many digits as there are. Anything unparsable is 0,
/// and the value wraps to 32 bits.
pub fn parse_sequence(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0')));

    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    value as u32
}
