use clap::Parser;

use crate::convert::DEFAULT_SOLANA_ADDRESS;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Solana address into a Wormhole bytes32 recipient", long_about = None)]
pub struct Args {
    /// Solana recipient address (base58 encoded)
    #[arg(long, env = "SOLANA_RECIPIENT_ADDRESS", default_value = DEFAULT_SOLANA_ADDRESS)]
    pub address: String,

    /// Exit with a non-zero code when the address does not decode to 32 bytes
    #[arg(long)]
    pub strict: bool,

    /// Print the conversion as JSON instead of the Solidity script hint
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
