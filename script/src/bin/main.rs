//! Converts a Solana recipient address into the bytes32 value a Wormhole
//! transfer script expects and prints the line to paste into it

use std::io;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wormhole_recipient_script::{
    config::Args,
    convert::convert,
    report::{emit, exit_code},
};

fn setup_logger(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    setup_logger(args.log_filter());

    info!(address = %args.address, "converting Solana recipient address");
    let result = convert(&args.address);

    if let Err(err) = &result {
        debug!(address = %args.address, %err, "conversion failed");
    }

    emit(
        &mut io::stdout(),
        &mut io::stderr(),
        &args.address,
        &result,
        args.json,
    )?;

    let code = exit_code(&result, args.strict);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
