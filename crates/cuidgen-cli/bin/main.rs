mod cli;

use crate::cli::CLI;
use clap::Parser;
use cuidgen::Generator;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries only the ids
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = CLI::parse();

    debug!(
        big = config.big,
        length = ?config.length,
        fingerprint_supplied = config.fingerprint.is_some(),
        count = config.count,
        "generating ids"
    );

    let generator = Generator::init(config.generator_config())?;

    let mut stdout = io::stdout().lock();
    for _ in 0..config.count {
        let id = generator.next_id()?;
        writeln!(stdout, "{id}")?;
    }

    Ok(())
}
