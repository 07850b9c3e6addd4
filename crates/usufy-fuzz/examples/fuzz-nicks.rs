//! Example: Fuzz the nicknames given on the command line.
//!
//! Settings come from `~/.config/usufy/config.toml` plus `USUFY_FUZZ_*`
//! environment overrides.
//!
//! ```text
//! USUFY_FUZZ_PATTERNS=patterns.txt cargo run -p usufy-fuzz --example fuzz-nicks -- alice bob
//! ```

use anyhow::Context;
use usufy_core::AppConfig;
use usufy_fuzz::Fuzzer;

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,usufy=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let nicks: Vec<String> = std::env::args().skip(1).collect();
    if nicks.is_empty() {
        anyhow::bail!("usage: fuzz-nicks <nick> [<nick> ...]");
    }

    let config = AppConfig::load_with_env().context("loading configuration")?;
    let fuzzer = Fuzzer::new(config.fuzz).context("building fuzzer")?;

    for (nick, variants) in fuzzer.fuzz_all(&nicks) {
        println!("{nick} ({} variants)", variants.len());
        for variant in variants {
            println!("  {variant}");
        }
    }

    Ok(())
}
