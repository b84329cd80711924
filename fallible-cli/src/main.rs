//! Prints how each `fallible` computation fares on the fixed inputs.

#![forbid(unsafe_code)]

use std::io::Write;

use clap::Parser;
use eyre::WrapErr;
use fallible::driver::INPUTS;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

mod report_hook;

/// Runs the generic and structured computations over 7 and 42 and prints every outcome.
///
/// Diagnostics go to stderr, filtered by the `FALLIBLE_LOG` environment variable.
#[derive(Parser, Debug)]
#[command(version)]
struct Arguments {}

fn main() -> eyre::Result<()> {
    let Arguments {} = Arguments::parse();

    report_hook::install()?;

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .with_env_var("FALLIBLE_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish()
            .with(tracing_error::ErrorLayer::default()),
    )?;

    // Error level so the span is enabled under the default filter and shows up in reports.
    tracing::error_span!("write_outcomes", inputs = ?INPUTS).in_scope(|| -> eyre::Result<()> {
        let mut stdout = std::io::stdout().lock();
        fallible::driver::run(&mut stdout, &INPUTS).wrap_err("writing outcomes to stdout")?;
        stdout.flush().wrap_err("flushing stdout")?;
        Ok(())
    })
}
