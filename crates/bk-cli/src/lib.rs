//! Shared front end for the `gaussian-kernel` and `hemisphere-kernel` binaries.
//!
//! Each binary takes one positional radius and prints two lines to stdout:
//!
//! ```text
//! Radius = <radius + 0.5>
//! { <v0>, <v1>, ..., <vRadius> }
//! ```
//!
//! Argument errors go through clap (usage on stderr, exit code 2). Diagnostics
//! are emitted with `tracing` to stderr so stdout only carries the literal.

use std::io::Write;

use anyhow::{Context, Result};
use bk_core::{HalfKernel, KernelReport, Radius};
use bk_kernels::KernelKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
pub struct KernelArgs {
    /// Kernel radius in samples (non-negative integer).
    #[arg(
        value_name = "RADIUS",
        allow_negative_numbers = true,
        value_parser = parse_radius
    )]
    pub radius: Radius,
}

fn parse_radius(raw: &str) -> Result<Radius, bk_core::Error> {
    raw.parse()
}

pub fn bin_name(kind: KernelKind) -> &'static str {
    match kind {
        KernelKind::Gaussian => "gaussian-kernel",
        KernelKind::Hemisphere => "hemisphere-kernel",
    }
}

fn about(kind: KernelKind) -> &'static str {
    match kind {
        KernelKind::Gaussian => "Print a normalized binomial (Gaussian) blur half-kernel",
        KernelKind::Hemisphere => "Print a normalized hemisphere-profile blur half-kernel",
    }
}

pub fn command(kind: KernelKind) -> clap::Command {
    KernelArgs::command()
        .name(bin_name(kind))
        .bin_name(bin_name(kind))
        .about(about(kind))
}

pub fn try_parse_from<I, T>(kind: KernelKind, args: I) -> Result<KernelArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command(kind).try_get_matches_from(args)?;
    KernelArgs::from_arg_matches(&matches)
}

pub fn render(kind: KernelKind, radius: Radius) -> KernelReport {
    let kernel: HalfKernel = kind.generate(radius);
    debug!(
        kind = kind.name(),
        radius = radius.get(),
        center = kernel.center(),
        "generated kernel"
    );
    KernelReport::new(kernel)
}

pub fn write_report<W: Write>(out: &mut W, kind: KernelKind, radius: Radius) -> Result<()> {
    let report = render(kind, radius);
    write!(out, "{report}").context("writing kernel report")?;
    out.flush().context("flushing kernel report")?;
    Ok(())
}

pub fn init_tracing() {
    // Fixed filter: the tools take no configuration beyond the radius.
    let installed = fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    if let Err(err) = installed {
        debug!(%err, "tracing subscriber already installed");
    }
}

/// Entry point shared by both binaries.
pub fn run(kind: KernelKind) -> Result<()> {
    init_tracing();

    let args = try_parse_from(kind, std::env::args_os()).unwrap_or_else(|err| err.exit());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, kind, args.radius)
        .with_context(|| format!("{} {}", bin_name(kind), args.radius))
}
