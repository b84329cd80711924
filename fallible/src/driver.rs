//! Runs both computations over a fixed set of inputs and writes their outcomes.

use std::fmt::Display;
use std::io::{self, Write};

use crate::compute::{UNWORKABLE, compute_basic, compute_structured};
use crate::error::{Error, Result};

/// The inputs the driver feeds through both computations, in order.
pub const INPUTS: [i64; 2] = [7, UNWORKABLE];

/// Writes one `"{label} worked: {value}"` or `"{label} failed: {error}"` line.
pub fn report<E: Display>(
    out: &mut impl Write,
    label: &str,
    outcome: &Result<i64, E>,
) -> io::Result<()> {
    match outcome {
        Ok(value) => writeln!(out, "{label} worked: {value}"),
        Err(error) => writeln!(out, "{label} failed: {error}"),
    }
}

/// Writes the argument and the problem on separate lines if `outcome` holds a structured failure.
///
/// Any other outcome writes nothing.
pub fn inspect(out: &mut impl Write, outcome: &Result<i64>) -> io::Result<()> {
    if let Err(Error::Structured(detail)) = outcome {
        writeln!(out, "{}", detail.argument())?;
        writeln!(out, "{}", detail.problem())?;
    }
    Ok(())
}

/// Reports [`compute_basic`] then [`compute_structured`] for every input, then inspects one more
/// structured failure through the generic [`Error`] slot.
#[tracing::instrument(level = "info", skip(out))]
pub fn run(out: &mut impl Write, inputs: &[i64]) -> io::Result<()> {
    for &input in inputs {
        report(out, "f1", &compute_basic(input))?;
    }
    for &input in inputs {
        report(out, "f2", &compute_structured(input))?;
    }

    let outcome = compute_structured(UNWORKABLE).map_err(Error::from);
    inspect(out, &outcome)
}
