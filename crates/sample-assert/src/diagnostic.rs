// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for the `sample-diff` binary.
//!
//! Everything here writes to stderr so stdout carries only the comparison
//! report. Errors and warnings are colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Print a fixture load or render failure to stderr.
///
/// Red when stderr is a terminal, plain `Error:` line otherwise.
pub fn print_error(msg: impl Display) {
    let colored = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, colored);
}

/// Write an `Error:` line, with ANSI red if `colored`.
fn write_error<W: Write>(out: &mut W, msg: impl Display, colored: bool) {
    let _ = if colored {
        writeln!(out, "\x1b[31mError: {msg}\x1b[0m")
    } else {
        writeln!(out, "Error: {msg}")
    };
}

/// Print a non-fatal condition (such as two empty sample files) to stderr.
pub fn print_warning(msg: impl Display) {
    let colored = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, colored);
}

fn write_warning<W: Write>(out: &mut W, msg: impl Display, colored: bool) {
    let _ = if colored {
        writeln!(out, "\x1b[33mWarning: {msg}\x1b[0m")
    } else {
        writeln!(out, "Warning: {msg}")
    };
}

/// Print a progress line to stderr; a no-op unless `verbose` (`--verbose`).
pub fn print_info(verbose: bool, msg: impl Display) {
    if verbose {
        write_info(&mut io::stderr(), msg);
    }
}

fn write_info<W: Write>(out: &mut W, msg: impl Display) {
    let _ = writeln!(out, "Info: {msg}");
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
