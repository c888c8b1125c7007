// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sample-diff` entry point.

use clap::Parser;

use sample_assert::cli::{exit_codes, Cli};
use sample_assert::diagnostic::{print_error, print_info, print_warning};
use sample_assert::load_jsonl;
use sample_assert::report::DiffOutcome;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let (left, right) = match tokio::try_join!(load_jsonl(&cli.left), load_jsonl(&cli.right)) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };
    print_info(
        cli.verbose,
        format_args!(
            "loaded {} samples from {} and {} from {}",
            left.len(),
            cli.left.display(),
            right.len(),
            cli.right.display()
        ),
    );
    if left.is_empty() && right.is_empty() {
        print_warning("both sample files are empty");
    }

    let outcome = DiffOutcome::evaluate(&left, &right, cli.message.as_deref(), cli.context);
    let code = outcome.write_report(cli.format, &mut std::io::stdout());

    std::process::exit(code);
}
