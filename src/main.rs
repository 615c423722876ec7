// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod error;
mod input;
mod report;
mod runner;
mod types;
mod ui;

fn main() {
    env_logger::init();

    // Parse CLI arguments; usage errors exit 1, help and version exit 0
    let args = match cli::CliArgs::parse_args() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Resolve configuration; rejects conflicting formats before any output
    let config = match config::build_lint_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load, classify, render
    let compliant = match runner::run(&config) {
        Ok(compliant) => compliant,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    std::process::exit(runner::exit_code(compliant));
}
