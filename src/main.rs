//! termidx CLI binary.

use std::io::{self, Write};
use std::process;

use env_logger::{Builder, Target};

use termidx::cli::args::*;
use termidx::cli::commands::*;

fn main() {
    let args = TermidxArgs::parse_grouped();

    // Diagnostics go to stderr; stdout carries query answers only.
    Builder::new()
        .filter_level(args.log_level())
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute_command(args, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
