//! lbe CLI
//!
//! Entry point for the `lbe` command-line tool.

use std::process;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    process::exit(lvm_be::app::run(&argv));
}
