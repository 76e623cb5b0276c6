//! menagerie CLI entry point
//!
//! Delegates everything to `cli::run`, prints the error to stderr and exits
//! non-zero on failure.

use menagerie::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
