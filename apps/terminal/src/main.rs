//! # tipsplit Entry Point
//!
//! Thin binary wrapper: all setup lives in the library crate so integration
//! tests can drive the same code paths.
//!
//! Errors print with their full context chain and exit non-zero; in practice
//! the only user-visible errors are flag validation failures from the
//! one-shot mode and the missing-TTY message.

fn main() {
    if let Err(err) = tipsplit_tui::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
