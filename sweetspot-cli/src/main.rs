//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = sweetspot_cli::run() {
        eprintln!("sweetspot: {err}");
        std::process::exit(1);
    }
}
