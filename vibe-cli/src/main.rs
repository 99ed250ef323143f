//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = vibe_cli::run() {
        eprintln!("vibe: {err}");
        std::process::exit(1);
    }
}
