//! The `gonzo` binary: parses arguments via [`cli`] and turns any error into
//! a message on stderr and exit status 1. Everything else lives in the
//! library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        log::debug!("fatal: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
