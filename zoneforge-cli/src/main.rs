//! Entry point for the `zoneforge` binary.
#![forbid(unsafe_code)]

use zoneforge_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match zoneforge_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("zoneforge: {err}");
            std::process::exit(1);
        }
    }
}
