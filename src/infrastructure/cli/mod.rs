use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

/// Parse arguments; `--help` and `--version` exit 0, any usage error exits 1.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::from(1),
        }
    })
}
