use std::process::ExitCode;

fn main() -> ExitCode {
    poetry_version::app::startup::startup()
}
