use std::process::ExitCode;

fn main() -> ExitCode {
    dealcheck_cli::run()
}
