use std::process::ExitCode;
use typed_script_lang::Error;

fn main() -> ExitCode {
    match typed_script_lang::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported where it happened
        Err(Error::Parse) => ExitCode::FAILURE,
        Err(err) => {
            println!("{}", err);
            ExitCode::FAILURE
        },
    }
}
