use std::process::ExitCode;

pub trait Client {
    fn run(&mut self) -> ExitCode;
}
