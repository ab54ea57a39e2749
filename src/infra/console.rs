use inquire::{Password, PasswordDisplayMode, Text};

use crate::{
    domain::ports::io::{InputProvider, OutputSink},
    error::AppError,
};

#[derive(Clone, Copy, Default)]
pub struct ConsoleInput;

impl InputProvider for ConsoleInput {
    fn read_line(&self, prompt: &str) -> Result<String, AppError> {
        Ok(Text::new(prompt).prompt()?)
    }

    fn read_secret(&self, prompt: &str) -> Result<String, AppError> {
        Ok(Password::new(prompt)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?)
    }
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn print(&self, msg: &str) {
        println!("{msg}");
    }

    fn print_error(&self, err: &str) {
        eprintln!("❌ {err}");
    }
}
