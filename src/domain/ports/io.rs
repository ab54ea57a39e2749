use crate::error::AppError;

pub trait InputProvider {
    fn read_line(&self, prompt: &str) -> Result<String, AppError>;
    /// Reads a secret without echoing it back.
    fn read_secret(&self, prompt: &str) -> Result<String, AppError>;
}

pub trait OutputSink {
    fn print(&self, msg: &str);
    fn print_error(&self, err: &str);

    fn print_menu(&self, title: &str, options: &[&str]) {
        self.print(title);
        for (i, option) in options.iter().enumerate() {
            self.print(&format!("  {}. {}", i + 1, option));
        }
    }
}
