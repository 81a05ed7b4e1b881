use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::AddressBookError;
use crate::store::ContactDirectory;
use crate::validation::trim_optional;

pub struct CLIContext {
    pub dir: ContactDirectory,
    pub config: Config,
}

impl CLIContext {
    pub fn new(dir: ContactDirectory, config: Config) -> Self {
        Self { dir, config }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// The file named in `args`, or the configured export path.
    pub fn file_arg(&self, args: &str) -> PathBuf {
        trim_optional(Some(args))
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.export_path.clone())
    }

    pub fn print_error(&self, e: &AddressBookError) {
        println!("Error: {}", e);
    }
}
