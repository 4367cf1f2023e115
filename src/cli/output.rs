//! Output formatting for CLI commands

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints the response to a successful mutating command.
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a failed command's message verbatim.
    pub fn failure(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a listing, one element per line in text mode (`(none)`
    /// when empty), a JSON array otherwise.
    pub fn list(&self, lines: &[String]) {
        match self.format {
            OutputFormat::Text => {
                if lines.is_empty() {
                    println!("(none)");
                } else {
                    for line in lines {
                        println!("{}", line);
                    }
                }
            }
            OutputFormat::Json => println!("{}", serde_json::json!(lines)),
        }
    }

    /// Prints pre-rendered output unchanged in either mode.
    pub fn raw(&self, s: &str) {
        println!("{}", s);
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }
}
