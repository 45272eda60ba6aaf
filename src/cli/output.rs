//! Terminal output for `init` and `config`
//!
//! Every line is built as a string first, so the plain (`--no-color`) form can
//! be asserted in tests.

use owo_colors::OwoColorize;

/// Kind of status line, which picks its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Info,
    Warn,
    Error,
    Created,
    Skipped,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Info => "[INFO]",
            Status::Warn => "[WARN]",
            Status::Error => "[ERROR]",
            Status::Created => "[CREATED]",
            Status::Skipped => "[SKIPPED]",
        }
    }

    fn marker(self) -> String {
        match self {
            Status::Ok | Status::Created => "✓".green().bold().to_string(),
            Status::Info => "•".blue().to_string(),
            Status::Warn => "⚠".yellow().bold().to_string(),
            Status::Error => "✗".red().bold().to_string(),
            Status::Skipped => "○".yellow().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn status_line(&self, status: Status, message: &str) -> String {
        if self.colored {
            format!("  {} {}", status.marker(), message)
        } else {
            format!("  {} {}", status.tag(), message)
        }
    }

    /// Print a status line; errors go to stderr
    pub fn status(&self, status: Status, message: &str) {
        let line = self.status_line(status, message);
        if status == Status::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    pub fn banner(&self) {
        let version = concat!("v", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!("\n   {}  {}\n", "Nex.Ai".bright_cyan().bold(), version.dimmed());
        } else {
            println!("\n   Nex.Ai  {version}\n");
        }
    }

    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bold().underline());
        } else {
            println!("\n  === {title} ===");
        }
    }

    pub fn kv_line(&self, key: &str, value: &str) -> String {
        if self.colored {
            format!("    {}: {}", key.dimmed(), value)
        } else {
            format!("    {key}: {value}")
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        println!("{}", self.kv_line(key, value));
    }

    /// Dimmed trailing note, preceded by a blank line
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {}", message.dimmed().italic());
        } else {
            println!("\n  [TIP] {message}");
        }
    }

    /// Indented shell command suggestion
    pub fn command(&self, cmd: &str) {
        let line = format!("$ {cmd}");
        if self.colored {
            println!("     {}", line.bright_cyan());
        } else {
            println!("     {line}");
        }
    }
}
