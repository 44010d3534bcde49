//! Output formatting for the CLI.

#[cfg(test)]
use std::sync::{Arc, Mutex};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Where human-readable lines go. Command results (JSON, bulk bodies,
/// suggestion lists) are written to stdout by the commands themselves.
#[derive(Clone)]
enum Sink {
    Stderr,
    #[cfg(test)]
    Buffer(Arc<Mutex<Vec<String>>>),
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    sink: Sink,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            sink: Sink::Stderr,
        }
    }

    #[cfg(test)]
    fn buffered(verbose: bool, json: bool) -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let output = Self {
            verbose,
            json,
            sink: Sink::Buffer(Arc::clone(&lines)),
        };
        (output, lines)
    }

    fn emit(&self, line: String) {
        match &self.sink {
            Sink::Stderr => eprintln!("{}", line),
            #[cfg(test)]
            Sink::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        self.emit(format!("{} {}", style("ℹ").blue(), msg));
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        self.emit(format!("{} {}", style("✓").green(), msg));
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        self.emit(format!("{} {}", style("⚠").yellow(), msg));
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            self.emit(serde_json::json!({ "error": msg }).to_string());
            return;
        }
        self.emit(format!("{} {}", style("✗").red(), style(msg).red()));
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        self.emit(format!("{} {}", style("→").dim(), style(msg).dim()));
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        self.emit(format!("\n{}", style(msg).bold().underlined()));
    }

    /// Print a `[section]` label.
    pub fn section(&self, name: &str) {
        if self.json {
            return;
        }
        self.emit(format!("[{}]", name));
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        self.emit(format!("  {}: {}", style(key).dim(), value));
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        self.emit(format!("  {} {}", style("•").dim(), item));
    }

    /// Create a progress bar.
    pub fn progress(&self, len: u64, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(bar_style.progress_chars("#>-"));
        }
        pb.set_message(msg.to_string());
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
