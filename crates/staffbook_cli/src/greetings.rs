//! Greeting source for the chat loop.
//!
//! # Responsibility
//! - Load greeting lines from a plain text file, one per line.
//! - Fall back to a fixed canned list when the file is absent or short.

use log::warn;
use std::fs;
use std::path::Path;

/// Canned fallback, used whenever the greetings file cannot serve all
/// three slots.
const FALLBACK_GREETINGS: [&str; 3] = ["Hi there!", "Hello!", "Hey! How can I help you?"];

/// Three greeting slots: welcome banner, "hi" reply, "hello" reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greetings {
    lines: Vec<String>,
}

impl Greetings {
    /// Reads greetings from `path`.
    ///
    /// A missing file is not an error: the fallback list is substituted, as
    /// is a file with fewer than three non-empty lines.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => {
                let lines: Vec<String> = raw
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                if lines.len() >= 3 {
                    Self { lines }
                } else {
                    warn!(
                        "event=greetings_load module=cli status=fallback path={} lines={}",
                        path.display(),
                        lines.len()
                    );
                    Self::fallback()
                }
            }
            Err(_) => {
                warn!(
                    "event=greetings_load module=cli status=fallback path={} reason=unreadable",
                    path.display()
                );
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            lines: FALLBACK_GREETINGS
                .iter()
                .map(|line| line.to_string())
                .collect(),
        }
    }

    pub fn welcome(&self) -> &str {
        &self.lines[0]
    }

    pub fn hi(&self) -> &str {
        &self.lines[1]
    }

    pub fn hello(&self) -> &str {
        &self.lines[2]
    }
}
