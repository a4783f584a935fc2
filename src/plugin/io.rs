//! Output channels for plugin progress and error lines

use super::traits::PluginIo;
use std::io::Write;

/// Writes progress and errors to stderr, keeping stdout for the result
#[derive(Debug, Clone)]
pub struct ConsoleIo {
    decorated: bool,
    quiet: bool,
}

impl ConsoleIo {
    pub fn new(decorated: bool) -> Self {
        Self {
            decorated,
            quiet: false,
        }
    }

    /// Suppress progress lines; error lines are still written
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl PluginIo for ConsoleIo {
    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn write_line(&mut self, line: &str) {
        if !self.quiet {
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }

    fn write_error_line(&mut self, line: &str) {
        let _ = writeln!(std::io::stderr(), "{}", line);
    }
}

/// Kind of a captured line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Output,
    Error,
}

/// Captures lines in memory, for embedding hosts and tests
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    lines: Vec<(LineKind, String)>,
    decorated: bool,
}

impl BufferedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    pub fn output_lines(&self) -> Vec<&str> {
        self.lines_of(LineKind::Output)
    }

    pub fn error_lines(&self) -> Vec<&str> {
        self.lines_of(LineKind::Error)
    }

    fn lines_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl PluginIo for BufferedIo {
    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push((LineKind::Output, line.to_string()));
    }

    fn write_error_line(&mut self, line: &str) {
        self.lines.push((LineKind::Error, line.to_string()));
    }
}
