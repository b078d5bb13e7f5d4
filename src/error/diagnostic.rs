//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting error messages with
//! source code context.

use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    line: usize,
    message: String,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(line: usize, message: &str) -> Self {
        Self {
            line,
            message: message.to_string(),
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(line: usize, message: &str, source: &str) -> Self {
        Self {
            line,
            message: message.to_string(),
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = "Lexer Error".red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.message);
        output.push('\n');

        // Location and source context
        output.push_str(&format!("  {} line {}\n", "-->".blue().bold(), self.line));

        if let Some(ref source) = self.source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Format source code context around the error line
    fn format_source_context(&self, source: &str) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if self.line == 0 || self.line > lines.len() {
            return output;
        }

        let line_idx = self.line - 1;
        let line_num_width = self.line.to_string().len();

        // Show previous line if available
        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        // Show error line
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", self.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        // Show next line if available
        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
