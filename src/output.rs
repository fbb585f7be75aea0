//! Output formatting for human and JSON modes
//!
//! The final status line can be rendered either as human-readable text or as
//! a machine-parseable JSON object.

use colored::Colorize;
use serde::Serialize;

use crate::decision::Decision;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of the acceptance prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionResult {
    /// Whether the terms were accepted
    pub accepted: bool,
    /// Exit status the process terminates with
    pub exit_code: u8,
    /// Confirmation message
    pub message: String,
}

impl From<Decision> for DecisionResult {
    fn from(decision: Decision) -> Self {
        Self {
            accepted: decision.is_accepted(),
            exit_code: decision.exit_code(),
            message: decision.message().to_string(),
        }
    }
}

impl DecisionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human_line()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Status line for human mode, coloured when the terminal supports it
    #[must_use]
    pub fn human_line(&self) -> String {
        if self.accepted {
            format!("✅ {}", self.message.green())
        } else {
            format!("❌ {}", self.message.red())
        }
    }
}
