//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Check events are not
//! printed here; they reach the user through the configured log sink.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckKind, Outcome, RunReport, Tally};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Render a run report
pub fn render_report(report: &RunReport, mode: OutputMode) {
    match mode {
        OutputMode::Human => print!("{}", human_report(report)),
        OutputMode::Json => println!("{}", report_json(report)),
    }
}

/// The report as pretty-printed JSON
#[must_use]
pub fn report_json(report: &RunReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

/// The report as human-readable text
#[must_use]
pub fn human_report(report: &RunReport) -> String {
    let mut out = format!("Checked against {}\n\n", report.standard());

    for result in report.results() {
        let outcome = match result.outcome {
            Outcome::Pass => "passed".green(),
            Outcome::Fail => "failed".red(),
            Outcome::Skipped => "skipped".dimmed(),
        };
        out.push_str(&format!("  [{:<14}] {} ... {outcome}\n", result.kind.to_string(), result.id));
    }

    out.push('\n');
    out.push_str(&tally_line("Requirements:   ", report.tally(CheckKind::Requirement)));
    out.push_str(&tally_line("Recommendations:", report.tally(CheckKind::Recommendation)));
    out.push_str(&format!("Coverage: {:.2}%\n\n", report.coverage()));

    if report.passed() {
        out.push_str(&format!("{}\n", "PASSED".green().bold()));
    } else {
        out.push_str(&format!(
            "{}: {} check(s) failed\n",
            "FAILED".red().bold(),
            report.failures()
        ));
    }
    out
}

fn tally_line(label: &str, tally: Tally) -> String {
    format!(
        "{label} {} passed, {} failed, {} skipped\n",
        tally.passed, tally.failed, tally.skipped
    )
}

/// Result of listing the registered checks
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Name of the standard the listing was compared with
    pub standard: String,
    /// Registered checks, sorted by identifier
    pub checks: Vec<ListedCheck>,
}

/// One registered check
#[derive(Debug, Serialize)]
pub struct ListedCheck {
    /// Check identifier
    pub id: String,
    /// One-line summary
    pub summary: String,
    /// Per-check options the check accepts
    pub options: Vec<String>,
    /// Kind given by the standard, if the standard lists the check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CheckKind>,
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.checks.is_empty() {
            println!("No checks registered.");
            return;
        }

        println!("Checks ({} listed in {}):\n", self.listed(), self.standard);
        for check in &self.checks {
            let kind = check.kind.map_or_else(|| "not listed".dimmed().to_string(), |k| k.to_string());
            println!("  {:<40} [{kind}]", check.id);
            println!("      {}", check.summary);
            if !check.options.is_empty() {
                println!("      options: {}", check.options.join(", "));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Number of registered checks the standard lists
    #[must_use]
    pub fn listed(&self) -> usize {
        self.checks.iter().filter(|c| c.kind.is_some()).count()
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// A fatal error, reported instead of a run report
#[derive(Debug, Serialize)]
pub struct ErrorResult {
    /// The error chain, outermost first
    pub error: String,
}

impl ErrorResult {
    /// Render the error based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => eprintln!("error: {}", self.error),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
