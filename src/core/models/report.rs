//! Check results and the run report
//!
//! Results are created once by the engine and never mutated afterwards.

use serde::Serialize;

use super::{CheckId, CheckKind, Level};

/// A message emitted by a check during its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    /// Severity of the message
    pub level: Level,
    /// Human-readable text
    pub message: String,
}

impl LogEvent {
    /// Create a new event
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The rule holds
    Pass,
    /// The rule does not hold, or the check could not be evaluated
    Fail,
    /// The check was not evaluated
    Skipped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "passed"),
            Self::Fail => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Why a check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailReason {
    /// `pre_check` returned false
    Precondition,
    /// `check` returned false
    Rule,
    /// A lifecycle call returned an error or panicked
    Internal,
}

/// Result of running one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Identifier of the check
    pub id: CheckId,
    /// Requirement or recommendation
    pub kind: CheckKind,
    /// Pass, fail or skipped
    pub outcome: Outcome,
    /// Set when `outcome` is `Fail`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailReason>,
    /// Events emitted while the check ran, in emission order
    pub events: Vec<LogEvent>,
}

impl CheckResult {
    /// Whether this result counts against the run
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.outcome == Outcome::Fail
    }
}

/// Outcome counts for one check kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Checks that passed
    pub passed: usize,
    /// Checks that failed
    pub failed: usize,
    /// Checks that were skipped
    pub skipped: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// Number of checks counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// The ordered outcome of running every configured check once
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    standard: String,
    passed: bool,
    requirements: Tally,
    recommendations: Tally,
    coverage: f64,
    generated_at: String,
    results: Vec<CheckResult>,
}

impl RunReport {
    /// Build a report from results in execution order
    #[must_use]
    pub fn new(standard: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let mut requirements = Tally::default();
        let mut recommendations = Tally::default();
        for result in &results {
            match result.kind {
                CheckKind::Requirement => requirements.record(result.outcome),
                CheckKind::Recommendation => recommendations.record(result.outcome),
            }
        }

        let passed = !results.iter().any(CheckResult::is_fail);
        let coverage = coverage(&results);

        Self {
            standard: standard.into(),
            passed,
            requirements,
            recommendations,
            coverage,
            generated_at: chrono::Utc::now().to_rfc3339(),
            results,
        }
    }

    /// Name of the standard the repository was checked against
    #[must_use]
    pub fn standard(&self) -> &str {
        &self.standard
    }

    /// Overall status: true iff no non-skipped result failed
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Results in standard order
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Look up the result for one check
    #[must_use]
    pub fn result(&self, id: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.id.as_str() == id)
    }

    /// Outcome counts for checks of the given kind
    #[must_use]
    pub const fn tally(&self, kind: CheckKind) -> Tally {
        match kind {
            CheckKind::Requirement => self.requirements,
            CheckKind::Recommendation => self.recommendations,
        }
    }

    /// Percentage of checks that passed or were skipped
    #[must_use]
    pub const fn coverage(&self) -> f64 {
        self.coverage
    }

    /// RFC 3339 timestamp of when the report was built
    #[must_use]
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// Number of failed checks
    #[must_use]
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.is_fail()).count()
    }
}

#[allow(clippy::cast_precision_loss)]
fn coverage(results: &[CheckResult]) -> f64 {
    if results.is_empty() {
        return 100.0;
    }
    let ok = results.iter().filter(|r| !r.is_fail()).count();
    let ratio = ok as f64 / results.len() as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
