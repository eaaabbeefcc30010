//! Execution engine
//!
//! Runs bound checks one after another in the order they were resolved.
//! Each lifecycle call runs inside an isolation boundary: an error or a panic
//! in one check becomes a failed result for that check and the run moves on.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::check::{Check, CheckLog};
use super::models::{CheckResult, FailReason, Outcome, RunReport};
use super::ports::LogSink;
use super::resolver::BoundCheck;

/// Whether failed checks get remediation guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Evaluate only
    #[default]
    Check,
    /// Evaluate, then call `fix` on every rule failure
    Fix,
}

/// Drives checks through their lifecycle and aggregates the results
#[derive(Clone, Copy)]
pub struct Engine<'a> {
    sink: &'a dyn LogSink,
    mode: RunMode,
}

impl<'a> Engine<'a> {
    /// Create an engine that forwards events to `sink`
    #[must_use]
    pub fn new(sink: &'a dyn LogSink, mode: RunMode) -> Self {
        Self { sink, mode }
    }

    /// Run every check and build the report
    pub fn run(&self, standard: &str, checks: Vec<BoundCheck>) -> RunReport {
        let results = checks.into_iter().map(|check| self.run_one(check)).collect();
        RunReport::new(standard, results)
    }

    /// Run a single check through its lifecycle
    #[must_use]
    pub fn run_one(&self, bound: BoundCheck) -> CheckResult {
        let BoundCheck {
            id,
            kind,
            enabled,
            skip_unless_exists,
            mut instance,
        } = bound;
        log::debug!("running check [{kind}][{id}]");

        let mut log = CheckLog::new(&id, kind, self.sink);
        let (outcome, reason) = if !enabled {
            log.info("Check disabled by the standard.");
            (Outcome::Skipped, None)
        } else if let Some(path) = skip_unless_exists.filter(|p| !p.exists()) {
            log.info(format!("Skipped because '{}' does not exist.", path.display()));
            (Outcome::Skipped, None)
        } else {
            self.lifecycle(instance.as_mut(), &mut log)
        };

        let events = log.into_events();
        log::debug!("check [{kind}][{id}] ... {outcome}");
        CheckResult {
            id,
            kind,
            outcome,
            reason,
            events,
        }
    }

    fn lifecycle(
        &self,
        check: &mut dyn Check,
        log: &mut CheckLog<'_>,
    ) -> (Outcome, Option<FailReason>) {
        let internal = (Outcome::Fail, Some(FailReason::Internal));

        match contain(log, "should_skip", |log| Ok(check.should_skip(log))) {
            Some(true) => return (Outcome::Skipped, None),
            Some(false) => {},
            None => return internal,
        }

        match contain(log, "pre_check", |log| Ok(check.pre_check(log))) {
            Some(true) => {},
            Some(false) => {
                log.report("Precondition not met; the rule was not evaluated.");
                return (Outcome::Fail, Some(FailReason::Precondition));
            },
            None => return internal,
        }

        match contain(log, "check", |log| check.check(log)) {
            Some(true) => (Outcome::Pass, None),
            Some(false) => {
                if self.mode == RunMode::Fix {
                    // A failing fix is logged and never changes the outcome.
                    let _ = contain(log, "fix", |log| check.fix(log));
                }
                (Outcome::Fail, Some(FailReason::Rule))
            },
            None => internal,
        }
    }
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").field("mode", &self.mode).finish_non_exhaustive()
    }
}

/// Run one lifecycle call, turning errors and panics into an error event
fn contain<T>(
    log: &mut CheckLog<'_>,
    stage: &str,
    call: impl FnOnce(&mut CheckLog<'_>) -> anyhow::Result<T>,
) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(|| call(&mut *log))) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            log::warn!("check {} failed in {stage}: {e:#}", log.id());
            log.error(format!("internal check error in {stage}: {e:#}"));
            None
        },
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::warn!("check {} panicked in {stage}: {message}", log.id());
            log.error(format!("internal check error in {stage}: panicked: {message}"));
            None
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}
