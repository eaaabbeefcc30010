//! The check contract
//!
//! Every rule implements [`Check`]. The engine drives the four lifecycle
//! calls in a fixed order:
//!
//! 1. [`Check::should_skip`] - if true, nothing else runs and the result is skipped
//! 2. [`Check::pre_check`] - if false, the result is a failure and `check` does not run
//! 3. [`Check::check`] - the rule itself; reads the repository, never writes it
//! 4. [`Check::fix`] - only after a failure, and only in remediation mode
//!
//! Each call receives a [`CheckLog`] that records events into the check's
//! result and forwards them to the configured sink.

use std::path::Path;
use std::sync::Arc;

use super::models::{CheckId, CheckKind, Level, LogEvent, RepoInfo};
use super::ports::{LogSink, ReferenceLookup};
use super::standard::{CheckConfig, StandardMeta};

/// A single rule evaluated against a repository
pub trait Check {
    /// Whether the check should not run at all. Only logging is allowed here.
    fn should_skip(&mut self, _log: &mut CheckLog<'_>) -> bool {
        false
    }

    /// Precondition for `check`, e.g. a required file exists
    fn pre_check(&mut self, _log: &mut CheckLog<'_>) -> bool {
        true
    }

    /// Evaluate the rule. `Ok(true)` is a pass, `Ok(false)` a failure.
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool>;

    /// Emit remediation guidance after a failure
    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.warning("fix is not implemented for this check");
        Ok(())
    }
}

/// Event recorder handed to every lifecycle call of one check
pub struct CheckLog<'a> {
    id: &'a CheckId,
    failure_level: Level,
    sink: &'a dyn LogSink,
    events: Vec<LogEvent>,
}

impl<'a> CheckLog<'a> {
    /// Create a log for one check
    #[must_use]
    pub fn new(id: &'a CheckId, kind: CheckKind, sink: &'a dyn LogSink) -> Self {
        Self {
            id,
            failure_level: kind.failure_level(),
            sink,
            events: Vec::new(),
        }
    }

    /// Record an event and forward it to the sink
    pub fn emit(&mut self, level: Level, message: impl Into<String>) {
        let event = LogEvent::new(level, message);
        self.sink.emit(self.id, event.level, &event.message);
        self.events.push(event);
    }

    /// Informational event
    pub fn info(&mut self, message: impl Into<String>) {
        self.emit(Level::Info, message);
    }

    /// Warning event
    pub fn warning(&mut self, message: impl Into<String>) {
        self.emit(Level::Warning, message);
    }

    /// Error event
    pub fn error(&mut self, message: impl Into<String>) {
        self.emit(Level::Error, message);
    }

    /// Violation message at the check's failure level
    pub fn report(&mut self, message: impl Into<String>) {
        self.emit(self.failure_level, message);
    }

    /// Identifier of the check this log belongs to
    #[must_use]
    pub const fn id(&self) -> &CheckId {
        self.id
    }

    /// Events recorded so far
    #[must_use]
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Consume the log, yielding its events
    #[must_use]
    pub fn into_events(self) -> Vec<LogEvent> {
        self.events
    }
}

impl std::fmt::Debug for CheckLog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckLog")
            .field("id", self.id)
            .field("failure_level", &self.failure_level)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Everything a check constructor may bind to
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    /// The check's configuration record
    pub config: &'a CheckConfig,
    /// Shared repository info
    pub repo: &'a Arc<RepoInfo>,
    /// Standard metadata
    pub meta: &'a StandardMeta,
    /// Reference artifact lookup
    pub references: &'a Arc<dyn ReferenceLookup>,
}

impl CheckContext<'_> {
    /// Identifier of the check being built
    #[must_use]
    pub const fn id(&self) -> &CheckId {
        &self.config.id
    }

    /// Repository root
    #[must_use]
    pub fn root(&self) -> &Path {
        self.repo.root()
    }

    /// Full library name, e.g. `beman.exemplar`
    #[must_use]
    pub fn library_name(&self) -> String {
        format!("{}.{}", self.meta.library_prefix, self.repo.name())
    }

    /// Where the standard documents this check
    ///
    /// `<docs_url>#<category><name>` when the standard has a docs URL,
    /// otherwise a plain reference to the check.
    #[must_use]
    pub fn docs_link(&self) -> String {
        let id = self.id();
        match &self.meta.docs_url {
            Some(url) => format!("{url}#{}{}", id.category(), id.name()),
            None => format!("the {} documentation for {id}", self.meta.name),
        }
    }

    /// The target file for file-based checks: `file` option or the default
    #[must_use]
    pub fn file_or(&self, default: &str) -> String {
        self.config.file.clone().unwrap_or_else(|| default.to_string())
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("config", self.config)
            .field("repo", self.repo)
            .field("meta", self.meta)
            .finish_non_exhaustive()
    }
}
