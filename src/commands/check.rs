//! Check a repository against a standard

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use repotidy::adapters::toml::load_for_repo;
use repotidy::adapters::{ConsoleSink, LogFacadeSink, NullSink, ReferenceDir, git};
use repotidy::core::engine::{Engine, RunMode};
use repotidy::core::ports::{LogSink, ReferenceLookup};
use repotidy::core::resolver::Resolver;
use repotidy::output::{OutputMode, render_report};
use repotidy::{EXIT_FAILURE, EXIT_SUCCESS, rules};

/// Arguments of `repotidy check`
#[derive(Debug)]
pub struct CheckArgs {
    /// Repository to check
    pub path: PathBuf,
    /// Explicit standard document
    pub standard: Option<PathBuf>,
    /// Reference artifact directory
    pub references: Option<PathBuf>,
    /// Emit remediation guidance for failures
    pub fix: bool,
    /// Restrict the run to these identifiers
    pub checks: Vec<String>,
    /// Repository name override
    pub repo_name: Option<String>,
}

/// Run the configured checks and report
pub fn check(args: &CheckArgs, verbose: bool, mode: OutputMode) -> anyhow::Result<i32> {
    let mut repo = git::discover(&args.path)
        .with_context(|| format!("cannot inspect repository {}", args.path.display()))?;
    if let Some(name) = &args.repo_name {
        repo = repo.with_name(name.as_str());
    }
    log::debug!(
        "checking {} ({}, build system {:?})",
        repo.name(),
        repo.root().display(),
        repo.layout().build_system
    );

    let standard = load_for_repo(args.standard.as_deref(), repo.root())?;
    let registry = rules::registry()?;
    let references: Arc<dyn ReferenceLookup> = match &args.references {
        Some(dir) => Arc::new(ReferenceDir::new(dir)),
        None => Arc::new(ReferenceDir::bundled().context("cannot unpack bundled references")?),
    };

    let selection = (!args.checks.is_empty()).then_some(args.checks.as_slice());
    let resolver = Resolver::new(&registry, Arc::new(repo), references);
    let bound = resolver.bind_selected(&standard, selection)?;

    let sink: &dyn LogSink = match (mode, verbose) {
        (OutputMode::Json, _) => &NullSink,
        (OutputMode::Human, true) => &ConsoleSink,
        (OutputMode::Human, false) => &LogFacadeSink,
    };
    let run_mode = if args.fix { RunMode::Fix } else { RunMode::Check };

    let report = Engine::new(sink, run_mode).run(&standard.meta.name, bound);
    render_report(&report, mode);

    Ok(if report.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
