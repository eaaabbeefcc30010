//! `directory.*` rules: where sources, tests, examples, docs and papers live
//!
//! These rules work on the file list captured when the repository was
//! scanned, so they never walk the tree themselves.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use glob::Pattern;

use super::see;
use crate::core::check::{Check, CheckContext, CheckLog};
use crate::core::error::ConfigError;
use crate::core::file_target::DirTarget;
use crate::core::models::RepoInfo;
use crate::core::registry::{CheckDescriptor, RegistryBuilder};

/// Source locations other than `src/` that libraries must not use
const FORBIDDEN_SOURCE_DIRS: &[&str] = &["source", "sources", "lib", "library"];

/// Extensions of files that belong to a paper
const PAPER_EXTENSIONS: &[&str] = &[
    "md", "bib", "bst", "tex", "sty", "cls", "pdf", "docx", "org", "html", "css", "js", "asciidoc",
    "asc", "ad", "ascdoc", "rst", "wip", "draft", "proposal", "standard",
];

/// Register the `directory` category
pub fn register(builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
    builder.register(
        "directory.sources",
        CheckDescriptor::new(Sources::build, "Sources live in src/<prefix>/<name>"),
    )?;
    builder.register(
        "directory.tests",
        CheckDescriptor::new(Tests::build, "Tests live in tests/<prefix>/<name>"),
    )?;
    builder.register(
        "directory.examples",
        CheckDescriptor::new(Examples::build, "examples/ holds C++ examples and a CMakeLists.txt"),
    )?;
    builder.register(
        "directory.docs",
        CheckDescriptor::new(Docs::build, "Markdown documentation lives in docs/"),
    )?;
    builder.register(
        "directory.papers",
        CheckDescriptor::new(Papers::build, "Paper sources live in papers/"),
    )
}

/// `<top>/<prefix>/<name>`, e.g. `src/beman/exemplar`
fn library_tree(ctx: &CheckContext<'_>, top: &str) -> PathBuf {
    Path::new(top).join(&ctx.meta.library_prefix).join(ctx.repo.name())
}

/// First path component, as text
fn top_dir(path: &Path) -> Option<&str> {
    match path.components().next()? {
        Component::Normal(name) if path.components().nth(1).is_some() => name.to_str(),
        _ => None,
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

fn report_misplaced(log: &mut CheckLog<'_>, what: &str, files: &[&PathBuf], docs: &str) {
    for file in files {
        log.report(format!("Misplaced {what} file found: {}. {}", file.display(), see(docs)));
    }
}

/// Sources live in `src/<prefix>/<name>`, or nowhere for header-only libraries
#[derive(Debug)]
pub struct Sources {
    repo: Arc<RepoInfo>,
    tree: DirTarget,
    docs: String,
}

impl Sources {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            repo: Arc::clone(ctx.repo),
            tree: DirTarget::new(ctx.repo, library_tree(ctx, "src")),
            docs: ctx.docs_link(),
        }))
    }
}

impl Check for Sources {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let tree = self.tree.relative().display().to_string();

        for dir in FORBIDDEN_SOURCE_DIRS {
            if self.repo.path(dir).is_dir() {
                log.report(format!(
                    "Please move source files from {dir}/ to {tree}. {}",
                    see(&self.docs)
                ));
                return Ok(false);
            }
        }

        if self.repo.layout().has_sources && !self.tree.exists() {
            log.report(format!(
                "Please use the required source files location: {tree}. {}",
                see(&self.docs)
            ));
            return Ok(false);
        }

        Ok(true)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please manually move sources to {}. {}",
            self.tree.relative().display(),
            see(&self.docs)
        ));
        Ok(())
    }
}

/// No test files outside `tests/`, and `tests/<prefix>/<name>` holds real tests
#[derive(Debug)]
pub struct Tests {
    repo: Arc<RepoInfo>,
    tree: DirTarget,
    docs: String,
}

impl Tests {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            repo: Arc::clone(ctx.repo),
            tree: DirTarget::new(ctx.repo, library_tree(ctx, "tests")),
            docs: ctx.docs_link(),
        }))
    }

    fn is_test_path(path: &Path) -> bool {
        path.components()
            .any(|c| c.as_os_str().to_string_lossy().contains("test"))
    }
}

impl Check for Tests {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.tree.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let misplaced: Vec<_> = self
            .repo
            .files()
            .iter()
            .filter(|f| !matches!(top_dir(f), Some("tests" | ".github")))
            .filter(|f| Self::is_test_path(f))
            .collect();

        if !misplaced.is_empty() {
            report_misplaced(log, "test", &misplaced, &self.docs);
            log.report(format!(
                "Please move all test files within the tests/ directory. {}",
                see(&self.docs)
            ));
            return Ok(false);
        }

        let tree = self.tree.relative();
        let mut tests = 0;
        let mut cmake = 0;
        for file in self.repo.files_under(tree) {
            let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            if name.contains(".test.") {
                tests += 1;
            }
            if name == "CMakeLists.txt" {
                cmake += 1;
            }
        }

        if tests == 0 || cmake == 0 {
            log.report(format!(
                "Missing relevant test files in {}: need *.test.* files and a CMakeLists.txt. {}",
                tree.display(),
                see(&self.docs)
            ));
            return Ok(false);
        }

        Ok(true)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please manually move test files to the {} directory. {}",
            self.tree.relative().display(),
            see(&self.docs)
        ));
        Ok(())
    }
}

/// `examples/` holds at least one C++ example and a CMakeLists.txt
#[derive(Debug)]
pub struct Examples {
    repo: Arc<RepoInfo>,
    dir: DirTarget,
    docs: String,
}

impl Examples {
    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            repo: Arc::clone(ctx.repo),
            dir: DirTarget::new(ctx.repo, "examples"),
            docs: ctx.docs_link(),
        }))
    }

    fn any_match(&self, pattern: &str) -> anyhow::Result<bool> {
        let pattern = Pattern::new(pattern)?;
        Ok(self.repo.files().iter().any(|f| pattern.matches_path(f)))
    }
}

impl Check for Examples {
    fn pre_check(&mut self, log: &mut CheckLog<'_>) -> bool {
        self.dir.precondition(log)
    }

    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        if !self.any_match("examples/**/*.cpp")? {
            log.report(format!(
                "Missing one relevant example - cannot find examples/**/*.cpp. {}",
                see(&self.docs)
            ));
            return Ok(false);
        }

        if !self.any_match("examples/**/*CMakeLists.txt")? {
            log.report(format!(
                "Missing CMakeLists.txt for examples - cannot find examples/**/*CMakeLists.txt. {}",
                see(&self.docs)
            ));
            return Ok(false);
        }

        Ok(true)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please add a relevant example to the examples/ directory. {}",
            see(&self.docs)
        ));
        Ok(())
    }
}

/// Markdown files live in `docs/`, apart from the root README
#[derive(Debug)]
pub struct Docs {
    repo: Arc<RepoInfo>,
    docs: String,
}

impl Docs {
    const ALLOWED: &'static [&'static str] = &["docs", "src", "papers", "examples", ".github"];

    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            repo: Arc::clone(ctx.repo),
            docs: ctx.docs_link(),
        }))
    }

    fn is_misplaced(path: &Path) -> bool {
        if path == Path::new("README.md") || !has_extension(path, &["md"]) {
            return false;
        }
        !path
            .components()
            .any(|c| c.as_os_str().to_str().is_some_and(|c| Self::ALLOWED.contains(&c)))
    }
}

impl Check for Docs {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let misplaced: Vec<_> = self.repo.files().iter().filter(|f| Self::is_misplaced(f)).collect();
        if misplaced.is_empty() {
            return Ok(true);
        }

        report_misplaced(log, "MD", &misplaced, &self.docs);
        log.report(format!(
            "Please move all documentation files within the docs/ directory, except for the root README.md file. {}",
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please manually move documentation files to the docs/ directory. {}",
            see(&self.docs)
        ));
        Ok(())
    }
}

/// Paper-related files live in `papers/`
#[derive(Debug)]
pub struct Papers {
    repo: Arc<RepoInfo>,
    docs: String,
}

impl Papers {
    const ALLOWED: &'static [&'static str] = &["papers", "src", "docs", "examples", ".github"];

    fn build(ctx: &CheckContext<'_>) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self {
            repo: Arc::clone(ctx.repo),
            docs: ctx.docs_link(),
        }))
    }

    fn is_misplaced(path: &Path) -> bool {
        if path == Path::new("README.md") || !has_extension(path, PAPER_EXTENSIONS) {
            return false;
        }
        !top_dir(path).is_some_and(|top| Self::ALLOWED.contains(&top))
    }
}

impl Check for Papers {
    fn check(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<bool> {
        let misplaced: Vec<_> = self.repo.files().iter().filter(|f| Self::is_misplaced(f)).collect();
        if misplaced.is_empty() {
            return Ok(true);
        }

        report_misplaced(log, "paper", &misplaced, &self.docs);
        log.report(format!(
            "Please move all paper related files (and directories if applicable) within the papers/ directory. {}",
            see(&self.docs)
        ));
        Ok(false)
    }

    fn fix(&mut self, log: &mut CheckLog<'_>) -> anyhow::Result<()> {
        log.info(format!(
            "Please move all paper related files to the papers/ directory. {}",
            see(&self.docs)
        ));
        Ok(())
    }
}
