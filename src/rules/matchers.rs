//! Text matchers shared by rules
//!
//! Patterns are compiled once on first use. A pattern that fails to compile
//! surfaces as an error from the calling check, never as a panic.

use std::sync::LazyLock;

use anyhow::anyhow;
use regex::Regex;

type Compiled = LazyLock<Result<Regex, regex::Error>>;

static APACHE_NAME: Compiled = LazyLock::new(|| Regex::new(r"(?i)apache license"));
static APACHE_VERSION: Compiled =
    LazyLock::new(|| Regex::new(r"(?i)version v?2\.0|apache (license )?v?2\.0"));
static LLVM_EXCEPTIONS: Compiled = LazyLock::new(|| Regex::new(r"(?i)llvm exceptions"));

static BOOST_NAME: Compiled = LazyLock::new(|| Regex::new(r"(?i)boost (software )?license"));
static BOOST_VERSION: Compiled =
    LazyLock::new(|| Regex::new(r"(?i)version 1\.0|v1\.0|boost software license (version )?1\.0"));

static MIT_NAME: Compiled = LazyLock::new(|| Regex::new(r"(?i)mit license"));

static SNAKE_CASE: Compiled =
    LazyLock::new(|| Regex::new(r"(^[a-z0-9]+$)|(^[a-z0-9][a-z0-9_.]+[a-z0-9]$)"));

/// The compiled form of a built-in pattern
pub(crate) fn compiled(pattern: &'static Compiled) -> anyhow::Result<&'static Regex> {
    pattern.as_ref().map_err(|e| anyhow!("invalid built-in pattern: {e}"))
}

/// Licenses a library may be published under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    /// Apache License 2.0 with LLVM Exceptions
    ApacheLlvm,
    /// Boost Software License 1.0
    Boost,
    /// MIT License
    Mit,
}

impl License {
    /// Recognize an approved license in free text, tolerating common variations
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn detect(content: &str) -> anyhow::Result<Option<Self>> {
        let found = |pattern: &'static Compiled| compiled(pattern).map(|re| re.is_match(content));

        if found(&APACHE_NAME)? && found(&APACHE_VERSION)? && found(&LLVM_EXCEPTIONS)? {
            return Ok(Some(Self::ApacheLlvm));
        }
        if found(&BOOST_NAME)? && found(&BOOST_VERSION)? {
            return Ok(Some(Self::Boost));
        }
        if found(&MIT_NAME)? {
            return Ok(Some(Self::Mit));
        }
        Ok(None)
    }

    /// Full name as shown to users
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ApacheLlvm => "Apache License - Version 2.0 with LLVM Exceptions",
            Self::Boost => "Boost Software License - Version 1.0",
            Self::Mit => "MIT License",
        }
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Lowercase alphanumerics, with `_` or `.` only between them
///
/// # Errors
///
/// Returns an error if the built-in pattern fails to compile.
pub fn is_snake_case(name: &str) -> anyhow::Result<bool> {
    Ok(compiled(&SNAKE_CASE)?.is_match(name))
}

/// A short library name: snake_case, without the `<prefix>.` namespace and
/// without a trailing language version such as `20`
///
/// # Errors
///
/// Returns an error if the built-in pattern fails to compile.
pub fn is_short_library_name(name: &str, prefix: &str) -> anyhow::Result<bool> {
    if name.starts_with(&format!("{prefix}.")) {
        return Ok(false);
    }
    if name.ends_with(|c: char| c.is_ascii_digit()) {
        return Ok(false);
    }
    is_snake_case(name)
}
