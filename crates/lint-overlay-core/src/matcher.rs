//! Include/exclude glob predicates over relative file paths.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use miette::Diagnostic;
use std::path::Path;

/// A glob pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("invalid glob pattern `{pattern}`: {reason}")]
#[diagnostic(
    code(lint_overlay::matcher_syntax),
    help("patterns support `*`, `**`, `?`, `[...]` and `{{a,b}}` alternation")
)]
pub struct MatcherSyntaxError {
    /// The pattern as written.
    pub pattern: String,
    /// Why it was rejected.
    pub reason: String,
}

impl MatcherSyntaxError {
    pub(crate) fn new(pattern: &str, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Path predicate built from include and exclude glob patterns.
///
/// An empty include list matches every path. Excludes are checked after
/// includes and always win.
///
/// ```
/// use lint_overlay_core::FileMatcher;
///
/// let matcher = FileMatcher::new(["src/**"], ["src/generated/**"]).unwrap();
/// assert!(matcher.matches("src/app/x.ts"));
/// assert!(!matcher.matches("src/generated/x.ts"));
/// ```
#[derive(Debug, Clone)]
pub struct FileMatcher {
    include: Vec<String>,
    exclude: Vec<String>,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Compiles a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherSyntaxError`] for the first pattern that is empty or
    /// has malformed glob syntax (for example an unclosed `{`).
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Result<Self, MatcherSyntaxError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let include: Vec<String> = include.into_iter().map(Into::into).collect();
        let exclude: Vec<String> = exclude.into_iter().map(Into::into).collect();
        let include_set = build_set(&include)?;
        let exclude_set = build_set(&exclude)?;
        Ok(Self {
            include,
            exclude,
            include_set,
            exclude_set,
        })
    }

    /// A matcher with no patterns, matching every path.
    #[must_use]
    pub fn global() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            include_set: GlobSet::empty(),
            exclude_set: GlobSet::empty(),
        }
    }

    /// Returns true if no include pattern restricts this matcher.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.include.is_empty()
    }

    /// Include patterns as written.
    #[must_use]
    pub fn include_patterns(&self) -> &[String] {
        &self.include
    }

    /// Exclude patterns as written.
    #[must_use]
    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude
    }

    /// Tests a normalized, `/`-separated relative path.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if !self.include.is_empty() && !self.include_set.is_match(path) {
            return false;
        }
        !self.exclude_set.is_match(path)
    }

    /// Tests a filesystem path after [`normalize_path`].
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        self.matches(&normalize_path(path))
    }
}

impl Default for FileMatcher {
    fn default() -> Self {
        Self::global()
    }
}

/// Compiles a single pattern. `*` never crosses a `/`; `**` spans segments.
pub(crate) fn compile_glob(pattern: &str) -> Result<globset::Glob, MatcherSyntaxError> {
    if pattern.is_empty() {
        return Err(MatcherSyntaxError::new(pattern, "pattern is empty"));
    }
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| MatcherSyntaxError::new(pattern, e.kind().to_string()))
}

fn build_set(patterns: &[String]) -> Result<GlobSet, MatcherSyntaxError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder
        .build()
        .map_err(|e| MatcherSyntaxError::new(&patterns.join(", "), e.to_string()))
}

/// Converts a path into the `/`-separated form patterns are matched against.
///
/// Backslashes become `/` and a leading `./` is dropped. The project root,
/// spelled `.` or `./`, becomes the empty path.
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let mut rest = text.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    if rest == "." {
        rest = "";
    }
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(include: &[&str], exclude: &[&str]) -> FileMatcher {
        FileMatcher::new(include.iter().copied(), exclude.iter().copied()).unwrap()
    }

    #[test]
    fn empty_include_matches_everything() {
        let m = matcher(&[], &[]);
        assert!(m.is_global());
        assert!(m.matches("src/app/page.ts"));
        assert!(m.matches("README.md"));
    }

    #[test]
    fn globstar_matches_at_any_depth() {
        let m = matcher(&["**/*.ts"], &[]);
        assert!(m.matches("page.ts"));
        assert!(m.matches("src/app/page.ts"));
        assert!(!m.matches("src/app/page.tsx"));
    }

    #[test]
    fn star_stays_within_segment() {
        let m = matcher(&["src/*.ts"], &[]);
        assert!(m.matches("src/index.ts"));
        assert!(!m.matches("src/app/index.ts"));
    }

    #[test]
    fn directory_prefix_only_under_directory() {
        let m = matcher(&["src/**/*"], &[]);
        assert!(m.matches("src/app/page.ts"));
        assert!(m.matches("src/index.ts"));
        assert!(!m.matches("lib/index.ts"));
        assert!(!m.matches("other/src/index.ts"));
    }

    #[test]
    fn brace_alternation() {
        let m = matcher(&["**/*.{ts,tsx}"], &[]);
        assert!(m.matches("src/a.ts"));
        assert!(m.matches("src/a.tsx"));
        assert!(!m.matches("src/a.js"));
    }

    #[test]
    fn exclude_wins_over_include() {
        let m = matcher(&["src/**"], &["src/generated/**"]);
        assert!(m.matches("src/app/x.ts"));
        assert!(!m.matches("src/generated/x.ts"));
    }

    #[test]
    fn exclude_only_matcher_is_global_minus_excludes() {
        let m = matcher(&[], &["**/*.d.ts"]);
        assert!(m.is_global());
        assert!(m.matches("src/a.ts"));
        assert!(!m.matches("src/a.d.ts"));
    }

    #[test]
    fn unclosed_brace_is_syntax_error() {
        let err = FileMatcher::new(["src/{a,b"], Vec::<String>::new()).unwrap_err();
        assert_eq!(err.pattern, "src/{a,b");
    }

    #[test]
    fn empty_pattern_is_syntax_error() {
        assert!(FileMatcher::new([""], Vec::<String>::new()).is_err());
    }

    #[test]
    fn bad_exclude_is_syntax_error() {
        assert!(FileMatcher::new(["**"], ["[z-a"]).is_err());
    }

    #[test]
    fn normalize_strips_dot_slash_and_backslashes() {
        assert_eq!(normalize_path(Path::new("./src/a.ts")), "src/a.ts");
        assert_eq!(normalize_path(Path::new("src\\app\\a.ts")), "src/app/a.ts");
    }

    #[test]
    fn normalize_treats_both_root_spellings_alike() {
        assert_eq!(normalize_path(Path::new(".")), "");
        assert_eq!(normalize_path(Path::new("./")), "");
        assert_eq!(normalize_path(Path::new("./.")), "");
        assert_eq!(normalize_path(Path::new(".eslintrc")), ".eslintrc");
        assert!(matcher(&["src/*.ts"], &[]).matches_path(Path::new("./src/a.ts")));
    }
}
