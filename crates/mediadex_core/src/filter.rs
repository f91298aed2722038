//! Compiled search patterns and shard filters.

use crate::Media;
use mediadex_error::PatternError;
use regex::{Regex, RegexBuilder};

/// A case-insensitive match pattern compiled once per search.
///
/// Carries the compiled regex for in-process matching and an equivalent
/// PostgreSQL ARE source for backends that match server-side.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    query: String,
    regex: Regex,
    postgres_source: String,
}

impl SearchPattern {
    /// Compile a pattern.
    ///
    /// `source` is Rust regex syntax; `postgres_source` must describe the same
    /// language in PostgreSQL ARE syntax.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if `source` does not compile.
    #[track_caller]
    pub fn new(
        query: impl Into<String>,
        source: &str,
        postgres_source: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::new(e.to_string()))?;

        Ok(Self {
            query: query.into(),
            regex,
            postgres_source: postgres_source.into(),
        })
    }

    /// The trimmed query this pattern was built from.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rust regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// PostgreSQL ARE source, to be used with the case-insensitive `~*` operator.
    pub fn postgres_source(&self) -> &str {
        &self.postgres_source
    }

    /// Whether `text` contains a match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Filter applied identically to every shard during a fan-out.
///
/// # Examples
///
/// ```
/// use mediadex_core::{MediaBuilder, MediaFilter, SearchPattern};
///
/// let pattern = SearchPattern::new("cat", r"(?:\b|[.+\-_])cat(?:\b|[.+\-_])", r"(\y|[.+\-_])cat(\y|[.+\-_])").unwrap();
/// let filter = MediaFilter::new(pattern, false, Some("video".to_string()));
///
/// let media = MediaBuilder::default()
///     .file_id("AgAD")
///     .file_name("my_cat.mp4")
///     .file_size(10_i64)
///     .file_type(Some("video".to_string()))
///     .build()
///     .unwrap();
/// assert!(filter.matches(&media));
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct MediaFilter {
    /// Compiled name/caption pattern
    pattern: SearchPattern,
    /// Also match against the caption
    match_caption: bool,
    /// Restrict to this file type
    file_type: Option<String>,
}

impl MediaFilter {
    /// Create a filter.
    pub fn new(pattern: SearchPattern, match_caption: bool, file_type: Option<String>) -> Self {
        Self {
            pattern,
            match_caption,
            file_type,
        }
    }

    /// Evaluate the filter against a record in process.
    pub fn matches(&self, media: &Media) -> bool {
        if let Some(wanted) = &self.file_type
            && media.file_type().as_deref() != Some(wanted.as_str())
        {
            return false;
        }

        if self.pattern.is_match(media.file_name()) {
            return true;
        }

        self.match_caption
            && media
                .caption()
                .as_deref()
                .is_some_and(|caption| self.pattern.is_match(caption))
    }
}
