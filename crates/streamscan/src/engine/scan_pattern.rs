//! # Scan Patterns

use crate::engine::StreamRegex;

/// Error from compiling a pattern, or from a fancy-engine scan failure
/// (e.g. a backtrack limit).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Error from `regex`.
    #[error(transparent)]
    Basic(#[from] regex::Error),

    /// Error from `fancy_regex`.
    #[error(transparent)]
    Fancy(#[from] Box<fancy_regex::Error>),
}

impl From<fancy_regex::Error> for EngineError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(Box::new(err))
    }
}

/// Label for scan patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for ScanPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl ScanPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern into a [`StreamRegex`].
    ///
    /// ## Returns
    /// A `Result` containing the compiled [`StreamRegex`] or an [`EngineError`].
    pub fn compile(&self) -> Result<StreamRegex, EngineError> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(StreamRegex::from)
                .map_err(EngineError::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(StreamRegex::from)
                .map_err(EngineError::from),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(StreamRegex::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(StreamRegex::from)
                        .map_err(EngineError::from)
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_selects_engine() {
        let basic = ScanPattern::from(r"\w+").compile().unwrap();
        assert!(basic.is_basic());

        // back-references are not expressible in the basic engine.
        let fancy = ScanPattern::from(r"(\w+) \1").compile().unwrap();
        assert!(fancy.is_fancy());
    }

    #[test]
    fn test_explicit_flavors() {
        assert!(
            ScanPattern::Basic(r"a+".to_string())
                .compile()
                .unwrap()
                .is_basic()
        );
        assert!(
            ScanPattern::Fancy(r"a+".to_string())
                .compile()
                .unwrap()
                .is_fancy()
        );
        assert!(ScanPattern::Basic(r"(a) \1".to_string()).compile().is_err());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ScanPattern::from("a|b").as_str(), "a|b");
    }
}
