//! Light/dark pair detection on flattened color names.
//!
//! A name takes part in a pair when one of its dash-separated segments is
//! the light token: `primary-light`, `light-primary`, `a-light-b`, or just
//! `light`. The dark sibling is the same name with the dark token in that
//! segment. The semantic name drops the token segment entirely.

use regex::Regex;

use crate::config::Options;
use crate::error::{Error, Result};

/// Pieces of a name that matched the light token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePair {
    /// Name of the light entry, as matched.
    pub light_name: String,
    /// Name the dark entry must have.
    pub dark_name: String,
    /// Path before the token segment.
    pub prefix: Option<String>,
    /// Path after the token segment.
    pub suffix: Option<String>,
}

impl ModePair {
    /// The semantic name, or `None` for a bare `light`/`dark` pair.
    pub fn semantic_name(&self) -> Option<String> {
        join_segments(&[self.prefix.as_deref(), self.suffix.as_deref()])
    }
}

/// Matches light-token names and derives their dark counterparts.
///
/// The pattern is compiled once, when the matcher is built.
#[derive(Debug, Clone)]
pub struct PairMatcher {
    light_pattern: Regex,
    dark_id: String,
}

impl PairMatcher {
    /// Builds a matcher for the given tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] if a token is empty, contains the `-`
    /// path separator, or both tokens are the same.
    pub fn new(options: &Options) -> Result<Self> {
        validate_token(&options.light_id)?;
        validate_token(&options.dark_id)?;
        if options.light_id == options.dark_id {
            return Err(Error::InvalidToken {
                token: options.dark_id.clone(),
                reason: "light and dark identifiers must differ",
            });
        }

        let pattern = format!("^(?:(.+)-)?{}(?:-(.+))?$", regex::escape(&options.light_id));
        let light_pattern = Regex::new(&pattern).map_err(|_| Error::InvalidToken {
            token: options.light_id.clone(),
            reason: "cannot be compiled into a name pattern",
        })?;

        Ok(Self {
            light_pattern,
            dark_id: options.dark_id.clone(),
        })
    }

    /// Matches `name` against the light token.
    pub fn match_light(&self, name: &str) -> Option<ModePair> {
        let captures = self.light_pattern.captures(name)?;
        let prefix = captures.get(1).map(|m| m.as_str().to_string());
        let suffix = captures.get(2).map(|m| m.as_str().to_string());
        let segments = [
            prefix.as_deref(),
            Some(self.dark_id.as_str()),
            suffix.as_deref(),
        ];
        let dark_name = join_segments(&segments).unwrap_or_default();

        Some(ModePair {
            light_name: name.to_string(),
            dark_name,
            prefix,
            suffix,
        })
    }
}

fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::InvalidToken {
            token: token.to_string(),
            reason: "must not be empty",
        });
    }
    if token.contains('-') {
        return Err(Error::InvalidToken {
            token: token.to_string(),
            reason: "must not contain the '-' path separator",
        });
    }
    Ok(())
}

/// Dash-joins the present, non-empty segments.
pub(crate) fn join_segments(segments: &[Option<&str>]) -> Option<String> {
    let parts: Vec<&str> = segments
        .iter()
        .flatten()
        .copied()
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> PairMatcher {
        PairMatcher::new(&Options::default()).unwrap()
    }

    #[test]
    fn test_match_suffix_token() {
        let pair = matcher().match_light("primary-light").unwrap();
        assert_eq!(pair.dark_name, "primary-dark");
        assert_eq!(pair.prefix.as_deref(), Some("primary"));
        assert_eq!(pair.suffix, None);
        assert_eq!(pair.semantic_name().as_deref(), Some("primary"));
    }

    #[test]
    fn test_match_leading_token() {
        let pair = matcher().match_light("light-a").unwrap();
        assert_eq!(pair.dark_name, "dark-a");
        assert_eq!(pair.semantic_name().as_deref(), Some("a"));
    }

    #[test]
    fn test_match_middle_token() {
        let pair = matcher().match_light("a-b-light-c").unwrap();
        assert_eq!(pair.dark_name, "a-b-dark-c");
        assert_eq!(pair.semantic_name().as_deref(), Some("a-b-c"));
    }

    #[test]
    fn test_match_bare_token() {
        let pair = matcher().match_light("light").unwrap();
        assert_eq!(pair.dark_name, "dark");
        assert_eq!(pair.semantic_name(), None);
    }

    #[test]
    fn test_prefix_is_greedy() {
        let pair = matcher().match_light("a-light-b-light").unwrap();
        assert_eq!(pair.prefix.as_deref(), Some("a-light-b"));
        assert_eq!(pair.dark_name, "a-light-b-dark");
    }

    #[test]
    fn test_partial_segments_do_not_match() {
        let m = matcher();
        assert!(m.match_light("lightblue").is_none());
        assert!(m.match_light("a-lighter").is_none());
        assert!(m.match_light("highlight-a").is_none());
        assert!(m.match_light("a-dark").is_none());
    }

    #[test]
    fn test_custom_tokens() {
        let m = PairMatcher::new(&Options::new("claro", "oscuro")).unwrap();
        let pair = m.match_light("a-claro").unwrap();
        assert_eq!(pair.dark_name, "a-oscuro");
        assert!(m.match_light("a-light").is_none());
    }

    #[test]
    fn test_tokens_are_escaped() {
        let m = PairMatcher::new(&Options::new("l.t", "d.k")).unwrap();
        assert!(m.match_light("a-l.t").is_some());
        assert!(m.match_light("a-lxt").is_none());
    }

    #[test]
    fn test_rejects_invalid_tokens() {
        assert!(matches!(
            PairMatcher::new(&Options::new("", "dark")),
            Err(Error::InvalidToken { .. })
        ));
        assert!(matches!(
            PairMatcher::new(&Options::new("day-time", "dark")),
            Err(Error::InvalidToken { .. })
        ));
        assert!(matches!(
            PairMatcher::new(&Options::new("same", "same")),
            Err(Error::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_join_segments_skips_absent_and_empty() {
        assert_eq!(join_segments(&[None, Some("a"), Some(""), Some("b")]).as_deref(), Some("a-b"));
        assert_eq!(join_segments(&[None, None]), None);
    }
}
