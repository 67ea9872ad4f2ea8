//! RoutePattern - Segment-wise path pattern matching

use std::collections::BTreeMap;
use std::fmt;

/// One `/`-separated piece of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly
    Literal(String),
    /// `:name` - matches any single non-empty segment
    Param(String),
}

/// Parameters captured while matching, keyed by parameter name
pub type RouteParams = BTreeMap<String, String>;

/// A compiled route pattern such as `/patient/:id/exam`.
///
/// Empty segments produced by leading, trailing or repeated slashes are
/// discarded, so `/patient/`, `patient` and `//patient` all compile to the
/// same single literal segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

/// Split a path into its non-empty segments
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RoutePattern {
    /// Compile a pattern. Never fails: validation of parameter names is the
    /// table loader's job.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();

        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// The pattern text as written in the table
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the `:param` segments, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }

    /// Check whether a concrete path matches this pattern
    pub fn matches(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }

    /// Match a concrete path, returning the captured parameters.
    ///
    /// Segment counts must be equal; literal segments compare exactly.
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let mut params = RouteParams::new();
        let mut pattern_segments = self.segments.iter();

        for value in split_segments(path) {
            match pattern_segments.next()? {
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), value.to_string());
                }
            }
        }

        if pattern_segments.next().is_some() {
            return None;
        }

        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
