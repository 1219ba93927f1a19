use aws_sdk_route53::types::{ResourceRecordSet, RrType};
use regex::Regex;

use crate::error::{SweepError, SweepResult};

/// Minimum pattern length. A floor against trivial patterns (a lone
/// `.` or `*`) silently matching an entire zone.
pub const MIN_PATTERN_LEN: usize = 3;

/// Predicate selecting the A records whose name matches a pattern.
#[derive(Debug)]
pub struct RecordMatcher {
    pattern: Regex,
}

impl RecordMatcher {
    /// Compile a matcher from a regular expression.
    ///
    /// The length floor is checked before compilation, so a pattern
    /// that is both short and malformed reports the length problem.
    pub fn new(pattern: &str) -> SweepResult<Self> {
        if pattern.len() < MIN_PATTERN_LEN {
            return Err(SweepError::PatternTooShort {
                min: MIN_PATTERN_LEN,
                got: pattern.len(),
            });
        }
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// True only for A records whose name contains a pattern match.
    #[must_use]
    pub fn is_match(&self, set: &ResourceRecordSet) -> bool {
        set.r#type() == &RrType::A && self.pattern.is_match(set.name())
    }
}
