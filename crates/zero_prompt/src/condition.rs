//! Conditions gating whether a prompt fires.

use zero_config::ParameterMap;

/// A predicate over the parameters resolved so far.
///
/// Conditions may only reference fields resolved earlier. A field that has
/// not been resolved yet is treated as not matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Condition {
    /// Always fires.
    #[default]
    None,
    /// Fires when `key` has been resolved to exactly `expected`.
    KeyMatch { key: String, expected: String },
}

impl Condition {
    pub fn none() -> Self {
        Self::None
    }

    pub fn key_match(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::KeyMatch {
            key: key.into(),
            expected: expected.into(),
        }
    }

    pub fn evaluate(&self, params: &ParameterMap) -> bool {
        match self {
            Self::None => true,
            Self::KeyMatch { key, expected } => {
                params.get(key).is_some_and(|value| value == expected)
            }
        }
    }

    /// Field this condition reads, if any.
    pub fn dependency(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::KeyMatch { key, .. } => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_none_always_true() {
        assert!(Condition::none().evaluate(&ParameterMap::new()));
        assert!(Condition::none().evaluate(&params(&[("a", "b")])));
    }

    #[test]
    fn test_key_match_exact() {
        let condition = Condition::key_match("ShouldPushRepoUpstream", "y");
        assert!(condition.evaluate(&params(&[("ShouldPushRepoUpstream", "y")])));
        assert!(!condition.evaluate(&params(&[("ShouldPushRepoUpstream", "n")])));
        assert!(!condition.evaluate(&params(&[("ShouldPushRepoUpstream", "Y")])));
        assert!(!condition.evaluate(&params(&[("ShouldPushRepoUpstream", "y ")])));
    }

    #[test]
    fn test_key_match_absent_key_is_false() {
        let condition = Condition::key_match("missing", "");
        assert!(!condition.evaluate(&ParameterMap::new()));
        assert!(!condition.evaluate(&params(&[("other", "")])));
    }

    #[test]
    fn test_dependency() {
        assert_eq!(Condition::none().dependency(), None);
        assert_eq!(Condition::key_match("a", "b").dependency(), Some("a"));
    }
}
