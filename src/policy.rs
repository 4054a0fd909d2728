//! Strength policy module
//!
//! Holds the length thresholds that separate the strength tiers.

use std::env::VarError;
use thiserror::Error;

use crate::tier::StrengthTier;

/// Minimum number of characters for a `Medium` password.
pub const MEDIUM_MIN_LENGTH: usize = 8;

/// Minimum number of characters for a `Strong` password.
pub const STRONG_MIN_LENGTH: usize = 16;

/// Environment variable overriding [`MEDIUM_MIN_LENGTH`].
pub const MEDIUM_MIN_ENV: &str = "PWD_FIELD_MEDIUM_MIN";

/// Environment variable overriding [`STRONG_MIN_LENGTH`].
pub const STRONG_MIN_ENV: &str = "PWD_FIELD_STRONG_MIN";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Medium threshold must be greater than zero")]
    ZeroThreshold,
    #[error("Strong threshold ({strong}) must be greater than medium threshold ({medium})")]
    ThresholdOrder { medium: usize, strong: usize },
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Inclusive length buckets used by the classifier.
///
/// `0..medium_min` is `Weak`, `medium_min..strong_min` is `Medium`,
/// anything longer is `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    medium_min: usize,
    strong_min: usize,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            medium_min: MEDIUM_MIN_LENGTH,
            strong_min: STRONG_MIN_LENGTH,
        }
    }
}

impl StrengthPolicy {
    /// Builds a policy from custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `medium_min` is zero
    /// - `strong_min` is not greater than `medium_min`
    pub fn new(medium_min: usize, strong_min: usize) -> Result<Self, PolicyError> {
        if medium_min == 0 {
            return Err(PolicyError::ZeroThreshold);
        }
        if strong_min <= medium_min {
            return Err(PolicyError::ThresholdOrder {
                medium: medium_min,
                strong: strong_min,
            });
        }
        Ok(Self {
            medium_min,
            strong_min,
        })
    }

    /// Builds a policy from the environment.
    ///
    /// Priority for each threshold:
    /// 1. Environment variable (`PWD_FIELD_MEDIUM_MIN`, `PWD_FIELD_STRONG_MIN`)
    /// 2. The default constant
    pub fn from_env() -> Result<Self, PolicyError> {
        let medium_min = read_threshold(MEDIUM_MIN_ENV, MEDIUM_MIN_LENGTH)?;
        let strong_min = read_threshold(STRONG_MIN_ENV, STRONG_MIN_LENGTH)?;
        let policy = Self::new(medium_min, strong_min)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Strength policy loaded: medium >= {}, strong >= {}",
            policy.medium_min,
            policy.strong_min
        );

        Ok(policy)
    }

    pub fn medium_min(&self) -> usize {
        self.medium_min
    }

    pub fn strong_min(&self) -> usize {
        self.strong_min
    }

    /// Classifies a character count into a tier.
    pub fn tier_for_length(&self, len: usize) -> StrengthTier {
        if len >= self.strong_min {
            StrengthTier::Strong
        } else if len >= self.medium_min {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    /// Classifies password text into a tier.
    pub fn classify(&self, text: &str) -> StrengthTier {
        self.tier_for_length(text.chars().count())
    }
}

fn read_threshold(var: &'static str, default: usize) -> Result<usize, PolicyError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| PolicyError::InvalidValue { var, value }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => Err(PolicyError::InvalidValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_default_thresholds() {
        let policy = StrengthPolicy::default();
        assert_eq!(policy.medium_min(), 8);
        assert_eq!(policy.strong_min(), 16);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(StrengthPolicy::new(0, 4), Err(PolicyError::ZeroThreshold));
    }

    #[test]
    fn test_new_rejects_inverted_thresholds() {
        assert_eq!(
            StrengthPolicy::new(10, 10),
            Err(PolicyError::ThresholdOrder { medium: 10, strong: 10 })
        );
    }

    #[test]
    fn test_custom_policy_buckets() {
        let policy = StrengthPolicy::new(4, 6).unwrap();
        assert_eq!(policy.classify("abc"), StrengthTier::Weak);
        assert_eq!(policy.classify("abcd"), StrengthTier::Medium);
        assert_eq!(policy.classify("abcdef"), StrengthTier::Strong);
    }

    #[test]
    fn test_classify_counts_characters_not_bytes() {
        let policy = StrengthPolicy::default();
        // 7 characters, 14 bytes
        assert_eq!(policy.classify("ééééééé"), StrengthTier::Weak);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(MEDIUM_MIN_ENV);
        remove_env(STRONG_MIN_ENV);

        assert_eq!(StrengthPolicy::from_env(), Ok(StrengthPolicy::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        set_env(MEDIUM_MIN_ENV, "10");
        set_env(STRONG_MIN_ENV, " 20 ");

        let result = StrengthPolicy::from_env();
        remove_env(MEDIUM_MIN_ENV);
        remove_env(STRONG_MIN_ENV);

        let policy = result.unwrap();
        assert_eq!(policy.medium_min(), 10);
        assert_eq!(policy.strong_min(), 20);
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_from_env_non_unicode_value() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // SAFETY: env tests are serialized
        unsafe { std::env::set_var(MEDIUM_MIN_ENV, OsStr::from_bytes(&[0x31, 0xff, 0x32])); }
        remove_env(STRONG_MIN_ENV);

        let result = StrengthPolicy::from_env();
        remove_env(MEDIUM_MIN_ENV);

        match result {
            Err(PolicyError::InvalidValue { var, value }) => {
                assert_eq!(var, MEDIUM_MIN_ENV);
                assert_eq!(value, "1\u{FFFD}2");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_value() {
        set_env(MEDIUM_MIN_ENV, "eight");
        remove_env(STRONG_MIN_ENV);

        let result = StrengthPolicy::from_env();
        remove_env(MEDIUM_MIN_ENV);

        match result {
            Err(PolicyError::InvalidValue { var, value }) => {
                assert_eq!(var, MEDIUM_MIN_ENV);
                assert_eq!(value, "eight");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_order() {
        remove_env(MEDIUM_MIN_ENV);
        set_env(STRONG_MIN_ENV, "4");

        let result = StrengthPolicy::from_env();
        remove_env(STRONG_MIN_ENV);

        assert!(matches!(
            result,
            Err(PolicyError::ThresholdOrder { medium: 8, strong: 4 })
        ));
    }
}
