//! Strength classifier - maps password text to a tier by character count.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::StrengthPolicy;
use crate::tier::StrengthTier;

/// Classifies password text with the default thresholds.
///
/// | Characters | Tier     |
/// |------------|----------|
/// | 0-7        | `Weak`   |
/// | 8-15       | `Medium` |
/// | 16+        | `Strong` |
pub fn classify(text: &str) -> StrengthTier {
    StrengthPolicy::default().classify(text)
}

/// Classifies a secret without handing its contents to the caller.
pub fn classify_secret(password: &SecretString) -> StrengthTier {
    classify(password.expose_secret())
}
