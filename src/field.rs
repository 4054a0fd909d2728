//! Password field controller - state behind the entry widget.
//!
//! The field owns the current password, its strength tier, and the reveal
//! flag. `password` and `strength` only change together.

use secrecy::{ExposeSecret, SecretString};

use crate::edit::{EditError, TextEdit};
use crate::meter::StrengthMeter;
use crate::policy::StrengthPolicy;
use crate::tier::StrengthTier;

/// Character shown in place of each password character while masked.
pub const MASK_CHAR: char = '•';

#[derive(Debug)]
pub struct PasswordField {
    password: SecretString,
    strength: StrengthTier,
    is_revealed: bool,
    policy: StrengthPolicy,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::with_policy(StrengthPolicy::default())
    }
}

impl PasswordField {
    /// Empty, masked field using the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty, masked field using custom thresholds.
    pub fn with_policy(policy: StrengthPolicy) -> Self {
        Self {
            password: SecretString::new(String::new().into_boxed_str()),
            strength: policy.classify(""),
            is_revealed: false,
            policy,
        }
    }

    /// Replaces the whole text and reclassifies it.
    ///
    /// Any text is accepted, including empty and arbitrarily long strings.
    /// Returns the new strength tier.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) -> StrengthTier {
        let new_text = new_text.into();
        let strength = self.policy.classify(&new_text);
        self.password = SecretString::new(new_text.into_boxed_str());
        self.strength = strength;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password changed: {} chars, strength {:?}",
            self.password.expose_secret().chars().count(),
            self.strength
        );

        self.strength
    }

    /// Applies a range edit to the current text, then reclassifies the
    /// fully resolved text.
    ///
    /// # Errors
    ///
    /// Returns the edit error and leaves the field untouched if the range
    /// does not fit the current text.
    pub fn on_edit(&mut self, edit: &TextEdit) -> Result<StrengthTier, EditError> {
        let resolved = edit.apply(self.password.expose_secret()).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected password edit: {}", _e);
        })?;
        Ok(self.on_text_changed(resolved))
    }

    /// Flips the reveal flag and returns its new value.
    pub fn on_toggle_reveal(&mut self) -> bool {
        self.is_revealed = !self.is_revealed;

        #[cfg(feature = "tracing")]
        tracing::debug!("Password reveal toggled: {}", self.is_revealed);

        self.is_revealed
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn strength(&self) -> StrengthTier {
        self.strength
    }

    pub fn label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    pub fn meter(&self) -> StrengthMeter {
        StrengthMeter::new(self.strength)
    }

    /// Text the input should render: plaintext when revealed, one
    /// [`MASK_CHAR`] per character otherwise.
    pub fn display_text(&self) -> String {
        let pwd = self.password.expose_secret();
        if self.is_revealed {
            pwd.to_string()
        } else {
            pwd.chars().map(|_| MASK_CHAR).collect()
        }
    }
}
