//! Password entry field library
//!
//! This library provides the state behind a password entry widget: a masked
//! input with a reveal toggle and a three-tier strength indicator that is
//! recomputed on every change.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable live evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FIELD_MEDIUM_MIN`: Minimum characters for a `Medium` password (default: 8)
//! - `PWD_FIELD_STRONG_MIN`: Minimum characters for a `Strong` password (default: 16)
//!
//! # Example
//!
//! ```rust
//! use pwd_field::{PasswordField, StrengthTier, TextEdit};
//!
//! let mut field = PasswordField::new();
//!
//! // Full text reported by the input
//! let tier = field.on_text_changed("hunter2");
//! assert_eq!(tier, StrengthTier::Weak);
//!
//! // Or a range replacement, resolved before classification
//! let tier = field.on_edit(&TextEdit::insert(7, "hunter2")).unwrap();
//! assert_eq!(tier.label(), "Normal");
//!
//! assert!(field.on_toggle_reveal());
//! assert_eq!(field.display_text(), "hunter2hunter2");
//! ```

// Internal modules
mod classifier;
mod edit;
mod field;
mod meter;
mod policy;
mod tier;

#[cfg(feature = "async")]
mod live;

// Public API
pub use classifier::{classify, classify_secret};
pub use edit::{EditError, TextEdit};
pub use field::{MASK_CHAR, PasswordField};
pub use meter::{SEGMENT_COUNT, SegmentState, StrengthMeter};
pub use policy::{
    MEDIUM_MIN_ENV, MEDIUM_MIN_LENGTH, PolicyError, STRONG_MIN_ENV, STRONG_MIN_LENGTH,
    StrengthPolicy,
};
pub use tier::StrengthTier;

#[cfg(feature = "async")]
pub use live::{EVALUATION_DEBOUNCE, evaluate_strength_tx};
