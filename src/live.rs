//! Live evaluation - debounced strength updates over a channel.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::policy::StrengthPolicy;
use crate::tier::StrengthTier;

/// Delay before a pending evaluation runs; a newer keystroke cancels it.
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Waits [`EVALUATION_DEBOUNCE`], then classifies `password` and sends the
/// tier through `tx`.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
pub async fn evaluate_strength_tx(
    password: &SecretString,
    policy: StrengthPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthTier>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("strength evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength evaluation cancelled");
        return;
    }

    let tier = policy.classify(password.expose_secret());

    if let Err(_e) = tx.send(tier).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength tier: {}", _e);
    }
}
