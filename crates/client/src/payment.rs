use std::time::Duration;

use tokio::time::{sleep, Instant};

use shared_types::{donation::CHECKOUT_RETURN_MARKER, AppError, DonationPaymentResponse};

use crate::api::donation;
use crate::config::PaymentSettings;
use crate::http::ApiClient;
use crate::storage::{KeyValueStore, CURRENT_PAYMENT_KEY};

/// Gateway status value that marks a payment as definitively failed.
const GATEWAY_FAILED: &str = "failed";

/// Terminal result of a donation payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded,
    Failed,
    /// Poll ceiling reached while the gateway still reported pending.
    TimedOut,
}

/// Donation payment flow: create intent → external checkout →
/// fixed-interval status polling → terminal outcome.
///
/// The pending payment-intent id is persisted before the user leaves
/// for the external browser and survives app restarts; `resume` picks
/// it back up on foreground or deep-link return.
pub struct DonationFlow<S: KeyValueStore> {
    api: ApiClient,
    store: S,
    settings: PaymentSettings,
}

/// Whether a URL is the external checkout's return redirect. Matches
/// on the exact marker substring the gateway uses.
pub fn is_checkout_return(url: &str) -> bool {
    url.contains(CHECKOUT_RETURN_MARKER)
}

impl<S: KeyValueStore> DonationFlow<S> {
    pub fn new(api: ApiClient, store: S, settings: PaymentSettings) -> Self {
        Self { api, store, settings }
    }

    /// Create a payment intent and persist its id for recovery.
    /// Amount bounds are checked before any network call.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, amount: i64) -> Result<DonationPaymentResponse, AppError> {
        let response = donation::create_payment(&self.api, amount).await?;
        self.store.set(CURRENT_PAYMENT_KEY, &response.payment_intent_id)?;
        tracing::info!(payment_intent_id = %response.payment_intent_id, "payment intent created");
        Ok(response)
    }

    /// Poll the gateway with the configured interval and ceiling.
    pub async fn poll_until_complete(
        &self,
        payment_intent_id: &str,
    ) -> Result<PaymentOutcome, AppError> {
        self.poll_with(
            payment_intent_id,
            self.settings.poll_interval(),
            self.settings.poll_ceiling(),
        )
        .await
    }

    /// Poll the gateway with an explicit interval and ceiling.
    ///
    /// Stops on `paid`, on a failed gateway status, or when the
    /// ceiling elapses, so it never hangs. A single tick's transport error
    /// is logged and swallowed; polling continues. Definitive
    /// outcomes clear the persisted intent id; a timeout keeps it so
    /// `resume` can try again.
    #[tracing::instrument(skip(self))]
    pub async fn poll_with(
        &self,
        payment_intent_id: &str,
        interval: Duration,
        ceiling: Duration,
    ) -> Result<PaymentOutcome, AppError> {
        let deadline = Instant::now() + ceiling;

        loop {
            let now = Instant::now();
            if now >= deadline {
                tracing::warn!(payment_intent_id, "payment poll ceiling reached");
                return Ok(PaymentOutcome::TimedOut);
            }
            sleep(interval.min(deadline - now)).await;

            match donation::payment_status(&self.api, payment_intent_id).await {
                Ok(status) if status.paid => {
                    self.store.remove(CURRENT_PAYMENT_KEY)?;
                    tracing::info!(payment_intent_id, "payment confirmed");
                    return Ok(PaymentOutcome::Succeeded);
                }
                Ok(status) if status.status == GATEWAY_FAILED => {
                    self.store.remove(CURRENT_PAYMENT_KEY)?;
                    tracing::warn!(payment_intent_id, "payment failed at gateway");
                    return Ok(PaymentOutcome::Failed);
                }
                Ok(_) => {}
                Err(e) => {
                    // A dropped poll is not a failed payment; keep going
                    // until the ceiling says otherwise.
                    tracing::warn!(payment_intent_id, %e, "payment status poll failed");
                }
            }
        }
    }

    /// Resume polling for a persisted pending payment, if any.
    /// Called on app foreground; a no-op when nothing is pending.
    pub async fn resume(&self) -> Result<Option<PaymentOutcome>, AppError> {
        match self.store.get(CURRENT_PAYMENT_KEY)? {
            Some(id) => self.poll_until_complete(&id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Handle a deep-link return from the external checkout.
    ///
    /// Non-checkout URLs are ignored. For a checkout return the
    /// status is re-checked immediately, ahead of the next poll
    /// tick, and polling resumes only if still pending.
    pub async fn handle_deep_link(&self, url: &str) -> Result<Option<PaymentOutcome>, AppError> {
        if !is_checkout_return(url) {
            return Ok(None);
        }

        let Some(id) = self.store.get(CURRENT_PAYMENT_KEY)? else {
            return Ok(None);
        };

        match donation::payment_status(&self.api, &id).await {
            Ok(status) if status.paid => {
                self.store.remove(CURRENT_PAYMENT_KEY)?;
                return Ok(Some(PaymentOutcome::Succeeded));
            }
            Ok(status) if status.status == GATEWAY_FAILED => {
                self.store.remove(CURRENT_PAYMENT_KEY)?;
                return Ok(Some(PaymentOutcome::Failed));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(payment_intent_id = %id, %e, "status re-check on return failed");
            }
        }

        self.poll_until_complete(&id).await.map(Some)
    }
}
