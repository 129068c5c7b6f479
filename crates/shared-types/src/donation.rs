use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Donation bounds enforced client-side before any network call.
pub const MIN_DONATION: i64 = 100;
pub const MAX_DONATION: i64 = 100_000;

/// Substring the external checkout redirects through when returning
/// to the app. Link handling matches on exactly this marker; it is a
/// wire contract with the payment gateway and must not change.
pub const CHECKOUT_RETURN_MARKER: &str = "checkout.paymongo.com/mobile/return";

/// Reject out-of-bounds donation amounts with the user-facing
/// messages the donation screen shows inline.
pub fn validate_amount(amount: i64) -> Result<(), AppError> {
    if amount < MIN_DONATION {
        let fields = [(
            "amount".to_string(),
            format!("Minimum Donation is \u{20B1}{}.00", MIN_DONATION),
        )]
        .into_iter()
        .collect();
        return Err(AppError::validation(
            format!("Minimum Donation is \u{20B1}{}.00", MIN_DONATION),
            fields,
        ));
    }
    if amount > MAX_DONATION {
        let fields = [(
            "amount".to_string(),
            format!("Maximum Donation is \u{20B1}{}.00", MAX_DONATION),
        )]
        .into_iter()
        .collect();
        return Err(AppError::validation(
            format!("Maximum Donation is \u{20B1}{}.00", MAX_DONATION),
            fields,
        ));
    }
    Ok(())
}

/// Request to create a donation payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDonationRequest {
    pub amount: i64,
}

/// Response from the backend's checkout bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationPaymentResponse {
    pub checkout_url: String,
    pub payment_intent_id: String,
}

/// Gateway status as relayed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    pub paid: bool,
    pub status: String,
}
