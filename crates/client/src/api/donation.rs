use shared_types::{
    donation::validate_amount, AppError, CreateDonationRequest, DonationPaymentResponse,
    PaymentStatusResponse,
};

use crate::http::{ApiClient, Instance};

/// Create a payment intent on the checkout bridge.
///
/// Amount bounds are enforced here, before any request is issued;
/// an out-of-range amount never reaches the network.
pub async fn create_payment(
    api: &ApiClient,
    amount: i64,
) -> Result<DonationPaymentResponse, AppError> {
    validate_amount(amount)?;
    api.post_on(
        Instance::Api2,
        "donation/create-payment/",
        &CreateDonationRequest { amount },
    )
    .await
}

/// One poll of the gateway status for a payment intent.
pub async fn payment_status(
    api: &ApiClient,
    payment_intent_id: &str,
) -> Result<PaymentStatusResponse, AppError> {
    api.get_on(
        Instance::Api2,
        &format!("donation/payment-status/{}/", payment_intent_id),
    )
    .await
}
