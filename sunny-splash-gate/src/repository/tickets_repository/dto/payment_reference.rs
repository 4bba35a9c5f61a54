use serde::{Deserialize, Serialize};

///
/// Gateway order/payment/signature triple kept with the ticket
/// for audit of the original charge verification.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReference {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}
