use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct BookTicket {
    pub visitors: Vec<Visitor>,
    #[serde(with = "crate::dto::visit_date_format")]
    pub visit_date: Date,
    pub total_price: f64,
    pub payment: PaymentConfirmation,
}

#[derive(Debug, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub age: Option<u8>,
    /// Face photo reference or base64 blob shown at the gate.
    pub photo: Option<String>,
    /// Flat (x, y, z) face landmark vector from the capture
    /// component. Absent and empty mean the same thing: the
    /// visitor skipped face capture.
    #[serde(default)]
    pub landmark_vector: Vec<f64>,
}

///
/// Payment confirmation triple from the gateway checkout
/// callback. Field names follow the gateway's convention, they
/// are not ours to choose.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}
