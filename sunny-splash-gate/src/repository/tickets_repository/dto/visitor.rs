use serde::{Deserialize, Serialize};

///
/// Visitor covered by a ticket, as persisted.
///
/// `biometric_hash` is present exactly when a landmark vector was
/// supplied at booking time. The raw vector is kept for audit, the
/// digest is what gate matching works with.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub name: String,
    pub age: Option<u8>,
    pub photo: Option<String>,
    pub landmark_vector: Option<Vec<f64>>,
    pub biometric_hash: Option<String>,
}
