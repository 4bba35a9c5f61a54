use sha2::{Digest, Sha256};

/// Number of fractional digits kept when serializing a coordinate.
///
/// Hashing requires byte identical serialization of identical
/// vectors, so every coordinate is rendered with a fixed precision
/// instead of the shortest float representation.
const COORDINATE_PRECISION: usize = 6;

///
/// Reduces a flat (x, y, z) face landmark vector to a one way
/// digest that can be stored and compared instead of the raw
/// geometry.
///
/// Returns `None` for an empty vector - a visitor without a face
/// capture simply has no biometric digest.
///
pub fn reduce_landmarks(vector: &[f64]) -> Option<String> {
    if vector.is_empty() {
        return None;
    }

    let serialized = vector
        .iter()
        .map(|coordinate| format!("{coordinate:.COORDINATE_PRECISION$}"))
        .collect::<Vec<_>>()
        .join(",");

    let digest = Sha256::digest(serialized.as_bytes());

    Some(hex::encode(digest))
}
