/// Errors raised at the input boundary
///
/// Hashing itself never fails; these cover values that are not byte
/// sequences (or not a compact target) before any hashing happens.
#[derive(Debug, thiserror::Error)]
pub enum QuarkError {
    #[error("Input is not a hex-encoded byte sequence: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid compact target (nBits): {0}")]
    InvalidBits(String),

    #[error("Expected {expected} bytes for {field}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported algorithm: {0}. Supported algorithms: quark, sha256d")]
    UnsupportedAlgorithm(String),
}

pub type QuarkResult<T> = Result<T, QuarkError>;
