// Library interface for the Quark proof-of-work hash
pub mod algorithms;
pub mod difficulty;
pub mod error;
pub mod header;
pub mod primitives;

pub use algorithms::{HashAlgorithm, Quark, Sha256d};
pub use error::{QuarkError, QuarkResult};
pub use header::BlockHeader;

/// Compute the Quark proof-of-work hash of `input`
///
/// Total over all byte sequences: any length, including zero, yields
/// 32 bytes (a little-endian 256-bit integer).
pub fn quark_hash(input: &[u8]) -> [u8; 32] {
    Quark::new().compute(input)
}
