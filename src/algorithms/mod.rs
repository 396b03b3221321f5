/// Proof-of-work hash algorithms
pub mod quark;
pub mod sha256d;

pub use quark::Quark;
pub use sha256d::Sha256d;

use crate::error::{QuarkError, QuarkResult};

/// Trait for block header hash algorithms
pub trait HashAlgorithm: Send + Sync {
    /// Get the algorithm name
    fn name(&self) -> &str;

    /// Compute the 32-byte hash of a header of any length
    fn hash(&self, header: &[u8]) -> [u8; 32];

    /// Check if hash meets target difficulty
    ///
    /// `hash` is the little-endian output of [`HashAlgorithm::hash`];
    /// `target` is big-endian as produced by `nbits_to_target`.
    fn meets_target(&self, hash: &[u8; 32], target: &[u8; 32]) -> bool {
        crate::difficulty::meets_target(hash, target)
    }
}

/// Supported algorithm names
pub const SUPPORTED: [&str; 2] = ["quark", "sha256d"];

/// Look up an algorithm by name (case-insensitive)
pub fn by_name(name: &str) -> QuarkResult<Box<dyn HashAlgorithm>> {
    match name.to_ascii_lowercase().as_str() {
        "quark" => Ok(Box::new(Quark::new())),
        "sha256d" => Ok(Box::new(Sha256d)),
        _ => Err(QuarkError::UnsupportedAlgorithm(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("quark").unwrap().name(), "quark");
        assert_eq!(by_name("QUARK").unwrap().name(), "quark");
        assert_eq!(by_name("sha256d").unwrap().name(), "sha256d");
        assert!(matches!(
            by_name("ethash"),
            Err(QuarkError::UnsupportedAlgorithm(name)) if name == "ethash"
        ));
    }

    #[test]
    fn test_supported_names_resolve() {
        for name in SUPPORTED {
            assert_eq!(by_name(name).unwrap().name(), name);
        }
    }
}
