use super::HashAlgorithm;
use sha2::{Digest, Sha256};

/// Double SHA-256
///
/// The chain only hashes its genesis header with Quark; every later block
/// header is hashed with SHA256(SHA256(header)).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256d;

impl HashAlgorithm for Sha256d {
    fn name(&self) -> &str {
        "sha256d"
    }

    fn hash(&self, header: &[u8]) -> [u8; 32] {
        let first = Sha256::digest(header);
        Sha256::digest(first).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_empty() {
        // SHA256(SHA256(""))
        assert_eq!(
            hex::encode(Sha256d.hash(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_sha256d_any_length() {
        for len in [0usize, 5, 80, 112, 180] {
            let header = vec![0x5A; len];
            assert_eq!(Sha256d.hash(&header).len(), 32);
        }
    }
}
