use crate::error::{QuarkError, QuarkResult};

/// Serialized block header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Display-order Quark hash of [`BlockHeader::genesis`]
pub const GENESIS_HASH: &str = "00000e258596876664989374c7ee36445cf5f4f80889af415cc32478214394ea";

/// Genesis merkle root in wire byte order
const GENESIS_MERKLE_ROOT: [u8; 32] = [
    0xd6, 0x8b, 0x88, 0x08, 0x69, 0x10, 0xdb, 0x47, 0x96, 0x31, 0x61, 0x9d, 0xf8, 0x52, 0x31, 0x89,
    0xd2, 0xb6, 0x54, 0x11, 0xcb, 0x17, 0x01, 0xec, 0x28, 0x87, 0xe6, 0xb5, 0xc6, 0x3c, 0x80, 0xec,
];

/// Decode a hex string into bytes
///
/// This is the type check at the binding boundary: anything that is not a
/// byte sequence is rejected here. Any length, including zero, is accepted.
pub fn decode_hex(input: &str) -> QuarkResult<Vec<u8>> {
    let hex = input.trim();
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    Ok(hex::decode(hex)?)
}

/// 80-byte block header
///
/// Hashes are stored in wire byte order; integers are serialized little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: u32,
    pub prev_block: [u8; 32],
    pub merkle_root: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Genesis block header (the only header the chain hashes with Quark)
    pub fn genesis() -> Self {
        Self {
            version: 1,
            prev_block: [0u8; 32],
            merkle_root: GENESIS_MERKLE_ROOT,
            time: 1_537_971_708,
            bits: 0x1e0f_fff0,
            nonce: 749_845,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(&self.prev_block);
        out[36..68].copy_from_slice(&self.merkle_root);
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> QuarkResult<Self> {
        if bytes.len() != HEADER_SIZE {
            return Err(QuarkError::InvalidLength {
                field: "block header",
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let u32_at = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        let mut prev_block = [0u8; 32];
        prev_block.copy_from_slice(&bytes[4..36]);
        let mut merkle_root = [0u8; 32];
        merkle_root.copy_from_slice(&bytes[36..68]);

        Ok(Self {
            version: u32_at(0),
            prev_block,
            merkle_root,
            time: u32_at(68),
            bits: u32_at(72),
            nonce: u32_at(76),
        })
    }

    pub fn from_hex(hex: &str) -> QuarkResult<Self> {
        Self::from_bytes(&decode_hex(hex)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_HEADER_HEX: &str = concat!(
        "01000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "d68b88086910db479631619df8523189d2b65411cb1701ec2887e6b5c63c80ec",
        "fc95ab5b",
        "f0ff0f1e",
        "15710b00",
    );

    #[test]
    fn test_genesis_layout() {
        let bytes = BlockHeader::genesis().to_bytes();
        assert_eq!(hex::encode(bytes), GENESIS_HEADER_HEX);
    }

    #[test]
    fn test_from_hex() {
        let header = BlockHeader::from_hex(GENESIS_HEADER_HEX).unwrap();
        assert_eq!(header, BlockHeader::genesis());
        assert_eq!(header.bits, 0x1e0ffff0);
        assert_eq!(header.nonce, 749_845);
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        assert!(matches!(
            BlockHeader::from_bytes(&[0u8; 79]),
            Err(QuarkError::InvalidLength { expected: 80, actual: 79, .. })
        ));
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex(" 0x0102ff\n").unwrap(), vec![0x01, 0x02, 0xff]);
        assert!(matches!(decode_hex("abc"), Err(QuarkError::InvalidHex(_))));
        assert!(matches!(decode_hex("not bytes"), Err(QuarkError::InvalidHex(_))));
    }
}
