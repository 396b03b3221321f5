use crate::error::{QuarkError, QuarkResult};
use std::cmp::Ordering;

/// Parse a compact target written as a big-endian hex number (e.g. "1e0ffff0")
pub fn parse_nbits(hex: &str) -> QuarkResult<u32> {
    let digits = hex.trim().trim_start_matches("0x");
    if digits.is_empty() || digits.len() > 8 {
        return Err(QuarkError::InvalidBits(hex.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| QuarkError::InvalidBits(hex.to_string()))
}

/// Convert nBits compact format to full 256-bit target (big-endian)
pub fn nbits_to_target(nbits: u32) -> [u8; 32] {
    let mut target = [0u8; 32];

    let exponent = (nbits >> 24) as usize;
    let mantissa = nbits & 0x007F_FFFF;

    // Sign bit set: negative targets are unreachable
    if nbits & 0x0080_0000 != 0 {
        return target;
    }

    if exponent <= 3 {
        // Small exponent: shift right
        let shifted = mantissa >> (8 * (3 - exponent));
        target[29] = (shifted >> 16) as u8;
        target[30] = (shifted >> 8) as u8;
        target[31] = shifted as u8;
    } else if exponent <= 32 {
        // Normal range: place mantissa at correct position
        let offset = 32 - exponent;
        target[offset] = (mantissa >> 16) as u8;
        if offset + 1 < 32 {
            target[offset + 1] = (mantissa >> 8) as u8;
        }
        if offset + 2 < 32 {
            target[offset + 2] = mantissa as u8;
        }
    } else {
        // Exponent > 32: target is larger than 256 bits, return max
        target.fill(0xFF);
    }

    target
}

/// Check a hash against a target
///
/// `hash` is the little-endian proof-of-work output; `target` is big-endian.
/// A hash equal to the target is valid.
pub fn meets_target(hash: &[u8; 32], target: &[u8; 32]) -> bool {
    hash.iter().rev().cmp(target.iter()) != Ordering::Greater
}

/// Hex for display: bytes reversed, most significant first
pub fn to_display_hex(hash: &[u8; 32]) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Inverse of [`to_display_hex`]
pub fn from_display_hex(hex: &str) -> QuarkResult<[u8; 32]> {
    let bytes = hex::decode(hex.trim().trim_start_matches("0x"))?;
    if bytes.len() != 32 {
        return Err(QuarkError::InvalidLength {
            field: "hash",
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut hash = [0u8; 32];
    for (dst, src) in hash.iter_mut().zip(bytes.iter().rev()) {
        *dst = *src;
    }
    Ok(hash)
}
