//! BMW-512 (Blue Midnight Wish, SHA-3 round 2 tweak)
//!
//! 128-byte blocks of little-endian 64-bit words, Merkle–Damgård with a
//! double-pipe chaining value and a final compression keyed by a constant
//! chaining value. Exposed through the `digest` 0.10 traits so it is used
//! exactly like the other primitives.
use digest::consts::U64;
use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update};

const BLOCK_SIZE: usize = 128;
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

const IV512: [u64; 16] = [
    0x8081_8283_8485_8687, 0x8889_8A8B_8C8D_8E8F,
    0x9091_9293_9495_9697, 0x9899_9A9B_9C9D_9E9F,
    0xA0A1_A2A3_A4A5_A6A7, 0xA8A9_AAAB_ACAD_AEAF,
    0xB0B1_B2B3_B4B5_B6B7, 0xB8B9_BABB_BCBD_BEBF,
    0xC0C1_C2C3_C4C5_C6C7, 0xC8C9_CACB_CCCD_CECF,
    0xD0D1_D2D3_D4D5_D6D7, 0xD8D9_DADB_DCDD_DEDF,
    0xE0E1_E2E3_E4E5_E6E7, 0xE8E9_EAEB_ECED_EEEF,
    0xF0F1_F2F3_F4F5_F6F7, 0xF8F9_FAFB_FCFD_FEFF,
];

const FINAL: [u64; 16] = [
    0xAAAA_AAAA_AAAA_AAA0, 0xAAAA_AAAA_AAAA_AAA1,
    0xAAAA_AAAA_AAAA_AAA2, 0xAAAA_AAAA_AAAA_AAA3,
    0xAAAA_AAAA_AAAA_AAA4, 0xAAAA_AAAA_AAAA_AAA5,
    0xAAAA_AAAA_AAAA_AAA6, 0xAAAA_AAAA_AAAA_AAA7,
    0xAAAA_AAAA_AAAA_AAA8, 0xAAAA_AAAA_AAAA_AAA9,
    0xAAAA_AAAA_AAAA_AAAA, 0xAAAA_AAAA_AAAA_AAAB,
    0xAAAA_AAAA_AAAA_AAAC, 0xAAAA_AAAA_AAAA_AAAD,
    0xAAAA_AAAA_AAAA_AAAE, 0xAAAA_AAAA_AAAA_AAAF,
];

/// Terms of W_j: (word index, subtract)
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

/// Rotations r1..r7 of the second expansion
const R: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn s(i: usize, x: u64) -> u64 {
    match i {
        0 => s0(x),
        1 => s1(x),
        2 => s2(x),
        3 => s3(x),
        _ => s4(x),
    }
}

/// AddElement(j) for expansion word 16 + i
fn add_element(m: &[u64; 16], h: &[u64; 16], i: usize) -> u64 {
    let rot = |k: usize| m[k % 16].rotate_left((k % 16) as u32 + 1);
    let k = ((i + 16) as u64).wrapping_mul(0x0555_5555_5555_5555);
    (rot(i)
        .wrapping_add(rot(i + 3))
        .wrapping_sub(rot(i + 10))
        .wrapping_add(k))
        ^ h[(i + 7) % 16]
}

fn compress(h: &[u64; 16], block: &[u8; BLOCK_SIZE]) -> [u64; 16] {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
    }

    // f0: bijective transform of M xor H
    let x: [u64; 16] = std::array::from_fn(|i| m[i] ^ h[i]);
    let mut q = [0u64; 32];
    for (j, terms) in W_TERMS.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(idx, sub)| {
            if sub {
                acc.wrapping_sub(x[idx])
            } else {
                acc.wrapping_add(x[idx])
            }
        });
        q[j] = s(j % 5, w).wrapping_add(h[(j + 1) % 16]);
    }

    // f1: two rounds of expand1, fourteen of expand2
    for j in 16..18 {
        let mut acc = add_element(&m, h, j - 16);
        for k in 0..16 {
            let v = q[j - 16 + k];
            acc = acc.wrapping_add(match k % 4 {
                0 => s1(v),
                1 => s2(v),
                2 => s3(v),
                _ => s0(v),
            });
        }
        q[j] = acc;
    }
    for j in 18..32 {
        let mut acc = add_element(&m, h, j - 16);
        for k in 0..14 {
            let v = q[j - 16 + k];
            acc = acc.wrapping_add(if k % 2 == 0 { v } else { v.rotate_left(R[k / 2]) });
        }
        acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        q[j] = acc;
    }

    // f2: fold
    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);

    out
}

/// Incremental BMW-512 hasher
#[derive(Clone)]
pub struct Bmw512 {
    h: [u64; 16],
    buffer: [u8; BLOCK_SIZE],
    pos: usize,
    bit_len: u64,
}

impl Default for Bmw512 {
    fn default() -> Self {
        Self {
            h: IV512,
            buffer: [0u8; BLOCK_SIZE],
            pos: 0,
            bit_len: 0,
        }
    }
}

impl std::fmt::Debug for Bmw512 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bmw512")
            .field("pos", &self.pos)
            .field("bit_len", &self.bit_len)
            .finish_non_exhaustive()
    }
}

impl HashMarker for Bmw512 {}

impl OutputSizeUser for Bmw512 {
    type OutputSize = U64;
}

impl Update for Bmw512 {
    fn update(&mut self, mut data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));

        while !data.is_empty() {
            let take = (BLOCK_SIZE - self.pos).min(data.len());
            self.buffer[self.pos..self.pos + take].copy_from_slice(&data[..take]);
            self.pos += take;
            data = &data[take..];

            if self.pos == BLOCK_SIZE {
                self.h = compress(&self.h, &self.buffer);
                self.pos = 0;
            }
        }
    }
}

impl FixedOutput for Bmw512 {
    fn finalize_into(self, out: &mut Output<Self>) {
        let mut h = self.h;
        let mut block = self.buffer;
        let pos = self.pos;

        block[pos] = 0x80;
        block[pos + 1..].fill(0);
        if pos + 1 > LENGTH_OFFSET {
            h = compress(&h, &block);
            block = [0u8; BLOCK_SIZE];
        }
        block[LENGTH_OFFSET..].copy_from_slice(&self.bit_len.to_le_bytes());
        h = compress(&h, &block);

        // final compression keyed by the constant chaining value
        let mut last = [0u8; BLOCK_SIZE];
        for (chunk, word) in last.chunks_exact_mut(8).zip(h.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        let words = compress(&FINAL, &last);

        for (chunk, word) in out.chunks_exact_mut(8).zip(words[8..].iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }
}

impl Reset for Bmw512 {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::Digest;

    #[test]
    fn test_streaming_matches_one_shot() {
        let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();
        let one_shot = Bmw512::digest(&data);

        let mut hasher = Bmw512::new();
        for chunk in data.chunks(37) {
            Digest::update(&mut hasher, chunk);
        }
        assert_eq!(hasher.finalize(), one_shot);
    }

    #[test]
    fn test_padding_boundaries() {
        // 119 bytes fits the length in the same block, 120 needs another
        let a = Bmw512::digest([0u8; 119]);
        let b = Bmw512::digest([0u8; 120]);
        let c = Bmw512::digest([0u8; 128]);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut hasher = Bmw512::new();
        Digest::update(&mut hasher, b"discarded");
        Digest::reset(&mut hasher);
        Digest::update(&mut hasher, b"abc");
        assert_eq!(hasher.finalize(), Bmw512::digest(b"abc"));
    }

    #[test]
    fn test_empty_input_is_not_iv() {
        let digest = Bmw512::digest(b"");
        assert_ne!(digest.as_slice(), &[0u8; 64][..]);
    }
}
