//! 512-bit hash primitives chained by the Quark pipeline
//!
//! Each primitive is a zero-sized handle implementing [`Hash512`]:
//! a complete init → update → finalize in one call, producing a 64-byte digest.
//! BLAKE, Grøstl, JH, Keccak and Skein come from their registry crates;
//! BMW-512 has no maintained crate and lives in [`bmw`].
pub mod bmw;

use digest::consts::U64;
use digest::Digest;
use std::fmt;

pub use bmw::Bmw512;

/// Size of every intermediate digest in bytes
pub const HASH512_SIZE: usize = 64;

/// A 512-bit digest
pub type Digest512 = [u8; HASH512_SIZE];

/// Capability interface shared by all six primitives
pub trait Hash512 {
    /// Algorithm name (e.g. "blake512")
    fn name(&self) -> &'static str;

    /// Hash an arbitrary-length input to a 64-byte digest
    fn hash512(&self, data: &[u8]) -> Digest512;
}

/// Copy a primitive's output into a fixed 64-byte digest.
///
/// A primitive producing any other length is broken; abort instead of
/// truncating or padding.
pub(crate) fn into_digest512(name: &str, output: &[u8]) -> Digest512 {
    assert_eq!(
        output.len(),
        HASH512_SIZE,
        "{} returned a {}-byte digest, expected {}",
        name,
        output.len(),
        HASH512_SIZE
    );
    let mut digest = [0u8; HASH512_SIZE];
    digest.copy_from_slice(output);
    digest
}

/// BLAKE-512 (SHA-3 finalist, round 3 tweak)
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake;

impl Hash512 for Blake {
    fn name(&self) -> &'static str {
        "blake512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        // blake-hash is still on the digest 0.9 trait family
        let out = <blake_hash::Blake512 as digest09::Digest>::digest(data);
        into_digest512(self.name(), &out)
    }
}

/// BMW-512 (Blue Midnight Wish)
#[derive(Debug, Clone, Copy, Default)]
pub struct Bmw;

impl Hash512 for Bmw {
    fn name(&self) -> &'static str {
        "bmw512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        into_digest512(self.name(), &Bmw512::digest(data))
    }
}

/// Grøstl-512
#[derive(Debug, Clone, Copy, Default)]
pub struct Groestl;

impl Hash512 for Groestl {
    fn name(&self) -> &'static str {
        "groestl512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        into_digest512(self.name(), &groestl::Groestl512::digest(data))
    }
}

/// JH-512
#[derive(Debug, Clone, Copy, Default)]
pub struct Jh;

impl Hash512 for Jh {
    fn name(&self) -> &'static str {
        "jh512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        into_digest512(self.name(), &jh::Jh512::digest(data))
    }
}

/// Keccak-512 with the original (pre-FIPS 202) padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak;

impl Hash512 for Keccak {
    fn name(&self) -> &'static str {
        "keccak512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        into_digest512(self.name(), &sha3::Keccak512::digest(data))
    }
}

/// Skein-512-512
#[derive(Debug, Clone, Copy, Default)]
pub struct Skein;

impl Hash512 for Skein {
    fn name(&self) -> &'static str {
        "skein512"
    }

    fn hash512(&self, data: &[u8]) -> Digest512 {
        into_digest512(self.name(), &skein::Skein512::<U64>::digest(data))
    }
}

/// Schedule slot naming one of the six primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Blake,
    Bmw,
    Groestl,
    Jh,
    Keccak,
    Skein,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Blake,
        Slot::Bmw,
        Slot::Groestl,
        Slot::Jh,
        Slot::Keccak,
        Slot::Skein,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blake => "blake512",
            Self::Bmw => "bmw512",
            Self::Groestl => "groestl512",
            Self::Jh => "jh512",
            Self::Keccak => "keccak512",
            Self::Skein => "skein512",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps schedule slots to concrete primitives
///
/// The pipeline only sees this trait, so orchestration can be tested
/// against stub primitives.
pub trait PrimitiveSet {
    fn primitive(&self, slot: Slot) -> &dyn Hash512;
}

/// The six real primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct SphPrimitives;

impl PrimitiveSet for SphPrimitives {
    fn primitive(&self, slot: Slot) -> &dyn Hash512 {
        match slot {
            Slot::Blake => &Blake,
            Slot::Bmw => &Bmw,
            Slot::Groestl => &Groestl,
            Slot::Jh => &Jh,
            Slot::Keccak => &Keccak,
            Slot::Skein => &Skein,
        }
    }
}
