use super::HashAlgorithm;
use crate::primitives::{Digest512, PrimitiveSet, Slot, SphPrimitives};

/// Output size in bytes (first half of the final 512-bit digest)
pub const QUARK_OUTPUT_SIZE: usize = 32;

/// Bit of digest byte 0 that selects between the two branch candidates
pub const BRANCH_MASK: u8 = 0x08;

/// One step of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Always the same primitive
    Fixed(Slot),
    /// `set` when the selector bit of the incoming digest is 1, `clear` otherwise
    Branch { set: Slot, clear: Slot },
}

impl Stage {
    /// Resolve the primitive for this stage from the selector bit
    pub const fn select(&self, bit: bool) -> Slot {
        match *self {
            Stage::Fixed(slot) => slot,
            Stage::Branch { set, clear } => {
                if bit {
                    set
                } else {
                    clear
                }
            }
        }
    }

    pub const fn is_branch(&self) -> bool {
        matches!(self, Stage::Branch { .. })
    }
}

/// Consensus schedule. Stage 1 hashes the raw input, every later stage
/// hashes the previous 64-byte digest.
pub const SCHEDULE: [Stage; 9] = [
    Stage::Fixed(Slot::Blake),
    Stage::Fixed(Slot::Bmw),
    Stage::Branch { set: Slot::Groestl, clear: Slot::Skein },
    Stage::Fixed(Slot::Groestl),
    Stage::Fixed(Slot::Jh),
    Stage::Branch { set: Slot::Blake, clear: Slot::Bmw },
    Stage::Fixed(Slot::Keccak),
    Stage::Fixed(Slot::Skein),
    Stage::Branch { set: Slot::Keccak, clear: Slot::Jh },
];

/// Selector bit of a running digest
#[inline]
pub fn branch_bit(digest: &Digest512) -> bool {
    digest[0] & BRANCH_MASK != 0
}

/// Quark proof-of-work hash
///
/// Chains the nine stages of [`SCHEDULE`] over a [`PrimitiveSet`] and keeps
/// the first 32 bytes of the last digest. Stateless: one instance can be
/// shared by any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quark<P = SphPrimitives> {
    primitives: P,
}

impl Quark {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PrimitiveSet> Quark<P> {
    /// Build a pipeline over an arbitrary primitive set
    pub fn with_primitives(primitives: P) -> Self {
        Self { primitives }
    }

    /// Hash `input` of any length (including zero) to 32 bytes
    pub fn compute(&self, input: &[u8]) -> [u8; QUARK_OUTPUT_SIZE] {
        self.compute_with_path(input).0
    }

    /// Like [`Quark::compute`], also returning the primitive applied at each stage
    pub fn compute_with_path(&self, input: &[u8]) -> ([u8; QUARK_OUTPUT_SIZE], [Slot; 9]) {
        let mut path = [SCHEDULE[0].select(false); 9];
        let mut digest = self.apply(path[0], input);

        for (index, stage) in SCHEDULE.iter().enumerate().skip(1) {
            let bit = branch_bit(&digest);
            let slot = stage.select(bit);
            if stage.is_branch() {
                tracing::trace!(stage = index + 1, bit, primitive = %slot, "quark branch");
            }
            path[index] = slot;
            digest = self.apply(slot, &digest);
        }

        let mut output = [0u8; QUARK_OUTPUT_SIZE];
        output.copy_from_slice(&digest[..QUARK_OUTPUT_SIZE]);
        (output, path)
    }

    fn apply(&self, slot: Slot, data: &[u8]) -> Digest512 {
        self.primitives.primitive(slot).hash512(data)
    }
}

impl<P: PrimitiveSet + Send + Sync> HashAlgorithm for Quark<P> {
    fn name(&self) -> &str {
        "quark"
    }

    fn hash(&self, header: &[u8]) -> [u8; 32] {
        self.compute(header)
    }
}
