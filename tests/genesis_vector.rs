use quark_hash::difficulty::to_display_hex;
use quark_hash::header::{decode_hex, BlockHeader, GENESIS_HASH};
use quark_hash::{quark_hash, HashAlgorithm, Quark};

const GENESIS_HEADER_HEX: &str = concat!(
    "01000000", // version (1)
    "00000000000000000000000000000000",
    "00000000000000000000000000000000", // prev_block (zeros)
    "d68b88086910db479631619df8523189",
    "d2b65411cb1701ec2887e6b5c63c80ec", // merkle_root
    "fc95ab5b", // timestamp (1537971708)
    "f0ff0f1e", // bits (1e0ffff0)
    "15710b00", // nonce (749845)
);

fn genesis_header() -> Vec<u8> {
    let header = decode_hex(GENESIS_HEADER_HEX).unwrap();
    assert_eq!(header.len(), 80);
    header
}

#[test]
fn test_genesis_block_hash() {
    let result = quark_hash(&genesis_header());

    // Hash is little-endian, reverse for display
    assert_eq!(to_display_hex(&result), GENESIS_HASH);
}

#[test]
fn test_genesis_from_header_struct() {
    let bytes = BlockHeader::genesis().to_bytes();
    assert_eq!(bytes.to_vec(), genesis_header());
    assert_eq!(to_display_hex(&Quark::new().hash(&bytes)), GENESIS_HASH);
}

#[test]
fn test_deterministic() {
    let header = genesis_header();
    assert_eq!(quark_hash(&header), quark_hash(&header));
}

#[test]
fn test_flipping_bit_zero_changes_hash() {
    let header = genesis_header();
    let mut flipped = header.clone();
    flipped[0] ^= 0x01;

    assert_ne!(quark_hash(&header), quark_hash(&flipped));
}

#[test]
fn test_different_inputs_different_outputs() {
    let header = genesis_header();
    let mut other = header.clone();
    other[0] ^= 0xFF;

    assert_ne!(quark_hash(&header), quark_hash(&other));
}

#[test]
fn test_length_independence() {
    let genesis = genesis_header();
    let mut long_input = genesis.clone();
    long_input.extend_from_slice(&[0u8; 100]);

    let inputs: [&[u8]; 4] = [b"", b"short", &genesis, &long_input];
    let hashes: Vec<[u8; 32]> = inputs.iter().map(|input| quark_hash(input)).collect();

    assert_eq!(inputs.map(<[u8]>::len), [0, 5, 80, 180]);
    for i in 0..hashes.len() {
        for j in (i + 1)..hashes.len() {
            assert_ne!(hashes[i], hashes[j]);
        }
    }
}

#[test]
fn test_all_zeros_and_all_ones() {
    let zeros = quark_hash(&[0x00; 80]);
    let ones = quark_hash(&[0xFF; 80]);
    assert_ne!(zeros, ones);
}

#[test]
fn test_concurrent_invocations_agree() {
    let header = genesis_header();
    let expected = quark_hash(&header);
    let quark = Quark::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| quark.compute(&header)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
