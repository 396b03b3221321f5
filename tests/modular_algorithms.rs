use quark_hash::algorithms::{by_name, SUPPORTED};
use quark_hash::difficulty::nbits_to_target;
use quark_hash::header::BlockHeader;
use quark_hash::{HashAlgorithm, Quark, QuarkError, Sha256d};

#[test]
fn test_algorithm_name_recognition() {
    assert_eq!(SUPPORTED, ["quark", "sha256d"]);
    for name in SUPPORTED {
        assert_eq!(by_name(name).unwrap().name(), name);
    }
    assert!(matches!(by_name("invalid"), Err(QuarkError::UnsupportedAlgorithm(_))));
}

#[test]
fn test_hash_function_signature() {
    // Any length in, 32 bytes out
    let algorithms: Vec<Box<dyn HashAlgorithm>> = vec![Box::new(Quark::new()), Box::new(Sha256d)];
    for algo in &algorithms {
        for len in [0usize, 5, 80, 180] {
            let result: [u8; 32] = algo.hash(&vec![0u8; len]);
            assert_eq!(result.len(), 32);
        }
    }
}

#[test]
fn test_algorithms_disagree() {
    let header = BlockHeader::genesis().to_bytes();
    assert_ne!(Quark::new().hash(&header), Sha256d.hash(&header));
}

#[test]
fn test_target_difficulty_comparison() {
    let header = BlockHeader::genesis();
    let target = nbits_to_target(header.bits);
    let quark = Quark::new();

    let hash = quark.hash(&header.to_bytes());
    assert!(quark.meets_target(&hash, &target));

    // An all-0xFF hash is above any reachable target
    assert!(!quark.meets_target(&[0xFF; 32], &target));
}

#[test]
fn test_trait_objects_are_shareable() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn HashAlgorithm>();
    assert_send_sync::<Quark>();
}
