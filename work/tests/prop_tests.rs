use proptest::prelude::*;

use cairn_types::Digest;
use cairn_work::{validate_proof, work_value, ProofGenerator, PROOF_DIFFICULTY};

proptest! {
    /// Generated proofs always pass their own validation.
    #[test]
    fn generated_proof_always_valid(
        hash_byte in 0u8..=255,
        difficulty in 0u64..50_000,
    ) {
        let digest = Digest::new([hash_byte; 32]);
        let proof = ProofGenerator.generate(&digest, difficulty).unwrap();
        prop_assert!(
            validate_proof(&digest, proof.0, difficulty),
            "generated nonce must pass validation"
        );
    }

    /// At the fixed threshold, the search returns the same value every time.
    #[test]
    fn generation_is_reproducible(hash_bytes in prop::array::uniform32(0u8..)) {
        let digest = Digest::new(hash_bytes);
        let a = ProofGenerator.generate(&digest, PROOF_DIFFICULTY).unwrap();
        let b = ProofGenerator.generate(&digest, PROOF_DIFFICULTY).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(validate_proof(&digest, a.0, PROOF_DIFFICULTY));
    }

    /// Zero difficulty always passes regardless of nonce.
    #[test]
    fn zero_difficulty_always_passes(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in 0u64..1_000_000,
    ) {
        let digest = Digest::new(hash_bytes);
        prop_assert!(validate_proof(&digest, nonce, 0));
    }

    /// Validation agrees with the raw work value.
    #[test]
    fn validation_matches_work_value(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        difficulty in any::<u64>(),
    ) {
        let digest = Digest::new(hash_bytes);
        prop_assert_eq!(
            validate_proof(&digest, nonce, difficulty),
            work_value(&digest, nonce) >= difficulty
        );
    }

    /// Lower difficulty is easier to meet: if valid at D, then valid at D-1.
    #[test]
    fn lower_difficulty_is_easier(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        difficulty in 1u64..u64::MAX,
    ) {
        let digest = Digest::new(hash_bytes);
        if validate_proof(&digest, nonce, difficulty) {
            prop_assert!(validate_proof(&digest, nonce, difficulty - 1));
        }
    }
}
